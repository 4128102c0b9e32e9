use std::{
    panic,
    process::ExitCode,
    sync::atomic::{AtomicBool, Ordering},
};

use clap::{Parser, Subcommand};
use hylaw::{
    fail::{self, FailConfig, ViolationAction},
    law::Law,
};
use log::LevelFilter;
use strum::IntoEnumIterator;

mod suite;

#[derive(Parser)]
#[command(about = "Replays algebraic law checks over i32 samples")]
pub struct Arguments {
    /// Action taken once a law is violated (`panic` or `abort`)
    #[arg(long, default_value = "panic", value_parser = parse_action)]
    on_violation: ViolationAction,

    /// Log compound checks (-v) and every pass (-vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the canonical demo suite
    Run,
    /// List every law with its formula
    List,
    /// Check a deliberately wrong instance of a law
    Violate {
        /// Law name, as printed by `list`
        law: String,
    },
}

fn parse_action(s: &str) -> Result<ViolationAction, String> {
    ViolationAction::from_name(s).ok_or_else(|| format!("unknown violation action '{}'", s))
}

/// Set by the fail hook once it has printed a violation.
static REPORTED: AtomicBool = AtomicBool::new(false);

/// Consumes the reported flag; a panic that follows a reported violation is
/// not printed a second time.
fn take_reported(flag: &AtomicBool) -> bool {
    flag.swap(false, Ordering::SeqCst)
}

fn run() {
    for outcome in suite::canonical() {
        match outcome.result {
            Ok(()) => println!("ok    {:<26} {}", outcome.law, outcome.law.formula()),
            Err(error) => fail::fail(error),
        }
    }
}

fn list() {
    for law in Law::iter() {
        let kind = if law.is_compound() {
            format!("{:?}, compound", law.family())
        } else {
            format!("{:?}", law.family())
        };
        println!("{:<26} {:<22} {}", law, kind, law.formula());
    }
}

fn violate(name: &str) -> ExitCode {
    let Some(law) = Law::from_name(name) else {
        eprintln!("Error: unknown law '{}'. See `list`.", name);
        return ExitCode::FAILURE;
    };

    fail::enforce(suite::violation(law));
    eprintln!("Error: the wrong instance of '{}' unexpectedly holds", law);
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let args = Arguments::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    fail::configure(
        FailConfig::default()
            .with_action(args.on_violation)
            .with_hook(|error| {
                eprintln!("FAIL  {}", error);
                REPORTED.store(true, Ordering::SeqCst);
            }),
    );
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if !take_reported(&REPORTED) {
            default_hook(info);
        }
    }));

    let outcome = panic::catch_unwind(|| match &args.command {
        Command::Run => {
            run();
            ExitCode::SUCCESS
        }
        Command::List => {
            list();
            ExitCode::SUCCESS
        }
        Command::Violate { law } => violate(law),
    });

    outcome.unwrap_or(ExitCode::FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reported_flag_silences_one_panic() {
        let flag = AtomicBool::new(false);
        assert!(!take_reported(&flag));

        flag.store(true, Ordering::SeqCst);
        assert!(take_reported(&flag));
        assert!(!take_reported(&flag));
    }

    #[test]
    fn verbosity_and_action_parse() {
        let args =
            Arguments::try_parse_from(["hylaw-demo", "-vv", "--on-violation", "abort", "run"])
                .unwrap();
        assert_eq!(args.verbose, 2);
        assert!(args.on_violation.is_abort());
        assert!(parse_action("retry").is_err());
    }
}
