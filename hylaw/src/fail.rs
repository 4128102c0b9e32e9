//! The fail primitive.
//!
//! Every `assert_*` function in this crate routes a violation through [`fail`],
//! which never returns. By default the violation is logged and turned into a
//! panic carrying the error's `Display` text, so `#[should_panic]` tests and
//! `std::panic::catch_unwind` both work. Hosts that prefer the behavior of a C
//! `assert` can switch to [`ViolationAction::Abort`], and may install a
//! [`FailHook`] to forward violations to their own reporting before the process
//! unwinds or aborts.
//!
//! The configuration is process-wide.
use std::sync::Arc;

use log::error;
use parking_lot::{RwLock, const_rwlock};
use strum::{EnumIs, EnumIter, IntoEnumIterator};

use crate::error::{LawError, LawResult};

/// Callback invoked with every violation before the configured action runs.
pub type FailHook = Arc<dyn Fn(&LawError) + Send + Sync>;

/// What [`fail`] does once the violation has been reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIs, EnumIter)]
pub enum ViolationAction {
    /// Unwind with a panic whose payload is the rendered [`LawError`].
    #[default]
    Panic,
    /// Abort the process immediately.
    Abort,
}

impl ViolationAction {
    /// Creates a [`ViolationAction`] from its string representation.
    pub fn from_name(s: &str) -> Option<Self> {
        ViolationAction::iter().find(|action| action.name() == s)
    }

    /// Returns the string representation of the [`ViolationAction`].
    pub fn name(&self) -> &'static str {
        match self {
            ViolationAction::Panic => "panic",
            ViolationAction::Abort => "abort",
        }
    }
}

/// Process-wide behavior of [`fail`].
#[derive(Clone, Default)]
pub struct FailConfig {
    pub action: ViolationAction,
    pub hook: Option<FailHook>,
}

impl FailConfig {
    pub fn with_action(mut self, action: ViolationAction) -> Self {
        self.action = action;
        self
    }

    pub fn with_hook(mut self, hook: impl Fn(&LawError) + Send + Sync + 'static) -> Self {
        self.hook = Some(Arc::new(hook));
        self
    }
}

impl std::fmt::Debug for FailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FailConfig")
            .field("action", &self.action)
            .field("hook", &self.hook.as_ref().map(|_| "<hook>"))
            .finish()
    }
}

static FAIL_CONFIG: RwLock<Option<FailConfig>> = const_rwlock(None);

/// Installs `config` and returns the configuration it replaces.
pub fn configure(config: FailConfig) -> FailConfig {
    FAIL_CONFIG.write().replace(config).unwrap_or_default()
}

/// Restores the default configuration (panic, no hook).
pub fn reset() {
    FAIL_CONFIG.write().take();
}

/// Returns a copy of the configuration currently in effect.
pub fn current() -> FailConfig {
    FAIL_CONFIG.read().clone().unwrap_or_default()
}

/// Reports `error` and halts the current check.
#[track_caller]
pub fn fail(error: LawError) -> ! {
    // Snapshot first: the hook may itself call `configure`.
    let FailConfig { action, hook } = current();

    error!("{}", error);
    if let Some(hook) = hook {
        hook(&error);
    }

    match action {
        ViolationAction::Panic => panic!("{}", error),
        ViolationAction::Abort => std::process::abort(),
    }
}

/// Passes `result` through, turning a violation into a call to [`fail`].
#[track_caller]
pub fn enforce(result: LawResult<()>) {
    if let Err(error) = result {
        fail(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_names_round_trip() {
        for action in ViolationAction::iter() {
            assert_eq!(ViolationAction::from_name(action.name()), Some(action));
        }
        assert_eq!(ViolationAction::from_name("retry"), None);
        assert!(ViolationAction::default().is_panic());
    }

    #[test]
    fn builder_sets_fields() {
        let config = FailConfig::default()
            .with_action(ViolationAction::Abort)
            .with_hook(|_| {});
        assert!(config.action.is_abort());
        assert!(config.hook.is_some());
        assert!(format!("{:?}", config).contains("<hook>"));
    }
}
