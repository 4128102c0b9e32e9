//! Laws over a binary relation `f(x, y) -> bool`.
//!
//! Each check evaluates a fixed formula on the given sample and returns
//! [`LawError::LawViolated`](crate::error::LawError::LawViolated) when it does not
//! hold. A passing check only says the law holds for that sample.
//!
//! Implication-style laws (antisymmetric, asymmetric, transitive, antitransitive)
//! never evaluate their consequent when the premise is false, and never fail in
//! that case. Conjunctions and disjunctions short-circuit left to right.
//!
//! ```
//! use hylaw::relation::*;
//!
//! fn le(x: &i32, y: &i32) -> bool { x <= y }
//! fn eq(x: &i32, y: &i32) -> bool { x == y }
//!
//! assert!(check_reflexive(le, &3).is_ok());
//! assert!(check_antisymmetric(le, eq, &1, &2).is_ok());
//! // Premise `3 <= 1 && 1 <= 2` is false: nothing to check.
//! assert!(check_transitive(le, &3, &1, &2).is_ok());
//! ```
use crate::{
    error::LawResult,
    fail::enforce,
    law::Law,
    logic::{holds, implies},
};

/// `f(x, x)`.
#[track_caller]
pub fn check_reflexive<T, F>(f: F, x: &T) -> LawResult<()>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    holds(Law::Reflexive, f(x, x))
}

/// `!f(x, x)`.
#[track_caller]
pub fn check_irreflexive<T, F>(f: F, x: &T) -> LawResult<()>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    holds(Law::Irreflexive, !f(x, x))
}

/// `f(x, y) <=> f(y, x)`.
#[track_caller]
pub fn check_symmetric<T, F>(f: F, x: &T, y: &T) -> LawResult<()>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    let forward = f(x, y);
    let backward = f(y, x);
    holds(Law::Symmetric, forward == backward)
}

/// `f(x, y) && f(y, x) => eq(x, y)`.
#[track_caller]
pub fn check_antisymmetric<T, F, E>(f: F, eq: E, x: &T, y: &T) -> LawResult<()>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
    E: Fn(&T, &T) -> bool,
{
    implies(Law::Antisymmetric, f(x, y) && f(y, x), || eq(x, y))
}

/// `f(x, y) => !f(y, x)`.
#[track_caller]
pub fn check_asymmetric<T, F>(f: F, x: &T, y: &T) -> LawResult<()>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    implies(Law::Asymmetric, f(x, y), || !f(y, x))
}

/// `f(x, y) && f(y, z) => f(x, z)`.
#[track_caller]
pub fn check_transitive<T, F>(f: F, x: &T, y: &T, z: &T) -> LawResult<()>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    implies(Law::Transitive, f(x, y) && f(y, z), || f(x, z))
}

/// `f(x, y) && f(y, z) => !f(x, z)`.
#[track_caller]
pub fn check_antitransitive<T, F>(f: F, x: &T, y: &T, z: &T) -> LawResult<()>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    implies(Law::Antitransitive, f(x, y) && f(y, z), || !f(x, z))
}

/// `f(x, y) || f(y, x)`.
#[track_caller]
pub fn check_connexive<T, F>(f: F, x: &T, y: &T) -> LawResult<()>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    holds(Law::Connexive, f(x, y) || f(y, x))
}

/// `f(x, y) || f(y, x) || eq(x, y)`.
#[track_caller]
pub fn check_semiconnexive<T, F, E>(f: F, eq: E, x: &T, y: &T) -> LawResult<()>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
    E: Fn(&T, &T) -> bool,
{
    holds(Law::Semiconnexive, f(x, y) || f(y, x) || eq(x, y))
}

#[track_caller]
pub fn assert_reflexive<T: ?Sized>(f: impl Fn(&T, &T) -> bool, x: &T) {
    enforce(check_reflexive(f, x))
}

#[track_caller]
pub fn assert_irreflexive<T: ?Sized>(f: impl Fn(&T, &T) -> bool, x: &T) {
    enforce(check_irreflexive(f, x))
}

#[track_caller]
pub fn assert_symmetric<T: ?Sized>(f: impl Fn(&T, &T) -> bool, x: &T, y: &T) {
    enforce(check_symmetric(f, x, y))
}

#[track_caller]
pub fn assert_antisymmetric<T: ?Sized>(
    f: impl Fn(&T, &T) -> bool,
    eq: impl Fn(&T, &T) -> bool,
    x: &T,
    y: &T,
) {
    enforce(check_antisymmetric(f, eq, x, y))
}

#[track_caller]
pub fn assert_asymmetric<T: ?Sized>(f: impl Fn(&T, &T) -> bool, x: &T, y: &T) {
    enforce(check_asymmetric(f, x, y))
}

#[track_caller]
pub fn assert_transitive<T: ?Sized>(f: impl Fn(&T, &T) -> bool, x: &T, y: &T, z: &T) {
    enforce(check_transitive(f, x, y, z))
}

#[track_caller]
pub fn assert_antitransitive<T: ?Sized>(f: impl Fn(&T, &T) -> bool, x: &T, y: &T, z: &T) {
    enforce(check_antitransitive(f, x, y, z))
}

#[track_caller]
pub fn assert_connexive<T: ?Sized>(f: impl Fn(&T, &T) -> bool, x: &T, y: &T) {
    enforce(check_connexive(f, x, y))
}

#[track_caller]
pub fn assert_semiconnexive<T: ?Sized>(
    f: impl Fn(&T, &T) -> bool,
    eq: impl Fn(&T, &T) -> bool,
    x: &T,
    y: &T,
) {
    enforce(check_semiconnexive(f, eq, x, y))
}
