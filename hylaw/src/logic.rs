//! Propositional building blocks.
//!
//! Implication is the shape shared by most relational laws: a premise computed
//! from the sample, and a consequent that must only be looked at when the premise
//! holds. The consequent is therefore passed lazily.
use crate::{
    error::{LawError, LawResult},
    fail::enforce,
    law::Law,
};

/// Reports `law` as violated when `premise` holds and `consequent` does not.
///
/// `consequent` is not evaluated when `premise` is false.
#[track_caller]
pub(crate) fn implies(
    law: Law,
    premise: bool,
    consequent: impl FnOnce() -> bool,
) -> LawResult<()> {
    if premise && !consequent() {
        return Err(LawError::violated(law));
    }
    Ok(())
}

/// Reports `law` as violated when `condition` is false.
#[track_caller]
pub(crate) fn holds(law: Law, condition: bool) -> LawResult<()> {
    if !condition {
        return Err(LawError::violated(law));
    }
    Ok(())
}

/// `p => q`.
#[track_caller]
pub fn check_implication(premise: bool, consequent: impl FnOnce() -> bool) -> LawResult<()> {
    implies(Law::Implication, premise, consequent)
}

/// `(p => q) && (q => p)`.
#[track_caller]
pub fn check_bidirectional_implication(p: bool, q: bool) -> LawResult<()> {
    implies(Law::BidirectionalImplication, p, || q)?;
    implies(Law::BidirectionalImplication, q, || p)
}

#[track_caller]
pub fn assert_implication(premise: bool, consequent: impl FnOnce() -> bool) {
    enforce(check_implication(premise, consequent))
}

#[track_caller]
pub fn assert_bidirectional_implication(p: bool, q: bool) {
    enforce(check_bidirectional_implication(p, q))
}
