//! Compound structures: orders and equivalences built from relational laws.
//!
//! A compound check runs its constituents in a fixed order and stops at the
//! first violation. The returned error names the violated primitive in
//! [`LawError::law`](crate::error::LawError::law) and the structure being checked
//! in [`LawError::compound`](crate::error::LawError::compound).
//!
//! All structures take three samples `x`, `y`, `z`. Laws over one or two samples
//! use the leading ones, so for instance the antisymmetric part of a partial
//! order is checked on `(x, y)`.
use log::{debug, trace};

use crate::{
    error::LawResult,
    fail::enforce,
    law::Law,
    relation::{
        check_antisymmetric, check_asymmetric, check_connexive, check_reflexive,
        check_semiconnexive, check_symmetric, check_transitive,
    },
};

fn entering(law: Law) {
    debug!("checking {} ({})", law, law.formula());
}

fn passed(law: Law) -> LawResult<()> {
    trace!("{} holds on sample", law);
    Ok(())
}

/// Reflexive and transitive.
#[track_caller]
pub fn check_preorder<T, F>(f: F, x: &T, y: &T, z: &T) -> LawResult<()>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    entering(Law::Preorder);
    check_reflexive(&f, x).map_err(|err| err.within(Law::Preorder))?;
    check_transitive(&f, x, y, z).map_err(|err| err.within(Law::Preorder))?;
    passed(Law::Preorder)
}

/// Non-strict partial order: an antisymmetric preorder.
#[track_caller]
pub fn check_partial_order<T, F, E>(f: F, eq: E, x: &T, y: &T, z: &T) -> LawResult<()>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
    E: Fn(&T, &T) -> bool,
{
    entering(Law::PartialOrder);
    check_preorder(&f, x, y, z).map_err(|err| err.within(Law::PartialOrder))?;
    check_antisymmetric(&f, &eq, x, y).map_err(|err| err.within(Law::PartialOrder))?;
    passed(Law::PartialOrder)
}

/// Strict partial order: transitive and asymmetric.
///
/// Irreflexivity follows from asymmetry and is not checked separately.
#[track_caller]
pub fn check_strict_partial_order<T, F>(f: F, x: &T, y: &T, z: &T) -> LawResult<()>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    entering(Law::StrictPartialOrder);
    check_transitive(&f, x, y, z).map_err(|err| err.within(Law::StrictPartialOrder))?;
    check_asymmetric(&f, x, y).map_err(|err| err.within(Law::StrictPartialOrder))?;
    passed(Law::StrictPartialOrder)
}

/// Non-strict total order: antisymmetric, transitive and connexive.
#[track_caller]
pub fn check_total_order<T, F, E>(f: F, eq: E, x: &T, y: &T, z: &T) -> LawResult<()>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
    E: Fn(&T, &T) -> bool,
{
    entering(Law::TotalOrder);
    check_antisymmetric(&f, &eq, x, y).map_err(|err| err.within(Law::TotalOrder))?;
    check_transitive(&f, x, y, z).map_err(|err| err.within(Law::TotalOrder))?;
    check_connexive(&f, x, y).map_err(|err| err.within(Law::TotalOrder))?;
    passed(Law::TotalOrder)
}

/// Strict total order: a semiconnex strict partial order.
#[track_caller]
pub fn check_strict_total_order<T, F, E>(f: F, eq: E, x: &T, y: &T, z: &T) -> LawResult<()>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
    E: Fn(&T, &T) -> bool,
{
    entering(Law::StrictTotalOrder);
    check_strict_partial_order(&f, x, y, z).map_err(|err| err.within(Law::StrictTotalOrder))?;
    check_semiconnexive(&f, &eq, x, y).map_err(|err| err.within(Law::StrictTotalOrder))?;
    passed(Law::StrictTotalOrder)
}

/// Equivalence relation: reflexive, symmetric and transitive.
#[track_caller]
pub fn check_equivalence<T, F>(f: F, x: &T, y: &T, z: &T) -> LawResult<()>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    entering(Law::Equivalence);
    check_reflexive(&f, x).map_err(|err| err.within(Law::Equivalence))?;
    check_symmetric(&f, x, y).map_err(|err| err.within(Law::Equivalence))?;
    check_transitive(&f, x, y, z).map_err(|err| err.within(Law::Equivalence))?;
    passed(Law::Equivalence)
}

#[track_caller]
pub fn assert_preorder<T: ?Sized>(f: impl Fn(&T, &T) -> bool, x: &T, y: &T, z: &T) {
    enforce(check_preorder(f, x, y, z))
}

#[track_caller]
pub fn assert_partial_order<T: ?Sized>(
    f: impl Fn(&T, &T) -> bool,
    eq: impl Fn(&T, &T) -> bool,
    x: &T,
    y: &T,
    z: &T,
) {
    enforce(check_partial_order(f, eq, x, y, z))
}

#[track_caller]
pub fn assert_strict_partial_order<T: ?Sized>(f: impl Fn(&T, &T) -> bool, x: &T, y: &T, z: &T) {
    enforce(check_strict_partial_order(f, x, y, z))
}

#[track_caller]
pub fn assert_total_order<T: ?Sized>(
    f: impl Fn(&T, &T) -> bool,
    eq: impl Fn(&T, &T) -> bool,
    x: &T,
    y: &T,
    z: &T,
) {
    enforce(check_total_order(f, eq, x, y, z))
}

#[track_caller]
pub fn assert_strict_total_order<T: ?Sized>(
    f: impl Fn(&T, &T) -> bool,
    eq: impl Fn(&T, &T) -> bool,
    x: &T,
    y: &T,
    z: &T,
) {
    enforce(check_strict_total_order(f, eq, x, y, z))
}

#[track_caller]
pub fn assert_equivalence<T: ?Sized>(f: impl Fn(&T, &T) -> bool, x: &T, y: &T, z: &T) {
    enforce(check_equivalence(f, x, y, z))
}
