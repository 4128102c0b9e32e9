//! Laws over operators, compared through a caller-supplied equality predicate.
//!
//! Operators borrow their operands and produce owned values: binary operators are
//! `Fn(&T, &T) -> T`, unary ones `Fn(&T) -> T`. The equality predicate is always
//! explicit so that callers choose what "the same value" means (approximate float
//! equality, equality up to normalization, ...).
//!
//! Identity and zero laws differ in the value they resolve to. An identity
//! element `e` leaves the other operand unchanged (`f(e, x) = x`), an absorbing
//! element `z` swallows it (`f(z, x) = z`).
//!
//! ```
//! use hylaw::algebra::*;
//!
//! fn eq(x: &i32, y: &i32) -> bool { x == y }
//! fn add(x: &i32, y: &i32) -> i32 { x + y }
//! fn mul(x: &i32, y: &i32) -> i32 { x * y }
//!
//! assert!(check_identity(add, eq, &0, &123).is_ok());
//! assert!(check_zero(mul, eq, &0, &123).is_ok());
//! assert!(check_distributive(mul, add, eq, &1, &2, &3).is_ok());
//! ```
use crate::{
    error::LawResult,
    fail::enforce,
    law::Law,
    logic::holds,
};

/// `eq(f(x, x), x)`.
#[track_caller]
pub fn check_idempotent<T, F, E>(f: F, eq: E, x: &T) -> LawResult<()>
where
    F: Fn(&T, &T) -> T,
    E: Fn(&T, &T) -> bool,
{
    holds(Law::Idempotent, eq(&f(x, x), x))
}

/// `eq(f(x, y), f(y, x))`.
#[track_caller]
pub fn check_commutative<T, F, E>(f: F, eq: E, x: &T, y: &T) -> LawResult<()>
where
    F: Fn(&T, &T) -> T,
    E: Fn(&T, &T) -> bool,
{
    holds(Law::Commutative, eq(&f(x, y), &f(y, x)))
}

/// `eq(f(f(x, y), z), f(x, f(y, z)))`.
#[track_caller]
pub fn check_associative<T, F, E>(f: F, eq: E, x: &T, y: &T, z: &T) -> LawResult<()>
where
    F: Fn(&T, &T) -> T,
    E: Fn(&T, &T) -> bool,
{
    let left = f(&f(x, y), z);
    let right = f(x, &f(y, z));
    holds(Law::Associative, eq(&left, &right))
}

#[track_caller]
fn inverse_of<T, F, G, E>(law: Law, f: F, g: G, eq: E, x: &T) -> LawResult<()>
where
    F: Fn(&T) -> T,
    G: Fn(&T) -> T,
    E: Fn(&T, &T) -> bool,
{
    holds(law, eq(&g(&f(x)), x))
}

/// `eq(g(f(x)), x)`: `g` undoes `f` on the sample.
#[track_caller]
pub fn check_bijective<T, F, G, E>(f: F, g: G, eq: E, x: &T) -> LawResult<()>
where
    F: Fn(&T) -> T,
    G: Fn(&T) -> T,
    E: Fn(&T, &T) -> bool,
{
    inverse_of(Law::Bijective, f, g, eq, x)
}

/// `eq(f(f(x)), x)`: [`check_bijective`] with `f` as its own inverse.
#[track_caller]
pub fn check_involutive<T, F, E>(f: F, eq: E, x: &T) -> LawResult<()>
where
    F: Fn(&T) -> T,
    E: Fn(&T, &T) -> bool,
{
    inverse_of(Law::Involutive, &f, &f, eq, x)
}

/// `eq(f(e, x), x)`.
#[track_caller]
pub fn check_left_identity<T, F, E>(f: F, eq: E, e: &T, x: &T) -> LawResult<()>
where
    F: Fn(&T, &T) -> T,
    E: Fn(&T, &T) -> bool,
{
    holds(Law::LeftIdentity, eq(&f(e, x), x))
}

/// `eq(f(x, e), x)`.
#[track_caller]
pub fn check_right_identity<T, F, E>(f: F, eq: E, e: &T, x: &T) -> LawResult<()>
where
    F: Fn(&T, &T) -> T,
    E: Fn(&T, &T) -> bool,
{
    holds(Law::RightIdentity, eq(&f(x, e), x))
}

/// Left then right identity: `eq(f(e, x), x) && eq(f(x, e), x)`.
#[track_caller]
pub fn check_identity<T, F, E>(f: F, eq: E, e: &T, x: &T) -> LawResult<()>
where
    F: Fn(&T, &T) -> T,
    E: Fn(&T, &T) -> bool,
{
    check_left_identity(&f, &eq, e, x).map_err(|err| err.within(Law::Identity))?;
    check_right_identity(&f, &eq, e, x).map_err(|err| err.within(Law::Identity))
}

/// `eq(f(z, x), z)`.
#[track_caller]
pub fn check_left_zero<T, F, E>(f: F, eq: E, z: &T, x: &T) -> LawResult<()>
where
    F: Fn(&T, &T) -> T,
    E: Fn(&T, &T) -> bool,
{
    holds(Law::LeftZero, eq(&f(z, x), z))
}

/// `eq(f(x, z), z)`.
#[track_caller]
pub fn check_right_zero<T, F, E>(f: F, eq: E, z: &T, x: &T) -> LawResult<()>
where
    F: Fn(&T, &T) -> T,
    E: Fn(&T, &T) -> bool,
{
    holds(Law::RightZero, eq(&f(x, z), z))
}

/// Left then right zero: `eq(f(z, x), z) && eq(f(x, z), z)`.
#[track_caller]
pub fn check_zero<T, F, E>(f: F, eq: E, z: &T, x: &T) -> LawResult<()>
where
    F: Fn(&T, &T) -> T,
    E: Fn(&T, &T) -> bool,
{
    check_left_zero(&f, &eq, z, x).map_err(|err| err.within(Law::Zero))?;
    check_right_zero(&f, &eq, z, x).map_err(|err| err.within(Law::Zero))
}

/// `eq(f1(x, f2(y, z)), f2(f1(x, y), f1(x, z)))`.
#[track_caller]
pub fn check_left_distributive<T, F1, F2, E>(
    f1: F1,
    f2: F2,
    eq: E,
    x: &T,
    y: &T,
    z: &T,
) -> LawResult<()>
where
    F1: Fn(&T, &T) -> T,
    F2: Fn(&T, &T) -> T,
    E: Fn(&T, &T) -> bool,
{
    let left = f1(x, &f2(y, z));
    let right = f2(&f1(x, y), &f1(x, z));
    holds(Law::LeftDistributive, eq(&left, &right))
}

/// `eq(f1(f2(y, z), x), f2(f1(y, x), f1(z, x)))`.
#[track_caller]
pub fn check_right_distributive<T, F1, F2, E>(
    f1: F1,
    f2: F2,
    eq: E,
    x: &T,
    y: &T,
    z: &T,
) -> LawResult<()>
where
    F1: Fn(&T, &T) -> T,
    F2: Fn(&T, &T) -> T,
    E: Fn(&T, &T) -> bool,
{
    let left = f1(&f2(y, z), x);
    let right = f2(&f1(y, x), &f1(z, x));
    holds(Law::RightDistributive, eq(&left, &right))
}

/// `f1` distributes over `f2` from both sides.
#[track_caller]
pub fn check_distributive<T, F1, F2, E>(
    f1: F1,
    f2: F2,
    eq: E,
    x: &T,
    y: &T,
    z: &T,
) -> LawResult<()>
where
    F1: Fn(&T, &T) -> T,
    F2: Fn(&T, &T) -> T,
    E: Fn(&T, &T) -> bool,
{
    check_left_distributive(&f1, &f2, &eq, x, y, z)
        .map_err(|err| err.within(Law::Distributive))?;
    check_right_distributive(&f1, &f2, &eq, x, y, z).map_err(|err| err.within(Law::Distributive))
}

#[track_caller]
pub fn assert_idempotent<T>(f: impl Fn(&T, &T) -> T, eq: impl Fn(&T, &T) -> bool, x: &T) {
    enforce(check_idempotent(f, eq, x))
}

#[track_caller]
pub fn assert_commutative<T>(
    f: impl Fn(&T, &T) -> T,
    eq: impl Fn(&T, &T) -> bool,
    x: &T,
    y: &T,
) {
    enforce(check_commutative(f, eq, x, y))
}

#[track_caller]
pub fn assert_associative<T>(
    f: impl Fn(&T, &T) -> T,
    eq: impl Fn(&T, &T) -> bool,
    x: &T,
    y: &T,
    z: &T,
) {
    enforce(check_associative(f, eq, x, y, z))
}

#[track_caller]
pub fn assert_bijective<T>(
    f: impl Fn(&T) -> T,
    g: impl Fn(&T) -> T,
    eq: impl Fn(&T, &T) -> bool,
    x: &T,
) {
    enforce(check_bijective(f, g, eq, x))
}

#[track_caller]
pub fn assert_involutive<T>(f: impl Fn(&T) -> T, eq: impl Fn(&T, &T) -> bool, x: &T) {
    enforce(check_involutive(f, eq, x))
}

#[track_caller]
pub fn assert_left_identity<T>(
    f: impl Fn(&T, &T) -> T,
    eq: impl Fn(&T, &T) -> bool,
    e: &T,
    x: &T,
) {
    enforce(check_left_identity(f, eq, e, x))
}

#[track_caller]
pub fn assert_right_identity<T>(
    f: impl Fn(&T, &T) -> T,
    eq: impl Fn(&T, &T) -> bool,
    e: &T,
    x: &T,
) {
    enforce(check_right_identity(f, eq, e, x))
}

#[track_caller]
pub fn assert_identity<T>(f: impl Fn(&T, &T) -> T, eq: impl Fn(&T, &T) -> bool, e: &T, x: &T) {
    enforce(check_identity(f, eq, e, x))
}

#[track_caller]
pub fn assert_left_zero<T>(f: impl Fn(&T, &T) -> T, eq: impl Fn(&T, &T) -> bool, z: &T, x: &T) {
    enforce(check_left_zero(f, eq, z, x))
}

#[track_caller]
pub fn assert_right_zero<T>(f: impl Fn(&T, &T) -> T, eq: impl Fn(&T, &T) -> bool, z: &T, x: &T) {
    enforce(check_right_zero(f, eq, z, x))
}

#[track_caller]
pub fn assert_zero<T>(f: impl Fn(&T, &T) -> T, eq: impl Fn(&T, &T) -> bool, z: &T, x: &T) {
    enforce(check_zero(f, eq, z, x))
}

#[track_caller]
pub fn assert_left_distributive<T>(
    f1: impl Fn(&T, &T) -> T,
    f2: impl Fn(&T, &T) -> T,
    eq: impl Fn(&T, &T) -> bool,
    x: &T,
    y: &T,
    z: &T,
) {
    enforce(check_left_distributive(f1, f2, eq, x, y, z))
}

#[track_caller]
pub fn assert_right_distributive<T>(
    f1: impl Fn(&T, &T) -> T,
    f2: impl Fn(&T, &T) -> T,
    eq: impl Fn(&T, &T) -> bool,
    x: &T,
    y: &T,
    z: &T,
) {
    enforce(check_right_distributive(f1, f2, eq, x, y, z))
}

#[track_caller]
pub fn assert_distributive<T>(
    f1: impl Fn(&T, &T) -> T,
    f2: impl Fn(&T, &T) -> T,
    eq: impl Fn(&T, &T) -> bool,
    x: &T,
    y: &T,
    z: &T,
) {
    enforce(check_distributive(f1, f2, eq, x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(x: &i32, y: &i32) -> bool {
        x == y
    }

    fn add(x: &i32, y: &i32) -> i32 {
        x + y
    }

    fn sub(x: &i32, y: &i32) -> i32 {
        x - y
    }

    fn mul(x: &i32, y: &i32) -> i32 {
        x * y
    }

    fn neg(x: &i32) -> i32 {
        -x
    }

    fn id(x: &i32) -> i32 {
        *x
    }

    #[test]
    fn zero_resolves_to_the_zero_element() {
        assert!(check_zero(mul, eq, &0, &123).is_ok());
        // Addition has 0 as identity, not as zero: f(0, 123) = 123 != 0.
        let error = check_zero(add, eq, &0, &123).unwrap_err();
        assert_eq!(error.law(), Law::LeftZero);
        assert_eq!(error.compound(), Some(Law::Zero));
    }

    #[test]
    fn identity_resolves_to_the_other_operand() {
        assert!(check_identity(add, eq, &0, &123).is_ok());
        let error = check_identity(mul, eq, &0, &123).unwrap_err();
        assert_eq!(error.law(), Law::LeftIdentity);
        assert_eq!(error.compound(), Some(Law::Identity));
        assert!(check_identity(mul, eq, &1, &123).is_ok());
    }

    #[test]
    fn one_sided_identity_and_zero() {
        // x - 0 = x but 0 - x = -x
        assert!(check_right_identity(sub, eq, &0, &5).is_ok());
        assert!(check_left_identity(sub, eq, &0, &5).is_err());
        assert_eq!(
            check_identity(sub, eq, &0, &5).unwrap_err().law(),
            Law::LeftIdentity
        );

        let first = |x: &i32, _: &i32| *x;
        assert!(check_left_zero(first, eq, &9, &4).is_ok());
        assert_eq!(
            check_zero(first, eq, &9, &4).unwrap_err().law(),
            Law::RightZero
        );
    }

    #[test]
    fn bijective_and_involutive() {
        assert!(check_bijective(neg, neg, eq, &123).is_ok());
        assert!(check_bijective(id, id, eq, &123).is_ok());
        assert!(check_involutive(neg, eq, &123).is_ok());

        let double = |x: &i32| x * 2;
        let halve = |x: &i32| x / 2;
        assert!(check_bijective(double, halve, eq, &21).is_ok());
        // halve then double loses the low bit
        assert!(check_bijective(halve, double, eq, &21).is_err());
        assert_eq!(
            check_involutive(double, eq, &21).unwrap_err().law(),
            Law::Involutive
        );
    }

    #[test]
    fn commutative_associative_idempotent() {
        assert!(check_commutative(add, eq, &1, &2).is_ok());
        assert!(check_commutative(sub, eq, &1, &2).is_err());
        assert!(check_associative(add, eq, &1, &2, &3).is_ok());
        assert!(check_associative(sub, eq, &1, &2, &3).is_err());

        let max = |x: &i32, y: &i32| *x.max(y);
        assert!(check_idempotent(max, eq, &7).is_ok());
        assert!(check_idempotent(mul, eq, &1).is_ok());
        assert!(check_idempotent(add, eq, &1).is_err());
    }

    #[test]
    fn multiplication_distributes_over_addition() {
        assert!(check_distributive(mul, add, eq, &1, &2, &3).is_ok());
        assert!(check_distributive(mul, add, eq, &-4, &7, &11).is_ok());
        // 1 + (2 * 3) = 7, (1 + 2) * (1 + 3) = 12
        let error = check_distributive(add, mul, eq, &1, &2, &3).unwrap_err();
        assert_eq!(error.law(), Law::LeftDistributive);
        assert_eq!(error.compound(), Some(Law::Distributive));
    }

    #[test]
    fn right_distributive_alone() {
        // Division distributes over addition from the right only.
        let div = |x: &f64, y: &f64| x / y;
        let plus = |x: &f64, y: &f64| x + y;
        let close = |x: &f64, y: &f64| (x - y).abs() < 1e-9;
        assert!(check_right_distributive(div, plus, close, &4.0, &2.0, &6.0).is_ok());
        assert!(check_left_distributive(div, plus, close, &4.0, &2.0, &6.0).is_err());
    }

    #[test]
    #[should_panic(expected = "law `left_zero` violated")]
    fn assert_zero_with_identity_element_panics() {
        assert_zero(add, eq, &0, &123);
    }
}
