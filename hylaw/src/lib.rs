//! Hylaw: runtime assertions of algebraic and order-theoretic laws.
//!
//! Given ordinary functions (relations `Fn(&T, &T) -> bool`, operators
//! `Fn(&T, &T) -> T` or `Fn(&T) -> T`) and a handful of sample values, the checks
//! in this crate evaluate whether a named law holds on those samples. They are
//! meant to sit inside unit tests and invariant checks.
//!
//! A passing check is a spot check, not a proof: it only says the law holds for
//! the values given. Use several varied samples per law.
//!
//! Layout
//!  - [`logic`]: implication and bidirectional implication.
//!  - [`relation`]: reflexive, symmetric, transitive, connexive, ... relations.
//!  - [`algebra`]: commutative, associative, identity, zero, distributive, ...
//!    operators.
//!  - [`order`]: preorders, partial and total orders (strict or not), and
//!    equivalences.
//!  - [`law`]: the [`Law`](law::Law) catalog that errors refer to.
//!
//! Every law comes in two forms. `check_*` returns a [`LawResult`](error::LawResult);
//! `assert_*` hands a violation to [`fail::fail`], which panics by default (see
//! [`fail::configure`] to abort instead or to install a reporting hook).
//!
//! Example
//! ```
//! use hylaw::prelude::*;
//!
//! fn eq(x: &i32, y: &i32) -> bool { x == y }
//! fn lt(x: &i32, y: &i32) -> bool { x < y }
//! fn add(x: &i32, y: &i32) -> i32 { x + y }
//! fn mul(x: &i32, y: &i32) -> i32 { x * y }
//!
//! assert_strict_total_order(lt, eq, &1, &1, &3);
//! assert_identity(add, eq, &0, &123);
//! assert_zero(mul, eq, &0, &123);
//!
//! let err = check_reflexive(lt, &3).unwrap_err();
//! assert_eq!(err.law(), Law::Reflexive);
//! ```

/// Laws over operators compared through an equality predicate.
pub mod algebra;
/// The `LawViolated` error.
pub mod error;
/// The fail primitive and its process-wide configuration.
pub mod fail;
/// Catalog of named laws.
pub mod law;
/// Propositional building blocks.
pub mod logic;
mod macros;
/// Compound order and equivalence structures.
pub mod order;
/// Laws over binary relations.
pub mod relation;

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - Every `check_*` and `assert_*` function
    //! - [`Law`], [`LawError`] and [`LawResult`]
    //! - The `law_check!` and `law_assert!` macros
    pub use crate::algebra::*;
    pub use crate::error::{LawError, LawResult};
    pub use crate::law::{Law, LawFamily};
    pub use crate::logic::*;
    pub use crate::order::*;
    pub use crate::relation::*;
    pub use crate::{law_assert, law_check};
}
