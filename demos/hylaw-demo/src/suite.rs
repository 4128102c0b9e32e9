//! Law instances over `i32` replayed by the demo.
//!
//! [`canonical`] holds instances that are expected to pass, [`violation`] a
//! deliberately wrong instance for any law of the catalog.
use hylaw::prelude::*;

fn eq(x: &i32, y: &i32) -> bool {
    x == y
}

fn lesser(x: &i32, y: &i32) -> bool {
    x < y
}

fn lesser_eq(x: &i32, y: &i32) -> bool {
    x <= y
}

fn never(_: &i32, _: &i32) -> bool {
    false
}

fn always(_: &i32, _: &i32) -> bool {
    true
}

fn adjacent(x: &i32, y: &i32) -> bool {
    (x - y).abs() == 1
}

fn same_parity(x: &i32, y: &i32) -> bool {
    (x - y) % 2 == 0
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

fn double(x: &i32) -> i32 {
    x * 2
}

fn halve(x: &i32) -> i32 {
    x / 2
}

/// One law instance and its outcome.
pub struct Outcome {
    pub law: Law,
    pub result: LawResult<()>,
}

impl Outcome {
    fn new(law: Law, result: LawResult<()>) -> Self {
        Outcome { law, result }
    }
}

/// Instances every law of the catalog satisfies.
pub fn canonical() -> Vec<Outcome> {
    vec![
        Outcome::new(Law::Implication, law_check!(check_implication(false, || false))),
        Outcome::new(
            Law::BidirectionalImplication,
            law_check!(check_bidirectional_implication(true, true)),
        ),
        Outcome::new(Law::Reflexive, law_check!(check_reflexive(eq, &3))),
        Outcome::new(Law::Irreflexive, law_check!(check_irreflexive(lesser, &3))),
        Outcome::new(Law::Symmetric, law_check!(check_symmetric(eq, &4, &5))),
        Outcome::new(
            Law::Antisymmetric,
            law_check!(check_antisymmetric(lesser_eq, eq, &1, &2)),
        ),
        Outcome::new(Law::Asymmetric, law_check!(check_asymmetric(lesser, &1, &2))),
        Outcome::new(Law::Transitive, law_check!(check_transitive(eq, &6, &7, &8))),
        Outcome::new(
            Law::Antitransitive,
            law_check!(check_antitransitive(adjacent, &1, &2, &3)),
        ),
        Outcome::new(Law::Connexive, law_check!(check_connexive(lesser_eq, &2, &1))),
        Outcome::new(
            Law::Semiconnexive,
            law_check!(check_semiconnexive(lesser, eq, &1, &1)),
        ),
        Outcome::new(Law::Idempotent, law_check!(check_idempotent(mul, eq, &1))),
        Outcome::new(Law::Commutative, law_check!(check_commutative(add, eq, &1, &2))),
        Outcome::new(
            Law::Associative,
            law_check!(check_associative(add, eq, &1, &2, &3)),
        ),
        Outcome::new(Law::Involutive, law_check!(check_involutive(neg, eq, &123))),
        Outcome::new(Law::Bijective, law_check!(check_bijective(id, id, eq, &123))),
        Outcome::new(
            Law::LeftIdentity,
            law_check!(check_left_identity(add, eq, &0, &123)),
        ),
        Outcome::new(
            Law::RightIdentity,
            law_check!(check_right_identity(sub, eq, &0, &123)),
        ),
        Outcome::new(Law::Identity, law_check!(check_identity(add, eq, &0, &123))),
        Outcome::new(Law::LeftZero, law_check!(check_left_zero(mul, eq, &0, &123))),
        Outcome::new(Law::RightZero, law_check!(check_right_zero(mul, eq, &0, &123))),
        Outcome::new(Law::Zero, law_check!(check_zero(mul, eq, &0, &123))),
        Outcome::new(
            Law::LeftDistributive,
            law_check!(check_left_distributive(mul, add, eq, &1, &2, &3)),
        ),
        Outcome::new(
            Law::RightDistributive,
            law_check!(check_right_distributive(mul, add, eq, &1, &2, &3)),
        ),
        Outcome::new(
            Law::Distributive,
            law_check!(check_distributive(mul, add, eq, &1, &2, &3)),
        ),
        Outcome::new(
            Law::Preorder,
            law_check!(check_preorder(lesser_eq, &1, &2, &3)),
        ),
        Outcome::new(
            Law::PartialOrder,
            law_check!(check_partial_order(lesser_eq, eq, &1, &2, &3)),
        ),
        Outcome::new(
            Law::StrictPartialOrder,
            law_check!(check_strict_partial_order(lesser, &1, &1, &3)),
        ),
        Outcome::new(
            Law::TotalOrder,
            law_check!(check_total_order(lesser_eq, eq, &1, &1, &3)),
        ),
        Outcome::new(
            Law::StrictTotalOrder,
            law_check!(check_strict_total_order(lesser, eq, &1, &1, &3)),
        ),
        Outcome::new(
            Law::Equivalence,
            law_check!(check_equivalence(eq, &1, &1, &3)),
        ),
    ]
}

/// Evaluates an instance of `law` that does not hold.
pub fn violation(law: Law) -> LawResult<()> {
    match law {
        Law::Implication => law_check!(check_implication(true, || false)),
        Law::BidirectionalImplication => law_check!(check_bidirectional_implication(true, false)),
        Law::Reflexive => law_check!(check_reflexive(lesser, &3)),
        Law::Irreflexive => law_check!(check_irreflexive(lesser_eq, &3)),
        Law::Symmetric => law_check!(check_symmetric(lesser, &1, &2)),
        Law::Antisymmetric => law_check!(check_antisymmetric(always, eq, &1, &2)),
        Law::Asymmetric => law_check!(check_asymmetric(lesser_eq, &1, &1)),
        Law::Transitive => law_check!(check_transitive(adjacent, &1, &2, &3)),
        Law::Antitransitive => law_check!(check_antitransitive(lesser, &1, &2, &3)),
        Law::Connexive => law_check!(check_connexive(lesser, &1, &1)),
        Law::Semiconnexive => law_check!(check_semiconnexive(never, eq, &1, &2)),
        Law::Idempotent => law_check!(check_idempotent(add, eq, &1)),
        Law::Commutative => law_check!(check_commutative(sub, eq, &1, &2)),
        Law::Associative => law_check!(check_associative(sub, eq, &1, &2, &3)),
        Law::Involutive => law_check!(check_involutive(double, eq, &21)),
        Law::Bijective => law_check!(check_bijective(halve, double, eq, &21)),
        Law::LeftIdentity => law_check!(check_left_identity(sub, eq, &0, &5)),
        Law::RightIdentity => law_check!(check_right_identity(mul, eq, &0, &5)),
        Law::Identity => law_check!(check_identity(mul, eq, &0, &5)),
        Law::LeftZero => law_check!(check_left_zero(add, eq, &0, &123)),
        Law::RightZero => law_check!(check_right_zero(add, eq, &0, &123)),
        Law::Zero => law_check!(check_zero(add, eq, &0, &123)),
        Law::LeftDistributive => law_check!(check_left_distributive(add, mul, eq, &1, &2, &3)),
        Law::RightDistributive => law_check!(check_right_distributive(add, mul, eq, &1, &2, &3)),
        Law::Distributive => law_check!(check_distributive(add, mul, eq, &1, &2, &3)),
        Law::Preorder => law_check!(check_preorder(lesser, &1, &2, &3)),
        Law::PartialOrder => law_check!(check_partial_order(same_parity, eq, &1, &3, &5)),
        Law::StrictPartialOrder => law_check!(check_strict_partial_order(lesser_eq, &1, &1, &3)),
        Law::TotalOrder => law_check!(check_total_order(lesser, eq, &1, &1, &3)),
        Law::StrictTotalOrder => law_check!(check_strict_total_order(never, eq, &1, &2, &3)),
        Law::Equivalence => law_check!(check_equivalence(lesser_eq, &1, &2, &3)),
    }
}
