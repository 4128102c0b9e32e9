//! Catalog of the laws this crate knows how to check.
//!
//! Every public `check_*`/`assert_*` pair in [`crate::logic`], [`crate::relation`],
//! [`crate::algebra`] and [`crate::order`] corresponds to exactly one [`Law`]. The
//! catalog is what errors refer to and what tooling (such as the demo CLI) uses to
//! enumerate, name and describe the checks.
use strum::{EnumIs, EnumIter, IntoEnumIterator};

/// Sublayer a [`Law`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIs, EnumIter)]
pub enum LawFamily {
    /// Propositional building blocks (implication, equivalence of booleans).
    Logic,
    /// Laws over a binary predicate `f(x, y) -> bool`.
    Relational,
    /// Laws over operators compared through an equality predicate.
    Algebraic,
    /// Named structures defined as conjunctions of other laws.
    Compound,
}

/// A named algebraic or order-theoretic law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIs, EnumIter)]
pub enum Law {
    Implication,
    BidirectionalImplication,

    Reflexive,
    Irreflexive,
    Symmetric,
    Antisymmetric,
    Asymmetric,
    Transitive,
    Antitransitive,
    Connexive,
    Semiconnexive,

    Idempotent,
    Commutative,
    Associative,
    Involutive,
    Bijective,
    LeftIdentity,
    RightIdentity,
    Identity,
    LeftZero,
    RightZero,
    Zero,
    LeftDistributive,
    RightDistributive,
    Distributive,

    Preorder,
    PartialOrder,
    StrictPartialOrder,
    TotalOrder,
    StrictTotalOrder,
    Equivalence,
}

impl Law {
    /// Finds a [`Law`] from its snake_case name (see [`Law::name`]).
    pub fn from_name(s: &str) -> Option<Self> {
        Law::iter().find(|law| law.name() == s)
    }

    /// Returns the snake_case name of the law.
    pub fn name(&self) -> &'static str {
        match self {
            Law::Implication => "implication",
            Law::BidirectionalImplication => "bidirectional_implication",
            Law::Reflexive => "reflexive",
            Law::Irreflexive => "irreflexive",
            Law::Symmetric => "symmetric",
            Law::Antisymmetric => "antisymmetric",
            Law::Asymmetric => "asymmetric",
            Law::Transitive => "transitive",
            Law::Antitransitive => "antitransitive",
            Law::Connexive => "connexive",
            Law::Semiconnexive => "semiconnexive",
            Law::Idempotent => "idempotent",
            Law::Commutative => "commutative",
            Law::Associative => "associative",
            Law::Involutive => "involutive",
            Law::Bijective => "bijective",
            Law::LeftIdentity => "left_identity",
            Law::RightIdentity => "right_identity",
            Law::Identity => "identity",
            Law::LeftZero => "left_zero",
            Law::RightZero => "right_zero",
            Law::Zero => "zero",
            Law::LeftDistributive => "left_distributive",
            Law::RightDistributive => "right_distributive",
            Law::Distributive => "distributive",
            Law::Preorder => "preorder",
            Law::PartialOrder => "partial_order",
            Law::StrictPartialOrder => "strict_partial_order",
            Law::TotalOrder => "total_order",
            Law::StrictTotalOrder => "strict_total_order",
            Law::Equivalence => "equivalence",
        }
    }

    /// The condition asserted by the law, written over the parameter names used
    /// by the matching check function (`f`, `g`, `f1`, `f2`, `eq`, `x`, `y`, `z`,
    /// `e`).
    ///
    /// Compound laws render the conjunction of their constituents.
    pub fn formula(&self) -> &'static str {
        match self {
            Law::Implication => "p => q",
            Law::BidirectionalImplication => "(p => q) && (q => p)",
            Law::Reflexive => "f(x, x)",
            Law::Irreflexive => "!f(x, x)",
            Law::Symmetric => "f(x, y) <=> f(y, x)",
            Law::Antisymmetric => "f(x, y) && f(y, x) => eq(x, y)",
            Law::Asymmetric => "f(x, y) => !f(y, x)",
            Law::Transitive => "f(x, y) && f(y, z) => f(x, z)",
            Law::Antitransitive => "f(x, y) && f(y, z) => !f(x, z)",
            Law::Connexive => "f(x, y) || f(y, x)",
            Law::Semiconnexive => "f(x, y) || f(y, x) || eq(x, y)",
            Law::Idempotent => "eq(f(x, x), x)",
            Law::Commutative => "eq(f(x, y), f(y, x))",
            Law::Associative => "eq(f(f(x, y), z), f(x, f(y, z)))",
            Law::Involutive => "eq(f(f(x)), x)",
            Law::Bijective => "eq(g(f(x)), x)",
            Law::LeftIdentity => "eq(f(e, x), x)",
            Law::RightIdentity => "eq(f(x, e), x)",
            Law::Identity => "eq(f(e, x), x) && eq(f(x, e), x)",
            Law::LeftZero => "eq(f(z, x), z)",
            Law::RightZero => "eq(f(x, z), z)",
            Law::Zero => "eq(f(z, x), z) && eq(f(x, z), z)",
            Law::LeftDistributive => "eq(f1(x, f2(y, z)), f2(f1(x, y), f1(x, z)))",
            Law::RightDistributive => "eq(f1(f2(y, z), x), f2(f1(y, x), f1(z, x)))",
            Law::Distributive => {
                "eq(f1(x, f2(y, z)), f2(f1(x, y), f1(x, z))) && eq(f1(f2(y, z), x), f2(f1(y, x), f1(z, x)))"
            }
            Law::Preorder => "reflexive && transitive",
            Law::PartialOrder => "preorder && antisymmetric",
            Law::StrictPartialOrder => "transitive && asymmetric",
            Law::TotalOrder => "antisymmetric && transitive && connexive",
            Law::StrictTotalOrder => "strict_partial_order && semiconnexive",
            Law::Equivalence => "reflexive && symmetric && transitive",
        }
    }

    /// Returns the sublayer this law belongs to.
    pub fn family(&self) -> LawFamily {
        match self {
            Law::Implication | Law::BidirectionalImplication => LawFamily::Logic,
            Law::Reflexive
            | Law::Irreflexive
            | Law::Symmetric
            | Law::Antisymmetric
            | Law::Asymmetric
            | Law::Transitive
            | Law::Antitransitive
            | Law::Connexive
            | Law::Semiconnexive => LawFamily::Relational,
            Law::Idempotent
            | Law::Commutative
            | Law::Associative
            | Law::Involutive
            | Law::Bijective
            | Law::LeftIdentity
            | Law::RightIdentity
            | Law::Identity
            | Law::LeftZero
            | Law::RightZero
            | Law::Zero
            | Law::LeftDistributive
            | Law::RightDistributive
            | Law::Distributive => LawFamily::Algebraic,
            Law::Preorder
            | Law::PartialOrder
            | Law::StrictPartialOrder
            | Law::TotalOrder
            | Law::StrictTotalOrder
            | Law::Equivalence => LawFamily::Compound,
        }
    }

    /// Number of sample values the matching check takes.
    ///
    /// Logic laws take booleans rather than samples and report `0`. For identity
    /// and zero laws the distinguished element (`e` or `z`) is counted.
    pub fn samples(&self) -> usize {
        match self {
            Law::Implication | Law::BidirectionalImplication => 0,
            Law::Reflexive | Law::Irreflexive | Law::Idempotent => 1,
            Law::Involutive | Law::Bijective => 1,
            Law::Symmetric
            | Law::Antisymmetric
            | Law::Asymmetric
            | Law::Connexive
            | Law::Semiconnexive
            | Law::Commutative => 2,
            Law::LeftIdentity
            | Law::RightIdentity
            | Law::Identity
            | Law::LeftZero
            | Law::RightZero
            | Law::Zero => 2,
            Law::Transitive | Law::Antitransitive | Law::Associative => 3,
            Law::LeftDistributive | Law::RightDistributive | Law::Distributive => 3,
            Law::Preorder
            | Law::PartialOrder
            | Law::StrictPartialOrder
            | Law::TotalOrder
            | Law::StrictTotalOrder
            | Law::Equivalence => 3,
        }
    }

    /// Laws this one is checked through, in evaluation order.
    ///
    /// Empty for primitive laws. Nested compounds are listed as themselves; use
    /// [`Law::primitives`] for the flattened sequence.
    pub fn constituents(&self) -> &'static [Law] {
        match self {
            Law::Identity => &[Law::LeftIdentity, Law::RightIdentity],
            Law::Zero => &[Law::LeftZero, Law::RightZero],
            Law::Distributive => &[Law::LeftDistributive, Law::RightDistributive],
            Law::Preorder => &[Law::Reflexive, Law::Transitive],
            Law::PartialOrder => &[Law::Preorder, Law::Antisymmetric],
            Law::StrictPartialOrder => &[Law::Transitive, Law::Asymmetric],
            Law::TotalOrder => &[Law::Antisymmetric, Law::Transitive, Law::Connexive],
            Law::StrictTotalOrder => &[Law::StrictPartialOrder, Law::Semiconnexive],
            Law::Equivalence => &[Law::Reflexive, Law::Symmetric, Law::Transitive],
            _ => &[],
        }
    }

    /// Returns `true` when the law is a conjunction of other laws.
    pub fn is_compound(&self) -> bool {
        !self.constituents().is_empty()
    }

    /// Primitive laws evaluated by this law, flattened, in evaluation order.
    pub fn primitives(&self) -> Vec<Law> {
        if !self.is_compound() {
            return vec![*self];
        }

        self.constituents()
            .iter()
            .flat_map(|law| law.primitives())
            .collect()
    }
}

impl std::fmt::Display for Law {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_and_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for law in Law::iter() {
            assert!(seen.insert(law.name()), "duplicate name {}", law.name());
            assert_eq!(Law::from_name(law.name()), Some(law));
        }
        assert_eq!(Law::from_name("not_a_law"), None);
    }

    #[test]
    fn compound_structures_flatten_in_order() {
        assert_eq!(
            Law::PartialOrder.primitives(),
            vec![Law::Reflexive, Law::Transitive, Law::Antisymmetric]
        );
        assert_eq!(
            Law::StrictTotalOrder.primitives(),
            vec![Law::Transitive, Law::Asymmetric, Law::Semiconnexive]
        );
        assert_eq!(Law::Reflexive.primitives(), vec![Law::Reflexive]);
    }

    #[test]
    fn strict_partial_order_does_not_recheck_irreflexivity() {
        assert!(!Law::StrictPartialOrder.primitives().contains(&Law::Irreflexive));
        assert!(!Law::StrictTotalOrder.primitives().contains(&Law::Irreflexive));
    }

    #[test]
    fn order_structures_are_in_the_compound_family() {
        for law in Law::iter().filter(|law| law.family().is_compound()) {
            assert!(law.is_compound(), "{law} should be compound");
            assert_eq!(law.samples(), 3);
        }
        assert!(Law::Identity.family().is_algebraic());
        assert!(Law::Identity.is_compound());
    }

    #[test]
    fn zero_formula_resolves_to_the_zero_element() {
        assert_eq!(Law::LeftZero.formula(), "eq(f(z, x), z)");
        assert_eq!(Law::RightZero.formula(), "eq(f(x, z), z)");
        assert_eq!(Law::LeftIdentity.formula(), "eq(f(e, x), x)");
    }
}
