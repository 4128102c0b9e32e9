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

fn add(x: &i32, y: &i32) -> i32 {
    x + y
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
fn canonical_demo_passes() {
    assert_implication(false, || false);
    assert_bidirectional_implication(true, true);

    assert_reflexive(eq, &3);
    assert_symmetric(eq, &4, &5);
    assert_transitive(eq, &6, &7, &8);
    assert_equivalence(eq, &1, &1, &3);

    assert_bijective(id, id, eq, &123);
    assert_involutive(neg, eq, &123);

    assert_commutative(add, eq, &1, &2);
    assert_associative(add, eq, &1, &2, &3);
    assert_distributive(mul, add, eq, &1, &2, &3);

    assert_idempotent(mul, eq, &1);

    assert_identity(add, eq, &0, &123);
    assert_zero(mul, eq, &0, &123);

    assert_preorder(lesser_eq, &1, &2, &3);

    assert_partial_order(lesser_eq, eq, &1, &2, &3);
    assert_strict_partial_order(lesser, &1, &1, &3);
    assert_total_order(lesser_eq, eq, &1, &1, &3);
    assert_strict_total_order(lesser, eq, &1, &1, &3);
}

#[test]
fn reflexive_equality_not_less_than() {
    for x in [-100, -1, 0, 1, 42] {
        assert!(check_reflexive(eq, &x).is_ok());
        assert!(check_reflexive(lesser, &x).is_err());
    }
}

#[test]
fn symmetric_less_than_fails_for_distinct_samples() {
    for (x, y) in [(1, 2), (2, 1), (-5, 5), (0, 9)] {
        assert!(check_symmetric(eq, &x, &y).is_ok());
        assert_eq!(
            check_symmetric(lesser, &x, &y).unwrap_err().law(),
            Law::Symmetric
        );
    }
}

#[test]
fn transitive_with_false_premise_does_not_fire() {
    assert!(check_transitive(lesser_eq, &1, &2, &3).is_ok());
    assert!(check_transitive(lesser_eq, &3, &1, &2).is_ok());
    assert!(check_transitive(lesser_eq, &2, &2, &2).is_ok());
}

#[test]
fn zero_is_not_identity() {
    // The absorbing element resolves to itself ...
    assert!(check_zero(mul, eq, &0, &123).is_ok());
    assert!(check_left_zero(mul, eq, &0, &123).is_ok());
    assert!(check_right_zero(mul, eq, &0, &123).is_ok());
    // ... while the identity element resolves to the other operand.
    assert!(check_identity(add, eq, &0, &123).is_ok());

    // Swapping the roles must fail on both sides.
    assert!(check_left_zero(add, eq, &0, &123).is_err());
    assert!(check_right_zero(add, eq, &0, &123).is_err());
    assert!(check_left_identity(mul, eq, &0, &123).is_err());
    assert!(check_right_identity(mul, eq, &0, &123).is_err());
}

#[test]
fn partial_order_rejects_non_antisymmetric_relation() {
    assert!(check_partial_order(lesser_eq, eq, &1, &2, &3).is_ok());

    // Same parity: reflexive and transitive, but 1 ~ 3 and 3 ~ 1 with 1 != 3.
    let same_parity = |x: &i32, y: &i32| (x - y) % 2 == 0;
    assert!(check_preorder(same_parity, &1, &3, &5).is_ok());
    let error = check_partial_order(same_parity, eq, &1, &3, &5).unwrap_err();
    assert_eq!(error.law(), Law::Antisymmetric);
    assert_eq!(error.compound(), Some(Law::PartialOrder));
}

#[test]
fn violations_point_at_the_calling_line() {
    let line = line!() + 1;
    let error = check_partial_order(lesser, eq, &1, &2, &3).unwrap_err();
    assert_eq!(error.location().file(), file!());
    assert_eq!(error.location().line(), line);

    let line = line!() + 1;
    let error = check_distributive(add, mul, eq, &1, &2, &3).unwrap_err();
    assert_eq!(error.location().line(), line);
}

#[test]
fn law_check_records_the_expression() {
    let error = law_check!(check_irreflexive(lesser_eq, &7)).unwrap_err();
    assert_eq!(error.law(), Law::Irreflexive);
    let expression = error.expression().expect("expression captured");
    assert!(expression.contains("check_irreflexive"));
    assert!(expression.contains("lesser_eq"));
    assert!(error.to_string().contains(expression));

    assert!(law_check!(check_irreflexive(lesser, &7)).is_ok());
}

#[test]
#[should_panic(expected = "check_commutative")]
fn law_assert_panics_with_the_expression() {
    let sub = |x: &i32, y: &i32| x - y;
    law_assert!(check_commutative(sub, eq, &1, &2));
}

#[test]
fn strings_and_slices_work_as_samples() {
    let string_eq = |x: &String, y: &String| x == y;
    let concat = |x: &String, y: &String| format!("{x}{y}");
    let empty = String::new();
    let hello = String::from("hello");
    let world = String::from("world");

    assert!(check_associative(concat, string_eq, &hello, &empty, &world).is_ok());
    assert!(check_identity(concat, string_eq, &empty, &hello).is_ok());
    assert!(check_commutative(concat, string_eq, &hello, &world).is_err());

    let shorter_or_equal = |x: &[u8], y: &[u8]| x.len() <= y.len();
    let slice_eq = |x: &[u8], y: &[u8]| x == y;
    let (a, ab, abc, cd): (&[u8], &[u8], &[u8], &[u8]) = (b"a", b"ab", b"abc", b"cd");
    assert!(check_preorder(shorter_or_equal, a, ab, abc).is_ok());
    // Preorder only: distinct slices of equal length relate both ways.
    assert!(check_antisymmetric(shorter_or_equal, slice_eq, ab, cd).is_err());
}
