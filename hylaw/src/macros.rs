/// Evaluates a `check_*` call and attaches its source text to a violation.
///
/// Yields the [`LawResult`](crate::error::LawResult) of the check.
///
/// ```
/// use hylaw::{law_check, relation::check_reflexive};
///
/// fn lt(x: &i32, y: &i32) -> bool { x < y }
///
/// let err = law_check!(check_reflexive(lt, &3)).unwrap_err();
/// assert!(err.expression().unwrap().contains("check_reflexive"));
/// ```
#[macro_export]
macro_rules! law_check {
    ($check:expr $(,)?) => {
        ($check).map_err(|err: $crate::error::LawError| err.with_expression(stringify!($check)))
    };
}

/// Like [`law_check!`], but a violation goes through [`fail`](crate::fail::fail).
#[macro_export]
macro_rules! law_assert {
    ($check:expr $(,)?) => {
        $crate::fail::enforce($crate::law_check!($check))
    };
}
