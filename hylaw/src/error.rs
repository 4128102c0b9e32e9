use std::panic::Location;

use strum::EnumIs;
use thiserror::Error;

use crate::law::Law;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIs, Error)]
pub enum LawError {
    /// A sampled law evaluated to false (or, for implication-style laws, the
    /// premise held and the consequent did not).
    ///
    /// `law` is always the primitive that failed. When the failure happened while
    /// checking a conjunction of laws, `within` names the outermost one the caller
    /// asked for.
    #[error(
        "law `{law}` violated at {location}: {formula}{context}",
        formula = .law.formula(),
        context = render_context(.within, .expression)
    )]
    LawViolated {
        law: Law,
        within: Option<Law>,
        location: &'static Location<'static>,
        expression: Option<&'static str>,
    },
}

fn render_context(within: &Option<Law>, expression: &Option<&'static str>) -> String {
    let mut context = String::new();
    if let Some(compound) = within {
        context.push_str(&format!(" (while checking {})", compound));
    }
    if let Some(expression) = expression {
        context.push_str(&format!(" in `{}`", expression));
    }
    context
}

impl LawError {
    /// Builds a violation of `law` located at the caller.
    #[track_caller]
    pub fn violated(law: Law) -> Self {
        LawError::LawViolated {
            law,
            within: None,
            location: Location::caller(),
            expression: None,
        }
    }

    /// Records the compound law being checked when the violation happened.
    ///
    /// Calling this again overrides the previous value, so the outermost
    /// compound wins when conjunctions are nested.
    pub fn within(self, compound: Law) -> Self {
        let LawError::LawViolated {
            law,
            location,
            expression,
            ..
        } = self;
        LawError::LawViolated {
            law,
            within: Some(compound),
            location,
            expression,
        }
    }

    /// Attaches the literal call-site expression (see [`crate::law_check!`]).
    pub fn with_expression(self, expression: &'static str) -> Self {
        let LawError::LawViolated {
            law,
            within,
            location,
            ..
        } = self;
        LawError::LawViolated {
            law,
            within,
            location,
            expression: Some(expression),
        }
    }

    /// The primitive law that failed.
    pub fn law(&self) -> Law {
        let LawError::LawViolated { law, .. } = self;
        *law
    }

    /// The compound law under check, if any.
    pub fn compound(&self) -> Option<Law> {
        let LawError::LawViolated { within, .. } = self;
        *within
    }

    /// Call site of the failing check.
    pub fn location(&self) -> &'static Location<'static> {
        let LawError::LawViolated { location, .. } = self;
        location
    }

    pub fn expression(&self) -> Option<&'static str> {
        let LawError::LawViolated { expression, .. } = self;
        *expression
    }
}

pub type LawResult<T> = Result<T, LawError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_law_formula_and_location() {
        let error = LawError::violated(Law::Transitive);
        let rendered = error.to_string();
        assert!(rendered.starts_with("law `transitive` violated at "));
        assert!(rendered.contains(file!()));
        assert!(rendered.ends_with("f(x, y) && f(y, z) => f(x, z)"));
    }

    #[test]
    fn outermost_compound_wins() {
        let error = LawError::violated(Law::Reflexive)
            .within(Law::Preorder)
            .within(Law::PartialOrder);
        assert_eq!(error.law(), Law::Reflexive);
        assert_eq!(error.compound(), Some(Law::PartialOrder));
        assert!(
            error
                .to_string()
                .contains("(while checking partial_order)")
        );
    }

    #[test]
    fn expression_is_rendered_last() {
        let error = LawError::violated(Law::Reflexive).with_expression("check_reflexive(lt, &1)");
        assert_eq!(error.expression(), Some("check_reflexive(lt, &1)"));
        assert!(error.to_string().ends_with(" in `check_reflexive(lt, &1)`"));
    }

    #[test]
    fn location_points_at_the_caller() {
        let line = line!() + 1;
        let error = LawError::violated(Law::Zero);
        assert_eq!(error.location().file(), file!());
        assert_eq!(error.location().line(), line);
    }
}
