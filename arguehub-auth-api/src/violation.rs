use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rules::Rule;

/// A (field, rule) pair reported when a constraint is not satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Violation {
    /// Wire name of the offending field, e.g. `newPassword`.
    pub field: String,
    /// Rule token, e.g. `min_length:8`.
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "min_length:8"))]
    pub rule: Rule,
}

impl Violation {
    pub fn new(field: impl Into<String>, rule: Rule) -> Self {
        Self {
            field: field.into(),
            rule,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.field, self.rule)
    }
}

/// Rejection of a whole payload. Always holds at least one violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    violations: Vec<Violation>,
}

impl ValidationFailure {
    /// Returns `None` when there is nothing to report.
    pub fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Returns true if `field` failed with `rule`.
    pub fn contains(&self, field: &str, rule: Rule) -> bool {
        self.violations
            .iter()
            .any(|v| v.field == field && v.rule == rule)
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validation failed: ")?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_violation_list_is_not_a_failure() {
        assert!(ValidationFailure::from_violations(Vec::new()).is_none());
    }

    #[test]
    fn display_lists_violations_in_order() {
        let failure = ValidationFailure::from_violations(vec![
            Violation::new("email", Rule::Required),
            Violation::new("password", Rule::MinLength(8)),
        ])
        .unwrap();

        assert_eq!(
            failure.to_string(),
            "Validation failed: email (required), password (min_length:8)"
        );
    }

    #[test]
    fn violation_serializes_with_rule_token() {
        let json = serde_json::to_value(Violation::new("password", Rule::MinLength(8))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "field": "password", "rule": "min_length:8" })
        );
    }
}
