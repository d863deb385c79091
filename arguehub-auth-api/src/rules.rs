use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

/// Minimum number of characters accepted for any password field.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// A constraint a field value must satisfy.
///
/// On the wire a rule is its token: `required`, `email`, `min_length:8`
/// or `string`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Rule {
    /// Field must be present and non-empty.
    Required,
    /// Field must be an email address whose domain contains a dot.
    Email,
    /// Field must have at least this many characters (not bytes).
    MinLength(usize),
    /// Field must be a JSON string. Reported for values of any other type.
    Text,
}

impl Rule {
    /// Checks a present text value against this rule.
    pub fn check(self, value: &str) -> bool {
        match self {
            Rule::Required => !value.is_empty(),
            Rule::Email => is_email(value),
            Rule::MinLength(min) => value.chars().count() >= min,
            Rule::Text => true,
        }
    }
}

/// Email format check: a well-formed address with a dotted domain.
///
/// `user@localhost` is rejected even though it is RFC-valid. The local part
/// must be ASCII (`üser@example.com` fails), while internationalized domains
/// are accepted.
pub fn is_email(value: &str) -> bool {
    let Some((_, domain)) = value.rsplit_once('@') else {
        return false;
    };

    domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && value.validate_email()
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => f.write_str("required"),
            Rule::Email => f.write_str("email"),
            Rule::MinLength(min) => write!(f, "min_length:{min}"),
            Rule::Text => f.write_str("string"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown rule: {0}")]
pub struct UnknownRule(pub String);

impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "required" => Ok(Rule::Required),
            "email" => Ok(Rule::Email),
            "string" => Ok(Rule::Text),
            _ => s
                .strip_prefix("min_length:")
                .and_then(|n| n.parse().ok())
                .map(Rule::MinLength)
                .ok_or_else(|| UnknownRule(s.to_string())),
        }
    }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self {
        rule.to_string()
    }
}

impl TryFrom<String> for Rule {
    type Error = UnknownRule;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_empty_string() {
        assert!(!Rule::Required.check(""));
        assert!(Rule::Required.check("x"));
    }

    #[test]
    fn email_accepts_plain_address() {
        assert!(is_email("user@example.com"));
        assert!(is_email("first.last+tag@mail.example.org"));
    }

    #[test]
    fn email_rejects_missing_at_or_domain() {
        assert!(!is_email("not-an-email"));
        assert!(!is_email("user@"));
        assert!(!is_email("@example.com"));
    }

    #[test]
    fn email_requires_dot_in_domain() {
        assert!(!is_email("user@localhost"));
        assert!(!is_email("user@example."));
        assert!(!is_email("user@.com"));
    }

    #[test]
    fn email_local_part_must_be_ascii() {
        assert!(!is_email("üser@example.com"));
        assert!(is_email("user@exämple.com"));
    }

    #[test]
    fn min_length_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        assert!(!Rule::MinLength(8).check("ééééééé"));
        assert!(Rule::MinLength(8).check("éééééééé"));
        assert!(Rule::MinLength(8).check("12345678"));
        assert!(!Rule::MinLength(8).check("1234567"));
    }

    #[test]
    fn rule_tokens_match_wire_format() {
        assert_eq!(Rule::Required.to_string(), "required");
        assert_eq!(Rule::Email.to_string(), "email");
        assert_eq!(Rule::MinLength(8).to_string(), "min_length:8");
        assert_eq!(Rule::Text.to_string(), "string");
    }

    #[test]
    fn rule_parses_from_token() {
        assert_eq!("min_length:8".parse::<Rule>(), Ok(Rule::MinLength(8)));
        assert_eq!("required".parse::<Rule>(), Ok(Rule::Required));
        assert!("min_length:abc".parse::<Rule>().is_err());
        assert!("max_length:3".parse::<Rule>().is_err());
    }

    #[test]
    fn rule_serializes_as_token() {
        let json = serde_json::to_string(&Rule::MinLength(8)).unwrap();
        assert_eq!(json, "\"min_length:8\"");
        let rule: Rule = serde_json::from_str("\"email\"").unwrap();
        assert_eq!(rule, Rule::Email);
    }
}
