use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::requests::{
    ForgotPasswordRequest, LoginRequest, SignUpRequest, VerifyEmailRequest,
    VerifyForgotPasswordRequest,
};
use crate::rules::Rule;
use crate::violation::{ValidationFailure, Violation};

/// Ordered rule list of one field. A field is optional unless its rules
/// contain [`Rule::Required`].
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub name: &'static str,
    pub rules: &'static [Rule],
}

impl FieldRules {
    pub const fn new(name: &'static str, rules: &'static [Rule]) -> Self {
        Self { name, rules }
    }

    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }
}

/// Text values that passed validation, keyed by field name.
#[derive(Debug, Default)]
pub struct Fields(BTreeMap<&'static str, String>);

impl Fields {
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    /// Required fields are always present once validation passed.
    ///
    /// Panics in debug builds when `name` is not a validated field, which
    /// means a `from_fields` body and its rule table disagree.
    pub fn take_required(&mut self, name: &str) -> String {
        let value = self.take(name);
        debug_assert!(value.is_some(), "required field `{name}` was not validated");
        value.unwrap_or_default()
    }
}

/// A request payload described by a rule table.
pub trait Shape: Sized {
    const KIND: ShapeKind;
    const FIELDS: &'static [FieldRules];

    /// Builds the instance from values that already satisfy [`Self::FIELDS`].
    fn from_fields(fields: Fields) -> Self;

    /// Validates raw key-value data and builds the instance.
    fn from_value(value: &Value) -> Result<Self, ValidationFailure> {
        check_fields(Self::FIELDS, value).map(Self::from_fields)
    }
}

/// Runs every field's rules over `value`.
///
/// Violations come out in table order with at most one per field: rules of a
/// field stop at the first failure. Absent optional fields are skipped,
/// `null` counts as absent and non-object input as an empty object.
pub fn check_fields(
    table: &'static [FieldRules],
    value: &Value,
) -> Result<Fields, ValidationFailure> {
    let empty = Map::new();
    let object = value.as_object().unwrap_or(&empty);

    let mut fields = Fields::default();
    let mut violations = Vec::new();

    for field in table {
        match check_field(field, object.get(field.name)) {
            Ok(Some(text)) => {
                fields.0.insert(field.name, text.to_owned());
            }
            Ok(None) => {}
            Err(rule) => violations.push(Violation::new(field.name, rule)),
        }
    }

    match ValidationFailure::from_violations(violations) {
        Some(failure) => Err(failure),
        None => Ok(fields),
    }
}

fn check_field<'a>(field: &FieldRules, value: Option<&'a Value>) -> Result<Option<&'a str>, Rule> {
    let text = match value {
        None | Some(Value::Null) => "",
        Some(Value::String(s)) => s.as_str(),
        Some(_) => return Err(Rule::Text),
    };

    if text.is_empty() {
        return if field.is_required() {
            Err(Rule::Required)
        } else {
            Ok(None)
        };
    }

    match field.rules.iter().find(|rule| !rule.check(text)) {
        Some(rule) => Err(*rule),
        None => Ok(Some(text)),
    }
}

/// Identifier of one of the five request shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    SignUp,
    VerifyEmail,
    Login,
    ForgotPassword,
    VerifyForgotPassword,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::SignUp,
        ShapeKind::VerifyEmail,
        ShapeKind::Login,
        ShapeKind::ForgotPassword,
        ShapeKind::VerifyForgotPassword,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::SignUp => "sign-up",
            ShapeKind::VerifyEmail => "verify-email",
            ShapeKind::Login => "login",
            ShapeKind::ForgotPassword => "forgot-password",
            ShapeKind::VerifyForgotPassword => "verify-forgot-password",
        }
    }

    pub fn fields(self) -> &'static [FieldRules] {
        match self {
            ShapeKind::SignUp => SignUpRequest::FIELDS,
            ShapeKind::VerifyEmail => VerifyEmailRequest::FIELDS,
            ShapeKind::Login => LoginRequest::FIELDS,
            ShapeKind::ForgotPassword => ForgotPasswordRequest::FIELDS,
            ShapeKind::VerifyForgotPassword => VerifyForgotPasswordRequest::FIELDS,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown shape: {0}")]
pub struct UnknownShape(pub String);

impl FromStr for ShapeKind {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownShape(s.to_string()))
    }
}

/// A validated instance of any of the five shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum ValidatedPayload {
    SignUp(SignUpRequest),
    VerifyEmail(VerifyEmailRequest),
    Login(LoginRequest),
    ForgotPassword(ForgotPasswordRequest),
    VerifyForgotPassword(VerifyForgotPasswordRequest),
}

impl ValidatedPayload {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ValidatedPayload::SignUp(_) => ShapeKind::SignUp,
            ValidatedPayload::VerifyEmail(_) => ShapeKind::VerifyEmail,
            ValidatedPayload::Login(_) => ShapeKind::Login,
            ValidatedPayload::ForgotPassword(_) => ShapeKind::ForgotPassword,
            ValidatedPayload::VerifyForgotPassword(_) => ShapeKind::VerifyForgotPassword,
        }
    }
}

/// Validates `value` against the shape selected by `kind`.
pub fn validate_payload(
    kind: ShapeKind,
    value: &Value,
) -> Result<ValidatedPayload, ValidationFailure> {
    let payload = match kind {
        ShapeKind::SignUp => ValidatedPayload::SignUp(SignUpRequest::from_value(value)?),
        ShapeKind::VerifyEmail => {
            ValidatedPayload::VerifyEmail(VerifyEmailRequest::from_value(value)?)
        }
        ShapeKind::Login => ValidatedPayload::Login(LoginRequest::from_value(value)?),
        ShapeKind::ForgotPassword => {
            ValidatedPayload::ForgotPassword(ForgotPasswordRequest::from_value(value)?)
        }
        ShapeKind::VerifyForgotPassword => ValidatedPayload::VerifyForgotPassword(
            VerifyForgotPasswordRequest::from_value(value)?,
        ),
    };
    Ok(payload)
}
