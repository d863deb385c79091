use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rules::{PASSWORD_MIN_LENGTH, Rule};
use crate::shape::{FieldRules, Fields, Shape, ShapeKind};
use crate::violation::ValidationFailure;

const EMAIL: &[Rule] = &[Rule::Required, Rule::Email];
const PASSWORD: &[Rule] = &[Rule::Required, Rule::MinLength(PASSWORD_MIN_LENGTH)];
const CODE: &[Rule] = &[Rule::Required];
const OPTIONAL: &[Rule] = &[];

// -------- REQUEST DTOs --------

/// Payload for user registration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "Value")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SignUpRequest {
    pub email: String,
    pub password: String, // Plain text
}

impl Shape for SignUpRequest {
    const KIND: ShapeKind = ShapeKind::SignUp;
    const FIELDS: &'static [FieldRules] = &[
        FieldRules::new("email", EMAIL),
        FieldRules::new("password", PASSWORD),
    ];

    fn from_fields(mut fields: Fields) -> Self {
        Self {
            email: fields.take_required("email"),
            password: fields.take_required("password"),
        }
    }
}

/// Payload for email verification.
///
/// Code-based and token-based flows share this shape, so only the
/// confirmation code is mandatory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "Value")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub confirmation_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Shape for VerifyEmailRequest {
    const KIND: ShapeKind = ShapeKind::VerifyEmail;
    const FIELDS: &'static [FieldRules] = &[
        FieldRules::new("email", OPTIONAL),
        FieldRules::new("confirmationCode", CODE),
        FieldRules::new("token", OPTIONAL),
    ];

    fn from_fields(mut fields: Fields) -> Self {
        Self {
            email: fields.take("email"),
            confirmation_code: fields.take_required("confirmationCode"),
            token: fields.take("token"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "Value")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginRequest {
    pub email: String,
    pub password: String, // Plain text
}

impl Shape for LoginRequest {
    const KIND: ShapeKind = ShapeKind::Login;
    const FIELDS: &'static [FieldRules] = &[
        FieldRules::new("email", EMAIL),
        FieldRules::new("password", PASSWORD),
    ];

    fn from_fields(mut fields: Fields) -> Self {
        Self {
            email: fields.take_required("email"),
            password: fields.take_required("password"),
        }
    }
}

/// Payload that starts a password reset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "Value")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ForgotPasswordRequest {
    pub email: String,
}

impl Shape for ForgotPasswordRequest {
    const KIND: ShapeKind = ShapeKind::ForgotPassword;
    const FIELDS: &'static [FieldRules] = &[FieldRules::new("email", EMAIL)];

    fn from_fields(mut fields: Fields) -> Self {
        Self {
            email: fields.take_required("email"),
        }
    }
}

/// Payload that completes a password reset with the emailed code.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "Value")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VerifyForgotPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String, // Plain text
}

impl Shape for VerifyForgotPasswordRequest {
    const KIND: ShapeKind = ShapeKind::VerifyForgotPassword;
    const FIELDS: &'static [FieldRules] = &[
        FieldRules::new("email", EMAIL),
        FieldRules::new("code", CODE),
        FieldRules::new("newPassword", PASSWORD),
    ];

    fn from_fields(mut fields: Fields) -> Self {
        Self {
            email: fields.take_required("email"),
            code: fields.take_required("code"),
            new_password: fields.take_required("newPassword"),
        }
    }
}

// Deserializing goes through the rule table, so serde never yields an
// instance that failed validation.
macro_rules! deserialize_validated {
    ($($shape:ty),+ $(,)?) => {
        $(
            impl TryFrom<Value> for $shape {
                type Error = ValidationFailure;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    Self::from_value(&value)
                }
            }
        )+
    };
}

deserialize_validated!(
    SignUpRequest,
    VerifyEmailRequest,
    LoginRequest,
    ForgotPasswordRequest,
    VerifyForgotPasswordRequest,
);
