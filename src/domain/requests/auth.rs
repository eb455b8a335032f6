use serde::Deserialize;
use validator::Validate;

/// Field order drives which validation message is surfaced first; keep it in
/// sync with [`SIGNUP_FIELD_ORDER`] / [`LOGIN_FIELD_ORDER`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 5, message = "Password must be at least 5 characters"))]
    pub password: String,
}

pub const SIGNUP_FIELD_ORDER: &[&str] = &["name", "email", "password"];

/// Login only re-checks shape: the password minimum length is a signup rule,
/// here it merely has to be present.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

pub const LOGIN_FIELD_ORDER: &[&str] = &["email", "password"];
