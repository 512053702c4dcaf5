//! Form bodies with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login form body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Signup form body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupForm {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Password confirmation. Checked for equality, nothing more.
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Admin login form body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdminLoginForm {
    /// Admin username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Admin password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
