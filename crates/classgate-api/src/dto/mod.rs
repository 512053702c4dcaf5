//! Request DTOs.

pub mod forms;

pub use forms::{AdminLoginForm, LoginForm, SignupForm};
