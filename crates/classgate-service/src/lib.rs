//! # classgate-service
//!
//! Business logic services for ClassGate: the lesson request lifecycle
//! with its per-access approval check, and the account flows delegated
//! to the identity provider.

pub mod account;
pub mod lesson;

pub use account::AccountService;
pub use lesson::LessonService;
