//! Authorization gate extractors.

pub mod session;

pub use session::{CurrentAdmin, CurrentUser};
