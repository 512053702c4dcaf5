//! Session record.

pub mod record;

pub use record::{SessionRecord, SessionUser};
