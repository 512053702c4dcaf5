//! # classgate-entity
//!
//! Domain entity models for ClassGate. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod lesson_request;
pub mod payment_request;
pub mod session;
