//! # classgate-api
//!
//! HTTP layer for ClassGate built on Axum.
//!
//! Provides the route handlers, the authorization gate extractors, form
//! DTOs, server-rendered views, and the router. Error handling is
//! deliberately local to each handler: failures never propagate past the
//! route boundary.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;
pub mod views;

pub use router::build_router;
pub use state::AppState;
