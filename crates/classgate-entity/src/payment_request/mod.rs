//! Payment request entity.

pub mod model;

pub use model::PaymentRequest;
