//! Concrete sqlx repository implementations.

pub mod lesson_request;
pub mod payment_request;

pub use lesson_request::LessonRequestRepository;
pub use payment_request::PaymentRequestRepository;
