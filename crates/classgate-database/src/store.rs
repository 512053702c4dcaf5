//! Store traits for the two persisted collections.
//!
//! Both the sqlx repositories and the in-memory backend implement these
//! traits; the backend is selected from configuration at startup.

use async_trait::async_trait;
use uuid::Uuid;

use classgate_core::result::AppResult;
use classgate_entity::lesson_request::LessonRequest;
use classgate_entity::payment_request::PaymentRequest;
use classgate_entity::payment_request::model::CreatePaymentRequest;

/// Persistence operations over lesson requests.
///
/// `create` never enforces (email, day) uniqueness: duplicate pending
/// requests are legal and each one is approved independently by id.
#[async_trait]
pub trait LessonRequestStore: Send + Sync + 'static {
    /// Create a new request in state pending.
    async fn create(&self, email: &str, day: &str) -> AppResult<LessonRequest>;

    /// Find a request by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<LessonRequest>>;

    /// Move a request to approved and return the updated row.
    ///
    /// Re-approving an approved request is a no-op change; an unknown id
    /// is a not-found error.
    async fn approve(&self, id: Uuid) -> AppResult<LessonRequest>;

    /// Find the approved request for exactly (email, day), if one exists.
    async fn find_approved(&self, email: &str, day: &str) -> AppResult<Option<LessonRequest>>;

    /// List all approved requests for a user.
    async fn find_approved_by_email(&self, email: &str) -> AppResult<Vec<LessonRequest>>;

    /// List every request across all users (admin view).
    async fn find_all(&self) -> AppResult<Vec<LessonRequest>>;
}

/// Persistence operations over payment requests.
///
/// Payment records have no lifecycle; they are written once and only
/// ever read back verbatim.
#[async_trait]
pub trait PaymentRequestStore: Send + Sync + 'static {
    /// Record a new payment request.
    async fn create(&self, data: &CreatePaymentRequest) -> AppResult<PaymentRequest>;

    /// List all payment requests for a user.
    async fn find_by_email(&self, email: &str) -> AppResult<Vec<PaymentRequest>>;
}
