//! Lesson request lifecycle service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use classgate_core::result::AppResult;
use classgate_database::LessonRequestStore;
use classgate_entity::lesson_request::LessonRequest;

/// Drives the lesson request lifecycle and the per-access approval check.
///
/// The lifecycle has two states: a request is created pending and moved
/// to approved exactly once by an admin. There is no rejection, expiry,
/// or rollback.
#[derive(Clone)]
pub struct LessonService {
    /// Lesson request persistence.
    store: Arc<dyn LessonRequestStore>,
}

impl LessonService {
    /// Creates a new lesson service.
    pub fn new(store: Arc<dyn LessonRequestStore>) -> Self {
        Self { store }
    }

    /// Submits a new request for (email, day).
    ///
    /// Always creates a fresh pending row; duplicates for the same pair
    /// are legal and approved independently.
    pub async fn submit_request(&self, email: &str, day: &str) -> AppResult<LessonRequest> {
        let request = self.store.create(email, day).await?;
        info!(id = %request.id, day = %request.day, "Lesson request submitted");
        Ok(request)
    }

    /// Approves a request by id (admin action).
    pub async fn approve_request(&self, id: Uuid) -> AppResult<LessonRequest> {
        let request = self.store.approve(id).await?;
        info!(id = %request.id, email = %request.email, day = %request.day, "Lesson request approved");
        Ok(request)
    }

    /// Checks whether (email, day) currently holds an approval.
    ///
    /// Re-queries the store on every call: a later approval or a future
    /// revocation is observed on the very next access, at the cost of
    /// one store read.
    pub async fn check_approval(&self, email: &str, day: &str) -> AppResult<bool> {
        Ok(self.store.find_approved(email, day).await?.is_some())
    }

    /// Lists all approved requests for a user (the `/main` view).
    pub async fn approved_for(&self, email: &str) -> AppResult<Vec<LessonRequest>> {
        self.store.find_approved_by_email(email).await
    }

    /// Lists every request across all users (the admin view).
    pub async fn all_requests(&self) -> AppResult<Vec<LessonRequest>> {
        self.store.find_all().await
    }
}
