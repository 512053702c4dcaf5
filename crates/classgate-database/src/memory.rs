//! In-memory store implementations.
//!
//! Used when `store.provider = "memory"`: local development without a
//! database, and the integration test suite. Semantics mirror the sqlx
//! repositories, including the absence of any (email, day) uniqueness.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use classgate_core::error::AppError;
use classgate_core::result::AppResult;
use classgate_entity::lesson_request::{LessonRequest, RequestStatus};
use classgate_entity::payment_request::PaymentRequest;
use classgate_entity::payment_request::model::CreatePaymentRequest;

use crate::store::{LessonRequestStore, PaymentRequestStore};

/// In-memory lesson request store.
#[derive(Debug, Default)]
pub struct MemoryLessonRequestStore {
    requests: DashMap<Uuid, LessonRequest>,
}

impl MemoryLessonRequestStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(&self, mut rows: Vec<LessonRequest>) -> Vec<LessonRequest> {
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        rows
    }
}

#[async_trait]
impl LessonRequestStore for MemoryLessonRequestStore {
    async fn create(&self, email: &str, day: &str) -> AppResult<LessonRequest> {
        let request = LessonRequest {
            id: Uuid::new_v4(),
            email: email.to_string(),
            day: day.to_string(),
            status: RequestStatus::Pending,
            created_at: Utc::now(),
            approved_at: None,
        };
        self.requests.insert(request.id, request.clone());
        Ok(request)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<LessonRequest>> {
        Ok(self.requests.get(&id).map(|r| r.clone()))
    }

    async fn approve(&self, id: Uuid) -> AppResult<LessonRequest> {
        let mut entry = self
            .requests
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Lesson request {id} not found")))?;
        entry.status = RequestStatus::Approved;
        if entry.approved_at.is_none() {
            entry.approved_at = Some(Utc::now());
        }
        Ok(entry.clone())
    }

    async fn find_approved(&self, email: &str, day: &str) -> AppResult<Option<LessonRequest>> {
        Ok(self
            .requests
            .iter()
            .find(|r| r.grants_access(email, day))
            .map(|r| r.clone()))
    }

    async fn find_approved_by_email(&self, email: &str) -> AppResult<Vec<LessonRequest>> {
        let rows = self
            .requests
            .iter()
            .filter(|r| r.email == email && r.status.is_approved())
            .map(|r| r.clone())
            .collect();
        Ok(self.sorted(rows))
    }

    async fn find_all(&self) -> AppResult<Vec<LessonRequest>> {
        let rows = self.requests.iter().map(|r| r.clone()).collect();
        Ok(self.sorted(rows))
    }
}

/// In-memory payment request store.
#[derive(Debug, Default)]
pub struct MemoryPaymentRequestStore {
    payments: DashMap<Uuid, PaymentRequest>,
}

impl MemoryPaymentRequestStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentRequestStore for MemoryPaymentRequestStore {
    async fn create(&self, data: &CreatePaymentRequest) -> AppResult<PaymentRequest> {
        let payment = PaymentRequest {
            id: Uuid::new_v4(),
            email: data.email.clone(),
            course: data.course.clone(),
            amount: data.amount,
            payment_method: data.payment_method.clone(),
            sub_method: data.sub_method.clone(),
            paid_amount: Some("no data".to_string()),
            amount_due: Some("no data".to_string()),
            paid_amount_so_far: None,
            payment_due_so_far: None,
            created_at: Utc::now(),
        };
        self.payments.insert(payment.id, payment.clone());
        Ok(payment)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Vec<PaymentRequest>> {
        let mut rows: Vec<PaymentRequest> = self
            .payments
            .iter()
            .filter(|p| p.email == email)
            .map(|p| p.clone())
            .collect();
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(rows)
    }
}
