//! Payment request repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use classgate_core::error::{AppError, ErrorKind};
use classgate_core::result::AppResult;
use classgate_entity::payment_request::PaymentRequest;
use classgate_entity::payment_request::model::CreatePaymentRequest;

use crate::store::PaymentRequestStore;

/// Repository for payment request records.
#[derive(Debug, Clone)]
pub struct PaymentRequestRepository {
    pool: PgPool,
}

impl PaymentRequestRepository {
    /// Create a new payment request repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRequestStore for PaymentRequestRepository {
    async fn create(&self, data: &CreatePaymentRequest) -> AppResult<PaymentRequest> {
        sqlx::query_as::<_, PaymentRequest>(
            "INSERT INTO payment_requests (email, course, amount, payment_method, sub_method) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.course)
        .bind(data.amount)
        .bind(&data.payment_method)
        .bind(&data.sub_method)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create payment request", e)
        })
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Vec<PaymentRequest>> {
        sqlx::query_as::<_, PaymentRequest>(
            "SELECT * FROM payment_requests WHERE email = $1 ORDER BY created_at ASC",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list payment requests", e)
        })
    }
}
