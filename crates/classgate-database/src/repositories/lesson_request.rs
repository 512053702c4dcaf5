//! Lesson request repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use classgate_core::error::{AppError, ErrorKind};
use classgate_core::result::AppResult;
use classgate_entity::lesson_request::LessonRequest;

use crate::store::LessonRequestStore;

/// Repository for lesson request CRUD and query operations.
#[derive(Debug, Clone)]
pub struct LessonRequestRepository {
    pool: PgPool,
}

impl LessonRequestRepository {
    /// Create a new lesson request repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LessonRequestStore for LessonRequestRepository {
    async fn create(&self, email: &str, day: &str) -> AppResult<LessonRequest> {
        sqlx::query_as::<_, LessonRequest>(
            "INSERT INTO lesson_requests (email, day) VALUES ($1, $2) RETURNING *",
        )
        .bind(email)
        .bind(day)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create lesson request", e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<LessonRequest>> {
        sqlx::query_as::<_, LessonRequest>("SELECT * FROM lesson_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find lesson request", e)
            })
    }

    async fn approve(&self, id: Uuid) -> AppResult<LessonRequest> {
        // COALESCE keeps the original approval time on repeat approvals.
        sqlx::query_as::<_, LessonRequest>(
            "UPDATE lesson_requests \
             SET status = 'approved', approved_at = COALESCE(approved_at, NOW()) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to approve lesson request", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Lesson request {id} not found")))
    }

    async fn find_approved(&self, email: &str, day: &str) -> AppResult<Option<LessonRequest>> {
        sqlx::query_as::<_, LessonRequest>(
            "SELECT * FROM lesson_requests \
             WHERE email = $1 AND day = $2 AND status = 'approved' LIMIT 1",
        )
        .bind(email)
        .bind(day)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check lesson approval", e)
        })
    }

    async fn find_approved_by_email(&self, email: &str) -> AppResult<Vec<LessonRequest>> {
        sqlx::query_as::<_, LessonRequest>(
            "SELECT * FROM lesson_requests \
             WHERE email = $1 AND status = 'approved' ORDER BY created_at ASC",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list approved requests", e)
        })
    }

    async fn find_all(&self) -> AppResult<Vec<LessonRequest>> {
        sqlx::query_as::<_, LessonRequest>(
            "SELECT * FROM lesson_requests ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list lesson requests", e)
        })
    }
}
