//! Payment request entity model.
//!
//! Payment records are persisted but no workflow reads or mutates them;
//! there is no lifecycle and no validation beyond the required fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A recorded payment request for a course.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PaymentRequest {
    /// Unique payment request identifier.
    pub id: Uuid,
    /// The paying user's identity.
    pub email: String,
    /// Course the payment is for.
    pub course: String,
    /// Total amount.
    pub amount: f64,
    /// Payment method.
    pub payment_method: String,
    /// Payment sub-method.
    pub sub_method: String,
    /// Amount paid. Free-form.
    pub paid_amount: Option<String>,
    /// Amount due. Free-form.
    pub amount_due: Option<String>,
    /// Running total paid so far. Free-form.
    pub paid_amount_so_far: Option<String>,
    /// Running total due so far. Free-form.
    pub payment_due_so_far: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to record a new payment request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    /// The paying user's identity.
    pub email: String,
    /// Course the payment is for.
    pub course: String,
    /// Total amount.
    pub amount: f64,
    /// Payment method.
    pub payment_method: String,
    /// Payment sub-method.
    pub sub_method: String,
}
