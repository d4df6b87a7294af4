use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One persisted review with its computed sentiment. Rows are append-only;
/// nothing in the service updates or deletes them.
#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub id: i64,
    pub request_id: String,
    pub user_id: String,
    pub review_text: String,
    pub sentiment: String,
    /// Raw polarity magnitude in [0, 1]; the wire payload carries the scaled
    /// integer percentage instead.
    pub confidence: f64,
    pub created_at: DateTime<Utc>,
}
