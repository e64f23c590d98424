use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(sqlx::FromRow, Serialize, Debug, Clone)]
pub struct Rating {
    pub id: i64,
    pub professional_id: i64,
    pub client_id: i64,
    pub client_name: String,
    pub score: i64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub service_request_id: Option<i64>,
}
