//! Training record model
//!
//! The client only uploads and lists dataset files; training itself
//! happens on the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Uploaded training dataset as returned by `/api/entrenamientos/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingRecord {
    pub id: i64,
    #[serde(rename = "archivo")]
    pub file_url: String,
    #[serde(rename = "fecha")]
    pub uploaded_at: DateTime<Utc>,
    #[serde(rename = "usuario")]
    pub user: i64,
    #[serde(rename = "usuario_email", default)]
    pub user_email: Option<String>,
}
