//! Client library for the CancerVisionHub backend
//!
//! Wraps the backend REST API behind typed service clients, owns the
//! persisted login session, and drives the upload-then-analyze prediction
//! workflow. The backend holds all authentication and inference truth;
//! this crate only sequences calls and caches the session locally.

pub mod api;
pub mod auth;
pub mod models;
pub mod session;
pub mod validation;
pub mod workflow;

pub use api::ApiClient;
pub use auth::AuthManager;
pub use session::SessionStore;
pub use workflow::{AnalysisBackend, UploadAnalyze, WorkflowState};
