//! Typed REST service clients
//!
//! Each client maps one backend endpoint to one operation. All of them go
//! through [`ApiClient`], which attaches the bearer token and converts
//! non-success responses into errors; a 401 tears the session down in one
//! place instead of being handled per call.

pub mod client;
pub mod images;
pub mod predictions;
pub mod trainings;
pub mod users;

pub use client::ApiClient;
pub use images::ImageApi;
pub use predictions::PredictionApi;
pub use trainings::TrainingApi;
pub use users::UserApi;
