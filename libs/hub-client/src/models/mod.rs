//! Client-side models for backend resources

pub mod image;
pub mod prediction;
pub mod session;
pub mod training;
pub mod user;

// Re-export for convenience
pub use image::MedicalImage;
pub use prediction::{DiagnosticResult, ModelMetrics, NewPrediction, Prediction, PredictionReport};
pub use session::{Profile, Session, TokenPair};
pub use training::TrainingRecord;
pub use user::{NewUser, User, UserUpdate};
