//! Upload-then-analyze prediction workflow
//!
//! Drives the two dependent network calls behind a prediction: the image
//! is uploaded first, and only the resulting server-side identifier is
//! sent to the prediction endpoint. The state machine makes "analyze
//! without an uploaded image" unrepresentable and guarantees at most one
//! analyze request per uploaded image.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use common::error::{ClientError, ClientResult};
use tracing::info;

use crate::api::{ImageApi, PredictionApi};
use crate::models::{MedicalImage, Prediction, PredictionReport};
use crate::validation;

/// The two backend calls the workflow depends on
///
/// Implemented by the real service clients and by test doubles.
#[async_trait]
pub trait AnalysisBackend {
    async fn upload_image(&self, path: &Path) -> ClientResult<MedicalImage>;
    async fn request_prediction(&self, image_id: i64) -> ClientResult<Prediction>;
}

/// Production backend wiring the image and prediction clients together
#[derive(Clone)]
pub struct HubBackend {
    images: ImageApi,
    predictions: PredictionApi,
}

impl HubBackend {
    pub fn new(images: ImageApi, predictions: PredictionApi) -> Self {
        Self {
            images,
            predictions,
        }
    }
}

#[async_trait]
impl AnalysisBackend for HubBackend {
    async fn upload_image(&self, path: &Path) -> ClientResult<MedicalImage> {
        self.images.upload(path).await
    }

    async fn request_prediction(&self, image_id: i64) -> ClientResult<Prediction> {
        self.predictions.create(image_id).await
    }
}

/// Workflow phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    FileSelected,
    Uploading,
    Uploaded,
    Analyzing,
    Complete,
}

/// Upload-analyze controller
///
/// A failed step returns to the previous interactive state with the
/// selected file preserved, so the user can retry without re-selecting.
pub struct UploadAnalyze<B> {
    backend: B,
    state: WorkflowState,
    selected: Option<PathBuf>,
    image: Option<MedicalImage>,
    report: Option<PredictionReport>,
}

impl<B: AnalysisBackend> UploadAnalyze<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: WorkflowState::Idle,
            selected: None,
            image: None,
            report: None,
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    /// Server-side identifier of the uploaded image, once resolved
    pub fn image(&self) -> Option<&MedicalImage> {
        self.image.as_ref()
    }

    pub fn report(&self) -> Option<&PredictionReport> {
        self.report.as_ref()
    }

    /// Whether the analyze action is currently allowed
    pub fn can_analyze(&self) -> bool {
        self.state == WorkflowState::Uploaded && self.image.is_some()
    }

    /// Select a local file, validating it before anything else
    ///
    /// A rejected file leaves the workflow unchanged. Selecting a new file
    /// discards any previous upload and result.
    pub fn select_file(&mut self, path: impl Into<PathBuf>) -> ClientResult<()> {
        let path = path.into();
        validation::validate_image_file(&path).map_err(ClientError::Validation)?;

        info!(file = %path.display(), "image selected");
        self.selected = Some(path);
        self.image = None;
        self.report = None;
        self.state = WorkflowState::FileSelected;
        Ok(())
    }

    /// Upload the selected file, resolving the image identifier
    pub async fn upload(&mut self) -> ClientResult<i64> {
        if self.state != WorkflowState::FileSelected {
            return Err(ClientError::Validation(
                "No file selected for upload".to_string(),
            ));
        }
        let path = self
            .selected
            .clone()
            .ok_or_else(|| ClientError::Validation("No file selected for upload".to_string()))?;

        self.state = WorkflowState::Uploading;
        match self.backend.upload_image(&path).await {
            Ok(image) => {
                let id = image.id;
                info!(image_id = id, "image uploaded");
                self.image = Some(image);
                self.state = WorkflowState::Uploaded;
                Ok(id)
            }
            Err(err) => {
                // Back to the selected file so the user can retry
                self.state = WorkflowState::FileSelected;
                Err(err)
            }
        }
    }

    /// Request a prediction for the uploaded image
    ///
    /// Only allowed once the image identifier is resolved; calling while a
    /// request is already in flight, or after a result, is rejected
    /// without touching the network.
    pub async fn analyze(&mut self) -> ClientResult<PredictionReport> {
        if !self.can_analyze() {
            return Err(ClientError::Validation(
                "No uploaded image ready for analysis".to_string(),
            ));
        }
        let image_id = self
            .image
            .as_ref()
            .map(|image| image.id)
            .ok_or_else(|| ClientError::Validation("No uploaded image".to_string()))?;

        self.state = WorkflowState::Analyzing;
        match self.backend.request_prediction(image_id).await {
            Ok(prediction) => {
                let report = PredictionReport::from(prediction);
                info!(
                    image_id,
                    malignant = report.malignant,
                    confidence = report.confidence_pct,
                    "analysis complete"
                );
                self.report = Some(report.clone());
                self.state = WorkflowState::Complete;
                Ok(report)
            }
            Err(err) => {
                // Back to the uploaded image so analyze can be retried
                self.state = WorkflowState::Uploaded;
                Err(err)
            }
        }
    }

    /// Return to the initial state, discarding file, image and result
    pub fn reset(&mut self) {
        self.selected = None;
        self.image = None;
        self.report = None;
        self.state = WorkflowState::Idle;
    }

    /// Run the whole select-upload-analyze sequence for one file
    pub async fn run(&mut self, path: impl Into<PathBuf>) -> ClientResult<PredictionReport> {
        self.select_file(path)?;
        self.upload().await?;
        self.analyze().await
    }
}
