//! Training dataset client for `/api/entrenamientos/`

use std::path::Path;

use common::error::{ClientError, ClientResult};
use reqwest::multipart::{Form, Part};
use tracing::info;

use crate::api::ApiClient;
use crate::models::TrainingRecord;
use crate::validation;

/// Client for uploading and listing retraining datasets
#[derive(Clone)]
pub struct TrainingApi {
    client: ApiClient,
}

impl TrainingApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Upload a dataset file as multipart field `archivo`
    pub async fn upload(&self, path: &Path) -> ClientResult<TrainingRecord> {
        validation::validate_training_file(path).map_err(ClientError::Validation)?;

        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "archivo".to_string());

        info!(file = %path.display(), size = bytes.len(), "uploading training dataset");
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/octet-stream")?;
        let form = Form::new().part("archivo", part);

        self.client.post_multipart("/api/entrenamientos/", form).await
    }

    /// List uploaded training datasets
    pub async fn list(&self) -> ClientResult<Vec<TrainingRecord>> {
        self.client.get_json("/api/entrenamientos/").await
    }
}
