//! Medical image client for `/api/imagenes/`

use std::path::Path;

use common::error::{ClientError, ClientResult};
use reqwest::multipart::{Form, Part};
use tracing::info;

use crate::api::ApiClient;
use crate::models::MedicalImage;
use crate::validation;

/// Client for image upload, listing and deletion
#[derive(Clone)]
pub struct ImageApi {
    client: ApiClient,
}

impl ImageApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Upload an image file as multipart field `imagen`
    ///
    /// Local validation (format, 5 MiB limit) runs before any bytes are
    /// read, so a rejected file never reaches the network.
    pub async fn upload(&self, path: &Path) -> ClientResult<MedicalImage> {
        validation::validate_image_file(path).map_err(ClientError::Validation)?;

        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "imagen".to_string());
        let mime = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => "image/png",
            _ => "image/jpeg",
        };

        info!(file = %path.display(), size = bytes.len(), "uploading medical image");
        let part = Part::bytes(bytes).file_name(file_name).mime_str(mime)?;
        let form = Form::new().part("imagen", part);

        self.client.post_multipart("/api/imagenes/", form).await
    }

    /// List uploaded images
    pub async fn list(&self) -> ClientResult<Vec<MedicalImage>> {
        self.client.get_json("/api/imagenes/").await
    }

    /// Delete an uploaded image
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        info!(id, "deleting medical image");
        self.client.delete(&format!("/api/imagenes/{id}/")).await
    }
}
