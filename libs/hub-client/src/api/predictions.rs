//! Prediction client for `/api/predicciones/`

use common::error::ClientResult;
use tracing::info;

use crate::api::ApiClient;
use crate::models::{NewPrediction, Prediction};

/// Client for requesting predictions and reading the history
#[derive(Clone)]
pub struct PredictionApi {
    client: ApiClient,
}

impl PredictionApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Request a prediction for an already uploaded image
    ///
    /// The backend runs inference and stores the immutable result; only
    /// the image identifier crosses the wire.
    pub async fn create(&self, image_id: i64) -> ClientResult<Prediction> {
        info!(image_id, "requesting prediction");
        self.client
            .post_json("/api/predicciones/", &NewPrediction { image_id })
            .await
    }

    /// List the prediction history
    pub async fn list(&self) -> ClientResult<Vec<Prediction>> {
        self.client.get_json("/api/predicciones/").await
    }
}
