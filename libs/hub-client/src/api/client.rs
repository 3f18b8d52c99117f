//! Shared request plumbing for the service clients

use common::config::HubConfig;
use common::error::{ClientError, ClientResult};
use reqwest::{Method, RequestBuilder, Response, StatusCode, multipart::Form};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::session::SessionStore;

/// Stateless request builder and executor shared by every service client
///
/// No retries, no backoff, no caching; a request either succeeds or its
/// failure is surfaced to the caller unchanged.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: SessionStore,
}

impl ApiClient {
    pub fn new(config: &HubConfig, store: SessionStore) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            store,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build an authenticated request, failing early when no one is logged in
    fn authorized(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        let token = self.store.access_token().ok_or(ClientError::Unauthorized)?;
        debug!(%method, path, "issuing authenticated request");
        Ok(self.http.request(method, self.url(path)).bearer_auth(token))
    }

    /// Central handling for expired credentials: any authenticated call
    /// answered with 401 tears the session down so the next action starts
    /// from a clean unauthenticated state.
    pub(crate) fn expire_session(&self) -> ClientError {
        warn!("backend rejected the access token, clearing session");
        if let Err(err) = self.store.clear() {
            warn!("failed to clear session file: {}", err);
        }
        ClientError::Unauthorized
    }

    async fn api_error(response: Response) -> ClientError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        ClientError::Api { status, body }
    }

    /// Map an authenticated response's status, applying the 401 interceptor
    async fn guard(&self, response: Response) -> ClientResult<Response> {
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(self.expire_session());
        }
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.authorized(Method::GET, path)?.send().await?;
        let response = self.guard(response).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .authorized(Method::POST, path)?
            .json(body)
            .send()
            .await?;
        let response = self.guard(response).await?;
        Self::decode(response).await
    }

    pub(crate) async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .authorized(Method::PATCH, path)?
            .json(body)
            .send()
            .await?;
        let response = self.guard(response).await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.authorized(Method::DELETE, path)?.send().await?;
        self.guard(response).await?;
        Ok(())
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> ClientResult<T> {
        let response = self
            .authorized(Method::POST, path)?
            .multipart(form)
            .send()
            .await?;
        let response = self.guard(response).await?;
        Self::decode(response).await
    }

    /// POST to an unauthenticated endpoint, decoding the JSON response
    ///
    /// A 401 here means bad credentials rather than an expired session, so
    /// the store is left untouched.
    pub(crate) async fn post_public_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Self::decode(response).await
    }

    /// POST to an unauthenticated endpoint, ignoring the response body
    pub(crate) async fn post_public<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(())
    }

    /// GET an unauthenticated endpoint, reporting validity by HTTP status
    ///
    /// Transport errors count as invalid.
    pub(crate) async fn get_public_ok(&self, path: &str) -> bool {
        match self.http.get(self.url(path)).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!("validity probe failed: {}", err);
                false
            }
        }
    }
}
