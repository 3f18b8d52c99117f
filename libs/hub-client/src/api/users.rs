//! User administration client for `/api/usuarios/`

use common::error::{ClientError, ClientResult};
use tracing::info;

use crate::api::ApiClient;
use crate::models::{NewUser, User, UserUpdate};
use crate::validation;

/// Client for the user CRUD endpoints (admin only on the backend side)
#[derive(Clone)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all user accounts
    pub async fn list(&self) -> ClientResult<Vec<User>> {
        self.client.get_json("/api/usuarios/").await
    }

    /// Create a user account
    ///
    /// Field constraints are checked locally before the request is sent.
    pub async fn create(&self, user: &NewUser) -> ClientResult<User> {
        validation::validate_cc(&user.cc).map_err(ClientError::Validation)?;
        validation::validate_email(&user.email).map_err(ClientError::Validation)?;
        if let Some(name) = &user.name {
            validation::validate_name(name).map_err(ClientError::Validation)?;
        }
        if user.password.len() < 6 {
            return Err(ClientError::Validation(
                "Password must be at least 6 characters long".to_string(),
            ));
        }

        info!(cc = %user.cc, role = %user.role, "creating user");
        self.client.post_json("/api/usuarios/", user).await
    }

    /// Partially update a user account
    pub async fn update(&self, id: i64, update: &UserUpdate) -> ClientResult<User> {
        if let Some(email) = &update.email {
            validation::validate_email(email).map_err(ClientError::Validation)?;
        }
        if let Some(name) = &update.name {
            validation::validate_name(name).map_err(ClientError::Validation)?;
        }

        info!(id, "updating user");
        self.client
            .patch_json(&format!("/api/usuarios/{id}/"), update)
            .await
    }

    /// Delete a user account
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        info!(id, "deleting user");
        self.client.delete(&format!("/api/usuarios/{id}/")).await
    }
}
