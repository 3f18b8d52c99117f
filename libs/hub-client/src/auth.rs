//! Auth session manager
//!
//! Owns the login, registration, logout and password-recovery flows and
//! is the only writer of the persisted session. The rest of the crate
//! reads identity through [`SessionStore`] accessors; nothing mutates the
//! session behind the manager's back except the shared 401 interceptor.

use common::error::{ClientError, ClientResult};
use serde::Serialize;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::models::{Profile, Session, TokenPair};
use crate::session::{SessionStore, token};
use crate::validation;

/// Display name used when the token payload carries no name claim
const DEFAULT_DISPLAY_NAME: &str = "Usuario";

/// Request for user login
#[derive(Serialize)]
struct LoginRequest<'a> {
    cc: &'a str,
    password: &'a str,
}

/// Request for user registration
#[derive(Serialize)]
struct RegisterRequest<'a> {
    cc: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Request for password recovery
#[derive(Serialize)]
struct RecoverRequest<'a> {
    email: &'a str,
}

/// Request for password-reset confirmation
#[derive(Serialize)]
struct ChangePasswordRequest<'a> {
    uidb64: &'a str,
    token: &'a str,
    nueva_password: &'a str,
    confirmar_password: &'a str,
}

/// Manager for the authentication lifecycle
#[derive(Clone)]
pub struct AuthManager {
    client: ApiClient,
    store: SessionStore,
}

impl AuthManager {
    pub fn new(client: ApiClient) -> Self {
        let store = client.store().clone();
        Self { client, store }
    }

    /// Log in with an identity-document number and password
    ///
    /// On success the token pair and the profile decoded from the access
    /// token payload are persisted and the profile is returned. On any
    /// failure the store is left untouched, so the client stays
    /// unauthenticated. No retry.
    pub async fn login(&self, cc: &str, password: &str) -> ClientResult<Profile> {
        validation::validate_cc(cc).map_err(ClientError::Validation)?;
        if password.is_empty() {
            return Err(ClientError::Validation("Password is required".to_string()));
        }

        info!(cc, "logging in");
        let tokens: TokenPair = self
            .client
            .post_public_json("/api/login/iniciar-sesion/", &LoginRequest { cc, password })
            .await?;

        let payload = token::decode_access_token(&tokens.access)?;
        let profile = Profile {
            cc: payload.cc,
            email: payload.email,
            role: payload.role,
            name: payload
                .name
                .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string()),
        };

        self.store.save(Session {
            access_token: tokens.access,
            refresh_token: tokens.refresh,
            user: profile.clone(),
        })?;

        info!(email = %profile.email, role = %profile.role, "login successful");
        Ok(profile)
    }

    /// Register a new account
    ///
    /// Does not authenticate; the user logs in afterwards.
    pub async fn register(&self, cc: &str, email: &str, password: &str) -> ClientResult<()> {
        validation::validate_cc(cc).map_err(ClientError::Validation)?;
        validation::validate_email(email).map_err(ClientError::Validation)?;
        validation::validate_new_password(password).map_err(ClientError::Validation)?;

        info!(cc, "registering account");
        self.client
            .post_public(
                "/api/login/registrarse/",
                &RegisterRequest {
                    cc,
                    email,
                    password,
                },
            )
            .await
    }

    /// Log out, clearing every persisted session key
    ///
    /// Idempotent: logging out while unauthenticated is a no-op.
    pub fn logout(&self) -> ClientResult<()> {
        if self.store.is_authenticated() {
            info!("logging out");
        }
        self.store.clear()
    }

    /// Request a password-recovery email
    ///
    /// The confirmation shown to the user stays neutral regardless of
    /// whether the address exists, to avoid account enumeration.
    pub async fn request_password_reset(&self, email: &str) -> ClientResult<()> {
        validation::validate_email(email).map_err(ClientError::Validation)?;

        info!("requesting password recovery email");
        self.client
            .post_public("/api/login/recuperar/", &RecoverRequest { email })
            .await
    }

    /// Check whether a password-reset link is still valid
    ///
    /// Validity is signalled purely through the HTTP status; transport
    /// errors count as invalid.
    pub async fn validate_reset_token(&self, uidb64: &str, token: &str) -> bool {
        self.client
            .get_public_ok(&format!("/api/login/validar-token/{uidb64}/{token}/"))
            .await
    }

    /// Confirm a password reset
    ///
    /// The password pair is checked locally first: both fields must match
    /// and the new password must pass every strength rule. Nothing is sent
    /// to the backend otherwise.
    pub async fn change_password(
        &self,
        uidb64: &str,
        token: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> ClientResult<()> {
        if new_password != confirm_password {
            return Err(ClientError::Validation(
                "Passwords do not match".to_string(),
            ));
        }
        validation::validate_new_password(new_password).map_err(ClientError::Validation)?;

        info!("confirming password reset");
        self.client
            .post_public(
                "/api/login/cambiar-password/",
                &ChangePasswordRequest {
                    uidb64,
                    token,
                    nueva_password: new_password,
                    confirmar_password: confirm_password,
                },
            )
            .await
            .inspect_err(|err| warn!("password reset rejected: {}", err))
    }

    /// Cached profile of the logged-in user, if any
    pub fn current_user(&self) -> Option<Profile> {
        self.store.current_user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::HubConfig;
    use common::wire::Role;

    fn manager(dir: &std::path::Path) -> (AuthManager, SessionStore) {
        let store = SessionStore::open(dir.join("session.json")).unwrap();
        let config = HubConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            session_file: store.path().to_path_buf(),
        };
        let client = ApiClient::new(&config, store.clone());
        (AuthManager::new(client), store)
    }

    #[tokio::test]
    async fn login_rejects_empty_credentials_locally() {
        let dir = tempfile::tempdir().unwrap();
        let (manager, store) = manager(dir.path());

        assert!(matches!(
            manager.login("", "Secret123").await,
            Err(ClientError::Validation(_))
        ));
        assert!(matches!(
            manager.login("1019283746", "").await,
            Err(ClientError::Validation(_))
        ));
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn failed_login_stores_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (manager, store) = manager(dir.path());

        // Base URL points at a closed port, so this is a transport error
        let result = manager.login("1019283746", "Secret123").await;
        assert!(matches!(result, Err(ClientError::Network(_))));
        assert!(!store.is_authenticated());
        assert!(!store.path().exists());
    }

    #[test]
    fn logout_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let (manager, store) = manager(dir.path());

        manager.logout().unwrap();
        assert!(!store.is_authenticated());

        store
            .save(Session {
                access_token: "a".to_string(),
                refresh_token: "r".to_string(),
                user: Profile {
                    cc: "1".to_string(),
                    email: "ana@hospital.example".to_string(),
                    role: Role::Admin,
                    name: "Ana".to_string(),
                },
            })
            .unwrap();

        manager.logout().unwrap();
        assert!(!store.is_authenticated());
        manager.logout().unwrap();
    }

    #[tokio::test]
    async fn change_password_rejects_mismatch_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let (manager, _) = manager(dir.path());

        let err = manager
            .change_password("uid", "tok", "Abcdef12", "Abcdef13")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn change_password_enforces_strength_rules() {
        let dir = tempfile::tempdir().unwrap();
        let (manager, _) = manager(dir.path());

        for weak in ["short1A", "nouppercase1", "NOLOWERCASE1", "NoDigitsHere"] {
            let err = manager
                .change_password("uid", "tok", weak, weak)
                .await
                .unwrap_err();
            assert!(
                matches!(err, ClientError::Validation(_)),
                "'{weak}' should fail locally"
            );
        }
    }

    #[tokio::test]
    async fn register_validates_payload_locally() {
        let dir = tempfile::tempdir().unwrap();
        let (manager, _) = manager(dir.path());

        assert!(matches!(
            manager.register("123", "bad-email", "Abcdef12").await,
            Err(ClientError::Validation(_))
        ));
        assert!(matches!(
            manager
                .register("123", "ana@hospital.example", "weak")
                .await,
            Err(ClientError::Validation(_))
        ));
    }
}
