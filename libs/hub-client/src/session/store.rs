//! File-backed session store
//!
//! Holds the current token pair and cached user profile. The file is read
//! once when the store is opened; afterwards the in-memory copy is the
//! source of truth and every mutation is written through to disk.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use common::error::ClientResult;
use tracing::{info, warn};

use crate::models::{Profile, Session};

/// Session store shared by the auth manager and the service clients
#[derive(Clone)]
pub struct SessionStore {
    path: PathBuf,
    session: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    /// Open the store, loading any previously persisted session
    ///
    /// A missing file simply means no one is logged in. A file that can no
    /// longer be parsed is treated the same way, with a warning, so a
    /// corrupt session never locks the user out of logging in again.
    pub fn open(path: impl Into<PathBuf>) -> ClientResult<Self> {
        let path = path.into();
        let session = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Session>(&contents) {
                Ok(session) => {
                    info!(user = %session.user.email, "restored persisted session");
                    Some(session)
                }
                Err(err) => {
                    warn!("discarding unreadable session file: {}", err);
                    None
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => return Err(err.into()),
        };

        Ok(SessionStore {
            path,
            session: Arc::new(RwLock::new(session)),
        })
    }

    /// Persist a new session, replacing any existing one
    pub fn save(&self, session: Session) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&session)?;
        std::fs::write(&self.path, contents)?;

        let mut guard = self.session.write().expect("session lock poisoned");
        *guard = Some(session);
        Ok(())
    }

    /// Remove the persisted session and forget the in-memory copy
    ///
    /// Idempotent: clearing an already empty store is not an error.
    pub fn clear(&self) -> ClientResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }

        let mut guard = self.session.write().expect("session lock poisoned");
        *guard = None;
        Ok(())
    }

    /// Current access token, if a session is stored
    pub fn access_token(&self) -> Option<String> {
        let guard = self.session.read().expect("session lock poisoned");
        guard.as_ref().map(|s| s.access_token.clone())
    }

    /// Current refresh token, if a session is stored
    pub fn refresh_token(&self) -> Option<String> {
        let guard = self.session.read().expect("session lock poisoned");
        guard.as_ref().map(|s| s.refresh_token.clone())
    }

    /// Cached profile of the logged-in user
    pub fn current_user(&self) -> Option<Profile> {
        let guard = self.session.read().expect("session lock poisoned");
        guard.as_ref().map(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        let guard = self.session.read().expect("session lock poisoned");
        guard.is_some()
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::wire::Role;

    fn sample_session() -> Session {
        Session {
            access_token: "access-abc".to_string(),
            refresh_token: "refresh-def".to_string(),
            user: Profile {
                cc: "1019283746".to_string(),
                email: "ana@hospital.example".to_string(),
                role: Role::Med,
                name: "Ana".to_string(),
            },
        }
    }

    #[test]
    fn open_without_file_is_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("session.json")).unwrap();
        assert!(!store.is_authenticated());
        assert!(store.access_token().is_none());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn save_then_reopen_restores_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/session.json");

        let store = SessionStore::open(&path).unwrap();
        store.save(sample_session()).unwrap();

        let reopened = SessionStore::open(&path).unwrap();
        assert!(reopened.is_authenticated());
        assert_eq!(reopened.access_token().as_deref(), Some("access-abc"));
        let user = reopened.current_user().unwrap();
        assert_eq!(user.role, Role::Med);
        assert_eq!(user.email, "ana@hospital.example");
    }

    #[test]
    fn persisted_file_uses_browser_storage_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = SessionStore::open(&path).unwrap();
        store.save(sample_session()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["accessToken"], "access-abc");
        assert_eq!(raw["refreshToken"], "refresh-def");
        assert_eq!(raw["currentUser"]["role"], "MED");
    }

    #[test]
    fn clear_is_idempotent_and_removes_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = SessionStore::open(&path).unwrap();
        store.save(sample_session()).unwrap();

        store.clear().unwrap();
        assert!(!store.is_authenticated());
        assert!(!path.exists());

        // Clearing again must not fail
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_file_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = SessionStore::open(&path).unwrap();
        assert!(!store.is_authenticated());
    }
}
