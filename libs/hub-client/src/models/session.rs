//! Session models
//!
//! The persisted session file mirrors the keys the web client kept in
//! browser storage: `accessToken`, `refreshToken` and `currentUser`.

use common::wire::Role;
use serde::{Deserialize, Serialize};

/// Token pair returned by the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// User profile derived from the access token payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub cc: String,
    pub email: String,
    pub role: Role,
    pub name: String,
}

/// Persisted login session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
    #[serde(rename = "currentUser")]
    pub user: Profile,
}
