//! User model and CRUD payloads
//!
//! The user CRUD endpoints carry the role as an integer code; the
//! `common::wire` adapters translate it to the domain enum at the edge.

use chrono::{DateTime, Utc};
use common::wire::{Role, UserStatus};
use serde::{Deserialize, Serialize};

/// User account as returned by `/api/usuarios/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// National identity-document number, used as the login identifier
    pub cc: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(with = "common::wire::role_code")]
    pub role: Role,
    pub status: UserStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// New user creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub cc: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(with = "common::wire::role_code")]
    pub role: Role,
    pub status: UserStatus,
    pub password: String,
}

/// Partial user update payload for PATCH requests
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(with = "common::wire::role_code_opt", default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_decodes_integer_role() {
        let json = r#"{
            "id": 7,
            "cc": "1019283746",
            "email": "ana@hospital.example",
            "name": "Ana",
            "role": 1,
            "status": "active"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.status, UserStatus::Active);
        assert!(user.created_at.is_none());
    }

    #[test]
    fn new_user_encodes_role_as_code() {
        let payload = NewUser {
            cc: "1234".to_string(),
            email: "med@hospital.example".to_string(),
            name: None,
            role: Role::Med,
            status: UserStatus::Active,
            password: "Secret123".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["role"], 3);
        assert_eq!(json["status"], "active");
        assert!(json.get("name").is_none());
    }

    #[test]
    fn update_skips_absent_fields() {
        let update = UserUpdate {
            status: Some(UserStatus::Inactive),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, "{\"status\":\"inactive\"}");
    }
}
