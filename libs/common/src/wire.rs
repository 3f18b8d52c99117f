//! Wire-format conversions for enumerated fields
//!
//! The backend encodes user roles as small integers on the user CRUD
//! endpoints (1 = ADMIN, 2 = DEV, 3 = MED) but as strings inside token
//! payloads. Historically each service client carried its own mapping;
//! the conversions now live here and every client goes through them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Dev,
    Med,
}

impl Role {
    /// Integer code used by the user CRUD endpoints
    pub fn code(self) -> u8 {
        match self {
            Role::Admin => 1,
            Role::Dev => 2,
            Role::Med => 3,
        }
    }

    /// Decode an integer role code
    pub fn from_code(code: u8) -> Option<Role> {
        match code {
            1 => Some(Role::Admin),
            2 => Some(Role::Dev),
            3 => Some(Role::Med),
            _ => None,
        }
    }

    /// Canonical string form, as carried in token payloads
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Dev => "DEV",
            Role::Med => "MED",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "DEV" => Ok(Role::Dev),
            "MED" => Ok(Role::Med),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// User account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            other => Err(format!("unknown status '{other}'")),
        }
    }
}

/// Serde adapter for roles carried as integer codes
///
/// Used with `#[serde(with = "common::wire::role_code")]` on user CRUD
/// payloads and responses.
pub mod role_code {
    use super::Role;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(role: &Role, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(role.code())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Role, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = u8::deserialize(deserializer)?;
        Role::from_code(code).ok_or_else(|| D::Error::custom(format!("unknown role code {code}")))
    }
}

/// Serde adapter for optional roles carried as integer codes
///
/// Meant for partial-update payloads together with
/// `#[serde(skip_serializing_if = "Option::is_none")]`.
pub mod role_code_opt {
    use super::Role;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(role: &Option<Role>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match role {
            Some(role) => serializer.serialize_some(&role.code()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<u8>::deserialize(deserializer)? {
            Some(code) => Role::from_code(code)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("unknown role code {code}"))),
            None => Ok(None),
        }
    }
}

/// Serde adapter tolerating both role encodings
///
/// Token payloads have carried the role as a string (`"ADMIN"`) or as an
/// integer code depending on the backend revision; this adapter accepts
/// either and always serializes the string form.
pub mod role_flex {
    use super::Role;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRole {
        Code(u8),
        Name(String),
    }

    pub fn serialize<S>(role: &Role, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(role.as_str())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Role, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawRole::deserialize(deserializer)? {
            RawRole::Code(code) => Role::from_code(code)
                .ok_or_else(|| D::Error::custom(format!("unknown role code {code}"))),
            RawRole::Name(name) => name.parse().map_err(D::Error::custom),
        }
    }
}
