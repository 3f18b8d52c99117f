//! Access token payload decoding
//!
//! The backend issues JWT-style tokens whose payload carries the user's
//! identity. The client only needs those claims for display and routing,
//! so the payload is base64-decoded without verifying the signature; the
//! backend re-validates the token on every call anyway.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use common::error::{ClientError, ClientResult};
use common::wire::Role;
use serde::Deserialize;

/// Claims the client extracts from an access token
#[derive(Debug, Deserialize)]
pub struct TokenPayload {
    pub cc: String,
    pub email: String,
    #[serde(deserialize_with = "common::wire::role_flex::deserialize")]
    pub role: Role,
    #[serde(default)]
    pub name: Option<String>,
}

/// Decode the payload segment of a compact JWT
pub fn decode_access_token(token: &str) -> ClientResult<TokenPayload> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| ClientError::Token("token is not in compact JWT form".to_string()))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|err| ClientError::Token(format!("payload is not valid base64: {err}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|err| ClientError::Token(format!("payload is not valid JSON: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forge_token(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"HS256\",\"typ\":\"JWT\"}");
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{header}.{body}.signature")
    }

    #[test]
    fn decodes_string_role_payload() {
        let token = forge_token(serde_json::json!({
            "cc": "1019283746",
            "email": "ana@hospital.example",
            "role": "MED",
            "name": "Ana"
        }));

        let payload = decode_access_token(&token).unwrap();
        assert_eq!(payload.cc, "1019283746");
        assert_eq!(payload.role, Role::Med);
        assert_eq!(payload.name.as_deref(), Some("Ana"));
    }

    #[test]
    fn decodes_integer_role_and_missing_name() {
        let token = forge_token(serde_json::json!({
            "cc": "55",
            "email": "root@hospital.example",
            "role": 1
        }));

        let payload = decode_access_token(&token).unwrap();
        assert_eq!(payload.role, Role::Admin);
        assert!(payload.name.is_none());
    }

    #[test]
    fn rejects_tokens_without_payload_segment() {
        assert!(matches!(
            decode_access_token("justonesegment"),
            Err(ClientError::Token(_))
        ));
    }

    #[test]
    fn rejects_garbage_payload() {
        assert!(matches!(
            decode_access_token("aaa.%%%.bbb"),
            Err(ClientError::Token(_))
        ));
    }
}
