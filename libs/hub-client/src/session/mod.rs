//! Persisted session handling

pub mod store;
pub mod token;

pub use store::SessionStore;
pub use token::{TokenPayload, decode_access_token};
