//! Common library for the CancerVisionHub client
//!
//! This crate provides shared functionality used across the client library
//! and the CLI, including the error taxonomy, environment-based
//! configuration, and the wire-format conversions for enumerated fields.

pub mod config;
pub mod error;
pub mod wire;
