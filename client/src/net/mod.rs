//! Networking modules for the shortener REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `config` resolves the base URL they are
//! issued against, and `types` defines the wire schema.

pub mod api;
pub mod config;
pub mod types;
