//! OAuth2 authorization-code client for the Microsoft identity platform.
//!
//! This crate builds authorization URLs, exchanges authorization codes and
//! refresh tokens at the v2.0 token endpoint, and fetches the signed-in
//! user's profile and group memberships from Microsoft Graph with a bearer
//! token. Endpoint configuration is an explicit immutable value injected at
//! construction; client credentials are passed per call and never stored.
//!
//! The anti-forgery state is generated fresh per authorization request and
//! verified explicitly on code exchange. Graph responses pass through as
//! `serde_json::Value` without projection.

mod client;
mod config;
mod error;
mod nonce;
mod types;


pub use client::GraphClient;
pub use config::{ClientCredentials, MicrosoftEndpoints};
pub use error::{GraphError, GraphResult};
pub use types::TokenResponse;
