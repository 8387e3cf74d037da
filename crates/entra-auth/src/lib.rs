//! Microsoft Entra ID client-credentials authentication library
//!
//! Acquires an OAuth2 access token from a tenant-scoped Microsoft
//! identity-platform token endpoint using the client-credentials grant
//! (service-to-service, no end user). This crate is a standalone library
//! with no dependency on the CLI binary; it can be tested and used
//! independently.
//!
//! Token flow:
//! 1. Caller builds a [`ClientCredentials`] (directly or via
//!    [`ClientCredentials::for_tenant`])
//! 2. [`token::acquire_token`] POSTs the form-encoded grant to the
//!    token endpoint
//! 3. The returned [`TokenResponse`] carries the access token, which the
//!    caller presents to the downstream API
//!
//! One request, one response. There is no caching, refresh scheduling,
//! or retry here.

pub mod credentials;
pub mod endpoints;
pub mod error;
pub mod token;

pub use credentials::ClientCredentials;
pub use endpoints::{AUTHORITY, token_endpoint};
pub use error::{Error, Result};
pub use token::{TokenResponse, acquire_token};
