//! Client-credentials grant inputs
//!
//! A [`ClientCredentials`] value is built once from configuration and
//! passed by reference into [`crate::token::acquire_token`]. It is
//! immutable for the process lifetime; there is no module-level state.

use common::SecretString;

use crate::endpoints;

/// Inputs for one client-credentials token request.
///
/// The fields are not validated here: an empty or malformed client id,
/// secret, or scope produces a provider-rejected response (a
/// [`crate::Error::AuthenticationFailed`]), not a local error.
#[derive(Debug)]
pub struct ClientCredentials {
    /// Application (client) id registered with the directory
    pub client_id: String,
    /// Client secret, redacted everywhere except the request body
    pub client_secret: SecretString,
    /// Resource scope, e.g. `https://<fhir-host>/.default`
    pub scope: String,
    /// Full token endpoint URL
    pub token_endpoint: String,
}

impl ClientCredentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: SecretString,
        scope: impl Into<String>,
        token_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret,
            scope: scope.into(),
            token_endpoint: token_endpoint.into(),
        }
    }

    /// Credentials against the Microsoft identity platform for a tenant.
    pub fn for_tenant(
        tenant_id: &str,
        client_id: impl Into<String>,
        client_secret: SecretString,
        scope: impl Into<String>,
    ) -> Self {
        Self::new(
            client_id,
            client_secret,
            scope,
            endpoints::token_endpoint(tenant_id),
        )
    }
}
