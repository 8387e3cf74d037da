//! Client-credentials token acquisition
//!
//! One POST to the configured token endpoint, form-encoded per RFC 6749
//! §4.4. The provider answers 200 with a JSON body on success; any other
//! status is an authentication failure regardless of body content.

use serde::Deserialize;
use tracing::debug;

use crate::credentials::ClientCredentials;
use crate::error::{Error, Result};

/// Response from the token endpoint.
///
/// `access_token` is a pass-through: a 200 response that omits the field
/// yields `None` rather than an error, and nothing here inspects the
/// token value itself. `token_type` and `expires_in` are carried for
/// display only; expiry scheduling is out of scope.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
}

/// Acquire an access token using the client-credentials grant.
///
/// Issues exactly one request and returns the terminal outcome: no
/// retries, no timeout override beyond what `client` was built with.
///
/// The form fields are serialized in fixed order (`grant_type`,
/// `client_id`, `client_secret`, `scope`) with values percent-encoded,
/// so reserved characters inside the secret cannot corrupt the body.
pub async fn acquire_token(
    client: &reqwest::Client,
    credentials: &ClientCredentials,
) -> Result<TokenResponse> {
    debug!(endpoint = %credentials.token_endpoint, "requesting client-credentials token");

    let response = client
        .post(&credentials.token_endpoint)
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.expose()),
            ("scope", credentials.scope.as_str()),
        ])
        .send()
        .await
        .map_err(|e| Error::Transport(format!("token request failed: {e}")))?;

    let status = response.status().as_u16();
    if status != 200 {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<no body>"));
        return Err(Error::AuthenticationFailed { status, body });
    }

    response
        .json::<TokenResponse>()
        .await
        .map_err(|e| Error::InvalidResponse(format!("undecodable token response: {e}")))
}
