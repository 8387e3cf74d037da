//! Configuration types and loading
//!
//! Config precedence: CLI args > env vars > config file > defaults.
//! The client secret is loaded from the AZURE_CLIENT_SECRET env var or
//! client_secret_file, never stored in the TOML directly to avoid
//! leaking secrets.

use common::SecretString;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration
#[derive(Debug, Deserialize)]
pub struct Config {
    pub auth: AuthConfig,
    /// Optional: only needed for the record lookup command
    #[serde(default)]
    pub fhir: Option<FhirConfig>,
}

/// Token endpoint and client identity
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// Directory (tenant) id; the token endpoint is derived from it
    #[serde(default)]
    pub tenant_id: Option<String>,
    /// Full token endpoint URL; takes precedence over tenant_id
    #[serde(default)]
    pub token_endpoint: Option<String>,
    pub client_id: String,
    pub scope: String,
    #[serde(skip)]
    pub client_secret: Option<SecretString>,
    /// Path to a file containing the client secret (alternative to the
    /// AZURE_CLIENT_SECRET env var)
    #[serde(default)]
    pub client_secret_file: Option<PathBuf>,
}

/// Record server settings
#[derive(Debug, Deserialize)]
pub struct FhirConfig {
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Accept self-signed certificates. Only for local synthetic-data
    /// servers; keep false anywhere else.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

fn default_timeout() -> u64 {
    10
}

impl AuthConfig {
    /// The token endpoint to POST to: explicit URL if given, otherwise
    /// derived from the tenant id.
    pub fn resolved_endpoint(&self) -> common::Result<String> {
        if let Some(ref endpoint) = self.token_endpoint {
            Ok(endpoint.clone())
        } else if let Some(ref tenant) = self.tenant_id {
            Ok(entra_auth::token_endpoint(tenant))
        } else {
            Err(common::Error::Config(
                "either auth.token_endpoint or auth.tenant_id is required".into(),
            ))
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, then overlay environment
    /// variables.
    ///
    /// Client secret resolution order:
    /// 1. AZURE_CLIENT_SECRET env var
    /// 2. client_secret_file path from config
    pub fn load(path: &Path) -> common::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents)?;

        // Validate an explicit token_endpoint is a URL with http(s) scheme
        if let Some(ref endpoint) = config.auth.token_endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(common::Error::Config(format!(
                    "auth.token_endpoint must start with http:// or https://, got: {endpoint}"
                )));
            }
        }

        if let Some(ref fhir) = config.fhir {
            if !fhir.base_url.starts_with("http://") && !fhir.base_url.starts_with("https://") {
                return Err(common::Error::Config(format!(
                    "fhir.base_url must start with http:// or https://, got: {}",
                    fhir.base_url
                )));
            }
            if fhir.timeout_secs == 0 {
                return Err(common::Error::Config(
                    "fhir.timeout_secs must be greater than 0".into(),
                ));
            }
        }

        // Resolve client secret: env var takes precedence over file
        if let Ok(secret) = std::env::var("AZURE_CLIENT_SECRET") {
            config.auth.client_secret = Some(SecretString::new(secret));
        } else if let Some(ref secret_file) = config.auth.client_secret_file {
            let secret = std::fs::read_to_string(secret_file).map_err(|e| {
                common::Error::Config(format!(
                    "failed to read client_secret_file {}: {e}",
                    secret_file.display()
                ))
            })?;
            let secret = secret.trim().to_owned();
            if !secret.is_empty() {
                config.auth.client_secret = Some(SecretString::new(secret));
            }
        }

        Ok(config)
    }

    /// Resolve config file path from CLI arg or CONFIG_PATH env var.
    pub fn resolve_path(cli_path: Option<&str>) -> PathBuf {
        if let Some(p) = cli_path {
            return PathBuf::from(p);
        }
        if let Ok(p) = std::env::var("CONFIG_PATH") {
            return PathBuf::from(p);
        }
        PathBuf::from("fhir-token.toml")
    }
}
