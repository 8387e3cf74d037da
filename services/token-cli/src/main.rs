//! FHIR token CLI
//!
//! Single-binary tool for working with the synthetic FHIR deployment:
//! 1. `token` (default): acquire a client-credentials access token from
//!    the configured Entra tenant and print it
//! 2. `find-patient`: fetch patient records and print the ones matching
//!    the supplied name, date of birth, and postcode
//!
//! Output contract for `token`: the endpoint URL is printed to stdout
//! before the request is made; on success the token follows (an empty
//! line when the provider omitted the field); on a non-200 response the
//! fixed marker `Fail` is printed and the process exits non-zero. Logs
//! go to stderr so stdout stays pipeable.

mod config;

use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use entra_auth::{ClientCredentials, Error as AuthError};
use fhir_records::PatientProfile;

use crate::config::{Config, FhirConfig};

/// Value of `--flag value` style arguments.
fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing with LOG_LEVEL / RUST_LOG support; stderr only
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("LOG_LEVEL")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    let config_path = Config::resolve_path(flag_value(&args, "--config"));
    info!(path = %config_path.display(), "loading configuration");
    let mut config = Config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    // First non-flag argument selects the command
    let command = args
        .get(1)
        .map(|s| s.as_str())
        .filter(|s| !s.starts_with("--"))
        .unwrap_or("token");

    match command {
        "token" => acquire_and_print(&mut config).await,
        "find-patient" => find_patient(&config, &args).await,
        other => bail!("unknown command: {other} (expected `token` or `find-patient`)"),
    }
}

/// Acquire a client-credentials token and print it.
async fn acquire_and_print(config: &mut Config) -> Result<()> {
    let endpoint = config.auth.resolved_endpoint()?;
    let secret = config.auth.client_secret.take().context(
        "client secret not configured; set AZURE_CLIENT_SECRET or auth.client_secret_file",
    )?;
    let credentials = ClientCredentials::new(
        config.auth.client_id.clone(),
        secret,
        config.auth.scope.clone(),
        endpoint,
    );

    // The endpoint URL goes to stdout before the request is made,
    // whether or not the request then succeeds
    println!("{}", credentials.token_endpoint);

    let client = reqwest::Client::new();
    match entra_auth::acquire_token(&client, &credentials).await {
        Ok(token) => {
            info!(
                token_type = token.token_type.as_deref(),
                expires_in = token.expires_in,
                "token acquired"
            );
            println!("{}", token.access_token.unwrap_or_default());
            Ok(())
        }
        Err(AuthError::AuthenticationFailed { status, body }) => {
            error!(status, body = %body, "authentication failed");
            println!("Fail");
            std::process::exit(1);
        }
        Err(err) => Err(err).context("token acquisition failed"),
    }
}

/// Look up patient records matching the supplied identity details.
async fn find_patient(config: &Config, args: &[String]) -> Result<()> {
    let fhir = config
        .fhir
        .as_ref()
        .context("[fhir] section missing from configuration")?;

    let profile = PatientProfile {
        name: flag_value(args, "--name")
            .context("--name is required")?
            .to_owned(),
        birth_year: parse_flag(args, "--year")?,
        birth_month: parse_flag(args, "--month")?,
        birth_day: parse_flag(args, "--day")?,
        postcode: flag_value(args, "--postcode")
            .context("--postcode is required")?
            .to_owned(),
    };

    let client = build_record_client(fhir)?;
    let matches = fhir_records::find_records(&client, &fhir.base_url, &profile)
        .await
        .context("record lookup failed")?;

    if matches.is_empty() {
        println!("No matching records");
    } else {
        for patient in &matches {
            println!(
                "{}\t{}",
                patient.id.as_deref().unwrap_or("-"),
                patient.display_name()
            );
        }
    }
    Ok(())
}

fn parse_flag<T>(args: &[String], name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    flag_value(args, name)
        .with_context(|| format!("{name} is required"))?
        .parse()
        .with_context(|| format!("{name} must be a number"))
}

/// HTTP client for the record server: short timeout, and self-signed
/// certificates only when the config explicitly opted in.
fn build_record_client(fhir: &FhirConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(fhir.timeout_secs))
        .danger_accept_invalid_certs(fhir.accept_invalid_certs)
        .build()
        .context("building record server HTTP client")
}
