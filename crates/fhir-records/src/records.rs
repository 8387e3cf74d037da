//! Profile matching and record retrieval
//!
//! A record matches when all three checks agree: the official name, the
//! birth date, and any address postcode. Verification data comes from the
//! caller, so a single wrong answer yields zero matches rather than a
//! partial one.

use tracing::debug;

use crate::error::{Error, Result};
use crate::patient::{Bundle, Patient};

/// Identity details to match records against.
#[derive(Debug, Clone)]
pub struct PatientProfile {
    /// Full name as "Given Family"
    pub name: String,
    pub birth_year: u16,
    pub birth_month: u8,
    pub birth_day: u8,
    pub postcode: String,
}

impl PatientProfile {
    /// Date of birth in the FHIR `birthDate` form, zero-padded.
    pub fn birth_date(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.birth_year, self.birth_month, self.birth_day
        )
    }

    /// All three criteria must hold.
    pub fn matches(&self, patient: &Patient) -> bool {
        self.matches_name(patient) && self.matches_birth_date(patient) && self.matches_postcode(patient)
    }

    fn matches_name(&self, patient: &Patient) -> bool {
        patient
            .name
            .iter()
            .filter(|entry| entry.name_use.as_deref() == Some("official"))
            .any(|entry| match (entry.given.first(), entry.family.as_ref()) {
                (Some(given), Some(family)) => format!("{given} {family}") == self.name,
                _ => false,
            })
    }

    fn matches_postcode(&self, patient: &Patient) -> bool {
        patient
            .address
            .iter()
            .any(|address| address.postal_code.as_deref() == Some(self.postcode.as_str()))
    }

    fn matches_birth_date(&self, patient: &Patient) -> bool {
        patient.birth_date.as_deref() == Some(self.birth_date().as_str())
    }
}

/// Fetch every patient bundle from `<base_url>/api/Patient` and return
/// the resources matching `profile`.
///
/// Single GET, no paging: the synthetic record server returns the whole
/// dataset as one JSON array of bundles.
pub async fn find_records(
    client: &reqwest::Client,
    base_url: &str,
    profile: &PatientProfile,
) -> Result<Vec<Patient>> {
    let url = format!("{}/api/Patient", base_url.trim_end_matches('/'));
    debug!(url = %url, "fetching patient records");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::Transport(format!("record request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            status: status.as_u16(),
        });
    }

    let bundles: Vec<Bundle> = response
        .json()
        .await
        .map_err(|e| Error::InvalidResponse(format!("undecodable record response: {e}")))?;

    let matches: Vec<Patient> = bundles
        .into_iter()
        .flat_map(|bundle| bundle.entry)
        .filter_map(|entry| entry.resource)
        .filter(|patient| profile.matches(patient))
        .collect();

    debug!(matches = matches.len(), "record lookup complete");
    Ok(matches)
}
