//! Minimal serde projection of the FHIR patient resources
//!
//! Only the fields the matcher reads are modeled; everything else in the
//! resource is ignored during deserialization. Missing `name`/`address`
//! arrays deserialize as empty, which the matcher treats as no match.

use serde::Deserialize;

/// A FHIR bundle as returned by the record server. The synthetic server
/// answers `/api/Patient` with a JSON array of these.
#[derive(Debug, Clone, Deserialize)]
pub struct Bundle {
    #[serde(default)]
    pub entry: Vec<BundleEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BundleEntry {
    pub resource: Option<Patient>,
}

/// A patient resource, projected down to the matchable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct Patient {
    pub id: Option<String>,
    #[serde(default)]
    pub name: Vec<HumanName>,
    #[serde(default)]
    pub address: Vec<Address>,
    /// ISO `YYYY-MM-DD`
    #[serde(rename = "birthDate")]
    pub birth_date: Option<String>,
}

/// One entry of a patient's `name` array. Matching only considers
/// entries whose `use` is `official`.
#[derive(Debug, Clone, Deserialize)]
pub struct HumanName {
    #[serde(rename = "use")]
    pub name_use: Option<String>,
    #[serde(default)]
    pub given: Vec<String>,
    pub family: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    #[serde(rename = "postalCode")]
    pub postal_code: Option<String>,
}

impl Patient {
    /// Display name: first given name + family from the official entry,
    /// falling back to the resource id.
    pub fn display_name(&self) -> String {
        self.name
            .iter()
            .find(|n| n.name_use.as_deref() == Some("official"))
            .and_then(|n| {
                let given = n.given.first()?;
                let family = n.family.as_ref()?;
                Some(format!("{given} {family}"))
            })
            .or_else(|| self.id.clone())
            .unwrap_or_else(|| String::from("<unnamed>"))
    }
}
