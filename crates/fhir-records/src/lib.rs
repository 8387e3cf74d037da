//! Patient record lookup against a FHIR endpoint
//!
//! Retrieves every patient bundle from the record server and selects the
//! resources matching a caller-supplied profile: official name, date of
//! birth, and address postcode must all agree. The server is typically a
//! local synthetic-data instance, so the HTTP client may be built with a
//! short timeout and (explicitly opted-in) self-signed certificates.

pub mod error;
pub mod patient;
pub mod records;

pub use error::{Error, Result};
pub use patient::{Address, Bundle, BundleEntry, HumanName, Patient};
pub use records::{PatientProfile, find_records};
