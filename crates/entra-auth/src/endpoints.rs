//! Microsoft identity-platform endpoints
//!
//! Token endpoints are tenant-scoped: every directory tenant gets its own
//! path under the shared authority host. The tenant id itself is not a
//! secret; it identifies the directory, not the client.

/// Authority host for the Microsoft identity platform (v2.0).
pub const AUTHORITY: &str = "https://login.microsoftonline.com";

/// Token endpoint for a directory tenant.
///
/// `tenant_id` is the directory (tenant) GUID or a verified domain name.
pub fn token_endpoint(tenant_id: &str) -> String {
    format!("{AUTHORITY}/{tenant_id}/oauth2/v2.0/token")
}
