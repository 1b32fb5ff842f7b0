use serde::{Deserialize, Serialize};

/// An authenticated user as reported by the backend.
///
/// Token issuance and verification are entirely server-side; the core only
/// stores the token string and this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend user id (opaque string)
    pub id: String,

    /// Display name
    pub username: String,

    /// Account email
    pub email: String,

    #[serde(default)]
    pub is_admin: bool,

    #[serde(default)]
    pub is_premium: bool,
}
