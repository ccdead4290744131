// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::{IntoParams, ToSchema};

/// Query string of `GET /api/generate`.
///
/// Values are kept as raw strings: a flag is only off when it is the
/// literal `false`, and an unparseable length falls back to the default.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenerateQuery {
    /// Password length (4-128, default 12)
    pub length: Option<String>,
    /// Include lowercase letters unless "false"
    pub lowercase: Option<String>,
    /// Include uppercase letters unless "false"
    pub uppercase: Option<String>,
    /// Include digits unless "false"
    pub numbers: Option<String>,
    /// Include symbols unless "false"
    pub symbols: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// The generated password
    pub password: String,
    /// Always true on success
    pub success: bool,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Why the request was rejected
    pub error: String,
}
