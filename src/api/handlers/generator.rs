// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse};
use log::{debug, warn};

use crate::api::types::{ErrorResponse, GenerateQuery, GenerateResponse};
use crate::api::AppState;
use crate::models::StringOptions;

pub const MIN_LENGTH: i64 = 4;
pub const MAX_LENGTH: i64 = 128;
pub const DEFAULT_LENGTH: i64 = 12;

const LENGTH_ERROR: &str = "Length must be between 4 and 128 characters.";

// A flag stays on unless it is literally "false"
fn flag(value: &Option<String>) -> bool {
    value.as_deref() != Some("false")
}

// Leading integer of the value ("16px" reads as 16); missing, unreadable
// or zero lengths use the default.
fn requested_length(value: &Option<String>) -> i64 {
    value
        .as_deref()
        .and_then(leading_integer)
        .filter(|length| *length != 0)
        .unwrap_or(DEFAULT_LENGTH)
}

fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Overlong digit runs are out of range either way
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Generate a random password
///
/// Generates a string-mode password from the character categories in the
/// query. Every category is enabled unless set to `false`.
#[utoipa::path(
    get,
    path = "/api/generate",
    tag = "Generator",
    params(GenerateQuery),
    responses(
        (status = 200, description = "Generated password", body = GenerateResponse),
        (status = 400, description = "Invalid length or no character types", body = ErrorResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<AppState>,
    query: web::Query<GenerateQuery>,
) -> HttpResponse {
    let length = requested_length(&query.length);

    // Validate length before doing any work
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        warn!("❌ Rejected password length {}", length);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: LENGTH_ERROR.to_string(),
        });
    }

    let options = StringOptions {
        length: length as usize,
        include_lowercase: flag(&query.lowercase),
        include_uppercase: flag(&query.uppercase),
        include_numbers: flag(&query.numbers),
        include_symbols: flag(&query.symbols),
        avoid_ambiguous: false,
    };
    debug!("🔑 Generating password with {:?}", options);

    match state.generator.generate_password(&options) {
        Ok(password) => HttpResponse::Ok().json(GenerateResponse {
            password,
            success: true,
        }),
        Err(e) => {
            warn!("❌ Password generation rejected: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse { error: e.to_string() })
        }
    }
}
