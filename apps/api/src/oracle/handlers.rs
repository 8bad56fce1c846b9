//! Axum route handlers for the oracle API.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{self, Product};
use crate::errors::AppError;
use crate::oracle::{self, daily, Hall, Totem};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Date fields arrive from a form, so numbers and numeric strings are both
/// accepted; everything else is a validation error.
#[derive(Debug, Deserialize)]
pub struct ReadingRequest {
    #[serde(default)]
    pub day: Option<Value>,
    #[serde(default)]
    pub month: Option<Value>,
    #[serde(default)]
    pub year: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ReadingResponse {
    pub slavic: &'static Hall,
    pub totem: &'static Totem,
    pub zodiac: &'static str,
    pub product: &'static Product,
}

#[derive(Debug, Serialize)]
pub struct DailyCardResponse {
    pub id: u32,
    pub title: &'static str,
    pub text: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/oracle/reading
///
/// Resolves a birth date into the full reading plus the recommended
/// product. Field presence and bounds are validated here; the resolver
/// itself never rejects an in-domain date, however implausible.
pub async fn handle_reading(
    Json(request): Json<ReadingRequest>,
) -> Result<Json<ReadingResponse>, AppError> {
    let day = parse_field("day", request.day.as_ref())?;
    let month = parse_field("month", request.month.as_ref())?;
    let year = parse_field("year", request.year.as_ref())?;

    if !(1..=31).contains(&day) {
        return Err(AppError::Validation("day must be between 1 and 31".to_string()));
    }
    if !(1..=12).contains(&month) {
        return Err(AppError::Validation("month must be between 1 and 12".to_string()));
    }
    let year = i32::try_from(year)
        .map_err(|_| AppError::Validation("year is out of range".to_string()))?;

    let reading = oracle::resolve(day as u8, month as u8, year);
    let product = catalog::recommend(
        reading.slavic.hall,
        reading.slavic.god,
        reading.totem.totem,
    );

    Ok(Json(ReadingResponse {
        slavic: reading.slavic,
        totem: reading.totem,
        zodiac: reading.zodiac,
        product,
    }))
}

/// POST /api/oracle/daily-card
///
/// Returns the card of the day, drawing a fresh one on the first call of
/// each calendar day.
pub async fn handle_daily_card(State(state): State<AppState>) -> Json<DailyCardResponse> {
    let today = Utc::now().date_naive();
    let card = daily::draw(
        state.store.as_ref(),
        &daily::DAILY_CARDS,
        today,
        &mut rand::thread_rng(),
    );

    Json(DailyCardResponse {
        id: card.id,
        title: card.title,
        text: card.text,
    })
}

/// Accepts a positive integer given as a JSON number or a numeric string.
fn parse_field(name: &str, value: Option<&Value>) -> Result<i64, AppError> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n > 0 => Ok(n),
        _ => Err(AppError::Validation(format!(
            "{name} must be a positive integer"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_field_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_field("day", Some(&json!(17))).unwrap(), 17);
        assert_eq!(parse_field("day", Some(&json!("17"))).unwrap(), 17);
        assert_eq!(parse_field("year", Some(&json!(" 1990 "))).unwrap(), 1990);
    }

    #[test]
    fn test_parse_field_rejects_garbage() {
        assert!(parse_field("day", None).is_err());
        assert!(parse_field("day", Some(&json!("axe"))).is_err());
        assert!(parse_field("day", Some(&json!(0))).is_err());
        assert!(parse_field("day", Some(&json!(-3))).is_err());
        assert!(parse_field("day", Some(&json!(2.5))).is_err());
        assert!(parse_field("day", Some(&json!(null))).is_err());
    }
}
