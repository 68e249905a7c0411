use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use time::{macros::format_description, Date, OffsetDateTime, UtcOffset};
use tracing::{error, instrument, warn};

use super::dto::NutritionData;
use super::services;
use crate::state::AppState;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/nutrition", get(get_nutrition))
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[instrument(skip(state))]
pub async fn get_nutrition(
    State(state): State<AppState>,
    Query(q): Query<DateQuery>,
) -> Result<Json<NutritionData>, (StatusCode, String)> {
    let date = match q.date {
        Some(raw) => {
            if Date::parse(&raw, format_description!("[year]-[month]-[day]")).is_err() {
                warn!(date = %raw, "invalid date parameter");
                return Err((
                    StatusCode::BAD_REQUEST,
                    "Invalid date, expected YYYY-MM-DD".into(),
                ));
            }
            raw
        }
        None => today(&state),
    };

    match services::nutrition_for_date(&state, &date).await {
        Ok(data) => Ok(Json(data)),
        Err(e) => {
            error!(error = %e, %date, "nutrition lookup failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch nutrition data".into(),
            ))
        }
    }
}

/// Current date in the dashboard's fixed timezone offset.
fn today(state: &AppState) -> String {
    let offset = UtcOffset::from_whole_seconds(state.config.utc_offset_minutes * 60)
        .unwrap_or(UtcOffset::UTC);
    let date = OffsetDateTime::now_utc().to_offset(offset).date();
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
