use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};
use pairlist_core::{
    errors::ValidationError,
    intersection::IntersectionResult,
    snapshots::DateRange,
    utils::parse_date_key,
    Result,
};

/// Query string of the pairlist endpoint. Every field is kept raw so that
/// malformed numbers degrade to 0 instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PairlistQuery {
    pub days: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub limit: Option<String>,
}

impl PairlistQuery {
    pub fn days(&self) -> i64 {
        leading_int(self.days.as_deref())
    }

    pub fn limit(&self) -> i64 {
        leading_int(self.limit.as_deref())
    }

    /// Picks the requested range: a positive `days` wins, otherwise both
    /// explicit dates are required.
    pub fn resolve_range(&self, today: NaiveDate, max_range_days: i64) -> Result<DateRange> {
        let days = self.days();
        let range = if days > 0 {
            DateRange::trailing_days(days.unsigned_abs(), today)?
        } else {
            let (start, end) = match (non_empty(&self.start_date), non_empty(&self.end_date)) {
                (Some(start), Some(end)) => (start, end),
                _ => return Err(ValidationError::MissingParameters.into()),
            };
            DateRange::new(parse_date_key(start)?, parse_date_key(end)?)?
        };
        range.ensure_max_days(max_range_days)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Leading integer of `value`, ignoring surrounding text (`"3abc"` is 3,
/// `"2.5"` is 2). Anything without leading digits is 0.
fn leading_int(value: Option<&str>) -> i64 {
    let Some(value) = value else {
        return 0;
    };
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let mut parsed: i64 = 0;
    for c in digits.chars().take_while(char::is_ascii_digit) {
        let digit = i64::from(c.to_digit(10).unwrap_or(0));
        parsed = parsed.saturating_mul(10).saturating_add(digit);
    }

    if negative {
        -parsed
    } else {
        parsed
    }
}

async fn get_pairlist(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PairlistQuery>,
) -> ApiResult<Json<IntersectionResult>> {
    let today = state.clock.today();
    let range = query.resolve_range(today, state.max_range_days)?;
    let result = state
        .intersection_service
        .compute_intersection(range.start(), range.end(), query.limit())
        .await?;
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/pairlist", get(get_pairlist))
}

/// Route for the bare `/` path, which serves the same handler.
pub fn root_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(get_pairlist))
}
