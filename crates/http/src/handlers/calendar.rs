use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use chief_core::{CalendarEvent, NewEvent};
use chief_service::FreeSlot;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{FreeDaysQuery, UpcomingQuery};

const MAX_UPCOMING_DAYS: u32 = 90;

pub async fn today(State(state): State<Arc<AppState>>) -> Result<Json<Vec<CalendarEvent>>, ApiError> {
    Ok(Json(state.services.calendar.todays_events().await?))
}

pub async fn upcoming(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UpcomingQuery>,
) -> Result<Json<Vec<CalendarEvent>>, ApiError> {
    let days = query.days.clamp(1, MAX_UPCOMING_DAYS);
    Ok(Json(state.services.calendar.upcoming_events(days).await?))
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(event): Json<NewEvent>,
) -> Result<Json<CalendarEvent>, ApiError> {
    Ok(Json(state.services.calendar.create_event(&event).await?))
}

/// Working days with no timed events, 08:00 to 18:00 local.
pub async fn free_days(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FreeDaysQuery>,
) -> Result<Json<Vec<FreeSlot>>, ApiError> {
    let days = query.days.clamp(1, MAX_UPCOMING_DAYS);
    Ok(Json(state.services.calendar.find_free_days(days).await?))
}
