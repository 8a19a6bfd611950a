//! Event and non-working-day endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::Serialize;

use agenda_core::{CalendarEvent, DateKey, EventDraft};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/{id}", put(update_event).delete(delete_event))
        .route("/non-working-days", get(list_non_working_days))
        .route("/non-working-days/{date}/toggle", post(toggle_non_working_day))
}

/// GET /events - List all events
async fn list_events(State(state): State<AppState>) -> Json<Vec<CalendarEvent>> {
    Json(state.with_session(|session| session.events().to_vec()))
}

/// POST /events - Create an event from a form draft.
///
/// A draft missing its title or date creates nothing and answers 422 with an
/// empty body; this is form validation, not a server error.
async fn create_event(
    State(state): State<AppState>,
    Json(draft): Json<EventDraft>,
) -> Result<Response, AppError> {
    let created = state.with_session(|session| session.add_event(draft))?;

    Ok(match created {
        Some(event) => (StatusCode::CREATED, Json(event)).into_response(),
        None => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    })
}

/// PUT /events/:id - Replace an event with a new form draft.
///
/// 404 for an unknown id; an invalid draft answers 422 and changes nothing,
/// like event creation.
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<EventDraft>,
) -> Result<Response, AppError> {
    enum Outcome {
        Updated(CalendarEvent),
        NotFound,
        Invalid,
    }

    let outcome: agenda_core::AgendaResult<Outcome> = state.with_session(|session| {
        if session.event(&id).is_none() {
            return Ok(Outcome::NotFound);
        }
        Ok(match session.update_event(&id, draft)? {
            Some(event) => Outcome::Updated(event),
            None => Outcome::Invalid,
        })
    });

    Ok(match outcome? {
        Outcome::Updated(event) => Json(event).into_response(),
        Outcome::NotFound => StatusCode::NOT_FOUND.into_response(),
        Outcome::Invalid => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    })
}

/// DELETE /events/:id - Delete an event
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.with_session(|session| session.remove_event(&id))? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// GET /non-working-days - The custom non-working dates
async fn list_non_working_days(State(state): State<AppState>) -> Json<Vec<DateKey>> {
    Json(state.with_session(|session| session.non_working_days().iter().copied().collect()))
}

#[derive(Serialize)]
pub struct ToggleResponse {
    pub date: DateKey,
    /// Whether the date is in the custom non-working set after the flip.
    pub non_working: bool,
}

/// POST /non-working-days/:date/toggle - Flip a date in the custom set
async fn toggle_non_working_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<ToggleResponse>, AppError> {
    let date: DateKey = date.parse().map_err(AppError::bad_request)?;
    let non_working = state.with_session(|session| session.toggle_non_working(date))?;

    Ok(Json(ToggleResponse { date, non_working }))
}
