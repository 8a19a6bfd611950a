//! Grid endpoints
//!
//! Months are zero-based in the path (January = 0), matching the grid
//! generator; out-of-range values borrow or carry whole years.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use agenda_core::{DayCell, MonthGrid};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/grid/{year}", get(year_grid))
        .route("/grid/{year}/{month}", get(month_grid))
}

/// GET /grid/:year/:month - The 42-cell grid for one month
async fn month_grid(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, i32)>,
) -> Json<Vec<DayCell>> {
    Json(state.with_session(|session| session.month_grid(year, month)))
}

/// GET /grid/:year - Twelve month grids for the year overview
async fn year_grid(State(state): State<AppState>, Path(year): Path<i32>) -> Json<Vec<MonthGrid>> {
    Json(state.with_session(|session| session.year_grid(year)))
}
