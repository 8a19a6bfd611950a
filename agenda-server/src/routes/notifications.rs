//! Reminder notification endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use tracing::error;

use agenda_core::reminder::{ReminderRequest, ReminderResponse};

use crate::mailer::MailError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/send-notification", post(send_notification))
}

/// POST /send-notification - Send one reminder email.
///
/// 200 on success, 400 when the mail provider rejects the send, 500 on
/// anything unexpected. The body always carries the success flag.
async fn send_notification(
    State(state): State<AppState>,
    Json(reminder): Json<ReminderRequest>,
) -> (StatusCode, Json<ReminderResponse>) {
    match state.mailer.send(&reminder).await {
        Ok(()) => (StatusCode::OK, Json(ReminderResponse::ok("Notificación enviada"))),
        Err(err) => {
            error!(%err, to = %reminder.email, "failed to send reminder");
            (status_for(&err), Json(ReminderResponse::failed(err.to_string())))
        }
    }
}

fn status_for(err: &MailError) -> StatusCode {
    match err {
        MailError::Rejected(_) => StatusCode::BAD_REQUEST,
        MailError::Transport(_) | MailError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
