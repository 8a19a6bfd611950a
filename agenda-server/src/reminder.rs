//! Hourly reminder check.

use std::time::Duration;

use agenda_core::DateKey;
use agenda_core::reminder::due_tomorrow;
use chrono::Local;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::state::AppState;

const CHECK_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Spawn the background task that checks for events scheduled tomorrow and
/// sends one reminder per qualifying event. The first check runs immediately,
/// then once an hour. A failed send is logged and does not stop the loop or
/// the rest of the batch.
///
/// There is no sent-flag: an event keeps qualifying on every check until its
/// date passes, so it is re-sent each hour until then.
pub fn spawn_hourly_check(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CHECK_INTERVAL);
        loop {
            interval.tick().await;
            run_check(&state).await;
        }
    })
}

async fn run_check(state: &AppState) {
    let today = DateKey::new(Local::now().date_naive());
    let due = state.with_session(|session| due_tomorrow(session.events(), today));

    if due.is_empty() {
        return;
    }
    info!(count = due.len(), "sending reminders for tomorrow's events");

    for reminder in &due {
        if let Err(err) = state.mailer.send(reminder).await {
            error!(%err, to = %reminder.email, title = %reminder.event_title, "reminder send failed");
        }
    }
}
