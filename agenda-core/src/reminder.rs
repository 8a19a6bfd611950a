//! Reminder payloads for tomorrow's events.
//!
//! `due_tomorrow` is the pure scan behind the hourly notification check; the
//! request/response structs are the `/send-notification` wire contract.

use serde::{Deserialize, Serialize};

use crate::date_key::{DateKey, EventTime};
use crate::event::CalendarEvent;

/// Body of a `POST /send-notification` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRequest {
    pub email: String,
    pub event_title: String,
    pub event_date: DateKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_time: Option<EventTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_description: Option<String>,
}

/// Body of a `/send-notification` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReminderResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        ReminderResponse {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        ReminderResponse {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

impl ReminderRequest {
    /// Build the reminder payload for an event, if it opted in to one.
    pub fn for_event(event: &CalendarEvent) -> Option<Self> {
        let email = event.notification_email.clone()?;
        Some(ReminderRequest {
            email,
            event_title: event.title.clone(),
            event_date: event.date,
            event_time: event.time,
            event_description: event.description.clone(),
        })
    }
}

/// One reminder per event scheduled for the day after `today` that carries a
/// notification email.
///
/// The scan has no memory: re-running it with the same inputs yields the same
/// requests, so callers wanting at-most-once delivery must dedupe themselves.
pub fn due_tomorrow(events: &[CalendarEvent], today: DateKey) -> Vec<ReminderRequest> {
    let tomorrow = today.succ();
    events
        .iter()
        .filter(|e| e.date == tomorrow)
        .filter_map(ReminderRequest::for_event)
        .collect()
}
