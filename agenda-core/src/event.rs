//! Calendar events and form drafts.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::date_key::{DateKey, EventTime};

/// A user-created calendar event.
///
/// Field names serialize in camelCase to match the stored and wire JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: DateKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<EventTime>,
    /// Presence signals "send a reminder the day before".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_email: Option<String>,
}

/// Form input for a new event, before an id is assigned.
///
/// `title` and `date` are required. A draft missing either is silently
/// dropped by the session: no event created, no error raised.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<DateKey>,
    #[serde(default)]
    pub time: Option<EventTime>,
    #[serde(default)]
    pub notification_email: Option<String>,
}

impl EventDraft {
    /// Whether the draft carries the required fields to become an event.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && self.date.is_some()
    }

    /// Mint an event from this draft, assigning a fresh id.
    /// Returns None when required fields are missing.
    pub fn into_event(self) -> Option<CalendarEvent> {
        if !self.is_valid() {
            return None;
        }
        let date = self.date?;

        Some(CalendarEvent {
            id: Uuid::new_v4().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.filter(|d| !d.trim().is_empty()),
            date,
            time: self.time,
            notification_email: self.notification_email.filter(|e| !e.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, date: Option<&str>) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            date: date.map(|d| d.parse().unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_draft_requires_title_and_date() {
        assert!(draft("Dentist", Some("2025-05-01")).into_event().is_some());
        assert!(draft("", Some("2025-05-01")).into_event().is_none());
        assert!(draft("   ", Some("2025-05-01")).into_event().is_none());
        assert!(draft("Dentist", None).into_event().is_none());
    }

    #[test]
    fn test_minted_events_get_unique_ids() {
        let a = draft("One", Some("2025-05-01")).into_event().unwrap();
        let b = draft("Two", Some("2025-05-01")).into_event().unwrap();
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
    }

    #[test]
    fn test_event_serializes_camel_case() {
        let mut event = draft("Standup", Some("2025-03-20")).into_event().unwrap();
        event.time = Some("09:15".parse().unwrap());
        event.notification_email = Some("a@b.com".to_string());

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"notificationEmail\":\"a@b.com\""));
        assert!(json.contains("\"date\":\"2025-03-20\""));
        assert!(json.contains("\"time\":\"09:15\""));
        // Absent optionals are omitted entirely
        assert!(!json.contains("description"));
    }

    #[test]
    fn test_event_deserializes_sparse_json() {
        let event: CalendarEvent = serde_json::from_str(
            r#"{"id":"1","title":"Cita","date":"2025-05-01"}"#,
        )
        .unwrap();
        assert_eq!(event.title, "Cita");
        assert!(event.time.is_none());
        assert!(event.notification_email.is_none());
    }

    #[test]
    fn test_blank_optionals_are_dropped() {
        let event = EventDraft {
            title: "Review".to_string(),
            description: Some("".to_string()),
            date: Some("2025-06-10".parse().unwrap()),
            notification_email: Some("  ".to_string()),
            ..Default::default()
        }
        .into_event()
        .unwrap();

        assert!(event.description.is_none());
        assert!(event.notification_email.is_none());
    }
}
