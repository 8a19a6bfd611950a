//! Event management commands.

use agenda_core::{CalendarSession, DateKey, EventDraft, Storage};
use anyhow::Result;

use crate::render;

pub fn list<S: Storage>(session: &CalendarSession<S>, date: Option<&str>) -> Result<()> {
    let events: Vec<_> = match date {
        Some(raw) => {
            let date: DateKey = raw.parse()?;
            session.events_on(date)
        }
        None => session.events().iter().collect(),
    };

    if events.is_empty() {
        println!("No events.");
        return Ok(());
    }

    for event in events {
        println!("{}", render::event_line(event));
    }

    Ok(())
}

pub fn new<S: Storage>(
    session: &mut CalendarSession<S>,
    title: String,
    date: &str,
    time: Option<&str>,
    description: Option<String>,
    email: Option<String>,
) -> Result<()> {
    let draft = EventDraft {
        title,
        date: Some(date.parse()?),
        time: time.map(str::parse).transpose()?,
        description,
        notification_email: email,
    };

    match session.add_event(draft)? {
        Some(event) => println!("Created \"{}\" on {}  [{}]", event.title, event.date, event.id),
        None => println!("Nothing created: an event needs a title and a date."),
    }

    Ok(())
}

pub fn edit<S: Storage>(
    session: &mut CalendarSession<S>,
    id: &str,
    title: String,
    date: &str,
    time: Option<&str>,
    description: Option<String>,
    email: Option<String>,
) -> Result<()> {
    if session.event(id).is_none() {
        println!("No event with id {}", id);
        return Ok(());
    }

    let draft = EventDraft {
        title,
        date: Some(date.parse()?),
        time: time.map(str::parse).transpose()?,
        description,
        notification_email: email,
    };

    match session.update_event(id, draft)? {
        Some(event) => println!("Updated \"{}\" on {}  [{}]", event.title, event.date, event.id),
        None => println!("Nothing updated: an event needs a title and a date."),
    }

    Ok(())
}

pub fn delete<S: Storage>(session: &mut CalendarSession<S>, id: &str) -> Result<()> {
    if session.remove_event(id)? {
        println!("Deleted event {}", id);
    } else {
        println!("No event with id {}", id);
    }

    Ok(())
}
