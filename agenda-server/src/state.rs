use std::sync::{Arc, Mutex};

use agenda_core::{CalendarSession, FileStorage};
use anyhow::Result;

use crate::mailer::Mailer;

/// Shared application state.
///
/// The session sits behind a std mutex: every handler touches it briefly and
/// synchronously, and nothing holds the lock across an await.
#[derive(Clone)]
pub struct AppState {
    session: Arc<Mutex<CalendarSession<FileStorage>>>,
    pub mailer: Arc<Mailer>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let storage = FileStorage::open_default()?;
        let session = CalendarSession::open(storage);

        Ok(AppState {
            session: Arc::new(Mutex::new(session)),
            mailer: Arc::new(Mailer::from_env()),
        })
    }

    /// Run `f` with the session locked.
    ///
    /// A poisoned lock still holds usable state, so recover it rather than
    /// failing every request after one panicked handler.
    pub fn with_session<R>(&self, f: impl FnOnce(&mut CalendarSession<FileStorage>) -> R) -> R {
        let mut session = self.session.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut session)
    }
}
