//! Outbound reminder email delivery.
//!
//! Reminders go out through the Resend HTTP API. Without an API key the
//! mailer is disabled and every send is refused, which keeps the rest of the
//! server usable for local work.

use agenda_core::reminder::ReminderRequest;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";
const DEFAULT_FROM: &str = "Agenda <onboarding@resend.dev>";

/// Why a reminder did not go out. Provider rejections map to a 400 at the
/// API surface, everything else to a 500.
#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail provider rejected the send: {0}")]
    Rejected(String),

    #[error("mail delivery failed: {0}")]
    Transport(String),

    #[error("no mail provider configured (set RESEND_API_KEY)")]
    NotConfigured,
}

pub enum Mailer {
    Resend {
        client: reqwest::Client,
        api_key: String,
        from: String,
    },
    /// No provider configured; every send fails with `NotConfigured`.
    Disabled,
}

#[derive(Serialize)]
struct ResendEmail<'a> {
    from: &'a str,
    to: &'a str,
    subject: String,
    html: String,
}

impl Mailer {
    /// Build from the environment: `RESEND_API_KEY` selects the provider,
    /// `AGENDA_MAIL_FROM` overrides the sender address.
    pub fn from_env() -> Self {
        match std::env::var("RESEND_API_KEY") {
            Ok(api_key) if !api_key.is_empty() => Mailer::Resend {
                client: reqwest::Client::new(),
                api_key,
                from: std::env::var("AGENDA_MAIL_FROM").unwrap_or_else(|_| DEFAULT_FROM.to_string()),
            },
            _ => Mailer::Disabled,
        }
    }

    pub async fn send(&self, reminder: &ReminderRequest) -> Result<(), MailError> {
        match self {
            Mailer::Disabled => Err(MailError::NotConfigured),
            Mailer::Resend { client, api_key, from } => {
                let email = ResendEmail {
                    from,
                    to: &reminder.email,
                    subject: subject_for(reminder),
                    html: html_body(reminder),
                };

                let response = client
                    .post(RESEND_ENDPOINT)
                    .bearer_auth(api_key)
                    .json(&email)
                    .send()
                    .await
                    .map_err(|e| MailError::Transport(e.to_string()))?;

                if response.status().is_success() {
                    debug!(to = %reminder.email, "reminder email sent");
                    return Ok(());
                }

                let status = response.status();
                let detail = response.text().await.unwrap_or_default();
                Err(MailError::Rejected(format!("{status}: {detail}")))
            }
        }
    }
}

const WEEKDAYS_ES: [&str; 7] = [
    "domingo",
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
];

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

pub(crate) fn subject_for(reminder: &ReminderRequest) -> String {
    format!("Recordatorio: {} mañana", reminder.event_title)
}

/// Long-form Spanish date, e.g. "viernes, 2 de mayo de 2025".
fn format_date_es(date: chrono::NaiveDate) -> String {
    use chrono::Datelike;
    format!(
        "{}, {} de {} de {}",
        WEEKDAYS_ES[date.weekday().num_days_from_sunday() as usize],
        date.day(),
        MONTHS_ES[date.month0() as usize],
        date.year()
    )
}

fn html_body(reminder: &ReminderRequest) -> String {
    let formatted_date = format_date_es(reminder.event_date.date());

    let mut rows = format!("<p><strong>Fecha:</strong> {formatted_date}</p>");
    if let Some(time) = reminder.event_time {
        rows.push_str(&format!("<p><strong>Hora:</strong> {time}</p>"));
    }
    if let Some(ref description) = reminder.event_description {
        rows.push_str(&format!("<p><strong>Descripción:</strong> {description}</p>"));
    }

    format!(
        "<html><body>\
         <h1>Recordatorio de Evento</h1>\
         <p>Tu evento <strong>{}</strong> es mañana.</p>\
         {rows}\
         <p>Este es un recordatorio automático de tu calendario.</p>\
         </body></html>",
        reminder.event_title
    )
}
