//! Display derivations over a successful lead.
//!
//! Everything here is pure and recomputed on demand from the stored payload.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const ROLE_PLACEHOLDER: &str = "—";
pub const HIRING_MANAGER_LABEL: &str = "The Hiring Manager";
pub const DEFAULT_CONTACT_NAME: &str = "the CTO";
pub const NO_RECENT_NEWS: &str = "No recent news found.";
pub const DEFAULT_MAIL_SUBJECT: &str =
    "GenAI Intern Application - Automating your internal workflows";
pub const COMPOSE_BASE_URL: &str = "https://mail.google.com/mail/?view=cm&fs=1&to=";
pub const COPIED_ACK_DURATION: Duration = Duration::from_secs(2);

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Human-facing label for the contact the draft is addressed to.
///
/// Only meant for the raw contact name from the payload, not for its own output.
pub fn role_label(contact_name: &str) -> String {
    if contact_name.is_empty() {
        return ROLE_PLACEHOLDER.to_string();
    }
    let lowered = contact_name.to_lowercase();
    if lowered.contains("hiring manager") {
        HIRING_MANAGER_LABEL.to_string()
    } else if lowered.contains("cto") {
        contact_name.to_string()
    } else {
        format!("{contact_name} — CTO")
    }
}

pub fn company_pulse_display(pulse: &str) -> &str {
    if pulse.is_empty() {
        NO_RECENT_NEWS
    } else {
        pulse
    }
}

/// Mail-compose link with `subject` and `body` percent-encoded.
pub fn compose_link(subject: &str, body: &str) -> String {
    format!(
        "{COMPOSE_BASE_URL}&su={}&body={}",
        utf8_percent_encode(subject, URI_COMPONENT),
        utf8_percent_encode(body, URI_COMPONENT)
    )
}
