use chrono::{DateTime, Local, Utc};
use letterbox_models::contact::{
    ContactSubmission, SanitizedSubmission, MESSAGE_MAX_CHARS, NAME_MAX_CHARS, PHONE_MAX_CHARS,
};

pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Trim, cap, and HTML-escape the accepted fields, and stamp the capture
/// time. Everything here ends up interpolated into generated email bodies,
/// so escaping runs unconditionally even though the input already passed
/// validation. Escaping an already-escaped value escapes it again.
pub(crate) fn sanitize(
    submission: &ContactSubmission,
    now: DateTime<Utc>,
) -> SanitizedSubmission {
    SanitizedSubmission {
        name: escape_html(&truncate(submission.name.trim(), NAME_MAX_CHARS)),
        email: escape_html(&submission.email.trim().to_lowercase()),
        phone: escape_html(&truncate(submission.phone.trim(), PHONE_MAX_CHARS)),
        message: escape_html(&truncate(submission.message.trim(), MESSAGE_MAX_CHARS)),
        timestamp: now
            .with_timezone(&Local)
            .format(TIMESTAMP_FORMAT)
            .to_string(),
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
