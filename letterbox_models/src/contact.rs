/// Raw, untrusted contact form fields as they arrived in the request body.
///
/// Absent or non-string JSON values enter as empty strings, so every field
/// is always present here and field validation produces the error messages
/// instead of the JSON layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// A submission that passed validation and went through the sanitizer.
///
/// All fields are trimmed, length-capped, and HTML-escaped; the email is
/// additionally lower-cased. `timestamp` is the sanitize-time capture in
/// `YYYY-MM-DD HH:MM:SS` server-local time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub timestamp: String,
}

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX_DIGITS: usize = 15;
pub const PHONE_MAX_CHARS: usize = 20;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1000;
