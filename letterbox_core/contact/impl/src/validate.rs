use std::sync::LazyLock;

use letterbox_models::contact::{
    ContactSubmission, MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS, NAME_MAX_CHARS, NAME_MIN_CHARS,
    PHONE_MAX_DIGITS, PHONE_MIN_DIGITS,
};
use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

/// Checks every field independently and collects all violations.
///
/// The error order is fixed (name, email, phone, message) so clients can
/// display the list deterministically. Lengths count characters, not bytes.
pub(crate) fn validate(submission: &ContactSubmission) -> Vec<String> {
    let mut errors = Vec::new();

    let name = submission.name.trim().chars().count();
    if name < NAME_MIN_CHARS {
        errors.push(format!(
            "Name must be at least {NAME_MIN_CHARS} characters long"
        ));
    } else if name > NAME_MAX_CHARS {
        errors.push(format!("Name must be less than {NAME_MAX_CHARS} characters"));
    }

    if !EMAIL_REGEX.is_match(submission.email.trim()) {
        errors.push("Please provide a valid email address".into());
    }

    // Phone is optional; only a non-empty value is checked.
    let phone = submission.phone.trim();
    if !phone.is_empty() {
        let digits = phone.chars().filter(char::is_ascii_digit).count();
        if !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits) {
            errors.push("Please provide a valid phone number".into());
        }
    }

    let message = submission.message.trim().chars().count();
    if message < MESSAGE_MIN_CHARS {
        errors.push(format!(
            "Message must be at least {MESSAGE_MIN_CHARS} characters long"
        ));
    } else if message > MESSAGE_MAX_CHARS {
        errors.push(format!(
            "Message must be less than {MESSAGE_MAX_CHARS} characters"
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid() -> ContactSubmission {
        ContactSubmission {
            name: "Max Mustermann".into(),
            email: "max.mustermann@example.de".into(),
            phone: String::new(),
            message: "Hello there, testing".into(),
        }
    }

    #[test]
    fn accepts_valid_submission() {
        assert_eq!(validate(&valid()), Vec::<String>::new());
    }

    #[test]
    fn name_bounds() {
        let mut submission = valid();

        submission.name = "J".into();
        assert_eq!(
            validate(&submission),
            ["Name must be at least 2 characters long"]
        );

        submission.name = "  J  ".into();
        assert_eq!(
            validate(&submission),
            ["Name must be at least 2 characters long"]
        );

        submission.name = "x".repeat(101);
        assert_eq!(
            validate(&submission),
            ["Name must be less than 100 characters"]
        );

        submission.name = "x".repeat(100);
        assert_eq!(validate(&submission), Vec::<String>::new());
    }

    #[test]
    fn email_pattern() {
        let mut submission = valid();

        for email in ["bad-email", "a@b", "a@b.c", "user@domain.", "@example.com", ""] {
            submission.email = email.into();
            assert_eq!(
                validate(&submission),
                ["Please provide a valid email address"],
                "email: {email:?}"
            );
        }

        for email in ["Jo@Example.COM", "user.name+tag@sub.domain.org", " padded@example.de "] {
            submission.email = email.into();
            assert_eq!(validate(&submission), Vec::<String>::new(), "email: {email:?}");
        }
    }

    #[test]
    fn phone_is_optional() {
        let mut submission = valid();

        submission.phone = String::new();
        assert_eq!(validate(&submission), Vec::<String>::new());

        submission.phone = "   ".into();
        assert_eq!(validate(&submission), Vec::<String>::new());
    }

    #[test]
    fn phone_digit_count() {
        let mut submission = valid();

        submission.phone = "+49 (0)30 1234-5678".into();
        assert_eq!(validate(&submission), Vec::<String>::new());

        submission.phone = "123456789".into();
        assert_eq!(
            validate(&submission),
            ["Please provide a valid phone number"]
        );

        submission.phone = "1".repeat(16);
        assert_eq!(
            validate(&submission),
            ["Please provide a valid phone number"]
        );
    }

    #[test]
    fn message_bounds() {
        let mut submission = valid();

        submission.message = "short".into();
        assert_eq!(
            validate(&submission),
            ["Message must be at least 10 characters long"]
        );

        submission.message = "x".repeat(1001);
        assert_eq!(
            validate(&submission),
            ["Message must be less than 1000 characters"]
        );
    }

    #[test]
    fn collects_all_violations_in_field_order() {
        let submission = ContactSubmission {
            name: "J".into(),
            email: "bad-email".into(),
            phone: "123".into(),
            message: "short".into(),
        };

        assert_eq!(
            validate(&submission),
            [
                "Name must be at least 2 characters long",
                "Please provide a valid email address",
                "Please provide a valid phone number",
                "Message must be at least 10 characters long",
            ]
        );
    }

    #[test]
    fn absent_fields_validate_as_empty() {
        assert_eq!(
            validate(&ContactSubmission::default()),
            [
                "Name must be at least 2 characters long",
                "Please provide a valid email address",
                "Message must be at least 10 characters long",
            ]
        );
    }
}
