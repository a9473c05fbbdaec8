use letterbox_models::contact::ContactSubmission;
use serde_json::Value;

/// Builds the raw submission from an arbitrary JSON body.
///
/// Returns `None` unless the body is a JSON object. Absent or non-string
/// members enter as empty strings, so a request like `{"name": 5}` fails
/// field validation instead of JSON parsing.
pub fn submission_from_json(value: &Value) -> Option<ContactSubmission> {
    let object = value.as_object()?;
    let field = |key: &str| {
        object
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned()
    };

    Some(ContactSubmission {
        name: field("name"),
        email: field("email"),
        phone: field("phone"),
        message: field("message"),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn extracts_string_fields() {
        let value = json!({
            "name": "Jo",
            "email": "jo@example.com",
            "message": "Hello there, testing",
        });

        assert_eq!(
            submission_from_json(&value),
            Some(ContactSubmission {
                name: "Jo".into(),
                email: "jo@example.com".into(),
                phone: String::new(),
                message: "Hello there, testing".into(),
            })
        );
    }

    #[test]
    fn non_string_members_enter_as_empty() {
        let value = json!({"name": 5, "email": ["jo@example.com"], "message": null});

        assert_eq!(
            submission_from_json(&value),
            Some(ContactSubmission::default())
        );
    }

    #[test]
    fn rejects_non_objects() {
        assert_eq!(submission_from_json(&json!([])), None);
        assert_eq!(submission_from_json(&json!("text")), None);
        assert_eq!(submission_from_json(&json!(null)), None);
    }
}
