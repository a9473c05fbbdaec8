use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Response,
    routing, Extension, Json, Router,
};
use letterbox_core_contact_contracts::{ContactService, ContactSubmitError};
use serde_json::Value;

use super::{errors, internal_server_error, message};
use crate::{middlewares::client_ip::ClientIp, models::contact::submission_from_json};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactService>>,
    Extension(client_ip): Extension<ClientIp>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let value = match payload {
        Ok(Json(value)) => value,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return message(
                StatusCode::PAYLOAD_TOO_LARGE,
                false,
                "Request body too large.",
            )
        }
        Err(_) => return invalid_json(),
    };

    let Some(submission) = submission_from_json(&value) else {
        return invalid_json();
    };

    match service.submit(client_ip.0, submission).await {
        Ok(()) => message(
            StatusCode::OK,
            true,
            "Thank you! Your message has been sent successfully.",
        ),
        Err(ContactSubmitError::RateLimited) => message(
            StatusCode::TOO_MANY_REQUESTS,
            false,
            "Too many requests. Please try again later.",
        ),
        Err(ContactSubmitError::Validation(validation_errors)) => {
            errors(StatusCode::BAD_REQUEST, validation_errors)
        }
        Err(ContactSubmitError::MailUnavailable) => message(
            StatusCode::SERVICE_UNAVAILABLE,
            false,
            "Email service temporarily unavailable.",
        ),
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}

fn invalid_json() -> Response {
    errors(
        StatusCode::BAD_REQUEST,
        vec!["Invalid or missing JSON data".into()],
    )
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};

    use anyhow::anyhow;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
    };
    use letterbox_core_contact_contracts::MockContactService;
    use letterbox_models::contact::ContactSubmission;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;

    const CLIENT: IpAddr = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7));

    #[tokio::test]
    async fn ok() {
        // Arrange
        let service = MockContactService::new().with_submit(CLIENT, submission(), Ok(()));

        // Act
        let (status, body) = request(service, json!(payload()).to_string()).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "message": "Thank you! Your message has been sent successfully.",
            })
        );
    }

    #[tokio::test]
    async fn rate_limited() {
        // Arrange
        let service = MockContactService::new().with_submit(
            CLIENT,
            submission(),
            Err(ContactSubmitError::RateLimited),
        );

        // Act
        let (status, body) = request(service, json!(payload()).to_string()).await;

        // Assert
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            body,
            json!({
                "success": false,
                "message": "Too many requests. Please try again later.",
            })
        );
    }

    #[tokio::test]
    async fn validation_errors() {
        // Arrange
        let service = MockContactService::new().with_submit(
            CLIENT,
            submission(),
            Err(ContactSubmitError::Validation(vec![
                "Name must be at least 2 characters long".into(),
                "Please provide a valid email address".into(),
            ])),
        );

        // Act
        let (status, body) = request(service, json!(payload()).to_string()).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "success": false,
                "errors": [
                    "Name must be at least 2 characters long",
                    "Please provide a valid email address",
                ],
            })
        );
    }

    #[tokio::test]
    async fn mail_unavailable() {
        // Arrange
        let service = MockContactService::new().with_submit(
            CLIENT,
            submission(),
            Err(ContactSubmitError::MailUnavailable),
        );

        // Act
        let (status, body) = request(service, json!(payload()).to_string()).await;

        // Assert
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body,
            json!({
                "success": false,
                "message": "Email service temporarily unavailable.",
            })
        );
    }

    #[tokio::test]
    async fn unexpected_failure() {
        // Arrange
        let service = MockContactService::new().with_submit(
            CLIENT,
            submission(),
            Err(ContactSubmitError::Other(anyhow!("boom"))),
        );

        // Act
        let (status, body) = request(service, json!(payload()).to_string()).await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"success": false, "message": "Internal server error."})
        );
    }

    #[tokio::test]
    async fn unparseable_body() {
        // Arrange
        let service = MockContactService::new();

        // Act
        let (status, body) = request(service, "{not json".into()).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"success": false, "errors": ["Invalid or missing JSON data"]})
        );
    }

    #[tokio::test]
    async fn non_object_body() {
        // Arrange
        let service = MockContactService::new();

        // Act
        let (status, body) = request(service, json!(["Jo"]).to_string()).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"success": false, "errors": ["Invalid or missing JSON data"]})
        );
    }

    #[tokio::test]
    async fn non_string_members_fall_through_to_validation() {
        // Arrange
        let service = MockContactService::new().with_submit(
            CLIENT,
            ContactSubmission {
                name: "Jo".into(),
                ..Default::default()
            },
            Err(ContactSubmitError::Validation(vec![
                "Please provide a valid email address".into(),
            ])),
        );

        // Act
        let (status, _) = request(
            service,
            json!({"name": "Jo", "email": 42, "message": {}}).to_string(),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn oversized_body() {
        // Arrange
        let service = MockContactService::new();
        let body = format!(
            "{{\"message\": \"{}\"}}",
            "x".repeat(crate::REQUEST_BODY_LIMIT)
        );

        // Act
        let (status, body) = request(service, body).await;

        // Assert
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            body,
            json!({"success": false, "message": "Request body too large."})
        );
    }

    fn payload() -> Value {
        json!({
            "name": "Jo",
            "email": "jo@example.com",
            "message": "Hello there, testing",
        })
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Jo".into(),
            email: "jo@example.com".into(),
            phone: String::new(),
            message: "Hello there, testing".into(),
        }
    }

    async fn request(service: MockContactService, body: String) -> (StatusCode, Value) {
        let router = router(Arc::new(service));

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .extension(ClientIp(CLIENT))
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}
