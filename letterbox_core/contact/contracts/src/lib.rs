use std::{future::Future, net::IpAddr};

use letterbox_models::contact::ContactSubmission;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Runs the full submission pipeline: rate check, field validation,
    /// sanitization, and the two-email dispatch, in that order.
    fn submit(
        &self,
        client: IpAddr,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Rate limit exceeded.")]
    RateLimited,
    #[error("Submission failed field validation.")]
    Validation(Vec<String>),
    #[error("Failed to deliver notification emails.")]
    MailUnavailable,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result of attempting the two notification sends.
///
/// There is no partial-success state: a failure on either send stops the
/// sequence and the caller only learns that delivery is unavailable. An
/// already-sent admin notice is not rolled back.
#[derive(Debug)]
pub enum DispatchOutcome {
    Sent,
    MailUnavailable,
    Unhandled(anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_submit(
        mut self,
        client: IpAddr,
        submission: ContactSubmission,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(
                mockall::predicate::eq(client),
                mockall::predicate::eq(submission),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }
}
