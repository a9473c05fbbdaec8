use std::net::IpAddr;

use letterbox_core_contact_contracts::{ContactService, ContactSubmitError, DispatchOutcome};
use letterbox_email_contracts::EmailService;
use letterbox_models::{contact::ContactSubmission, email_address::EmailAddressWithName};
use letterbox_ratelimit_contracts::RateLimitService;
use letterbox_shared_contracts::time::TimeService;
use letterbox_templates_contracts::TemplateService;
use tracing::debug;

mod dispatch;
mod sanitize;
mod validate;

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<RateLimit, Email, Template, Time> {
    ratelimit: RateLimit,
    email: Email,
    template: Template,
    time: Time,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    pub admin_email: EmailAddressWithName,
}

impl<RateLimit, Email, Template, Time> ContactServiceImpl<RateLimit, Email, Template, Time> {
    pub fn new(
        ratelimit: RateLimit,
        email: Email,
        template: Template,
        time: Time,
        config: ContactServiceConfig,
    ) -> Self {
        Self {
            ratelimit,
            email,
            template,
            time,
            config,
        }
    }
}

impl<RateLimit, Email, Template, Time> ContactService
    for ContactServiceImpl<RateLimit, Email, Template, Time>
where
    RateLimit: RateLimitService,
    Email: EmailService,
    Template: TemplateService,
    Time: TimeService,
{
    async fn submit(
        &self,
        client: IpAddr,
        submission: ContactSubmission,
    ) -> Result<(), ContactSubmitError> {
        // The rate check runs first so abusive clients cost no validation
        // or dispatch work.
        if !self.ratelimit.check(client.to_string()).await {
            debug!(%client, "contact submission rate limited");
            return Err(ContactSubmitError::RateLimited);
        }

        let errors = validate::validate(&submission);
        if !errors.is_empty() {
            debug!(%client, ?errors, "contact submission failed validation");
            return Err(ContactSubmitError::Validation(errors));
        }

        let sanitized = sanitize::sanitize(&submission, self.time.now());

        match dispatch::dispatch(
            &self.email,
            &self.template,
            &self.config.admin_email,
            &sanitized,
        )
        .await
        {
            DispatchOutcome::Sent => Ok(()),
            DispatchOutcome::MailUnavailable => Err(ContactSubmitError::MailUnavailable),
            DispatchOutcome::Unhandled(err) => Err(ContactSubmitError::Other(err)),
        }
    }
}
