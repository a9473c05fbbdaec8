use anyhow::Context;
use letterbox_config::EmailConfig;
use letterbox_email_impl::EmailServiceImpl;

/// Create the SMTP transport.
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(
        &config.smtp_url,
        config.from.clone().into(),
        *config.send_timeout,
    )
    .context("Failed to create SMTP transport")
}
