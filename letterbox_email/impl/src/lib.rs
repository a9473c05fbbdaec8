use std::time::Duration;

use anyhow::{anyhow, Context};
use lettre::{
    message::{header, MessageBuilder, MultiPart},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use letterbox_email_contracts::{Email, EmailService};
use letterbox_models::email_address::EmailAddressWithName;
use letterbox_utils::Apply;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddressWithName,
    send_timeout: Duration,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    pub fn new(
        url: &str,
        from: EmailAddressWithName,
        send_timeout: Duration,
    ) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self {
            from,
            send_timeout,
            transport,
        })
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let builder = Message::builder()
            .from(self.from.0.clone())
            .to(email.recipient.0)
            .apply_map(email.reply_to, |builder, reply_to| {
                MessageBuilder::reply_to(builder, reply_to.0)
            })
            .subject(email.subject);

        let message = match email.html {
            Some(html) => {
                builder.multipart(MultiPart::alternative_plain_html(email.text, html))?
            }
            None => builder
                .header(header::ContentType::TEXT_PLAIN)
                .body(email.text)?,
        };

        let response = tokio::time::timeout(self.send_timeout, self.transport.send(message))
            .await
            .context("Smtp send timed out")??;

        Ok(response.is_positive())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}
