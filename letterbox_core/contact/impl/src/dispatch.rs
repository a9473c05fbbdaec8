use anyhow::Context;
use letterbox_core_contact_contracts::DispatchOutcome;
use letterbox_email_contracts::{Email, EmailService};
use letterbox_models::{contact::SanitizedSubmission, email_address::EmailAddressWithName};
use letterbox_templates_contracts::{
    ContactAdminTemplate, ContactConfirmationTemplate, TemplateService,
};
use tracing::error;

pub(crate) const ADMIN_SUBJECT: &str = "New Contact Form Submission";
pub(crate) const CONFIRMATION_SUBJECT: &str = "Thank you for contacting us";

/// Builds the admin notice and the submitter confirmation and hands them to
/// the mail sender, admin first. A transport failure stops the sequence;
/// the already-sent first message is not rolled back and the caller only
/// learns that delivery is unavailable.
pub(crate) async fn dispatch(
    email: &impl EmailService,
    template: &impl TemplateService,
    admin: &EmailAddressWithName,
    submission: &SanitizedSubmission,
) -> DispatchOutcome {
    let messages = match build_messages(template, admin, submission) {
        Ok(messages) => messages,
        Err(err) => return DispatchOutcome::Unhandled(err),
    };

    for message in messages {
        let recipient = message.recipient.as_str().to_owned();
        match email.send(message).await {
            Ok(true) => {}
            Ok(false) => {
                error!("Mail sending failed: smtp server rejected message to {recipient}");
                return DispatchOutcome::MailUnavailable;
            }
            Err(err) => {
                error!("Mail sending failed: {err:#}");
                return DispatchOutcome::MailUnavailable;
            }
        }
    }

    DispatchOutcome::Sent
}

fn build_messages(
    template: &impl TemplateService,
    admin: &EmailAddressWithName,
    submission: &SanitizedSubmission,
) -> anyhow::Result<[Email; 2]> {
    let submitter = submission
        .email
        .parse::<EmailAddressWithName>()
        .context("Failed to parse submitter email address")?;

    let phone = match submission.phone.as_str() {
        "" => "Not provided".to_owned(),
        phone => phone.to_owned(),
    };

    let admin_html = template.render(&ContactAdminTemplate {
        name: submission.name.clone(),
        email: submission.email.clone(),
        phone: phone.clone(),
        date: submission.timestamp.clone(),
        message: submission.message.clone(),
    })?;

    let admin_text = format!(
        "New contact form submission:\n\
         \n\
         Name: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Date: {}\n\
         \n\
         Message:\n\
         {}\n",
        submission.name, submission.email, phone, submission.timestamp, submission.message
    );

    let confirmation_html = template.render(&ContactConfirmationTemplate {
        name: submission.name.clone(),
        message: submission.message.clone(),
    })?;

    let confirmation_text = format!(
        "Hello {},\n\
         \n\
         Thank you for contacting us.\n\
         We have received your message and will respond shortly.\n\
         \n\
         Your message:\n\
         {}\n\
         \n\
         Regards\n",
        submission.name, submission.message
    );

    Ok([
        Email {
            recipient: admin.clone(),
            subject: ADMIN_SUBJECT.into(),
            text: admin_text,
            html: Some(admin_html),
            reply_to: Some(submitter.clone()),
        },
        Email {
            recipient: submitter,
            subject: CONFIRMATION_SUBJECT.into(),
            text: confirmation_text,
            html: Some(confirmation_html),
            reply_to: None,
        },
    ])
}
