use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use super::{NotificationError, Notifier};
use crate::config::SmtpConfig;

const SMTP_TIMEOUT: Duration = Duration::from_secs(60);

/// Authenticated SMTP notifier. STARTTLS is negotiated before credentials are sent,
/// and every `send` opens and closes its own session.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    pub fn new(config: &SmtpConfig) -> Result<Self, NotificationError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(SMTP_TIMEOUT))
            .build();

        Ok(Self {
            transport,
            from: parse_mailbox(&config.from)?,
        })
    }

    fn build_message(&self, to: &str, subject: &str, body: &str) -> Result<Message, NotificationError> {
        Ok(Message::builder()
            .from(self.from.clone())
            .to(parse_mailbox(to)?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?)
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), NotificationError> {
        let message = self.build_message(to, subject, body)?;
        let response = self.transport.send(message).await?;
        debug!("SMTP accepted message for {to}: {:?}", response.code());
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotificationError> {
    address
        .parse::<Mailbox>()
        .map_err(|source| NotificationError::Address {
            address: address.to_string(),
            source,
        })
}
