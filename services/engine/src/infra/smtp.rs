use anyhow::{Context as _, anyhow};
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::repository::MailPort;

/// Fixed SMTP relay for outbound OTP mail (STARTTLS, port 587).
const SMTP_RELAY: &str = "smtp.gmail.com";

/// SMTP mail adapter. Built once at startup; without credentials every
/// send fails, which the delivery worker logs.
pub struct SmtpMailer {
    transport: Option<(AsyncSmtpTransport<Tokio1Executor>, String)>,
}

impl SmtpMailer {
    pub fn from_credentials(
        email: Option<String>,
        password: Option<String>,
    ) -> anyhow::Result<Self> {
        let transport = match (email, password) {
            (Some(email), Some(password)) => {
                let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(SMTP_RELAY)
                    .context("building SMTP transport")?
                    .credentials(Credentials::new(email.clone(), password))
                    .build();
                Some((transport, email))
            }
            _ => None,
        };
        Ok(Self { transport })
    }

    fn otp_body(code: &str) -> String {
        format!(
            r#"<html>
    <body style="font-family: sans-serif;">
        <h2>Pariharam Verification</h2>
        <p>Your OTP code is:</p>
        <h1 style="color: #4F46E5; font-size: 32px; letter-spacing: 5px;">{code}</h1>
        <p>This code will expire in 10 minutes.</p>
    </body>
</html>"#
        )
    }
}

impl MailPort for SmtpMailer {
    async fn send_otp(&self, to: &str, code: &str) -> anyhow::Result<()> {
        let (transport, from) = self
            .transport
            .as_ref()
            .ok_or_else(|| anyhow!("SMTP credentials not set"))?;
        let message = Message::builder()
            .from(from.parse().context("invalid from address")?)
            .to(to.parse().context("invalid recipient address")?)
            .subject("Your Pariharam Verification Code")
            .header(ContentType::TEXT_HTML)
            .body(Self::otp_body(code))
            .context("building OTP message")?;
        transport.send(message).await.context("sending OTP email")?;
        Ok(())
    }
}
