use std::sync::Arc;

use log::*;
use report_common::Secret;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client,
};
use serde::Serialize;

use crate::{
    config::MailConfig,
    mailer::{EmailMessage, MailError, MailTransport},
};

pub const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// Sends mail through the SendGrid v3 `mail/send` endpoint.
///
/// Construction never fails. If the HTTP client cannot be built, the error is kept and every send reports it as
/// [`MailError::Initialization`], so a broken mail setup shows up as a failed delivery rather than a failed run.
#[derive(Clone)]
pub struct SendGridMailer {
    url: String,
    api_key: Secret<String>,
    client: Result<Arc<Client>, String>,
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

#[derive(Debug, Serialize)]
struct SendMailRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

impl<'a> From<&'a EmailMessage> for SendMailRequest<'a> {
    fn from(msg: &'a EmailMessage) -> Self {
        Self {
            personalizations: vec![Personalization { to: vec![Address { email: &msg.to }] }],
            from: Address { email: &msg.from },
            subject: &msg.subject,
            content: vec![Content { content_type: "text/plain", value: &msg.body }],
        }
    }
}

impl SendGridMailer {
    pub fn new(config: &MailConfig) -> Self {
        Self::with_url(config, SENDGRID_SEND_URL)
    }

    /// Like [`SendGridMailer::new`], but posts to `url` instead of the public SendGrid endpoint.
    ///
    /// The API key is not checked here. A missing or malformed key is reported when a message is sent.
    pub fn with_url(config: &MailConfig, url: &str) -> Self {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder().default_headers(headers).build().map(Arc::new).map_err(|e| e.to_string());
        Self::with_client(config, url, client)
    }

    pub(crate) fn with_client(config: &MailConfig, url: &str, client: Result<Arc<Client>, String>) -> Self {
        if let Err(e) = &client {
            warn!("📧️ Could not build the mail client. Sending will fail. {e}");
        }
        Self { url: url.to_string(), api_key: config.api_key.clone(), client }
    }
}

impl MailTransport for SendGridMailer {
    async fn send(&self, message: &EmailMessage) -> Result<u16, MailError> {
        let client = self.client.as_ref().map_err(|e| MailError::Initialization(e.clone()))?;
        let body = SendMailRequest::from(message);
        trace!("Sending mail request to {}: {}", self.url, serde_json::to_string(&body).unwrap_or_default());
        let response = client
            .post(&self.url)
            .bearer_auth(self.api_key.reveal())
            .json(&body)
            .send()
            .await
            .map_err(|e| MailError::RequestError(e.to_string()))?;
        let status = response.status().as_u16();
        if response.status().is_success() {
            debug!("Mail accepted for delivery to {}. Status {status}", message.to);
            Ok(status)
        } else {
            let message = response.text().await.map_err(|e| MailError::RequestError(e.to_string()))?;
            Err(MailError::Rejected { status, message })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::canned_http::canned_http_response;

    fn mail_config(api_key: &str) -> MailConfig {
        MailConfig {
            api_key: Secret::new(api_key.to_string()),
            from: "reports@example.com".into(),
            to: "owner@example.com".into(),
        }
    }

    fn message() -> EmailMessage {
        EmailMessage {
            from: "reports@example.com".into(),
            to: "owner@example.com".into(),
            subject: "Shopify Monthly Report – February 2024 – 0 physical orders".into(),
            body: "No physical orders this month.".into(),
        }
    }

    #[test]
    fn request_body_shape() {
        let msg = message();
        let json = serde_json::to_value(SendMailRequest::from(&msg)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "personalizations": [{ "to": [{ "email": "owner@example.com" }] }],
                "from": { "email": "reports@example.com" },
                "subject": "Shopify Monthly Report – February 2024 – 0 physical orders",
                "content": [{ "type": "text/plain", "value": "No physical orders this month." }]
            })
        );
    }

    #[tokio::test]
    async fn accepted_message_returns_status() {
        let base = canned_http_response("202 Accepted", "").await;
        let mailer = SendGridMailer::with_url(&mail_config("SG.key"), &format!("{base}/v3/mail/send"));
        let status = mailer.send(&message()).await.unwrap();
        assert_eq!(status, 202);
    }

    #[tokio::test]
    async fn non_success_status_is_rejected() {
        let body = r#"{"errors":[{"message":"The from address does not match a verified Sender Identity"}]}"#;
        let base = canned_http_response("403 Forbidden", body).await;
        let mailer = SendGridMailer::with_url(&mail_config("SG.key"), &format!("{base}/v3/mail/send"));
        match mailer.send(&message()).await {
            Err(MailError::Rejected { status, message }) => {
                assert_eq!(status, 403);
                assert!(message.contains("verified Sender Identity"));
            },
            r => panic!("Expected a rejection, got {r:?}"),
        }
    }

    #[tokio::test]
    async fn bad_api_key_is_a_delivery_error() {
        let mailer = SendGridMailer::new(&mail_config("SG.bad\r\nkey"));
        let result = mailer.send(&message()).await;
        assert!(matches!(result, Err(MailError::RequestError(_))));
    }

    #[tokio::test]
    async fn client_build_failure_surfaces_on_send() {
        let mailer =
            SendGridMailer::with_client(&mail_config("SG.key"), SENDGRID_SEND_URL, Err("no TLS backend".to_string()));
        match mailer.send(&message()).await {
            Err(MailError::Initialization(e)) => assert_eq!(e, "no TLS backend"),
            r => panic!("Expected an initialization error, got {r:?}"),
        }
    }

    #[test]
    fn custom_url() {
        let mailer = SendGridMailer::with_url(&mail_config("SG.key"), "http://localhost:3030/v3/mail/send");
        assert_eq!(mailer.url, "http://localhost:3030/v3/mail/send");
    }
}
