//! `Mailer` backed by the Resend HTTP API.

use async_trait::async_trait;
use common::EmailAddress;
use serde::{Deserialize, Serialize};

use crate::mailer::{EmailError, Mailer};

/// Sender identity used when none is configured.
pub const DEFAULT_FROM: &str = "AIODEV <onboarding@resend.dev>";

/// Resend API base URL.
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// Settings for [`ResendMailer`].
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// API key. May be absent at startup; sends then fail with
    /// `EmailError::Configuration`.
    pub api_key: Option<String>,
    pub from: String,
    pub base_url: String,
}

impl Default for ResendConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            from: DEFAULT_FROM.to_string(),
            base_url: DEFAULT_RESEND_API_URL.to_string(),
        }
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

/// Sends email through Resend's `POST /emails` endpoint.
#[derive(Debug, Clone)]
pub struct ResendMailer {
    client: reqwest::Client,
    config: ResendConfig,
}

impl ResendMailer {
    pub fn new(config: ResendConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Returns true if an API key was supplied.
    pub fn has_credential(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    #[tracing::instrument(skip(self, html), fields(to = %to))]
    async fn send(&self, to: &EmailAddress, subject: &str, html: &str) -> Result<(), EmailError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| EmailError::Configuration("Missing Resend API key".to_string()))?;

        let body = SendEmailRequest {
            from: &self.config.from,
            to: [to.as_str()],
            subject,
            html,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        match response.json::<SendEmailResponse>().await {
            Ok(sent) => tracing::debug!(email_id = %sent.id, "email accepted by provider"),
            Err(e) => tracing::debug!(error = %e, "email accepted, response body unreadable"),
        }
        Ok(())
    }
}
