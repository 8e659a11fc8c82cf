use mailforge_core::{EmailValidator, EmailValidatorError, ValidityReport};
use reqwest::Client;

/// Disify validity checker.
///
/// `endpoint` is the full URL of the check endpoint, the address is posted
/// to it form-encoded.
#[derive(Debug, Clone)]
pub struct DisifyClient {
    http_client: Client,
    endpoint: String,
}

impl DisifyClient {
    pub fn new(endpoint: String, http_client: Client) -> Self {
        Self {
            http_client,
            endpoint,
        }
    }
}

#[async_trait::async_trait]
impl EmailValidator for DisifyClient {
    #[tracing::instrument(name = "Disify::check", skip(self))]
    async fn check(&self, email: &str) -> Result<ValidityReport, EmailValidatorError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .form(&[("email", email)])
            .send()
            .await
            .map_err(|e| EmailValidatorError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmailValidatorError::UnexpectedStatus(status.as_u16()));
        }

        let report: ValidityReport = response
            .json()
            .await
            .map_err(|e| EmailValidatorError::InvalidResponse(e.to_string()))?;

        tracing::debug!(
            format = report.format,
            dns = report.dns,
            deliverable = report.deliverable,
            spam = report.spam,
            disposable = report.disposable,
            "Validity report received"
        );

        Ok(report)
    }
}
