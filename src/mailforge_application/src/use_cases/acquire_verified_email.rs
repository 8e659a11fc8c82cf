use mailforge_core::{
    CredentialPolicy, Credentials, Domain, EmailValidator, EmailValidatorError, MailProvider,
    MailProviderError, VerifiedEmail,
};
use rand::{Rng, seq::IndexedRandom};
use secrecy::ExposeSecret;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Error types for the verified-email acquisition use case
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AcquireEmailError {
    #[error("No domains available")]
    NoDomainsAvailable,
    #[error("Could not create an email account after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

/// Outcome of a successful acquisition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acquisition {
    pub email: VerifiedEmail,
    /// `false` when the budget ran out and the last unverified mailbox was returned.
    pub was_verified: bool,
    pub attempts: u32,
}

/// Why a single attempt was abandoned. Never escapes the loop.
#[derive(Debug, thiserror::Error)]
enum AttemptError {
    #[error("validity check failed: {0}")]
    Validator(#[from] EmailValidatorError),
    #[error("account setup failed: {0}")]
    MailProvider(#[from] MailProviderError),
}

/// Acquisition use case - registers throwaway mailboxes until one passes
/// the validity check or the attempt budget runs out.
///
/// Every attempt that reaches account creation registers a real mailbox with
/// the provider; rejected mailboxes are not deleted.
pub struct AcquireVerifiedEmailUseCase<M, V>
where
    M: MailProvider,
    V: EmailValidator,
{
    mail_provider: M,
    email_validator: V,
    max_attempts: u32,
    credential_policy: CredentialPolicy,
}

impl<M, V> AcquireVerifiedEmailUseCase<M, V>
where
    M: MailProvider,
    V: EmailValidator,
{
    pub fn new(mail_provider: M, email_validator: V) -> Self {
        Self {
            mail_provider,
            email_validator,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            credential_policy: CredentialPolicy::default(),
        }
    }

    /// `1` gives single-shot behaviour: one mailbox, verified or not.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_credential_policy(mut self, credential_policy: CredentialPolicy) -> Self {
        self.credential_policy = credential_policy;
        self
    }

    /// Execute the acquisition loop
    ///
    /// # Arguments
    /// * `domains` - Domains to draw from, uniformly and independently per attempt
    /// * `rng` - Source of randomness for domain choice and credentials
    ///
    /// # Returns
    /// The first verified mailbox, else the last one created, else an error
    #[tracing::instrument(
        name = "AcquireVerifiedEmailUseCase::execute",
        skip_all,
        fields(domains = domains.len(), max_attempts = self.max_attempts)
    )]
    pub async fn execute<R>(
        &self,
        domains: &[Domain],
        rng: &mut R,
    ) -> Result<Acquisition, AcquireEmailError>
    where
        R: Rng + Send + ?Sized,
    {
        if domains.is_empty() {
            return Err(AcquireEmailError::NoDomainsAvailable);
        }

        let mut best_verified: Option<VerifiedEmail> = None;
        let mut last_created: Option<VerifiedEmail> = None;
        let mut attempts = 0;

        while best_verified.is_none() && attempts < self.max_attempts {
            attempts += 1;

            let Some(domain) = domains.choose(rng) else {
                break;
            };
            let credentials = Credentials::generate(&self.credential_policy, rng);

            match self.attempt(domain, &credentials).await {
                Ok(created) => {
                    tracing::debug!(
                        attempt = attempts,
                        email = %created.email,
                        verified = created.is_verified,
                        "Mailbox created"
                    );
                    if created.is_verified {
                        best_verified = Some(created.clone());
                    }
                    last_created = Some(created);
                }
                Err(e) => {
                    tracing::warn!(
                        attempt = attempts,
                        domain = %domain.domain,
                        error = %e,
                        "Attempt abandoned"
                    );
                }
            }
        }

        let was_verified = best_verified.is_some();
        let email = best_verified
            .or(last_created)
            .ok_or(AcquireEmailError::Exhausted { attempts })?;

        tracing::info!(attempts, was_verified, "Acquisition finished");

        Ok(Acquisition {
            email,
            was_verified,
            attempts,
        })
    }

    async fn attempt(
        &self,
        domain: &Domain,
        credentials: &Credentials,
    ) -> Result<VerifiedEmail, AttemptError> {
        let candidate = credentials.address(&domain.domain);
        let report = self.email_validator.check(&candidate).await?;

        let account = self
            .mail_provider
            .create_account(credentials.username(), &domain.domain, credentials.password())
            .await?;
        let auth_token = self
            .mail_provider
            .issue_token(&account.address, credentials.password())
            .await?;

        Ok(VerifiedEmail {
            email: account.address,
            password: credentials.expose_password().to_string(),
            token: auth_token.token.expose_secret().clone(),
            is_verified: report.is_valid(),
        })
    }
}
