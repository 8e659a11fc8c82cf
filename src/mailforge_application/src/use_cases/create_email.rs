use mailforge_core::{
    CredentialPolicy, Domain, EmailValidator, MailProvider, MailProviderError, ProfileGenerator,
    UserProfile, VerifiedEmail,
};
use rand::Rng;

use super::acquire_verified_email::{AcquireEmailError, AcquireVerifiedEmailUseCase};

/// Error types for create email use case
#[derive(Debug, thiserror::Error)]
pub enum CreateEmailError {
    #[error("Could not fetch the available domains: {0}")]
    DomainsUnavailable(#[source] MailProviderError),
    #[error(transparent)]
    Acquire(#[from] AcquireEmailError),
}

/// Everything the caller gets back for a new mailbox.
#[derive(Debug, Clone)]
pub struct CreatedEmail {
    pub email: VerifiedEmail,
    pub was_verified: bool,
    pub attempts: u32,
    pub domains: Vec<Domain>,
    pub profile: UserProfile,
}

/// Create email use case - fetches domains, generates a persona and runs the
/// acquisition loop.
pub struct CreateEmailUseCase<M, V, P>
where
    M: MailProvider,
    V: EmailValidator,
    P: ProfileGenerator,
{
    mail_provider: M,
    acquire: AcquireVerifiedEmailUseCase<M, V>,
    profile_generator: P,
}

impl<M, V, P> CreateEmailUseCase<M, V, P>
where
    M: MailProvider + Clone,
    V: EmailValidator,
    P: ProfileGenerator,
{
    pub fn new(mail_provider: M, email_validator: V, profile_generator: P) -> Self {
        Self {
            acquire: AcquireVerifiedEmailUseCase::new(mail_provider.clone(), email_validator),
            mail_provider,
            profile_generator,
        }
    }

    pub fn with_acquisition(
        mut self,
        max_attempts: u32,
        credential_policy: CredentialPolicy,
    ) -> Self {
        self.acquire = self
            .acquire
            .with_max_attempts(max_attempts)
            .with_credential_policy(credential_policy);
        self
    }

    /// Execute the create email use case
    ///
    /// # Returns
    /// The acquired mailbox with its persona and the domains it was drawn from,
    /// or CreateEmailError when no domain is available or nothing could be created
    #[tracing::instrument(name = "CreateEmailUseCase::execute", skip_all)]
    pub async fn execute<R>(&self, rng: &mut R) -> Result<CreatedEmail, CreateEmailError>
    where
        R: Rng + Send + ?Sized,
    {
        let domains = self
            .mail_provider
            .list_domains()
            .await
            .map_err(CreateEmailError::DomainsUnavailable)?;

        if domains.is_empty() {
            return Err(AcquireEmailError::NoDomainsAvailable.into());
        }
        tracing::debug!(count = domains.len(), "Fetched available domains");

        let profile = self.profile_generator.generate();
        let acquisition = self.acquire.execute(&domains, rng).await?;

        Ok(CreatedEmail {
            email: acquisition.email,
            was_verified: acquisition.was_verified,
            attempts: acquisition.attempts,
            domains,
            profile,
        })
    }
}
