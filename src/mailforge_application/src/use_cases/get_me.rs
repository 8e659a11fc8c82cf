use mailforge_core::{AccessToken, Account, MailProvider, MailProviderError};

/// Get me use case - the provider's `/me` view of the token's account
pub struct GetMeUseCase<M>
where
    M: MailProvider,
{
    mail_provider: M,
}

impl<M> GetMeUseCase<M>
where
    M: MailProvider,
{
    pub fn new(mail_provider: M) -> Self {
        Self { mail_provider }
    }

    #[tracing::instrument(name = "GetMeUseCase::execute", skip_all)]
    pub async fn execute(&self, token: &AccessToken) -> Result<Account, MailProviderError> {
        self.mail_provider.get_me(token).await
    }
}
