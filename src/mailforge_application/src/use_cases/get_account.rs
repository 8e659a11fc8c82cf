use mailforge_core::{AccessToken, Account, MailProvider, MailProviderError};

/// Get account use case - the account a token belongs to
pub struct GetAccountUseCase<M>
where
    M: MailProvider,
{
    mail_provider: M,
}

impl<M> GetAccountUseCase<M>
where
    M: MailProvider,
{
    pub fn new(mail_provider: M) -> Self {
        Self { mail_provider }
    }

    #[tracing::instrument(name = "GetAccountUseCase::execute", skip_all)]
    pub async fn execute(&self, token: &AccessToken) -> Result<Account, MailProviderError> {
        self.mail_provider.get_account(token).await
    }
}
