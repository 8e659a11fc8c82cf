use mailforge_core::{AccessToken, MailProvider, MailProviderError};

/// Delete account use case
pub struct DeleteAccountUseCase<M>
where
    M: MailProvider,
{
    mail_provider: M,
}

impl<M> DeleteAccountUseCase<M>
where
    M: MailProvider,
{
    pub fn new(mail_provider: M) -> Self {
        Self { mail_provider }
    }

    #[tracing::instrument(name = "DeleteAccountUseCase::execute", skip_all)]
    pub async fn execute(&self, token: &AccessToken) -> Result<(), MailProviderError> {
        self.mail_provider.delete_account(token).await?;
        tracing::info!("Mailbox deleted");
        Ok(())
    }
}
