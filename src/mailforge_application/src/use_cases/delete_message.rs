use mailforge_core::{AccessToken, MailProvider, MailProviderError};

/// Delete message use case
pub struct DeleteMessageUseCase<M>
where
    M: MailProvider,
{
    mail_provider: M,
}

impl<M> DeleteMessageUseCase<M>
where
    M: MailProvider,
{
    pub fn new(mail_provider: M) -> Self {
        Self { mail_provider }
    }

    #[tracing::instrument(name = "DeleteMessageUseCase::execute", skip(self, token))]
    pub async fn execute(
        &self,
        token: &AccessToken,
        message_id: &str,
    ) -> Result<(), MailProviderError> {
        self.mail_provider.delete_message(token, message_id).await
    }
}
