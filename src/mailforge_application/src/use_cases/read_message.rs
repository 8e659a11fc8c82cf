use mailforge_core::{AccessToken, MailProvider, MailProviderError, Message};

/// Read message use case - fetches the full message and flags it as seen
pub struct ReadMessageUseCase<M>
where
    M: MailProvider,
{
    mail_provider: M,
}

impl<M> ReadMessageUseCase<M>
where
    M: MailProvider,
{
    pub fn new(mail_provider: M) -> Self {
        Self { mail_provider }
    }

    /// Execute the read message use case
    ///
    /// The returned message is the one fetched before it was marked, so its
    /// `seen` flag reflects the state prior to this read.
    #[tracing::instrument(name = "ReadMessageUseCase::execute", skip(self, token))]
    pub async fn execute(
        &self,
        token: &AccessToken,
        message_id: &str,
    ) -> Result<Message, MailProviderError> {
        let message = self.mail_provider.get_message(token, message_id).await?;

        self.mail_provider.mark_read(token, message_id).await?;
        tracing::debug!("Message marked as read");

        Ok(message)
    }
}
