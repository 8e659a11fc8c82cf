use mailforge_core::{AccessToken, MailProvider, MailProviderError, MessageList};

/// Error types for list messages use case
#[derive(Debug, thiserror::Error)]
pub enum ListMessagesError {
    #[error("Page must be 1 or greater")]
    InvalidPage,
    #[error("Mail provider error: {0}")]
    MailProviderError(#[from] MailProviderError),
}

/// List messages use case - one page of a mailbox's inbox
pub struct ListMessagesUseCase<M>
where
    M: MailProvider,
{
    mail_provider: M,
}

impl<M> ListMessagesUseCase<M>
where
    M: MailProvider,
{
    pub fn new(mail_provider: M) -> Self {
        Self { mail_provider }
    }

    /// Execute the list messages use case
    ///
    /// # Arguments
    /// * `token` - Bearer token of the mailbox
    /// * `page` - 1-based page number
    #[tracing::instrument(name = "ListMessagesUseCase::execute", skip(self, token))]
    pub async fn execute(
        &self,
        token: &AccessToken,
        page: u32,
    ) -> Result<MessageList, ListMessagesError> {
        if page == 0 {
            return Err(ListMessagesError::InvalidPage);
        }

        Ok(self.mail_provider.list_messages(token, page).await?)
    }
}
