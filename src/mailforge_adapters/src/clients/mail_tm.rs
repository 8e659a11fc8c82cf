use mailforge_core::{
    AccessToken, Account, AuthToken, Domain, HydraCollection, MailProvider, MailProviderError,
    Message, MessageList,
};
use reqwest::{
    Client, RequestBuilder, Response, StatusCode, Url,
    header::{ACCEPT, CONTENT_TYPE},
};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;

/// Mail.tm REST client.
///
/// Cheap to clone; clones share the underlying connection pool. Timeouts are
/// configured on the `reqwest::Client` passed in.
#[derive(Debug, Clone)]
pub struct MailTmClient {
    http_client: Client,
    base_url: String,
}

impl MailTmClient {
    pub fn new(base_url: String, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Appends `segments` to the base URL's path, keeping any prefix such as
    /// `https://gw/mailtm`. Each segment is percent-encoded, `/` included.
    fn url(&self, segments: &[&str]) -> Result<Url, MailProviderError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| MailProviderError::Transport(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| {
                MailProviderError::Transport(format!("`{}` cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// `/messages/{id}`. Dot segments would be dropped by the encoder and
    /// address `/messages` itself, so they are treated as unknown messages.
    fn message_url(&self, message_id: &str) -> Result<Url, MailProviderError> {
        if matches!(message_id, "" | "." | "..") {
            return Err(MailProviderError::NotFound);
        }
        self.url(&["messages", message_id])
    }

    fn get(&self, url: Url) -> RequestBuilder {
        self.http_client.get(url).header(ACCEPT, LD_JSON)
    }

    fn authorized(&self, request: RequestBuilder, token: &AccessToken) -> RequestBuilder {
        request.bearer_auth(token.as_ref().expose_secret())
    }
}

#[async_trait::async_trait]
impl MailProvider for MailTmClient {
    #[tracing::instrument(name = "MailTm::list_domains", skip_all)]
    async fn list_domains(&self) -> Result<Vec<Domain>, MailProviderError> {
        let request = self.get(self.url(&["domains"])?);
        let domains: HydraCollection<Domain> = json(send(request).await?).await?;

        Ok(domains.into_members())
    }

    #[tracing::instrument(name = "MailTm::create_account", skip(self, password))]
    async fn create_account(
        &self,
        username: &str,
        domain: &str,
        password: &Secret<String>,
    ) -> Result<Account, MailProviderError> {
        let address = format!("{username}@{domain}");
        let request_body = CredentialsRequest {
            address: &address,
            password: password.expose_secret(),
        };

        let request = self
            .http_client
            .post(self.url(&["accounts"])?)
            .header(ACCEPT, LD_JSON)
            .json(&request_body);

        json(send(request).await?).await
    }

    #[tracing::instrument(name = "MailTm::issue_token", skip(self, password))]
    async fn issue_token(
        &self,
        address: &str,
        password: &Secret<String>,
    ) -> Result<AuthToken, MailProviderError> {
        let request_body = CredentialsRequest {
            address,
            password: password.expose_secret(),
        };

        let request = self
            .http_client
            .post(self.url(&["token"])?)
            .header(ACCEPT, LD_JSON)
            .json(&request_body);

        json(send(request).await?).await
    }

    #[tracing::instrument(name = "MailTm::get_account", skip_all)]
    async fn get_account(&self, token: &AccessToken) -> Result<Account, MailProviderError> {
        let request = self.authorized(self.get(self.url(&["accounts", "me"])?), token);
        json(send(request).await?).await
    }

    #[tracing::instrument(name = "MailTm::get_me", skip_all)]
    async fn get_me(&self, token: &AccessToken) -> Result<Account, MailProviderError> {
        let request = self.authorized(self.get(self.url(&["me"])?), token);
        json(send(request).await?).await
    }

    #[tracing::instrument(name = "MailTm::delete_account", skip_all)]
    async fn delete_account(&self, token: &AccessToken) -> Result<(), MailProviderError> {
        let request = self.http_client.delete(self.url(&["accounts", "me"])?);
        send(self.authorized(request, token)).await?;
        Ok(())
    }

    #[tracing::instrument(name = "MailTm::list_messages", skip(self, token))]
    async fn list_messages(
        &self,
        token: &AccessToken,
        page: u32,
    ) -> Result<MessageList, MailProviderError> {
        let request = self
            .authorized(self.get(self.url(&["messages"])?), token)
            .query(&[("page", page)]);

        json(send(request).await?).await
    }

    #[tracing::instrument(name = "MailTm::get_message", skip(self, token))]
    async fn get_message(
        &self,
        token: &AccessToken,
        message_id: &str,
    ) -> Result<Message, MailProviderError> {
        let url = self.message_url(message_id)?;
        let request = self.authorized(self.get(url), token);

        json(send(request).await?).await
    }

    #[tracing::instrument(name = "MailTm::mark_read", skip(self, token))]
    async fn mark_read(
        &self,
        token: &AccessToken,
        message_id: &str,
    ) -> Result<(), MailProviderError> {
        let url = self.message_url(message_id)?;
        let request = self
            .http_client
            .patch(url)
            .header(ACCEPT, LD_JSON)
            .header(CONTENT_TYPE, MERGE_PATCH_JSON)
            .body(serde_json::json!({ "seen": true }).to_string());

        send(self.authorized(request, token)).await?;
        Ok(())
    }

    #[tracing::instrument(name = "MailTm::delete_message", skip(self, token))]
    async fn delete_message(
        &self,
        token: &AccessToken,
        message_id: &str,
    ) -> Result<(), MailProviderError> {
        let url = self.message_url(message_id)?;
        send(self.authorized(self.http_client.delete(url), token)).await?;
        Ok(())
    }
}

const LD_JSON: &str = "application/ld+json";
const MERGE_PATCH_JSON: &str = "application/merge-patch+json";

#[derive(serde::Serialize, Debug)]
struct CredentialsRequest<'a> {
    address: &'a str,
    password: &'a str,
}

async fn send(request: RequestBuilder) -> Result<Response, MailProviderError> {
    let response = request
        .send()
        .await
        .map_err(|e| MailProviderError::Transport(e.to_string()))?;

    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::UNAUTHORIZED => Err(MailProviderError::Unauthorized),
        StatusCode::NOT_FOUND => Err(MailProviderError::NotFound),
        status => {
            tracing::debug!(status = status.as_u16(), "Mail provider rejected the request");
            Err(MailProviderError::UnexpectedStatus(status.as_u16()))
        }
    }
}

async fn json<T: DeserializeOwned>(response: Response) -> Result<T, MailProviderError> {
    response
        .json::<T>()
        .await
        .map_err(|e| MailProviderError::InvalidResponse(e.to_string()))
}
