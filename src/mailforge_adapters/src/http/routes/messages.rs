use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use mailforge_application::{DeleteMessageUseCase, ListMessagesUseCase, ReadMessageUseCase};
use mailforge_core::MailProvider;
use serde::Deserialize;

use super::common::{DataResponse, TokenQuery};
use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListMessagesQuery {
    pub token: Option<String>,
    pub page: Option<String>,
}

impl ListMessagesQuery {
    /// Page number, `1` when absent.
    fn page(&self) -> Result<u32, ApiError> {
        match self.page.as_deref().map(str::trim) {
            None | Some("") => Ok(1),
            Some(page) => page.parse().map_err(|_| {
                ApiError::InvalidInput(format!("page must be a positive integer, got `{page}`"))
            }),
        }
    }
}

#[tracing::instrument(name = "List Messages", skip_all)]
pub async fn list_messages<M>(
    State(mail_provider): State<M>,
    Query(query): Query<ListMessagesQuery>,
) -> Result<impl IntoResponse, ApiError>
where
    M: MailProvider + Clone + 'static,
{
    let page = query.page()?;
    let token = TokenQuery { token: query.token }.access_token()?;

    let use_case = ListMessagesUseCase::new(mail_provider);
    let messages = use_case.execute(&token, page).await?;

    Ok(Json(DataResponse::new(messages)))
}

#[tracing::instrument(name = "Read Message", skip_all)]
pub async fn read_message<M>(
    State(mail_provider): State<M>,
    Path(id): Path<String>,
    Query(query): Query<TokenQuery>,
) -> Result<impl IntoResponse, ApiError>
where
    M: MailProvider + Clone + 'static,
{
    let token = query.access_token()?;

    let use_case = ReadMessageUseCase::new(mail_provider);
    let message = use_case.execute(&token, &id).await?;

    Ok(Json(DataResponse::new(message)))
}

#[tracing::instrument(name = "Delete Message", skip_all)]
pub async fn delete_message<M>(
    State(mail_provider): State<M>,
    Path(id): Path<String>,
    Query(query): Query<TokenQuery>,
) -> Result<impl IntoResponse, ApiError>
where
    M: MailProvider + Clone + 'static,
{
    let token = query.access_token()?;

    let use_case = DeleteMessageUseCase::new(mail_provider);
    use_case.execute(&token, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
