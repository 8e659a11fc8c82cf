use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use mailforge_application::{DeleteAccountUseCase, GetAccountUseCase, GetMeUseCase};
use mailforge_core::MailProvider;

use super::common::{DataResponse, TokenQuery};
use super::error::ApiError;

#[tracing::instrument(name = "Get Account", skip_all)]
pub async fn get_account<M>(
    State(mail_provider): State<M>,
    Query(query): Query<TokenQuery>,
) -> Result<impl IntoResponse, ApiError>
where
    M: MailProvider + Clone + 'static,
{
    let token = query.access_token()?;

    let account = GetAccountUseCase::new(mail_provider).execute(&token).await?;

    Ok(Json(DataResponse::new(account)))
}

#[tracing::instrument(name = "Get Me", skip_all)]
pub async fn get_me<M>(
    State(mail_provider): State<M>,
    Query(query): Query<TokenQuery>,
) -> Result<impl IntoResponse, ApiError>
where
    M: MailProvider + Clone + 'static,
{
    let token = query.access_token()?;

    let account = GetMeUseCase::new(mail_provider).execute(&token).await?;

    Ok(Json(DataResponse::new(account)))
}

#[tracing::instrument(name = "Delete Account", skip_all)]
pub async fn delete_account<M>(
    State(mail_provider): State<M>,
    Query(query): Query<TokenQuery>,
) -> Result<impl IntoResponse, ApiError>
where
    M: MailProvider + Clone + 'static,
{
    let token = query.access_token()?;

    DeleteAccountUseCase::new(mail_provider)
        .execute(&token)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
