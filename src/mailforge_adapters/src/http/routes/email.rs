use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use mailforge_application::CreateEmailUseCase;
use mailforge_core::{
    Domain, EmailValidator, MailProvider, ProfileGenerator, UserProfile, VerifiedEmail,
};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::config::AcquisitionSetting;

use super::error::ApiError;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmailResponse {
    pub success: bool,
    /// Set when the address did not pass the validity check.
    pub disposable_detected: bool,
    pub data: VerifiedEmail,
    pub user_profile: UserProfile,
    pub domains: Vec<Domain>,
    pub attempts: u32,
}

#[tracing::instrument(name = "Create Email", skip_all)]
pub async fn create_email<M, V, P>(
    State((mail_provider, email_validator, profile_generator, acquisition)): State<(
        M,
        V,
        P,
        AcquisitionSetting,
    )>,
) -> Result<impl IntoResponse, ApiError>
where
    M: MailProvider + Clone + 'static,
    V: EmailValidator + Clone + 'static,
    P: ProfileGenerator + Clone + 'static,
{
    let use_case = CreateEmailUseCase::new(mail_provider, email_validator, profile_generator)
        .with_acquisition(acquisition.max_attempts, acquisition.credential_policy());

    let mut rng = StdRng::from_os_rng();
    let created = use_case.execute(&mut rng).await?;

    tracing::info!(
        address = %created.email.email,
        verified = created.was_verified,
        attempts = created.attempts,
        "Email created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateEmailResponse {
            success: true,
            disposable_detected: !created.was_verified,
            data: created.email,
            user_profile: created.profile,
            domains: created.domains,
            attempts: created.attempts,
        }),
    ))
}
