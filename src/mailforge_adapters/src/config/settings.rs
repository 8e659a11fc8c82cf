use std::time::Duration;

use axum::http::HeaderValue;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use mailforge_application::DEFAULT_MAX_ATTEMPTS;
use mailforge_core::CredentialPolicy;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use super::constants::{
    CONFIG_DIR, DEFAULT_ENVIRONMENT,
    env::{APP_ENVIRONMENT_ENV_VAR, ENV_PREFIX, ENV_SEPARATOR},
    prod,
};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("`{0}` must be greater than zero")]
    MustBePositive(&'static str),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSetting {
    pub server: ServerSetting,
    pub mail_tm: ClientSetting,
    pub disify: ClientSetting,
    pub acquisition: AcquisitionSetting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSetting {
    pub address: String,
    pub allowed_origins: AllowedOrigins,
    /// Adds the error source chain to error responses. Development only.
    pub expose_error_details: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSetting {
    pub base_url: String,
    pub timeout_in_millis: u64,
}

impl ClientSetting {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AcquisitionSetting {
    pub max_attempts: u32,
    pub username_length: usize,
    pub password_length: usize,
}

impl AcquisitionSetting {
    pub fn credential_policy(&self) -> CredentialPolicy {
        CredentialPolicy {
            username_length: self.username_length,
            password_length: self.password_length,
        }
    }
}

impl Default for AcquisitionSetting {
    fn default() -> Self {
        let policy = CredentialPolicy::default();
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            username_length: policy.username_length,
            password_length: policy.password_length,
        }
    }
}

/// Origins allowed by the CORS layer. Accepts a JSON list or a comma
/// separated string (the form environment variables take).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            origins
                .into_iter()
                .map(Into::into)
                .map(|origin| origin.trim().trim_end_matches('/').to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for AllowedOrigins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            List(Vec<String>),
            Csv(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::List(origins) => Self::new(origins),
            Raw::Csv(origins) => Self::new(origins.split(',')),
        })
    }
}

impl ServiceSetting {
    /// Load settings from, in increasing precedence: built-in defaults,
    /// `config/default.json`, `config/{APP_ENVIRONMENT}.json` and
    /// `MAILFORGE__SECTION__KEY` environment variables. A `.env` file is read
    /// first when present.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let environment = std::env::var(APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        let config = Self::defaults()?
            .add_source(File::with_name(&format!("{CONFIG_DIR}/default")).required(false))
            .add_source(File::with_name(&format!("{CONFIG_DIR}/{environment}")).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    /// Builder pre-populated with production defaults.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, SettingsError> {
        let acquisition = AcquisitionSetting::default();

        Ok(Config::builder()
            .set_default("server.address", prod::APP_ADDRESS)?
            .set_default("server.allowed_origins", Vec::<String>::new())?
            .set_default("server.expose_error_details", false)?
            .set_default("mail_tm.base_url", prod::mail_tm::BASE_URL)?
            .set_default("mail_tm.timeout_in_millis", prod::mail_tm::TIMEOUT_IN_MILLIS)?
            .set_default("disify.base_url", prod::disify::BASE_URL)?
            .set_default("disify.timeout_in_millis", prod::disify::TIMEOUT_IN_MILLIS)?
            .set_default("acquisition.max_attempts", u64::from(acquisition.max_attempts))?
            .set_default(
                "acquisition.username_length",
                acquisition.username_length as u64,
            )?
            .set_default(
                "acquisition.password_length",
                acquisition.password_length as u64,
            )?)
    }

    pub fn from_config(config: Config) -> Result<Self, SettingsError> {
        let settings: Self = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("acquisition.max_attempts", self.acquisition.max_attempts as u64),
            ("acquisition.username_length", self.acquisition.username_length as u64),
            ("acquisition.password_length", self.acquisition.password_length as u64),
            ("mail_tm.timeout_in_millis", self.mail_tm.timeout_in_millis),
            ("disify.timeout_in_millis", self.disify.timeout_in_millis),
        ];

        match positive.into_iter().find(|(_, value)| *value == 0) {
            Some((key, _)) => Err(SettingsError::MustBePositive(key)),
            None => Ok(()),
        }
    }
}
