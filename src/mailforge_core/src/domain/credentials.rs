use rand::Rng;
use secrecy::{ExposeSecret, Secret};

const USERNAME_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const PASSWORD_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

pub const DEFAULT_USERNAME_LENGTH: usize = 10;
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

/// Lengths used when generating throwaway credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialPolicy {
    pub username_length: usize,
    pub password_length: usize,
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self {
            username_length: DEFAULT_USERNAME_LENGTH,
            password_length: DEFAULT_PASSWORD_LENGTH,
        }
    }
}

/// Ephemeral mailbox credentials, generated fresh for every attempt.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: Secret<String>,
}

impl Credentials {
    /// Draws a lowercase alphanumeric username and a password that may
    /// also contain uppercase letters and symbols.
    pub fn generate<R: Rng + ?Sized>(policy: &CredentialPolicy, rng: &mut R) -> Self {
        let username = random_string(USERNAME_CHARSET, policy.username_length, rng);
        let password = random_string(PASSWORD_CHARSET, policy.password_length, rng);

        Self {
            username,
            password: Secret::new(password),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }

    /// Candidate address on the given domain. The provider may normalise it,
    /// so the address it returns on account creation is authoritative.
    pub fn address(&self, domain: &str) -> String {
        format!("{}@{}", self.username, domain)
    }

    pub fn expose_password(&self) -> &str {
        self.password.expose_secret()
    }
}

fn random_string<R: Rng + ?Sized>(charset: &[u8], length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| char::from(charset[rng.random_range(0..charset.len())]))
        .collect()
}
