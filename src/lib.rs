//! # Mailforge - disposable mailbox service
//!
//! Facade crate that re-exports the public APIs of the mailforge components:
//! a proxy over the Mail.tm disposable mailbox API that hands out mailboxes
//! whose address passed a Disify validity check, together with a synthetic
//! persona.
//!
//! ## Structure
//!
//! - **Core domain types**: `Account`, `Message`, `ValidityReport`, `VerifiedEmail`, etc.
//! - **Ports**: `MailProvider`, `EmailValidator`, `ProfileGenerator`
//! - **Use cases**: `CreateEmailUseCase`, `AcquireVerifiedEmailUseCase`, mailbox pass-throughs
//! - **Adapters**: `MailTmClient`, `DisifyClient`, `FakeProfileGenerator`, settings
//! - **Service**: `EmailService` - the axum router and standalone server

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use mailforge_core::*;
}

pub use mailforge_core::{
    AccessToken, Account, AuthToken, CredentialPolicy, Credentials, Domain, Message, MessageList,
    UserProfile, ValidityReport, VerifiedEmail,
};

// ============================================================================
// Ports
// ============================================================================

pub use mailforge_core::{
    EmailValidator, EmailValidatorError, MailProvider, MailProviderError, ProfileGenerator,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use mailforge_application::*;
}

pub use mailforge_application::{
    AcquireEmailError, AcquireVerifiedEmailUseCase, CreateEmailError, CreateEmailUseCase,
    CreatedEmail,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use mailforge_adapters::http::*;
    }

    /// Mail.tm and Disify clients
    pub mod clients {
        pub use mailforge_adapters::clients::*;
    }

    /// Configuration
    pub mod config {
        pub use mailforge_adapters::config::*;
    }
}

pub use mailforge_adapters::{DisifyClient, FakeProfileGenerator, MailTmClient};

// ============================================================================
// Email Service (Main Entry Point)
// ============================================================================

pub use mailforge_service::EmailService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
