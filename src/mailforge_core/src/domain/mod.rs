pub mod access_token;
pub mod account;
pub mod credentials;
pub mod hydra;
pub mod mail_domain;
pub mod message;
pub mod profile;
pub mod validity;
pub mod verified_email;
