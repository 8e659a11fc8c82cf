pub mod clients;
pub mod config;
pub mod http;
pub mod profile;

pub use clients::{DisifyClient, MailTmClient};
pub use profile::FakeProfileGenerator;
