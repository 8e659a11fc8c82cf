pub mod disify;
pub mod mail_tm;

pub use disify::DisifyClient;
pub use mail_tm::MailTmClient;
