pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AcquisitionSetting, AllowedOrigins, ClientSetting, ServerSetting, ServiceSetting,
    SettingsError,
};
