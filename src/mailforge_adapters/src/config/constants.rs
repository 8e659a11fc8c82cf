pub mod env {
    /// Selects the optional `config/{name}.json` overlay.
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const ENV_PREFIX: &str = "MAILFORGE";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const CONFIG_DIR: &str = "config";
pub const DEFAULT_ENVIRONMENT: &str = "local";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";

    pub mod mail_tm {
        pub const BASE_URL: &str = "https://api.mail.tm";
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }

    pub mod disify {
        pub const BASE_URL: &str = "https://www.disify.com/api/email";
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const CLIENT_TIMEOUT_IN_MILLIS: u64 = 2_000;
}
