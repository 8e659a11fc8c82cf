use color_eyre::eyre::Result;
use mailforge::{
    DisifyClient, EmailService, FakeProfileGenerator, MailTmClient,
    adapters::config::ServiceSetting,
};
use reqwest::Client as HttpClient;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let config = ServiceSetting::load()?;

    // Create the upstream clients
    let mail_tm_http_client = HttpClient::builder()
        .timeout(config.mail_tm.timeout())
        .build()?;
    let disify_http_client = HttpClient::builder()
        .timeout(config.disify.timeout())
        .build()?;

    let mail_provider = MailTmClient::new(config.mail_tm.base_url.clone(), mail_tm_http_client);
    let email_validator = DisifyClient::new(config.disify.base_url.clone(), disify_http_client);

    let email_service = EmailService::new(
        mail_provider,
        email_validator,
        FakeProfileGenerator::new(),
        config.acquisition,
        config.server.expose_error_details,
    );

    let listener = tokio::net::TcpListener::bind(&config.server.address).await?;
    tracing::info!(
        max_attempts = config.acquisition.max_attempts,
        mail_tm = %config.mail_tm.base_url,
        "Starting mailforge..."
    );

    email_service
        .run_standalone(listener, Some(config.server.allowed_origins))
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
