use axum::{
    Router,
    http::{HeaderValue, Method, request},
    middleware,
    routing::{get, post},
};
use mailforge_adapters::{
    config::{AcquisitionSetting, AllowedOrigins},
    http::routes::{
        banner, create_email, delete_account, delete_message, error, get_account, get_me,
        list_messages, read_message, swagger_json,
    },
};
use mailforge_core::{EmailValidator, MailProvider, ProfileGenerator};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    security_headers::security_headers,
    tracing::{make_span_with_request_id, on_request, on_response},
};

/// Disposable email service exposing the `/api` routes
pub struct EmailService {
    router: Router,
}

impl EmailService {
    /// Create a new EmailService from its collaborators
    ///
    /// # Arguments
    /// * `mail_provider` - Mailbox provider shared by every route
    /// * `email_validator` - Validity checker used while creating emails
    /// * `profile_generator` - Persona source for new emails
    /// * `acquisition` - Attempt budget and credential lengths
    /// * `expose_error_details` - Include the error source chain in error bodies
    pub fn new<M, V, P>(
        mail_provider: M,
        email_validator: V,
        profile_generator: P,
        acquisition: AcquisitionSetting,
        expose_error_details: bool,
    ) -> Self
    where
        M: MailProvider + Clone + 'static,
        V: EmailValidator + Clone + 'static,
        P: ProfileGenerator + Clone + 'static,
    {
        let api = Router::new()
            // Creation needs every collaborator
            .route("/email", post(create_email::<M, V, P>))
            .with_state((
                mail_provider.clone(),
                email_validator,
                profile_generator,
                acquisition,
            ))
            // Mailbox routes only talk to the provider
            .route("/messages", get(list_messages::<M>))
            .route(
                "/messages/{id}",
                get(read_message::<M>).delete(delete_message::<M>),
            )
            .route(
                "/account",
                get(get_account::<M>).delete(delete_account::<M>),
            )
            .route("/account/me", get(get_me::<M>))
            .with_state(mail_provider);

        let router = Router::new()
            .route("/", get(banner))
            .route("/swagger.json", get(swagger_json))
            .nest("/api", api)
            .layer(middleware::from_fn_with_state(
                expose_error_details,
                error::expose_error_details,
            ))
            .layer(middleware::from_fn(security_headers));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the EmailService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Origins allowed by CORS; `None` or an empty list allows any origin
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        let allow_origin = match allowed_origins {
            Some(allowed_origins) if !allowed_origins.is_empty() => AllowOrigin::predicate(
                move |origin: &HeaderValue, _request_parts: &request::Parts| {
                    allowed_origins.contains(origin)
                },
            ),
            _ => AllowOrigin::any(),
        };

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers(Any)
            .allow_origin(allow_origin);

        self.router = self.router.layer(cors);
        self.with_trace_layer().router
    }

    /// Run the email service as a standalone server
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Email service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
