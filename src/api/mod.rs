// src/api/mod.rs
use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::services::BreachChecker;

/// Shared, read-only state handed to every request.
pub struct AppState {
    pub generator: PasswordGenerator,
    pub breach_checker: BreachChecker,
    pub default_password_length: usize,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, crate::services::breach::BreachError> {
        Ok(Self {
            generator: PasswordGenerator::new(),
            breach_checker: BreachChecker::new(config)?,
            default_password_length: config.default_password_length,
        })
    }
}

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::system::root,
        crate::api::handlers::system::health_check,
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::strength::analyze_password_strength,
        crate::api::handlers::breach::check_breach
    ),
    components(
        schemas(
            crate::api::types::ErrorResponse,
            crate::api::types::RootResponse,
            crate::api::types::HealthResponse,
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordStrengthRequest,
            crate::api::types::PasswordBreachRequest,
            crate::models::GenerationResult,
            crate::services::strength::StrengthReport,
            crate::services::breach::BreachReport
        )
    ),
    tags(
        (name = "Security", description = "Password generation, strength and breach endpoints"),
        (name = "System", description = "Service status")
    ),
    info(
        title = "PassVault Guard API",
        version = "0.1.0",
        description = "Secure password generation and analysis API",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Runs the API until shutdown. Swagger UI is mounted only when `expose_docs`.
pub async fn start_server(state: AppState, host: &str, port: u16, expose_docs: bool) -> std::io::Result<()> {
    log::info!("Starting PassVault Guard API server on {}:{}", host, port);

    let state = web::Data::new(state);

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(Logger::new("%a \"%r\" %s %Dms"))
            .app_data(state.clone());
        if expose_docs {
            app = app.service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            );
        }
        app.configure(routes::configure_routes)
    })
    .bind((host, port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
