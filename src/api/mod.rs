// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::generators::PasswordGenerator;

pub mod types;
pub mod routes;
pub mod handlers;

/// Shared state handed to every request handler.
pub struct AppState {
    pub generator: PasswordGenerator,
}

impl AppState {
    pub fn new(generator: PasswordGenerator) -> Self {
        AppState { generator }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        use crate::generators::strength::HeuristicEstimator;
        AppState::new(PasswordGenerator::new(Box::new(HeuristicEstimator)))
    }
}

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generator::generate_password,
    ),
    components(
        schemas(
            crate::api::types::GenerateResponse,
            crate::api::types::ErrorResponse,
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints")
    ),
    info(
        title = "PassForge API",
        version = "0.1.0",
        description = "Secure password and passphrase generator",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(state: AppState, address: &str, port: u16) -> std::io::Result<()> {
    log::info!("Starting PassForge API server on {}:{}", address, port);

    let state = web::Data::new(state);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}
