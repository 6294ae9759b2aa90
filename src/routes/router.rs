use crate::config::loader::Config;
use crate::controllers::greeting::__path_hello;
use crate::controllers::greeting::hello;
use crate::controllers::health::__path_health;
use crate::controllers::health::health;
use crate::models::greeting_dto::Greeting;
use crate::models::health_dto::Health;
use axum::{routing::get, Router};
use tower_http::trace;
use tower_http::trace::TraceLayer;
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        hello
    ),
    components(
        schemas(Health, Greeting)
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "greeting", description = "Greeting endpoints")
    )
)]
struct ApiDoc;

pub fn create_routes(config: Config) -> Router {
    let state = AppState { config };
    Router::new()
        .route("/health", get(health))
        .route("/hello", get(hello))
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
}
