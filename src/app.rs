use crate::handlers;
use crate::state::AppState;
use axum::{handler::HandlerWithoutStateExt, routing::get, Router};
use std::{
    env,
    path::{Path, PathBuf},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub fn router(state: AppState, public_dir: &Path) -> Router {
    let assets = ServeDir::new(public_dir).not_found_service(handlers::not_found.into_service());

    Router::new()
        .route("/", get(handlers::overview))
        .route("/product/:id", get(handlers::product_page))
        .route("/api/products", get(handlers::list_products))
        .route("/api/products/:id", get(handlers::get_product))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn resolve_public_dir() -> PathBuf {
    if let Ok(path) = env::var("APP_PUBLIC_DIR") {
        return PathBuf::from(path);
    }

    PathBuf::from("public")
}
