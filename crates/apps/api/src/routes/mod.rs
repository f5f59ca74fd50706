pub mod album;
mod api_doc;
pub mod photos;
pub mod root;

use crate::album::router::album_router;
use crate::api_state::ApiContext;
use crate::photos::router::photos_router;
use crate::root::router::root_router;
use crate::routes::api_doc::ApiDoc;
use axum::Router;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    Router::new()
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .merge(api_routes())
        .with_state(api_state)
}

fn api_routes() -> Router<ApiContext> {
    Router::new()
        .merge(root_router())
        .merge(photos_router())
        .merge(album_router())
}
