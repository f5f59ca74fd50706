use crate::api_state::ApiContext;
use crate::photos::handlers::{get_photo_handler, needs_metadata_handler, update_photo_handler};
use axum::{Router, routing::get};

pub fn photos_router() -> Router<ApiContext> {
    Router::new()
        .route("/api/photos/needsmetadata", get(needs_metadata_handler))
        .route(
            "/api/photos/{photo_id}",
            get(get_photo_handler).put(update_photo_handler),
        )
}
