use crate::album::handlers::{albums_with_counts_handler, list_albums_handler};
use crate::api_state::ApiContext;
use axum::{Router, routing::get};

pub fn album_router() -> Router<ApiContext> {
    Router::new()
        .route("/api/albums", get(list_albums_handler))
        .route("/api/albums/withphotocounts", get(albums_with_counts_handler))
}
