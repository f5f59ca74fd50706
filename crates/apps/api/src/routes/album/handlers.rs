use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::State;
use common_services::api::album::error::AlbumError;
use common_services::api::album::interfaces::{AlbumsResponse, AlbumsWithCountResponse};
use common_services::api::album::service::{list_albums, list_albums_with_eligible_counts};

/// List every album a photo can be moved into.
///
/// Tag albums are left out because their contents are computed, not assigned.
#[utoipa::path(
    get,
    path = "/api/albums",
    tag = "Albums",
    responses(
        (status = 200, description = "Albums ordered by title.", body = AlbumsResponse),
        (status = 500, description = "A database error occurred."),
    )
)]
pub async fn list_albums_handler(
    State(context): State<ApiContext>,
) -> Result<Json<AlbumsResponse>, AlbumError> {
    Ok(Json(list_albums(&context.db).await?))
}

/// List albums that still contain photos needing metadata, with the number of such photos.
#[utoipa::path(
    get,
    path = "/api/albums/withphotocounts",
    tag = "Albums",
    responses(
        (status = 200, description = "Albums with a non-zero count, ordered by title.", body = AlbumsWithCountResponse),
        (status = 500, description = "A database error occurred."),
    )
)]
pub async fn albums_with_counts_handler(
    State(context): State<ApiContext>,
) -> Result<Json<AlbumsWithCountResponse>, AlbumError> {
    Ok(Json(list_albums_with_eligible_counts(&context.db).await?))
}
