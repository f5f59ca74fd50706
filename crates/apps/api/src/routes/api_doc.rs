use crate::routes::{album, photos, root};
use common_services::api::album::interfaces::{AlbumsResponse, AlbumsWithCountResponse};
use common_services::api::photos::interfaces::{
    NeedsMetadataResponse, PhotoResponse, UpdatePhotoRequest, UpdatePhotoResponse,
};
use common_services::api::photos::validation::FieldError;
use common_services::database::album::{Album, AlbumWithCount};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::health_check,
        // Photos handlers
        photos::handlers::needs_metadata_handler,
        photos::handlers::get_photo_handler,
        photos::handlers::update_photo_handler,
        // Album handlers
        album::handlers::list_albums_handler,
        album::handlers::albums_with_counts_handler,
    ),
    components(
        schemas(
            PhotoResponse,
            NeedsMetadataResponse,
            UpdatePhotoRequest,
            UpdatePhotoResponse,
            FieldError,
            Album,
            AlbumWithCount,
            AlbumsResponse,
            AlbumsWithCountResponse,
            root::handlers::HealthResponse,
        ),
    ),
    tags(
        (name = "Photos", description = "Finding photos without proper metadata and fixing them"),
        (name = "Albums", description = "Albums photos can be moved into"),
        (name = "System", description = "Health check"),
    )
)]
pub struct ApiDoc;
