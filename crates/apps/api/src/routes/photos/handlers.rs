use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use common_services::api::photos::error::PhotosError;
use common_services::api::photos::interfaces::{
    NeedsMetadataParams, NeedsMetadataResponse, PhotoResponse, UpdatePhotoRequest,
    UpdatePhotoResponse,
};
use common_services::api::photos::service::{get_photo, list_needing_metadata, update_photo};
use common_services::api::photos::validation::FieldError;

fn rejected(field: &str, message: String) -> PhotosError {
    PhotosError::invalid_field(FieldError {
        field: field.to_string(),
        message,
    })
}

/// List photos that still need a human title or description.
///
/// A photo qualifies when its title is missing or looks auto-assigned (camera file
/// names, UUIDs, timestamps, screenshots), or when its description is missing or empty.
/// Newest photos come first.
#[utoipa::path(
    get,
    path = "/api/photos/needsmetadata",
    tag = "Photos",
    params(NeedsMetadataParams),
    responses(
        (status = 200, description = "A page of photos needing metadata.", body = NeedsMetadataResponse),
        (status = 400, description = "Invalid album id or paging parameters."),
        (status = 500, description = "A database error occurred."),
        (status = 504, description = "The database did not answer in time."),
    )
)]
pub async fn needs_metadata_handler(
    State(context): State<ApiContext>,
    query: Result<Query<NeedsMetadataParams>, QueryRejection>,
) -> Result<Json<NeedsMetadataResponse>, PhotosError> {
    let Query(params) = query.map_err(|e| rejected("query", e.body_text()))?;
    let response = list_needing_metadata(
        &context.db,
        &context.settings.photos,
        context.media_base_url(),
        params,
    )
    .await?;
    Ok(Json(response))
}

/// Get a single photo by id.
#[utoipa::path(
    get,
    path = "/api/photos/{photo_id}",
    tag = "Photos",
    params(
        ("photo_id" = String, Path, description = "The Lychee photo id.")
    ),
    responses(
        (status = 200, description = "The photo.", body = PhotoResponse),
        (status = 400, description = "The id is malformed."),
        (status = 404, description = "No photo with this id."),
        (status = 500, description = "A database error occurred."),
    )
)]
pub async fn get_photo_handler(
    State(context): State<ApiContext>,
    Path(photo_id): Path<String>,
) -> Result<Json<PhotoResponse>, PhotosError> {
    let photo = get_photo(
        &context.db,
        &context.settings.photos,
        context.media_base_url(),
        &photo_id,
    )
    .await?;
    Ok(Json(photo))
}

/// Update a photo's title, description and/or album.
///
/// Omitted fields are left alone. An empty `album_id` removes the photo from its album.
/// All changes are applied together or not at all.
#[utoipa::path(
    put,
    path = "/api/photos/{photo_id}",
    tag = "Photos",
    params(
        ("photo_id" = String, Path, description = "The Lychee photo id.")
    ),
    request_body = UpdatePhotoRequest,
    responses(
        (status = 200, description = "The photo after the update.", body = UpdatePhotoResponse),
        (status = 400, description = "One or more fields failed validation."),
        (status = 404, description = "No photo with this id."),
        (status = 500, description = "A database error occurred, nothing was saved."),
        (status = 504, description = "The database did not answer in time."),
    )
)]
pub async fn update_photo_handler(
    State(context): State<ApiContext>,
    Path(photo_id): Path<String>,
    payload: Result<Json<UpdatePhotoRequest>, JsonRejection>,
) -> Result<Json<UpdatePhotoResponse>, PhotosError> {
    let Json(request) = payload.map_err(|e| rejected("body", e.body_text()))?;
    let photo = update_photo(
        &context.db,
        &context.settings.photos,
        context.media_base_url(),
        &photo_id,
        &request,
    )
    .await?;
    Ok(Json(UpdatePhotoResponse {
        success: true,
        photo,
    }))
}
