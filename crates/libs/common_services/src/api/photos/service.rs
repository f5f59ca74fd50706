use crate::api::photos::error::PhotosError;
use crate::api::photos::interfaces::{
    NeedsMetadataParams, NeedsMetadataResponse, PhotoResponse, UpdatePhotoRequest,
};
use crate::api::photos::validation::{FieldError, validate_album_filter, validate_id, validate_update};
use crate::database::photo::PhotoPatch;
use crate::database::{Database, DbError};
use crate::database::photo_store::{PhotoStore, PhotoUpdateOutcome};
use app_state::PhotoConstants;
use common_types::matching_rule;
use tracing::{debug, error, info, instrument};

/// Lists the photos that still need a human title or description.
#[instrument(skip(db, constants))]
pub async fn list_needing_metadata(
    db: &Database,
    constants: &PhotoConstants,
    media_base_url: &str,
    params: NeedsMetadataParams,
) -> Result<NeedsMetadataResponse, PhotosError> {
    let album_id = validate_album_filter(params.album_id.as_deref(), constants)
        .map_err(PhotosError::invalid_field)?;
    let limit = constants.clamp_limit(params.limit);
    let offset = PhotoConstants::clamp_offset(params.offset);

    let rows = db
        .timed(
            "list photos needing metadata",
            PhotoStore::list_needing_metadata(
                db.pool(),
                db.dialect(),
                album_id.as_deref(),
                limit,
                offset,
            ),
        )
        .await?;

    for row in &rows {
        let rule = row.title.as_deref().and_then(matching_rule).map(|rule| rule.name);
        debug!(photo_id = %row.id, rule = ?rule, "Photo needs metadata");
    }

    let photos: Vec<PhotoResponse> = rows
        .into_iter()
        .map(|row| PhotoResponse::from_row(row, media_base_url))
        .collect();

    Ok(NeedsMetadataResponse {
        total: photos.len(),
        photos,
    })
}

/// Fetches one photo, whether or not it still needs metadata.
#[instrument(skip(db, constants))]
pub async fn get_photo(
    db: &Database,
    constants: &PhotoConstants,
    media_base_url: &str,
    photo_id: &str,
) -> Result<PhotoResponse, PhotosError> {
    validate_id("id", photo_id, constants).map_err(PhotosError::invalid_field)?;

    let row = db
        .timed(
            "get photo",
            PhotoStore::find_by_id(db.pool(), db.dialect(), photo_id),
        )
        .await?
        .ok_or_else(|| PhotosError::NotFound(photo_id.to_string()))?;

    Ok(PhotoResponse::from_row(row, media_base_url))
}

/// Applies a sparse title/description/album update in one transaction and returns the
/// photo as stored afterwards.
#[instrument(skip(db, constants, request))]
pub async fn update_photo(
    db: &Database,
    constants: &PhotoConstants,
    media_base_url: &str,
    photo_id: &str,
    request: &UpdatePhotoRequest,
) -> Result<PhotoResponse, PhotosError> {
    let id_check = validate_id("id", photo_id, constants);
    let patch = match (id_check, validate_update(request, constants)) {
        (Ok(()), Ok(patch)) => patch,
        (id_check, patch) => {
            let mut errors: Vec<FieldError> = id_check.err().into_iter().collect();
            errors.extend(patch.err().unwrap_or_default());
            return Err(PhotosError::ValidationRejected(errors));
        }
    };

    if patch.is_empty() {
        return get_photo(db, constants, media_base_url, photo_id).await;
    }

    let outcome = db
        .timed("update photo", apply_update(db, photo_id, &patch))
        .await?;

    match outcome {
        PhotoUpdateOutcome::Updated(row) => {
            info!(
                photo_id,
                title = patch.title.is_some(),
                description = patch.description.is_some(),
                album = ?patch.album_id,
                "Updated photo metadata"
            );
            Ok(PhotoResponse::from_row(row, media_base_url))
        }
        PhotoUpdateOutcome::PhotoNotFound => Err(PhotosError::NotFound(photo_id.to_string())),
        PhotoUpdateOutcome::AlbumNotEligible(album_id) => {
            Err(PhotosError::invalid_field(FieldError {
                field: "album_id".to_string(),
                message: format!("album '{album_id}' does not exist or cannot hold photos"),
            }))
        }
    }
}

/// Runs the store update inside a transaction, committing only on success.
async fn apply_update(
    db: &Database,
    photo_id: &str,
    patch: &PhotoPatch,
) -> Result<PhotoUpdateOutcome, DbError> {
    let mut tx = db.begin().await?;
    match PhotoStore::update(&mut tx, db.dialect(), photo_id, patch).await {
        Ok(outcome @ PhotoUpdateOutcome::Updated(_)) => {
            tx.commit().await?;
            Ok(outcome)
        }
        Ok(outcome) => {
            tx.rollback().await?;
            Ok(outcome)
        }
        Err(e) => {
            if let Err(rollback_error) = tx.rollback().await {
                error!("Rollback after failed photo update failed: {}", rollback_error);
            }
            Err(e)
        }
    }
}
