use super::interfaces::{AlbumsResponse, AlbumsWithCountResponse};
use crate::api::album::error::AlbumError;
use crate::database::Database;
use crate::database::album_store::AlbumStore;
use tracing::{debug, instrument};

/// All albums a photo can be moved into, ordered by title.
#[instrument(skip(db))]
pub async fn list_albums(db: &Database) -> Result<AlbumsResponse, AlbumError> {
    let albums = db
        .timed(
            "list albums",
            AlbumStore::list_eligible(db.pool(), db.dialect()),
        )
        .await?;
    debug!("Found {} albums", albums.len());
    Ok(AlbumsResponse { albums })
}

/// Albums that still contain photos needing metadata, with those counts.
#[instrument(skip(db))]
pub async fn list_albums_with_eligible_counts(
    db: &Database,
) -> Result<AlbumsWithCountResponse, AlbumError> {
    let albums = db
        .timed(
            "list albums with photo counts",
            AlbumStore::list_with_eligible_counts(db.pool(), db.dialect()),
        )
        .await?;
    Ok(AlbumsWithCountResponse { albums })
}
