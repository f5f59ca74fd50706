use crate::database::album::{Album, AlbumWithCount};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AlbumsResponse {
    pub albums: Vec<Album>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AlbumsWithCountResponse {
    /// Only albums with at least one photo needing metadata.
    pub albums: Vec<AlbumWithCount>,
}
