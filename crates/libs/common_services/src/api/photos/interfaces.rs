use crate::database::photo::PhotoRow;
use crate::utils::media_url;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A photo as shown in the metadata editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PhotoResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub album_id: Option<String>,
    pub album_title: Option<String>,
    /// Empty when the photo has no thumbnail rendition.
    pub thumbnail_url: String,
    /// Medium rendition, or small when no medium exists. Never the original.
    pub full_url: String,
    /// MIME type as stored by Lychee.
    #[serde(rename = "type")]
    pub media_type: String,
}

impl PhotoResponse {
    #[must_use]
    pub fn from_row(row: PhotoRow, media_base_url: &str) -> Self {
        Self {
            thumbnail_url: media_url(media_base_url, row.thumb_path.as_deref().unwrap_or_default()),
            full_url: media_url(media_base_url, row.full_path.as_deref().unwrap_or_default()),
            id: row.id,
            title: row.title.unwrap_or_default(),
            description: row.description,
            album_id: row.album_id,
            album_title: row.album_title,
            media_type: row.media_type.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct NeedsMetadataParams {
    /// Restrict to one album. Empty means all albums.
    pub album_id: Option<String>,
    /// Page size. Values below 1 use the default, values above the maximum are capped.
    pub limit: Option<i64>,
    /// Negative values are treated as 0.
    pub offset: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NeedsMetadataResponse {
    pub photos: Vec<PhotoResponse>,
    /// Number of photos on this page.
    pub total: usize,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePhotoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Destination album. An empty string removes the photo from its album.
    pub album_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdatePhotoResponse {
    pub success: bool,
    pub photo: PhotoResponse,
}
