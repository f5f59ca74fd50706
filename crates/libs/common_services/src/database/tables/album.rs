use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A regular (non-tag) album, a valid reassignment destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Album {
    pub id: String,
    pub title: String,
}

/// An album together with the number of its photos that still need metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct AlbumWithCount {
    pub id: String,
    pub title: String,
    pub photo_count: i64,
}
