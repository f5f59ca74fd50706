use common_types::is_generic_title_opt;

/// A photo as read from `photos`, joined with its album title and display renditions.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PhotoRow {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub album_id: Option<String>,
    pub album_title: Option<String>,
    pub media_type: Option<String>,
    pub thumb_path: Option<String>,
    pub full_path: Option<String>,
}

impl PhotoRow {
    /// Computed on every read, never stored.
    #[must_use]
    pub fn needs_metadata(&self) -> bool {
        needs_metadata(self.title.as_deref(), self.description.as_deref())
    }
}

/// A photo needs metadata when its title is missing or generic, or when it has no
/// description.
#[must_use]
pub fn needs_metadata(title: Option<&str>, description: Option<&str>) -> bool {
    is_generic_title_opt(title) || description.is_none_or(str::is_empty)
}

/// Sparse update: `None` leaves a field untouched. An empty `album_id` detaches the photo
/// from its album.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub album_id: Option<String>,
}

impl PhotoPatch {
    #[must_use]
    pub const fn touches_attributes(&self) -> bool {
        self.title.is_some() || self.description.is_some()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.touches_attributes() && self.album_id.is_none()
    }
}
