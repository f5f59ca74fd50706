use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Limits applied to photo listing and editing requests.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct PhotoConstants {
    pub default_page_size: i64,
    pub max_page_size: i64,
    pub max_title_length: usize,
    pub max_description_length: usize,
    pub max_id_length: usize,
}

impl Default for PhotoConstants {
    fn default() -> Self {
        Self {
            default_page_size: 50,
            max_page_size: 100,
            max_title_length: 255,
            max_description_length: 2000,
            max_id_length: 64,
        }
    }
}

impl PhotoConstants {
    /// Non-positive limits fall back to the default page size, larger ones are capped.
    #[must_use]
    pub fn clamp_limit(&self, limit: Option<i64>) -> i64 {
        match limit {
            Some(limit) if limit > 0 => limit.min(self.max_page_size),
            _ => self.default_page_size,
        }
    }

    #[must_use]
    pub fn clamp_offset(offset: Option<i64>) -> i64 {
        offset.unwrap_or(0).max(0)
    }
}
