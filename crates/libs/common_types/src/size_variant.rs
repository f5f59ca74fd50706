use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Rendition tiers as numbered in the `size_variants.type` column.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SizeVariantType {
    Original,
    Medium2x,
    Medium,
    Small2x,
    Small,
    Thumb2x,
    Thumb,
}

impl SizeVariantType {
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Original => 0,
            Self::Medium2x => 1,
            Self::Medium => 2,
            Self::Small2x => 3,
            Self::Small => 4,
            Self::Thumb2x => 5,
            Self::Thumb => 6,
        }
    }

    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Original),
            1 => Some(Self::Medium2x),
            2 => Some(Self::Medium),
            3 => Some(Self::Small2x),
            4 => Some(Self::Small),
            5 => Some(Self::Thumb2x),
            6 => Some(Self::Thumb),
            _ => None,
        }
    }
}

/// Tier used for grid thumbnails.
pub const THUMBNAIL_VARIANT: SizeVariantType = SizeVariantType::Thumb;

/// Tiers tried in order for the detail view. The original is never served there.
pub const FULL_VIEW_VARIANTS: [SizeVariantType; 2] = [SizeVariantType::Medium, SizeVariantType::Small];
