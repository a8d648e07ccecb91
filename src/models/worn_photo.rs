use std::fmt;

use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppResult;
use crate::validation::{validate_optional, validate_required};

pub const PHOTO_TYPE_MAX_LEN: usize = 50;
pub const IMAGE_REF_MAX_LEN: usize = 255;
pub const PHOTO_NOTES_MAX_LEN: usize = 255;

/// A photo of a wear session. `image` is an opaque media store reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WornPhoto {
    pub id: i32,
    pub worn_id: i32,
    pub photo_type: String,
    pub image: String,
    pub notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl fmt::Display for WornPhoto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Worn #{} - {}", self.worn_id, self.photo_type)
    }
}

impl WornPhoto {
    /// Resolve the image reference against the media URL prefix.
    /// Absolute references are returned as-is.
    pub fn image_url(&self, media_url: &str) -> String {
        if self.image.contains("://") || self.image.starts_with('/') {
            return self.image.clone();
        }
        format!(
            "{}/{}",
            media_url.trim_end_matches('/'),
            self.image.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Clone)]
pub struct CreateWornPhoto {
    pub worn_id: i32,
    pub photo_type: String,
    pub image: String,
    pub notes: Option<String>,
}

impl CreateWornPhoto {
    pub fn validate(&self) -> AppResult<()> {
        validate_required(&self.photo_type, "photo_type", PHOTO_TYPE_MAX_LEN)?;
        validate_required(&self.image, "image", IMAGE_REF_MAX_LEN)?;
        validate_optional(&self.notes, "notes", PHOTO_NOTES_MAX_LEN)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateWornPhoto {
    pub worn_id: Option<i32>,
    pub photo_type: Option<String>,
    pub image: Option<String>,
    pub notes: Option<Option<String>>,
}

impl UpdateWornPhoto {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(photo_type) = &self.photo_type {
            validate_required(photo_type, "photo_type", PHOTO_TYPE_MAX_LEN)?;
        }
        if let Some(image) = &self.image {
            validate_required(image, "image", IMAGE_REF_MAX_LEN)?;
        }
        if let Some(notes) = &self.notes {
            validate_optional(notes, "notes", PHOTO_NOTES_MAX_LEN)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct WornPhotoFilter {
    pub worn_id: Option<i32>,
    /// Substring match on the photo type
    pub search: Option<String>,
}
