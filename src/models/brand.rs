use std::fmt;

use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppResult;
use crate::validation::validate_required;

pub const BRAND_NAME_MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Brand {
    pub id: i32,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Brand: {}", self.name)
    }
}

#[derive(Debug, Clone)]
pub struct CreateBrand {
    pub name: String,
}

impl CreateBrand {
    pub fn validate(&self) -> AppResult<()> {
        validate_required(&self.name, "name", BRAND_NAME_MAX_LEN)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBrand {
    pub name: Option<String>,
}

impl UpdateBrand {
    pub fn validate(&self) -> AppResult<()> {
        match &self.name {
            Some(name) => validate_required(name, "name", BRAND_NAME_MAX_LEN),
            None => Ok(()),
        }
    }
}

/// Brand listing filter
#[derive(Debug, Clone, Default)]
pub struct BrandFilter {
    /// Case-insensitive substring match on the name
    pub search: Option<String>,
}
