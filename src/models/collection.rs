use std::fmt;

use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppResult;
use crate::validation::validate_required;

pub const COLLECTION_NAME_MAX_LEN: usize = 150;

/// A named product line of a brand
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection {
    pub id: i32,
    pub brand_id: i32,
    pub brand_name: String,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.brand_name, self.name)
    }
}

#[derive(Debug, Clone)]
pub struct CreateCollection {
    pub brand_id: i32,
    pub name: String,
}

impl CreateCollection {
    pub fn validate(&self) -> AppResult<()> {
        validate_required(&self.name, "name", COLLECTION_NAME_MAX_LEN)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCollection {
    pub brand_id: Option<i32>,
    pub name: Option<String>,
}

impl UpdateCollection {
    pub fn validate(&self) -> AppResult<()> {
        match &self.name {
            Some(name) => validate_required(name, "name", COLLECTION_NAME_MAX_LEN),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CollectionFilter {
    pub brand_id: Option<i32>,
    /// Exact name match
    pub name: Option<String>,
    pub search: Option<String>,
}
