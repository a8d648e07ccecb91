use std::fmt;

use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppResult;
use crate::validation::validate_required;

pub const LOCATION_NAME_MAX_LEN: usize = 150;

/// Physical storage place of a polish
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub id: i32,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location: {}", self.name)
    }
}

#[derive(Debug, Clone)]
pub struct CreateLocation {
    pub name: String,
}

impl CreateLocation {
    pub fn validate(&self) -> AppResult<()> {
        validate_required(&self.name, "name", LOCATION_NAME_MAX_LEN)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateLocation {
    pub name: Option<String>,
}

impl UpdateLocation {
    pub fn validate(&self) -> AppResult<()> {
        match &self.name {
            Some(name) => validate_required(name, "name", LOCATION_NAME_MAX_LEN),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LocationFilter {
    pub search: Option<String>,
}
