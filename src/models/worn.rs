use std::fmt;

use serde::Serialize;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::error::AppResult;
use crate::validation::validate_optional;

pub const WORN_NOTES_MAX_LEN: usize = 255;

const WORN_AT_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

/// One wear session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Worn {
    pub id: i32,
    /// Stamped at creation, never changes
    #[serde(with = "time::serde::rfc3339")]
    pub worn_at: OffsetDateTime,
    pub notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl fmt::Display for Worn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let worn_at = self
            .worn_at
            .format(WORN_AT_FORMAT)
            .map_err(|_| fmt::Error)?;
        write!(f, "Worn #{} on {}", self.id, worn_at)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateWorn {
    pub notes: Option<String>,
}

impl CreateWorn {
    pub fn validate(&self) -> AppResult<()> {
        validate_optional(&self.notes, "notes", WORN_NOTES_MAX_LEN)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateWorn {
    pub notes: Option<Option<String>>,
}

impl UpdateWorn {
    pub fn validate(&self) -> AppResult<()> {
        match &self.notes {
            Some(notes) => validate_optional(notes, "notes", WORN_NOTES_MAX_LEN),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WornFilter {
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_display() {
        let worn = Worn {
            id: 7,
            worn_at: datetime!(2024-05-17 09:41:33 UTC),
            notes: None,
            created_at: datetime!(2024-05-17 09:41:33 UTC),
            updated_at: datetime!(2024-05-17 09:41:33 UTC),
        };
        assert_eq!(worn.to_string(), "Worn #7 on 2024-05-17 09:41");
    }
}
