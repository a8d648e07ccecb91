use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use time::OffsetDateTime;

use crate::entity::sea_orm_active_enums::{PolishType, Shade};
use crate::error::AppResult;
use crate::validation::{validate_required, validate_url};

pub const POLISH_NAME_MAX_LEN: usize = 150;

/// Names longer than this are shortened in the text representation
const LABEL_NAME_LEN: usize = 15;

pub const DEFAULT_SHADE: Shade = Shade::Pink;
pub const DEFAULT_POLISH_TYPE: PolishType = PolishType::NailPolish;

/// A polish bottle, with the names of its brand, location and collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polish {
    pub id: i32,
    pub brand_id: i32,
    pub brand_name: String,
    pub location_id: i32,
    pub location_name: String,
    pub collection_id: Option<i32>,
    pub collection_name: Option<String>,
    pub name: String,
    pub product_url: Option<String>,
    /// Last time availability was checked; only written by `record_availability`
    #[serde(with = "time::serde::rfc3339::option")]
    pub check_url_at: Option<OffsetDateTime>,
    pub is_available: bool,
    pub shade: Shade,
    pub polish_type: PolishType,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl fmt::Display for Polish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.brand_name, shorten(&self.name, LABEL_NAME_LEN))?;
        if let Some(collection) = &self.collection_name {
            write!(f, " (Collection: {})", collection)?;
        }
        Ok(())
    }
}

fn shorten(name: &str, max: usize) -> Cow<'_, str> {
    if name.chars().count() > max {
        Cow::Owned(format!("{}...", name.chars().take(max).collect::<String>()))
    } else {
        Cow::Borrowed(name)
    }
}

#[derive(Debug, Clone)]
pub struct CreatePolish {
    pub brand_id: i32,
    pub location_id: i32,
    pub name: String,
    pub product_url: Option<String>,
    pub is_available: Option<bool>,
    pub shade: Option<Shade>,
    pub polish_type: Option<PolishType>,
    pub collection_id: Option<i32>,
}

impl CreatePolish {
    pub fn validate(&self) -> AppResult<()> {
        validate_required(&self.name, "name", POLISH_NAME_MAX_LEN)?;
        if let Some(url) = &self.product_url {
            validate_url(url, "product_url")?;
        }
        Ok(())
    }
}

/// Partial update. `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default)]
pub struct UpdatePolish {
    pub brand_id: Option<i32>,
    pub location_id: Option<i32>,
    pub name: Option<String>,
    pub product_url: Option<Option<String>>,
    pub is_available: Option<bool>,
    pub shade: Option<Shade>,
    pub polish_type: Option<PolishType>,
    pub collection_id: Option<Option<i32>>,
}

impl UpdatePolish {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(name) = &self.name {
            validate_required(name, "name", POLISH_NAME_MAX_LEN)?;
        }
        if let Some(Some(url)) = &self.product_url {
            validate_url(url, "product_url")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PolishFilter {
    pub brand_id: Option<i32>,
    pub location_id: Option<i32>,
    pub collection_id: Option<i32>,
    pub shade: Option<Shade>,
    pub polish_type: Option<PolishType>,
    pub is_available: Option<bool>,
    /// Matches polish name, brand name, shade, polish type code or collection name
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn polish(name: &str, collection: Option<&str>) -> Polish {
        Polish {
            id: 1,
            brand_id: 1,
            brand_name: "Essie".to_string(),
            location_id: 1,
            location_name: "Drawer A".to_string(),
            collection_id: collection.map(|_| 1),
            collection_name: collection.map(str::to_string),
            name: name.to_string(),
            product_url: None,
            check_url_at: None,
            is_available: true,
            shade: DEFAULT_SHADE,
            polish_type: DEFAULT_POLISH_TYPE,
            created_at: datetime!(2024-03-01 12:00 UTC),
            updated_at: datetime!(2024-03-01 12:00 UTC),
        }
    }

    #[test]
    fn test_display_short_name() {
        assert_eq!(polish("Ballet Slippers", None).to_string(), "Essie: Ballet Slippers");
    }

    #[test]
    fn test_display_truncates_long_name() {
        assert_eq!(
            polish("Mademoiselle Rouge", None).to_string(),
            "Essie: Mademoiselle Ro..."
        );
    }

    #[test]
    fn test_display_with_collection() {
        assert_eq!(
            polish("Bikini So Teeny", Some("Summer 2024")).to_string(),
            "Essie: Bikini So Teeny (Collection: Summer 2024)"
        );
    }

    #[test]
    fn test_validate_rejects_malformed_url() {
        let input = CreatePolish {
            brand_id: 1,
            location_id: 1,
            name: "Ballet Slippers".to_string(),
            product_url: Some("essie dot com".to_string()),
            is_available: None,
            shade: None,
            polish_type: None,
            collection_id: None,
        };
        assert!(input.validate().is_err());

        let update = UpdatePolish {
            product_url: Some(None),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
    }
}
