use std::fmt;

use serde::Serialize;
use time::OffsetDateTime;

use crate::entity::sea_orm_active_enums::PolishType;
use crate::error::AppResult;
use crate::validation::validate_non_negative;

pub const DEFAULT_LAYER_TYPE: PolishType = PolishType::BaseCoat;

/// One coat applied during a wear session. `order` is unique per session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WornLayer {
    pub id: i32,
    pub worn_id: i32,
    pub order: i32,
    pub layer_type: PolishType,
    pub polish_id: i32,
    pub polish_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl fmt::Display for WornLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Layer {}: {} ({})",
            self.worn_id,
            self.order,
            self.polish_name,
            self.layer_type.label()
        )
    }
}

#[derive(Debug, Clone)]
pub struct CreateWornLayer {
    pub worn_id: i32,
    pub order: i32,
    pub layer_type: Option<PolishType>,
    pub polish_id: i32,
}

impl CreateWornLayer {
    pub fn validate(&self) -> AppResult<()> {
        validate_non_negative(self.order, "order")
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateWornLayer {
    pub worn_id: Option<i32>,
    pub order: Option<i32>,
    pub layer_type: Option<PolishType>,
    pub polish_id: Option<i32>,
}

impl UpdateWornLayer {
    pub fn validate(&self) -> AppResult<()> {
        match self.order {
            Some(order) => validate_non_negative(order, "order"),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WornLayerFilter {
    pub worn_id: Option<i32>,
    pub polish_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_display_uses_layer_label() {
        let layer = WornLayer {
            id: 2,
            worn_id: 1,
            order: 0,
            layer_type: PolishType::Topper,
            polish_id: 4,
            polish_name: "Ballet Slippers".to_string(),
            created_at: datetime!(2024-05-17 09:41 UTC),
            updated_at: datetime!(2024-05-17 09:41 UTC),
        };
        assert_eq!(
            layer.to_string(),
            "1 - Layer 0: Ballet Slippers (Nail Polish Topper)"
        );
    }

    #[test]
    fn test_negative_order_is_rejected() {
        let input = CreateWornLayer {
            worn_id: 1,
            order: -1,
            layer_type: None,
            polish_id: 1,
        };
        assert!(input.validate().is_err());
    }
}
