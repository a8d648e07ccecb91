use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Kind of product a polish is, also used for the role of a worn layer
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum PolishType {
    #[sea_orm(string_value = "BC")]
    BaseCoat,
    #[sea_orm(string_value = "NP")]
    NailPolish,
    #[sea_orm(string_value = "TC")]
    TopCoat,
    #[sea_orm(string_value = "TO")]
    Topper,
    #[sea_orm(string_value = "US")]
    UnicornSkin,
}

impl PolishType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BaseCoat => "base_coat",
            Self::NailPolish => "nail_polish",
            Self::TopCoat => "top_coat",
            Self::Topper => "topper",
            Self::UnicornSkin => "unicorn_skin",
        }
    }

    /// Two-letter code stored in the database
    pub fn code(&self) -> &'static str {
        match self {
            Self::BaseCoat => "BC",
            Self::NailPolish => "NP",
            Self::TopCoat => "TC",
            Self::Topper => "TO",
            Self::UnicornSkin => "US",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BaseCoat => "Base Coat",
            Self::NailPolish => "Nail Polish",
            Self::TopCoat => "Top Coat",
            Self::Topper => "Nail Polish Topper",
            Self::UnicornSkin => "Unicorn Skin",
        }
    }
}

impl fmt::Display for PolishType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PolishType {
    type Err = AppError;

    /// Accepts `nail_polish`, `nail polish`, `Nail-Polish` or the stored code `NP`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "base_coat" | "bc" => Ok(Self::BaseCoat),
            "nail_polish" | "np" => Ok(Self::NailPolish),
            "top_coat" | "tc" => Ok(Self::TopCoat),
            "topper" | "nail_polish_topper" | "to" => Ok(Self::Topper),
            "unicorn_skin" | "us" => Ok(Self::UnicornSkin),
            _ => Err(AppError::Validation(format!(
                "Invalid polish type '{}', expected one of: base_coat, nail_polish, top_coat, topper, unicorn_skin",
                s
            ))),
        }
    }
}

/// Colour family of a polish
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum Shade {
    #[sea_orm(string_value = "black")]
    Black,
    #[sea_orm(string_value = "blue")]
    Blue,
    #[sea_orm(string_value = "green")]
    Green,
    #[sea_orm(string_value = "grey")]
    Grey,
    #[sea_orm(string_value = "orange")]
    Orange,
    #[sea_orm(string_value = "pink")]
    Pink,
    #[sea_orm(string_value = "purple")]
    Purple,
    #[sea_orm(string_value = "red")]
    Red,
    #[sea_orm(string_value = "white")]
    White,
    #[sea_orm(string_value = "yellow")]
    Yellow,
}

impl Shade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Grey => "grey",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Red => "red",
            Self::White => "white",
            Self::Yellow => "yellow",
        }
    }

    /// Shades are stored under their lowercase name
    pub fn code(&self) -> &'static str {
        self.as_str()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Grey => "Grey",
            Self::Orange => "Orange",
            Self::Pink => "Pink",
            Self::Purple => "Purple",
            Self::Red => "Red",
            Self::White => "White",
            Self::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Shade {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "black" => Ok(Self::Black),
            "blue" => Ok(Self::Blue),
            "green" => Ok(Self::Green),
            "grey" => Ok(Self::Grey),
            "orange" => Ok(Self::Orange),
            "pink" => Ok(Self::Pink),
            "purple" => Ok(Self::Purple),
            "red" => Ok(Self::Red),
            "white" => Ok(Self::White),
            "yellow" => Ok(Self::Yellow),
            _ => Err(AppError::Validation(format!(
                "Invalid shade '{}', expected one of: black, blue, green, grey, orange, pink, purple, red, white, yellow",
                s
            ))),
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace([' ', '-'], "_")
}

#[cfg(test)]
mod tests {
    use sea_orm::Iterable;

    use super::*;

    #[test]
    fn test_parse_polish_type_variants() {
        assert_eq!("nail_polish".parse::<PolishType>().unwrap(), PolishType::NailPolish);
        assert_eq!("Nail Polish".parse::<PolishType>().unwrap(), PolishType::NailPolish);
        assert_eq!("NP".parse::<PolishType>().unwrap(), PolishType::NailPolish);
        assert_eq!("base coat".parse::<PolishType>().unwrap(), PolishType::BaseCoat);
        assert_eq!("unicorn-skin".parse::<PolishType>().unwrap(), PolishType::UnicornSkin);
        assert!("glitter".parse::<PolishType>().is_err());
    }

    #[test]
    fn test_parse_shade_rejects_unknown() {
        assert_eq!("pink".parse::<Shade>().unwrap(), Shade::Pink);
        assert_eq!(" Grey ".parse::<Shade>().unwrap(), Shade::Grey);

        let err = "ultraviolet".parse::<Shade>().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_labels_and_codes() {
        assert_eq!(PolishType::Topper.label(), "Nail Polish Topper");
        assert_eq!(PolishType::Topper.code(), "TO");
        assert_eq!(PolishType::TopCoat.to_string(), "Top Coat");
        assert_eq!(Shade::Yellow.label(), "Yellow");
        assert_eq!(Shade::Yellow.code(), "yellow");
    }

    #[test]
    fn test_every_variant_round_trips_through_its_key() {
        for polish_type in PolishType::iter() {
            assert_eq!(polish_type.as_str().parse::<PolishType>().unwrap(), polish_type);
            assert_eq!(polish_type.code().parse::<PolishType>().unwrap(), polish_type);
        }
        for shade in Shade::iter() {
            assert_eq!(shade.as_str().parse::<Shade>().unwrap(), shade);
        }
    }

    #[test]
    fn test_serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&PolishType::UnicornSkin).unwrap();
        assert_eq!(json, "\"unicorn_skin\"");
    }
}
