//! Field-level description of every entity for the admin interface: which
//! fields exist, which are read-only, and how listings are searched,
//! filtered and ordered.

use sea_orm::Iterable;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{
    PolishType, Shade, BRAND_NAME_MAX_LEN, COLLECTION_NAME_MAX_LEN, DEFAULT_LAYER_TYPE,
    DEFAULT_POLISH_TYPE, DEFAULT_SHADE, IMAGE_REF_MAX_LEN, LOCATION_NAME_MAX_LEN,
    PHOTO_NOTES_MAX_LEN, PHOTO_TYPE_MAX_LEN, POLISH_NAME_MAX_LEN, WORN_NOTES_MAX_LEN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Id,
    Text,
    Url,
    Boolean,
    Integer,
    Timestamp,
    Choice,
    ForeignKey,
    Image,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Choice {
    /// Value accepted and returned by the API
    pub value: String,
    /// Stored code
    pub code: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub read_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Path of the referenced entity for foreign keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
}

impl FieldDescriptor {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: false,
            read_only: false,
            max_length: None,
            references: None,
            default: None,
            choices: Vec::new(),
        }
    }

    fn id() -> Self {
        Self::new("id", "ID", FieldKind::Id).read_only()
    }

    fn text(name: &str, label: &str, max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            ..Self::new(name, label, FieldKind::Text)
        }
    }

    fn foreign_key(name: &str, label: &str, references: &str) -> Self {
        Self {
            references: Some(references.to_string()),
            ..Self::new(name, label, FieldKind::ForeignKey)
        }
    }

    fn timestamp(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Timestamp)
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    fn default(mut self, value: &str) -> Self {
        self.default = Some(value.to_string());
        self
    }

    fn polish_types(mut self) -> Self {
        self.kind = FieldKind::Choice;
        self.choices = PolishType::iter()
            .map(|t| Choice {
                value: t.as_str().to_string(),
                code: t.code().to_string(),
                label: t.label().to_string(),
            })
            .collect();
        self
    }

    fn shades(mut self) -> Self {
        self.kind = FieldKind::Choice;
        self.choices = Shade::iter()
            .map(|s| Choice {
                value: s.as_str().to_string(),
                code: s.code().to_string(),
                label: s.label().to_string(),
            })
            .collect();
        self
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EntityDescriptor {
    pub name: String,
    pub verbose_name: String,
    pub verbose_name_plural: String,
    /// Collection path under `/api`
    pub path: String,
    pub fields: Vec<FieldDescriptor>,
    pub list_display: Vec<String>,
    pub search_fields: Vec<String>,
    pub list_filter: Vec<String>,
    /// Default ordering; a leading `-` means descending
    pub ordering: Vec<String>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn timestamps() -> [FieldDescriptor; 2] {
    [
        FieldDescriptor::timestamp("created_at", "Created at").read_only(),
        FieldDescriptor::timestamp("updated_at", "Updated at").read_only(),
    ]
}

/// Descriptors for all entity kinds, in admin menu order
pub fn entities() -> Vec<EntityDescriptor> {
    vec![
        EntityDescriptor {
            name: "brand".to_string(),
            verbose_name: "Brand".to_string(),
            verbose_name_plural: "Brands".to_string(),
            path: "brands".to_string(),
            fields: [
                vec![
                    FieldDescriptor::id(),
                    FieldDescriptor::text("name", "Brand", BRAND_NAME_MAX_LEN).required(),
                ],
                timestamps().to_vec(),
            ]
            .concat(),
            list_display: strings(&["name", "created_at", "updated_at"]),
            search_fields: strings(&["name"]),
            list_filter: Vec::new(),
            ordering: strings(&["name"]),
        },
        EntityDescriptor {
            name: "location".to_string(),
            verbose_name: "Location".to_string(),
            verbose_name_plural: "Locations".to_string(),
            path: "locations".to_string(),
            fields: [
                vec![
                    FieldDescriptor::id(),
                    FieldDescriptor::text("name", "Location Name", LOCATION_NAME_MAX_LEN)
                        .required(),
                ],
                timestamps().to_vec(),
            ]
            .concat(),
            list_display: strings(&["name", "created_at", "updated_at"]),
            search_fields: strings(&["name"]),
            list_filter: Vec::new(),
            ordering: strings(&["name"]),
        },
        EntityDescriptor {
            name: "collection".to_string(),
            verbose_name: "Collection".to_string(),
            verbose_name_plural: "Collections".to_string(),
            path: "collections".to_string(),
            fields: [
                vec![
                    FieldDescriptor::id(),
                    FieldDescriptor::foreign_key("brand_id", "Brand id", "brands").required(),
                    FieldDescriptor::text("name", "Collection Name", COLLECTION_NAME_MAX_LEN)
                        .required(),
                ],
                timestamps().to_vec(),
            ]
            .concat(),
            list_display: strings(&["name"]),
            search_fields: strings(&["name"]),
            list_filter: strings(&["brand_id", "name"]),
            ordering: strings(&["name"]),
        },
        EntityDescriptor {
            name: "polish".to_string(),
            verbose_name: "Polish".to_string(),
            verbose_name_plural: "Polishes".to_string(),
            path: "polishes".to_string(),
            fields: [
                vec![
                    FieldDescriptor::id(),
                    FieldDescriptor::foreign_key("brand_id", "Brand", "brands").required(),
                    FieldDescriptor::foreign_key("location_id", "Location", "locations")
                        .required(),
                    FieldDescriptor::text("name", "Polish Name", POLISH_NAME_MAX_LEN).required(),
                    FieldDescriptor {
                        max_length: Some(200),
                        ..FieldDescriptor::new("product_url", "Product URL", FieldKind::Url)
                    },
                    FieldDescriptor::timestamp("check_url_at", "Last checked URL at").read_only(),
                    FieldDescriptor::new("is_available", "Is available online", FieldKind::Boolean)
                        .default("true"),
                    FieldDescriptor::new("shade", "Colour/Shade", FieldKind::Choice)
                        .shades()
                        .default(DEFAULT_SHADE.as_str()),
                    FieldDescriptor::new("polish_type", "Polish Type", FieldKind::Choice)
                        .polish_types()
                        .default(DEFAULT_POLISH_TYPE.as_str()),
                    FieldDescriptor::foreign_key("collection_id", "Collection name", "collections"),
                ],
                timestamps().to_vec(),
            ]
            .concat(),
            list_display: strings(&[
                "name",
                "brand_id",
                "location_id",
                "is_available",
                "shade",
                "polish_type",
                "collection_id",
            ]),
            search_fields: strings(&[
                "name",
                "brand.name",
                "shade",
                "polish_type",
                "collection.name",
            ]),
            list_filter: strings(&["brand_id", "shade", "polish_type", "is_available"]),
            ordering: strings(&["name"]),
        },
        EntityDescriptor {
            name: "worn".to_string(),
            verbose_name: "Worn".to_string(),
            verbose_name_plural: "Worn".to_string(),
            path: "worn".to_string(),
            fields: [
                vec![
                    FieldDescriptor::id(),
                    FieldDescriptor::timestamp("worn_at", "Date worn").read_only(),
                    FieldDescriptor::text("notes", "Notes", WORN_NOTES_MAX_LEN),
                ],
                timestamps().to_vec(),
            ]
            .concat(),
            list_display: strings(&["worn_at", "notes"]),
            search_fields: strings(&["notes"]),
            list_filter: Vec::new(),
            ordering: strings(&["-worn_at"]),
        },
        EntityDescriptor {
            name: "worn_photo".to_string(),
            verbose_name: "Worn Photo".to_string(),
            verbose_name_plural: "Worn Photos".to_string(),
            path: "worn-photos".to_string(),
            fields: [
                vec![
                    FieldDescriptor::id(),
                    FieldDescriptor::foreign_key("worn_id", "Worn", "worn").required(),
                    FieldDescriptor::text("photo_type", "Photo Type", PHOTO_TYPE_MAX_LEN)
                        .required(),
                    FieldDescriptor {
                        max_length: Some(IMAGE_REF_MAX_LEN),
                        ..FieldDescriptor::new("image", "Image", FieldKind::Image)
                    }
                    .required(),
                    FieldDescriptor::text("notes", "Notes", PHOTO_NOTES_MAX_LEN),
                ],
                timestamps().to_vec(),
            ]
            .concat(),
            list_display: strings(&["worn_id", "photo_type", "image", "notes"]),
            search_fields: strings(&["photo_type"]),
            list_filter: strings(&["worn_id"]),
            ordering: strings(&["-worn.worn_at"]),
        },
        EntityDescriptor {
            name: "worn_layer".to_string(),
            verbose_name: "Worn Layers".to_string(),
            verbose_name_plural: "Worn Layers".to_string(),
            path: "worn-layers".to_string(),
            fields: [
                vec![
                    FieldDescriptor::id(),
                    FieldDescriptor::foreign_key("worn_id", "Worn", "worn").required(),
                    FieldDescriptor::new("order", "Layer Order", FieldKind::Integer).required(),
                    FieldDescriptor::new("layer_type", "Layer Type", FieldKind::Choice)
                        .polish_types()
                        .default(DEFAULT_LAYER_TYPE.as_str()),
                    FieldDescriptor::foreign_key("polish_id", "Polish Used", "polishes")
                        .required(),
                ],
                timestamps().to_vec(),
            ]
            .concat(),
            list_display: strings(&["order", "layer_type", "polish_id"]),
            search_fields: Vec::new(),
            list_filter: strings(&["worn_id", "polish_id"]),
            ordering: strings(&["-worn.worn_at", "order"]),
        },
    ]
}
