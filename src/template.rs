use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The base record every item of a collection is derived from
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct Template {
    /// The name of the items, before any index is applied
    pub name: String,
    /// The description of the items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The external URL of the items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    /// The base URI the image file names are appended to
    pub image: String,
}

/// How the index of an item is applied to its metadata
#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// The index is appended to the name
    #[default]
    NameSuffix,
    /// The index is stored in a `level` field, the name is kept as is
    Level,
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::NameSuffix => write!(f, "name-suffix"),
            Variant::Level => write!(f, "level"),
        }
    }
}

/// The metadata of a single item of a collection
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct Item {
    /// The name of the item
    pub name: String,
    /// The description of the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The external URL of the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    /// The URI of the item's image
    pub image: String,
    /// The level of the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl Template {
    /// Derives the item with the given 1-based index from this template
    pub fn item(&self, variant: Variant, index: u32) -> Item {
        let (name, level) = match variant {
            Variant::NameSuffix => (format!("{}{index}", self.name), None),
            Variant::Level => (self.name.clone(), Some(index.to_string())),
        };

        Item {
            name,
            description: self.description.clone(),
            external_url: self.external_url.clone(),
            image: format!("{}/{index}.png", self.image),
            level,
        }
    }
}
