use crate::{MigrationComponent, MigrationElementType, MigrationReference, UrlSlugMode};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Element values of one item version or component, keyed by element codename.
pub type MigrationElements = BTreeMap<String, MigrationElement>;

/// Typed value of a single element. The tag is the element type, so the
/// kind of a value can never disagree with its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MigrationElement {
    Text {
        value: Option<String>,
    },
    Number {
        value: Option<f64>,
    },
    DateTime {
        value: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        display_timezone: Option<String>,
    },
    RichText {
        value: String,
        #[serde(default)]
        components: Vec<MigrationComponent>,
    },
    Asset {
        #[serde(default)]
        value: Vec<MigrationReference>,
    },
    Taxonomy {
        #[serde(default)]
        value: Vec<MigrationReference>,
    },
    ModularContent {
        #[serde(default)]
        value: Vec<MigrationReference>,
    },
    Custom {
        value: Option<String>,
    },
    UrlSlug {
        value: Option<String>,
        #[serde(default)]
        mode: UrlSlugMode,
    },
    MultipleChoice {
        #[serde(default)]
        value: Vec<MigrationReference>,
    },
    Subpages {
        #[serde(default)]
        value: Vec<MigrationReference>,
    },
}

impl MigrationElement {
    pub fn element_type(&self) -> MigrationElementType {
        match self {
            Self::Text { .. } => MigrationElementType::Text,
            Self::Number { .. } => MigrationElementType::Number,
            Self::DateTime { .. } => MigrationElementType::DateTime,
            Self::RichText { .. } => MigrationElementType::RichText,
            Self::Asset { .. } => MigrationElementType::Asset,
            Self::Taxonomy { .. } => MigrationElementType::Taxonomy,
            Self::ModularContent { .. } => MigrationElementType::ModularContent,
            Self::Custom { .. } => MigrationElementType::Custom,
            Self::UrlSlug { .. } => MigrationElementType::UrlSlug,
            Self::MultipleChoice { .. } => MigrationElementType::MultipleChoice,
            Self::Subpages { .. } => MigrationElementType::Subpages,
        }
    }
}
