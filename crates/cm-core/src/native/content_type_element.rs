use crate::{MigrationElementType, Reference};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentTypeElementType {
    Text,
    Number,
    DateTime,
    RichText,
    Asset,
    Taxonomy,
    ModularContent,
    Custom,
    UrlSlug,
    MultipleChoice,
    Subpages,
    Guidelines,
    Snippet,
}

impl ContentTypeElementType {
    /// Guidelines and snippet placeholders carry no value.
    pub fn migration_type(&self) -> Option<MigrationElementType> {
        match self {
            Self::Text => Some(MigrationElementType::Text),
            Self::Number => Some(MigrationElementType::Number),
            Self::DateTime => Some(MigrationElementType::DateTime),
            Self::RichText => Some(MigrationElementType::RichText),
            Self::Asset => Some(MigrationElementType::Asset),
            Self::Taxonomy => Some(MigrationElementType::Taxonomy),
            Self::ModularContent => Some(MigrationElementType::ModularContent),
            Self::Custom => Some(MigrationElementType::Custom),
            Self::UrlSlug => Some(MigrationElementType::UrlSlug),
            Self::MultipleChoice => Some(MigrationElementType::MultipleChoice),
            Self::Subpages => Some(MigrationElementType::Subpages),
            Self::Guidelines | Self::Snippet => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeElement {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub codename: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub element_type: ContentTypeElementType,
    #[serde(default)]
    pub snippet: Option<Reference>,
    #[serde(default)]
    pub taxonomy_group: Option<Reference>,
    #[serde(default)]
    pub options: Vec<MultipleChoiceOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleChoiceOption {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub codename: Option<String>,
    pub name: String,
}
