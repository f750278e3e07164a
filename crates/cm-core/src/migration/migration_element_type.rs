use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationElementType {
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
}

impl MigrationElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::DateTime => "date_time",
            Self::RichText => "rich_text",
            Self::Asset => "asset",
            Self::Taxonomy => "taxonomy",
            Self::ModularContent => "modular_content",
            Self::Custom => "custom",
            Self::UrlSlug => "url_slug",
            Self::MultipleChoice => "multiple_choice",
            Self::Subpages => "subpages",
        }
    }
}

impl fmt::Display for MigrationElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
