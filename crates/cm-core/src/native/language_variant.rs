use crate::Reference;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageVariant {
    pub item: Reference,
    pub language: Reference,
    #[serde(default)]
    pub elements: Vec<LanguageVariantElement>,
    pub workflow: VariantWorkflow,
    #[serde(default)]
    pub schedule: VariantSchedule,
    #[serde(default)]
    pub last_modified: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageVariantElement {
    pub element: Reference,
    #[serde(default)]
    pub value: Option<ElementValue>,
    #[serde(default)]
    pub components: Vec<VariantComponent>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub display_timezone: Option<String>,
}

/// Raw element value exactly as the API returns it. Numbers come first so
/// that untagged matching never reads a number as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementValue {
    Number(f64),
    Text(String),
    References(Vec<Reference>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantComponent {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: Reference,
    #[serde(default)]
    pub elements: Vec<LanguageVariantElement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantWorkflow {
    pub workflow_identifier: Reference,
    pub step_identifier: Reference,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSchedule {
    #[serde(default)]
    pub publish_time: Option<String>,
    #[serde(default)]
    pub publish_display_timezone: Option<String>,
    #[serde(default)]
    pub unpublish_time: Option<String>,
    #[serde(default)]
    pub unpublish_display_timezone: Option<String>,
}
