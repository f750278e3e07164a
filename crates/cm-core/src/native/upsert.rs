//! Request bodies sent to the management API.

use crate::{AssetCollection, AssetDescription, FileReference, Reference};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentItemUpsert {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codename: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageVariantUpsert {
    pub elements: Vec<LanguageVariantElementUpsert>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageVariantElementUpsert {
    pub element: Reference,
    pub value: serde_json::Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ComponentUpsert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_timezone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentUpsert {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: Reference,
    pub elements: Vec<LanguageVariantElementUpsert>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetUpsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_reference: Option<FileReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub descriptions: Vec<AssetDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<AssetCollection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowStepChange {
    pub workflow_identifier: Reference,
    pub step_identifier: Reference,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_timezone: Option<String>,
}
