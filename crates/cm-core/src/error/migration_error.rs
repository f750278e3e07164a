use crate::MigrationErrorKind;

use std::fmt::Display;
use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

const UNKNOWN_CONTEXT: &str = "?";

#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("Confirmation refused, operation aborted {location}")]
    ConfirmationRefused { location: ErrorLocation },

    #[error("Invalid package: {message} {location}")]
    InvalidPackage {
        message: String,
        location: ErrorLocation,
    },

    #[error(
        "Failed to export item '{item}' in language '{language}': {message} {location}"
    )]
    ExportFailedForItem {
        item: String,
        language: String,
        message: String,
        location: ErrorLocation,
    },

    #[error(
        "Failed to import item '{item}' in language '{language}': {message} {location}"
    )]
    ImportFailedForItem {
        item: String,
        language: String,
        message: String,
        location: ErrorLocation,
    },

    #[error(
        "Failed to map element '{element}' of type '{element_type}' in content type '{content_type}' \
         (item '{item}', workflow step '{workflow_step}', value {raw_value}): {message} {location}"
    )]
    InvalidElement {
        content_type: String,
        element: String,
        element_type: String,
        item: String,
        workflow_step: String,
        raw_value: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Content type '{content_type}' does not exist {location}")]
    MissingContentType {
        content_type: String,
        location: ErrorLocation,
    },

    #[error("Content type snippet '{snippet}' used by content type '{content_type}' does not exist {location}")]
    MissingContentTypeSnippet {
        snippet: String,
        content_type: String,
        location: ErrorLocation,
    },

    #[error("Content type '{content_type}' has no element '{element}' {location}")]
    MissingContentTypeElement {
        content_type: String,
        element: String,
        location: ErrorLocation,
    },

    #[error(
        "Missing item with id '{id}'. Missing references can be skipped with the skip_missing_references option {location}"
    )]
    MissingItem { id: String, location: ErrorLocation },

    #[error(
        "Missing asset with id '{id}'. Missing references can be skipped with the skip_missing_references option {location}"
    )]
    MissingAsset { id: String, location: ErrorLocation },

    #[error("Taxonomy group '{taxonomy}' has no term '{term}' {location}")]
    MissingTaxonomyTerm {
        taxonomy: String,
        term: String,
        location: ErrorLocation,
    },

    #[error("Taxonomy group '{id}' does not exist {location}")]
    MissingTaxonomyGroup { id: String, location: ErrorLocation },

    #[error("Invalid option '{option}' for multiple choice element '{element}': {message} {location}")]
    InvalidMultipleChoiceOption {
        option: String,
        element: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Workflow '{workflow}' has no step '{step}' {location}")]
    MissingWorkflowStep {
        workflow: String,
        step: String,
        location: ErrorLocation,
    },

    #[error("Workflow '{workflow}' has no path from step '{from_step}' to step '{to_step}' {location}")]
    MissingWorkflowPath {
        workflow: String,
        from_step: String,
        to_step: String,
        location: ErrorLocation,
    },

    #[error("Could not find {catalog} '{key}' {location}")]
    MissingCatalogEntry {
        catalog: &'static str,
        key: String,
        location: ErrorLocation,
    },

    #[error("Invalid value: {message} {location}")]
    InvalidValue {
        message: String,
        location: ErrorLocation,
    },

    #[error("API error: {message} {location}")]
    Api {
        message: String,
        status: Option<u16>,
        location: ErrorLocation,
    },

    #[error("IO error: {message}: {source} {location}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Serialization error: {message}: {source} {location}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl MigrationError {
    #[track_caller]
    pub fn confirmation_refused() -> Self {
        Self::ConfirmationRefused {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_package(message: impl Into<String>) -> Self {
        Self::InvalidPackage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn export_failed_for_item(
        item: impl Into<String>,
        language: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ExportFailedForItem {
            item: item.into(),
            language: language.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn import_failed_for_item(
        item: impl Into<String>,
        language: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ImportFailedForItem {
            item: item.into(),
            language: language.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_content_type(content_type: impl Into<String>) -> Self {
        Self::MissingContentType {
            content_type: content_type.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_content_type_snippet(
        snippet: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self::MissingContentTypeSnippet {
            snippet: snippet.into(),
            content_type: content_type.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Value of the wrong type for a target element. Item context is filled
    /// in later by `into_invalid_element`.
    #[track_caller]
    pub fn element_type_mismatch(
        content_type: impl Into<String>,
        element: impl Into<String>,
        element_type: impl Into<String>,
        value_type: impl Display,
    ) -> Self {
        let element_type = element_type.into();
        Self::InvalidElement {
            message: format!(
                "element is of type '{element_type}' but the value is of type '{value_type}'"
            ),
            content_type: content_type.into(),
            element: element.into(),
            element_type,
            item: UNKNOWN_CONTEXT.to_string(),
            workflow_step: UNKNOWN_CONTEXT.to_string(),
            raw_value: UNKNOWN_CONTEXT.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_content_type_element(
        content_type: impl Into<String>,
        element: impl Into<String>,
    ) -> Self {
        Self::MissingContentTypeElement {
            content_type: content_type.into(),
            element: element.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_item(id: impl Into<String>) -> Self {
        Self::MissingItem {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_asset(id: impl Into<String>) -> Self {
        Self::MissingAsset {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_taxonomy_term(taxonomy: impl Into<String>, term: impl Into<String>) -> Self {
        Self::MissingTaxonomyTerm {
            taxonomy: taxonomy.into(),
            term: term.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_taxonomy_group(id: impl Into<String>) -> Self {
        Self::MissingTaxonomyGroup {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_multiple_choice_option(
        option: impl Into<String>,
        element: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidMultipleChoiceOption {
            option: option.into(),
            element: element.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_workflow_step(workflow: impl Into<String>, step: impl Into<String>) -> Self {
        Self::MissingWorkflowStep {
            workflow: workflow.into(),
            step: step.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_workflow_path(
        workflow: impl Into<String>,
        from_step: impl Into<String>,
        to_step: impl Into<String>,
    ) -> Self {
        Self::MissingWorkflowPath {
            workflow: workflow.into(),
            from_step: from_step.into(),
            to_step: to_step.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_catalog_entry(catalog: &'static str, key: impl Into<String>) -> Self {
        Self::MissingCatalogEntry {
            catalog,
            key: key.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::InvalidValue {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Api {
            message: message.into(),
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> MigrationErrorKind {
        match self {
            Self::ConfirmationRefused { .. } => MigrationErrorKind::ConfirmationRefused,
            Self::InvalidPackage { .. } => MigrationErrorKind::InvalidPackage,
            Self::ExportFailedForItem { .. } => MigrationErrorKind::ExportFailedForItem,
            Self::ImportFailedForItem { .. } => MigrationErrorKind::ImportFailedForItem,
            Self::InvalidElement { .. } => MigrationErrorKind::InvalidElement,
            Self::MissingContentType { .. } => MigrationErrorKind::MissingContentType,
            Self::MissingContentTypeSnippet { .. } => MigrationErrorKind::MissingContentTypeSnippet,
            Self::MissingContentTypeElement { .. } => MigrationErrorKind::MissingContentTypeElement,
            Self::MissingItem { .. } => MigrationErrorKind::MissingItem,
            Self::MissingAsset { .. } => MigrationErrorKind::MissingAsset,
            Self::MissingTaxonomyTerm { .. } => MigrationErrorKind::MissingTaxonomyTerm,
            Self::MissingTaxonomyGroup { .. } => MigrationErrorKind::MissingTaxonomyGroup,
            Self::InvalidMultipleChoiceOption { .. } => {
                MigrationErrorKind::InvalidMultipleChoiceOption
            }
            Self::MissingWorkflowStep { .. } => MigrationErrorKind::MissingWorkflowStep,
            Self::MissingWorkflowPath { .. } => MigrationErrorKind::MissingWorkflowPath,
            Self::MissingCatalogEntry { .. } => MigrationErrorKind::MissingCatalogEntry,
            Self::InvalidValue { .. } => MigrationErrorKind::InvalidValue,
            Self::Api { .. } => MigrationErrorKind::Api,
            Self::Io { .. } => MigrationErrorKind::Io,
            Self::Serialization { .. } => MigrationErrorKind::Serialization,
        }
    }

    /// Only dangling item and asset references may be skipped by policy.
    pub fn is_skippable(&self) -> bool {
        matches!(
            self.kind(),
            MigrationErrorKind::MissingItem | MigrationErrorKind::MissingAsset
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: Some(404), .. })
    }

    /// Re-wraps a shape mismatch raised by a transform with the element
    /// context, and attaches the item context to an `InvalidElement` raised
    /// without it. Every other error passes through untouched.
    pub fn into_invalid_element(self, context: InvalidElementContext<'_>) -> Self {
        match self {
            Self::InvalidValue { message, location } => Self::InvalidElement {
                content_type: context.content_type.to_string(),
                element: context.element.to_string(),
                element_type: context.element_type.to_string(),
                item: context.item.to_string(),
                workflow_step: context.workflow_step.to_string(),
                raw_value: context.raw_value,
                message,
                location,
            },
            Self::InvalidElement {
                content_type,
                element,
                element_type,
                message,
                location,
                ..
            } => Self::InvalidElement {
                content_type,
                element,
                element_type,
                item: context.item.to_string(),
                workflow_step: context.workflow_step.to_string(),
                raw_value: context.raw_value,
                message,
                location,
            },
            other => other,
        }
    }
}

/// Where a failing element lives, used to enrich `InvalidValue` errors.
#[derive(Debug, Clone)]
pub struct InvalidElementContext<'a> {
    pub content_type: &'a str,
    pub element: &'a str,
    pub element_type: &'a str,
    pub item: &'a str,
    pub workflow_step: &'a str,
    pub raw_value: String,
}

pub type Result<T> = std::result::Result<T, MigrationError>;
