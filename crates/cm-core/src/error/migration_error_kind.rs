use std::fmt;

/// Closed classification of every failure the toolkit can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MigrationErrorKind {
    ConfirmationRefused,
    InvalidPackage,
    ImportFailedForItem,
    ExportFailedForItem,
    InvalidElement,
    MissingContentType,
    MissingContentTypeSnippet,
    MissingContentTypeElement,
    MissingItem,
    MissingAsset,
    MissingTaxonomyTerm,
    MissingTaxonomyGroup,
    InvalidMultipleChoiceOption,
    MissingWorkflowStep,
    MissingWorkflowPath,
    MissingCatalogEntry,
    InvalidValue,
    Api,
    Io,
    Serialization,
}

impl MigrationErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfirmationRefused => "CONFIRMATION_REFUSED",
            Self::InvalidPackage => "INVALID_PACKAGE",
            Self::ImportFailedForItem => "IMPORT_FAILED_FOR_ITEM",
            Self::ExportFailedForItem => "EXPORT_FAILED_FOR_ITEM",
            Self::InvalidElement => "INVALID_ELEMENT",
            Self::MissingContentType => "MISSING_CONTENT_TYPE",
            Self::MissingContentTypeSnippet => "MISSING_CONTENT_TYPE_SNIPPET",
            Self::MissingContentTypeElement => "MISSING_CONTENT_TYPE_ELEMENT",
            Self::MissingItem => "MISSING_ITEM",
            Self::MissingAsset => "MISSING_ASSET",
            Self::MissingTaxonomyTerm => "MISSING_TAXONOMY_TERM",
            Self::MissingTaxonomyGroup => "MISSING_TAXONOMY_GROUP",
            Self::InvalidMultipleChoiceOption => "INVALID_MULTIPLE_CHOICE_OPTION",
            Self::MissingWorkflowStep => "MISSING_WORKFLOW_STEP",
            Self::MissingWorkflowPath => "MISSING_WORKFLOW_PATH",
            Self::MissingCatalogEntry => "MISSING_CATALOG_ENTRY",
            Self::InvalidValue => "INVALID_VALUE",
            Self::Api => "API",
            Self::Io => "IO",
            Self::Serialization => "SERIALIZATION",
        }
    }
}

impl fmt::Display for MigrationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
