use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExternalIdKind {
    Item,
    Asset,
}

impl fmt::Display for ExternalIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item => f.write_str("item"),
            Self::Asset => f.write_str("asset"),
        }
    }
}

/// Input of external id generation. Items are keyed by codename only, so
/// every language variant of an item shares one external id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalIdKey<'a> {
    pub kind: ExternalIdKind,
    pub codename: &'a str,
}

/// Deterministic mapping from a codename to the external id used when the
/// entity does not exist in the target environment yet.
pub trait ExternalIdGenerator: Send + Sync {
    fn generate(&self, key: &ExternalIdKey<'_>) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultExternalIdGenerator;

impl ExternalIdGenerator for DefaultExternalIdGenerator {
    fn generate(&self, key: &ExternalIdKey<'_>) -> String {
        format!("migration_{}_{}", key.kind, key.codename)
    }
}
