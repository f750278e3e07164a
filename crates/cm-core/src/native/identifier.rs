use std::fmt;

/// How an entity is addressed in a management API path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Id(String),
    Codename(String),
    ExternalId(String),
}

impl Identifier {
    pub fn to_path_segment(&self) -> String {
        match self {
            Self::Id(id) => id.clone(),
            Self::Codename(codename) => format!("codename/{codename}"),
            Self::ExternalId(external_id) => format!("external-id/{external_id}"),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id '{id}'"),
            Self::Codename(codename) => write!(f, "codename '{codename}'"),
            Self::ExternalId(external_id) => write!(f, "external id '{external_id}'"),
        }
    }
}
