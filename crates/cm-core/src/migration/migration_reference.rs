use serde::{Deserialize, Serialize};

/// Environment-independent pointer to another entity, always by codename.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MigrationReference {
    pub codename: String,
}

impl MigrationReference {
    pub fn new(codename: impl Into<String>) -> Self {
        Self {
            codename: codename.into(),
        }
    }
}
