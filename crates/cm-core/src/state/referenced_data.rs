use std::collections::BTreeSet;

/// Closure of ids referenced by exported language variants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferencedDataInLanguageVariants {
    pub item_ids: BTreeSet<String>,
    pub asset_ids: BTreeSet<String>,
}

/// Closure of codenames referenced by migration items being imported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferencedDataInMigrationItems {
    pub item_codenames: BTreeSet<String>,
    pub asset_codenames: BTreeSet<String>,
}
