use crate::rich_text_processor::{
    collect_asset_codenames, collect_item_codenames, collect_link_asset_codenames,
    collect_link_item_codenames, is_missing_reference_placeholder,
};
use crate::{MigrationElement, MigrationElements, MigrationItem, ReferencedDataInMigrationItems};

/// Collects every item and asset codename referenced by the migration items,
/// including one level of rich text components. Skipped-reference
/// placeholders are not references.
pub fn scan_migration_items(items: &[MigrationItem]) -> ReferencedDataInMigrationItems {
    let mut data = ReferencedDataInMigrationItems::default();

    for item in items {
        for version in &item.versions {
            scan_elements(&version.elements, &mut data, true);
        }
    }

    data.item_codenames
        .retain(|codename| !is_missing_reference_placeholder(codename));
    data.asset_codenames
        .retain(|codename| !is_missing_reference_placeholder(codename));
    data
}

fn scan_elements(
    elements: &MigrationElements,
    data: &mut ReferencedDataInMigrationItems,
    include_components: bool,
) {
    for element in elements.values() {
        match element {
            MigrationElement::ModularContent { value } | MigrationElement::Subpages { value } => {
                data.item_codenames
                    .extend(value.iter().map(|reference| reference.codename.clone()));
            }
            MigrationElement::Asset { value } => {
                data.asset_codenames
                    .extend(value.iter().map(|reference| reference.codename.clone()));
            }
            MigrationElement::RichText { value, components } => {
                data.item_codenames.extend(collect_item_codenames(value));
                data.item_codenames.extend(collect_link_item_codenames(value));
                data.asset_codenames.extend(collect_asset_codenames(value));
                data.asset_codenames
                    .extend(collect_link_asset_codenames(value));

                if include_components {
                    for component in components {
                        scan_elements(&component.elements, data, false);
                    }
                }
            }
            _ => {}
        }
    }
}
