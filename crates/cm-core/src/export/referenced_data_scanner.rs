use crate::rich_text_processor::{
    collect_asset_ids, collect_item_ids, collect_link_asset_ids, collect_link_item_ids,
};
use crate::{
    ElementValue, ExportItem, FlattenedContentType, LanguageVariantElement, MigrationElementType,
    MigrationError, ReferencedDataInLanguageVariants, Result,
};

/// Collects every item and asset id referenced by the exported variants,
/// including one level of rich text components.
pub fn scan_export_items(
    export_items: &[ExportItem],
    content_types: &[FlattenedContentType],
) -> Result<ReferencedDataInLanguageVariants> {
    let mut data = ReferencedDataInLanguageVariants::default();

    for export_item in export_items {
        for version in &export_item.versions {
            scan_elements(
                &version.language_variant.elements,
                &export_item.content_type,
                content_types,
                &mut data,
                true,
            )?;
        }
    }

    Ok(data)
}

fn scan_elements(
    elements: &[LanguageVariantElement],
    content_type: &FlattenedContentType,
    content_types: &[FlattenedContentType],
    data: &mut ReferencedDataInLanguageVariants,
    include_components: bool,
) -> Result<()> {
    for element in elements {
        let Some(type_element) = element
            .element
            .id()
            .and_then(|id| content_type.element_by_id(id))
        else {
            continue;
        };

        match type_element.element_type {
            MigrationElementType::ModularContent | MigrationElementType::Subpages => {
                data.item_ids.extend(reference_ids(element.value.as_ref()));
            }
            MigrationElementType::Asset => {
                data.asset_ids.extend(reference_ids(element.value.as_ref()));
            }
            MigrationElementType::RichText => {
                if let Some(ElementValue::Text(html)) = &element.value {
                    data.item_ids.extend(collect_item_ids(html));
                    data.item_ids.extend(collect_link_item_ids(html));
                    data.asset_ids.extend(collect_asset_ids(html));
                    data.asset_ids.extend(collect_link_asset_ids(html));
                }

                if include_components {
                    for component in &element.components {
                        let type_id = component.content_type.id().unwrap_or_default();
                        let component_type = content_types
                            .iter()
                            .find(|content_type| content_type.id == type_id)
                            .ok_or_else(|| MigrationError::missing_content_type(type_id))?;

                        scan_elements(
                            &component.elements,
                            component_type,
                            content_types,
                            data,
                            false,
                        )?;
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn reference_ids(value: Option<&ElementValue>) -> Vec<String> {
    match value {
        Some(ElementValue::References(references)) => references
            .iter()
            .filter_map(|reference| reference.id())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
