use crate::import_transforms::import_element;
use crate::{
    AssetCollection, AssetDescription, AssetUpsert, ContentItemUpsert, FileReference,
    ImportContext, InvalidElementContext, LanguageVariantUpsert, MigrationAsset, MigrationItem,
    MigrationItemVersion, Reference, Result,
};

use log::warn;

pub fn map_to_content_item_upsert(item: &MigrationItem) -> ContentItemUpsert {
    ContentItemUpsert {
        name: item.system.name.clone(),
        codename: Some(item.system.codename.clone()),
        content_type: Some(Reference::by_codename(&item.system.content_type.codename)),
        collection: Some(Reference::by_codename(&item.system.collection.codename)),
    }
}

pub fn map_to_language_variant_upsert(
    item: &MigrationItem,
    version: &MigrationItemVersion,
    context: &ImportContext,
) -> Result<LanguageVariantUpsert> {
    let content_type = &item.system.content_type.codename;

    let elements = version
        .elements
        .iter()
        .map(|(codename, element)| {
            let element_type = element.element_type();
            context
                .element(content_type, codename, element_type)
                .and_then(|type_element| import_element(type_element, element, context))
                .map_err(|err| {
                    err.into_invalid_element(InvalidElementContext {
                        content_type,
                        element: codename,
                        element_type: element_type.as_str(),
                        item: &item.system.codename,
                        workflow_step: &version.workflow_step.codename,
                        raw_value: serde_json::to_string(element)
                            .unwrap_or_else(|_| "null".to_string()),
                    })
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(LanguageVariantUpsert { elements })
}

/// Metadata payload for an asset. `file_reference` is only set when a new
/// binary was uploaded.
pub fn map_to_asset_upsert(
    asset: &MigrationAsset,
    context: &ImportContext,
    file_reference: Option<FileReference>,
) -> AssetUpsert {
    let folder = asset.folder.as_ref().and_then(|folder| {
        let found = context.asset_folder_by_codename(&folder.codename);
        if found.is_none() {
            warn!(
                "Asset folder '{}' of asset '{}' does not exist in target environment",
                folder.codename, asset.codename
            );
        }
        found.map(|found| Reference::by_id(&found.id))
    });

    AssetUpsert {
        file_reference,
        codename: Some(asset.codename.clone()),
        title: asset.title.clone(),
        descriptions: asset
            .descriptions
            .iter()
            .map(|description| AssetDescription {
                language: Reference::by_codename(&description.language.codename),
                description: description.description.clone(),
            })
            .collect(),
        folder,
        collection: asset.collection.as_ref().map(|collection| AssetCollection {
            reference: Some(Reference::by_codename(&collection.codename)),
        }),
    }
}
