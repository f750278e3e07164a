use crate::export_transforms::{ExportElementInput, export_element};
use crate::{
    Asset, ExportContext, ExportItem, ExportItemVersion, FlattenedContentType,
    InvalidElementContext, LanguageVariantElement, MigrationAsset, MigrationAssetDescription,
    MigrationComponent, MigrationComponentSystem, MigrationElementType, MigrationElements,
    MigrationError, MigrationItem, MigrationItemSchedule, MigrationItemSystem,
    MigrationItemVersion, MigrationReference, Result, VariantComponent,
};

use bytes::Bytes;
use log::warn;

const COMPONENT_DEPTH_LIMIT: usize = 1;

pub fn map_to_migration_items(context: &ExportContext) -> Result<Vec<MigrationItem>> {
    context
        .export_items
        .iter()
        .map(|export_item| map_to_migration_item(context, export_item))
        .collect()
}

pub fn map_to_migration_item(
    context: &ExportContext,
    export_item: &ExportItem,
) -> Result<MigrationItem> {
    let versions = export_item
        .versions
        .iter()
        .map(|version| map_to_migration_version(context, export_item, version))
        .collect::<Result<Vec<_>>>()?;

    Ok(MigrationItem {
        system: MigrationItemSystem {
            name: export_item.content_item.name.clone(),
            codename: export_item.content_item.codename.clone(),
            language: MigrationReference::new(&export_item.language.codename),
            content_type: MigrationReference::new(&export_item.content_type.codename),
            collection: MigrationReference::new(&export_item.collection.codename),
            workflow: MigrationReference::new(&export_item.workflow.codename),
        },
        versions,
    })
}

fn map_to_migration_version(
    context: &ExportContext,
    export_item: &ExportItem,
    version: &ExportItemVersion,
) -> Result<MigrationItemVersion> {
    let schedule = &version.language_variant.schedule;
    let location = ElementLocation {
        item: &export_item.content_item.codename,
        workflow_step: &version.workflow_step_codename,
    };

    Ok(MigrationItemVersion {
        elements: map_elements(
            context,
            &export_item.content_type,
            &version.language_variant.elements,
            &location,
            0,
        )?,
        schedule: MigrationItemSchedule {
            publish_time: schedule.publish_time.clone(),
            publish_display_timezone: schedule.publish_display_timezone.clone(),
            unpublish_time: schedule.unpublish_time.clone(),
            unpublish_display_timezone: schedule.unpublish_display_timezone.clone(),
        },
        workflow_step: MigrationReference::new(&version.workflow_step_codename),
    })
}

struct ElementLocation<'a> {
    item: &'a str,
    workflow_step: &'a str,
}

/// One entry per element declared on the content type, whatever the raw
/// payload contains. Undeclared raw elements are ignored.
fn map_elements(
    context: &ExportContext,
    content_type: &FlattenedContentType,
    raw_elements: &[LanguageVariantElement],
    location: &ElementLocation<'_>,
    depth: usize,
) -> Result<MigrationElements> {
    let mut elements = MigrationElements::new();

    for type_element in &content_type.elements {
        let raw_element = raw_elements
            .iter()
            .find(|raw| raw.element.id() == Some(type_element.id.as_str()));

        let components = match raw_element {
            Some(raw) if type_element.element_type == MigrationElementType::RichText => {
                map_components(context, &raw.components, location, depth)?
            }
            _ => Vec::new(),
        };

        let input = raw_element
            .map(|raw| ExportElementInput {
                value: raw.value.as_ref(),
                mode: raw.mode.as_deref(),
                display_timezone: raw.display_timezone.as_deref(),
            })
            .unwrap_or_default();

        let element = export_element(type_element, input, components, context).map_err(|err| {
            err.into_invalid_element(InvalidElementContext {
                content_type: &content_type.codename,
                element: &type_element.codename,
                element_type: type_element.element_type.as_str(),
                item: location.item,
                workflow_step: location.workflow_step,
                raw_value: raw_element
                    .and_then(|raw| serde_json::to_string(&raw.value).ok())
                    .unwrap_or_else(|| "null".to_string()),
            })
        })?;

        elements.insert(type_element.codename.clone(), element);
    }

    Ok(elements)
}

fn map_components(
    context: &ExportContext,
    components: &[VariantComponent],
    location: &ElementLocation<'_>,
    depth: usize,
) -> Result<Vec<MigrationComponent>> {
    if components.is_empty() {
        return Ok(Vec::new());
    }

    if depth >= COMPONENT_DEPTH_LIMIT {
        warn!(
            "Dropping {} nested component(s) in item '{}': only one level of components is supported",
            components.len(),
            location.item
        );
        return Ok(Vec::new());
    }

    components
        .iter()
        .map(|component| {
            let component_type = context.content_type_by_id(
                component.content_type.id().unwrap_or_default(),
            )?;

            Ok(MigrationComponent {
                system: MigrationComponentSystem {
                    id: component.id.clone(),
                    content_type: MigrationReference::new(&component_type.codename),
                },
                elements: map_elements(
                    context,
                    component_type,
                    &component.elements,
                    location,
                    depth + 1,
                )?,
            })
        })
        .collect()
}

/// Maps a source asset and its downloaded binary to the portable form.
pub fn map_to_migration_asset(
    context: &ExportContext,
    asset: &Asset,
    binary_data: Bytes,
) -> Result<MigrationAsset> {
    let collection = match asset.collection_id() {
        Some(id) => Some(
            context
                .collection_by_id(id)
                .map(|collection| MigrationReference::new(&collection.codename))
                .ok_or_else(|| MigrationError::missing_catalog_entry("collection", id))?,
        ),
        None => None,
    };

    let folder = asset
        .folder
        .as_ref()
        .and_then(|folder| folder.id())
        .and_then(|id| context.asset_folder_by_id(id))
        .and_then(|folder| folder.codename.as_ref())
        .map(MigrationReference::new);

    let descriptions = asset
        .descriptions
        .iter()
        .map(|description| {
            let language_id = description.language.id().unwrap_or_default();
            let language = context
                .language_by_id(language_id)
                .ok_or_else(|| MigrationError::missing_catalog_entry("language", language_id))?;

            Ok(MigrationAssetDescription {
                language: MigrationReference::new(&language.codename),
                description: description.description.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(MigrationAsset {
        codename: asset.codename.clone(),
        filename: asset.file_name.clone(),
        title: asset.title.clone(),
        collection,
        folder,
        descriptions,
        binary_data,
    })
}
