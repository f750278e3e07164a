use crate::rich_text_processor::{
    process_asset_codenames, process_item_codenames, process_link_asset_codenames,
    process_link_item_codenames, replace_component_ids,
};
use crate::{
    ComponentUpsert, FlattenedContentTypeElement, ImportContext, LanguageVariantElementUpsert,
    MigrationComponent, MigrationElement, MigrationError, MigrationReference, Reference, Result,
};

use std::collections::HashMap;

use log::warn;
use serde_json::Value;
use uuid::Uuid;

/// Converts a portable element value into the upsert payload for the target
/// environment. Item and asset references that do not exist yet are written
/// as external ids so the API links them once the entity is created.
pub fn import_element(
    type_element: &FlattenedContentTypeElement,
    element: &MigrationElement,
    context: &ImportContext,
) -> Result<LanguageVariantElementUpsert> {
    import_element_at_depth(type_element, element, context, 0)
}

fn import_element_at_depth(
    type_element: &FlattenedContentTypeElement,
    element: &MigrationElement,
    context: &ImportContext,
    depth: usize,
) -> Result<LanguageVariantElementUpsert> {
    let mut upsert = LanguageVariantElementUpsert {
        element: Reference::by_codename(&type_element.codename),
        value: Value::Null,
        components: Vec::new(),
        mode: None,
        display_timezone: None,
    };

    match element {
        MigrationElement::Text { value } | MigrationElement::Custom { value } => {
            upsert.value = optional_string(value);
        }
        MigrationElement::Number { value } => {
            upsert.value = value
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null);
        }
        MigrationElement::DateTime {
            value,
            display_timezone,
        } => {
            upsert.value = optional_string(value);
            upsert.display_timezone = display_timezone.clone();
        }
        MigrationElement::UrlSlug { value, mode } => {
            upsert.value = optional_string(value);
            upsert.mode = Some(mode.as_str().to_string());
        }
        MigrationElement::Asset { value } => {
            upsert.value = references(
                value
                    .iter()
                    .map(|reference| context.asset_reference(&reference.codename)),
            )?;
        }
        MigrationElement::ModularContent { value } | MigrationElement::Subpages { value } => {
            upsert.value = references(
                value
                    .iter()
                    .map(|reference| context.item_reference(&reference.codename)),
            )?;
        }
        MigrationElement::Taxonomy { value } => {
            upsert.value = references(import_taxonomy_terms(type_element, value, context)?)?;
        }
        MigrationElement::MultipleChoice { value } => {
            upsert.value = references(import_multiple_choice_options(type_element, value)?)?;
        }
        MigrationElement::RichText { value, components } => {
            let (html, components) = import_rich_text(value, components, context, depth)?;
            upsert.value = Value::String(html);
            upsert.components = components;
        }
    }

    Ok(upsert)
}

fn optional_string(value: &Option<String>) -> Value {
    value.clone().map(Value::String).unwrap_or(Value::Null)
}

#[track_caller]
fn references(references: impl IntoIterator<Item = Reference>) -> Result<Value> {
    let references: Vec<Reference> = references.into_iter().collect();
    serde_json::to_value(references)
        .map_err(|source| MigrationError::serialization("element references", source))
}

fn import_taxonomy_terms(
    type_element: &FlattenedContentTypeElement,
    terms: &[MigrationReference],
    context: &ImportContext,
) -> Result<Vec<Reference>> {
    if terms.is_empty() {
        return Ok(Vec::new());
    }

    let group_id = type_element
        .element
        .taxonomy_group
        .as_ref()
        .and_then(|group| group.id())
        .unwrap_or_default();
    let taxonomy = context
        .taxonomy_by_id(group_id)
        .ok_or_else(|| MigrationError::missing_taxonomy_group(group_id))?;

    terms
        .iter()
        .map(|term| {
            taxonomy
                .find_term_by_codename(&term.codename)
                .map(|found| Reference::by_codename(&found.codename))
                .ok_or_else(|| {
                    MigrationError::missing_taxonomy_term(&taxonomy.codename, &term.codename)
                })
        })
        .collect()
}

fn import_multiple_choice_options(
    type_element: &FlattenedContentTypeElement,
    options: &[MigrationReference],
) -> Result<Vec<Reference>> {
    options
        .iter()
        .map(|option| {
            type_element
                .element
                .options
                .iter()
                .any(|declared| declared.codename.as_deref() == Some(option.codename.as_str()))
                .then(|| Reference::by_codename(&option.codename))
                .ok_or_else(|| {
                    MigrationError::invalid_multiple_choice_option(
                        option.codename.as_str(),
                        type_element.codename.as_str(),
                        "option does not exist in target environment",
                    )
                })
        })
        .collect()
}

/// Component ids are regenerated so that importing the same package twice
/// never collides with components created by the first run.
fn import_rich_text(
    html: &str,
    components: &[MigrationComponent],
    context: &ImportContext,
    depth: usize,
) -> Result<(String, Vec<ComponentUpsert>)> {
    let components: &[MigrationComponent] = if depth > 0 && !components.is_empty() {
        warn!(
            "Dropping {} nested component(s): only one level of components is supported",
            components.len()
        );
        &[]
    } else {
        components
    };

    let new_ids: HashMap<String, String> = components
        .iter()
        .map(|component| (component.system.id.clone(), Uuid::new_v4().to_string()))
        .collect();

    let html = replace_component_ids(html, &new_ids);
    let html = process_item_codenames(&html, |codename| {
        Ok(context.item_codename_resolution(codename))
    })?;
    let html = process_link_item_codenames(&html, |codename| {
        Ok(context.item_codename_resolution(codename))
    })?;
    let html = process_asset_codenames(&html, |codename| {
        Ok(context.asset_codename_resolution(codename))
    })?;
    let html = process_link_asset_codenames(&html, |codename| {
        Ok(context.asset_codename_resolution(codename))
    })?;

    let components = components
        .iter()
        .map(|component| {
            let type_codename = &component.system.content_type.codename;
            let elements = component
                .elements
                .iter()
                .map(|(codename, element)| {
                    let type_element =
                        context.element(type_codename, codename, element.element_type())?;
                    import_element_at_depth(type_element, element, context, depth + 1)
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(ComponentUpsert {
                id: new_ids
                    .get(&component.system.id)
                    .cloned()
                    .unwrap_or_else(|| component.system.id.clone()),
                content_type: Reference::by_codename(type_codename),
                elements,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((html, components))
}
