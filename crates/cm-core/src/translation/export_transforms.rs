use crate::rich_text_processor::{
    MissingReferenceKind, missing_reference_placeholder, process_asset_ids,
    process_item_ids, process_link_asset_ids, process_link_item_ids,
};
use crate::{
    ElementValue, ExportContext, FlattenedContentTypeElement, MigrationComponent,
    MigrationElement, MigrationElementType, MigrationError, MigrationReference, ReferenceState,
    Result, UrlSlugMode,
};

/// Raw element data handed to an export transform. Components are already
/// mapped by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportElementInput<'a> {
    pub value: Option<&'a ElementValue>,
    pub mode: Option<&'a str>,
    pub display_timezone: Option<&'a str>,
}

/// Converts a raw element value into its portable form. Shape mismatches
/// surface as `InvalidValue`; dangling references follow the skip policy.
pub fn export_element(
    type_element: &FlattenedContentTypeElement,
    input: ExportElementInput<'_>,
    components: Vec<MigrationComponent>,
    context: &ExportContext,
) -> Result<MigrationElement> {
    match type_element.element_type {
        MigrationElementType::Text => Ok(MigrationElement::Text {
            value: text_value(input.value),
        }),
        MigrationElementType::Number => Ok(MigrationElement::Number {
            value: number_value(input.value)?,
        }),
        MigrationElementType::DateTime => Ok(MigrationElement::DateTime {
            value: text_value(input.value),
            display_timezone: input.display_timezone.map(str::to_string),
        }),
        MigrationElementType::RichText => Ok(MigrationElement::RichText {
            value: export_rich_text(text_value(input.value).unwrap_or_default(), context)?,
            components,
        }),
        MigrationElementType::Asset => Ok(MigrationElement::Asset {
            value: export_asset_references(input.value, context)?,
        }),
        MigrationElementType::Taxonomy => Ok(MigrationElement::Taxonomy {
            value: export_taxonomy_terms(type_element, input.value, context)?,
        }),
        MigrationElementType::ModularContent => Ok(MigrationElement::ModularContent {
            value: export_item_references(input.value, context)?,
        }),
        MigrationElementType::Subpages => Ok(MigrationElement::Subpages {
            value: export_item_references(input.value, context)?,
        }),
        MigrationElementType::Custom => Ok(MigrationElement::Custom {
            value: text_value(input.value),
        }),
        MigrationElementType::UrlSlug => Ok(MigrationElement::UrlSlug {
            value: text_value(input.value),
            mode: input
                .mode
                .map(str::parse::<UrlSlugMode>)
                .transpose()?
                .unwrap_or_default(),
        }),
        MigrationElementType::MultipleChoice => Ok(MigrationElement::MultipleChoice {
            value: export_multiple_choice_options(type_element, input.value)?,
        }),
    }
}

fn text_value(value: Option<&ElementValue>) -> Option<String> {
    match value {
        Some(ElementValue::Text(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}

#[track_caller]
fn number_value(value: Option<&ElementValue>) -> Result<Option<f64>> {
    match value {
        None => Ok(None),
        Some(ElementValue::Number(number)) => Ok(Some(*number)),
        Some(ElementValue::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(ElementValue::Text(text)) => text.trim().parse::<f64>().map(Some).map_err(|_| {
            MigrationError::invalid_value(format!("Expected a number, got '{text}'"))
        }),
        Some(ElementValue::References(_)) => Err(MigrationError::invalid_value(
            "Expected a number, got an array",
        )),
    }
}

#[track_caller]
fn reference_ids(value: Option<&ElementValue>) -> Result<Vec<&str>> {
    match value {
        None => Ok(Vec::new()),
        Some(ElementValue::References(references)) => {
            Ok(references.iter().filter_map(|reference| reference.id()).collect())
        }
        Some(other) => Err(MigrationError::invalid_value(format!(
            "Expected an array of references, got {other:?}"
        ))),
    }
}

fn export_item_references(
    value: Option<&ElementValue>,
    context: &ExportContext,
) -> Result<Vec<MigrationReference>> {
    let mut references = Vec::new();
    for id in reference_ids(value)? {
        match context.item_state(id) {
            ReferenceState::Exists(item) => references.push(MigrationReference::new(&item.codename)),
            ReferenceState::Skip => {}
            ReferenceState::DoesNotExist => return Err(MigrationError::missing_item(id)),
        }
    }
    Ok(references)
}

fn export_asset_references(
    value: Option<&ElementValue>,
    context: &ExportContext,
) -> Result<Vec<MigrationReference>> {
    let mut references = Vec::new();
    for id in reference_ids(value)? {
        match context.asset_state(id) {
            ReferenceState::Exists(asset) => {
                references.push(MigrationReference::new(&asset.codename))
            }
            ReferenceState::Skip => {}
            ReferenceState::DoesNotExist => return Err(MigrationError::missing_asset(id)),
        }
    }
    Ok(references)
}

// Missing terms are always fatal: taxonomies are schema, not content.
fn export_taxonomy_terms(
    type_element: &FlattenedContentTypeElement,
    value: Option<&ElementValue>,
    context: &ExportContext,
) -> Result<Vec<MigrationReference>> {
    let ids = reference_ids(value)?;
    if ids.is_empty() {
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

    ids.into_iter()
        .map(|id| {
            taxonomy
                .find_term_by_id(id)
                .map(|term| MigrationReference::new(&term.codename))
                .ok_or_else(|| MigrationError::missing_taxonomy_term(&taxonomy.codename, id))
        })
        .collect()
}

fn export_multiple_choice_options(
    type_element: &FlattenedContentTypeElement,
    value: Option<&ElementValue>,
) -> Result<Vec<MigrationReference>> {
    reference_ids(value)?
        .into_iter()
        .map(|id| {
            let option = type_element
                .element
                .options
                .iter()
                .find(|option| option.id.as_deref() == Some(id))
                .ok_or_else(|| {
                    MigrationError::invalid_multiple_choice_option(
                        id,
                        type_element.codename.as_str(),
                        "option does not exist",
                    )
                })?;

            option
                .codename
                .as_ref()
                .map(MigrationReference::new)
                .ok_or_else(|| {
                    MigrationError::invalid_multiple_choice_option(
                        option.name.as_str(),
                        type_element.codename.as_str(),
                        "option has no codename",
                    )
                })
        })
        .collect()
}

fn export_rich_text(html: String, context: &ExportContext) -> Result<String> {
    if html.is_empty() {
        return Ok(html);
    }

    let html = process_item_ids(&html, |id| resolve_item_codename(id, context))?;
    let html = process_link_item_ids(&html, |id| resolve_item_codename(id, context))?;
    let html = process_asset_ids(&html, |id| resolve_asset_codename(id, context))?;
    process_link_asset_ids(&html, |id| resolve_asset_codename(id, context))
}

fn resolve_item_codename(id: &str, context: &ExportContext) -> Result<String> {
    match context.item_state(id) {
        ReferenceState::Exists(item) => Ok(item.codename.clone()),
        ReferenceState::Skip => Ok(missing_reference_placeholder(MissingReferenceKind::Item, id)),
        ReferenceState::DoesNotExist => Err(MigrationError::missing_item(id)),
    }
}

fn resolve_asset_codename(id: &str, context: &ExportContext) -> Result<String> {
    match context.asset_state(id) {
        ReferenceState::Exists(asset) => Ok(asset.codename.clone()),
        ReferenceState::Skip => Ok(missing_reference_placeholder(MissingReferenceKind::Asset, id)),
        ReferenceState::DoesNotExist => Err(MigrationError::missing_asset(id)),
    }
}
