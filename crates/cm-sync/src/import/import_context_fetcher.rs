use crate::ImportConfig;
use crate::environment_catalog::fetch_environment_catalog;
use crate::not_found::found;

use cm_client::ManagementApi;
use cm_core::{
    AssetStateInTargetEnvironment, ExternalIdGenerator, ExternalIdKey, ExternalIdKind,
    Identifier, ImportContext, ItemInfo, ItemProcessingResult, ItemStateInTargetEnvironment,
    LanguageVariant, LanguageVariantStateData, LanguageVariantStateInTargetEnvironment,
    MigrationData, MigrationError, ReferenceState, Result, TargetEnvironmentData,
    TargetEnvironmentState, VariantWorkflowState, WorkflowStepGraph, process_items,
    scan_migration_items,
};

use std::collections::BTreeSet;

use log::info;

/// Builds the import snapshot: target catalogs plus the state of every item,
/// asset and language variant the package touches, keyed by codename.
pub async fn fetch_import_context(
    api: &dyn ManagementApi,
    data: &MigrationData,
    config: &ImportConfig,
) -> Result<ImportContext> {
    let environment_data: TargetEnvironmentData = fetch_environment_catalog(api).await?.into();
    let referenced_data = scan_migration_items(&data.items);
    let generator = config.external_id_generator.as_ref();

    let item_codenames: BTreeSet<String> = referenced_data
        .item_codenames
        .iter()
        .cloned()
        .chain(data.items.iter().map(|item| item.system.codename.clone()))
        .collect();
    let asset_codenames: BTreeSet<String> = referenced_data
        .asset_codenames
        .iter()
        .cloned()
        .chain(data.assets.iter().map(|asset| asset.codename.clone()))
        .collect();

    let items = fetch_item_states(
        api,
        item_codenames.into_iter().collect(),
        generator,
        config.parallel_limit,
    )
    .await?;
    let assets = fetch_asset_states(
        api,
        asset_codenames.into_iter().collect(),
        generator,
        config.parallel_limit,
    )
    .await?;

    let existing_items: BTreeSet<&str> = items
        .iter()
        .filter(|item| item.state.exists())
        .map(|item| item.codename.as_str())
        .collect();
    let variant_keys: Vec<(String, String)> = data
        .items
        .iter()
        .filter(|item| existing_items.contains(item.system.codename.as_str()))
        .map(|item| {
            (
                item.system.codename.clone(),
                item.system.language.codename.clone(),
            )
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let variants =
        fetch_variant_states(api, &environment_data, variant_keys, config.parallel_limit).await?;

    info!(
        "Import context ready: {} of {} item(s) and {} of {} asset(s) already exist, {} existing language variant(s)",
        existing_items.len(),
        items.len(),
        assets.iter().filter(|asset| asset.state.exists()).count(),
        assets.len(),
        variants.iter().filter(|variant| variant.exists()).count()
    );

    Ok(ImportContext::new(
        environment_data,
        referenced_data,
        TargetEnvironmentState::new(items, assets, variants),
        config.external_id_generator.clone(),
    ))
}

async fn fetch_item_states(
    api: &dyn ManagementApi,
    codenames: Vec<String>,
    generator: &dyn ExternalIdGenerator,
    parallel_limit: usize,
) -> Result<Vec<ItemStateInTargetEnvironment>> {
    let results = process_items(
        "Fetching target items",
        codenames,
        parallel_limit,
        |codename| ItemInfo::new("content item", codename.as_str()),
        move |codename| async move {
            found(
                api.view_content_item(&Identifier::Codename(codename))
                    .await,
            )
        },
    )
    .await;

    results
        .into_iter()
        .map(|result| {
            let (codename, item) = valid_or_error(result)?;
            let external_id_to_use = item
                .as_ref()
                .and_then(|item| item.external_id.clone())
                .unwrap_or_else(|| {
                    generator.generate(&ExternalIdKey {
                        kind: ExternalIdKind::Item,
                        codename: &codename,
                    })
                });

            Ok(ItemStateInTargetEnvironment {
                codename,
                state: ReferenceState::from(item),
                external_id_to_use,
            })
        })
        .collect()
}

async fn fetch_asset_states(
    api: &dyn ManagementApi,
    codenames: Vec<String>,
    generator: &dyn ExternalIdGenerator,
    parallel_limit: usize,
) -> Result<Vec<AssetStateInTargetEnvironment>> {
    let results = process_items(
        "Fetching target assets",
        codenames,
        parallel_limit,
        |codename| ItemInfo::new("asset", codename.as_str()),
        move |codename| async move {
            found(api.view_asset(&Identifier::Codename(codename)).await)
        },
    )
    .await;

    results
        .into_iter()
        .map(|result| {
            let (codename, asset) = valid_or_error(result)?;
            let external_id_to_use = asset
                .as_ref()
                .and_then(|asset| asset.external_id.clone())
                .unwrap_or_else(|| {
                    generator.generate(&ExternalIdKey {
                        kind: ExternalIdKind::Asset,
                        codename: &codename,
                    })
                });

            Ok(AssetStateInTargetEnvironment {
                codename,
                state: ReferenceState::from(asset),
                external_id_to_use,
            })
        })
        .collect()
}

async fn fetch_variant_states(
    api: &dyn ManagementApi,
    environment: &TargetEnvironmentData,
    keys: Vec<(String, String)>,
    parallel_limit: usize,
) -> Result<Vec<LanguageVariantStateInTargetEnvironment>> {
    let results = process_items(
        "Fetching target language variants",
        keys,
        parallel_limit,
        |(item, language)| ItemInfo::new("language variant", format!("{item} ({language})")),
        move |(item, language)| fetch_variant_state(api, environment, item, language),
    )
    .await;

    results
        .into_iter()
        .map(|result| valid_or_error(result).map(|(_, state)| state))
        .collect()
}

async fn fetch_variant_state(
    api: &dyn ManagementApi,
    environment: &TargetEnvironmentData,
    item_codename: String,
    language_codename: String,
) -> Result<LanguageVariantStateInTargetEnvironment> {
    let item = Identifier::Codename(item_codename.clone());
    let language = Identifier::Codename(language_codename.clone());

    let mut state = LanguageVariantStateInTargetEnvironment {
        item_codename,
        language_codename,
        published: None,
        draft: None,
    };

    let Some(latest) = found(api.view_language_variant(&item, &language).await)? else {
        return Ok(state);
    };
    let latest = variant_state_data(environment, latest)?;

    if latest.workflow_state == VariantWorkflowState::Published {
        state.published = Some(latest);
    } else {
        if let Some(published) =
            found(api.view_published_language_variant(&item, &language).await)?
        {
            state.published = Some(variant_state_data(environment, published)?);
        }
        state.draft = Some(latest);
    }

    Ok(state)
}

fn variant_state_data(
    environment: &TargetEnvironmentData,
    variant: LanguageVariant,
) -> Result<LanguageVariantStateData> {
    let workflow_id = variant.workflow.workflow_identifier.id().unwrap_or_default();
    let workflow = environment
        .workflows
        .iter()
        .find(|workflow| workflow.id == workflow_id)
        .ok_or_else(|| MigrationError::missing_catalog_entry("workflow", workflow_id))?;

    let graph = WorkflowStepGraph::new(workflow);
    let step = graph
        .step_by_id(variant.workflow.step_identifier.id().unwrap_or_default())?
        .clone();

    Ok(LanguageVariantStateData {
        workflow_codename: workflow.codename.clone(),
        step_codename: step.codename,
        workflow_state: VariantWorkflowState::from(step.kind),
        variant,
    })
}

fn valid_or_error<I, O>(result: ItemProcessingResult<I, O, MigrationError>) -> Result<(I, O)> {
    match result {
        ItemProcessingResult::Valid { input, output } => Ok((input, output)),
        ItemProcessingResult::Error { error, .. } => Err(error),
        // 404s are already folded into `None` by the fetch closures.
        ItemProcessingResult::NotFound { .. } => Err(MigrationError::invalid_value(
            "unexpected not-found result while fetching target state",
        )),
    }
}
