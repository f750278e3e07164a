use crate::ExportConfig;
use crate::environment_catalog::fetch_environment_catalog;

use cm_client::ManagementApi;
use cm_core::{
    Asset, ContentItem, ExportContext, ExportContextOptions, ExportItem, ExportItemVersion,
    Identifier, ItemInfo, ItemProcessingResult, MigrationError, Result, SourceEnvironmentData,
    SourceEnvironmentState, SourceExportItem, WorkflowStepGraph, WorkflowStepKind,
    process_items, scan_export_items,
};

use std::collections::HashMap;

use log::{info, warn};

/// Builds the export snapshot: catalogs, the requested items with their
/// versions, and the existence of every item and asset they reference.
pub async fn fetch_export_context(
    api: &dyn ManagementApi,
    config: &ExportConfig,
) -> Result<ExportContext> {
    let environment_data: SourceEnvironmentData = fetch_environment_catalog(api).await?.into();
    let skip = config.skip_missing_references;

    let environment = &environment_data;
    let results = process_items(
        "Fetching content items",
        config.items.clone(),
        config.parallel_limit,
        |request| {
            ItemInfo::new(
                "content item",
                format!("{} ({})", request.item_codename, request.language_codename),
            )
        },
        move |request| fetch_export_item(api, environment, request, skip),
    )
    .await;

    let mut export_items = Vec::with_capacity(results.len());
    for result in results {
        match result {
            ItemProcessingResult::Valid {
                output: Some(item), ..
            } => export_items.push(item),
            ItemProcessingResult::Valid { output: None, .. } => {}
            ItemProcessingResult::Error { error, .. } => return Err(error),
            ItemProcessingResult::NotFound { input } => {
                return Err(export_failed(&input, "content item does not exist"));
            }
        }
    }

    let referenced_data = scan_export_items(&export_items, &environment_data.content_types)?;

    let mut items: HashMap<String, Option<ContentItem>> = export_items
        .iter()
        .map(|item| (item.content_item.id.clone(), Some(item.content_item.clone())))
        .collect();
    let unknown_item_ids: Vec<String> = referenced_data
        .item_ids
        .iter()
        .filter(|id| !items.contains_key(id.as_str()))
        .cloned()
        .collect();
    items.extend(fetch_referenced_items(api, unknown_item_ids, config.parallel_limit).await?);

    let assets = fetch_referenced_assets(
        api,
        referenced_data.asset_ids.iter().cloned().collect(),
        config.parallel_limit,
    )
    .await?;

    info!(
        "Export context ready: {} item(s) to export, {} referenced item(s), {} referenced asset(s)",
        export_items.len(),
        referenced_data.item_ids.len(),
        referenced_data.asset_ids.len()
    );

    Ok(ExportContext::new(
        environment_data,
        referenced_data,
        export_items,
        SourceEnvironmentState::new(items, assets),
        ExportContextOptions {
            skip_missing_references: skip,
        },
    ))
}

async fn fetch_export_item(
    api: &dyn ManagementApi,
    environment: &SourceEnvironmentData,
    request: SourceExportItem,
    skip_missing_references: bool,
) -> Result<Option<ExportItem>> {
    let item_identifier = Identifier::Codename(request.item_codename.clone());
    let content_item = match api.view_content_item(&item_identifier).await {
        Ok(item) => item,
        Err(err) if err.is_not_found() && skip_missing_references => {
            warn!(
                "Content item '{}' does not exist, skipping it",
                request.item_codename
            );
            return Ok(None);
        }
        Err(err) if err.is_not_found() => {
            return Err(export_failed(&request, "content item does not exist"));
        }
        Err(err) => return Err(export_failed(&request, err.to_string())),
    };

    let language = environment
        .languages
        .iter()
        .find(|language| language.codename == request.language_codename)
        .ok_or_else(|| export_failed(&request, "language does not exist"))?
        .clone();

    let item_id = Identifier::Id(content_item.id.clone());
    let language_id = Identifier::Id(language.id.clone());

    let latest = match api.view_language_variant(&item_id, &language_id).await {
        Ok(variant) => variant,
        Err(err) if err.is_not_found() => {
            return Err(export_failed(&request, "language variant does not exist"));
        }
        Err(err) => return Err(export_failed(&request, err.to_string())),
    };

    let workflow_id = latest.workflow.workflow_identifier.id().unwrap_or_default();
    let workflow = environment
        .workflows
        .iter()
        .find(|workflow| workflow.id == workflow_id)
        .ok_or_else(|| export_failed(&request, format!("workflow '{workflow_id}' does not exist")))?
        .clone();

    let graph = WorkflowStepGraph::new(&workflow);
    let latest_step = graph
        .step_by_id(latest.workflow.step_identifier.id().unwrap_or_default())
        .map_err(|err| export_failed(&request, err.to_string()))?
        .clone();

    let mut versions = Vec::with_capacity(2);
    if latest_step.kind != WorkflowStepKind::Published {
        match api
            .view_published_language_variant(&item_id, &language_id)
            .await
        {
            Ok(published) => versions.push(ExportItemVersion {
                workflow_step_codename: graph.published_step().codename.clone(),
                language_variant: published,
            }),
            Err(err) if err.is_not_found() => {}
            Err(err) => return Err(export_failed(&request, err.to_string())),
        }
    }
    versions.push(ExportItemVersion {
        workflow_step_codename: latest_step.codename,
        language_variant: latest,
    });

    let collection_id = content_item.collection.id().unwrap_or_default();
    let collection = environment
        .collections
        .iter()
        .find(|collection| collection.id == collection_id)
        .ok_or_else(|| {
            export_failed(&request, format!("collection '{collection_id}' does not exist"))
        })?
        .clone();

    let content_type_id = content_item.content_type.id().unwrap_or_default();
    let content_type = environment
        .content_types
        .iter()
        .find(|content_type| content_type.id == content_type_id)
        .ok_or_else(|| {
            export_failed(
                &request,
                format!("content type '{content_type_id}' does not exist"),
            )
        })?
        .clone();

    Ok(Some(ExportItem {
        request_item: request,
        content_item,
        versions,
        language,
        collection,
        workflow,
        content_type,
    }))
}

/// Resolves referenced item ids. A 404 records the id as missing; any other
/// failure aborts the export.
async fn fetch_referenced_items(
    api: &dyn ManagementApi,
    ids: Vec<String>,
    parallel_limit: usize,
) -> Result<HashMap<String, Option<ContentItem>>> {
    let results = process_items(
        "Fetching referenced items",
        ids,
        parallel_limit,
        |id| ItemInfo::new("content item", id.as_str()),
        move |id| async move { api.view_content_item(&Identifier::Id(id)).await },
    )
    .await;

    collect_states(results)
}

async fn fetch_referenced_assets(
    api: &dyn ManagementApi,
    ids: Vec<String>,
    parallel_limit: usize,
) -> Result<HashMap<String, Option<Asset>>> {
    let results = process_items(
        "Fetching referenced assets",
        ids,
        parallel_limit,
        |id| ItemInfo::new("asset", id.as_str()),
        move |id| async move { api.view_asset(&Identifier::Id(id)).await },
    )
    .await;

    collect_states(results)
}

fn collect_states<T>(
    results: Vec<ItemProcessingResult<String, T, MigrationError>>,
) -> Result<HashMap<String, Option<T>>> {
    let mut states = HashMap::with_capacity(results.len());
    for result in results {
        match result {
            ItemProcessingResult::Valid { input, output } => {
                states.insert(input, Some(output));
            }
            ItemProcessingResult::NotFound { input } => {
                states.insert(input, None);
            }
            ItemProcessingResult::Error { error, .. } => return Err(error),
        }
    }
    Ok(states)
}

#[track_caller]
fn export_failed(request: &SourceExportItem, message: impl Into<String>) -> MigrationError {
    MigrationError::export_failed_for_item(
        &request.item_codename,
        &request.language_codename,
        message,
    )
}
