use cm_client::ManagementApi;
use cm_core::{
    AssetFolder, Collection, FlattenedContentType, Language, Result, SourceEnvironmentData,
    TargetEnvironmentData, Taxonomy, Workflow, flatten_content_types,
};

use futures::try_join;
use log::{debug, info};

/// Catalogs of one environment, fetched once at the start of a run.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentCatalog {
    pub languages: Vec<Language>,
    pub collections: Vec<Collection>,
    pub workflows: Vec<Workflow>,
    pub content_types: Vec<FlattenedContentType>,
    pub taxonomies: Vec<Taxonomy>,
    pub asset_folders: Vec<AssetFolder>,
}

pub async fn fetch_environment_catalog(api: &dyn ManagementApi) -> Result<EnvironmentCatalog> {
    let (languages, collections, workflows, taxonomies, asset_folders, content_types, snippets) = try_join!(
        api.list_languages(),
        api.list_collections(),
        api.list_workflows(),
        api.list_taxonomies(),
        api.list_asset_folders(),
        api.list_content_types(),
        api.list_content_type_snippets(),
    )?;

    debug!(
        "Flattening {} content type(s) with {} snippet(s)",
        content_types.len(),
        snippets.len()
    );
    let content_types = flatten_content_types(&content_types, &snippets)?;

    info!(
        "Fetched catalogs: {} language(s), {} collection(s), {} workflow(s), {} content type(s), {} taxonomy group(s)",
        languages.len(),
        collections.len(),
        workflows.len(),
        content_types.len(),
        taxonomies.len()
    );

    Ok(EnvironmentCatalog {
        languages,
        collections,
        workflows,
        content_types,
        taxonomies,
        asset_folders,
    })
}

impl From<EnvironmentCatalog> for SourceEnvironmentData {
    fn from(catalog: EnvironmentCatalog) -> Self {
        Self {
            languages: catalog.languages,
            collections: catalog.collections,
            workflows: catalog.workflows,
            content_types: catalog.content_types,
            taxonomies: catalog.taxonomies,
            asset_folders: catalog.asset_folders,
        }
    }
}

impl From<EnvironmentCatalog> for TargetEnvironmentData {
    fn from(catalog: EnvironmentCatalog) -> Self {
        Self {
            languages: catalog.languages,
            collections: catalog.collections,
            workflows: catalog.workflows,
            content_types: catalog.content_types,
            taxonomies: catalog.taxonomies,
            asset_folders: catalog.asset_folders,
        }
    }
}
