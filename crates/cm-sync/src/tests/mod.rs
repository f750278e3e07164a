
pub(crate) use fake_management_api::{FakeEnvironment, FakeManagementApi};

use cm_core::{
    Asset, Collection, ContentItem, ContentType, ContentTypeElement, ContentTypeElementType,
    ElementValue, Language, LanguageVariant, LanguageVariantElement, MigrationAsset,
    MigrationData, MigrationElement, MigrationElements, MigrationItem, MigrationItemSchedule,
    MigrationItemSystem, MigrationItemVersion, MigrationReference, Reference, VariantSchedule,
    VariantWorkflow, Workflow, WorkflowStep, WorkflowSystemStep, WorkflowTransition,
};

use bytes::Bytes;

pub(crate) const LANGUAGE_ID: &str = "lang-en";
pub(crate) const ARTICLE_TYPE_ID: &str = "type-article";
pub(crate) const WORKFLOW_ID: &str = "wf-default";
pub(crate) const LOGO_URL: &str = "https://assets.source.test/logo.png";
pub(crate) const LOGO_BYTES: &[u8] = b"png-bytes";

fn element(id: &str, codename: &str, element_type: ContentTypeElementType) -> ContentTypeElement {
    ContentTypeElement {
        id: Some(id.to_string()),
        codename: Some(codename.to_string()),
        name: Some(codename.to_string()),
        element_type,
        snippet: None,
        taxonomy_group: None,
        options: Vec::new(),
    }
}

pub(crate) fn article_type() -> ContentType {
    ContentType {
        id: ARTICLE_TYPE_ID.to_string(),
        name: "Article".to_string(),
        codename: "article".to_string(),
        elements: vec![
            element("el-title", "title", ContentTypeElementType::Text),
            element("el-image", "image", ContentTypeElementType::Asset),
            element("el-related", "related", ContentTypeElementType::ModularContent),
        ],
    }
}

pub(crate) fn language() -> Language {
    Language {
        id: LANGUAGE_ID.to_string(),
        name: "English".to_string(),
        codename: "en".to_string(),
        is_active: true,
        is_default: true,
    }
}

pub(crate) fn collection() -> Collection {
    Collection {
        id: "col-default".to_string(),
        name: "Default".to_string(),
        codename: "default".to_string(),
    }
}

fn step(id: &str, codename: &str, targets: &[&str]) -> WorkflowStep {
    WorkflowStep {
        id: id.to_string(),
        name: codename.to_string(),
        codename: codename.to_string(),
        transitions_to: targets
            .iter()
            .map(|target| WorkflowTransition {
                step: Reference::by_id(*target),
            })
            .collect(),
    }
}

fn system_step(id: &str, codename: &str) -> WorkflowSystemStep {
    WorkflowSystemStep {
        id: id.to_string(),
        name: codename.to_string(),
        codename: codename.to_string(),
    }
}

/// draft -> review -> published.
pub(crate) fn workflow() -> Workflow {
    Workflow {
        id: WORKFLOW_ID.to_string(),
        name: "Default".to_string(),
        codename: "default".to_string(),
        scopes: Vec::new(),
        steps: vec![
            step("step-draft", "draft", &["step-review"]),
            step("step-review", "review", &["step-published"]),
        ],
        published_step: system_step("step-published", "published"),
        scheduled_step: system_step("step-scheduled", "scheduled"),
        archived_step: system_step("step-archived", "archived"),
    }
}

pub(crate) fn content_item(id: &str, codename: &str) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        name: codename.to_string(),
        codename: codename.to_string(),
        content_type: Reference::by_id(ARTICLE_TYPE_ID),
        collection: Reference::by_id("col-default"),
        external_id: None,
        last_modified: None,
    }
}

pub(crate) fn logo_asset() -> Asset {
    Asset {
        id: "asset-logo".to_string(),
        codename: "logo".to_string(),
        file_name: "logo.png".to_string(),
        title: Some("Logo".to_string()),
        size: LOGO_BYTES.len() as u64,
        mime_type: Some("image/png".to_string()),
        url: LOGO_URL.to_string(),
        file_reference: None,
        descriptions: Vec::new(),
        folder: None,
        collection: None,
        external_id: None,
    }
}

pub(crate) fn raw_element(id: &str, value: Option<ElementValue>) -> LanguageVariantElement {
    LanguageVariantElement {
        element: Reference::by_id(id),
        value,
        ..LanguageVariantElement::default()
    }
}

pub(crate) fn variant(
    item_id: &str,
    step_id: &str,
    elements: Vec<LanguageVariantElement>,
) -> LanguageVariant {
    LanguageVariant {
        item: Reference::by_id(item_id),
        language: Reference::by_id(LANGUAGE_ID),
        elements,
        workflow: VariantWorkflow {
            workflow_identifier: Reference::by_id(WORKFLOW_ID),
            step_identifier: Reference::by_id(step_id),
        },
        schedule: VariantSchedule::default(),
        last_modified: None,
    }
}

/// Catalogs shared by source and target environments.
pub(crate) fn empty_environment() -> FakeEnvironment {
    FakeEnvironment {
        languages: vec![language()],
        collections: vec![collection()],
        workflows: vec![workflow()],
        content_types: vec![article_type()],
        ..FakeEnvironment::default()
    }
}

/// Source with one published article "hello" that shows the logo and links
/// to an item that no longer exists.
pub(crate) fn source_environment() -> FakeEnvironment {
    let mut environment = empty_environment();
    environment.items.push(content_item("item-hello", "hello"));
    environment.variants.push(variant(
        "item-hello",
        "step-published",
        vec![
            raw_element("el-title", Some(ElementValue::Text("Hello".to_string()))),
            raw_element(
                "el-image",
                Some(ElementValue::References(vec![Reference::by_id("asset-logo")])),
            ),
            raw_element(
                "el-related",
                Some(ElementValue::References(vec![Reference::by_id(
                    "item-deleted",
                )])),
            ),
        ],
    ));
    environment.assets.push(logo_asset());
    environment
        .binaries
        .insert(LOGO_URL.to_string(), Bytes::from_static(LOGO_BYTES));
    environment
}

pub(crate) fn title_of(variant: &LanguageVariant) -> Option<String> {
    variant
        .elements
        .iter()
        .find(|element| element.element.codename() == Some("title"))
        .and_then(|element| match &element.value {
            Some(ElementValue::Text(text)) => Some(text.clone()),
            _ => None,
        })
}

/// Version of the "hello" article with a title and the logo.
pub(crate) fn version(step: &str, title: &str) -> MigrationItemVersion {
    MigrationItemVersion {
        elements: MigrationElements::from([
            (
                "title".to_string(),
                MigrationElement::Text {
                    value: Some(title.to_string()),
                },
            ),
            (
                "image".to_string(),
                MigrationElement::Asset {
                    value: vec![MigrationReference::new("logo")],
                },
            ),
        ]),
        schedule: MigrationItemSchedule::default(),
        workflow_step: MigrationReference::new(step),
    }
}

pub(crate) fn hello_item(versions: Vec<MigrationItemVersion>) -> MigrationItem {
    MigrationItem {
        system: MigrationItemSystem {
            name: "Hello".to_string(),
            codename: "hello".to_string(),
            language: MigrationReference::new("en"),
            content_type: MigrationReference::new("article"),
            collection: MigrationReference::new("default"),
            workflow: MigrationReference::new("default"),
        },
        versions,
    }
}

pub(crate) fn logo() -> MigrationAsset {
    MigrationAsset {
        codename: "logo".to_string(),
        filename: "logo.png".to_string(),
        title: Some("Logo".to_string()),
        collection: None,
        folder: None,
        descriptions: Vec::new(),
        binary_data: Bytes::from_static(LOGO_BYTES),
    }
}

pub(crate) fn hello_data(versions: Vec<MigrationItemVersion>) -> MigrationData {
    MigrationData::new(vec![hello_item(versions)], vec![logo()])
}
