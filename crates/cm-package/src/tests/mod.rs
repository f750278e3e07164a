
use cm_core::{
    MigrationAsset, MigrationAssetDescription, MigrationElement, MigrationElements,
    MigrationItem, MigrationItemSchedule, MigrationItemSystem, MigrationItemVersion,
    MigrationReference,
};

use bytes::Bytes;

pub(crate) fn item(codename: &str) -> MigrationItem {
    let mut elements = MigrationElements::new();
    elements.insert(
        "title".to_string(),
        MigrationElement::Text {
            value: Some(format!("Title of {codename}")),
        },
    );
    elements.insert(
        "rating".to_string(),
        MigrationElement::Number { value: Some(0.0) },
    );

    MigrationItem {
        system: MigrationItemSystem {
            name: codename.to_string(),
            codename: codename.to_string(),
            language: MigrationReference::new("en"),
            content_type: MigrationReference::new("article"),
            collection: MigrationReference::new("default"),
            workflow: MigrationReference::new("default"),
        },
        versions: vec![MigrationItemVersion {
            elements,
            schedule: MigrationItemSchedule::default(),
            workflow_step: MigrationReference::new("draft"),
        }],
    }
}

pub(crate) fn asset(codename: &str, filename: &str, content: &'static [u8]) -> MigrationAsset {
    MigrationAsset {
        codename: codename.to_string(),
        filename: filename.to_string(),
        title: Some(format!("Title of {codename}")),
        collection: Some(MigrationReference::new("default")),
        folder: None,
        descriptions: vec![MigrationAssetDescription {
            language: MigrationReference::new("en"),
            description: Some("An image".to_string()),
        }],
        binary_data: Bytes::from_static(content),
    }
}
