use crate::tests::fixtures::import_context;
use crate::{
    MigrationAsset, MigrationAssetDescription, MigrationComponent, MigrationComponentSystem,
    MigrationElement, MigrationElementType, MigrationElements, MigrationErrorKind,
    MigrationItem, MigrationItemSchedule, MigrationItemSystem, MigrationItemVersion,
    MigrationReference, Reference, map_to_asset_upsert, map_to_content_item_upsert, map_to_language_variant_upsert,
};

use bytes::Bytes;
use googletest::prelude::*;
use serde_json::json;

fn migration_item(elements: MigrationElements) -> MigrationItem {
    MigrationItem {
        system: MigrationItemSystem {
            name: "Home".to_string(),
            codename: "home".to_string(),
            language: MigrationReference::new("en"),
            content_type: MigrationReference::new("article"),
            collection: MigrationReference::new("default"),
            workflow: MigrationReference::new("default"),
        },
        versions: vec![MigrationItemVersion {
            elements,
            schedule: MigrationItemSchedule::default(),
            workflow_step: MigrationReference::new("step_1"),
        }],
    }
}

fn refs(codenames: &[&str]) -> Vec<MigrationReference> {
    codenames.iter().map(|codename| MigrationReference::new(*codename)).collect()
}

#[test]
fn given_existing_and_new_items_when_mapped_then_codename_or_external_id_used() {
    // Given
    let context = import_context(&["about"]);
    let item = migration_item(MigrationElements::from([(
        "related".to_string(),
        MigrationElement::ModularContent {
            value: refs(&["about", "contact"]),
        },
    )]));

    // When
    let upsert = map_to_language_variant_upsert(&item, &item.versions[0], &context).unwrap();

    // Then
    assert_that!(upsert.elements.len(), eq(1));
    assert_eq!(upsert.elements[0].element, Reference::by_codename("related"));
    assert_eq!(
        upsert.elements[0].value,
        json!([{ "codename": "about" }, { "external_id": "migration_item_contact" }])
    );
}

#[test]
fn given_rich_text_when_mapped_then_references_resolved_and_component_ids_regenerated() {
    // Given
    let context = import_context(&["about"]);
    let html = concat!(
        r#"<object type="application/kenticocloud" data-type="item" data-codename="about"></object>"#,
        r#"<object type="application/kenticocloud" data-type="item" data-codename="contact"></object>"#,
        r#"<object type="application/kenticocloud" data-type="component" data-id="comp-1"></object>"#,
        r##"<figure data-asset-codename="#missing:asset:a-1#"><img src="image.png"></figure>"##,
    );
    let component = MigrationComponent {
        system: MigrationComponentSystem {
            id: "comp-1".to_string(),
            content_type: MigrationReference::new("quote"),
        },
        elements: MigrationElements::from([(
            "quote_text".to_string(),
            MigrationElement::Text {
                value: Some("Stay hungry".to_string()),
            },
        )]),
    };
    let item = migration_item(MigrationElements::from([(
        "body".to_string(),
        MigrationElement::RichText {
            value: html.to_string(),
            components: vec![component],
        },
    )]));

    // When
    let upsert = map_to_language_variant_upsert(&item, &item.versions[0], &context).unwrap();

    // Then
    let body = &upsert.elements[0];
    let value = body.value.as_str().unwrap();
    assert_that!(value, contains_substring("data-codename=\"about\""));
    assert_that!(value, contains_substring("data-external-id=\"migration_item_contact\""));
    assert_that!(value, not(contains_substring("figure")));
    assert_that!(body.components.len(), eq(1));

    let new_id = &body.components[0].id;
    assert_that!(new_id.as_str(), not(eq("comp-1")));
    assert_that!(value, contains_substring(format!("data-id=\"{new_id}\"")));
    assert_eq!(body.components[0].content_type, Reference::by_codename("quote"));
    assert_eq!(body.components[0].elements[0].value, json!("Stay hungry"));
}

#[test]
fn given_link_to_skipped_item_when_mapped_then_link_text_kept() {
    // Given
    let context = import_context(&[]);
    let item = migration_item(MigrationElements::from([(
        "body".to_string(),
        MigrationElement::RichText {
            value: r##"<p>Read <a data-item-codename="#missing:item:x1#">our pricing page</a> today.</p>"##
                .to_string(),
            components: Vec::new(),
        },
    )]));

    // When
    let upsert = map_to_language_variant_upsert(&item, &item.versions[0], &context).unwrap();

    // Then
    assert_eq!(
        upsert.elements[0].value,
        json!("<p>Read our pricing page today.</p>")
    );
}

#[test]
fn given_known_taxonomy_term_when_mapped_then_codename_reference() {
    // Given
    let context = import_context(&[]);
    let item = migration_item(MigrationElements::from([(
        "tags".to_string(),
        MigrationElement::Taxonomy {
            value: refs(&["local"]),
        },
    )]));

    // When
    let upsert = map_to_language_variant_upsert(&item, &item.versions[0], &context).unwrap();

    // Then
    assert_eq!(upsert.elements[0].value, json!([{ "codename": "local" }]));
}

#[test]
fn given_unknown_taxonomy_term_when_mapped_then_missing_term_error() {
    // Given
    let context = import_context(&[]);
    let item = migration_item(MigrationElements::from([(
        "tags".to_string(),
        MigrationElement::Taxonomy {
            value: refs(&["sports"]),
        },
    )]));

    // When
    let result = map_to_language_variant_upsert(&item, &item.versions[0], &context);

    // Then
    assert_that!(
        result.unwrap_err().kind(),
        eq(MigrationErrorKind::MissingTaxonomyTerm)
    );
}

#[test]
fn given_value_of_wrong_type_when_mapped_then_invalid_element_error() {
    // Given
    let context = import_context(&[]);
    let item = migration_item(MigrationElements::from([(
        "title".to_string(),
        MigrationElement::Number { value: Some(1.0) },
    )]));

    // When
    let result = map_to_language_variant_upsert(&item, &item.versions[0], &context);

    // Then
    let error = result.unwrap_err();
    assert_that!(error.kind(), eq(MigrationErrorKind::InvalidElement));
    assert_that!(error.to_string(), contains_substring("item 'home'"));
    assert_that!(error.to_string(), contains_substring("workflow step 'step_1'"));
}

#[test]
fn given_value_of_wrong_type_when_element_looked_up_then_invalid_element_error() {
    // Given
    let context = import_context(&[]);

    // When
    let result = context.element("article", "title", MigrationElementType::Number);

    // Then
    let error = result.unwrap_err();
    assert_that!(error.kind(), eq(MigrationErrorKind::InvalidElement));
    assert_that!(
        error.to_string(),
        contains_substring("element is of type 'text' but the value is of type 'number'")
    );
}

#[test]
fn given_unknown_element_when_mapped_then_missing_element_error() {
    // Given
    let context = import_context(&[]);
    let item = migration_item(MigrationElements::from([(
        "subtitle".to_string(),
        MigrationElement::Text { value: None },
    )]));

    // When
    let result = map_to_language_variant_upsert(&item, &item.versions[0], &context);

    // Then
    assert_that!(
        result.unwrap_err().kind(),
        eq(MigrationErrorKind::MissingContentTypeElement)
    );
}

#[test]
fn given_scalar_elements_when_mapped_then_values_and_modes_written() {
    // Given
    let context = import_context(&[]);
    let item = migration_item(MigrationElements::from([
        (
            "rating".to_string(),
            MigrationElement::Number { value: Some(0.0) },
        ),
        (
            "slug".to_string(),
            MigrationElement::UrlSlug {
                value: Some("home".to_string()),
                mode: crate::UrlSlugMode::Custom,
            },
        ),
        (
            "color".to_string(),
            MigrationElement::MultipleChoice {
                value: refs(&["blue"]),
            },
        ),
    ]));

    // When
    let upsert = map_to_language_variant_upsert(&item, &item.versions[0], &context).unwrap();

    // Then
    let by_codename = |codename: &str| {
        upsert
            .elements
            .iter()
            .find(|element| element.element.codename() == Some(codename))
            .unwrap()
    };
    assert_eq!(by_codename("rating").value, json!(0.0));
    assert_eq!(by_codename("slug").mode.as_deref(), Some("custom"));
    assert_eq!(by_codename("color").value, json!([{ "codename": "blue" }]));
}

#[test]
fn given_item_when_mapped_to_content_item_upsert_then_codename_references() {
    // Given
    let item = migration_item(MigrationElements::new());

    // When
    let upsert = map_to_content_item_upsert(&item);

    // Then
    assert_that!(upsert.name.as_str(), eq("Home"));
    assert_eq!(upsert.codename.as_deref(), Some("home"));
    assert_eq!(upsert.content_type, Some(Reference::by_codename("article")));
    assert_eq!(upsert.collection, Some(Reference::by_codename("default")));
}

#[test]
fn given_asset_with_unknown_folder_when_mapped_then_folder_omitted() {
    // Given
    let context = import_context(&[]);
    let asset = MigrationAsset {
        codename: "logo".to_string(),
        filename: "logo.png".to_string(),
        title: Some("Logo".to_string()),
        collection: Some(MigrationReference::new("default")),
        folder: Some(MigrationReference::new("images")),
        descriptions: vec![MigrationAssetDescription {
            language: MigrationReference::new("en"),
            description: Some("Company logo".to_string()),
        }],
        binary_data: Bytes::from_static(b"png"),
    };

    // When
    let upsert = map_to_asset_upsert(&asset, &context, None);

    // Then
    assert_that!(upsert.folder, none());
    assert_that!(upsert.file_reference, none());
    assert_eq!(upsert.descriptions[0].language, Reference::by_codename("en"));
    assert_eq!(
        upsert.collection.and_then(|collection| collection.reference),
        Some(Reference::by_codename("default"))
    );
}
