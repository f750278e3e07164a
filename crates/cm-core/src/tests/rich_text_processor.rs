use crate::rich_text_processor::{
    CodenameResolution, MissingReferenceKind, collect_asset_ids, collect_item_codenames,
    collect_item_ids, collect_link_item_ids, is_missing_reference_placeholder,
    missing_reference_placeholder, process_asset_codenames, process_asset_ids,
    process_item_codenames, process_item_ids, process_link_item_codenames,
    process_link_item_ids, replace_component_ids,
};
use crate::{MigrationError, MigrationErrorKind};

use std::collections::HashMap;

use googletest::prelude::*;
use proptest::prelude::*;

const ITEM_OBJECT: &str = r#"<object type="application/kenticocloud" data-type="item" data-id="item-1"></object>"#;
const COMPONENT_OBJECT: &str = r#"<object type="application/kenticocloud" data-type="component" data-id="comp-1"></object>"#;
const ASSET_FIGURE: &str = r#"<figure data-asset-id="asset-1"><img src="image.png" data-asset-id="asset-1"></figure>"#;
const ITEM_LINK: &str = r#"<a data-item-id="item-2">read more</a>"#;

fn codename_for(id: &str) -> crate::Result<String> {
    Ok(format!("codename_of_{id}"))
}

// =========================================================================
// Export direction
// =========================================================================

#[test]
fn given_item_object_when_processing_ids_then_attribute_renamed_to_codename() {
    // Given
    let html = format!("<p>before</p>{ITEM_OBJECT}<p>after</p>");

    // When
    let processed = process_item_ids(&html, codename_for).unwrap();

    // Then
    assert_that!(
        processed,
        eq(r#"<p>before</p><object type="application/kenticocloud" data-type="item" data-codename="codename_of_item-1"></object><p>after</p>"#)
    );
}

#[test]
fn given_component_object_when_processing_ids_then_left_untouched() {
    // Given
    let html = format!("{COMPONENT_OBJECT}{ITEM_OBJECT}");

    // When
    let processed = process_item_ids(&html, codename_for).unwrap();

    // Then
    assert_that!(processed, contains_substring(COMPONENT_OBJECT));
    assert_that!(processed, contains_substring("data-codename=\"codename_of_item-1\""));
}

#[test]
fn given_figure_when_processing_asset_ids_then_every_occurrence_in_tag_replaced() {
    // When
    let processed = process_asset_ids(ASSET_FIGURE, codename_for).unwrap();

    // Then
    assert_that!(processed, not(contains_substring("data-asset-id")));
    assert_that!(
        processed.matches("data-asset-codename=\"codename_of_asset-1\"").count(),
        eq(2)
    );
}

#[test]
fn given_item_link_when_processing_link_ids_then_link_text_preserved() {
    // When
    let processed = process_link_item_ids(ITEM_LINK, codename_for).unwrap();

    // Then
    assert_that!(
        processed,
        eq(r#"<a data-item-codename="codename_of_item-2">read more</a>"#)
    );
}

#[test]
fn given_failing_resolver_when_processing_then_error_propagates() {
    // When
    let result = process_item_ids(ITEM_OBJECT, |id| Err(MigrationError::missing_item(id)));

    // Then
    assert_that!(result.unwrap_err().kind(), eq(MigrationErrorKind::MissingItem));
}

#[test]
fn given_mixed_html_when_collecting_then_ids_by_category() {
    // Given
    let html = format!("{ITEM_OBJECT}{COMPONENT_OBJECT}{ASSET_FIGURE}{ITEM_LINK}");

    // When
    let item_ids = collect_item_ids(&html);
    let link_ids = collect_link_item_ids(&html);
    let asset_ids = collect_asset_ids(&html);

    // Then
    assert_that!(item_ids, len(eq(1)));
    assert_that!(item_ids.contains("item-1"), is_true());
    assert_that!(link_ids.contains("item-2"), is_true());
    assert_that!(asset_ids.contains("asset-1"), is_true());
}

// =========================================================================
// Import direction
// =========================================================================

#[test]
fn given_existing_item_when_processing_codenames_then_tag_unchanged() {
    // Given
    let html = r#"<object type="application/kenticocloud" data-type="item" data-codename="home"></object>"#;

    // When
    let processed = process_item_codenames(html, |_| Ok(CodenameResolution::Keep)).unwrap();

    // Then
    assert_that!(processed.as_str(), eq(html));
}

#[test]
fn given_new_item_when_processing_codenames_then_external_id_used() {
    // Given
    let html = r#"<object type="application/kenticocloud" data-type="item" data-codename="home"></object>"#;

    // When
    let processed = process_item_codenames(html, |codename| {
        Ok(CodenameResolution::ExternalId(format!("ext_{codename}")))
    })
    .unwrap();

    // Then
    assert_that!(processed, contains_substring("data-external-id=\"ext_home\""));
    assert_that!(processed, not(contains_substring("data-codename")));
}

#[test]
fn given_link_to_new_item_when_processing_codenames_then_item_external_id_used() {
    // Given
    let html = r#"<p><a data-item-codename="about">About</a></p>"#;

    // When
    let processed = process_link_item_codenames(html, |codename| {
        Ok(CodenameResolution::ExternalId(format!("ext_{codename}")))
    })
    .unwrap();

    // Then
    assert_that!(
        processed,
        eq(r#"<p><a data-item-external-id="ext_about">About</a></p>"#)
    );
}

#[test]
fn given_placeholder_when_processing_asset_codenames_then_tag_removed() {
    // Given
    let placeholder = missing_reference_placeholder(MissingReferenceKind::Asset, "asset-9");
    let html = format!(r#"<p>x</p><figure data-asset-codename="{placeholder}"><img src="image.png"></figure>"#);

    // When
    let processed = process_asset_codenames(&html, |codename| {
        if is_missing_reference_placeholder(codename) {
            Ok(CodenameResolution::Remove)
        } else {
            Ok(CodenameResolution::Keep)
        }
    })
    .unwrap();

    // Then
    assert_that!(processed, eq("<p>x</p>"));
}

#[test]
fn given_placeholder_link_when_processing_codenames_then_link_unwrapped_to_text() {
    // Given
    let placeholder = missing_reference_placeholder(MissingReferenceKind::Item, "x1");
    let html = format!(r#"<p>Read <a data-item-codename="{placeholder}">our <b>pricing</b> page</a> today.</p>"#);

    // When
    let processed = process_link_item_codenames(&html, |codename| {
        if is_missing_reference_placeholder(codename) {
            Ok(CodenameResolution::Remove)
        } else {
            Ok(CodenameResolution::Keep)
        }
    })
    .unwrap();

    // Then
    assert_that!(processed, eq("<p>Read our <b>pricing</b> page today.</p>"));
}

#[test]
fn given_component_ids_when_replaced_then_only_mapped_components_change() {
    // Given
    let html = format!("{COMPONENT_OBJECT}{ITEM_OBJECT}");
    let new_ids = HashMap::from([("comp-1".to_string(), "comp-new".to_string())]);

    // When
    let processed = replace_component_ids(&html, &new_ids);

    // Then
    assert_that!(processed, contains_substring("data-id=\"comp-new\""));
    assert_that!(processed, contains_substring("data-id=\"item-1\""));
}

#[test]
fn given_placeholder_when_checked_then_recognized() {
    // Given
    let placeholder = missing_reference_placeholder(MissingReferenceKind::Item, "abc");

    // Then
    assert_that!(placeholder, eq("#missing:item:abc#"));
    assert_that!(is_missing_reference_placeholder(&placeholder), is_true());
    assert_that!(is_missing_reference_placeholder("home"), is_false());
}

// =========================================================================
// Property-Based Tests
// =========================================================================

proptest! {
    #[test]
    fn given_processed_html_when_processed_again_then_unchanged(
        ids in proptest::collection::vec("[a-z0-9-]{1,12}", 1..5),
        text in "[a-zA-Z ]{0,20}",
    ) {
        let html: String = ids
            .iter()
            .map(|id| format!(
                r#"<p>{text}</p><object type="application/kenticocloud" data-type="item" data-id="{id}"></object>"#
            ))
            .collect();

        let once = process_item_ids(&html, codename_for).unwrap();
        let twice = process_item_ids(&once, codename_for).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn given_html_without_tags_when_processed_then_unchanged(text in "[a-zA-Z0-9 .,]{0,64}") {
        let html = format!("<p>{text}</p>");

        let processed = process_item_codenames(&html, |_| Ok(CodenameResolution::Remove)).unwrap();

        prop_assert_eq!(processed, html);
    }

    #[test]
    fn given_codenames_when_collected_then_all_found(
        codenames in proptest::collection::btree_set("[a-z_]{1,10}", 0..6),
    ) {
        let html: String = codenames
            .iter()
            .map(|codename| format!(r#"<object data-type="item" data-codename="{codename}"></object>"#))
            .collect();

        prop_assert_eq!(collect_item_codenames(&html), codenames);
    }
}
