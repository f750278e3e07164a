use crate::{InvalidElementContext, MigrationError, MigrationErrorKind};

use googletest::prelude::*;

#[test]
fn given_missing_item_and_asset_when_checked_then_skippable() {
    assert_that!(MigrationError::missing_item("a").is_skippable(), is_true());
    assert_that!(MigrationError::missing_asset("b").is_skippable(), is_true());
    assert_that!(
        MigrationError::missing_taxonomy_term("tags", "x").is_skippable(),
        is_false()
    );
}

#[test]
fn given_api_404_when_checked_then_not_found() {
    assert_that!(MigrationError::api("gone", Some(404)).is_not_found(), is_true());
    assert_that!(MigrationError::api("boom", Some(500)).is_not_found(), is_false());
    assert_that!(MigrationError::api("offline", None).is_not_found(), is_false());
}

#[test]
fn given_invalid_value_when_wrapped_then_invalid_element_with_context() {
    // Given
    let error = MigrationError::invalid_value("Expected a number");

    // When
    let wrapped = error.into_invalid_element(InvalidElementContext {
        content_type: "article",
        element: "rating",
        element_type: "number",
        item: "home",
        workflow_step: "draft",
        raw_value: "[\"x\"]".to_string(),
    });

    // Then
    assert_that!(wrapped.kind(), eq(MigrationErrorKind::InvalidElement));
    let message = wrapped.to_string();
    assert_that!(message, contains_substring("rating"));
    assert_that!(message, contains_substring("article"));
    assert_that!(message, contains_substring("Expected a number"));
}

#[test]
fn given_other_error_when_wrapped_then_passes_through() {
    // Given
    let error = MigrationError::missing_item("item-1");

    // When
    let wrapped = error.into_invalid_element(InvalidElementContext {
        content_type: "article",
        element: "related",
        element_type: "modular_content",
        item: "home",
        workflow_step: "draft",
        raw_value: "null".to_string(),
    });

    // Then
    assert_that!(wrapped.kind(), eq(MigrationErrorKind::MissingItem));
}

#[test]
fn given_type_mismatch_when_wrapped_then_item_context_attached() {
    // Given
    let error = MigrationError::element_type_mismatch("article", "title", "text", "number");

    // When
    let wrapped = error.into_invalid_element(InvalidElementContext {
        content_type: "article",
        element: "title",
        element_type: "number",
        item: "home",
        workflow_step: "draft",
        raw_value: "1.0".to_string(),
    });

    // Then
    assert_that!(wrapped.kind(), eq(MigrationErrorKind::InvalidElement));
    let message = wrapped.to_string();
    assert_that!(message, contains_substring("element 'title' of type 'text'"));
    assert_that!(message, contains_substring("item 'home'"));
    assert_that!(message, contains_substring("value 1.0"));
}

#[test]
fn given_kind_when_displayed_then_screaming_snake_case() {
    assert_that!(
        MigrationErrorKind::MissingWorkflowPath.to_string(),
        eq("MISSING_WORKFLOW_PATH")
    );
}
