use crate::parse_export_item;

use cm_core::SourceExportItem;

use googletest::prelude::*;

#[test]
fn given_codename_and_language_when_parsed_then_export_item_returned() {
    // When
    let item = parse_export_item("home_page:en-US").unwrap();

    // Then
    assert_eq!(item, SourceExportItem::new("home_page", "en-US"));
}

#[test]
fn given_padded_value_when_parsed_then_parts_trimmed() {
    // When
    let item = parse_export_item(" about : de ").unwrap();

    // Then
    assert_that!(item.item_codename.as_str(), eq("about"));
    assert_that!(item.language_codename.as_str(), eq("de"));
}

#[test]
fn given_value_without_separator_when_parsed_then_error() {
    // When
    let result = parse_export_item("home_page");

    // Then
    assert_that!(result.unwrap_err().as_str(), contains_substring("codename:language"));
}

#[test]
fn given_empty_language_when_parsed_then_error() {
    // When
    let result = parse_export_item("home_page:");

    // Then
    assert_that!(result.is_err(), is_true());
}
