use crate::{ItemInfo, ItemProcessingResult, MigrationError, process_items};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use googletest::prelude::*;

fn info(item: &u32) -> ItemInfo {
    ItemInfo::new("number", item.to_string())
}

#[tokio::test]
async fn given_limit_two_when_processing_five_items_then_never_more_than_two_in_flight() {
    // Given
    let in_flight = Arc::new(AtomicUsize::new(0));
    let max_in_flight = Arc::new(AtomicUsize::new(0));

    // When
    let results = process_items("double", vec![1u32, 2, 3, 4, 5], 2, info, |item| {
        let in_flight = in_flight.clone();
        let max_in_flight = max_in_flight.clone();
        async move {
            let current = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            max_in_flight.fetch_max(current, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            in_flight.fetch_sub(1, Ordering::SeqCst);

            if item == 3 {
                Err(MigrationError::invalid_value("three is not allowed"))
            } else {
                Ok(item * 2)
            }
        }
    })
    .await;

    // Then
    assert_that!(results, len(eq(5)));
    assert_that!(max_in_flight.load(Ordering::SeqCst) <= 2, is_true());
    let outputs: Vec<Option<u32>> = results.iter().map(|result| result.output().copied()).collect();
    assert_eq!(outputs, vec![Some(2), Some(4), None, Some(8), Some(10)]);
    assert_that!(results[2].error(), some(anything()));
    assert_that!(*results[2].input(), eq(3));
}

#[tokio::test]
async fn given_not_found_error_when_processing_then_not_found_outcome() {
    // Given
    let items = vec![1u32, 2];

    // When
    let results = process_items("fetch", items, 5, info, |item| async move {
        if item == 2 {
            Err(MigrationError::api("Resource not found", Some(404)))
        } else {
            Ok(item)
        }
    })
    .await;

    // Then
    assert_that!(results[0].is_valid(), is_true());
    assert!(matches!(
        results[1],
        ItemProcessingResult::NotFound { input: 2 }
    ));
}

#[tokio::test]
async fn given_no_items_when_processing_then_empty_result() {
    // When
    let results: Vec<ItemProcessingResult<u32, u32, MigrationError>> =
        process_items("noop", Vec::new(), 5, info, |item| async move { Ok(item) }).await;

    // Then
    assert_that!(results, is_empty());
}

#[tokio::test]
async fn given_zero_limit_when_processing_then_items_still_processed() {
    // When
    let results = process_items("identity", vec![7u32, 8], 0, info, |item| async move {
        Ok::<u32, MigrationError>(item)
    })
    .await;

    // Then
    assert_that!(results, len(eq(2)));
    assert_that!(results.iter().all(ItemProcessingResult::is_valid), is_true());
}
