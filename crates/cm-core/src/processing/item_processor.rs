use crate::{IsNotFound, ItemInfo, ItemProcessingResult};

use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use futures::future::join_all;
use log::{info, warn};

pub const DEFAULT_PARALLEL_LIMIT: usize = 5;

/// Runs `process` over every item with at most `parallel_limit` operations
/// in flight. One result is returned per input, in input order, and a
/// failing item never stops the others.
pub async fn process_items<I, O, E, F, Fut>(
    action: &str,
    items: Vec<I>,
    parallel_limit: usize,
    item_info: impl Fn(&I) -> ItemInfo,
    process: F,
) -> Vec<ItemProcessingResult<I, O, E>>
where
    I: Clone,
    E: IsNotFound + Display,
    F: Fn(I) -> Fut,
    Fut: Future<Output = Result<O, E>>,
{
    let total = items.len();
    if total == 0 {
        return Vec::new();
    }

    let worker_count = parallel_limit.clamp(1, total);
    let next_index = AtomicUsize::new(0);
    let processed_count = AtomicUsize::new(0);
    let slots: Mutex<Vec<Option<ItemProcessingResult<I, O, E>>>> =
        Mutex::new((0..total).map(|_| None).collect());

    let items = &items;
    let item_info = &item_info;
    let process = &process;
    let next_index = &next_index;
    let processed_count = &processed_count;
    let slots_ref = &slots;

    let workers = (0..worker_count).map(move |_| async move {
        loop {
            let index = next_index.fetch_add(1, Ordering::SeqCst);
            let Some(item) = items.get(index) else {
                break;
            };
            let info = item_info(item);

            let result = match process(item.clone()).await {
                Ok(output) => ItemProcessingResult::Valid {
                    input: item.clone(),
                    output,
                },
                Err(err) if err.is_not_found() => {
                    warn!("{} '{}' was not found", info.item_type, info.title);
                    ItemProcessingResult::NotFound {
                        input: item.clone(),
                    }
                }
                Err(err) => {
                    warn!(
                        "{}: {} '{}' failed: {}",
                        action, info.item_type, info.title, err
                    );
                    ItemProcessingResult::Error {
                        input: item.clone(),
                        error: err,
                    }
                }
            };

            let done = processed_count.fetch_add(1, Ordering::SeqCst) + 1;
            info!(
                "{}: {}/{} - {} '{}'",
                action, done, total, info.item_type, info.title
            );

            slots_ref.lock().unwrap_or_else(PoisonError::into_inner)[index] = Some(result);
        }
    });

    join_all(workers).await;

    let results: Vec<ItemProcessingResult<I, O, E>> = slots
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner)
        .into_iter()
        .flatten()
        .collect();

    let failed = results.iter().filter(|result| result.error().is_some()).count();
    let not_found = results
        .iter()
        .filter(|result| matches!(result, ItemProcessingResult::NotFound { .. }))
        .count();
    info!(
        "{}: finished {} item(s), {} failed, {} not found",
        action, total, failed, not_found
    );

    results
}
