//! Generic concurrent fan-out/fan-in primitive.
//!
//! Every parallel stage of the pipeline (page fetches, downloads, unpacks,
//! removals) is the same pattern: run an operation over each item
//! concurrently, wait for all of them, and either return the results or the
//! first error observed. This module implements that pattern once.

use std::future::Future;

use tokio::task::JoinSet;

use crate::error::{HarvestError, HarvestResult};

/// Run `op` over every item concurrently and collect the results.
///
/// One task is spawned per item. All tasks run to completion even after a
/// failure; siblings are never cancelled. On success the results are
/// returned in **input order** regardless of completion order. On failure
/// the first error observed is returned and the successful results are
/// discarded.
pub async fn try_map_concurrent<T, U, F, Fut>(items: Vec<T>, op: F) -> HarvestResult<Vec<U>>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = HarvestResult<U>> + Send + 'static,
    U: Send + 'static,
{
    let mut tasks = JoinSet::new();
    for (index, item) in items.into_iter().enumerate() {
        let fut = op(item);
        tasks.spawn(async move { (index, fut.await) });
    }

    let mut completed: Vec<(usize, U)> = Vec::with_capacity(tasks.len());
    let mut first_error: Option<HarvestError> = None;

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, Ok(value))) => completed.push((index, value)),
            Ok((_, Err(error))) => {
                if first_error.is_none() {
                    first_error = Some(error);
                }
            },
            Err(join_error) => {
                // Tasks are never aborted, so a join failure is a panic
                // propagated from the operation.
                if join_error.is_panic() {
                    std::panic::resume_unwind(join_error.into_panic());
                }
            },
        }
    }

    if let Some(error) = first_error {
        return Err(error);
    }

    completed.sort_by_key(|(index, _)| *index);
    Ok(completed.into_iter().map(|(_, value)| value).collect())
}
