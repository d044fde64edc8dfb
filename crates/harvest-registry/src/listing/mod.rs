//! Top-N name assembly over the paginated depended-upon listing.

use tracing::debug;

use harvest_core::error::HarvestError;
use harvest_core::utils::concurrent::try_map_concurrent;

use crate::client::BrowseClient;
use crate::scrape;
use crate::RegistryResult;

/// Number of entries per listing page
pub const PAGE_SIZE: usize = 36;

/// Compute the page offsets needed to cover `count` results.
///
/// Offsets are the multiples of [`PAGE_SIZE`] in `[0, floor(count / 36) * 36]`
/// inclusive, so the last page always overshoots the requested count.
pub fn page_offsets(count: usize) -> Vec<usize> {
    let last_page = count / PAGE_SIZE;
    (0..=last_page).map(|page| page * PAGE_SIZE).collect()
}

/// Fetch the top `count` most-depended-upon package names.
///
/// Pages are requested in parallel; their names are concatenated in offset
/// order (not completion order) and truncated to exactly `count`. A failure
/// on any single page aborts the whole fetch and discards partial results.
pub async fn fetch_top_names(client: &BrowseClient, count: usize) -> RegistryResult<Vec<String>> {
    if count == 0 {
        return Err(HarvestError::invalid_argument("count must be at least 1"));
    }

    let offsets = page_offsets(count);
    debug!(pages = offsets.len(), count, "fetching depended-upon listing");

    let pages = try_map_concurrent(offsets, |offset| {
        let client = client.clone();
        async move {
            let html = client.fetch_depended_page(offset).await?;
            let names = scrape::extract_names(&html);
            debug!(offset, found = names.len(), "scraped listing page");
            Ok(names)
        }
    })
    .await?;

    let mut names: Vec<String> = pages.into_iter().flatten().collect();
    if names.len() < count {
        debug!(
            found = names.len(),
            requested = count,
            "listing returned fewer names than requested"
        );
    }
    names.truncate(count);
    Ok(names)
}

#[cfg(test)]
mod tests;
