use crate::StoreResult;
use serde::{Deserialize, Serialize};

/// Page size used when the caller has no preference.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Window onto a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingOptions {
    /// Index of the first element to return.
    pub start_from: usize,
    /// Maximum number of elements to return.
    pub page_size: usize,
}

impl PagingOptions {
    /// First page of the given size.
    pub fn first(page_size: usize) -> Self {
        Self {
            start_from: 0,
            page_size,
        }
    }

    /// The page following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            start_from: self.start_from + self.page_size,
            page_size: self.page_size,
        }
    }
}

impl Default for PagingOptions {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// Drains a paged source.
///
/// Stops at the first empty or short page, or once `limit` elements have
/// been gathered (the result is truncated to `limit`).
pub fn collect_pages<T>(
    page_size: usize,
    limit: Option<usize>,
    mut fetch: impl FnMut(PagingOptions) -> StoreResult<Vec<T>>,
) -> StoreResult<Vec<T>> {
    let page_size = page_size.max(1);
    let mut paging = PagingOptions::first(page_size);
    let mut out = Vec::new();

    loop {
        let page = fetch(paging)?;
        let short = page.len() < page_size;
        out.extend(page);

        if let Some(limit) = limit {
            if out.len() >= limit {
                out.truncate(limit);
                break;
            }
        }
        if short {
            break;
        }
        paging = paging.next();
    }

    Ok(out)
}
