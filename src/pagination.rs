use crate::{FolioError, FolioResult};
use serde::Serialize;

/// A validated request for one page of a record collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    page: u64,

    /// Maximum number of records the page may hold
    page_size: u64,
}

impl PageRequest {
    /// Builds a request for `page` (1-based) with `page_size` records per
    /// page. Rejects a zero page number or a zero page size; any page
    /// number past the end of a collection is fine and simply resolves to
    /// an empty page later.
    pub fn new(page: u64, page_size: u64) -> FolioResult<PageRequest> {
        if page == 0 {
            return Err(FolioError::InvalidPageRequest(
                "page numbers are 1-based, got 0".into(),
            ));
        }
        if page_size == 0 {
            return Err(FolioError::InvalidPageRequest(
                "page size must be at least 1, got 0".into(),
            ));
        }

        Ok(PageRequest { page, page_size })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// The position of the first record on this page.
    /// Equivalent to 'skip' in MongoDB, 'offset' in Postgres.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Start and end positions of this page within a collection of `len`
    /// records, clamped so slicing stays in bounds.
    fn bounds(&self, len: usize) -> (usize, usize) {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(len);
        let size = usize::try_from(self.page_size).unwrap_or(usize::MAX);
        let end = start.saturating_add(size).min(len);
        (start, end)
    }

    // Same page size, different page. Caller guarantees `page >= 1`.
    pub(crate) fn at_page(&self, page: u64) -> PageRequest {
        PageRequest {
            page,
            page_size: self.page_size,
        }
    }
}

/// Borrows the records belonging to `request` without copying.
///
/// Pages past the end of the collection are empty, not an error.
pub fn page_slice<'a, T>(records: &'a [T], request: &PageRequest) -> &'a [T] {
    let (start, end) = request.bounds(records.len());
    &records[start..end]
}

/// Copies the records belonging to `request` into an independently owned
/// sequence. The input is left untouched.
pub fn paginate<T: Clone>(records: &[T], request: &PageRequest) -> Vec<T> {
    page_slice(records, request).to_vec()
}

/// Number of pages it takes to cover `total_records` at `page_size`
/// records per page. An empty collection has zero pages. A zero
/// `page_size` is treated as one record per page rather than dividing
/// by zero.
pub fn total_pages(total_records: usize, page_size: u64) -> u64 {
    (total_records as u64).div_ceil(page_size.max(1))
}

/// One page of records together with the metadata a caller needs to
/// render pagination controls around it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Records on this page, in collection order
    pub items: Vec<T>,

    /// 1-based page number this page was requested with
    pub page: u64,

    /// Requested records per page
    pub page_size: u64,

    /// Size of the full collection
    pub total_records: u64,

    /// Number of pages in the full collection
    pub total_pages: u64,
}

impl<T: Clone> Page<T> {
    pub fn of(records: &[T], request: &PageRequest) -> Page<T> {
        Page {
            items: paginate(records, request),
            page: request.page(),
            page_size: request.page_size(),
            total_records: records.len() as u64,
            total_pages: total_pages(records.len(), request.page_size()),
        }
    }
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True on the final non-empty page and on every page past the end.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }
}
