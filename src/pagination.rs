use serde::Serialize;

use crate::error::{GridError, GridResult};
use crate::model::RowRef;

/// Page-size choices offered when the caller supplies none.
pub const DEFAULT_PAGE_SIZE_OPTIONS: &[usize] = &[10, 15, 20];

/// Number of pages needed for `total_rows` at `page_size` rows per page.
pub fn page_count(total_rows: usize, page_size: usize) -> GridResult<usize> {
    if page_size == 0 {
        return Err(GridError::invalid("page size must be greater than 0"));
    }
    Ok(total_rows.div_ceil(page_size))
}

/// Rows on the 1-based `current_page`. A page past the end is empty.
pub fn slice(rows: &[RowRef], current_page: usize, page_size: usize) -> GridResult<Vec<RowRef>> {
    if page_size == 0 {
        return Err(GridError::invalid("page size must be greater than 0"));
    }
    if current_page == 0 {
        return Err(GridError::invalid("page numbers start at 1"));
    }
    let start = (current_page - 1).saturating_mul(page_size);
    if start >= rows.len() {
        return Ok(Vec::new());
    }
    let end = start.saturating_add(page_size).min(rows.len());
    Ok(rows[start..end].to_vec())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
    page_size_options: Vec<usize>,
    total_pages: usize,
}

impl Pagination {
    /// Start on page 1 with the first option as the page size.
    pub fn new(page_size_options: Vec<usize>) -> GridResult<Self> {
        let Some(&page_size) = page_size_options.first() else {
            return Err(GridError::invalid("at least one page size option is required"));
        };
        if page_size_options.contains(&0) {
            return Err(GridError::invalid("page size options must be greater than 0"));
        }
        Ok(Self {
            current_page: 1,
            page_size,
            page_size_options,
            total_pages: 0,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Highest page a caller may navigate to; an empty view still has page 1.
    pub fn last_page(&self) -> usize {
        self.total_pages.max(1)
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn is_in_range(&self) -> bool {
        self.current_page <= self.last_page()
    }

    pub(crate) fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
    }

    pub(crate) fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Recompute the page count for `row_count` rows, optionally pulling the
    /// current page back into `[1, last_page]`.
    pub(crate) fn update_total(&mut self, row_count: usize, clamp: bool) {
        self.total_pages = row_count.div_ceil(self.page_size);
        if clamp {
            self.current_page = self.current_page.clamp(1, self.last_page());
        }
    }

    pub fn slice(&self, rows: &[RowRef]) -> GridResult<Vec<RowRef>> {
        slice(rows, self.current_page, self.page_size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE_OPTIONS[0],
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            total_pages: 0,
        }
    }
}
