//! The view state machine.
//!
//! [`GridView`] owns the immutable source rows and the four independent pieces
//! of view state. Every entry point validates its input, updates one piece of
//! state and rebuilds the visible page from the source in a fixed order:
//! filter, then search, then sort, then paginate. Search always runs over the
//! filtered rows, so it can never surface a row an active filter excludes.

use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::instrument;

use crate::config::AppConfig;
use crate::error::{GridError, GridResult};
use crate::filter::{AppliedFilter, FilterOperator};
use crate::filter_set::FilterSet;
use crate::model::{ColumnDescriptor, DataType, Row, RowRef};
use crate::pagination::{Pagination, DEFAULT_PAGE_SIZE_OPTIONS};
use crate::search::SearchState;
use crate::sort::{sort_rows, toggle_sort, SortState};

#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    /// Applied once to the freshly loaded rows before the first page is built.
    pub initial_sort: SortState,
    /// First entry is the starting page size.
    pub page_size_options: Vec<usize>,
    /// Keep the current page within `[1, last_page]` after every change.
    /// When false, shrinking the result can leave the view on an empty page.
    pub clamp_current_page: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            initial_sort: SortState::Unsorted,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            clamp_current_page: true,
        }
    }
}

impl GridOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            initial_sort: SortState::Unsorted,
            page_size_options: config.pagination.page_size_options.clone(),
            clamp_current_page: config.pagination.clamp_current_page,
        }
    }

    pub fn with_initial_sort(mut self, sort: SortState) -> Self {
        self.initial_sort = sort;
        self
    }

    pub fn with_page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = options;
        self
    }

    pub fn with_clamp_current_page(mut self, clamp: bool) -> Self {
        self.clamp_current_page = clamp;
        self
    }
}

/// Everything a presentation layer needs to draw the grid, detached from the view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub rows: Vec<Row>,
    pub sort: SortState,
    pub pagination: Pagination,
    pub filters: FilterSet,
    pub query: String,
    /// Rows that pass filters and search, across all pages.
    pub matched: usize,
    pub source: usize,
}

#[derive(Debug, Clone)]
pub struct GridView {
    headers: Vec<ColumnDescriptor>,
    source: Vec<RowRef>,
    sort: SortState,
    filters: FilterSet,
    search: SearchState,
    pagination: Pagination,
    clamp_current_page: bool,
    /// Filtered, searched and sorted rows; the pages are slices of this.
    matched: Vec<RowRef>,
    visible: Vec<RowRef>,
}

impl GridView {
    pub fn new(
        headers: Vec<ColumnDescriptor>,
        rows: impl IntoIterator<Item = Row>,
        options: GridOptions,
    ) -> GridResult<Self> {
        let mut seen = HashSet::new();
        for header in &headers {
            if !seen.insert(header.key.as_str()) {
                return Err(GridError::DuplicateColumn(header.key.clone()));
            }
        }

        let pagination = Pagination::new(options.page_size_options)?;

        if let Some(key) = options.initial_sort.key() {
            let header = headers
                .iter()
                .find(|h| h.key == key)
                .ok_or_else(|| GridError::UnknownColumn(key.to_string()))?;
            if !header.sortable {
                return Err(GridError::ColumnNotSortable(key.to_string()));
            }
        }

        let mut source: Vec<RowRef> = rows.into_iter().map(Arc::new).collect();
        let incomplete = source.iter().filter(|r| !r.covers(&headers)).count();
        if incomplete > 0 {
            tracing::warn!(
                incomplete,
                total = source.len(),
                "rows are missing cells for declared columns; missing cells read as empty"
            );
        }

        // The initial sort orders the source itself, so later sorts break ties by it.
        if options.initial_sort != SortState::Unsorted {
            source = sort_rows(&options.initial_sort, &source);
        }

        let search = SearchState::from_headers(&headers);
        let mut view = Self {
            headers,
            source,
            sort: options.initial_sort,
            filters: FilterSet::new(),
            search,
            pagination,
            clamp_current_page: options.clamp_current_page,
            matched: Vec::new(),
            visible: Vec::new(),
        };
        view.refresh()?;
        Ok(view)
    }

    pub fn headers(&self) -> &[ColumnDescriptor] {
        &self.headers
    }

    pub fn column(&self, key: &str) -> Option<&ColumnDescriptor> {
        self.headers.iter().find(|h| h.key == key)
    }

    /// Source rows, in initial-sort order when one was given.
    pub fn source_rows(&self) -> &[RowRef] {
        &self.source
    }

    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// The current page.
    pub fn visible_rows(&self) -> &[RowRef] {
        &self.visible
    }

    /// All rows that pass filters and search, in sort order.
    pub fn matched_rows(&self) -> &[RowRef] {
        &self.matched
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            rows: self.visible.iter().map(|r| Row::clone(r)).collect(),
            sort: self.sort.clone(),
            pagination: self.pagination.clone(),
            filters: self.filters.clone(),
            query: self.search.query.clone(),
            matched: self.matched.len(),
            source: self.source.len(),
        }
    }

    fn require_column(&self, key: &str) -> GridResult<&ColumnDescriptor> {
        self.column(key)
            .ok_or_else(|| GridError::UnknownColumn(key.to_string()))
    }

    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self, column: &str) -> GridResult<()> {
        if !self.require_column(column)?.sortable {
            return Err(GridError::ColumnNotSortable(column.to_string()));
        }
        self.sort = toggle_sort(column, &self.sort);
        self.refresh()
    }

    #[instrument(skip(self))]
    pub fn apply_filter(
        &mut self,
        column: &str,
        value: &str,
        operator: FilterOperator,
        data_type: DataType,
    ) -> GridResult<()> {
        if !self.require_column(column)?.filterable {
            return Err(GridError::ColumnNotFilterable(column.to_string()));
        }
        let filter = AppliedFilter::new(column, value, operator, data_type);
        let (filters, filtered) = self.filters.apply_filter(filter, &self.source);
        self.filters = filters;
        self.rebuild(filtered)
    }

    #[instrument(skip(self))]
    pub fn clear_filter(&mut self, column: &str) -> GridResult<()> {
        self.require_column(column)?;
        let (filters, filtered) = self.filters.clear_filter(column, &self.source);
        self.filters = filters;
        self.rebuild(filtered)
    }

    #[instrument(skip(self))]
    pub fn clear_all_filters(&mut self) -> GridResult<()> {
        self.filters = FilterSet::new();
        self.refresh()
    }

    #[instrument(skip(self))]
    pub fn set_search_query(&mut self, query: &str) -> GridResult<()> {
        self.search.query = query.to_string();
        self.refresh()
    }

    #[instrument(skip(self))]
    pub fn clear_search(&mut self) -> GridResult<()> {
        self.set_search_query("")
    }

    /// Change rows per page. The page count is recomputed from the rows that
    /// currently pass filters and search.
    #[instrument(skip(self))]
    pub fn set_page_size(&mut self, page_size: usize) -> GridResult<()> {
        if page_size == 0 {
            return Err(GridError::invalid("page size must be greater than 0"));
        }
        self.pagination.set_page_size(page_size);
        self.refresh()
    }

    #[instrument(skip(self))]
    pub fn go_to_page(&mut self, page: usize) -> GridResult<()> {
        if page == 0 {
            return Err(GridError::invalid("page numbers start at 1"));
        }
        if self.clamp_current_page && page > self.pagination.last_page() {
            return Err(GridError::invalid(format!(
                "page {} is past the last page ({})",
                page,
                self.pagination.last_page()
            )));
        }
        self.pagination.set_current_page(page);
        self.refresh()
    }

    /// Move forward one page; returns false on the last page.
    #[instrument(skip(self))]
    pub fn next_page(&mut self) -> GridResult<bool> {
        if !self.pagination.has_next() {
            return Ok(false);
        }
        self.go_to_page(self.pagination.current_page() + 1)?;
        Ok(true)
    }

    /// Move back one page; returns false on the first page.
    #[instrument(skip(self))]
    pub fn previous_page(&mut self) -> GridResult<bool> {
        if !self.pagination.has_previous() {
            return Ok(false);
        }
        let target = self.pagination.current_page() - 1;
        // a drifted page may sit past the end; step straight back into range
        let target = if self.clamp_current_page {
            target
        } else {
            target.min(self.pagination.last_page())
        };
        self.go_to_page(target)?;
        Ok(true)
    }

    fn refresh(&mut self) -> GridResult<()> {
        let filtered = self.filters.filtered_rows(&self.source);
        self.rebuild(filtered)
    }

    fn rebuild(&mut self, filtered: Vec<RowRef>) -> GridResult<()> {
        let filtered_len = filtered.len();
        let searched = self.search.search_rows(&filtered);
        self.matched = sort_rows(&self.sort, &searched);
        self.pagination
            .update_total(self.matched.len(), self.clamp_current_page);
        self.visible = self.pagination.slice(&self.matched)?;
        tracing::debug!(
            source = self.source.len(),
            filtered = filtered_len,
            matched = self.matched.len(),
            page = self.pagination.current_page(),
            total_pages = self.pagination.total_pages(),
            visible = self.visible.len(),
            "recomputed view"
        );
        Ok(())
    }
}
