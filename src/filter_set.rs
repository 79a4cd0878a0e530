//! The set of active column filters and its state transitions.
//!
//! A [`FilterSet`] is a plain value. Applying or clearing a filter never
//! mutates it; each transition returns the next set together with the rows
//! that survive it, recomputed from the untouched source. Rows excluded by a
//! filter are never tracked, so retracting one filter cannot leave behind
//! exclusions that only another, since-cleared filter justified.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::filter::AppliedFilter;
use crate::model::RowRef;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilterSet {
    filters: BTreeMap<String, AppliedFilter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<&AppliedFilter> {
        self.filters.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.filters.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Active filters ordered by column key.
    pub fn iter(&self) -> impl Iterator<Item = &AppliedFilter> {
        self.filters.values()
    }

    /// Run every active filter over `source`, each narrowing the previous result.
    pub fn filtered_rows(&self, source: &[RowRef]) -> Vec<RowRef> {
        let mut rows = source.to_vec();
        for filter in self.filters.values() {
            rows = filter.filter_rows(&rows);
        }
        rows
    }

    /// Add `filter`, replacing any filter already active on its column.
    ///
    /// A replaced filter is cleared first, so the result never carries a
    /// residual predicate from the column's previous value.
    pub fn apply_filter(&self, filter: AppliedFilter, source: &[RowRef]) -> (FilterSet, Vec<RowRef>) {
        let (mut next, base) = if self.contains(&filter.column) {
            self.clear_filter(&filter.column, source)
        } else {
            (self.clone(), self.filtered_rows(source))
        };
        let rows = filter.filter_rows(&base);
        tracing::debug!(
            column = %filter.column,
            operator = filter.operator.as_str(),
            active = next.len() + 1,
            rows = rows.len(),
            "applied filter"
        );
        next.filters.insert(filter.column.clone(), filter);
        (next, rows)
    }

    /// Remove the filter on `column` and recompute the survivors of the
    /// remaining filters from `source`.
    pub fn clear_filter(&self, column: &str, source: &[RowRef]) -> (FilterSet, Vec<RowRef>) {
        let mut next = self.clone();
        let removed = next.filters.remove(column).is_some();
        let rows = next.filtered_rows(source);
        tracing::debug!(
            column,
            removed,
            active = next.len(),
            rows = rows.len(),
            "cleared filter"
        );
        (next, rows)
    }
}
