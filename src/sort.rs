use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::model::{CellValue, RowRef};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction: {}", other)),
        }
    }
}

/// Which column orders the view, if any.
///
/// Once a column is sorted there is no way back to `Unsorted` through
/// [`toggle_sort`]; the two states of a sorted column are ascending and
/// descending.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SortState {
    #[default]
    Unsorted,
    Sorted {
        key: String,
        direction: SortDirection,
    },
}

impl SortState {
    pub fn ascending(key: impl Into<String>) -> Self {
        SortState::Sorted {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        SortState::Sorted {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            SortState::Unsorted => None,
            SortState::Sorted { key, .. } => Some(key.as_str()),
        }
    }

    pub fn direction(&self) -> Option<SortDirection> {
        match self {
            SortState::Unsorted => None,
            SortState::Sorted { direction, .. } => Some(*direction),
        }
    }

    /// Direction to show on a column header, `None` when the column is not the sort column.
    pub fn direction_for(&self, column_key: &str) -> Option<SortDirection> {
        match self {
            SortState::Sorted { key, direction } if key == column_key => Some(*direction),
            _ => None,
        }
    }
}

/// Next sort state after the user activates `column_key`.
///
/// Ascending on the same column flips to descending; anything else
/// (unsorted, another column, or descending on this column) becomes
/// ascending on `column_key`.
pub fn toggle_sort(column_key: &str, current: &SortState) -> SortState {
    match current {
        SortState::Sorted {
            key,
            direction: SortDirection::Ascending,
        } if key == column_key => SortState::descending(column_key),
        _ => SortState::ascending(column_key),
    }
}

// Missing cells rank lowest, then numbers, then text. Mixed columns are not
// coerced, but the ranking keeps the order total.
fn rank(value: Option<&CellValue>) -> u8 {
    match value {
        None => 0,
        Some(CellValue::Number(_)) => 1,
        Some(CellValue::Text(_)) => 2,
    }
}

/// Natural ascending order of two sort keys.
pub fn compare_values(a: Option<&CellValue>, b: Option<&CellValue>) -> Ordering {
    match (a, b) {
        (Some(CellValue::Number(x)), Some(CellValue::Number(y))) => x.total_cmp(y),
        (Some(CellValue::Text(x)), Some(CellValue::Text(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// Order rows by the sort column. The sort is stable, so rows with equal
/// keys keep their incoming relative order in both directions.
pub fn sort_rows(state: &SortState, rows: &[RowRef]) -> Vec<RowRef> {
    let mut sorted = rows.to_vec();
    let SortState::Sorted { key, direction } = state else {
        return sorted;
    };
    sorted.sort_by(|a, b| {
        let ord = compare_values(a.sort_key(key), b.sort_key(key));
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    tracing::trace!(column = %key, direction = direction.as_str(), rows = sorted.len(), "sorted rows");
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, Row};
    use std::sync::Arc;

    fn row(id: &str, name: Option<&str>, members: f64) -> RowRef {
        let mut r = Row::new()
            .with_cell("id", Cell::text(id))
            .with_cell("members", Cell::number(members));
        if let Some(name) = name {
            r.insert("name", Cell::text(name));
        }
        Arc::new(r)
    }

    fn ids(rows: &[RowRef]) -> Vec<String> {
        rows.iter().map(|r| r.text_of("id").into_owned()).collect()
    }

    #[test]
    fn test_toggle_same_column_flips() {
        let s = toggle_sort("name", &SortState::Unsorted);
        assert_eq!(s, SortState::ascending("name"));
        let s = toggle_sort("name", &s);
        assert_eq!(s, SortState::descending("name"));
        // no third "unsorted" state
        let s = toggle_sort("name", &s);
        assert_eq!(s, SortState::ascending("name"));
    }

    #[test]
    fn test_toggle_other_column_resets_to_ascending() {
        let s = SortState::descending("name");
        assert_eq!(toggle_sort("members", &s), SortState::ascending("members"));
        let s = SortState::ascending("name");
        assert_eq!(toggle_sort("members", &s), SortState::ascending("members"));
    }

    #[test]
    fn test_unsorted_is_identity() {
        let rows = vec![row("a", Some("z"), 1.0), row("b", Some("y"), 2.0)];
        assert_eq!(ids(&sort_rows(&SortState::Unsorted, &rows)), vec!["a", "b"]);
    }

    #[test]
    fn test_numeric_sort_is_numeric_not_lexicographic() {
        let rows = vec![
            row("a", None, 10.0),
            row("b", None, 9.0),
            row("c", None, 100.0),
        ];
        let sorted = sort_rows(&SortState::ascending("members"), &rows);
        assert_eq!(ids(&sorted), vec!["b", "a", "c"]);
        let sorted = sort_rows(&SortState::descending("members"), &rows);
        assert_eq!(ids(&sorted), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_stable_ties_in_both_directions() {
        let rows = vec![
            row("a", Some("x"), 2.0),
            row("b", Some("x"), 1.0),
            row("c", Some("x"), 2.0),
            row("d", Some("x"), 1.0),
        ];
        let asc = sort_rows(&SortState::ascending("members"), &rows);
        assert_eq!(ids(&asc), vec!["b", "d", "a", "c"]);
        let desc = sort_rows(&SortState::descending("members"), &rows);
        assert_eq!(ids(&desc), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_missing_key_sorts_first_without_panicking() {
        let rows = vec![
            row("a", Some("beta"), 1.0),
            row("b", None, 1.0),
            row("c", Some("alpha"), 1.0),
        ];
        let sorted = sort_rows(&SortState::ascending("name"), &rows);
        assert_eq!(ids(&sorted), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_compare_values_total_on_mixed() {
        let n = CellValue::Number(5.0);
        let t = CellValue::Text("5".into());
        assert_eq!(compare_values(None, Some(&n)), Ordering::Less);
        assert_eq!(compare_values(Some(&n), Some(&t)), Ordering::Less);
        assert_eq!(compare_values(Some(&t), None), Ordering::Greater);
    }

    #[test]
    fn test_direction_for_header() {
        let s = SortState::descending("name");
        assert_eq!(s.direction_for("name"), Some(SortDirection::Descending));
        assert_eq!(s.direction_for("members"), None);
        assert_eq!(SortState::Unsorted.direction_for("name"), None);
    }
}
