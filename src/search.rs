use serde::{Deserialize, Serialize};

use crate::model::{parse_number, ColumnDescriptor, DataType, RowRef};

/// A column that free-text search looks at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchColumn {
    pub key: String,
    pub data_type: DataType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    pub query: String,
    pub columns: Vec<SearchColumn>,
}

impl SearchState {
    /// Searchable columns taken from the headers marked `searchable`, in header order.
    pub fn from_headers(headers: &[ColumnDescriptor]) -> Self {
        Self {
            query: String::new(),
            columns: headers
                .iter()
                .filter(|h| h.searchable)
                .map(|h| SearchColumn {
                    key: h.key.clone(),
                    data_type: h.data_type,
                })
                .collect(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() && !self.columns.is_empty()
    }

    pub fn search_rows(&self, rows: &[RowRef]) -> Vec<RowRef> {
        search_rows(&self.query, rows, &self.columns)
    }
}

/// Keep rows where any searchable column matches `query`.
///
/// `Number` columns need the cell to equal the parsed query exactly; every
/// other column matches on case-insensitive substring containment. An empty
/// query, or no searchable columns, leaves `rows` as they are.
pub fn search_rows(query: &str, rows: &[RowRef], columns: &[SearchColumn]) -> Vec<RowRef> {
    if query.is_empty() || columns.is_empty() {
        return rows.to_vec();
    }
    let needle = query.to_lowercase();
    let wanted = parse_number(query);
    let kept: Vec<RowRef> = rows
        .iter()
        .filter(|row| {
            columns.iter().any(|col| match col.data_type {
                DataType::Number => row.number_of(&col.key) == wanted,
                DataType::String | DataType::Date => {
                    row.text_of(&col.key).to_lowercase().contains(&needle)
                }
            })
        })
        .cloned()
        .collect();
    tracing::trace!(query, before = rows.len(), after = kept.len(), "searched rows");
    kept
}
