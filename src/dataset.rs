//! JSON grid documents.
//!
//! A document carries the headers, the rows and optional view defaults:
//!
//! ```json
//! {
//!   "headers": [{ "key": "createdOn", "title": "Created On", "dataType": "date" }],
//!   "rows": [{ "createdOn": 1625164800 }, { "createdOn": { "key": 1625251200, "value": "Jul 02" } }],
//!   "initialSort": { "key": "createdOn", "direction": "descending" },
//!   "pageSizeOptions": [25, 50]
//! }
//! ```
//!
//! A cell is either a full `{key, value}` pair or a bare scalar whose display
//! value is derived from its column's declared type. A `null` display value
//! shows as empty and a `null` cell counts as missing.

use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::model::{Cell, CellValue, ColumnDescriptor, DataType, Row};
use crate::sort::{SortDirection, SortState};
use crate::view::{GridOptions, GridView};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    Full {
        key: CellValue,
        value: Option<CellValue>,
    },
    Bare(CellValue),
}

impl RawCell {
    pub fn into_cell(self, data_type: DataType) -> Cell {
        match self {
            RawCell::Full { key, value } => {
                let display = value.map(|v| v.as_text().into_owned()).unwrap_or_default();
                Cell::new(key, display)
            }
            RawCell::Bare(CellValue::Number(n)) if data_type == DataType::Date => {
                Cell::date(n as i64)
            }
            RawCell::Bare(CellValue::Number(n)) => Cell::number(n),
            RawCell::Bare(CellValue::Text(s)) => Cell::text(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InitialSort {
    pub key: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl From<InitialSort> for SortState {
    fn from(sort: InitialSort) -> Self {
        SortState::Sorted {
            key: sort.key,
            direction: sort.direction,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDocument {
    pub headers: Vec<ColumnDescriptor>,
    #[serde(default)]
    pub rows: Vec<BTreeMap<String, Option<RawCell>>>,
    #[serde(default, alias = "initial_sort")]
    pub initial_sort: Option<InitialSort>,
    #[serde(default, alias = "page_size_options")]
    pub page_size_options: Option<Vec<usize>>,
}

impl GridDocument {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| eyre!("Failed to parse grid document: {}", e))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| eyre!("Failed to read {}: {}", path.display(), e))?;
        serde_json::from_str(&json)
            .map_err(|e| eyre!("Failed to parse grid document {}: {}", path.display(), e))
    }

    /// Build typed rows. Cells for columns without a header are read as strings
    /// or numbers; `null` cells are left out and read as missing.
    pub fn rows(&self) -> Vec<Row> {
        let types: HashMap<&str, DataType> = self
            .headers
            .iter()
            .map(|h| (h.key.as_str(), h.data_type))
            .collect();
        self.rows
            .iter()
            .map(|raw| {
                Row::from_cells(raw.iter().filter_map(|(key, cell)| {
                    let cell = cell.clone()?;
                    let data_type = types.get(key.as_str()).copied().unwrap_or_default();
                    Some((key.clone(), cell.into_cell(data_type)))
                }))
            })
            .collect()
    }

    /// Create a view; the document's initial sort and page sizes take
    /// precedence over `options`.
    pub fn into_view(self, mut options: GridOptions) -> Result<GridView> {
        let rows = self.rows();
        if let Some(sort) = self.initial_sort {
            options = options.with_initial_sort(sort.into());
        }
        if let Some(page_size_options) = self.page_size_options {
            options = options.with_page_size_options(page_size_options);
        }
        Ok(GridView::new(self.headers, rows, options)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "headers": [
            { "key": "name", "title": "Name" },
            { "key": "createdOn", "title": "Created On", "dataType": "date" },
            { "key": "lifecycle", "title": "Lifecycle", "dataType": "number", "isSearch": true }
        ],
        "rows": [
            { "name": "Alice", "createdOn": 1625164800, "lifecycle": 90 },
            { "name": { "key": "bob", "value": "Bob" }, "createdOn": 1625251200, "lifecycle": { "key": 120, "value": 120 } }
        ],
        "initialSort": { "key": "lifecycle", "direction": "descending" },
        "pageSizeOptions": [1, 2]
    }"#;

    #[test]
    fn test_bare_cells_take_column_type() {
        let doc = GridDocument::from_json_str(DOC).unwrap();
        let rows = doc.rows();
        let alice = &rows[0];
        assert_eq!(alice.get("createdOn").unwrap().display_value, "Jul 01, 2021");
        assert_eq!(alice.get("lifecycle").unwrap().display_value, "90");
        assert_eq!(alice.get("name").unwrap(), &Cell::text("Alice"));
    }

    #[test]
    fn test_full_cells_keep_key_and_value() {
        let doc = GridDocument::from_json_str(DOC).unwrap();
        let bob = &doc.rows()[1];
        let name = bob.get("name").unwrap();
        assert_eq!(name.sort_key, CellValue::Text("bob".into()));
        assert_eq!(name.display_value, "Bob");
        assert_eq!(bob.get("lifecycle").unwrap().display_value, "120");
    }

    #[test]
    fn test_document_defaults_override_options() {
        let view = GridDocument::from_json_str(DOC)
            .unwrap()
            .into_view(GridOptions::default())
            .unwrap();
        assert_eq!(view.sort_state(), &SortState::descending("lifecycle"));
        assert_eq!(view.pagination().page_size(), 1);
        assert_eq!(view.pagination().total_pages(), 2);
        assert_eq!(view.visible_rows()[0].text_of("name"), "bob");
    }

    #[test]
    fn test_unknown_initial_sort_column_is_reported() {
        let json = r#"{ "headers": [{ "key": "name", "title": "Name" }], "initialSort": { "key": "age" } }"#;
        let err = GridDocument::from_json_str(json)
            .unwrap()
            .into_view(GridOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("age"));
    }

    #[test]
    fn test_null_display_value_reads_as_empty() {
        let json = r#"{
            "headers": [{ "key": "name", "title": "Name" }, { "key": "members", "title": "Members" }],
            "rows": [{ "name": "Alice", "members": { "key": 5, "value": null } }]
        }"#;
        let rows = GridDocument::from_json_str(json).unwrap().rows();
        let members = rows[0].get("members").unwrap();
        assert_eq!(members.sort_key, CellValue::Number(5.0));
        assert_eq!(members.display_value, "");
    }

    #[test]
    fn test_null_cell_is_missing() {
        let json = r#"{
            "headers": [{ "key": "name", "title": "Name" }, { "key": "members", "title": "Members" }],
            "rows": [{ "name": "Alice", "members": null }, { "name": "Bob", "members": 3 }]
        }"#;
        let doc = GridDocument::from_json_str(json).unwrap();
        let rows = doc.rows();
        assert!(rows[0].get("members").is_none());
        assert_eq!(rows[0].text_of("members"), "");

        let mut view = doc.into_view(GridOptions::default()).unwrap();
        view.toggle_sort("members").unwrap();
        // the missing cell sorts first
        assert_eq!(view.visible_rows()[0].text_of("name"), "Alice");
        assert_eq!(view.source_len(), 2);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(GridDocument::from_json_str("{ \"rows\": [] }").is_err());
    }
}
