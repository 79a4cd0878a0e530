//! Row and header vocabulary shared by every engine.
//!
//! A [`Cell`] separates the value used for ordering, filtering and search
//! (`sort_key`) from the value shown to the user (`display_value`). Engines
//! only ever read `sort_key`, which lets a date be stored as epoch seconds and
//! shown as a formatted string.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Display format used for date cells built with [`Cell::date`].
pub const DATE_DISPLAY_FORMAT: &str = "%b %d, %Y";

/// Declared type of a column. Drives which filter operators apply and how
/// search matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    String,
    Number,
    /// Epoch seconds stored as a number.
    Date,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Number => "number",
            DataType::Date => "date",
        }
    }
}

impl std::str::FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "string" | "text" => Ok(DataType::String),
            "number" | "numeric" => Ok(DataType::Number),
            "date" => Ok(DataType::Date),
            other => Err(format!("unknown data type: {}", other)),
        }
    }
}

/// One entry of a discrete-valued column's option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderOption {
    pub value: CellValue,
    pub text: String,
}

fn default_true() -> bool {
    true
}

/// Static metadata describing one field of every row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub key: String,
    pub title: String,
    #[serde(default, alias = "dataType")]
    pub data_type: DataType,
    #[serde(default = "default_true", alias = "isSort")]
    pub sortable: bool,
    #[serde(default = "default_true", alias = "isFilter")]
    pub filterable: bool,
    #[serde(default, alias = "isSearch")]
    pub searchable: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<HeaderOption>,
}

impl ColumnDescriptor {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            data_type: DataType::default(),
            sortable: true,
            filterable: true,
            searchable: false,
            options: Vec::new(),
        }
    }

    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn not_filterable(mut self) -> Self {
        self.filterable = false;
        self
    }

    pub fn with_options(mut self, options: Vec<HeaderOption>) -> Self {
        self.options = options;
        self
    }
}

/// The comparable value of a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Text form used by the string filter operators and text search.
    /// Integral numbers print without a fractional part (`120`, not `120.0`).
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Text(s) => Cow::Borrowed(s.as_str()),
            CellValue::Number(n) => Cow::Owned(format_number(*n)),
        }
    }

    /// Numeric form used by the numeric operators and number search.
    /// Text is parsed with [`parse_number`]; unparsable text yields NaN.
    pub fn as_number(&self) -> f64 {
        match self {
            CellValue::Number(n) => *n,
            CellValue::Text(s) => parse_number(s),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

pub(crate) fn format_number(n: f64) -> String {
    if n == 0.0 {
        // also covers -0.0
        "0".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else {
        n.to_string()
    }
}

/// Parse user or cell text as a number. Surrounding whitespace is ignored,
/// blank text is 0 and anything else that fails to parse is NaN, so every
/// comparison against it is false.
pub fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(rename = "key")]
    pub sort_key: CellValue,
    #[serde(rename = "value")]
    pub display_value: String,
}

impl Cell {
    pub fn new(sort_key: impl Into<CellValue>, display_value: impl Into<String>) -> Self {
        Self {
            sort_key: sort_key.into(),
            display_value: display_value.into(),
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        Self {
            display_value: s.clone(),
            sort_key: CellValue::Text(s),
        }
    }

    pub fn number(n: f64) -> Self {
        Self {
            sort_key: CellValue::Number(n),
            display_value: format_number(n),
        }
    }

    /// A date cell keyed by epoch seconds and displayed as e.g. `Jul 02, 2021` (UTC).
    pub fn date(epoch_secs: i64) -> Self {
        let display_value = DateTime::from_timestamp(epoch_secs, 0)
            .map(|dt| dt.format(DATE_DISPLAY_FORMAT).to_string())
            .unwrap_or_else(|| epoch_secs.to_string());
        Self {
            sort_key: CellValue::Number(epoch_secs as f64),
            display_value,
        }
    }
}

/// One record: column key to cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: BTreeMap<String, Cell>,
}

/// Rows are shared between the source and every derived sequence.
pub type RowRef = Arc<Row>;

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells<K, I>(cells: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Cell)>,
    {
        Self {
            cells: cells.into_iter().map(|(k, c)| (k.into(), c)).collect(),
        }
    }

    pub fn with_cell(mut self, key: impl Into<String>, cell: Cell) -> Self {
        self.cells.insert(key.into(), cell);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, cell: Cell) {
        self.cells.insert(key.into(), cell);
    }

    pub fn get(&self, key: &str) -> Option<&Cell> {
        self.cells.get(key)
    }

    pub fn sort_key(&self, key: &str) -> Option<&CellValue> {
        self.cells.get(key).map(|c| &c.sort_key)
    }

    /// Text form of a column's sort key; a missing cell reads as empty.
    pub fn text_of(&self, key: &str) -> Cow<'_, str> {
        self.sort_key(key)
            .map(CellValue::as_text)
            .unwrap_or(Cow::Borrowed(""))
    }

    /// Numeric form of a column's sort key; a missing cell is NaN.
    pub fn number_of(&self, key: &str) -> f64 {
        self.sort_key(key).map(CellValue::as_number).unwrap_or(f64::NAN)
    }

    /// True when the row has a cell for every header.
    pub fn covers(&self, headers: &[ColumnDescriptor]) -> bool {
        headers.iter().all(|h| self.cells.contains_key(&h.key))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
