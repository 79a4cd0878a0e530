//! In-memory view engine for interactive data grids.
//!
//! A [`GridView`] holds an immutable set of rows described by column headers
//! and derives the page a user sees from four independent pieces of state:
//! the column filters, a free-text search, a single-column sort and the
//! pagination position. See [`view`] for the order those are applied in.

pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod filter_set;
pub mod logging;
pub mod model;
pub mod pagination;
pub mod render;
pub mod search;
pub mod sort;
pub mod view;

pub use config::{AppConfig, ConfigManager};
pub use dataset::GridDocument;
pub use error::{GridError, GridResult};
pub use filter::{AppliedFilter, FilterOperator};
pub use filter_set::FilterSet;
pub use model::{Cell, CellValue, ColumnDescriptor, DataType, HeaderOption, Row, RowRef};
pub use pagination::Pagination;
pub use search::{SearchColumn, SearchState};
pub use sort::{SortDirection, SortState};
pub use view::{GridOptions, GridView, ViewSnapshot};

/// Application name used for the config directory
pub const APP_NAME: &str = "datagrid";
