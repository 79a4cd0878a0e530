use serde::{Deserialize, Serialize};

use crate::model::{parse_number, DataType, Row, RowRef};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperator {
    Equals,
    StartsWith,
    EndsWith,
    Contains,
    LessThan,
    GreaterThan,
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Equals => "equals",
            FilterOperator::StartsWith => "startsWith",
            FilterOperator::EndsWith => "endsWith",
            FilterOperator::Contains => "contains",
            FilterOperator::LessThan => "lessThan",
            FilterOperator::GreaterThan => "greaterThan",
        }
    }

    /// Menu label for the operator.
    pub fn label(&self) -> &'static str {
        match self {
            FilterOperator::Equals => "Equal To",
            FilterOperator::StartsWith => "Starts With",
            FilterOperator::EndsWith => "Ends With",
            FilterOperator::Contains => "Contains",
            FilterOperator::LessThan => "Less Than",
            FilterOperator::GreaterThan => "Greater Than",
        }
    }

    pub fn iterator() -> impl Iterator<Item = FilterOperator> {
        [
            FilterOperator::StartsWith,
            FilterOperator::EndsWith,
            FilterOperator::Contains,
            FilterOperator::Equals,
            FilterOperator::LessThan,
            FilterOperator::GreaterThan,
        ]
        .iter()
        .copied()
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FilterOperator::LessThan | FilterOperator::GreaterThan)
    }

    /// Operators worth offering for a column of the given type. The numeric
    /// operators only ever match on `Number` columns.
    pub fn for_data_type(data_type: DataType) -> impl Iterator<Item = FilterOperator> {
        Self::iterator().filter(move |op| !op.is_numeric() || data_type == DataType::Number)
    }
}

impl std::fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FilterOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "equals" | "eq" | "=" => Ok(FilterOperator::Equals),
            "startswith" | "starts_with" => Ok(FilterOperator::StartsWith),
            "endswith" | "ends_with" => Ok(FilterOperator::EndsWith),
            "contains" => Ok(FilterOperator::Contains),
            "lessthan" | "less_than" | "lt" | "<" => Ok(FilterOperator::LessThan),
            "greaterthan" | "greater_than" | "gt" | ">" => Ok(FilterOperator::GreaterThan),
            other => Err(format!(
                "unknown filter operator '{}'. Expected one of: {}",
                other,
                FilterOperator::iterator()
                    .map(|op| op.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

/// One active predicate bound to one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedFilter {
    pub column: String,
    pub value: String,
    pub operator: FilterOperator,
    pub data_type: DataType,
}

impl AppliedFilter {
    pub fn new(
        column: impl Into<String>,
        value: impl Into<String>,
        operator: FilterOperator,
        data_type: DataType,
    ) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
            operator,
            data_type,
        }
    }

    pub fn matches(&self, row: &Row) -> bool {
        evaluate(row, &self.column, self.operator, &self.value, self.data_type)
    }

    pub fn filter_rows(&self, rows: &[RowRef]) -> Vec<RowRef> {
        filter_rows(rows, &self.column, &self.value, self.operator, self.data_type)
    }
}

/// Test one row against one column predicate.
///
/// String operators compare the lowercased text form of the cell's sort key
/// with the lowercased value, whatever the declared type. Numeric operators
/// only hold for `Number` columns; on any other type they are false for every
/// row, so the filter excludes everything rather than being ignored.
pub fn evaluate(
    row: &Row,
    column: &str,
    operator: FilterOperator,
    value: &str,
    data_type: DataType,
) -> bool {
    let text = || (row.text_of(column).to_lowercase(), value.to_lowercase());
    let number = || (row.number_of(column), parse_number(value));
    match operator {
        FilterOperator::Equals => {
            let (cell, needle) = text();
            cell == needle
        }
        FilterOperator::StartsWith => {
            let (cell, needle) = text();
            cell.starts_with(&needle)
        }
        FilterOperator::EndsWith => {
            let (cell, needle) = text();
            cell.ends_with(&needle)
        }
        FilterOperator::Contains => {
            let (cell, needle) = text();
            cell.contains(&needle)
        }
        FilterOperator::LessThan => {
            let (cell, bound) = number();
            data_type == DataType::Number && cell < bound
        }
        FilterOperator::GreaterThan => {
            let (cell, bound) = number();
            data_type == DataType::Number && cell > bound
        }
    }
}

/// Keep the rows that satisfy one column predicate.
pub fn filter_rows(
    rows: &[RowRef],
    column: &str,
    value: &str,
    operator: FilterOperator,
    data_type: DataType,
) -> Vec<RowRef> {
    if rows.is_empty() {
        return Vec::new();
    }
    let kept: Vec<RowRef> = rows
        .iter()
        .filter(|row| evaluate(row, column, operator, value, data_type))
        .cloned()
        .collect();
    tracing::trace!(
        column,
        operator = operator.as_str(),
        value,
        before = rows.len(),
        after = kept.len(),
        "filtered rows"
    );
    kept
}
