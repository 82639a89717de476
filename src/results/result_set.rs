use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::row::{CustomDbRow, index_columns};
use crate::types::RowValues;

/// A result set from a database query
///
/// This struct represents the result of a database query,
/// containing the rows returned by the query and metadata.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    /// The rows returned by the query, in the order the store yielded them
    pub results: Vec<CustomDbRow>,
    // Column names shared by all rows (to avoid duplicating in each row)
    #[serde(skip)]
    column_names: Option<Arc<Vec<String>>>,
    #[serde(skip)]
    column_index: Option<Arc<HashMap<String, usize>>>,
}

impl ResultSet {
    /// Create a new result set with a known capacity
    #[must_use]
    pub fn with_capacity(capacity: usize) -> ResultSet {
        ResultSet {
            results: Vec::with_capacity(capacity),
            column_names: None,
            column_index: None,
        }
    }

    /// Set the column names for this result set (to be shared by all rows)
    pub fn set_column_names(&mut self, column_names: Arc<Vec<String>>) {
        self.column_index = Some(Arc::new(index_columns(&column_names)));
        self.column_names = Some(column_names);
    }

    /// Get the column names for this result set
    #[must_use]
    pub fn get_column_names(&self) -> Option<&Arc<Vec<String>>> {
        self.column_names.as_ref()
    }

    /// Add a row to the result set.
    ///
    /// Rows added before column names are set are dropped.
    pub fn add_row_values(&mut self, row_values: Vec<RowValues>) {
        if let (Some(column_names), Some(index)) = (&self.column_names, &self.column_index) {
            self.results.push(CustomDbRow {
                column_names: Arc::clone(column_names),
                rows: row_values,
                column_index_cache: Arc::clone(index),
            });
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CustomDbRow> {
        self.results.iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a CustomDbRow;
    type IntoIter = std::slice::Iter<'a, CustomDbRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// List-of-tuples rendering: `[(1, 'Czaruś', 'cat', '8'), (2, ...)]`.
impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, row) in self.results.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{row}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pets_result() -> ResultSet {
        let mut rs = ResultSet::with_capacity(2);
        rs.set_column_names(Arc::new(vec![
            "pets_id".to_string(),
            "name".to_string(),
        ]));
        rs.add_row_values(vec![RowValues::Int(2), RowValues::from("Behemocik")]);
        rs.add_row_values(vec![RowValues::Int(3), RowValues::from("Celinka")]);
        rs
    }

    #[test]
    fn rows_share_column_lookup() {
        let rs = pets_result();
        assert_eq!(rs.len(), 2);
        assert_eq!(rs.results[0].get_column_index("name"), Some(1));
        assert_eq!(
            rs.results[1].get("name").and_then(RowValues::as_text),
            Some("Celinka")
        );
        assert!(rs.results[0].get("missing").is_none());
    }

    #[test]
    fn rows_without_columns_are_ignored() {
        let mut rs = ResultSet::default();
        rs.add_row_values(vec![RowValues::Int(1)]);
        assert!(rs.is_empty());
    }

    #[test]
    fn renders_as_tuples_and_json() {
        let rs = pets_result();
        assert_eq!(rs.to_string(), "[(2, 'Behemocik'), (3, 'Celinka')]");
        assert_eq!(ResultSet::default().to_string(), "[]");

        let json = serde_json::to_string(&rs).expect("json");
        assert_eq!(
            json,
            r#"[{"pets_id":2,"name":"Behemocik"},{"pets_id":3,"name":"Celinka"}]"#
        );
    }
}
