//! SQL text builders for the generic query layer.
//!
//! Table and column names are interpolated directly into the statement text. They are
//! caller-trusted identifiers: nothing here quotes or validates them, and `SQLite` cannot
//! bind identifiers as parameters. Never pass names taken from untrusted input. Values are
//! always bound positionally (`?`) in the order they were added.

mod dml;
mod select;

pub use dml::{delete_all, delete_where, update};
pub use select::{select_all, select_where};

use crate::types::RowValues;

/// A statement and its positional parameters, ready to execute.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryAndParams {
    pub query: String,
    pub params: Vec<RowValues>,
    /// `true` for SELECTs
    pub is_read_only: bool,
}

impl QueryAndParams {
    fn read(query: String, params: Vec<RowValues>) -> Self {
        Self {
            query,
            params,
            is_read_only: true,
        }
    }

    fn write(query: String, params: Vec<RowValues>) -> Self {
        Self {
            query,
            params,
            is_read_only: false,
        }
    }
}

/// What to do when a WHERE clause is requested with no predicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyFilterPolicy {
    /// Fail with `PetMealsDbError::EmptyFilter` before any SQL runs.
    #[default]
    Reject,
    /// Drop the WHERE clause and act on every row of the table.
    Unfiltered,
}

/// Per-call options for the filtered operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub empty_filters: EmptyFilterPolicy,
}

impl QueryOptions {
    #[must_use]
    pub fn with_empty_filters(mut self, policy: EmptyFilterPolicy) -> Self {
        self.empty_filters = policy;
        self
    }
}

/// Ordered `column = value` equality predicates, joined with `AND`.
///
/// ```rust
/// use pet_meals::prelude::*;
///
/// let filters = Filters::new().eq("species", "cat").eq("age", "11");
/// assert_eq!(filters.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pairs: Vec<(String, RowValues)>,
}

impl Filters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `column = value`.
    #[must_use]
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<RowValues>) -> Self {
        self.push(column, value);
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<RowValues>) {
        self.pairs.push((column.into(), value.into()));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RowValues)> {
        self.pairs.iter().map(|(c, v)| (c.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<RowValues>> FromIterator<(K, V)> for Filters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Ordered `column = value` assignments for an UPDATE's SET list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignments {
    pairs: Vec<(String, RowValues)>,
}

impl Assignments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `column = value`.
    #[must_use]
    pub fn set(mut self, column: impl Into<String>, value: impl Into<RowValues>) -> Self {
        self.push(column, value);
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<RowValues>) {
        self.pairs.push((column.into(), value.into()));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RowValues)> {
        self.pairs.iter().map(|(c, v)| (c.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<RowValues>> FromIterator<(K, V)> for Assignments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// `a=? AND b=?` plus the bound values, in filter order.
fn where_clause(filters: &Filters) -> (String, Vec<RowValues>) {
    let mut predicates = Vec::with_capacity(filters.len());
    let mut values = Vec::with_capacity(filters.len());
    for (column, value) in filters.iter() {
        predicates.push(format!("{column}=?"));
        values.push(value.clone());
    }
    (predicates.join(" AND "), values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn where_clause_keeps_insertion_order() {
        let filters = Filters::new().eq("species", "cat").eq("age", "11");
        let (clause, values) = where_clause(&filters);
        assert_eq!(clause, "species=? AND age=?");
        assert_eq!(values, vec![RowValues::from("cat"), RowValues::from("11")]);
    }

    #[test]
    fn filters_collect_from_pairs() {
        let filters: Filters = [("pets_id", RowValues::Int(3)), ("amount", "55g".into())]
            .into_iter()
            .collect();
        let columns: Vec<&str> = filters.iter().map(|(c, _)| c).collect();
        assert_eq!(columns, vec!["pets_id", "amount"]);
    }

    #[test]
    fn duplicate_columns_are_kept() {
        let filters = Filters::new().eq("age", "8").eq("age", "11");
        let (clause, values) = where_clause(&filters);
        assert_eq!(clause, "age=? AND age=?");
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn default_policy_rejects() {
        assert_eq!(QueryOptions::default().empty_filters, EmptyFilterPolicy::Reject);
        let opts = QueryOptions::default().with_empty_filters(EmptyFilterPolicy::Unfiltered);
        assert_eq!(opts.empty_filters, EmptyFilterPolicy::Unfiltered);
    }
}
