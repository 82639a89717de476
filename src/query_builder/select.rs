use crate::error::PetMealsDbError;

use super::{EmptyFilterPolicy, Filters, QueryAndParams, QueryOptions, where_clause};

/// `SELECT * FROM <table>`
#[must_use]
pub fn select_all(table: &str) -> QueryAndParams {
    QueryAndParams::read(format!("SELECT * FROM {table}"), Vec::new())
}

/// `SELECT * FROM <table> WHERE a=? AND b=?`
///
/// # Errors
/// Returns `PetMealsDbError::EmptyFilter` when `filters` is empty under
/// `EmptyFilterPolicy::Reject`.
pub fn select_where(
    table: &str,
    filters: &Filters,
    options: QueryOptions,
) -> Result<QueryAndParams, PetMealsDbError> {
    if filters.is_empty() {
        return match options.empty_filters {
            EmptyFilterPolicy::Reject => Err(PetMealsDbError::EmptyFilter {
                operation: "select_where",
                table: table.to_string(),
            }),
            EmptyFilterPolicy::Unfiltered => Ok(select_all(table)),
        };
    }
    let (clause, params) = where_clause(filters);
    Ok(QueryAndParams::read(
        format!("SELECT * FROM {table} WHERE {clause}"),
        params,
    ))
}
