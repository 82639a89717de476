use crate::error::PetMealsDbError;
use crate::types::RowValues;

use super::{
    Assignments, EmptyFilterPolicy, Filters, QueryAndParams, QueryOptions, where_clause,
};

/// `UPDATE <table> SET a = ?, b = ? WHERE id = ?`
///
/// Assignment values are bound first, then `id`. The key column is always the literal `id`.
///
/// # Errors
/// Returns `PetMealsDbError::EmptyAssignments` if there is nothing to set.
pub fn update(
    table: &str,
    id: impl Into<RowValues>,
    assignments: &Assignments,
) -> Result<QueryAndParams, PetMealsDbError> {
    if assignments.is_empty() {
        return Err(PetMealsDbError::EmptyAssignments {
            table: table.to_string(),
        });
    }
    let mut set_list = Vec::with_capacity(assignments.len());
    let mut params = Vec::with_capacity(assignments.len() + 1);
    for (column, value) in assignments.iter() {
        set_list.push(format!("{column} = ?"));
        params.push(value.clone());
    }
    params.push(id.into());
    Ok(QueryAndParams::write(
        format!("UPDATE {table} SET {} WHERE id = ?", set_list.join(", ")),
        params,
    ))
}

/// `DELETE FROM <table> WHERE a=? AND b=?`
///
/// # Errors
/// Returns `PetMealsDbError::EmptyFilter` when `filters` is empty under
/// `EmptyFilterPolicy::Reject`.
pub fn delete_where(
    table: &str,
    filters: &Filters,
    options: QueryOptions,
) -> Result<QueryAndParams, PetMealsDbError> {
    if filters.is_empty() {
        return match options.empty_filters {
            EmptyFilterPolicy::Reject => Err(PetMealsDbError::EmptyFilter {
                operation: "delete_where",
                table: table.to_string(),
            }),
            EmptyFilterPolicy::Unfiltered => Ok(delete_all(table)),
        };
    }
    let (clause, params) = where_clause(filters);
    Ok(QueryAndParams::write(
        format!("DELETE FROM {table} WHERE {clause}"),
        params,
    ))
}

/// `DELETE FROM <table>`
#[must_use]
pub fn delete_all(table: &str) -> QueryAndParams {
    QueryAndParams::write(format!("DELETE FROM {table}"), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_binds_assignments_then_id() {
        let q = update("meals", 1, &Assignments::new().set("amount", "55g")).expect("built");
        assert_eq!(q.query, "UPDATE meals SET amount = ? WHERE id = ?");
        assert_eq!(q.params, vec![RowValues::from("55g"), RowValues::Int(1)]);
        assert!(!q.is_read_only);
    }

    #[test]
    fn update_joins_multiple_assignments() {
        let assignments = Assignments::new()
            .set("type_of_meal", "breakfast")
            .set("amount", "60g");
        let q = update("meals", 4, &assignments).expect("built");
        assert_eq!(
            q.query,
            "UPDATE meals SET type_of_meal = ?, amount = ? WHERE id = ?"
        );
        assert_eq!(q.params.len(), 3);
    }

    #[test]
    fn update_without_assignments_fails() {
        let err = update("meals", 1, &Assignments::new()).err().expect("rejected");
        assert!(matches!(err, PetMealsDbError::EmptyAssignments { ref table } if table == "meals"));
    }

    #[test]
    fn builds_delete_statements() {
        let filters = Filters::new().eq("pet_food_name", "Fitmin Medium Light");
        let q = delete_where("meals", &filters, QueryOptions::default()).expect("built");
        assert_eq!(q.query, "DELETE FROM meals WHERE pet_food_name=?");
        assert_eq!(q.params, vec![RowValues::from("Fitmin Medium Light")]);

        assert_eq!(delete_all("meals").query, "DELETE FROM meals");
    }

    #[test]
    fn empty_delete_follows_policy() {
        assert!(matches!(
            delete_where("meals", &Filters::new(), QueryOptions::default()),
            Err(PetMealsDbError::EmptyFilter { operation: "delete_where", .. })
        ));
        let opts = QueryOptions::default().with_empty_filters(EmptyFilterPolicy::Unfiltered);
        let q = delete_where("meals", &Filters::new(), opts).expect("fallback");
        assert_eq!(q.query, "DELETE FROM meals");
    }
}
