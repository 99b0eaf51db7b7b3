//! Dynamic UPDATE statement construction for partial profile updates.
//!
//! The builder walks a fixed set of updatable columns and emits a single
//! parameterized statement touching exactly the fields present in the request
//! body. Column names come only from that fixed set; values are always bound
//! parameters and never interpolated into the statement text.

use chrono::NaiveDate;

use super::models::ProfileUpdate;

/// A value destined for a bound parameter slot.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Int(i32),
    Date(NaiveDate),
}

/// A ready-to-execute UPDATE: statement text plus its binds in placeholder
/// order. The final bind is always the `user_name` for the WHERE clause.
#[derive(Debug, Clone)]
pub struct UpdateStatement {
    pub sql: String,
    pub binds: Vec<BindValue>,
    /// Columns named in the SET clause, in placeholder order.
    pub columns: Vec<&'static str>,
}

/// Builds the UPDATE for `user_name` from the fields present in `update`.
///
/// Returns `None` when no updatable field is present; callers must reject the
/// request before touching the database in that case, since an empty SET
/// clause is not a valid statement.
pub fn build_update(user_name: &str, update: &ProfileUpdate) -> Option<UpdateStatement> {
    let mut columns: Vec<&'static str> = Vec::new();
    let mut binds: Vec<BindValue> = Vec::new();

    if let Some(value) = &update.display_name {
        columns.push("display_name");
        binds.push(BindValue::Text(value.clone()));
    }
    if let Some(value) = &update.description {
        columns.push("description");
        binds.push(BindValue::Text(value.clone()));
    }
    if let Some(value) = &update.gender {
        columns.push("gender");
        binds.push(BindValue::Text(value.clone()));
    }
    if let Some(age) = update.age {
        columns.push("age");
        binds.push(BindValue::Int(age));
    }
    if let Some(value) = &update.country {
        columns.push("country");
        binds.push(BindValue::Text(value.clone()));
    }
    if let Some(value) = &update.theme {
        columns.push("theme");
        binds.push(BindValue::Text(value.clone()));
    }
    if let Some(member_since) = update.member_since {
        columns.push("member_since");
        binds.push(BindValue::Date(member_since));
    }

    if columns.is_empty() {
        return None;
    }

    let set_clause = columns
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{} = ${}", column, i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "UPDATE user_profiles SET {} WHERE user_name = ${}",
        set_clause,
        columns.len() + 1
    );
    binds.push(BindValue::Text(user_name.to_string()));

    Some(UpdateStatement { sql, binds, columns })
}
