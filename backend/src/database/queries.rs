//! Database query functions (Data Access Objects).
//!
//! This module centralizes all direct database operations: one function per
//! statement, each taking the connection acquired by the handler for the
//! duration of the request.

use sqlx::PgConnection;

use super::models::{NewProfile, UserProfile};
use super::statement::{BindValue, UpdateStatement};

pub async fn list_profiles(conn: &mut PgConnection) -> Result<Vec<UserProfile>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM user_profiles ORDER BY user_name")
        .fetch_all(conn)
        .await
}

pub async fn find_profile(
    conn: &mut PgConnection,
    user_name: &str,
) -> Result<Option<UserProfile>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM user_profiles WHERE user_name = $1")
        .bind(user_name)
        .fetch_optional(conn)
        .await
}

pub async fn insert_profile(
    conn: &mut PgConnection,
    profile: &NewProfile,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO user_profiles \
         (user_name, display_name, description, gender, age, country, theme, member_since) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(&profile.user_name)
    .bind(&profile.display_name)
    .bind(&profile.description)
    .bind(&profile.gender)
    .bind(profile.age)
    .bind(&profile.country)
    .bind(&profile.theme)
    .bind(profile.member_since)
    .execute(conn)
    .await?;
    Ok(())
}

/// Executes a prebuilt partial update, returning the number of rows affected.
pub async fn update_profile(
    conn: &mut PgConnection,
    statement: &UpdateStatement,
) -> Result<u64, sqlx::Error> {
    let mut query = sqlx::query(&statement.sql);
    for bind in &statement.binds {
        query = match bind {
            BindValue::Text(value) => query.bind(value),
            BindValue::Int(value) => query.bind(value),
            BindValue::Date(value) => query.bind(value),
        };
    }
    Ok(query.execute(conn).await?.rows_affected())
}

pub async fn delete_profile(
    conn: &mut PgConnection,
    user_name: &str,
) -> Result<u64, sqlx::Error> {
    Ok(sqlx::query("DELETE FROM user_profiles WHERE user_name = $1")
        .bind(user_name)
        .execute(conn)
        .await?
        .rows_affected())
}
