//! Column decoding helpers shared by the row wrappers.

use std::str::FromStr;

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Parse a text column into a domain enum or value type.
pub(crate) fn parse<T>(value: &str) -> Result<T, sqlx::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

/// `(id, name)` rows of `table` for the given ids, in one query.
///
/// An empty id list returns nothing without touching the database.
pub(crate) async fn names_by_id(
    pool: &SqlitePool,
    table: &'static str,
    ids: Vec<i64>,
) -> Result<Vec<(i64, String)>, sqlx::Error> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let mut builder =
        QueryBuilder::<Sqlite>::new(format!("SELECT id, name FROM {table} WHERE id IN ("));
    let mut separated = builder.separated(", ");
    for id in ids {
        separated.push_bind(id);
    }
    separated.push_unseparated(")");
    builder.build_query_as().fetch_all(pool).await
}
