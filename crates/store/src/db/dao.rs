//! Fetch helpers shared by the entity DAOs.
//!
//! Each DAO builds its query with `sqlx::query_as` and hands it to one of
//! these helpers; the row-to-domain projection happens afterwards via the
//! per-entity `TryFrom<*Row>` conversions.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgConnection, Postgres};

use super::RepositoryError;

/// Execute a query expected to return zero or one row.
pub(crate) async fn fetch_one<'q, T>(
    conn: &mut PgConnection,
    query: QueryAs<'q, Postgres, T, PgArguments>,
) -> Result<Option<T>, RepositoryError>
where
    T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
{
    Ok(query.fetch_optional(conn).await?)
}

/// Execute a query returning any number of rows.
///
/// Rows come back in whatever order the engine produces; no ordering is
/// guaranteed beyond what the query itself specifies.
pub(crate) async fn fetch_all<'q, T>(
    conn: &mut PgConnection,
    query: QueryAs<'q, Postgres, T, PgArguments>,
) -> Result<Vec<T>, RepositoryError>
where
    T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
{
    Ok(query.fetch_all(conn).await?)
}
