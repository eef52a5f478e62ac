//! PostgreSQL-backed `ToyRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection as _, RunQueryDsl};

use crate::domain::ports::{ToyRepository, ToyRepositoryError};
use crate::domain::{Toy, ToyDraft, ToyId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ToyRow, ToyValues};
use super::pool::{DbPool, PoolError};
use super::schema::{puppies_toys, toys};

/// Diesel-backed implementation of the toy repository port.
#[derive(Clone)]
pub struct DieselToyRepository {
    pool: DbPool,
}

impl DieselToyRepository {
    /// Create a repository backed by `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> ToyRepositoryError {
    map_pool_error(error, ToyRepositoryError::connection)
}

fn map_diesel(error: diesel::result::Error) -> ToyRepositoryError {
    map_diesel_error(
        error,
        ToyRepositoryError::query,
        ToyRepositoryError::connection,
    )
}

diesel::define_sql_function! {
    /// ASCII-only under the `C` collation of `toys.name`.
    fn lower(text: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

pub(super) fn row_to_toy(row: ToyRow) -> Toy {
    Toy {
        id: ToyId(row.id),
        name: row.name,
        color: row.color,
    }
}

fn values(draft: &ToyDraft) -> ToyValues<'_> {
    ToyValues {
        name: draft.name.as_str(),
        color: draft.color.as_str(),
    }
}

#[async_trait]
impl ToyRepository for DieselToyRepository {
    async fn create(&self, draft: &ToyDraft) -> Result<Toy, ToyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        diesel::insert_into(toys::table)
            .values(values(draft))
            .returning(ToyRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(row_to_toy)
            .map_err(map_diesel)
    }

    async fn find_by_id(&self, id: ToyId) -> Result<Option<Toy>, ToyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        toys::table
            .find(id.0)
            .select(ToyRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map(|row| row.map(row_to_toy))
            .map_err(map_diesel)
    }

    async fn list_all(&self) -> Result<Vec<Toy>, ToyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let rows: Vec<ToyRow> = toys::table
            .order((lower(toys::name).asc(), toys::name.asc(), toys::id.asc()))
            .select(ToyRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel)?;
        Ok(rows.into_iter().map(row_to_toy).collect())
    }

    async fn update(&self, id: ToyId, draft: &ToyDraft) -> Result<Option<Toy>, ToyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        diesel::update(toys::table.find(id.0))
            .set(values(draft))
            .returning(ToyRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map(|row| row.map(row_to_toy))
            .map_err(map_diesel)
    }

    async fn delete(&self, id: ToyId) -> Result<bool, ToyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let toy_id = id.0;
        let removed = conn
            .transaction::<usize, diesel::result::Error, _>(|conn| {
                async move {
                    diesel::delete(puppies_toys::table.filter(puppies_toys::toy_id.eq(toy_id)))
                        .execute(conn)
                        .await?;
                    diesel::delete(toys::table.find(toy_id)).execute(conn).await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel)?;
        Ok(removed > 0)
    }
}
