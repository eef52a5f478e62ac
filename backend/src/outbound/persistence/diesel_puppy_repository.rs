//! PostgreSQL-backed `PuppyRepository` implementation using Diesel ORM.
//!
//! Owns the `puppies` table and the `puppies_toys` relation. Deletes remove
//! dependent feedings and relation rows explicitly inside one transaction.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection as _, RunQueryDsl};

use crate::domain::ports::{PuppyRepository, PuppyRepositoryError};
use crate::domain::{Puppy, PuppyChanges, PuppyDraft, PuppyId, Toy, ToyId, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::diesel_toy_repository::{lower, row_to_toy};
use super::models::{NewPuppyRow, PuppyRow, PuppyToyRow, PuppyUpdate, ToyRow};
use super::pool::{DbPool, PoolError};
use super::schema::{feedings, puppies, puppies_toys, toys};

/// Diesel-backed implementation of the puppy repository port.
#[derive(Clone)]
pub struct DieselPuppyRepository {
    pool: DbPool,
}

impl DieselPuppyRepository {
    /// Create a repository backed by `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> PuppyRepositoryError {
    map_pool_error(error, PuppyRepositoryError::connection)
}

fn map_diesel(error: diesel::result::Error) -> PuppyRepositoryError {
    map_diesel_error(
        error,
        PuppyRepositoryError::query,
        PuppyRepositoryError::connection,
    )
}

fn row_to_puppy(row: PuppyRow) -> Puppy {
    Puppy {
        id: PuppyId(row.id),
        owner: UserId::from_uuid(row.user_id),
        name: row.name,
        breed: row.breed,
        description: row.description,
        age: row.age,
    }
}

#[async_trait]
impl PuppyRepository for DieselPuppyRepository {
    async fn create(
        &self,
        owner: &UserId,
        draft: &PuppyDraft,
    ) -> Result<Puppy, PuppyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let row = NewPuppyRow {
            user_id: *owner.as_uuid(),
            name: draft.name.as_str(),
            breed: draft.breed.as_str(),
            description: draft.description.as_str(),
            age: draft.age,
        };
        diesel::insert_into(puppies::table)
            .values(&row)
            .returning(PuppyRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(row_to_puppy)
            .map_err(map_diesel)
    }

    async fn find_by_id(&self, id: PuppyId) -> Result<Option<Puppy>, PuppyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        puppies::table
            .find(id.0)
            .select(PuppyRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map(|row| row.map(row_to_puppy))
            .map_err(map_diesel)
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Puppy>, PuppyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let rows: Vec<PuppyRow> = puppies::table
            .filter(puppies::user_id.eq(owner.as_uuid()))
            .order(puppies::id.asc())
            .select(PuppyRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel)?;
        Ok(rows.into_iter().map(row_to_puppy).collect())
    }

    async fn update(
        &self,
        id: PuppyId,
        owner: &UserId,
        changes: &PuppyChanges,
    ) -> Result<Option<Puppy>, PuppyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let update = PuppyUpdate {
            breed: changes.breed.as_str(),
            description: changes.description.as_str(),
            age: changes.age,
        };
        diesel::update(
            puppies::table
                .filter(puppies::id.eq(id.0))
                .filter(puppies::user_id.eq(owner.as_uuid())),
        )
        .set(&update)
        .returning(PuppyRow::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map(|row| row.map(row_to_puppy))
        .map_err(map_diesel)
    }

    async fn delete(&self, id: PuppyId, owner: &UserId) -> Result<bool, PuppyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let puppy_id = id.0;
        let owner_id = *owner.as_uuid();
        conn.transaction::<bool, diesel::result::Error, _>(|conn| {
            async move {
                let owned: Option<i64> = puppies::table
                    .filter(puppies::id.eq(puppy_id))
                    .filter(puppies::user_id.eq(owner_id))
                    .select(puppies::id)
                    .for_update()
                    .first(conn)
                    .await
                    .optional()?;
                if owned.is_none() {
                    return Ok(false);
                }
                diesel::delete(puppies_toys::table.filter(puppies_toys::puppy_id.eq(puppy_id)))
                    .execute(conn)
                    .await?;
                diesel::delete(feedings::table.filter(feedings::puppy_id.eq(puppy_id)))
                    .execute(conn)
                    .await?;
                diesel::delete(puppies::table.find(puppy_id))
                    .execute(conn)
                    .await?;
                Ok(true)
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel)
    }

    async fn add_toy(&self, id: PuppyId, toy: ToyId) -> Result<(), PuppyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        diesel::insert_into(puppies_toys::table)
            .values(PuppyToyRow {
                puppy_id: id.0,
                toy_id: toy.0,
            })
            .on_conflict_do_nothing()
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel)
    }

    async fn remove_toy(&self, id: PuppyId, toy: ToyId) -> Result<(), PuppyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        diesel::delete(puppies_toys::table.find((id.0, toy.0)))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel)
    }

    async fn list_toys(&self, id: PuppyId) -> Result<Vec<Toy>, PuppyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let rows: Vec<ToyRow> = toys::table
            .inner_join(puppies_toys::table)
            .filter(puppies_toys::puppy_id.eq(id.0))
            .order((lower(toys::name).asc(), toys::name.asc(), toys::id.asc()))
            .select(ToyRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel)?;
        Ok(rows.into_iter().map(row_to_toy).collect())
    }

    async fn list_available_toys(&self, id: PuppyId) -> Result<Vec<Toy>, PuppyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let given = puppies_toys::table
            .filter(puppies_toys::puppy_id.eq(id.0))
            .select(puppies_toys::toy_id);
        let rows: Vec<ToyRow> = toys::table
            .filter(toys::id.ne_all(given))
            .order((lower(toys::name).asc(), toys::name.asc(), toys::id.asc()))
            .select(ToyRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel)?;
        Ok(rows.into_iter().map(row_to_toy).collect())
    }
}
