//! PostgreSQL-backed `FeedingRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{FeedingRepository, FeedingRepositoryError};
use crate::domain::{Feeding, FeedingDraft, FeedingId, Meal, PuppyId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{FeedingRow, NewFeedingRow};
use super::pool::{DbPool, PoolError};
use super::schema::feedings;

/// Diesel-backed implementation of the feeding repository port.
#[derive(Clone)]
pub struct DieselFeedingRepository {
    pool: DbPool,
}

impl DieselFeedingRepository {
    /// Create a repository backed by `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> FeedingRepositoryError {
    map_pool_error(error, FeedingRepositoryError::connection)
}

fn map_diesel(error: diesel::result::Error) -> FeedingRepositoryError {
    map_diesel_error(
        error,
        FeedingRepositoryError::query,
        FeedingRepositoryError::connection,
    )
}

fn row_to_feeding(row: FeedingRow) -> Result<Feeding, FeedingRepositoryError> {
    let meal = Meal::from_code(&row.meal).ok_or_else(|| {
        FeedingRepositoryError::query(format!("unknown meal code {:?}", row.meal))
    })?;
    Ok(Feeding {
        id: FeedingId(row.id),
        puppy_id: PuppyId(row.puppy_id),
        date: row.date,
        meal,
    })
}

#[async_trait]
impl FeedingRepository for DieselFeedingRepository {
    async fn create(
        &self,
        puppy: PuppyId,
        draft: &FeedingDraft,
    ) -> Result<Feeding, FeedingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let row = NewFeedingRow {
            puppy_id: puppy.0,
            date: draft.date,
            meal: draft.meal.code(),
        };
        let stored = diesel::insert_into(feedings::table)
            .values(&row)
            .returning(FeedingRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel)?;
        row_to_feeding(stored)
    }

    async fn list_for_puppy(&self, puppy: PuppyId) -> Result<Vec<Feeding>, FeedingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let rows: Vec<FeedingRow> = feedings::table
            .filter(feedings::puppy_id.eq(puppy.0))
            .order((feedings::date.desc(), feedings::id.desc()))
            .select(FeedingRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel)?;
        rows.into_iter().map(row_to_feeding).collect()
    }
}
