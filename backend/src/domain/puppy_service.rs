//! Puppy domain services.
//!
//! [`PuppyService`] implements the puppy query and command driving ports. It
//! enforces ownership on edits and deletes, checks that referenced puppies and
//! toys exist, and derives the `fed_for_today` flag from the clock.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{
    FeedingRepository, FeedingRepositoryError, PuppiesCommand, PuppiesQuery, PuppyRepository,
    PuppyRepositoryError, ToyRepository, ToyRepositoryError,
};
use crate::domain::{
    fed_for_day, Error, Feeding, FeedingDraft, Puppy, PuppyChanges, PuppyDetail, PuppyDraft,
    PuppyId, ToyId, UserId,
};

fn map_puppy_error(error: PuppyRepositoryError) -> Error {
    match error {
        PuppyRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("puppy repository unavailable: {message}"))
        }
        PuppyRepositoryError::Query { message } => {
            Error::internal(format!("puppy repository error: {message}"))
        }
    }
}

fn map_toy_error(error: ToyRepositoryError) -> Error {
    match error {
        ToyRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("toy repository unavailable: {message}"))
        }
        ToyRepositoryError::Query { message } => {
            Error::internal(format!("toy repository error: {message}"))
        }
    }
}

fn map_feeding_error(error: FeedingRepositoryError) -> Error {
    match error {
        FeedingRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("feeding repository unavailable: {message}"))
        }
        FeedingRepositoryError::Query { message } => {
            Error::internal(format!("feeding repository error: {message}"))
        }
    }
}

fn puppy_not_found(id: PuppyId) -> Error {
    Error::not_found(format!("puppy {id} not found"))
}

/// Puppy service implementing the puppy driving ports.
#[derive(Clone)]
pub struct PuppyService<P, T, F> {
    puppies: Arc<P>,
    toys: Arc<T>,
    feedings: Arc<F>,
    clock: Arc<dyn Clock>,
}

impl<P, T, F> PuppyService<P, T, F> {
    /// Build the service; `clock` supplies "today" for the fed flag.
    pub fn new(puppies: Arc<P>, toys: Arc<T>, feedings: Arc<F>, clock: Arc<dyn Clock>) -> Self {
        Self {
            puppies,
            toys,
            feedings,
            clock,
        }
    }
}

impl<P, T, F> PuppyService<P, T, F>
where
    P: PuppyRepository,
{
    async fn require_puppy(&self, id: PuppyId) -> Result<Puppy, Error> {
        self.puppies
            .find_by_id(id)
            .await
            .map_err(map_puppy_error)?
            .ok_or_else(|| puppy_not_found(id))
    }
}

#[async_trait]
impl<P, T, F> PuppiesQuery for PuppyService<P, T, F>
where
    P: PuppyRepository,
    T: ToyRepository,
    F: FeedingRepository,
{
    async fn list_owned(&self, owner: &UserId) -> Result<Vec<Puppy>, Error> {
        self.puppies
            .list_by_owner(owner)
            .await
            .map_err(map_puppy_error)
    }

    async fn detail(&self, id: PuppyId) -> Result<PuppyDetail, Error> {
        let puppy = self.require_puppy(id).await?;
        let feedings = self
            .feedings
            .list_for_puppy(id)
            .await
            .map_err(map_feeding_error)?;
        let toys = self.puppies.list_toys(id).await.map_err(map_puppy_error)?;
        let available_toys = self
            .puppies
            .list_available_toys(id)
            .await
            .map_err(map_puppy_error)?;
        let fed_for_today = fed_for_day(&feedings, self.clock.utc().date_naive());

        Ok(PuppyDetail {
            puppy,
            feedings,
            toys,
            available_toys,
            fed_for_today,
        })
    }

    async fn find_owned(&self, owner: &UserId, id: PuppyId) -> Result<Puppy, Error> {
        let puppy = self.require_puppy(id).await?;
        if puppy.owner != *owner {
            return Err(puppy_not_found(id));
        }
        Ok(puppy)
    }
}

#[async_trait]
impl<P, T, F> PuppiesCommand for PuppyService<P, T, F>
where
    P: PuppyRepository,
    T: ToyRepository,
    F: FeedingRepository,
{
    async fn create(&self, owner: &UserId, draft: PuppyDraft) -> Result<Puppy, Error> {
        let puppy = self
            .puppies
            .create(owner, &draft)
            .await
            .map_err(map_puppy_error)?;
        info!(puppy_id = %puppy.id, owner = %owner, "puppy created");
        Ok(puppy)
    }

    async fn update(
        &self,
        owner: &UserId,
        id: PuppyId,
        changes: PuppyChanges,
    ) -> Result<Puppy, Error> {
        self.puppies
            .update(id, owner, &changes)
            .await
            .map_err(map_puppy_error)?
            .ok_or_else(|| puppy_not_found(id))
    }

    async fn delete(&self, owner: &UserId, id: PuppyId) -> Result<(), Error> {
        let deleted = self
            .puppies
            .delete(id, owner)
            .await
            .map_err(map_puppy_error)?;
        if !deleted {
            return Err(puppy_not_found(id));
        }
        info!(puppy_id = %id, owner = %owner, "puppy deleted");
        Ok(())
    }

    async fn add_feeding(&self, id: PuppyId, draft: FeedingDraft) -> Result<Feeding, Error> {
        self.require_puppy(id).await?;
        self.feedings
            .create(id, &draft)
            .await
            .map_err(map_feeding_error)
    }

    async fn assoc_toy(&self, id: PuppyId, toy: ToyId) -> Result<(), Error> {
        self.require_puppy(id).await?;
        let exists = self
            .toys
            .find_by_id(toy)
            .await
            .map_err(map_toy_error)?
            .is_some();
        if !exists {
            return Err(Error::not_found(format!("toy {toy} not found")));
        }
        self.puppies
            .add_toy(id, toy)
            .await
            .map_err(map_puppy_error)
    }

    async fn unassoc_toy(&self, id: PuppyId, toy: ToyId) -> Result<(), Error> {
        self.require_puppy(id).await?;
        self.puppies
            .remove_toy(id, toy)
            .await
            .map_err(map_puppy_error)
    }
}

#[cfg(test)]
#[path = "puppy_service_tests.rs"]
mod tests;
