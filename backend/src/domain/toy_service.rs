//! Toy domain services.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{ToyRepository, ToyRepositoryError, ToysCommand, ToysQuery};
use crate::domain::{Error, Toy, ToyDraft, ToyId};

fn map_repository_error(error: ToyRepositoryError) -> Error {
    match error {
        ToyRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("toy repository unavailable: {message}"))
        }
        ToyRepositoryError::Query { message } => {
            Error::internal(format!("toy repository error: {message}"))
        }
    }
}

fn toy_not_found(id: ToyId) -> Error {
    Error::not_found(format!("toy {id} not found"))
}

/// Toy service implementing the toy query and command driving ports.
#[derive(Clone)]
pub struct ToyService<R> {
    toys: Arc<R>,
}

impl<R> ToyService<R> {
    /// Build the service over a toy store.
    pub fn new(toys: Arc<R>) -> Self {
        Self { toys }
    }
}

#[async_trait]
impl<R> ToysQuery for ToyService<R>
where
    R: ToyRepository,
{
    async fn list(&self) -> Result<Vec<Toy>, Error> {
        self.toys.list_all().await.map_err(map_repository_error)
    }

    async fn get(&self, id: ToyId) -> Result<Toy, Error> {
        self.toys
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| toy_not_found(id))
    }
}

#[async_trait]
impl<R> ToysCommand for ToyService<R>
where
    R: ToyRepository,
{
    async fn create(&self, draft: ToyDraft) -> Result<Toy, Error> {
        let toy = self
            .toys
            .create(&draft)
            .await
            .map_err(map_repository_error)?;
        info!(toy_id = %toy.id, "toy created");
        Ok(toy)
    }

    async fn update(&self, id: ToyId, draft: ToyDraft) -> Result<Toy, Error> {
        self.toys
            .update(id, &draft)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| toy_not_found(id))
    }

    async fn delete(&self, id: ToyId) -> Result<(), Error> {
        if !self.toys.delete(id).await.map_err(map_repository_error)? {
            return Err(toy_not_found(id));
        }
        info!(toy_id = %id, "toy deleted");
        Ok(())
    }
}
