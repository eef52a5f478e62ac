//! Driving port for toy mutations.

use async_trait::async_trait;

use crate::domain::{Error, Toy, ToyDraft, ToyId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ToysCommand: Send + Sync {
    async fn create(&self, draft: ToyDraft) -> Result<Toy, Error>;

    /// Overwrite a toy; `NotFound` when it does not exist.
    async fn update(&self, id: ToyId, draft: ToyDraft) -> Result<Toy, Error>;

    /// Delete a toy and remove it from every puppy; `NotFound` when it does
    /// not exist.
    async fn delete(&self, id: ToyId) -> Result<(), Error>;
}
