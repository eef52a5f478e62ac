//! Driving port for puppy mutations, feedings and toy links.

use async_trait::async_trait;

use crate::domain::{
    Error, Feeding, FeedingDraft, Puppy, PuppyChanges, PuppyDraft, PuppyId, ToyId, UserId,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PuppiesCommand: Send + Sync {
    /// Create a puppy owned by `owner`.
    async fn create(&self, owner: &UserId, draft: PuppyDraft) -> Result<Puppy, Error>;

    /// Update an owned puppy in place; `NotFound` for non-owners.
    async fn update(
        &self,
        owner: &UserId,
        id: PuppyId,
        changes: PuppyChanges,
    ) -> Result<Puppy, Error>;

    /// Delete an owned puppy with its feedings and toy links; `NotFound` for
    /// non-owners.
    async fn delete(&self, owner: &UserId, id: PuppyId) -> Result<(), Error>;

    /// Record a feeding; `NotFound` when the puppy does not exist.
    async fn add_feeding(&self, id: PuppyId, draft: FeedingDraft) -> Result<Feeding, Error>;

    /// Give a toy to a puppy. Idempotent.
    async fn assoc_toy(&self, id: PuppyId, toy: ToyId) -> Result<(), Error>;

    /// Take a toy away from a puppy. Idempotent.
    async fn unassoc_toy(&self, id: PuppyId, toy: ToyId) -> Result<(), Error>;
}
