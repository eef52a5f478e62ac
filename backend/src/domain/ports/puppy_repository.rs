//! Port abstraction for puppy persistence, including the toy relation.
use async_trait::async_trait;

use crate::domain::{Puppy, PuppyChanges, PuppyDraft, PuppyId, Toy, ToyId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by puppy repository adapters.
    pub enum PuppyRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "puppy repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "puppy repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PuppyRepository: Send + Sync {
    /// Insert a puppy owned by `owner` and return it with its new id.
    async fn create(&self, owner: &UserId, draft: &PuppyDraft)
    -> Result<Puppy, PuppyRepositoryError>;

    async fn find_by_id(&self, id: PuppyId) -> Result<Option<Puppy>, PuppyRepositoryError>;

    /// Puppies owned by `owner`, ordered by id.
    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Puppy>, PuppyRepositoryError>;

    /// Apply `changes` to the puppy when `owner` owns it.
    ///
    /// Returns `None` when no such puppy belongs to `owner`.
    async fn update(
        &self,
        id: PuppyId,
        owner: &UserId,
        changes: &PuppyChanges,
    ) -> Result<Option<Puppy>, PuppyRepositoryError>;

    /// Delete the puppy with its feedings and toy links in one transaction.
    ///
    /// Returns `false` when no such puppy belongs to `owner`.
    async fn delete(&self, id: PuppyId, owner: &UserId) -> Result<bool, PuppyRepositoryError>;

    /// Link a toy; linking an already linked toy is a no-op.
    async fn add_toy(&self, id: PuppyId, toy: ToyId) -> Result<(), PuppyRepositoryError>;

    /// Unlink a toy; unlinking an absent pair is a no-op.
    async fn remove_toy(&self, id: PuppyId, toy: ToyId) -> Result<(), PuppyRepositoryError>;

    /// Toys given to the puppy, ordered by name then id.
    async fn list_toys(&self, id: PuppyId) -> Result<Vec<Toy>, PuppyRepositoryError>;

    /// Toys not given to the puppy, ordered by name then id.
    async fn list_available_toys(&self, id: PuppyId) -> Result<Vec<Toy>, PuppyRepositoryError>;
}
