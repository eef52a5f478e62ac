//! Driving port for reading puppies.
//!
//! Listing is scoped to the caller; the detail view is reachable by any
//! authenticated user who knows the id.

use async_trait::async_trait;

use crate::domain::{Error, Puppy, PuppyDetail, PuppyId, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PuppiesQuery: Send + Sync {
    /// Puppies owned by `owner`, ordered by id.
    async fn list_owned(&self, owner: &UserId) -> Result<Vec<Puppy>, Error>;

    /// The detail projection for one puppy, or `NotFound`.
    async fn detail(&self, id: PuppyId) -> Result<PuppyDetail, Error>;

    /// A puppy owned by `owner`, or `NotFound` when it is missing or owned by
    /// someone else.
    async fn find_owned(&self, owner: &UserId, id: PuppyId) -> Result<Puppy, Error>;
}
