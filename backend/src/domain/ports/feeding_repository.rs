//! Port abstraction for the feeding log.
use async_trait::async_trait;

use crate::domain::{Feeding, FeedingDraft, PuppyId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by feeding repository adapters.
    pub enum FeedingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "feeding repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "feeding repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedingRepository: Send + Sync {
    /// Record a feeding; the caller has already checked the puppy exists.
    async fn create(
        &self,
        puppy: PuppyId,
        draft: &FeedingDraft,
    ) -> Result<Feeding, FeedingRepositoryError>;

    /// Feedings for one puppy, newest date first then highest id first.
    async fn list_for_puppy(&self, puppy: PuppyId) -> Result<Vec<Feeding>, FeedingRepositoryError>;
}
