//! Port abstraction for toy persistence.
use async_trait::async_trait;

use crate::domain::{Toy, ToyDraft, ToyId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by toy repository adapters.
    pub enum ToyRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "toy repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "toy repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ToyRepository: Send + Sync {
    async fn create(&self, draft: &ToyDraft) -> Result<Toy, ToyRepositoryError>;

    async fn find_by_id(&self, id: ToyId) -> Result<Option<Toy>, ToyRepositoryError>;

    /// Every toy, ordered by name then id.
    async fn list_all(&self) -> Result<Vec<Toy>, ToyRepositoryError>;

    /// Overwrite name and colour; `None` when the toy does not exist.
    async fn update(&self, id: ToyId, draft: &ToyDraft) -> Result<Option<Toy>, ToyRepositoryError>;

    /// Delete the toy and every puppy link to it in one transaction.
    ///
    /// Returns `false` when the toy does not exist.
    async fn delete(&self, id: ToyId) -> Result<bool, ToyRepositoryError>;
}
