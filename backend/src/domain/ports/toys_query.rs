//! Driving port for reading toys.

use async_trait::async_trait;

use crate::domain::{Error, Toy, ToyId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ToysQuery: Send + Sync {
    /// Every toy, ordered by name then id.
    async fn list(&self) -> Result<Vec<Toy>, Error>;

    /// One toy, or `NotFound`.
    async fn get(&self, id: ToyId) -> Result<Toy, Error>;
}
