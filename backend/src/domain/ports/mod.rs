//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (repositories, password hashing) are implemented by outbound
//! adapters. Driving ports (queries, commands, login, signup) are implemented
//! by domain services and called by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod feeding_repository;
mod login_service;
mod password_hasher;
mod puppies_command;
mod puppies_query;
mod puppy_repository;
mod signup_service;
mod toy_repository;
mod toys_command;
mod toys_query;
mod user_repository;

#[cfg(test)]
pub use feeding_repository::MockFeedingRepository;
pub use feeding_repository::{FeedingRepository, FeedingRepositoryError};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use puppies_command::MockPuppiesCommand;
pub use puppies_command::PuppiesCommand;
#[cfg(test)]
pub use puppies_query::MockPuppiesQuery;
pub use puppies_query::PuppiesQuery;
#[cfg(test)]
pub use puppy_repository::MockPuppyRepository;
pub use puppy_repository::{PuppyRepository, PuppyRepositoryError};
#[cfg(test)]
pub use signup_service::MockSignupService;
pub use signup_service::SignupService;
#[cfg(test)]
pub use toy_repository::MockToyRepository;
pub use toy_repository::{ToyRepository, ToyRepositoryError};
#[cfg(test)]
pub use toys_command::MockToysCommand;
pub use toys_command::ToysCommand;
#[cfg(test)]
pub use toys_query::MockToysQuery;
pub use toys_query::ToysQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
