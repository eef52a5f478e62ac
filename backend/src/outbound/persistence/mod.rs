//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) never
//! leave this module. Connections come from a `bb8` pool through
//! `diesel-async`, and every database failure is mapped to the owning port's
//! `Connection` or `Query` error.
//!
//! # Example
//!
//! ```ignore
//! use puppy_collector::outbound::persistence::{DbPool, PoolConfig, DieselPuppyRepository};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/puppies")).await?;
//! let repo = DieselPuppyRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_feeding_repository;
mod diesel_puppy_repository;
mod diesel_toy_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_feeding_repository::DieselFeedingRepository;
pub use diesel_puppy_repository::DieselPuppyRepository;
pub use diesel_toy_repository::DieselToyRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::run_pending_migrations;
pub use pool::{DbPool, PoolConfig, PoolError};
