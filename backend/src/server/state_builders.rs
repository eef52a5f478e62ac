//! Builders for HTTP state from repository adapters.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::warn;

use puppy_collector::domain::ports::{
    FeedingRepository, PuppyRepository, ToyRepository, UserRepository,
};
use puppy_collector::domain::{AccountService, PuppyService, ToyService};
use puppy_collector::inbound::http::state::HttpState;
use puppy_collector::outbound::memory::MemoryStore;
use puppy_collector::outbound::password::Argon2PasswordHasher;
use puppy_collector::outbound::persistence::{
    DbPool, DieselFeedingRepository, DieselPuppyRepository, DieselToyRepository,
    DieselUserRepository,
};

use super::ServerConfig;

/// Repository adapters backing one [`HttpState`].
struct Repositories<U, P, T, F> {
    users: Arc<U>,
    puppies: Arc<P>,
    toys: Arc<T>,
    feedings: Arc<F>,
}

/// Wire the domain services over `repos` and expose them as HTTP ports.
fn state_from_repositories<U, P, T, F>(
    repos: Repositories<U, P, T, F>,
    clock: Arc<dyn Clock>,
) -> HttpState
where
    U: UserRepository + 'static,
    P: PuppyRepository + 'static,
    T: ToyRepository + 'static,
    F: FeedingRepository + 'static,
{
    let Repositories {
        users,
        puppies,
        toys,
        feedings,
    } = repos;
    let accounts = Arc::new(AccountService::new(users, Arc::new(Argon2PasswordHasher)));
    let puppy_service = Arc::new(PuppyService::new(puppies, toys.clone(), feedings, clock));
    let toy_service = Arc::new(ToyService::new(toys));

    HttpState {
        login: accounts.clone(),
        signup: accounts,
        puppies: puppy_service.clone(),
        puppies_query: puppy_service,
        toys: toy_service.clone(),
        toys_query: toy_service,
    }
}

fn diesel_state(pool: &DbPool) -> HttpState {
    state_from_repositories(
        Repositories {
            users: Arc::new(DieselUserRepository::new(pool.clone())),
            puppies: Arc::new(DieselPuppyRepository::new(pool.clone())),
            toys: Arc::new(DieselToyRepository::new(pool.clone())),
            feedings: Arc::new(DieselFeedingRepository::new(pool.clone())),
        },
        Arc::new(DefaultClock),
    )
}

/// Build HTTP state over a fresh in-memory store.
pub(crate) fn build_memory_state() -> HttpState {
    let store = Arc::new(MemoryStore::new());
    state_from_repositories(
        Repositories {
            users: store.clone(),
            puppies: store.clone(),
            toys: store.clone(),
            feedings: store,
        },
        Arc::new(DefaultClock),
    )
}

/// Build the shared HTTP state, preferring Diesel when a pool is configured.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => diesel_state(pool),
        None => {
            warn!("no database configured; data lives in memory and is lost on restart");
            build_memory_state()
        }
    };
    web::Data::new(state)
}
