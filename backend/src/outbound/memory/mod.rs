//! In-memory adapter implementing every repository port.
//!
//! Used when no database URL is configured and by the integration tests. All
//! tables live behind one mutex so cascading deletes are atomic, matching the
//! transactional behaviour of the Diesel adapters.
//!
//! Toys sort by ASCII-lowercased name, then name, then id. The Diesel
//! adapters sort the same way because `toys.name` uses the `C` collation.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    FeedingRepository, FeedingRepositoryError, PuppyRepository, PuppyRepositoryError,
    ToyRepository, ToyRepositoryError, UserPersistenceError, UserRepository,
};
use crate::domain::{
    Feeding, FeedingDraft, FeedingId, Puppy, PuppyChanges, PuppyDraft, PuppyId, Toy, ToyDraft,
    ToyId, User, UserAccount, UserId, Username,
};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<UserAccount>,
    puppies: BTreeMap<PuppyId, Puppy>,
    toys: BTreeMap<ToyId, Toy>,
    feedings: BTreeMap<FeedingId, Feeding>,
    puppies_toys: BTreeSet<(PuppyId, ToyId)>,
    last_puppy_id: i64,
    last_toy_id: i64,
    last_feeding_id: i64,
}

impl Tables {
    fn sorted_toys(&self, mut predicate: impl FnMut(ToyId) -> bool) -> Vec<Toy> {
        let mut toys: Vec<Toy> = self
            .toys
            .values()
            .filter(|toy| predicate(toy.id))
            .cloned()
            .collect();
        toys.sort_by_cached_key(|toy| (toy.name.to_ascii_lowercase(), toy.name.clone(), toy.id));
        toys
    }
}

/// Shared in-memory store; clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

const POISONED: &str = "in-memory store lock poisoned";

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Option<MutexGuard<'_, Tables>> {
        self.tables.lock().ok()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, account: &UserAccount) -> Result<(), UserPersistenceError> {
        let mut tables = self
            .lock()
            .ok_or_else(|| UserPersistenceError::query(POISONED))?;
        let username = account.user.username();
        if tables
            .users
            .iter()
            .any(|existing| existing.user.username() == username)
        {
            return Err(UserPersistenceError::duplicate_username(username.as_str()));
        }
        tables.users.push(account.clone());
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        let tables = self
            .lock()
            .ok_or_else(|| UserPersistenceError::query(POISONED))?;
        Ok(tables
            .users
            .iter()
            .find(|account| account.user.username() == username)
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let tables = self
            .lock()
            .ok_or_else(|| UserPersistenceError::query(POISONED))?;
        Ok(tables
            .users
            .iter()
            .find(|account| account.user.id() == id)
            .map(|account| account.user.clone()))
    }
}

#[async_trait]
impl PuppyRepository for MemoryStore {
    async fn create(
        &self,
        owner: &UserId,
        draft: &PuppyDraft,
    ) -> Result<Puppy, PuppyRepositoryError> {
        let mut tables = self
            .lock()
            .ok_or_else(|| PuppyRepositoryError::query(POISONED))?;
        tables.last_puppy_id += 1;
        let puppy = Puppy {
            id: PuppyId(tables.last_puppy_id),
            owner: *owner,
            name: draft.name.clone(),
            breed: draft.breed.clone(),
            description: draft.description.clone(),
            age: draft.age,
        };
        tables.puppies.insert(puppy.id, puppy.clone());
        Ok(puppy)
    }

    async fn find_by_id(&self, id: PuppyId) -> Result<Option<Puppy>, PuppyRepositoryError> {
        let tables = self
            .lock()
            .ok_or_else(|| PuppyRepositoryError::query(POISONED))?;
        Ok(tables.puppies.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Puppy>, PuppyRepositoryError> {
        let tables = self
            .lock()
            .ok_or_else(|| PuppyRepositoryError::query(POISONED))?;
        Ok(tables
            .puppies
            .values()
            .filter(|puppy| puppy.owner == *owner)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: PuppyId,
        owner: &UserId,
        changes: &PuppyChanges,
    ) -> Result<Option<Puppy>, PuppyRepositoryError> {
        let mut tables = self
            .lock()
            .ok_or_else(|| PuppyRepositoryError::query(POISONED))?;
        let Some(puppy) = tables
            .puppies
            .get_mut(&id)
            .filter(|puppy| puppy.owner == *owner)
        else {
            return Ok(None);
        };
        puppy.breed = changes.breed.clone();
        puppy.description = changes.description.clone();
        puppy.age = changes.age;
        Ok(Some(puppy.clone()))
    }

    async fn delete(&self, id: PuppyId, owner: &UserId) -> Result<bool, PuppyRepositoryError> {
        let mut tables = self
            .lock()
            .ok_or_else(|| PuppyRepositoryError::query(POISONED))?;
        let owned = tables
            .puppies
            .get(&id)
            .is_some_and(|puppy| puppy.owner == *owner);
        if !owned {
            return Ok(false);
        }
        tables.puppies_toys.retain(|(puppy, _)| *puppy != id);
        tables.feedings.retain(|_, feeding| feeding.puppy_id != id);
        tables.puppies.remove(&id);
        Ok(true)
    }

    async fn add_toy(&self, id: PuppyId, toy: ToyId) -> Result<(), PuppyRepositoryError> {
        let mut tables = self
            .lock()
            .ok_or_else(|| PuppyRepositoryError::query(POISONED))?;
        if !tables.puppies.contains_key(&id) || !tables.toys.contains_key(&toy) {
            return Err(PuppyRepositoryError::query(
                "foreign key violation on puppies_toys",
            ));
        }
        tables.puppies_toys.insert((id, toy));
        Ok(())
    }

    async fn remove_toy(&self, id: PuppyId, toy: ToyId) -> Result<(), PuppyRepositoryError> {
        let mut tables = self
            .lock()
            .ok_or_else(|| PuppyRepositoryError::query(POISONED))?;
        tables.puppies_toys.remove(&(id, toy));
        Ok(())
    }

    async fn list_toys(&self, id: PuppyId) -> Result<Vec<Toy>, PuppyRepositoryError> {
        let tables = self
            .lock()
            .ok_or_else(|| PuppyRepositoryError::query(POISONED))?;
        Ok(tables.sorted_toys(|toy| tables.puppies_toys.contains(&(id, toy))))
    }

    async fn list_available_toys(&self, id: PuppyId) -> Result<Vec<Toy>, PuppyRepositoryError> {
        let tables = self
            .lock()
            .ok_or_else(|| PuppyRepositoryError::query(POISONED))?;
        Ok(tables.sorted_toys(|toy| !tables.puppies_toys.contains(&(id, toy))))
    }
}

#[async_trait]
impl ToyRepository for MemoryStore {
    async fn create(&self, draft: &ToyDraft) -> Result<Toy, ToyRepositoryError> {
        let mut tables = self
            .lock()
            .ok_or_else(|| ToyRepositoryError::query(POISONED))?;
        tables.last_toy_id += 1;
        let toy = Toy {
            id: ToyId(tables.last_toy_id),
            name: draft.name.clone(),
            color: draft.color.clone(),
        };
        tables.toys.insert(toy.id, toy.clone());
        Ok(toy)
    }

    async fn find_by_id(&self, id: ToyId) -> Result<Option<Toy>, ToyRepositoryError> {
        let tables = self
            .lock()
            .ok_or_else(|| ToyRepositoryError::query(POISONED))?;
        Ok(tables.toys.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Toy>, ToyRepositoryError> {
        let tables = self
            .lock()
            .ok_or_else(|| ToyRepositoryError::query(POISONED))?;
        Ok(tables.sorted_toys(|_| true))
    }

    async fn update(&self, id: ToyId, draft: &ToyDraft) -> Result<Option<Toy>, ToyRepositoryError> {
        let mut tables = self
            .lock()
            .ok_or_else(|| ToyRepositoryError::query(POISONED))?;
        Ok(tables.toys.get_mut(&id).map(|toy| {
            toy.name = draft.name.clone();
            toy.color = draft.color.clone();
            toy.clone()
        }))
    }

    async fn delete(&self, id: ToyId) -> Result<bool, ToyRepositoryError> {
        let mut tables = self
            .lock()
            .ok_or_else(|| ToyRepositoryError::query(POISONED))?;
        if tables.toys.remove(&id).is_none() {
            return Ok(false);
        }
        tables.puppies_toys.retain(|(_, toy)| *toy != id);
        Ok(true)
    }
}

#[async_trait]
impl FeedingRepository for MemoryStore {
    async fn create(
        &self,
        puppy: PuppyId,
        draft: &FeedingDraft,
    ) -> Result<Feeding, FeedingRepositoryError> {
        let mut tables = self
            .lock()
            .ok_or_else(|| FeedingRepositoryError::query(POISONED))?;
        if !tables.puppies.contains_key(&puppy) {
            return Err(FeedingRepositoryError::query(
                "foreign key violation on feedings",
            ));
        }
        tables.last_feeding_id += 1;
        let feeding = Feeding {
            id: FeedingId(tables.last_feeding_id),
            puppy_id: puppy,
            date: draft.date,
            meal: draft.meal,
        };
        tables.feedings.insert(feeding.id, feeding);
        Ok(feeding)
    }

    async fn list_for_puppy(&self, puppy: PuppyId) -> Result<Vec<Feeding>, FeedingRepositoryError> {
        let tables = self
            .lock()
            .ok_or_else(|| FeedingRepositoryError::query(POISONED))?;
        let mut feedings: Vec<Feeding> = tables
            .feedings
            .values()
            .filter(|feeding| feeding.puppy_id == puppy)
            .copied()
            .collect();
        feedings.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(feedings)
    }
}
