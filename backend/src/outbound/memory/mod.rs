//! Process-local person store.
//!
//! Backs the server when no database is configured and gives integration
//! tests a repository with the same contract as the Diesel adapter: ids are
//! assigned sequentially from 1 and listings come back in ascending id order.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{PersonRepository, PersonRepositoryError};
use crate::domain::{Person, PersonId};

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    people: BTreeMap<PersonId, Person>,
}

/// Mutex-guarded in-memory implementation of [`PersonRepository`].
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use people_api::domain::ports::PersonRepository;
/// use people_api::domain::{Person, PersonId};
/// use people_api::outbound::memory::InMemoryPersonRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryPersonRepository::default();
/// let birth_date = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
/// let saved = repo
///     .save(&Person::new("John", "Doe", "52998224725", birth_date))
///     .await
///     .expect("save succeeds");
/// assert_eq!(saved.id(), Some(PersonId::new(1)));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryPersonRepository {
    store: Mutex<Store>,
}

impl InMemoryPersonRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Store>, PersonRepositoryError> {
        self.store
            .lock()
            .map_err(|_| PersonRepositoryError::query("person store lock poisoned"))
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn save(&self, person: &Person) -> Result<Person, PersonRepositoryError> {
        let mut store = self.lock()?;
        let stored = match person.id() {
            None => {
                store.last_id += 1;
                person.clone().with_id(PersonId::new(store.last_id))
            }
            Some(id) if store.people.contains_key(&id) => person.clone(),
            Some(_) => return Err(PersonRepositoryError::query("record not found")),
        };
        let id = stored.id().ok_or_else(|| PersonRepositoryError::query("missing id"))?;
        store.people.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonRepositoryError> {
        Ok(self.lock()?.people.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Person>, PersonRepositoryError> {
        Ok(self.lock()?.people.values().cloned().collect())
    }

    async fn delete(&self, person: &Person) -> Result<(), PersonRepositoryError> {
        let id = person
            .id()
            .ok_or_else(|| PersonRepositoryError::query("person has not been stored"))?;
        self.lock()?.people.remove(&id);
        Ok(())
    }
}
