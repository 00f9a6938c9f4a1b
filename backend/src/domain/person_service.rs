//! Person domain service.
//!
//! Implements the [`PersonCommand`] and [`PersonQuery`] driving ports on top
//! of a [`PersonRepository`]. Every use-case performs at most one lookup and
//! one write, in that order.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    PersonCommand, PersonQuery, PersonRepository, PersonRepositoryError,
};
use crate::domain::{
    MessageResponse, Person, PersonDto, PersonId, PersonMapper, PersonServiceError,
};

/// Person service implementing the person driving ports.
#[derive(Clone)]
pub struct PersonService<R> {
    person_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> PersonService<R> {
    /// Create a new service over a person repository.
    ///
    /// `clock` supplies the reference date used to derive ages.
    pub fn new(person_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { person_repo, clock }
    }

    fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }
}

impl<R> PersonService<R>
where
    R: PersonRepository,
{
    async fn require_person(&self, id: PersonId) -> Result<Person, PersonServiceError> {
        self.person_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| PersonServiceError::not_found(id))
    }

    fn assigned_id(saved: &Person) -> Result<PersonId, PersonServiceError> {
        saved.id().ok_or_else(|| {
            PersonServiceError::from(PersonRepositoryError::query(
                "repository returned a person without an id",
            ))
        })
    }
}

#[async_trait]
impl<R> PersonCommand for PersonService<R>
where
    R: PersonRepository,
{
    async fn create_person(
        &self,
        person: PersonDto,
    ) -> Result<MessageResponse, PersonServiceError> {
        let entity = PersonMapper::to_entity(person).without_id();
        let saved = self.person_repo.save(&entity).await?;
        let id = Self::assigned_id(&saved)?;
        info!(person_id = %id, "created person");
        Ok(MessageResponse::created(id))
    }

    async fn update_by_id(
        &self,
        id: PersonId,
        person: PersonDto,
    ) -> Result<MessageResponse, PersonServiceError> {
        let mut stored = self.require_person(id).await?;
        if person.id.is_some_and(|supplied| supplied != id) {
            debug!(person_id = %id, "ignoring mismatched id in update payload");
        }
        stored.overwrite_from(PersonMapper::to_entity(person));
        self.person_repo.save(&stored).await?;
        info!(person_id = %id, "updated person");
        Ok(MessageResponse::updated(id))
    }

    async fn delete_by_id(&self, id: PersonId) -> Result<(), PersonServiceError> {
        let stored = self.require_person(id).await?;
        self.person_repo.delete(&stored).await?;
        info!(person_id = %id, "deleted person");
        Ok(())
    }
}

#[async_trait]
impl<R> PersonQuery for PersonService<R>
where
    R: PersonRepository,
{
    async fn list_all(&self) -> Result<Vec<PersonDto>, PersonServiceError> {
        let today = self.today();
        let people = self.person_repo.find_all().await?;
        Ok(people
            .into_iter()
            .map(|person| PersonMapper::to_dto(person, today))
            .collect())
    }

    async fn find_by_id(&self, id: PersonId) -> Result<PersonDto, PersonServiceError> {
        let person = self.require_person(id).await?;
        Ok(PersonMapper::to_dto(person, self.today()))
    }
}

#[cfg(test)]
#[path = "person_service_tests.rs"]
mod tests;
