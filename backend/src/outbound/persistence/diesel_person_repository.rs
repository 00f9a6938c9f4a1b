//! PostgreSQL-backed `PersonRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PersonRepository, PersonRepositoryError};
use crate::domain::{Person, PersonId};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPersonRow, PersonRow, PersonUpdate};
use super::pool::DbPool;
use super::schema::people;

/// Diesel-backed implementation of the person repository port.
#[derive(Clone)]
pub struct DieselPersonRepository {
    pool: DbPool,
}

impl DieselPersonRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn require_id(person: &Person) -> Result<PersonId, PersonRepositoryError> {
    person
        .id()
        .ok_or_else(|| PersonRepositoryError::query("person has not been stored"))
}

#[async_trait]
impl PersonRepository for DieselPersonRepository {
    async fn save(&self, person: &Person) -> Result<Person, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = match person.id() {
            None => diesel::insert_into(people::table)
                .values(NewPersonRow::from(person))
                .returning(PersonRow::as_returning())
                .get_result(&mut conn)
                .await
                .map_err(map_diesel_error)?,
            Some(id) => diesel::update(people::table.find(id.get()))
                .set(PersonUpdate::from(person))
                .returning(PersonRow::as_returning())
                .get_result(&mut conn)
                .await
                .map_err(map_diesel_error)?,
        };

        Ok(row.into())
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = people::table
            .find(id.get())
            .select(PersonRow::as_select())
            .first::<PersonRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Person::from))
    }

    async fn find_all(&self) -> Result<Vec<Person>, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PersonRow> = people::table
            .order(people::id.asc())
            .select(PersonRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn delete(&self, person: &Person) -> Result<(), PersonRepositoryError> {
        let id = require_id(person)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(people::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
