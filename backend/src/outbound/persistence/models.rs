//! Internal Diesel row structs for the `people` table.
//!
//! These types never leave the persistence layer; the repository converts
//! them to and from [`crate::domain::Person`].

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::{Person, PersonId};

use super::schema::people;

/// Row struct for reading from the people table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = people)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PersonRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        let PersonRow {
            id,
            first_name,
            last_name,
            cpf,
            birth_date,
        } = row;
        Person::new(first_name, last_name, cpf, birth_date).with_id(PersonId::new(id))
    }
}

/// Insertable struct for creating new person records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = people)]
pub(crate) struct NewPersonRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub cpf: &'a str,
    pub birth_date: NaiveDate,
}

/// Changeset struct for overwriting an existing person record.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = people)]
pub(crate) struct PersonUpdate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub cpf: &'a str,
    pub birth_date: NaiveDate,
}

impl<'a> From<&'a Person> for NewPersonRow<'a> {
    fn from(person: &'a Person) -> Self {
        Self {
            first_name: &person.first_name,
            last_name: &person.last_name,
            cpf: &person.cpf,
            birth_date: person.birth_date,
        }
    }
}

impl<'a> From<&'a Person> for PersonUpdate<'a> {
    fn from(person: &'a Person) -> Self {
        Self {
            first_name: &person.first_name,
            last_name: &person.last_name,
            cpf: &person.cpf,
            birth_date: person.birth_date,
        }
    }
}
