//! Conversion between [`PersonDto`] and [`Person`].

use chrono::NaiveDate;

use super::{Person, PersonDto};

/// Stateless field-by-field mapper.
///
/// The mapper never reads a clock: callers pass the reference date used to
/// derive `age`, keeping both directions pure.
#[derive(Debug, Default, Clone, Copy)]
pub struct PersonMapper;

impl PersonMapper {
    /// Build an entity from a transfer object. `age` is discarded.
    pub fn to_entity(dto: PersonDto) -> Person {
        let PersonDto {
            id,
            first_name,
            last_name,
            cpf,
            birth_date,
            age: _,
        } = dto;
        let person = Person::new(first_name, last_name, cpf, birth_date);
        match id {
            Some(id) => person.with_id(id),
            None => person,
        }
    }

    /// Build a transfer object, deriving `age` as of `today`.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use people_api::domain::{Person, PersonId, PersonMapper};
    ///
    /// let born = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
    /// let today = NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date");
    /// let person = Person::new("John", "Doe", "123", born).with_id(PersonId::new(1));
    ///
    /// let dto = PersonMapper::to_dto(person, today);
    /// assert_eq!(dto.id, Some(PersonId::new(1)));
    /// assert_eq!(dto.age, Some(26));
    /// ```
    pub fn to_dto(person: Person, today: NaiveDate) -> PersonDto {
        let age = person.age_on(today);
        let id = person.id();
        let Person {
            first_name,
            last_name,
            cpf,
            birth_date,
            ..
        } = person;
        PersonDto {
            id,
            first_name,
            last_name,
            cpf,
            birth_date,
            age: Some(age),
        }
    }
}
