//! Person entity and identifier.
//!
//! A [`Person`] starts life without an identifier; the persistence adapter
//! assigns one on first save and it never changes afterwards. Age is not part
//! of the entity: it is derived from the birth date whenever it is read.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier assigned to a person by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(i64);

impl PersonId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for PersonId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Person record as persisted by the repository port.
///
/// ## Invariants
/// - `id` is `None` until the repository stores the record, then stable.
/// - Mutations through [`Person::overwrite_from`] never touch `id`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use people_api::domain::{Person, PersonId};
///
/// let birth_date = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
/// let person = Person::new("John", "Doe", "123", birth_date);
/// assert!(person.id().is_none());
///
/// let stored = person.with_id(PersonId::new(1));
/// assert_eq!(stored.id(), Some(PersonId::new(1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: Option<PersonId>,
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
}

impl Person {
    /// Build a person that has not been persisted yet.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        cpf: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            cpf: cpf.into(),
            birth_date,
        }
    }

    /// Attach the identifier assigned by the persistence layer.
    #[must_use]
    pub fn with_id(mut self, id: PersonId) -> Self {
        self.id = Some(id);
        self
    }

    /// Drop any identifier so the repository inserts a fresh record.
    #[must_use]
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    /// Identifier, present once the person has been stored.
    pub fn id(&self) -> Option<PersonId> {
        self.id
    }

    /// Copy every mutable field from `source`, keeping this record's id.
    pub fn overwrite_from(&mut self, source: Self) {
        let Self {
            id: _,
            first_name,
            last_name,
            cpf,
            birth_date,
        } = source;
        self.first_name = first_name;
        self.last_name = last_name;
        self.cpf = cpf;
        self.birth_date = birth_date;
    }

    /// Completed years between the birth date and `today`.
    ///
    /// Birth dates in the future yield zero.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use people_api::domain::Person;
    ///
    /// let born = NaiveDate::from_ymd_opt(2000, 6, 15).expect("valid date");
    /// let person = Person::new("Ada", "Lovelace", "123", born);
    ///
    /// let eve = NaiveDate::from_ymd_opt(2026, 6, 14).expect("valid date");
    /// let birthday = NaiveDate::from_ymd_opt(2026, 6, 15).expect("valid date");
    /// assert_eq!(person.age_on(eve), 25);
    /// assert_eq!(person.age_on(birthday), 26);
    /// ```
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.birth_date).unwrap_or(0)
    }
}
