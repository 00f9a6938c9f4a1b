//! Transfer shapes exchanged with driving adapters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PersonId;

/// Person as seen by callers of the driving ports.
///
/// `id` is omitted on creation requests; `age` is only ever produced on the
/// way out and is ignored when mapping back to an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PersonId>,
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

/// Single-field acknowledgement returned by mutating use-cases.
///
/// # Examples
/// ```
/// use people_api::domain::{MessageResponse, PersonId};
///
/// let response = MessageResponse::created(PersonId::new(3));
/// assert_eq!(response.message, "Created person with ID 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Acknowledge a newly stored person.
    pub fn created(id: PersonId) -> Self {
        Self {
            message: format!("Created person with ID {id}"),
        }
    }

    /// Acknowledge an updated person.
    pub fn updated(id: PersonId) -> Self {
        Self {
            message: format!("Updated person with ID {id}"),
        }
    }
}
