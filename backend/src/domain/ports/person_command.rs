//! Driving port for person write operations.
//!
//! Inbound adapters use this port to create, update and delete people
//! without depending on repository details.

use async_trait::async_trait;

use crate::domain::{MessageResponse, PersonDto, PersonId, PersonServiceError};

/// Driving port for person mutations.
///
/// # Examples
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use chrono::NaiveDate;
/// # use mockable::DefaultClock;
/// # use people_api::domain::ports::PersonCommand;
/// # use people_api::domain::{PersonDto, PersonService};
/// # use people_api::outbound::memory::InMemoryPersonRepository;
/// # async fn example() -> Result<(), people_api::domain::PersonServiceError> {
/// let service = PersonService::new(
///     Arc::new(InMemoryPersonRepository::default()),
///     Arc::new(DefaultClock),
/// );
/// let response = service
///     .create_person(PersonDto {
///         id: None,
///         first_name: "John".to_owned(),
///         last_name: "Doe".to_owned(),
///         cpf: "123".to_owned(),
///         birth_date: NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date"),
///         age: None,
///     })
///     .await?;
/// assert_eq!(response.message, "Created person with ID 1");
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonCommand: Send + Sync {
    /// Store a new person and acknowledge the assigned id.
    async fn create_person(&self, person: PersonDto)
    -> Result<MessageResponse, PersonServiceError>;

    /// Overwrite every mutable field of the person stored under `id`.
    ///
    /// `id` is authoritative; any id carried by `person` is ignored.
    async fn update_by_id(
        &self,
        id: PersonId,
        person: PersonDto,
    ) -> Result<MessageResponse, PersonServiceError>;

    /// Remove the person stored under `id`.
    async fn delete_by_id(&self, id: PersonId) -> Result<(), PersonServiceError>;
}
