//! Driving port for person read operations.

use async_trait::async_trait;

use crate::domain::{PersonDto, PersonId, PersonServiceError};

/// Driving port for person lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonQuery: Send + Sync {
    /// Every stored person, in the repository's natural order.
    async fn list_all(&self) -> Result<Vec<PersonDto>, PersonServiceError>;

    /// The person stored under `id`, or [`PersonServiceError::NotFound`].
    async fn find_by_id(&self, id: PersonId) -> Result<PersonDto, PersonServiceError>;
}
