//! Port abstraction for person persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Person, PersonId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by person repository adapters.
    pub enum PersonRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "person repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "person repository query failed: {message}",
    }
}

/// Port for storing and reading [`Person`] records.
///
/// Calls are awaited one at a time by the domain service; adapters own any
/// concurrency guarantees of the underlying store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Insert the person when it has no id, otherwise update the stored
    /// record. Returns the stored state, always carrying an id.
    async fn save(&self, person: &Person) -> Result<Person, PersonRepositoryError>;

    /// Fetch a person by identifier.
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonRepositoryError>;

    /// Fetch every stored person in ascending id order.
    async fn find_all(&self) -> Result<Vec<Person>, PersonRepositoryError>;

    /// Remove a stored person.
    async fn delete(&self, person: &Person) -> Result<(), PersonRepositoryError>;
}
