//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{PersonCommand, PersonQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub people: Arc<dyn PersonCommand>,
    pub people_query: Arc<dyn PersonQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use mockable::DefaultClock;
    /// use people_api::domain::PersonService;
    /// use people_api::inbound::http::state::HttpState;
    /// use people_api::outbound::memory::InMemoryPersonRepository;
    ///
    /// let service = Arc::new(PersonService::new(
    ///     Arc::new(InMemoryPersonRepository::default()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let _state = HttpState::new(service.clone(), service);
    /// ```
    pub fn new(people: Arc<dyn PersonCommand>, people_query: Arc<dyn PersonQuery>) -> Self {
        Self {
            people,
            people_query,
        }
    }
}
