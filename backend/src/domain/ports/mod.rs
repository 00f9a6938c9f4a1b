//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`PersonCommand`], [`PersonQuery`]) are implemented by
//! domain services and called by inbound adapters. The driven port
//! ([`PersonRepository`]) is implemented by outbound adapters. Each trait
//! exposes strongly typed errors so adapters map their failures into
//! predictable variants instead of returning `anyhow::Result`.

mod macros;
pub(crate) use macros::define_port_error;

mod person_command;
mod person_query;
mod person_repository;

#[cfg(test)]
pub use person_command::MockPersonCommand;
pub use person_command::PersonCommand;
#[cfg(test)]
pub use person_query::MockPersonQuery;
pub use person_query::PersonQuery;
#[cfg(test)]
pub use person_repository::MockPersonRepository;
pub use person_repository::{PersonRepository, PersonRepositoryError};
