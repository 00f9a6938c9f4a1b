//! Domain primitives, services and ports.
//!
//! Purpose: Define the person entity, its transfer shapes and the use-cases
//! that operate on them. Inbound adapters speak to the domain through the
//! driving ports in [`ports`]; persistence adapters implement the driven
//! [`ports::PersonRepository`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Person / PersonId: stored person and its identifier.
//! - PersonDto / MessageResponse: shapes exchanged with driving adapters.
//! - PersonService: implementation of the person driving ports.

pub mod error;
pub mod person;
pub mod person_dto;
pub mod person_mapper;
pub mod person_service;
pub mod ports;

pub use self::error::{Error, ErrorCode, ErrorValidationError, PersonServiceError};
pub use self::person::{Person, PersonId};
pub use self::person_dto::{MessageResponse, PersonDto};
pub use self::person_mapper::PersonMapper;
pub use self::person_service::PersonService;

