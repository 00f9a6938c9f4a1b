//! HTTP inbound adapter exposing REST endpoints.

pub(crate) mod cpf;
pub mod error;
pub mod health;
pub mod people;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;
