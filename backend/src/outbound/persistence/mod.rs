//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Provides the Diesel implementation of the person repository port, backed
//! by `diesel-async` connections checked out of a `bb8` pool.
//!
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay private
//! to this module; only domain types cross the adapter boundary. Database
//! failures are mapped to [`crate::domain::ports::PersonRepositoryError`].
//!
//! # Example
//!
//! ```no_run
//! use people_api::outbound::persistence::{
//!     DbPool, DieselPersonRepository, PoolConfig, run_migrations,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "postgres://localhost/people";
//! run_migrations(url).await?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let repo = DieselPersonRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_person_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_person_repository::DieselPersonRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
