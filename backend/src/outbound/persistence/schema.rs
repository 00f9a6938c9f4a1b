//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` when a migration changes the table shape.

diesel::table! {
    /// People registry.
    ///
    /// `id` is assigned by the `BIGSERIAL` sequence on insert.
    people (id) {
        id -> Int8,
        #[max_length = 100]
        first_name -> Varchar,
        #[max_length = 100]
        last_name -> Varchar,
        /// Formatted or bare CPF (up to 14 characters).
        #[max_length = 14]
        cpf -> Varchar,
        birth_date -> Date,
    }
}
