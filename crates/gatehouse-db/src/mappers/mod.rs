//! Entity to model mappers
//!
//! Conversions from database models to domain entities. Inserts bind entity
//! fields directly, so only the read direction needs mapping.

mod account;
mod login_attempt;
