//! In-memory repository implementations
//!
//! Mutexed equivalents of the PostgreSQL repositories, for hermetic tests
//! and local development without a database. Every operation runs under one
//! lock, which gives the same atomicity the SQL implementations get from
//! single-statement updates.

mod account;
mod login_attempt;

pub use account::MemoryAccountRepository;
pub use login_attempt::MemoryLoginAttemptRepository;
