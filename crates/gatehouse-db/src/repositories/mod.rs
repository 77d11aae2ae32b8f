//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! gatehouse-core. Atomicity requirements (atomic uniqueness check + insert,
//! lost-update-free failure counting) are met with single SQL statements.

mod account;
mod error;
mod login_attempt;

pub use account::PgAccountRepository;
pub use login_attempt::PgLoginAttemptRepository;
