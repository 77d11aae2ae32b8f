//! Database models - SQLx-compatible structs for PostgreSQL tables

mod account;
mod login_attempt;

pub use account::AccountModel;
pub use login_attempt::LoginAttemptModel;
