//! Repository traits - the persistence contract of the domain

mod repositories;

pub use repositories::{AccountRepository, LoginAttemptRepository, RepoResult};
