//! # gatehouse-db
//!
//! Database layer implementing the repository traits from `gatehouse-core`
//! with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ model mappers
//! - Repository implementations (plus mutexed in-memory equivalents for
//!   hermetic tests and local development)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gatehouse_core::{AccountRepository, LockoutPolicy};
//! use gatehouse_db::pool::{create_pool, DatabaseConfig};
//! use gatehouse_db::PgAccountRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let accounts = PgAccountRepository::new(pool, LockoutPolicy::default());
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryAccountRepository, MemoryLoginAttemptRepository};
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{PgAccountRepository, PgLoginAttemptRepository};
