//! # msgly-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `msgly-core`. It handles:
//!
//! - Connection pool management
//! - Schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Translation of store errors into `DomainError`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use msgly_db::{create_pool, run_migrations, PgUserRepository, PoolConfig};
//! use msgly_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PoolConfig::from_env()?;
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     let users = user_repo.list_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod migrate;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use migrate::run_migrations;
pub use pool::{create_pool, create_pool_from_env, PgPool, PoolConfig, PoolError};
pub use repositories::{PgMessageRepository, PgUserRepository};
