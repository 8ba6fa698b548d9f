//! # msgly-core
//!
//! Domain layer containing the user and message entities, domain errors, and
//! the repository traits the storage layer implements.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{Message, MessageWithUser, User, UserSummary};
pub use error::DomainError;
pub use traits::{MessageRepository, RepoResult, UserRepository};
