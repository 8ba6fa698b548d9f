//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in msgly-core.

mod error;
mod message;
mod user;

pub use message::PgMessageRepository;
pub use user::PgUserRepository;
