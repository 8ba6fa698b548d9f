//! Service implementations
//!
//! `CredentialStore`, `UserDirectory` and `MessageQuery` are the public
//! operations of the core; `AuthService` composes them into the
//! register and login flows.

pub mod auth;
pub mod context;
pub mod credential;
pub mod directory;
pub mod error;
pub mod messages;

pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use credential::CredentialStore;
pub use directory::UserDirectory;
pub use error::{ErrorKind, ServiceError, ServiceResult};
pub use messages::MessageQuery;
