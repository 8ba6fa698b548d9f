//! Model to entity mappers
//!
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `UserInsert`: Prepare entity data for insertion

mod message;
mod user;

pub use user::UserInsert;
