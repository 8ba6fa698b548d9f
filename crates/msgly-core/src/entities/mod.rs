//! Domain entities - core business objects

mod message;
mod user;

pub use message::{Message, MessageWithUser};
pub use user::{now_micros, User, UserSummary};
