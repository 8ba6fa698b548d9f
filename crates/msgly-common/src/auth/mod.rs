//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, JwtService, SessionIssuer, MAX_TOKEN_EXPIRY};
pub use password::{hash_password, verify_password, PasswordService};
