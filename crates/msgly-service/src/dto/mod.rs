//! Data transfer objects for requests and responses
//!
//! This module provides:
//! - Request DTOs with validation
//! - Response DTOs for serializing outputs; none of them carries a password or hash
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{LoginRequest, RegisterRequest};
pub use responses::{
    AuthResponse, ReceivedMessageResponse, RegisteredUserResponse, SentMessageResponse,
    UserDetailResponse, UserSummaryResponse,
};
