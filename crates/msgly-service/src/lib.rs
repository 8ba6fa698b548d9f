//! # msgly-service
//!
//! Application layer: the credential store, user directory, and message
//! queries, plus the register/login flow and the DTOs they speak.
//!
//! Every service borrows a [`ServiceContext`] holding the injected
//! repositories, the password service, and the session issuer.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, CredentialStore, ErrorKind, MessageQuery, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, UserDirectory,
};
