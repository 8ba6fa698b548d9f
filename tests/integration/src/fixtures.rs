//! Test fixtures and data generators

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use msgly_common::auth::{JwtService, PasswordService};
use msgly_core::traits::{MessageRepository, UserRepository};
use msgly_service::dto::{LoginRequest, RegisterRequest};
use msgly_service::{ServiceContext, ServiceContextBuilder};

use crate::memory::{InMemoryMessageRepository, InMemoryUserRepository};

/// Secret used to sign session tokens in tests
pub const TEST_JWT_SECRET: &str = "test-secret-key-for-integration-tests";

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A service context over fresh in-memory repositories
pub struct TestApp {
    pub ctx: ServiceContext,
    pub users: Arc<InMemoryUserRepository>,
    pub messages: Arc<InMemoryMessageRepository>,
    pub jwt: Arc<JwtService>,
}

/// Wire repositories into a context with the cheapest hash work factor
pub fn test_context(
    user_repo: Arc<dyn UserRepository>,
    message_repo: Arc<dyn MessageRepository>,
    jwt: Arc<JwtService>,
) -> ServiceContext {
    let password_service = PasswordService::new(1).expect("work factor 1 is valid");

    ServiceContextBuilder::new()
        .user_repo(user_repo)
        .message_repo(message_repo)
        .password_service(Arc::new(password_service))
        .session_issuer(jwt)
        .build()
        .expect("all dependencies are set")
}

impl TestApp {
    /// Build a context over empty in-memory repositories
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let messages = Arc::new(InMemoryMessageRepository::new(users.clone()));
        let jwt = Arc::new(JwtService::new(TEST_JWT_SECRET, None));
        let ctx = test_context(users.clone(), messages.clone(), jwt.clone());

        Self {
            ctx,
            users,
            messages,
            jwt,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Registration request with filler profile fields
pub fn register_request(username: &str, password: &str) -> RegisterRequest {
    let mut first_name = username.to_string();
    if let Some(first) = first_name.get_mut(0..1) {
        first.make_ascii_uppercase();
    }

    RegisterRequest {
        username: username.to_string(),
        password: password.to_string(),
        first_name,
        last_name: "Tester".to_string(),
        phone: format!("+1415555{:04}", unique_suffix() % 10_000),
    }
}

/// Registration request with a username unique to this test run
pub fn unique_register_request() -> RegisterRequest {
    register_request(&format!("user{}", unique_suffix()), "TestPass123!")
}

pub fn login_request(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}
