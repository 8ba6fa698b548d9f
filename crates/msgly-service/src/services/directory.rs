//! User directory - read-only public profiles

use tracing::instrument;

use crate::dto::{UserDetailResponse, UserSummaryResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Lists and fetches public user profiles
pub struct UserDirectory<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserDirectory<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Summary of every registered user, ordered by username
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<UserSummaryResponse>> {
        let users = self.ctx.user_repo().list_all().await?;
        Ok(users.into_iter().map(UserSummaryResponse::from).collect())
    }

    /// Full public profile of one user
    #[instrument(skip(self))]
    pub async fn get(&self, username: &str) -> ServiceResult<UserDetailResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", username))?;

        Ok(UserDetailResponse::from(&user))
    }
}
