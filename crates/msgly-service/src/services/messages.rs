//! Message query - sent and received message views
//!
//! Each message is joined with the profile of the other party. Results are
//! ordered by `sent_at`, then by id. A username with no messages, or one that
//! does not exist, yields an empty list.

use tracing::instrument;

use crate::dto::{ReceivedMessageResponse, SentMessageResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Read-only projections over the message store
pub struct MessageQuery<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageQuery<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Messages sent by `username`, each with its recipient under `to_user`
    #[instrument(skip(self))]
    pub async fn messages_from(&self, username: &str) -> ServiceResult<Vec<SentMessageResponse>> {
        let rows = self.ctx.message_repo().find_sent_by(username).await?;
        Ok(rows.into_iter().map(SentMessageResponse::from).collect())
    }

    /// Messages addressed to `username`, each with its sender under `from_user`
    #[instrument(skip(self))]
    pub async fn messages_to(&self, username: &str) -> ServiceResult<Vec<ReceivedMessageResponse>> {
        let rows = self.ctx.message_repo().find_received_by(username).await?;
        Ok(rows.into_iter().map(ReceivedMessageResponse::from).collect())
    }
}
