//! Goals resource client.

use std::sync::Arc;

use crate::context::Context;
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{Goal, Goals};

/// Client for a user's coding goals.
pub struct GoalsClient {
    transport: Arc<HttpTransport>,
}

impl GoalsClient {
    /// Create a new goals client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List all goals of `user` with their recent progress.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body does not decode.
    pub async fn get_all(&self, ctx: &Context, user: &str) -> Result<Goals, Error> {
        self.transport
            .fetch(ctx, &format!("users/{user}/goals"), None::<&()>)
            .await
    }

    /// Fetch one goal by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body does not decode.
    pub async fn get(&self, ctx: &Context, user: &str, goal: &str) -> Result<Goal, Error> {
        self.transport
            .fetch(ctx, &format!("users/{user}/goals/{goal}"), None::<&()>)
            .await
    }
}
