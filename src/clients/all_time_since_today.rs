//! All-time-since-today resource client.

use std::sync::Arc;

use serde::Serialize;

use crate::context::Context;
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::AllTimeSinceToday;

#[derive(Serialize)]
struct Query<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<&'a str>,
}

/// Client for a user's all-time coding total.
pub struct AllTimeSinceTodayClient {
    transport: Arc<HttpTransport>,
}

impl AllTimeSinceTodayClient {
    /// Create a new all-time-since-today client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Total coding time since the account was created.
    ///
    /// `user` is a user id or `current`. When `project` is set the total is
    /// restricted to that project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body does not decode.
    pub async fn get(
        &self,
        ctx: &Context,
        user: &str,
        project: Option<&str>,
    ) -> Result<AllTimeSinceToday, Error> {
        self.transport
            .fetch(
                ctx,
                &format!("users/{user}/all_time_since_today"),
                Some(&Query { project }),
            )
            .await
    }
}
