//! Durations resource client.

use std::sync::Arc;

use crate::context::Context;
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{Durations, DurationsGetOptions};

/// Client for a user's coding sessions.
pub struct DurationsClient {
    transport: Arc<HttpTransport>,
}

impl DurationsClient {
    /// Create a new durations client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Coding sessions of one day, grouped by project unless `slice_by` says
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body does not decode.
    pub async fn get(
        &self,
        ctx: &Context,
        user: &str,
        options: Option<&DurationsGetOptions>,
    ) -> Result<Durations, Error> {
        self.transport
            .fetch(ctx, &format!("users/{user}/durations"), options)
            .await
    }
}
