//! Meta resource client.

use std::sync::Arc;

use crate::context::Context;
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::Meta;

/// Client for public API metadata.
pub struct MetaClient {
    transport: Arc<HttpTransport>,
}

impl MetaClient {
    /// Create a new meta client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Fetch WakaTime's public IP addresses and their descriptions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body does not decode.
    pub async fn get(&self, ctx: &Context) -> Result<Meta, Error> {
        self.transport.fetch(ctx, "meta", None::<&()>).await
    }
}
