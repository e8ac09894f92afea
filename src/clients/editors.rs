//! Editors resource client.

use std::sync::Arc;

use crate::context::Context;
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{Editors, EditorsGetOptions};

/// Client for the list of supported editors.
pub struct EditorsClient {
    transport: Arc<HttpTransport>,
}

impl EditorsClient {
    /// Create a new editors client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List editor plugins.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body does not decode.
    pub async fn get(
        &self,
        ctx: &Context,
        options: Option<&EditorsGetOptions>,
    ) -> Result<Editors, Error> {
        self.transport.fetch(ctx, "editors", options).await
    }
}
