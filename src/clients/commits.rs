//! Commits resource client.

use std::sync::Arc;

use serde::Serialize;

use crate::context::Context;
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{Commit, Commits, CommitsGetOptions};

#[derive(Serialize)]
struct BranchQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<&'a str>,
}

/// Client for commits of a project's linked repository.
pub struct CommitsClient {
    transport: Arc<HttpTransport>,
}

impl CommitsClient {
    /// Create a new commits client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List commits of `project` with the coding time spent on each.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body does not decode.
    pub async fn get_all(
        &self,
        ctx: &Context,
        user: &str,
        project: &str,
        options: Option<&CommitsGetOptions>,
    ) -> Result<Commits, Error> {
        self.transport
            .fetch(ctx, &format!("users/{user}/projects/{project}/commits"), options)
            .await
    }

    /// Fetch a single commit by hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body does not decode.
    pub async fn get(
        &self,
        ctx: &Context,
        user: &str,
        project: &str,
        hash: &str,
        branch: Option<&str>,
    ) -> Result<Commit, Error> {
        self.transport
            .fetch(
                ctx,
                &format!("users/{user}/projects/{project}/commits/{hash}"),
                Some(&BranchQuery { branch }),
            )
            .await
    }
}
