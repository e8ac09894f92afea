//! HTTP transport for the WakaTime client.
//!
//! Builds requests against the configured base URL, runs them under a
//! caller-supplied [`Context`], classifies the status code and hands back the
//! buffered response for decoding.

use std::borrow::Cow;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Request, RequestBuilder, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::context::Context;
use crate::error::Error;

/// Whether a status code counts as success (200 through 399).
///
/// Status codes the API documents:
///
/// * 200 OK, 201 Created, 202 Accepted (stats may still be computing)
/// * 400 Bad Request, 401 Unauthorized, 403 Forbidden, 404 Not Found
/// * 429 Too Many Requests (keep under ~10 requests per second over 5 minutes)
/// * 500 Server Error
#[must_use]
pub fn is_success_status(status: u16) -> bool {
    (200..=399).contains(&status)
}

/// A fully buffered HTTP response.
///
/// Returned on success and attached to [`Error::HttpStatus`] on failure, so
/// headers stay inspectable either way.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    url: Url,
    body: Vec<u8>,
}

impl ApiResponse {
    /// Assemble a response from its parts.
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap, url: Url, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            url,
            body,
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Final URL of the response, after redirects.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, with invalid UTF-8 replaced.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_slice(&self.body).map_err(Error::from)
    }
}

/// Shared HTTP transport.
///
/// Holds the immutable client configuration and the `reqwest` connection
/// pool. One instance is shared by every resource client.
#[derive(Debug)]
pub struct HttpTransport {
    base_url: Url,
    user_agent: Option<HeaderValue>,
    default_headers: Option<HeaderMap>,
    client: Client,
}

impl HttpTransport {
    /// Create a transport with its own `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Configuration(e.to_string()))?;

        Self::with_client(config, client)
    }

    /// Create a transport on top of a caller-owned `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or user agent is invalid.
    pub fn with_client(config: &ClientConfig, client: Client) -> Result<Self, Error> {
        let mut base_url = Url::parse(&config.base_url).map_err(|e| {
            Error::Configuration(format!("invalid base URL {:?}: {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Configuration(format!(
                "base URL {:?} cannot carry a path",
                config.base_url
            )));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let user_agent = if config.user_agent.is_empty() {
            None
        } else {
            Some(HeaderValue::from_str(&config.user_agent).map_err(|e| {
                Error::Configuration(format!("invalid user agent {:?}: {e}", config.user_agent))
            })?)
        };

        Ok(Self {
            base_url,
            user_agent,
            default_headers: config.default_headers.clone(),
            client,
        })
    }

    /// Build a request for `path` relative to the base URL.
    ///
    /// A leading `/` on `path` is ignored. When `body` is given it is encoded
    /// as newline-terminated JSON and `Content-Type: application/json` is set.
    /// Default headers are applied first, then the content type, then the
    /// user agent, which is left out entirely when configured empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Request`] for an invalid method and
    /// [`Error::Encoding`] when the body cannot be serialized.
    pub fn new_request<B>(
        &self,
        method: &str,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request, Error>
    where
        B: Serialize + ?Sized,
    {
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|e| Error::Request(format!("invalid HTTP method {method:?}: {e}")))?;

        let mut request = Request::new(method, self.join(path));

        if let Some(headers) = &self.default_headers {
            *request.headers_mut() = headers.clone();
        }

        if let Some(body) = body {
            let mut buf = serde_json::to_vec(body).map_err(|e| Error::Encoding(e.to_string()))?;
            buf.push(b'\n');
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(buf.into());
        }

        if let Some(user_agent) = &self.user_agent {
            request.headers_mut().insert(USER_AGENT, user_agent.clone());
        }

        Ok(request)
    }

    /// Encode `options` into the request's query string.
    ///
    /// Fields are written in declaration order; fields that serialize to
    /// nothing (skipped `None`s) do not appear at all.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if `options` is not a flat struct or map.
    pub fn apply_query<Q>(&self, request: Request, options: &Q) -> Result<Request, Error>
    where
        Q: Serialize + ?Sized,
    {
        let request = RequestBuilder::from_parts(self.client.clone(), request)
            .query(options)
            .build()
            .map_err(|e| Error::Encoding(e.to_string()))?;
        trace!(query = request.url().query().unwrap_or(""), "applied query options");
        Ok(request)
    }

    /// Send a request and buffer its response.
    ///
    /// The request is abandoned as soon as `ctx` is done, and a context that
    /// is already done fails before anything is sent. When the transport
    /// fails after the context finished, the context error is reported.
    ///
    /// # Errors
    ///
    /// * [`Error::Configuration`] when no context is given
    /// * [`Error::Context`] when the context is cancelled or expires
    /// * [`Error::Transport`] on network failure
    /// * [`Error::HttpStatus`] for status codes outside 200..=399
    pub async fn execute(
        &self,
        ctx: Option<&Context>,
        request: Request,
    ) -> Result<ApiResponse, Error> {
        let Some(ctx) = ctx else {
            return Err(Error::Configuration("context is nil".to_string()));
        };
        if let Some(err) = ctx.err() {
            return Err(err.into());
        }

        debug!(method = %request.method(), url = %request.url(), "sending request");
        let started = Instant::now();

        let response = tokio::select! {
            biased;
            err = ctx.done() => return Err(err.into()),
            result = self.client.execute(request) => {
                result.map_err(|e| transport_error(ctx, e))?
            }
        };

        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().clone();

        let body = tokio::select! {
            biased;
            err = ctx.done() => return Err(err.into()),
            result = response.bytes() => result.map_err(|e| transport_error(ctx, e))?,
        };

        debug!(
            status = status.as_u16(),
            elapsed_ms = elapsed_ms(started.elapsed()),
            "received response"
        );

        let response = ApiResponse::new(status, headers, url, body.to_vec());
        if !is_success_status(status.as_u16()) {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                response: Box::new(response),
            });
        }

        Ok(response)
    }

    /// GET `path` with optional query options and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Propagates any error from building, executing or decoding.
    pub async fn fetch<T, Q>(
        &self,
        ctx: &Context,
        path: &str,
        query: Option<&Q>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let mut request = self.new_request("GET", path, None::<&()>)?;
        if let Some(query) = query {
            request = self.apply_query(request, query)?;
        }

        self.execute(Some(ctx), request).await?.json()
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the user agent, `None` when the header is suppressed.
    #[must_use]
    pub fn user_agent(&self) -> Option<&HeaderValue> {
        self.user_agent.as_ref()
    }

    fn join(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}{}", self.base_url.path(), path.trim_start_matches('/'));
        url.set_path(&joined);
        url
    }
}

fn transport_error(ctx: &Context, err: reqwest::Error) -> Error {
    ctx.err().map_or(Error::Transport(err), Error::from)
}

fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
