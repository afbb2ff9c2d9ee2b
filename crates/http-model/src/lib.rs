//! An assistant provider that talks to the remote service over HTTP.

#[macro_use]
extern crate tracing;

mod config;
mod response;

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use beautygpt_model::{
    AssistantProvider, ChatReply, ChatRequest, ErrorKind, ProviderError,
};
use reqwest::{Client, header};

pub use config::{DEFAULT_BASE_URL, HttpConfig, HttpConfigBuilder};

/// Error type for [`HttpProvider`].
#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error {
    fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl StdError for Error {}

impl ProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Assistant provider backed by the `/chat` HTTP endpoint.
#[derive(Clone, Debug)]
pub struct HttpProvider {
    client: Client,
    config: Arc<HttpConfig>,
}

impl HttpProvider {
    /// Creates a new `HttpProvider` with the given configuration.
    #[inline]
    pub fn new(config: HttpConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }
}

impl AssistantProvider for HttpProvider {
    type Error = Error;

    fn send_request(
        &self,
        req: &ChatRequest,
    ) -> impl Future<Output = Result<ChatReply, Self::Error>> + Send + 'static
    {
        let url = self.config.chat_url();
        trace!("posting to {url}, history length: {}", req.history.len());

        let mut builder = self
            .client
            .post(url)
            .header(header::ACCEPT, "application/json")
            .json(req);
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        let resp_fut = builder.send();

        async move {
            let resp = resp_fut.await.map_err(|err| {
                Error::new(format!("{err}"), ErrorKind::Transport)
            })?;

            let status = resp.status();
            if !status.is_success() {
                return Err(Error::new(
                    format!("server answered with {status}"),
                    ErrorKind::Status,
                ));
            }

            let content_type = resp
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("none")
                .to_owned();
            let body = resp.bytes().await.map_err(|err| {
                Error::new(format!("{err}"), ErrorKind::Transport)
            })?;
            trace!(
                "got {} bytes of reply, content type: {content_type}",
                body.len()
            );

            response::decode_reply(&body)
        }
    }
}
