use std::time::Duration;

/// The address of a locally running assistant service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Builder for [`HttpConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HttpConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl HttpConfigBuilder {
    /// Creates a builder with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom base URL.
    #[inline]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Fails requests that take longer than `timeout`.
    ///
    /// There is no timeout by default.
    #[inline]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> HttpConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        HttpConfig {
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout: self.timeout,
        }
    }
}

/// Configuration for the HTTP provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HttpConfig {
    pub(crate) base_url: String,
    pub(crate) timeout: Option<Duration>,
}

impl HttpConfig {
    /// Returns the base URL requests are sent to.
    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the URL of the chat endpoint.
    #[inline]
    pub fn chat_url(&self) -> String {
        format!("{}/chat", self.base_url)
    }
}
