//! Configuration for the coven API service.

use std::time::Duration;

/// The coven API endpoint that lists every current post.
pub const DEFAULT_ENDPOINT: &str = "http://api.coven.link/api/v1/posts";

/// Number of seconds to wait for the coven API before giving up.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where and how the coven API is contacted.
///
/// # Examples
///
/// ```
/// use coven::conf::{DEFAULT_ENDPOINT, ServiceConfig};
/// use std::time::Duration;
///
/// let config = ServiceConfig::default().timeout(Duration::from_secs(3));
/// assert_eq!(config.endpoint_url(), DEFAULT_ENDPOINT);
/// assert_eq!(config.request_timeout(), Duration::from_secs(3));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct ServiceConfig {
    endpoint: String,
    timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_ENDPOINT),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ServiceConfig {
    /// Sets the URL that posts are retrieved from.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the maximum time a request may take.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The URL that posts are retrieved from.
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint
    }

    /// The maximum time a request may take.
    pub fn request_timeout(&self) -> Duration {
        self.timeout
    }
}
