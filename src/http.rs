//! Services for communicating with APIs using HTTP.

use reqwest::StatusCode;
use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;
use thiserror::Error;

/// A general service for making HTTP calls.
///
/// Think of this as a proxy for a remote _service_, even though a
/// _client_ is used to talk to it. A service might not always be remote,
/// such as when the implementation is a deterministic service used for
/// testing.
pub trait HTTPService {
    /// Default blocking HTTP client that can be used to make HTTP requests.
    ///
    /// Every request made with the client gives up after `timeout`.
    fn client(timeout: Duration) -> HTTPResult<Client> {
        ClientBuilder::new()
            .user_agent(Self::user_agent())
            .timeout(timeout)
            .build()
            .map_err(HTTPError::Client)
    }

    /// An appropriate user agent to use when making HTTP requests.
    fn user_agent() -> String {
        format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

/// The result of an HTTP request.
pub type HTTPResult<T> = Result<T, HTTPError>;

/// Indicates an error has occurred when making an HTTP call.
#[derive(Debug, Error)]
pub enum HTTPError {
    /// The HTTP client could not be constructed.
    #[error("Could not create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// An error that occurred while making an HTTP request, including
    /// connection failures and timeouts.
    #[error("Error while making HTTP request: {0}")]
    Request(#[source] reqwest::Error),

    /// An error retrieving the body of a response.
    #[error("Error retrieving body of HTTP response: {0}")]
    Body(#[source] reqwest::Error),

    /// An unsuccessful HTTP status code in an HTTP response.
    #[error("Request returned HTTP {0}")]
    Http(StatusCode),
}
