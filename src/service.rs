// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Ian Ferguson <ian@labmarie.com>

//! HTTP connector for the coven API.
//!
//! Service structures in this module provide a low-level way to talk to
//! the coven API: they retrieve the raw response body and leave decoding
//! to [`Coven`](crate::client::Coven).

use crate::conf::ServiceConfig;
use crate::http::{HTTPError, HTTPResult, HTTPService};
use log::debug;
use reqwest::blocking::Client;

/// A service for retrieving posts from coven.
///
/// Using this trait, clients can implement different ways of connecting
/// to the coven API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
pub trait Service {
    /// Performs a single GET request for the current list of posts and
    /// returns the raw body.
    fn get_posts(&self) -> HTTPResult<String>;
}

/// A service that contacts the coven API directly.
#[derive(Debug)]
pub struct CovenService {
    client: Client,
    config: ServiceConfig,
}

impl CovenService {
    /// Creates a new coven service that talks to the endpoint named in
    /// `config`.
    ///
    /// Fails if an HTTP client cannot be created.
    pub fn new(config: ServiceConfig) -> HTTPResult<Self> {
        let client = Self::client(config.request_timeout())?;
        Ok(Self { client, config })
    }

    /// The URL posts are retrieved from.
    pub fn uri(&self) -> &str {
        self.config.endpoint_url()
    }
}

impl HTTPService for CovenService {}

impl Service for CovenService {
    fn get_posts(&self) -> HTTPResult<String> {
        debug!("GET {}", self.uri());
        let resp = self
            .client
            .get(self.uri())
            .send()
            .map_err(HTTPError::Request)?;

        let status = resp.status();
        debug!("{} returned HTTP {status}", self.uri());
        if !status.is_success() {
            Err(HTTPError::Http(status))
        } else {
            resp.text().map_err(HTTPError::Body)
        }
    }
}
