// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Ian Ferguson <ian@labmarie.com>

//! Client for reading posts from the coven API.

use crate::conf::ServiceConfig;
use crate::http;
use crate::post::Posts;
use crate::rank::{Criterion, rank};
use crate::service::{CovenService, Service};
use log::info;
use thiserror::Error;

/// Retrieves posts from coven.
#[derive(Debug)]
pub struct Coven<S: Service = CovenService> {
    service: S,
}

impl Coven {
    /// Creates a new client for the coven API described by `config`.
    ///
    /// Returns an [`enum@Error`] if an HTTP client cannot be created.
    pub fn new(config: ServiceConfig) -> Result<Self, Error> {
        let service = CovenService::new(config)?;
        Ok(Self::with_service(service))
    }
}

impl<S: Service> Coven<S> {
    /// Creates a new client that retrieves posts using `service`.
    pub fn with_service(service: S) -> Self {
        Self { service }
    }

    /// Retrieves every post currently available from coven, in the order
    /// the API returned them.
    ///
    /// Exactly one request is made. Returns [`Error::Network`] if the
    /// request fails and [`Error::Decode`] if the response is not a JSON
    /// array of posts.
    pub fn fetch_all(&self) -> Result<Posts, Error> {
        let data = self.service.get_posts()?;
        let posts = Posts::parse(&data)?;
        info!("retrieved {} posts", posts.len());
        Ok(posts)
    }

    /// Retrieves up to `limit` of the most recently published posts,
    /// newest first.
    pub fn newest(&self, limit: usize) -> Result<Posts, Error> {
        Ok(rank(&self.fetch_all()?, Criterion::MostRecent, limit))
    }

    /// Retrieves up to `limit` of the posts with the most comments,
    /// busiest first.
    pub fn most_discussed(&self, limit: usize) -> Result<Posts, Error> {
        Ok(rank(&self.fetch_all()?, Criterion::MostDiscussed, limit))
    }
}

/// A client error.
#[derive(Debug, Error)]
pub enum Error {
    /// The posts could not be retrieved.
    #[error("Network error: {0}")]
    Network(#[from] http::HTTPError),

    /// The response could not be decoded into posts.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
