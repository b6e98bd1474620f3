// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Ian Ferguson <ian@labmarie.com>

//! coven is a command-line tool for reviewing the stories currently posted
//! to [coven](http://coven.link), a link aggregator. It downloads every
//! current post, then lists the newest posts and the posts with the most
//! discussion.
//!
//! # Examples
//!
//! Show the 12 newest posts and the 4 most discussed posts:
//!
//! ```bash
//! coven
//! ```
//!
//! Show only the 5 most discussed posts:
//!
//! ```bash
//! coven --recent 0 --discussed 5
//! ```
//!
//! Read posts from a different server:
//!
//! ```bash
//! coven --endpoint http://localhost:3000/api/v1/posts
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! coven --help
//! ```
//!
//! # Library
//!
//! The same pieces are available as a library. [`Coven`](client::Coven)
//! retrieves posts, [`rank()`](rank::rank) orders and trims them, and
//! [`Viewable`](view::Viewable) renders them:
//!
//! ```no_run
//! use coven::client::Coven;
//! use coven::clock::SystemClock;
//! use coven::conf::ServiceConfig;
//! use coven::rank::{Criterion, rank};
//! use coven::view::{ViewOptions, Viewable};
//!
//! let client = Coven::new(ServiceConfig::default()).unwrap();
//! let posts = client.fetch_all().unwrap();
//! let newest = rank(&posts, Criterion::MostRecent, 5);
//! println!("{}", newest.view(&ViewOptions::default(), &SystemClock).unwrap());
//! ```
//!
//! # License
//!
//! coven is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0

pub mod cli;
pub mod client;
pub mod clock;
pub mod conf;
pub mod http;
pub mod post;
pub mod rank;
pub mod service;
pub mod summary;
pub mod view;

#[cfg(test)]
mod test_utils;
