//! Posts as they are described by the coven API.
//!
//! The API returns a JSON array of post objects. This module decodes that
//! array into a [`Posts`] collection, which preserves the order the server
//! supplied and can be sorted and truncated without disturbing the
//! original.

use crate::clock::{Clock, DateTime, HasAge, Utc};
use crate::rank::Criterion;
use crate::summary;
use itertools::Itertools;
use serde::Deserialize;
use std::slice::Iter;
use std::vec::IntoIter;

/// A single item posted to coven.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Post {
    pub(crate) id: i64,

    #[serde(default)]
    pub(crate) position: i64,

    pub(crate) url: String,

    pub(crate) title: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub(crate) comments: String,

    pub(crate) comment_count: u32,

    #[serde(default)]
    pub(crate) external_created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub(crate) created_at: Option<DateTime<Utc>>,

    pub(crate) source: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Post {
    /// The post's identifier in coven.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The post's position on the coven front page.
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Link to the article itself.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Title of the article.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Where the post is being discussed.
    ///
    /// This is usually a link to a discussion thread, but it is treated
    /// as an opaque string.
    pub fn comments(&self) -> &str {
        &self.comments
    }

    /// Number of comments in the discussion.
    pub fn comment_count(&self) -> u32 {
        self.comment_count
    }

    /// When the article was published by its source, if known.
    pub fn external_created_at(&self) -> Option<DateTime<Utc>> {
        self.external_created_at
    }

    /// When coven picked up the article, if known.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Name of the site the article came from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// A one-line summary of the post, relative to the time given by `clock`.
    ///
    /// See [`summary::summarize()`].
    pub fn summary<C: Clock>(&self, clock: &C) -> Result<String, summary::Error> {
        summary::summarize(self, clock.now())
    }
}

impl HasAge for Post {
    fn created_utc(&self) -> Option<DateTime<Utc>> {
        self.external_created_at
    }
}

/// An ordered collection of posts.
///
/// Operations that reorder or shorten the collection return a new
/// collection and leave the receiver untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Posts {
    posts: Vec<Post>,
}

impl Posts {
    /// Decodes a JSON array of posts, as returned by the coven API.
    pub fn parse(data: &str) -> Result<Self, serde_json::Error> {
        let posts: Vec<Post> = serde_json::from_str(data)?;
        Ok(Self { posts })
    }

    /// Number of posts in the collection.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// True if there are no posts in the collection.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Iterates over the posts in order.
    pub fn iter(&self) -> Iter<'_, Post> {
        self.posts.iter()
    }

    /// The first `limit` posts, or all of them if there are no more than
    /// `limit` posts.
    pub fn limit(&self, limit: usize) -> Self {
        self.iter().take(limit).cloned().collect()
    }

    /// A copy of the collection, stably sorted according to `criterion`.
    pub fn sorted_by(&self, criterion: Criterion) -> Self {
        self.iter()
            .sorted_by(|lhs, rhs| criterion.compare(lhs, rhs))
            .cloned()
            .collect()
    }
}

impl FromIterator<Post> for Posts {
    fn from_iter<T: IntoIterator<Item = Post>>(iter: T) -> Self {
        Self {
            posts: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Posts {
    type Item = Post;
    type IntoIter = IntoIter<Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.into_iter()
    }
}

impl<'a> IntoIterator for &'a Posts {
    type Item = &'a Post;
    type IntoIter = Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
