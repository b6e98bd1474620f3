//! One-line summaries of posts.

use crate::clock::{DateTime, Utc, relative_time};
use crate::post::Post;
use thiserror::Error;

/// A post is missing information needed to summarize it.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The post has no publication date, so its age cannot be described.
    #[error("Post {id} (\"{title}\") has no publication date")]
    MissingTimestamp { id: i64, title: String },
}

/// Summarizes `post` in a single line, describing its age relative to `now`.
///
/// The summary takes the form `"{title}, posted on {source} {age}"`, where
/// `age` is a phrase such as "3 hours ago" (see
/// [`relative_time()`](crate::clock::relative_time)).
///
/// Returns [`Error::MissingTimestamp`] if the post has no publication date.
pub fn summarize(post: &Post, now: DateTime<Utc>) -> Result<String, Error> {
    let published = post
        .external_created_at()
        .ok_or_else(|| Error::MissingTimestamp {
            id: post.id(),
            title: post.title().to_string(),
        })?;
    let posted = relative_time(now - published);
    Ok(format!("{}, posted on {} {posted}", post.title(), post.source()))
}
