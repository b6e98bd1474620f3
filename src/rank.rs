//! Ranks posts by recency or by how much they are being discussed.

use crate::post::{Post, Posts};
use log::{trace, warn};
use std::cmp::Ordering;

/// The rule used to order a collection of posts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Criterion {
    /// Newest posts first, by the date the source published them.
    ///
    /// Posts without a publication date are treated as the oldest posts
    /// and sort after every dated post.
    MostRecent,

    /// Posts with the most comments first.
    MostDiscussed,
}

impl Criterion {
    /// Compares two posts so that the post that should be listed first
    /// is [`Ordering::Less`].
    pub fn compare(&self, lhs: &Post, rhs: &Post) -> Ordering {
        match self {
            Criterion::MostRecent => by_most_recent(lhs, rhs),
            Criterion::MostDiscussed => by_most_discussed(lhs, rhs),
        }
    }
}

/// Orders posts by descending publication date, with undated posts last.
pub fn by_most_recent(lhs: &Post, rhs: &Post) -> Ordering {
    match (lhs.external_created_at(), rhs.external_created_at()) {
        (Some(lhs), Some(rhs)) => rhs.cmp(&lhs),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Orders posts by descending comment count.
pub fn by_most_discussed(lhs: &Post, rhs: &Post) -> Ordering {
    rhs.comment_count().cmp(&lhs.comment_count())
}

/// Sorts `posts` by `criterion` and keeps the first `limit` of them.
///
/// The sort is stable, so posts that compare equal stay in the order the
/// server returned them. `posts` itself is left as it was.
pub fn rank(posts: &Posts, criterion: Criterion, limit: usize) -> Posts {
    if criterion == Criterion::MostRecent {
        let undated = posts
            .iter()
            .filter(|post| post.external_created_at().is_none())
            .count();
        if undated > 0 {
            warn!("{undated} posts have no publication date and will be ranked last");
        }
    }

    trace!("ranking {} posts by {criterion:?}, keeping {limit}", posts.len());
    posts.sorted_by(criterion).limit(limit)
}
