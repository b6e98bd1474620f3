//! All things time-related.

pub use chrono::{DateTime, TimeDelta, Utc};
use std::ops::Sub;

/// Tells time and returns the time.
///
/// Generally you will want to retrieve time using [`SystemClock`],
/// but in tests you may want to implement a `Clock` with a fixed time.
pub trait Clock {
    /// The current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Interacts with the system clock to get the current time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Marks a thing that may have a notion of its age.
pub trait HasAge {
    /// The date the item was created, in UTC, if it is known.
    fn created_utc(&self) -> Option<DateTime<Utc>>;

    /// Time elapsed between the item's creation and the time given by
    /// `clock`, if the creation date is known.
    fn age<C: Clock>(&self, clock: &C) -> Option<TimeDelta> {
        self.created_utc().map(|created| clock.now().sub(created))
    }

    /// The age of the item as a human-readable string, such as
    /// "3 days ago", if the creation date is known.
    ///
    /// See [`relative_time()`].
    fn relative_age<C: Clock>(&self, clock: &C) -> Option<String> {
        self.age(clock).map(relative_time)
    }
}

/// Describes an elapsed amount of time in coarse, human-readable terms.
///
/// This is meant to be glanced at, so it is not calendar-accurate: a day
/// is always 24 hours, and no time zone or DST adjustments are made.
/// Anything up to two minutes, including times in the future, is
/// "just a moment ago".
///
/// # Examples
///
/// ```
/// use coven::clock::{TimeDelta, relative_time};
///
/// assert_eq!(relative_time(TimeDelta::hours(60)), "2 days ago");
/// assert_eq!(relative_time(TimeDelta::hours(47)), "47 hours ago");
/// assert_eq!(relative_time(TimeDelta::minutes(90)), "90 minutes ago");
/// assert_eq!(relative_time(TimeDelta::seconds(30)), "just a moment ago");
/// ```
pub fn relative_time(elapsed: TimeDelta) -> String {
    if elapsed >= TimeDelta::hours(48) {
        format!("{} days ago", elapsed.num_hours() / 24)
    } else if elapsed > TimeDelta::hours(2) {
        format!("{} hours ago", elapsed.num_hours())
    } else if elapsed > TimeDelta::minutes(2) {
        format!("{} minutes ago", elapsed.num_minutes())
    } else {
        String::from("just a moment ago")
    }
}
