use crate::clock::{Clock, DateTime, Utc};
use crate::http::{HTTPError, HTTPResult};
use crate::post::{Post, Posts};
use crate::service::Service;
use reqwest::StatusCode;
use std::cell::Cell;
use std::fs;

pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

pub fn load_output(filename: &str) -> String {
    let filename = format!("tests/output/{filename}.out");
    String::from(
        fs::read_to_string(&filename)
            .expect(&format!("could not load test data from {filename}"))
            .trim_end(),
    )
}

pub fn ids(posts: &Posts) -> Vec<i64> {
    posts.iter().map(|post| post.id()).collect()
}

pub fn post_with_date(id: i64, external_created_at: Option<&str>) -> Post {
    Post {
        id,
        position: id,
        url: format!("http://example.com/{id}"),
        title: format!("Post {id}"),
        comments: format!("http://coven.link/posts/{id}"),
        comment_count: 0,
        external_created_at: external_created_at.map(|ts| {
            DateTime::parse_from_rfc3339(ts)
                .expect("invalid date supplied")
                .with_timezone(&Utc)
        }),
        created_at: None,
        source: String::from("example.com"),
    }
}

pub fn post_with_comments(id: i64, comment_count: u32) -> Post {
    Post {
        comment_count,
        ..post_with_date(id, Some("2015-06-01T12:00:00Z"))
    }
}

/// Serves posts from `tests/data` instead of the network.
pub struct TestService<'a> {
    name: &'a str,
    requests: Cell<usize>,
}

impl<'a> TestService<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            requests: Cell::new(0),
        }
    }

    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl<'a> Service for TestService<'a> {
    fn get_posts(&self) -> HTTPResult<String> {
        self.requests.set(self.requests.get() + 1);
        Ok(load_data(self.name))
    }
}

/// Fails every request with the given status code.
pub struct FailingService {
    status: StatusCode,
}

impl FailingService {
    pub fn new(status: StatusCode) -> Self {
        Self { status }
    }
}

impl Service for FailingService {
    fn get_posts(&self) -> HTTPResult<String> {
        Err(HTTPError::Http(self.status))
    }
}

pub struct FrozenClock {
    datetime: DateTime<Utc>,
}

impl FrozenClock {
    pub fn new(datetime: DateTime<Utc>) -> Self {
        FrozenClock { datetime }
    }
}

impl Default for FrozenClock {
    fn default() -> Self {
        let datetime = DateTime::parse_from_rfc3339("2015-06-01T05:00:00-07:00")
            .expect("invalid date supplied")
            .with_timezone(&Utc);
        Self::new(datetime)
    }
}

impl Clock for FrozenClock {
    fn now(&self) -> DateTime<Utc> {
        self.datetime
    }
}
