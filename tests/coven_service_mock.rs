use coven::client::{Coven, Error};
use coven::conf::ServiceConfig;
use coven::http::HTTPError;
use coven::post::Posts;
use std::fs;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// These tests run the real HTTP service against a local mock server. The
// service uses a blocking client, so it is driven from a blocking task.

const POSTS_PATH: &str = "/api/v1/posts";

fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

async fn serve(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;
    server
}

async fn fetch(server: &MockServer, timeout: Duration) -> Result<Posts, Error> {
    let config = ServiceConfig::default()
        .endpoint(format!("{}{POSTS_PATH}", server.uri()))
        .timeout(timeout);
    tokio::task::spawn_blocking(move || Coven::new(config)?.fetch_all())
        .await
        .expect("fetch task panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn it_fetches_posts_in_server_order() {
    let response =
        ResponseTemplate::new(200).set_body_raw(load_data("posts_10"), "application/json");
    let server = serve(response).await;

    let posts = fetch(&server, Duration::from_secs(5))
        .await
        .expect("could not fetch posts");

    assert_eq!(posts.len(), 10);
    let ids: Vec<i64> = posts.iter().map(|post| post.id()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
}

#[tokio::test(flavor = "multi_thread")]
async fn it_identifies_itself() {
    let server = MockServer::start().await;
    let user_agent = format!("coven v{}", env!("CARGO_PKG_VERSION"));
    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .and(header("user-agent", user_agent.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let posts = fetch(&server, Duration::from_secs(5))
        .await
        .expect("could not fetch posts");
    assert!(posts.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn it_fails_to_decode_malformed_json() {
    let response =
        ResponseTemplate::new(200).set_body_raw(load_data("posts_malformed"), "application/json");
    let server = serve(response).await;

    let result = fetch(&server, Duration::from_secs(5)).await;
    assert!(matches!(result, Err(Error::Decode(_))), "{result:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn it_fails_on_unsuccessful_status_codes() {
    let server = serve(ResponseTemplate::new(503)).await;

    let result = fetch(&server, Duration::from_secs(5)).await;
    match result {
        Err(Error::Network(HTTPError::Http(status))) => assert_eq!(status.as_u16(), 503),
        other => panic!("expected an HTTP error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn it_gives_up_on_slow_servers() {
    let response = ResponseTemplate::new(200)
        .set_body_raw("[]", "application/json")
        .set_delay(Duration::from_secs(5));
    let server = serve(response).await;

    let result = fetch(&server, Duration::from_millis(250)).await;
    assert!(
        matches!(result, Err(Error::Network(HTTPError::Request(_)))),
        "{result:?}"
    );
}
