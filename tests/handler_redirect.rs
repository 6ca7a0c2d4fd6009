mod common;

use linkcut::domain::repositories::UrlRepository;

#[tokio::test]
async fn test_redirect_success() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "redir01", "https://example.com/target").await;

    let response = server.get("/redir01").await;

    assert_eq!(response.status_code(), 302);
    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_counts_follows() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "count01", "https://example.com").await;

    server.get("/count01").await;
    server.get("/count01").await;

    let record = repo.fetch_by_code("count01").await.unwrap();
    assert_eq!(record.times_followed, 2);
}

#[tokio::test]
async fn test_redirect_survives_increment_failure() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "flaky01", "https://example.com/still-works").await;
    repo.fail_increments(true);

    let response = server.get("/flaky01").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/still-works");
    assert_eq!(repo.increment_calls(), 1);
    assert_eq!(repo.fetch_by_code("flaky01").await.unwrap().times_followed, 0);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, repo) = common::create_test_server();

    let response = server.get("/missing").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "URL not found");
    assert_eq!(repo.increment_calls(), 0);
}

#[tokio::test]
async fn test_redirect_store_down() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "down001", "https://example.com").await;
    repo.set_available(false);

    let response = server.get("/down001").await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(repo.increment_calls(), 0);
}

#[tokio::test]
async fn test_create_then_follow_round_trip() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/")
        .add_header("Host", common::HOST)
        .form(&[("long_url", "https://www.rust-lang.org/learn")])
        .await;
    response.assert_status_ok();

    let body = response.text();
    let prefix = format!("http://{}/", common::HOST);
    let start = body.find(&prefix).unwrap() + prefix.len();
    let code = &body[start..start + 7];

    let response = server.get(&format!("/{code}")).await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://www.rust-lang.org/learn");

    assert_eq!(repo.fetch_by_code(code).await.unwrap().times_followed, 1);
}

#[tokio::test]
async fn test_redirect_escapes_control_characters() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/")
        .add_header("Host", common::HOST)
        .form(&[("long_url", "https://example.com/a\nb")])
        .await;
    response.assert_status_ok();

    let body = response.text();
    let prefix = format!("http://{}/", common::HOST);
    let start = body.find(&prefix).unwrap() + prefix.len();
    let code = &body[start..start + 7];

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 302);
    let location = response.maybe_header("location");
    assert!(location.is_some(), "redirect must carry a Location header");
    assert_eq!(location.unwrap(), "https://example.com/a%0Ab");
    assert_eq!(repo.fetch_by_code(code).await.unwrap().times_followed, 1);
}

#[tokio::test]
async fn test_redirect_escapes_non_ascii() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "utf8001", "https://example.com/café").await;

    let response = server.get("/utf8001").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/caf%C3%A9");
}
