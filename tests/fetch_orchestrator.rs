mod common;

use std::time::Duration;

use common::mock_search::{MockResponse, MockSearch};
use common::{next_action, orchestrator, orchestrator_with, search_config};
use hnstories::mvi::Reducer;
use hnstories::search::{
    fetch_hits, FetchError, ItemId, RequestBuilder, ResultsAction, ResultsReducer, ResultsState,
};
use url::Url;

const WAIT: Duration = Duration::from_secs(5);

const REACT_HIT: &str = r#"{"hits":[{"title":"React","url":"https://reactjs.org/","author":"Jordan Walke","num_comments":3,"points":4,"objectID":0}]}"#;

fn builder(endpoint: &str) -> RequestBuilder {
    RequestBuilder::new(Url::parse(endpoint).unwrap(), 5)
}

async fn wait_for_queries(mock: &MockSearch, count: usize) {
    for _ in 0..200 {
        if mock.queries().await.len() >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("Mock never received {count} request(s)");
}

#[tokio::test(flavor = "multi_thread")]
async fn success_dispatches_init_then_success() {
    let mock = MockSearch::start().await;
    mock.enqueue(MockResponse::json(REACT_HIT)).await;
    let (fetcher, mut rx) = orchestrator(&mock.endpoint());

    assert!(fetcher.trigger(builder(&mock.endpoint()).build("react")));

    let mut state = ResultsState::default();
    let init = next_action(&mut rx, WAIT).await;
    assert_eq!(init, ResultsAction::FetchInit);
    state = ResultsReducer::reduce(state, init);
    assert!(state.is_loading);

    let done = next_action(&mut rx, WAIT).await;
    let ResultsAction::FetchSuccess { items, queried_term } = &done else {
        panic!("expected FetchSuccess, got {done:?}");
    };
    assert_eq!(queried_term, "react");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "React");
    assert_eq!(items[0].id, ItemId::from(0u64));

    state = ResultsReducer::reduce(state, done);
    assert!(!state.is_loading);
    assert!(!state.is_error);
    assert_eq!(state.last_queried_term, "react");

    assert_eq!(mock.queries().await, ["query=react&hitsPerPage=5"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn http_error_dispatches_failure() {
    let mock = MockSearch::start().await;
    mock.enqueue(MockResponse::error(500)).await;
    let (fetcher, mut rx) = orchestrator(&mock.endpoint());

    fetcher.trigger(builder(&mock.endpoint()).build("react"));
    assert_eq!(next_action(&mut rx, WAIT).await, ResultsAction::FetchInit);
    assert_eq!(next_action(&mut rx, WAIT).await, ResultsAction::FetchFailure);
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_body_dispatches_failure() {
    let mock = MockSearch::start().await;
    mock.enqueue(MockResponse::json("{\"hits\": not json")).await;
    let (fetcher, mut rx) = orchestrator(&mock.endpoint());

    fetcher.trigger(builder(&mock.endpoint()).build("react"));
    assert_eq!(next_action(&mut rx, WAIT).await, ResultsAction::FetchInit);
    assert_eq!(next_action(&mut rx, WAIT).await, ResultsAction::FetchFailure);
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_host_dispatches_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let endpoint = format!("http://{addr}/api/v1/search");
    let (fetcher, mut rx) = orchestrator(&endpoint);

    fetcher.trigger(builder(&endpoint).build("react"));
    assert_eq!(next_action(&mut rx, WAIT).await, ResultsAction::FetchInit);
    assert_eq!(next_action(&mut rx, WAIT).await, ResultsAction::FetchFailure);
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_term_is_a_no_op() {
    let mock = MockSearch::start().await;
    let (fetcher, mut rx) = orchestrator(&mock.endpoint());

    assert!(!fetcher.trigger(builder(&mock.endpoint()).build("x")));
    assert!(!fetcher.trigger(None));

    let nothing = tokio::time::timeout(Duration::from_millis(200), rx.recv()).await;
    assert!(nothing.is_err(), "no action expected, got {nothing:?}");
    assert!(mock.queries().await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn stale_response_is_dropped() {
    let mock = MockSearch::start().await;
    mock.enqueue(
        MockResponse::json(r#"{"hits":[{"title":"Slow","objectID":"slow"}]}"#).with_delay(500),
    )
    .await;
    mock.enqueue(MockResponse::json(REACT_HIT)).await;
    let (fetcher, mut rx) = orchestrator(&mock.endpoint());
    let builder = builder(&mock.endpoint());

    fetcher.trigger(builder.build("first"));
    assert_eq!(next_action(&mut rx, WAIT).await, ResultsAction::FetchInit);
    wait_for_queries(&mock, 1).await;

    fetcher.trigger(builder.build("second"));
    assert_eq!(next_action(&mut rx, WAIT).await, ResultsAction::FetchInit);

    let done = next_action(&mut rx, WAIT).await;
    assert!(
        matches!(&done, ResultsAction::FetchSuccess { queried_term, .. } if queried_term == "second"),
        "unexpected action {done:?}"
    );

    let late = tokio::time::timeout(Duration::from_millis(1000), rx.recv()).await;
    assert!(late.is_err(), "stale completion delivered: {late:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_hits_reports_status() {
    let mock = MockSearch::start().await;
    mock.enqueue(MockResponse::error(503)).await;
    let client = reqwest::Client::new();
    let request = builder(&mock.endpoint()).build("react").unwrap();

    let err = fetch_hits(&client, &request).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 503 }));
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_hits_tolerates_sparse_hits() {
    let mock = MockSearch::start().await;
    mock.enqueue(MockResponse::json(
        r#"{"hits":[{"title":null,"url":null,"author":"pg","points":null,"objectID":"42"}],"nbHits":1}"#,
    ))
    .await;
    let client = reqwest::Client::new();
    let request = builder(&mock.endpoint()).build("react").unwrap();

    let hits = fetch_hits(&client, &request).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "");
    assert_eq!(hits[0].link(), None);
    assert_eq!(hits[0].score, 0);
    assert_eq!(hits[0].id, ItemId::from("42"));
}

#[tokio::test(flavor = "multi_thread")]
async fn request_timeout_turns_slow_response_into_failure() {
    let mock = MockSearch::start().await;
    mock.enqueue(MockResponse::json(REACT_HIT).with_delay(3000))
        .await;
    let mut config = search_config(&mock.endpoint());
    config.timeout_seconds = Some(1);
    let (fetcher, mut rx) = orchestrator_with(&config);

    assert!(fetcher.trigger(builder(&mock.endpoint()).build("react")));
    assert_eq!(next_action(&mut rx, WAIT).await, ResultsAction::FetchInit);
    assert_eq!(
        next_action(&mut rx, Duration::from_millis(2500)).await,
        ResultsAction::FetchFailure
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn no_request_timeout_waits_for_slow_response() {
    let mock = MockSearch::start().await;
    mock.enqueue(MockResponse::json(REACT_HIT).with_delay(1500))
        .await;
    let mut config = search_config(&mock.endpoint());
    config.timeout_seconds = None;
    let (fetcher, mut rx) = orchestrator_with(&config);

    fetcher.trigger(builder(&mock.endpoint()).build("react"));
    assert_eq!(next_action(&mut rx, WAIT).await, ResultsAction::FetchInit);
    let done = next_action(&mut rx, WAIT).await;
    assert!(
        matches!(done, ResultsAction::FetchSuccess { .. }),
        "unexpected action {done:?}"
    );
}
