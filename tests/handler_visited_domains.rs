mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use std::collections::HashMap;
use visited_links::api::handlers::visited_domains_handler;
use visited_links::domain::repositories::VisitRepository;
use visited_links::state::AppState;

fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/visited_domains", get(visited_domains_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

async fn seed(repository: &common::InMemoryVisitRepository, entries: &[(&str, f64)]) {
    let entries: HashMap<String, f64> = entries
        .iter()
        .map(|(domain, score)| (domain.to_string(), *score))
        .collect();
    repository.upsert(entries).await.unwrap();
}

#[tokio::test]
async fn test_query_returns_domains_in_window() {
    let (state, repository) = common::create_test_state();
    seed(
        &repository,
        &[("ya.ru", 10.0), ("funbox.ru", 20.0), ("late.ru", 100.0)],
    )
    .await;
    let server = make_server(state);

    let response = server
        .get("/visited_domains")
        .add_query_param("from", 0)
        .add_query_param("to", 50)
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["domains"], serde_json::json!(["ya.ru", "funbox.ru"]));
}

#[tokio::test]
async fn test_query_bounds_are_inclusive() {
    let (state, repository) = common::create_test_state();
    seed(&repository, &[("lo.ru", 10.0), ("hi.ru", 20.0)]).await;
    let server = make_server(state);

    let response = server
        .get("/visited_domains")
        .add_query_param("from", 10)
        .add_query_param("to", 20)
        .await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["domains"], serde_json::json!(["lo.ru", "hi.ru"]));
}

#[tokio::test]
async fn test_query_orders_by_score_then_name() {
    let (state, repository) = common::create_test_state();
    seed(
        &repository,
        &[("b.ru", 5.0), ("a.ru", 5.0), ("first.ru", 1.0)],
    )
    .await;
    let server = make_server(state);

    let response = server
        .get("/visited_domains")
        .add_query_param("from", 0)
        .add_query_param("to", 10)
        .await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(
        body["domains"],
        serde_json::json!(["first.ru", "a.ru", "b.ru"])
    );
}

#[tokio::test]
async fn test_inverted_window_yields_empty_list() {
    let (state, repository) = common::create_test_state();
    seed(&repository, &[("ya.ru", 10.0)]).await;
    let server = make_server(state);

    let response = server
        .get("/visited_domains")
        .add_query_param("from", 50)
        .add_query_param("to", 0)
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["domains"], serde_json::json!([]));
}

#[tokio::test]
async fn test_non_numeric_from_is_a_descriptive_failure() {
    let (state, _repository) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .get("/visited_domains")
        .add_query_param("from", "oioi")
        .add_query_param("to", "5656")
        .await;

    response.assert_status_ok();

    let status = response.json::<serde_json::Value>()["status"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(status.contains("'from'"));
    assert!(status.contains("not a number"));
}

#[tokio::test]
async fn test_non_numeric_to_is_a_descriptive_failure() {
    let (state, _repository) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .get("/visited_domains")
        .add_query_param("from", "5656")
        .add_query_param("to", "oioi")
        .await;

    let status = response.json::<serde_json::Value>()["status"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(status.contains("'to'"));
    assert!(status.contains("not a number"));
}

#[tokio::test]
async fn test_missing_parameters_are_a_descriptive_failure() {
    let (state, _repository) = common::create_test_state();
    let server = make_server(state);

    let response = server.get("/visited_domains").await;

    let status = response.json::<serde_json::Value>()["status"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(status.contains("missing query parameter 'from'"));
}

#[tokio::test]
async fn test_store_error_surfaces_as_failure_envelope() {
    let state = common::create_failing_state();
    let server = make_server(state);

    let response = server
        .get("/visited_domains")
        .add_query_param("from", 0)
        .add_query_param("to", 10)
        .await;

    response.assert_status_ok();

    let status = response.json::<serde_json::Value>()["status"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(status.contains("store error"));
}
