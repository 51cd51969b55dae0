//! `MealDbService` against a fake MealDB served by an in-process axum server.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use recipebox_mealdb::{MealDbClient, MealDbError, MealDbService, SearchCache};
use serde_json::json;

/// Counts `/search.php` hits and answers `arrabiata` with one meal.
async fn fake_search(
    State(hits): State<Arc<AtomicUsize>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    hits.fetch_add(1, Ordering::SeqCst);

    match params.get("s").map(String::as_str) {
        Some("arrabiata") => Json(json!({
            "meals": [{
                "idMeal": "52771",
                "strMeal": "Spicy Arrabiata Penne",
                "strArea": "Italian",
                "strInstructions": "Boil water. Cook penne.",
                "strIngredient1": "penne rigate",
                "strMeasure1": "1 pound",
                "strIngredient2": "",
                "strMeasure2": ""
            }]
        })),
        _ => Json(json!({ "meals": null })),
    }
}

async fn failing_search(State(hits): State<Arc<AtomicUsize>>) -> impl IntoResponse {
    hits.fetch_add(1, Ordering::SeqCst);
    (StatusCode::SERVICE_UNAVAILABLE, "upstream down")
}

/// Serve `router` on an ephemeral port; returns the base URL.
async fn spawn_fake(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn fake_mealdb() -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route("/search.php", get(fake_search))
        .with_state(Arc::clone(&hits));
    (spawn_fake(router).await, hits)
}

fn service(base_url: &str, cache: SearchCache) -> MealDbService {
    let client = MealDbClient::new(base_url, Duration::from_secs(5)).unwrap();
    MealDbService::new(client, Arc::new(cache))
}

#[tokio::test]
async fn search_converts_meals() {
    let (url, _) = fake_mealdb().await;
    let results = service(&url, SearchCache::default()).search("arrabiata").await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "mealdb_52771");
    assert_eq!(results[0].ingredients, vec!["1 pound penne rigate"]);
    assert_eq!(results[0].steps, vec!["Boil water", "Cook penne"]);
}

#[tokio::test]
async fn repeated_search_is_served_from_cache() {
    let (url, hits) = fake_mealdb().await;
    let svc = service(&url, SearchCache::default());

    let first = svc.search("arrabiata").await;
    let second = svc.search("ARRABIATA").await;

    assert_eq!(first, second);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(svc.cache().stats().await.cached_queries, Some(1));
}

#[tokio::test]
async fn disabled_cache_hits_upstream_every_time() {
    let (url, hits) = fake_mealdb().await;
    let svc = service(&url, SearchCache::disabled());

    svc.search("arrabiata").await;
    svc.search("arrabiata").await;

    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn no_matches_yields_empty_list() {
    let (url, _) = fake_mealdb().await;
    assert!(service(&url, SearchCache::default())
        .search("nonexistent")
        .await
        .is_empty());
}

#[tokio::test]
async fn blank_query_does_not_contact_upstream() {
    let (url, hits) = fake_mealdb().await;
    let svc = service(&url, SearchCache::default());

    assert!(svc.search("  ").await.is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn upstream_failure_is_swallowed_and_not_cached() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route("/search.php", get(failing_search))
        .with_state(Arc::clone(&hits));
    let url = spawn_fake(router).await;
    let svc = service(&url, SearchCache::default());

    assert!(svc.search("arrabiata").await.is_empty());
    assert!(svc.search("arrabiata").await.is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert_eq!(svc.cache().stats().await.cached_queries, Some(0));
}

#[tokio::test]
async fn client_reports_status_of_failed_request() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route("/search.php", get(failing_search))
        .with_state(hits);
    let url = spawn_fake(router).await;
    let client = MealDbClient::new(&url, Duration::from_secs(5)).unwrap();

    match client.search_meals("anything").await {
        Err(MealDbError::ApiError { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "upstream down");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_upstream_is_a_request_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = MealDbClient::new(format!("http://{addr}"), Duration::from_secs(2)).unwrap();
    let result = client.search_meals("penne").await;
    assert!(matches!(result, Err(MealDbError::Request(_))));
}
