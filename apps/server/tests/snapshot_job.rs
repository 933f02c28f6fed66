//! Snapshot job against a fake CoinGecko served on an ephemeral port.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::{to_bytes, Body},
    extract::{Query, State},
    http::{header::USER_AGENT, HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

use pairlist_core::utils::FixedClock;
use pairlist_core::Error;
use pairlist_market_data::{CoinGeckoConfig, CoinGeckoProvider};
use pairlist_server::{api::app_router, build_state_with, config::Config, scheduler, AppState};

#[derive(Clone, Default)]
struct FakeCoinGecko {
    requests: Arc<Mutex<Vec<(HashMap<String, String>, Option<String>)>>>,
    fail_page: Option<String>,
}

async fn markets(
    State(fake): State<FakeCoinGecko>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let page = params.get("page").cloned().unwrap_or_default();
    fake.requests.lock().unwrap().push((params, user_agent));

    if fake.fail_page.as_deref() == Some(page.as_str()) {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "status": { "error_code": 429, "error_message": "rate limited" } })),
        )
            .into_response();
    }

    let body = match page.as_str() {
        "1" => json!([
            { "id": "bitcoin", "symbol": "btc", "name": "Bitcoin", "market_cap": 1000.0, "market_cap_rank": 1 },
            { "id": "ethereum", "symbol": "eth", "name": "Ethereum", "market_cap": 500.0, "market_cap_rank": 2 }
        ]),
        "2" => json!([
            { "id": "solana", "symbol": "sol", "name": "Solana", "market_cap": 100.0, "market_cap_rank": 3, "current_price": null }
        ]),
        _ => json!([]),
    };
    Json(body).into_response()
}

async fn spawn_fake(fake: FakeCoinGecko) -> SocketAddr {
    let router = Router::new()
        .route("/api/v3/coins/markets", get(markets))
        .with_state(fake);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
}

async fn build(addr: SocketAddr) -> (TempDir, Config, Arc<AppState>) {
    let dir = tempdir().unwrap();
    let config = Config {
        db_path: dir.path().join("test.db").to_string_lossy().to_string(),
        provider: CoinGeckoConfig {
            base_url: format!("http://{}/api/v3", addr),
            user_agent: "pairlist-test-agent".to_string(),
            ..CoinGeckoConfig::default()
        },
        ..Config::default()
    };
    let provider = Arc::new(CoinGeckoProvider::new(config.provider.clone()).unwrap());
    let state = build_state_with(&config, provider, Arc::new(FixedClock(today())))
        .await
        .unwrap();
    (dir, config, state)
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn job_fetches_two_pages_and_stores_today() {
    let fake = FakeCoinGecko::default();
    let addr = spawn_fake(fake.clone()).await;
    let (_dir, config, state) = build(addr).await;

    let outcome = scheduler::run_snapshot_now(&state).await.unwrap();
    assert_eq!(outcome.date_key, "2024-02-01");
    assert_eq!(outcome.entry_count, 3);

    let requests = fake.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 2);
    for (i, (params, user_agent)) in requests.iter().enumerate() {
        assert_eq!(params["page"], (i + 1).to_string());
        assert_eq!(params["per_page"], "250");
        assert_eq!(params["order"], "market_cap_desc");
        assert_eq!(params["vs_currency"], "usd");
        assert_eq!(params["sparkline"], "false");
        assert_eq!(user_agent.as_deref(), Some("pairlist-test-agent"));
    }

    let (status, body) = get_json(app_router(state, &config), "/api/v1/pairlist?days=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "pairlist": ["BTC", "ETH", "SOL"], "filteredOut": [] })
    );
}

#[tokio::test]
async fn failed_page_stores_nothing() {
    let fake = FakeCoinGecko {
        fail_page: Some("2".to_string()),
        ..FakeCoinGecko::default()
    };
    let addr = spawn_fake(fake.clone()).await;
    let (_dir, config, state) = build(addr).await;

    let err = scheduler::run_snapshot_now(&state).await.unwrap_err();
    assert!(matches!(err, Error::MarketData(_)));
    assert_eq!(fake.requests.lock().unwrap().len(), 2);

    let (status, _) = get_json(app_router(state, &config), "/api/v1/pairlist?days=1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rerun_overwrites_the_day() {
    let fake = FakeCoinGecko::default();
    let addr = spawn_fake(fake.clone()).await;
    let (_dir, config, state) = build(addr).await;

    scheduler::run_snapshot_now(&state).await.unwrap();
    scheduler::run_snapshot_now(&state).await.unwrap();
    assert_eq!(fake.requests.lock().unwrap().len(), 4);

    let (status, body) = get_json(app_router(state, &config), "/api/v1/pairlist?days=1&limit=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "pairlist": ["BTC"], "filteredOut": [] }));
}
