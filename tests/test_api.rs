//! Integration tests for the HTTP API endpoints.
//!
//! Uses axum's oneshot pattern (via tower::ServiceExt), no TCP binding needed.
//! Session tests share one `AppState` across several routers, the same way
//! HTTP and WebSocket surfaces share it in the running server.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use kolb_backend::config::{AppConfig, SessionsCfg};
use kolb_backend::routes::build_router;
use kolb_backend::state::AppState;

fn app(state: &Arc<AppState>) -> axum::Router {
    build_router(state.clone())
}

/// Parse response body as JSON.
async fn body_json(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(state: &Arc<AppState>, uri: &str) -> (StatusCode, Value) {
    let resp = app(state)
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    (status, body_json(resp.into_body()).await)
}

async fn post(state: &Arc<AppState>, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(state, uri, &body.to_string()).await
}

/// POST a body verbatim, for payloads that are not valid for the endpoint.
async fn post_raw(state: &Arc<AppState>, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app(state).oneshot(req).await.unwrap();
    let status = resp.status();
    (status, body_json(resp.into_body()).await)
}

fn uniform_answers(ce: u8, ro: u8, ac: u8, ae: u8) -> Value {
    answers_of_len(12, ce, ro, ac, ae)
}

fn answers_of_len(len: usize, ce: u8, ro: u8, ac: u8, ae: u8) -> Value {
    json!({ "answers": vec![json!({ "CE": ce, "RO": ro, "AC": ac, "AE": ae }); len] })
}

async fn new_session(state: &Arc<AppState>) -> String {
    let (_, created) = post(state, "/api/v1/session", json!({})).await;
    created["id"].as_str().unwrap().to_string()
}

// ── reference data ───────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_ok() {
    let state = Arc::new(AppState::default());
    let (status, json) = get(&state, "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ok"], true);
}

#[tokio::test]
async fn questionnaire_has_twelve_items_with_four_options() {
    let state = Arc::new(AppState::default());
    let (status, json) = get(&state, "/api/v1/questionnaire").await;
    assert_eq!(status, StatusCode::OK);
    let questions = json["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 12);
    assert_eq!(questions[0]["id"], 1);
    for key in ["CE", "RO", "AC", "AE"] {
        assert!(questions[11]["options"][key].is_string(), "missing {key}");
    }
    assert_eq!(json["tags"][0]["code"], "CE");
    assert_eq!(json["tags"][0]["label"], "구체적 경험");
}

#[tokio::test]
async fn styles_lists_all_four() {
    let state = Arc::new(AppState::default());
    let (status, json) = get(&state, "/api/v1/styles").await;
    assert_eq!(status, StatusCode::OK);
    let styles = json.as_array().unwrap();
    assert_eq!(styles.len(), 4);
    assert!(styles.iter().any(|s| s["style"] == "Diverging" && s["description"]["koreanTitle"] == "확산자"));
}

// ── stateless core ───────────────────────────────────────────────────

#[tokio::test]
async fn score_converging_scenario() {
    let state = Arc::new(AppState::default());
    let (status, json) = post(&state, "/api/v1/score", uniform_answers(1, 2, 3, 4)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totals"], json!({ "CE": 12, "RO": 24, "AC": 36, "AE": 48 }));
    assert_eq!(json["axes"], json!({ "x": 24, "y": 24 }));
    assert_eq!(json["style"], "Converging");
    assert_eq!(json["description"]["koreanTitle"], "수렴자");
}

#[tokio::test]
async fn score_rejects_incomplete_set() {
    let state = Arc::new(AppState::default());
    let mut body = uniform_answers(4, 3, 2, 1);
    body["answers"][3] = json!({ "CE": 1, "RO": 1, "AC": 2, "AE": 3 });
    let (status, json) = post(&state, "/api/v1/score", body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].as_str().unwrap().contains("[3]"));
}

#[tokio::test]
async fn validate_reports_each_status() {
    let state = Arc::new(AppState::default());
    let mut body = uniform_answers(1, 2, 3, 4);
    body["answers"][1] = json!({ "CE": 1, "RO": 1, "AC": 0, "AE": 0 });
    body["answers"][2] = json!({ "CE": 2, "RO": 0, "AC": 0, "AE": 0 });
    body["answers"][3] = json!({});
    let (status, json) = post(&state, "/api/v1/validate", body).await;
    assert_eq!(status, StatusCode::OK);
    let statuses = json["statuses"].as_array().unwrap();
    assert_eq!(statuses.len(), 12);
    assert_eq!(statuses[..4], [json!("complete"), json!("conflicting"), json!("incomplete"), json!("unanswered")]);
    assert_eq!(json["completed"], 9);
    assert_eq!(json["total"], 12);
    assert_eq!(json["complete"], false);
}

#[tokio::test]
async fn answer_list_must_match_questionnaire_length() {
    let state = Arc::new(AppState::default());
    for uri in ["/api/v1/score", "/api/v1/validate"] {
        for len in [0, 1, 13] {
            let (status, json) = post(&state, uri, answers_of_len(len, 1, 2, 3, 4)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri} with {len} slates");
            let msg = json["error"].as_str().unwrap();
            assert!(msg.contains(&format!("got {len}")), "{msg}");
        }
    }
}

#[tokio::test]
async fn malformed_bodies_get_json_errors() {
    let state = Arc::new(AppState::default());
    let id = new_session(&state).await;
    post(&state, &format!("/api/v1/session/{id}/start"), json!({})).await;
    let rank_uri = format!("/api/v1/session/{id}/rank");

    let cases = [
        (rank_uri.as_str(), r#"{ "questionIndex": 0, "tag": "AE", "value": 256 }"#),
        (rank_uri.as_str(), r#"{ "questionIndex": 0, "tag": "AE", "value": -1 }"#),
        (rank_uri.as_str(), r#"{ "questionIndex": 0, "tag": "XX", "value": 1 }"#),
        ("/api/v1/score", r#"{ "answers": [ { "CE": -1 } ] }"#),
        ("/api/v1/validate", r#"{ "answers": "#),
    ];
    for (uri, body) in cases {
        let (status, json) = post_raw(&state, uri, body).await;
        assert!(status.is_client_error(), "{body} -> {status}");
        assert!(json["error"].is_string(), "{body} -> {json}");
    }

    // Nothing was recorded by the rejected ranks.
    let (_, view) = get(&state, &format!("/api/v1/session/{id}")).await;
    assert_eq!(view["validation"]["statuses"][0], "unanswered");
}

// ── sessions ─────────────────────────────────────────────────────────

#[tokio::test]
async fn session_full_flow() {
    let state = Arc::new(AppState::default());
    let (status, created) = post(&state, "/api/v1/session", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["phase"], "intro");
    let id = created["id"].as_str().unwrap().to_string();

    let (status, started) = post(&state, &format!("/api/v1/session/{id}/start"), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(started["phase"], "answering");

    for q in 0..12 {
        for (tag, value) in [("CE", 4), ("RO", 3), ("AC", 2), ("AE", 1)] {
            let (status, _) = post(
                &state,
                &format!("/api/v1/session/{id}/rank"),
                json!({ "questionIndex": q, "tag": tag, "value": value }),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }
    }

    let (_, view) = get(&state, &format!("/api/v1/session/{id}")).await;
    assert_eq!(view["validation"]["completed"], 12);
    assert_eq!(view["validation"]["complete"], true);

    let (status, result) = post(&state, &format!("/api/v1/session/{id}/submit"), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["style"], "Diverging");
    assert_eq!(result["axes"], json!({ "x": -24, "y": -24 }));

    let (_, view) = get(&state, &format!("/api/v1/session/{id}")).await;
    assert_eq!(view["phase"], "results");
    assert_eq!(view["result"]["style"], "Diverging");

    let (status, reset) = post(&state, &format!("/api/v1/session/{id}/reset"), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reset["phase"], "intro");
    assert_eq!(reset["validation"]["complete"], false);
    assert!(reset.get("result").is_none());
    assert_eq!(reset["answers"][0], json!({ "CE": 0, "RO": 0, "AC": 0, "AE": 0 }));
}

#[tokio::test]
async fn duplicate_rank_is_flagged_and_blocks_submit() {
    let state = Arc::new(AppState::default());
    let (_, created) = post(&state, "/api/v1/session", json!({})).await;
    let id = created["id"].as_str().unwrap().to_string();
    post(&state, &format!("/api/v1/session/{id}/start"), json!({})).await;

    let rank = |tag: &'static str, value: u8| json!({ "questionIndex": 0, "tag": tag, "value": value });
    post(&state, &format!("/api/v1/session/{id}/rank"), rank("CE", 1)).await;
    let (_, view) = post(&state, &format!("/api/v1/session/{id}/rank"), rank("RO", 1)).await;
    assert_eq!(view["validation"]["statuses"][0], "conflicting");
    assert_eq!(view["answers"][0], json!({ "CE": 1, "RO": 1, "AC": 0, "AE": 0 }));

    let (status, json) = post(&state, &format!("/api/v1/session/{id}/submit"), json!({})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn rank_before_start_conflicts() {
    let state = Arc::new(AppState::default());
    let (_, created) = post(&state, "/api/v1/session", json!({})).await;
    let id = created["id"].as_str().unwrap().to_string();
    let (status, _) = post(
        &state,
        &format!("/api/v1/session/{id}/rank"),
        json!({ "questionIndex": 0, "tag": "AE", "value": 4 }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn bad_rank_input_is_rejected() {
    let state = Arc::new(AppState::default());
    let (_, created) = post(&state, "/api/v1/session", json!({})).await;
    let id = created["id"].as_str().unwrap().to_string();
    post(&state, &format!("/api/v1/session/{id}/start"), json!({})).await;

    let uri = format!("/api/v1/session/{id}/rank");
    let (status, _) = post(&state, &uri, json!({ "questionIndex": 12, "tag": "AE", "value": 4 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = post(&state, &uri, json!({ "questionIndex": 0, "tag": "AE", "value": 5 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn idle_sessions_free_their_slot() {
    let state = Arc::new(AppState::with_config(AppConfig {
        sessions: SessionsCfg { max_sessions: 3, idle_ttl_secs: 60 },
        ..AppConfig::default()
    }));
    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(new_session(&state).await);
    }
    let (status, json) = post(&state, "/api/v1/session", json!({})).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(json["error"].is_string());

    {
        let mut sessions = state.sessions.write().await;
        let abandoned = sessions.get_mut(&ids[0]).unwrap();
        abandoned.last_touched = abandoned.last_touched.checked_sub(Duration::from_secs(120)).unwrap();
    }

    let (status, _) = post(&state, "/api/v1/session", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get(&state, &format!("/api/v1/session/{}", ids[0])).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get(&state, &format!("/api/v1/session/{}", ids[1])).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_session_is_404() {
    let state = Arc::new(AppState::default());
    let (status, json) = get(&state, "/api/v1/session/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("does-not-exist"));
}

#[tokio::test]
async fn delete_discards_session() {
    let state = Arc::new(AppState::default());
    let (_, created) = post(&state, "/api/v1/session", json!({})).await;
    let id = created["id"].as_str().unwrap().to_string();

    let resp = app(&state)
        .oneshot(
            Request::delete(format!("/api/v1/session/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let (status, _) = get(&state, &format!("/api/v1/session/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
