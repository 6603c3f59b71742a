use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use dieta_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use httpmock::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

struct TestApp {
    server: TestServer,
    gemini: MockServer,
    _data_dir: TempDir,
}

async fn spawn_app(api_key: &str) -> TestApp {
    let data_dir = TempDir::new().unwrap();
    let gemini = MockServer::start_async().await;

    let args = Args::parse_from([
        "dieta".to_string(),
        "--data-dir".to_string(),
        data_dir.path().display().to_string(),
        "--gemini-base-url".to_string(),
        gemini.base_url(),
        "--gemini-model".to_string(),
        "gemini-test".to_string(),
        format!("--gemini-api-key={api_key}"),
        "--gemini-max-retry-wait-secs".to_string(),
        "0".to_string(),
        "--root-path".to_string(),
        String::new(),
    ]);
    let app_state = state(Arc::new(args)).await.unwrap();
    let server = TestServer::new(router(app_state).unwrap()).unwrap();

    TestApp {
        server,
        gemini,
        _data_dir: data_dir,
    }
}

fn gemini_reply(text: &str) -> Value {
    json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
}

#[tokio::test]
async fn test_health_live() {
    let app = spawn_app("test-key").await;

    let response = app.server.get("/health/live").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_estimate_macros_from_truncated_reply() {
    let app = spawn_app("test-key").await;
    app.gemini
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1beta/models/gemini-test:generateContent");
            then.status(200).json_body(gemini_reply(
                r#"```json
{"calorias": 420.4, "proteinas": 18.26, "carboidratos": 55, "gorduras": 14.04, "porcao": "1 prato"#,
            ));
        })
        .await;

    let response = app
        .server
        .post("/estimate-macros")
        .json(&json!({ "descricao": "1 prato de arroz com frango" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "macros": {
            "calorias": 420.0,
            "proteinas": 18.3,
            "carboidratos": 55.0,
            "gorduras": 14.0
        },
        "porcao": "1 prato"
    }));
}

#[tokio::test]
async fn test_estimate_macros_without_api_key_is_unavailable() {
    let app = spawn_app("").await;

    let response = app
        .server
        .post("/estimate-macros")
        .json(&json!({ "descricao": "banana" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], 503);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("GEMINI_API_KEY")
    );
}

#[tokio::test]
async fn test_estimate_macros_with_malformed_reply_is_a_server_error() {
    let app = spawn_app("test-key").await;
    app.gemini
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200).json_body(gemini_reply("{calorias: 200}"));
        })
        .await;

    let response = app
        .server
        .post("/estimate-macros")
        .json(&json!({ "descricao": "bolo" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("AI response contains a malformed JSON object")
    );
}

#[tokio::test]
async fn test_estimate_macros_rejects_empty_description() {
    let app = spawn_app("test-key").await;

    let response = app
        .server
        .post("/estimate-macros")
        .json(&json!({ "descricao": "" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_food_meal_and_diary_flow() {
    let app = spawn_app("test-key").await;

    let food = app
        .server
        .post("/foods")
        .json(&json!({
            "name": "Arroz",
            "serving": "100g",
            "macros": { "calorias": 130, "proteinas": 2.5, "carboidratos": 28, "gorduras": 0.5 }
        }))
        .await;
    food.assert_status(StatusCode::CREATED);
    let food_id = food.json::<Value>()["data"]["id"].as_str().unwrap().to_string();

    let meal = app
        .server
        .post("/meals")
        .json(&json!({
            "name": "Almoço",
            "items": [{ "food_id": food_id, "quantity": 2 }]
        }))
        .await;
    meal.assert_status(StatusCode::CREATED);
    let meal = meal.json::<Value>();
    assert_eq!(meal["data"]["macros"]["calorias"], 260.0);
    let meal_id = meal["data"]["id"].as_str().unwrap().to_string();

    let entry = app
        .server
        .post("/diary/entries")
        .json(&json!({
            "kind": "meal",
            "item_id": meal_id,
            "quantity": 0.5,
            "date": "2026-04-01T12:00:00Z"
        }))
        .await;
    entry.assert_status(StatusCode::CREATED);
    let entry_id = entry.json::<Value>()["data"]["id"].as_str().unwrap().to_string();

    let day = app
        .server
        .get("/diary")
        .add_query_param("date", "2026-04-01")
        .await;
    day.assert_status_ok();
    let day = day.json::<Value>();
    assert_eq!(day["entries"].as_array().unwrap().len(), 1);
    assert_eq!(day["totals"]["calorias"], 130.0);
    assert_eq!(day["totals"]["carboidratos"], 28.0);

    app.server
        .delete(&format!("/diary/entries/{entry_id}"))
        .await
        .assert_status_ok();
    app.server
        .delete(&format!("/diary/entries/{entry_id}"))
        .expect_failure()
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let foods = app.server.get("/foods").await.json::<Value>();
    assert_eq!(foods["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_food_validation_and_not_found() {
    let app = spawn_app("test-key").await;

    app.server
        .post("/foods")
        .json(&json!({
            "name": "",
            "serving": "100g",
            "macros": { "calorias": 1, "proteinas": 0, "carboidratos": 0, "gorduras": 0 }
        }))
        .expect_failure()
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    app.server
        .get("/foods/0190b5a4-7e7b-7cc4-9c7e-3d2f3c1a0b11")
        .expect_failure()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_diary_estimate_is_logged() {
    let app = spawn_app("test-key").await;
    app.gemini
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200).json_body(gemini_reply(
                r#"Here is the JSON requested: {"calorias": 95, "proteinas": 0.5, "carboidratos": 25, "gorduras": 0.3, "porcao": "1 maçã média"}"#,
            ));
        })
        .await;

    let response = app
        .server
        .post("/diary/estimates")
        .json(&json!({ "descricao": "maçã", "date": "2026-04-02T08:00:00Z" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let entry = response.json::<Value>();
    assert_eq!(entry["data"]["kind"], "estimate");
    assert_eq!(entry["data"]["macros"]["calorias"], 95.0);
    assert_eq!(entry["data"]["description"], "maçã (1 maçã média)");
}
