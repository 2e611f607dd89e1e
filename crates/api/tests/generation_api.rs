//! Integration tests for the per-step generation endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, post_json, FIRST_TITLE};
use serde_json::json;
use sqlx::PgPool;
use videofuel_core::content::GenerationKind;
use videofuel_db::repositories::{GenerationRepo, SeoAnalysisRepo};

#[sqlx::test(migrations = "../db/migrations")]
async fn generate_titles_returns_parsed_list(pool: PgPool) {
    let (app, stub) = common::build_stub_app(pool.clone());

    let response = post_json(
        app,
        "/api/generate-titles",
        json!({ "topic": "how to cook pasta" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let titles = json["titles"].as_array().unwrap();
    assert_eq!(titles.len(), 5);
    assert_eq!(titles[0], FIRST_TITLE);
    assert_eq!(titles[1], "Pasta Secrets Chefs Never Tell You About");
    assert_eq!(json["language"], "en");
    assert_eq!(json["model_used"], "nousresearch/hermes-2-pro-llama-3-8b");

    let request = stub.last_request();
    assert_eq!(request.model, "nousresearch/hermes-2-pro-llama-3-8b");
    assert!(request.messages[1].content.contains("how to cook pasta"));

    let logged = GenerationRepo::list(&pool, Some(GenerationKind::Titles), 10, 0)
        .await
        .unwrap();
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].input["topic"], "how to cook pasta");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn generate_titles_honours_language_and_model(pool: PgPool) {
    let (app, stub) = common::build_stub_app(pool);

    let response = post_json(
        app,
        "/api/generate-titles",
        json!({ "topic": "makarna", "language": "tr", "model": "gpt4o" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["language"], "tr");
    assert_eq!(json["model_used"], "openai/gpt-4o");

    let request = stub.last_request();
    assert!(request.messages[0].content.contains("Türkçe"));
    assert!(request.messages[1].content.contains("Konu: makarna"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_model_or_language_is_rejected(pool: PgPool) {
    let (app, stub) = common::build_stub_app(pool);

    let response = post_json(
        app.clone(),
        "/api/generate-titles",
        json!({ "topic": "pasta", "model": "llama-9000" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = post_json(
        app,
        "/api/generate-titles",
        json!({ "topic": "pasta", "language": "de" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(stub.call_count(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_topic_is_rejected_before_provider_call(pool: PgPool) {
    let (app, stub) = common::build_stub_app(pool);

    let response = post_json(app, "/api/generate-titles", json!({ "topic": "   " })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(stub.call_count(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn generate_description_splits_hashtags(pool: PgPool) {
    let (app, _) = common::build_stub_app(pool);

    let response = post_json(
        app,
        "/api/generate-description",
        json!({ "title": FIRST_TITLE }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["description"],
        "Learn how to cook pasta perfectly. Tips from real chefs."
    );
    assert_eq!(json["hashtags"], json!(["#pasta", "#cooking", "#food"]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn generate_script_returns_sections(pool: PgPool) {
    let (app, stub) = common::build_stub_app(pool);

    let response = post_json(
        app,
        "/api/generate-script",
        json!({ "title": FIRST_TITLE, "video_length_minutes": 8, "model": "mixtral" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["hook"], "Ever wondered why restaurant pasta tastes better?");
    let sections = json["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0]["title"], "Water");
    assert_eq!(sections[0]["content"], "Salt it like the sea.");
    assert_eq!(json["outro"], "Subscribe for more recipes!");
    assert_eq!(json["model_used"], "mistralai/mixtral-8x22b-instruct");

    let request = stub.last_request();
    assert_eq!(request.max_tokens, 3000);
    assert!(request.messages[1].content.contains("8 minutes"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn script_length_out_of_range_is_rejected(pool: PgPool) {
    let (app, stub) = common::build_stub_app(pool);

    let response = post_json(
        app,
        "/api/generate-script",
        json!({ "title": FIRST_TITLE, "video_length_minutes": 0 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(stub.call_count(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn generate_thumbnail_returns_three_texts(pool: PgPool) {
    let (app, _) = common::build_stub_app(pool);

    let response = post_json(
        app,
        "/api/generate-thumbnail",
        json!({ "title": FIRST_TITLE }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["thumbnail_texts"],
        json!(["PERFECT PASTA", "CHEF SECRETS", "NEVER FAIL AGAIN"])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn analyze_seo_scores_without_provider(pool: PgPool) {
    let (app, stub) = common::build_stub_app(pool.clone());

    let response = post_json(
        app,
        "/api/analyze-seo",
        json!({
            "title": "Amazing Pasta Secrets You Must Know Before Cooking Tonight",
            "description": "Pasta secrets from real chefs.",
            "hashtags": ["#pasta", "#secrets"],
            "language": "en"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let scores = &json["scores"];
    for key in [
        "clickbait_score",
        "keyword_relevance_score",
        "length_score",
        "overall_seo_score",
    ] {
        let value = scores[key].as_u64().unwrap();
        assert!(value <= 100, "{key} out of range: {value}");
    }
    assert!(json["recommendations"].is_array());
    assert_eq!(stub.call_count(), 0);

    let analyses = SeoAnalysisRepo::list(&pool, 10, 0).await.unwrap();
    assert_eq!(analyses.len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn seo_length_counts_padding(pool: PgPool) {
    let (app, _) = common::build_stub_app(pool);
    let padded = format!("{pad}{body}{pad}", pad = " ".repeat(15), body = "x".repeat(60));

    let response = post_json(
        app,
        "/api/analyze-seo",
        json!({ "title": padded, "description": "", "hashtags": [] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // 90 characters: 30 away from the target, 3 points each.
    let json = body_json(response).await;
    assert_eq!(json["scores"]["length_score"], 10);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn provider_failure_returns_502_and_logs_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone(), Arc::new(common::FailingLlm));

    let response = post_json(app, "/api/generate-titles", json!({ "topic": "pasta" })).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "LLM_ERROR");
    assert!(json["error"].as_str().unwrap().contains("upstream exploded"));

    let logged = GenerationRepo::list(&pool, None, 10, 0).await.unwrap();
    assert!(logged.is_empty());
}
