// api client tests against a local mock of the remote service

use axum::{Json, Router, http::StatusCode, routing::post};
use profcheck::{Api, Error, Language};
use serde_json::{Value, json};

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn api_at(base_url: String) -> Api {
    Api::new(Some(base_url))
}

#[tokio::test]
async fn check_basic_unwraps_payload() {
    let router = Router::new().route(
        "/api/v1/profanity/fasttext",
        post(|| async {
            Json(json!({
                "status": "success",
                "responseData": { "isProfane": false, "category": "clean", "confidence": 98.2 }
            }))
        }),
    );
    let api = api_at(serve(router).await);

    let result = api.check_basic("hello world").await.unwrap();
    assert!(!result.is_profane);
    assert_eq!(result.category, "clean");
    assert_eq!(result.confidence, 98.2);
    assert_eq!(result.confidence_label(), "98.2%");
}

#[tokio::test]
async fn error_status_surfaces_server_message() {
    let router = Router::new().route(
        "/api/v1/profanity/fasttext",
        post(|| async { Json(json!({ "status": "error", "message": "service down" })) }),
    );
    let api = api_at(serve(router).await);

    let err = api.check_basic("hello").await.unwrap_err();
    assert_eq!(err.to_string(), "service down");
}

#[tokio::test]
async fn missing_payload_falls_back_to_capability_message() {
    let router = Router::new().route(
        "/api/v1/profanity/fasttext",
        post(|| async { Json(json!({ "status": "success" })) }),
    );
    let api = api_at(serve(router).await);

    let err = api.check_basic("hello").await.unwrap_err();
    assert_eq!(err.to_string(), "FastText API error");
}

#[tokio::test]
async fn transport_error_is_capability_named() {
    let router = Router::new()
        .route(
            "/api/v1/profanity/fasttext",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route(
            "/api/v1/profanity/transformer",
            post(|| async { (StatusCode::BAD_GATEWAY, "boom") }),
        );
    let api = api_at(serve(router).await);

    let err = api.check_basic("hello").await.unwrap_err();
    assert!(matches!(err, Error::Api(_)));
    assert_eq!(err.to_string(), "FastText API error");

    let err = api.check_transformer("hello", None).await.unwrap_err();
    assert_eq!(err.to_string(), "Transformer API error");
}

#[tokio::test]
async fn transformer_surfaces_unsupported_language() {
    let router = Router::new().route(
        "/api/v1/profanity/transformer",
        post(|| async { Json(json!({ "status": "error", "message": "unsupported language" })) }),
    );
    let api = api_at(serve(router).await);

    let err = api
        .check_transformer("hello", Some(Language::Indic))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "unsupported language");
}

// the handler echoes the language field back so the test can see
// exactly what was serialized
#[tokio::test]
async fn transformer_sends_language_only_when_set() {
    let router = Router::new().route(
        "/api/v1/profanity/transformer",
        post(|Json(body): Json<Value>| async move {
            let language = body
                .get("language")
                .and_then(Value::as_str)
                .unwrap_or("absent")
                .to_string();
            Json(json!({
                "status": "success",
                "responseData": { "isProfane": false, "category": language, "confidence": 50.0 }
            }))
        }),
    );
    let api = api_at(serve(router).await);

    let result = api
        .check_transformer("hello", Some(Language::Indic))
        .await
        .unwrap();
    assert_eq!(result.category, "indic");

    let result = api.check_transformer("hello", None).await.unwrap();
    assert_eq!(result.category, "absent");
}

#[tokio::test]
async fn detect_language_recognized() {
    let router = Router::new().route(
        "/api/v1/profanity/detect_language",
        post(|| async {
            Json(json!({ "status": "success", "detected_language": "indic", "raw": "indic" }))
        }),
    );
    let api = api_at(serve(router).await);

    let detection = api.detect_language("hello").await.unwrap();
    assert_eq!(detection.language, Some(Language::Indic));
    assert_eq!(detection.raw, "indic");
}

#[tokio::test]
async fn detect_language_unrecognized_is_not_an_error() {
    let router = Router::new().route(
        "/api/v1/profanity/detect_language",
        post(|| async {
            Json(json!({ "status": "success", "detected_language": "spanish", "raw": "spanish" }))
        }),
    );
    let api = api_at(serve(router).await);

    let detection = api.detect_language("hola amigos").await.unwrap();
    assert_eq!(detection.language, None);
    assert_eq!(detection.raw, "spanish");
}

#[tokio::test]
async fn detect_language_missing_field_fails() {
    let router = Router::new().route(
        "/api/v1/profanity/detect_language",
        post(|| async { Json(json!({ "status": "success" })) }),
    );
    let api = api_at(serve(router).await);

    let err = api.detect_language("hello").await.unwrap_err();
    assert_eq!(err.to_string(), "Language detection API error");
}

#[tokio::test]
async fn verify_llm_includes_reasoning() {
    let router = Router::new().route(
        "/api/v1/profanity/profanity_validator",
        post(|| async {
            Json(json!({
                "status": "success",
                "responseData": {
                    "isProfane": true,
                    "category": "slur",
                    "confidence": 87.5,
                    "reasoning": "the word is a known slur in context"
                }
            }))
        }),
    );
    let api = api_at(serve(router).await);

    let result = api.verify_llm("badword").await.unwrap();
    assert!(result.is_profane);
    assert_eq!(result.category, "slur");
    assert_eq!(result.reasoning, "the word is a known slur in context");
}

#[test]
fn default_base_url_when_unconfigured() {
    let api = Api::new(None);
    assert_eq!(api.base_url(), profcheck::DEFAULT_BASE_URL);
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let api = Api::new(Some("http://example.test/profanity/".to_string()));
    assert_eq!(api.base_url(), "http://example.test/profanity");
}
