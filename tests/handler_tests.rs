use lambda_runtime::{Context, LambdaEvent};
use mime_detector::api::cors::{AllowOrigins, CorsPolicy};
use mime_detector::api::handler;
use mime_detector::core::config::AppConfig;
use serde_json::{Value, json};

fn http_event(method: &str, path: &str, body: Option<&str>) -> Value {
    let mut event = json!({
        "rawPath": path,
        "requestContext": { "http": { "method": method } },
        "headers": { "content-type": "application/json" },
        "isBase64Encoded": false
    });
    if let Some(b) = body {
        event["body"] = Value::from(b);
    }
    event
}

async fn invoke(config: &AppConfig, payload: Value) -> Value {
    handler(config, LambdaEvent::new(payload, Context::default()))
        .await
        .expect("handler never fails on request content")
}

fn body_json(response: &Value) -> Value {
    let body = response["body"].as_str().expect("body is a string");
    serde_json::from_str(body).expect("body is JSON")
}

#[tokio::test]
async fn test_post_file_classifies_image() {
    let config = AppConfig::default();
    let resp = invoke(
        &config,
        http_event(
            "POST",
            "/file",
            Some(r#"{"attachments": {"url": "data:image/png,AA"}}"#),
        ),
    )
    .await;

    assert_eq!(resp["statusCode"], 200);
    assert_eq!(resp["headers"]["Content-Type"], "application/json");
    assert_eq!(body_json(&resp), json!({ "type": "image" }));
}

#[tokio::test]
async fn test_post_file_unparseable_uri_is_unknown() {
    let config = AppConfig::default();
    let resp = invoke(
        &config,
        http_event(
            "POST",
            "/file",
            Some(r#"{"attachments": {"url": "not-a-data-uri"}}"#),
        ),
    )
    .await;

    assert_eq!(resp["statusCode"], 200);
    assert_eq!(body_json(&resp), json!({ "type": "unknown" }));
}

#[tokio::test]
async fn test_post_file_missing_url_is_400() {
    let config = AppConfig::default();
    let resp = invoke(
        &config,
        http_event("POST", "/file", Some(r#"{"attachments": {}}"#)),
    )
    .await;

    assert_eq!(resp["statusCode"], 400);
    assert_eq!(
        body_json(&resp),
        json!({ "detail": "Missing 'url' in attachments" })
    );
}

#[tokio::test]
async fn test_post_file_malformed_body_is_422() {
    let config = AppConfig::default();
    for body in [None, Some("not json"), Some(r#"{"files": {}}"#), Some(r#"{"attachments": {"url": 1}}"#)] {
        let resp = invoke(&config, http_event("POST", "/file", body)).await;
        assert_eq!(resp["statusCode"], 422, "body: {body:?}");
        assert!(body_json(&resp)["detail"].is_string());
    }
}

#[tokio::test]
async fn test_post_file_base64_encoded_body() {
    let config = AppConfig::default();
    // {"attachments":{"url":"data:text/plain,hi"}}
    let mut event = http_event(
        "POST",
        "/file",
        Some("eyJhdHRhY2htZW50cyI6eyJ1cmwiOiJkYXRhOnRleHQvcGxhaW4saGkifX0="),
    );
    event["isBase64Encoded"] = Value::from(true);

    let resp = invoke(&config, event).await;
    assert_eq!(resp["statusCode"], 200);
    assert_eq!(body_json(&resp), json!({ "type": "text" }));
}

#[tokio::test]
async fn test_rest_v1_event_shape() {
    let config = AppConfig::default();
    let event = json!({
        "path": "/file",
        "httpMethod": "POST",
        "headers": {},
        "body": r#"{"attachments": {"url": "data:application/pdf;base64,JVBERi0="}}"#
    });

    let resp = invoke(&config, event).await;
    assert_eq!(resp["statusCode"], 200);
    assert_eq!(body_json(&resp), json!({ "type": "application" }));
}

#[tokio::test]
async fn test_health_check() {
    let config = AppConfig::default();
    let resp = invoke(&config, http_event("GET", "/", None)).await;

    assert_eq!(resp["statusCode"], 200);
    assert_eq!(
        body_json(&resp),
        json!({ "status": "healthy", "service": "MIME Type Detector API" })
    );
}

#[tokio::test]
async fn test_unknown_route_and_wrong_method() {
    let config = AppConfig::default();

    let resp = invoke(&config, http_event("GET", "/missing", None)).await;
    assert_eq!(resp["statusCode"], 404);

    let resp = invoke(&config, http_event("GET", "/file", None)).await;
    assert_eq!(resp["statusCode"], 405);
    assert_eq!(body_json(&resp), json!({ "detail": "Method Not Allowed" }));
}

#[tokio::test]
async fn test_event_without_path_is_404() {
    let config = AppConfig::default();
    let event = json!({
        "requestContext": { "http": { "method": "POST" } },
        "headers": {},
        "body": r#"{"attachments": {"url": "data:image/png,AA"}}"#
    });

    let resp = invoke(&config, event).await;
    assert_eq!(resp["statusCode"], 404);
    assert_eq!(body_json(&resp), json!({ "detail": "Not Found" }));
}

#[tokio::test]
async fn test_cors_headers_on_simple_request() {
    let config = AppConfig::default();
    let mut event = http_event(
        "POST",
        "/file",
        Some(r#"{"attachments": {"url": "data:image/png,AA"}}"#),
    );
    event["headers"]["origin"] = Value::from("https://frontend.example");

    let resp = invoke(&config, event).await;
    assert_eq!(
        resp["headers"]["Access-Control-Allow-Origin"],
        "https://frontend.example"
    );
    assert_eq!(resp["headers"]["Access-Control-Allow-Credentials"], "true");

    // Error responses carry CORS headers too
    let mut event = http_event("POST", "/file", Some(r#"{"attachments": {}}"#));
    event["headers"]["Origin"] = Value::from("https://frontend.example");
    let resp = invoke(&config, event).await;
    assert_eq!(resp["statusCode"], 400);
    assert_eq!(
        resp["headers"]["Access-Control-Allow-Origin"],
        "https://frontend.example"
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let config = AppConfig::default();
    let event = json!({
        "rawPath": "/file",
        "requestContext": { "http": { "method": "OPTIONS" } },
        "headers": {
            "origin": "https://frontend.example",
            "access-control-request-method": "POST",
            "access-control-request-headers": "content-type,authorization"
        }
    });

    let resp = invoke(&config, event).await;
    assert_eq!(resp["statusCode"], 200);
    assert_eq!(resp["body"], "OK");
    let headers = &resp["headers"];
    assert_eq!(headers["Access-Control-Allow-Origin"], "https://frontend.example");
    assert_eq!(
        headers["Access-Control-Allow-Methods"],
        "DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT"
    );
    assert_eq!(headers["Access-Control-Allow-Headers"], "content-type,authorization");
    assert_eq!(headers["Access-Control-Allow-Credentials"], "true");
}

#[tokio::test]
async fn test_restricted_origin_preflight_rejected() {
    let config = AppConfig {
        cors: CorsPolicy {
            allow_origins: AllowOrigins::List(vec!["https://ok.example".to_string()]),
            ..CorsPolicy::permissive()
        },
        ..AppConfig::default()
    };
    let event = json!({
        "rawPath": "/file",
        "requestContext": { "http": { "method": "OPTIONS" } },
        "headers": {
            "Origin": "https://evil.example",
            "Access-Control-Request-Method": "POST"
        }
    });

    let resp = invoke(&config, event).await;
    assert_eq!(resp["statusCode"], 400);
    assert_eq!(resp["body"], "Disallowed CORS origin");
    assert!(resp["headers"].get("Access-Control-Allow-Origin").is_none());
}
