//! API integration tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::util::ServiceExt;

mod common;
use common::create_test_router;

/// Helper to make JSON requests
///
/// Non-JSON bodies (axum's extractor rejections are plain text) come back
/// as a JSON string value.
async fn json_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = if let Some(json) = body {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap()
    } else {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body: Value = if body_bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&body_bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body_bytes).into_owned()))
    };

    (status, body)
}

#[tokio::test]
async fn test_root_banner() {
    let app = create_test_router().unwrap();

    let (status, body) = json_request(&app, "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Live in USA");
    assert_eq!(body["docs"], "/docs");

    let time_re =
        regex::Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} (AM|PM) E[SD]T$").unwrap();
    let time = body["time"].as_str().unwrap();
    assert!(time_re.is_match(time), "unexpected time format: {time}");
}

#[tokio::test]
async fn test_list_cards_in_registry_order() {
    let app = create_test_router().unwrap();

    let (status, body) = json_request(&app, "GET", "/cards", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            "Amazon Gift Card",
            "Google Play Gift Card",
            "Steam Gift Card",
            "Best Buy Gift Card"
        ])
    );
}

#[tokio::test]
async fn test_generate_defaults_to_single_voucher() {
    let app = create_test_router().unwrap();

    let (status, body) = json_request(
        &app,
        "POST",
        "/generate",
        Some(json!({"card_name": "Amazon Gift Card"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);

    let voucher = items[0]["voucher"].as_str().unwrap();
    let re = regex::Regex::new(r"^[A-Z0-9]{4}-[A-Z0-9]{4}-[A-Z0-9]{4}$").unwrap();
    assert!(re.is_match(voucher), "unexpected voucher: {voucher}");
    assert!(items[0]["pin"].is_null());
}

#[tokio::test]
async fn test_generate_returns_requested_count_for_every_brand() {
    let app = create_test_router().unwrap();
    let registry = voucher_core::BrandRegistry::builtin().unwrap();

    for format in registry.formats() {
        let (status, body) = json_request(
            &app,
            "POST",
            "/generate",
            Some(json!({"card_name": format.name, "count": 5})),
        )
        .await;

        assert_eq!(status, StatusCode::OK, "{}", format.name);
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 5, "{}", format.name);
        for item in items {
            let voucher = item["voucher"].as_str().unwrap();
            assert!(
                format.pattern.is_match(voucher),
                "{} produced {voucher}",
                format.name
            );
        }
    }
}

#[tokio::test]
async fn test_generate_best_buy_includes_pin() {
    let app = create_test_router().unwrap();

    let (status, body) = json_request(
        &app,
        "POST",
        "/generate",
        Some(json!({"card_name": "Best Buy Gift Card", "count": 3})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    for item in body.as_array().unwrap() {
        let pin = item["pin"].as_str().unwrap();
        assert_eq!(pin.len(), 4);
        assert!(pin.bytes().all(|b| b.is_ascii_digit()), "pin: {pin}");
    }
}

#[tokio::test]
async fn test_generate_unknown_brand_is_404() {
    let app = create_test_router().unwrap();

    let (status, body) = json_request(
        &app,
        "POST",
        "/generate",
        Some(json!({"card_name": "Walmart Gift Card"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Not supported"}));
}

#[tokio::test]
async fn test_generate_count_out_of_range_is_422() {
    let app = create_test_router().unwrap();

    for count in [0, 51] {
        let (status, body) = json_request(
            &app,
            "POST",
            "/generate",
            Some(json!({"card_name": "Amazon Gift Card", "count": count})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "count={count}");
        assert!(
            body["detail"].as_str().unwrap().contains("between 1 and 50"),
            "count={count}"
        );
    }
}

#[tokio::test]
async fn test_generate_count_bounds_are_inclusive() {
    let app = create_test_router().unwrap();

    for count in [1, 50] {
        let (status, body) = json_request(
            &app,
            "POST",
            "/generate",
            Some(json!({"card_name": "Steam Gift Card", "count": count})),
        )
        .await;

        assert_eq!(status, StatusCode::OK, "count={count}");
        assert_eq!(body.as_array().unwrap().len(), count);
    }
}

#[tokio::test]
async fn test_generate_malformed_body_is_422() {
    let app = create_test_router().unwrap();

    // Missing required card_name
    let (status, _) = json_request(&app, "POST", "/generate", Some(json!({"count": 2}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Negative count cannot deserialize
    let (status, _) = json_request(
        &app,
        "POST",
        "/generate",
        Some(json!({"card_name": "Amazon Gift Card", "count": -1})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_validate_best_buy_with_pin() {
    let app = create_test_router().unwrap();

    let (status, body) = json_request(
        &app,
        "POST",
        "/validate",
        Some(json!({
            "card_name": "Best Buy Gift Card",
            "voucher": "1234 5678 9012 3456",
            "pin": "1234"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"valid": true, "accuracy": 100.0}));
}

#[tokio::test]
async fn test_validate_best_buy_pin_wrong_length() {
    let app = create_test_router().unwrap();

    let (status, body) = json_request(
        &app,
        "POST",
        "/validate",
        Some(json!({
            "card_name": "Best Buy Gift Card",
            "voucher": "1234 5678 9012 3456",
            "pin": "12"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"valid": false, "accuracy": 0.0}));
}

#[tokio::test]
async fn test_validate_voucher_shape_mismatch() {
    let app = create_test_router().unwrap();

    // Lowercase letters never match the uppercase pattern
    let (status, body) = json_request(
        &app,
        "POST",
        "/validate",
        Some(json!({"card_name": "Amazon Gift Card", "voucher": "ab12-cd34-ef56"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(body["accuracy"], 0.0);
}

#[tokio::test]
async fn test_validate_unknown_brand_is_404() {
    let app = create_test_router().unwrap();

    let (status, body) = json_request(
        &app,
        "POST",
        "/validate",
        Some(json!({"card_name": "Nope", "voucher": "AAAA-BBBB-CCCC"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Not supported"}));
}

#[tokio::test]
async fn test_generated_vouchers_validate_round_trip() {
    let app = create_test_router().unwrap();
    let registry = voucher_core::BrandRegistry::builtin().unwrap();

    for format in registry.formats() {
        let (status, generated) = json_request(
            &app,
            "POST",
            "/generate",
            Some(json!({"card_name": format.name, "count": 3})),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{}", format.name);

        for item in generated.as_array().unwrap() {
            let (status, verdict) = json_request(
                &app,
                "POST",
                "/validate",
                Some(json!({
                    "card_name": format.name,
                    "voucher": item["voucher"],
                    "pin": item["pin"]
                })),
            )
            .await;

            assert_eq!(status, StatusCode::OK, "{}", format.name);
            assert_eq!(
                verdict,
                json!({"valid": true, "accuracy": 100.0}),
                "{} rejected its own voucher {}",
                format.name,
                item["voucher"]
            );
        }
    }
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_router().unwrap();

    let (status, body) = json_request(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "cardsrv");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = create_test_router().unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/cards")
                .header("origin", "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok());
    assert_eq!(allow_origin, Some("*"));
}
