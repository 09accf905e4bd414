// API Integration Tests
//
// Purpose: Exercise every endpoint through the router
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use mountain_zones::{create_router, AppState};
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    // Helper: Create test app
    fn create_test_app() -> axum::Router {
        create_router(AppState::new(10))
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    async fn get(uri: &str) -> axum::response::Response {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(uri: &str, body: Value) -> axum::response::Response {
        create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: Reference Table
    // =========================================================================

    #[tokio::test]
    async fn test_list_latitude_bands() {
        let response = get("/api/latitude-bands").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let bands = body["latitude_bands"].as_array().unwrap();
        assert_eq!(bands.len(), 5);
        assert_eq!(bands[1]["latitude"], "subtropical");
        assert_eq!(bands[1]["lapse_rate"], 0.6);
    }

    #[tokio::test]
    async fn test_get_latitude_band() {
        let response = get("/api/latitude-bands/cold-temperate").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["lapse_rate"], 0.5);
        let bands = body["bands"].as_array().unwrap();
        assert_eq!(bands.len(), 6);
        assert_eq!(bands[5]["name"], "冰雪带");
    }

    #[tokio::test]
    async fn test_get_unknown_latitude_band() {
        let response = get("/api/latitude-bands/equatorial").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("equatorial"));
    }

    // =========================================================================
    // Section 3: Distribution
    // =========================================================================

    #[tokio::test]
    async fn test_zones_reference_scenario() {
        let response = get("/api/zones?latitude=subtropical&base_temp=15&height=7800").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["snowline"], 2500.0);
        assert_eq!(body["snowline_status"]["kind"], "below_summit");
        assert_eq!(body["snowline_display"], "2500 m");
        let bands = body["bands"].as_array().unwrap();
        assert_eq!(bands.len(), 4);
        assert_eq!(bands[3]["min_elevation"], 2500.0);
        assert_eq!(bands[3]["max_elevation"], 7800.0);
    }

    #[tokio::test]
    async fn test_zones_defaults() {
        let response = get("/api/zones").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["latitude"], "subtropical");
        assert_eq!(body["base_temperature"], 15.0);
        assert_eq!(body["mountain_height"], 7800.0);
    }

    #[tokio::test]
    async fn test_zones_negative_temperature() {
        let response = get("/api/zones?latitude=frigid&base_temp=-5&height=3000").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["snowline"], 0.0);
        assert_eq!(body["snowline_status"]["kind"], "absent");
        assert_eq!(body["bands"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_zones_invalid_height() {
        let response = get("/api/zones?latitude=temperate&base_temp=10&height=0").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("height"));
    }

    #[tokio::test]
    async fn test_zones_unknown_latitude() {
        let response = get("/api/zones?latitude=polar&base_temp=10&height=1000").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // =========================================================================
    // Section 4: Batch
    // =========================================================================

    #[tokio::test]
    async fn test_zones_batch() {
        let response = post_json(
            "/api/zones/batch",
            serde_json::json!({
                "queries": [
                    { "latitude": "subtropical", "base_temp": 15.0, "height": 7800.0 },
                    { "latitude": "polar", "base_temp": 15.0, "height": 7800.0 },
                    { "latitude": "temperate", "base_temp": 30.0, "height": 500.0 },
                    { "latitude": "frigid", "base_temp": 5.0, "height": -1.0 }
                ]
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["count"], 4);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results[0]["ok"]["snowline"], 2500.0);
        assert!(results[1]["error"].as_str().unwrap().contains("polar"));
        assert_eq!(results[2]["ok"]["snowline"], 5455.0);
        assert!(results[3]["error"].is_string());
    }

    #[tokio::test]
    async fn test_zones_batch_limit() {
        let queries: Vec<Value> = (0..11)
            .map(|i| serde_json::json!({ "latitude": "tropical", "base_temp": 20.0, "height": 1000.0 + i as f64 }))
            .collect();
        let response = post_json("/api/zones/batch", serde_json::json!({ "queries": queries })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
