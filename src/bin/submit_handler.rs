//! AWS Lambda handler for quiz submissions
//!
//! Accepts the quiz answers as JSON, prices them, and relays the lead to
//! the spreadsheet webhook and SMS alert. Paths ending in `/quote` return
//! the estimate without notifying anyone.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use std::sync::Arc;

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::Serialize;

use life_quote::relay::RelayError;
use life_quote::{AnswerSet, EstimationEngine, RelayConfig, SubmissionRelay};

#[derive(Debug, Serialize)]
struct SuccessResponse {
    success: bool,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn cors_builder(status: u16) -> lambda_http::http::response::Builder {
    Response::builder()
        .status(status)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    Ok(cors_builder(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

fn error_response(status: u16, message: impl Into<String>) -> Result<Response<Body>, Error> {
    json_response(status, &ErrorResponse { error: message.into() })
}

fn parse_answers(event: &Request) -> Result<AnswerSet, serde_json::Error> {
    match event.body() {
        Body::Text(s) => serde_json::from_str(s),
        Body::Binary(b) => serde_json::from_slice(b),
        Body::Empty => serde_json::from_str("{}"),
    }
}

/// Lambda handler function
async fn handler(relay: &SubmissionRelay, event: Request) -> Result<Response<Body>, Error> {
    let method = event.method().as_str();

    // Handle CORS preflight
    if method == "OPTIONS" {
        return Ok(cors_builder(200).body(Body::Empty)?);
    }
    if method != "POST" {
        return error_response(405, "Method not allowed");
    }

    let answers = match parse_answers(&event) {
        Ok(a) => a,
        Err(e) => return error_response(400, format!("Invalid JSON: {}", e)),
    };

    if event.uri().path().trim_end_matches('/').ends_with("/quote") {
        let estimate = relay.engine().estimate(&answers);
        return json_response(200, &estimate);
    }

    match relay.submit(&answers).await {
        Ok(_) => json_response(200, &SuccessResponse { success: true }),
        Err(e @ RelayError::MissingContact) => error_response(400, e.to_string()),
        Err(e) => {
            log::error!("Error processing submission: {}", e);
            error_response(500, "Internal server error")
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let config = RelayConfig::from_env();
    let engine = Arc::new(EstimationEngine::new(config.rate_table()?));
    let relay = SubmissionRelay::from_config(&config, engine)?;
    log::info!("Relay ready with {} notification sink(s)", relay.sink_count());

    let relay = &relay;
    run(service_fn(move |event: Request| async move { handler(relay, event).await })).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_http::http;

    fn relay() -> SubmissionRelay {
        SubmissionRelay::new(Arc::new(EstimationEngine::default()))
    }

    fn request(method: &str, path: &str, body: &str) -> Request {
        let body = if body.is_empty() {
            Body::Empty
        } else {
            Body::Text(body.to_string())
        };
        http::Request::builder()
            .method(method)
            .uri(path)
            .body(body)
            .unwrap()
    }

    fn body_json(response: &Response<Body>) -> serde_json::Value {
        match response.body() {
            Body::Text(s) => serde_json::from_str(s).unwrap(),
            other => panic!("unexpected body: {:?}", other),
        }
    }

    const SUBMISSION: &str = r#"{
        "age": 35, "gender": "male", "smoker": false, "height": 70, "weight": 180,
        "desiredCoverage": 1000000, "termLength": "20",
        "name": "Test User", "phone": "555-123-4567", "email": "test@example.com"
    }"#;

    #[tokio::test]
    async fn test_preflight() {
        let response = handler(&relay(), request("OPTIONS", "/api/submit", "")).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
    }

    #[tokio::test]
    async fn test_submit_success() {
        let response = handler(&relay(), request("POST", "/api/submit", SUBMISSION)).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(body_json(&response), serde_json::json!({"success": true}));
    }

    #[tokio::test]
    async fn test_submit_missing_contact() {
        let body = r#"{"age": 35, "name": "Test User"}"#;
        let response = handler(&relay(), request("POST", "/api/submit", body)).await.unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(body_json(&response)["error"], "Missing required fields");
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let response = handler(&relay(), request("POST", "/api/submit", "{not json")).await.unwrap();
        assert_eq!(response.status(), 400);
        assert!(body_json(&response)["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn test_quote_route_returns_estimate() {
        let response = handler(&relay(), request("POST", "/api/quote", SUBMISSION)).await.unwrap();
        assert_eq!(response.status(), 200);

        let json = body_json(&response);
        assert_eq!(json["recommendedCoverage"], 1_000_000);
        assert_eq!(json["quotes"][0]["carrier"], "Banner Life");
        assert_eq!(json["quotes"][0]["monthlyRate"], 44);
        assert_eq!(json["quotes"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_other_methods_rejected() {
        let response = handler(&relay(), request("GET", "/api/submit", "")).await.unwrap();
        assert_eq!(response.status(), 405);
    }
}
