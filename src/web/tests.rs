// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use super::routes::{diagram_types, generate_diagram, healthz, validate_syntax};
use super::types::{GenerateDiagramPayload, ValidateSyntaxPayload};
use super::{router, AppState};
use crate::generate::{Generator, GeneratorConfig};
use crate::model::DiagramKind;

fn test_state() -> AppState {
    // No api key configured: generation fails fast without touching the network.
    AppState::new(Generator::new(GeneratorConfig::default()))
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("collect response body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn validate_payload(syntax: Option<&str>, diagram_type: &str) -> ValidateSyntaxPayload {
    ValidateSyntaxPayload {
        syntax: syntax.map(str::to_owned),
        diagram_type: diagram_type.to_owned(),
    }
}

#[tokio::test]
async fn healthz_answers_ok() {
    assert_eq!(healthz().await, "ok");
}

#[tokio::test]
async fn router_builds_with_all_routes() {
    let _ = router(test_state());
}

#[tokio::test]
async fn diagram_types_lists_all_ten_options() {
    let Json(options) = diagram_types().await;
    assert_eq!(options.len(), DiagramKind::ALL.len());
    assert_eq!(options[0].value, "flowchart");
    assert_eq!(options[0].label, "Flowchart");
    assert_eq!(options[9].value, "mindmap");
}

#[tokio::test]
async fn validate_without_syntax_is_a_400_with_a_dedicated_error() {
    let response = validate_syntax(Json(validate_payload(None, "flowchart"))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["is_valid"], false);
    assert_eq!(body["error"], "No syntax provided");
}

#[tokio::test]
async fn validate_returns_200_for_valid_markup() {
    let response =
        validate_syntax(Json(validate_payload(Some("flowchart TD\n    A --> B"), "flowchart")))
            .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["is_valid"], true);
    assert_eq!(body["error"], serde_json::Value::Null);
}

#[tokio::test]
async fn validate_returns_200_with_the_failure_for_invalid_markup() {
    let response = validate_syntax(Json(validate_payload(
        Some("sequenceDiagram\n    participant A"),
        "flowchart",
    )))
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["is_valid"], false);
    assert_eq!(body["line_number"], 1);
    assert!(body["error"].as_str().expect("error").contains("must start with"));
}

#[tokio::test]
async fn validate_with_unknown_diagram_type_names_the_valid_tags() {
    let response = validate_syntax(Json(validate_payload(Some("venn A B"), "venn"))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["is_valid"], false);
    assert!(body["error"]
        .as_str()
        .expect("error")
        .starts_with("Invalid diagram type. Must be one of: "));
}

#[tokio::test]
async fn generate_with_blank_prompt_is_a_400() {
    let payload = GenerateDiagramPayload {
        prompt: "   ".to_owned(),
        diagram_type: "flowchart".to_owned(),
        session_id: None,
    };
    let response = generate_diagram(State(test_state()), Json(payload)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Prompt cannot be empty");
}

#[tokio::test]
async fn generate_with_unknown_diagram_type_is_a_400() {
    let payload = GenerateDiagramPayload {
        prompt: "a chart".to_owned(),
        diagram_type: "venn".to_owned(),
        session_id: None,
    };
    let response = generate_diagram(State(test_state()), Json(payload)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error")
        .starts_with("Invalid diagram type. Must be one of: "));
}

#[tokio::test]
async fn generate_provider_failure_is_a_500_with_a_failed_response() {
    let state = test_state();
    let payload = GenerateDiagramPayload {
        prompt: "a login flow".to_owned(),
        diagram_type: "flowchart".to_owned(),
        session_id: Some("s1".to_owned()),
    };
    let response = generate_diagram(State(state.clone()), Json(payload)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["diagram_type"], "flowchart");
    assert_eq!(body["syntax"], "");
    assert_eq!(
        body["error"],
        "API request failed: OpenAI API key not configured"
    );

    // Failed generations never create a session.
    assert!(state.sessions.get("s1").await.is_none());
}
