// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::types::{
    DiagramTypeOption, ErrorBody, GenerateDiagramPayload, ValidateSyntaxPayload,
};
use super::AppState;
use crate::model::{DiagramKind, DiagramRequest, DiagramResponse, ValidationOutcome};
use crate::validate::validate_syntax as run_validation;

pub(super) async fn healthz() -> &'static str {
    "ok"
}

pub(super) async fn diagram_types() -> Json<Vec<DiagramTypeOption>> {
    let options = DiagramKind::ALL
        .iter()
        .map(|kind| DiagramTypeOption { value: kind.as_str(), label: kind.label() })
        .collect();
    Json(options)
}

pub(super) async fn generate_diagram(
    State(state): State<AppState>,
    Json(payload): Json<GenerateDiagramPayload>,
) -> Response {
    let request = DiagramRequest {
        prompt: payload.prompt,
        diagram_type: payload.diagram_type,
    };
    let kind = match request.validate() {
        Ok(kind) => kind,
        Err(err) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorBody::new(err.to_string())))
                .into_response();
        }
    };

    // Refinement context only applies while the session stays on the same kind;
    // switching kinds starts the diagram over.
    let previous_syntax = match payload.session_id.as_deref() {
        Some(session_id) => state
            .sessions
            .get(session_id)
            .await
            .filter(|session| session.kind() == kind)
            .map(|session| session.current_syntax().to_owned()),
        None => None,
    };

    match state
        .generator
        .generate_diagram_syntax(&request.prompt, kind, previous_syntax.as_deref())
        .await
    {
        Ok(syntax) => {
            if let Some(session_id) = payload.session_id.as_deref() {
                state.sessions.record(session_id, syntax.clone(), kind).await;
            }
            tracing::info!(
                kind = kind.as_str(),
                refined = previous_syntax.is_some(),
                "generated diagram markup"
            );
            (StatusCode::OK, Json(DiagramResponse::success(syntax, kind))).into_response()
        }
        Err(err) => {
            tracing::error!(kind = kind.as_str(), error = %err, "diagram generation failed");
            let response = DiagramResponse::failure(kind, format!("API request failed: {err}"));
            (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
        }
    }
}

pub(super) async fn validate_syntax(Json(payload): Json<ValidateSyntaxPayload>) -> Response {
    let Some(syntax) = payload.syntax else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ValidationOutcome::invalid("No syntax provided")),
        )
            .into_response();
    };

    let outcome = match DiagramKind::parse(&payload.diagram_type) {
        Ok(kind) => run_validation(&syntax, kind),
        Err(_) => ValidationOutcome::invalid(format!(
            "Invalid diagram type. Must be one of: {}",
            DiagramKind::all_tags_joined()
        )),
    };

    (StatusCode::OK, Json(outcome)).into_response()
}
