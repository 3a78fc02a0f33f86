// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTTP surface: the axum router and its handlers.
//!
//! Routes mirror what the web client needs: generate markup from a prompt, validate
//! markup, list the selectable diagram types, and a liveness probe. Handlers never
//! panic; every failure becomes a JSON payload with an appropriate status code.

mod routes;
mod types;

use axum::routing::{get, post};
use axum::Router;

use crate::generate::Generator;
use crate::store::SessionStore;

pub use types::{DiagramTypeOption, ErrorBody, GenerateDiagramPayload, ValidateSyntaxPayload};

/// Shared per-request context, cloned into each handler.
#[derive(Clone)]
pub struct AppState {
    pub generator: Generator,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(generator: Generator) -> Self {
        Self { generator, sessions: SessionStore::new() }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(routes::healthz))
        .route("/api/generate-diagram", post(routes::generate_diagram))
        .route("/api/validate-syntax", post(routes::validate_syntax))
        .route("/api/diagram-types", get(routes::diagram_types))
        .with_state(state)
}

#[cfg(test)]
mod tests;
