// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

fn default_diagram_type() -> String {
    "flowchart".to_owned()
}

/// Body of `POST /api/generate-diagram`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateDiagramPayload {
    #[serde(default)]
    pub prompt: String,
    #[serde(default = "default_diagram_type")]
    pub diagram_type: String,
    /// Opaque client id; when it names an existing session the previous markup is
    /// sent along as refinement context.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Body of `POST /api/validate-syntax`. `syntax` stays an `Option` so a missing
/// field gets the dedicated "No syntax provided" response instead of a serde error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidateSyntaxPayload {
    #[serde(default)]
    pub syntax: Option<String>,
    #[serde(default = "default_diagram_type")]
    pub diagram_type: String,
}

/// One entry of `GET /api/diagram-types`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramTypeOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Generic failure payload for request-model errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { success: false, error: error.into() }
    }
}
