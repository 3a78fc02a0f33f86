// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::kind::DiagramKind;

pub const MAX_PROMPT_LEN: usize = 1000;

/// A diagram generation request as submitted by the web client.
///
/// `diagram_type` stays a raw string here so the error message for an unknown tag is
/// produced by `validate()` rather than by serde.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiagramRequest {
    pub prompt: String,
    pub diagram_type: String,
}

impl DiagramRequest {
    /// Checks the request and resolves the diagram kind.
    pub fn validate(&self) -> Result<DiagramKind, DiagramRequestError> {
        if self.prompt.trim().is_empty() {
            return Err(DiagramRequestError::EmptyPrompt);
        }
        if self.prompt.len() > MAX_PROMPT_LEN {
            return Err(DiagramRequestError::PromptTooLong);
        }
        DiagramKind::parse(&self.diagram_type)
            .map_err(|_| DiagramRequestError::InvalidDiagramType { tag: self.diagram_type.clone() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramRequestError {
    EmptyPrompt,
    PromptTooLong,
    InvalidDiagramType { tag: String },
}

impl fmt::Display for DiagramRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPrompt => f.write_str("Prompt cannot be empty"),
            Self::PromptTooLong => {
                write!(f, "Prompt too long (max {MAX_PROMPT_LEN} characters)")
            }
            Self::InvalidDiagramType { .. } => write!(
                f,
                "Invalid diagram type. Must be one of: {}",
                DiagramKind::all_tags_joined()
            ),
        }
    }
}

impl std::error::Error for DiagramRequestError {}

/// Outcome of a generation call, serialized back to the web client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramResponse {
    pub syntax: String,
    pub diagram_type: DiagramKind,
    pub success: bool,
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl DiagramResponse {
    pub fn success(syntax: String, diagram_type: DiagramKind) -> Self {
        Self { syntax, diagram_type, success: true, error: None, timestamp: Utc::now() }
    }

    pub fn failure(diagram_type: DiagramKind, error: impl Into<String>) -> Self {
        Self {
            syntax: String::new(),
            diagram_type,
            success: false,
            error: Some(error.into()),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DiagramRequest, DiagramRequestError, DiagramResponse, MAX_PROMPT_LEN};
    use crate::model::DiagramKind;

    fn request(prompt: &str, diagram_type: &str) -> DiagramRequest {
        DiagramRequest { prompt: prompt.to_owned(), diagram_type: diagram_type.to_owned() }
    }

    #[test]
    fn accepts_a_well_formed_request() {
        let kind = request("a login flow", "flowchart").validate().expect("valid");
        assert_eq!(kind, DiagramKind::Flowchart);
    }

    #[test]
    fn rejects_blank_prompt() {
        let err = request("   \n", "flowchart").validate().expect_err("blank prompt");
        assert_eq!(err, DiagramRequestError::EmptyPrompt);
        assert_eq!(err.to_string(), "Prompt cannot be empty");
    }

    #[test]
    fn rejects_overlong_prompt() {
        let prompt = "x".repeat(MAX_PROMPT_LEN + 1);
        let err = request(&prompt, "pie").validate().expect_err("too long");
        assert_eq!(err, DiagramRequestError::PromptTooLong);
        assert_eq!(err.to_string(), "Prompt too long (max 1000 characters)");
    }

    #[test]
    fn rejects_unknown_diagram_type_naming_all_tags() {
        let err = request("a chart", "venn").validate().expect_err("unknown type");
        let message = err.to_string();
        assert!(message.starts_with("Invalid diagram type. Must be one of: "));
        for kind in DiagramKind::ALL {
            assert!(message.contains(kind.as_str()), "missing tag {kind}");
        }
    }

    #[test]
    fn failure_response_carries_error_and_empty_syntax() {
        let response = DiagramResponse::failure(DiagramKind::Gantt, "API request failed: nope");
        assert!(!response.success);
        assert!(response.syntax.is_empty());
        assert_eq!(response.error.as_deref(), Some("API request failed: nope"));
    }
}
