// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Markup generation via an OpenAI-compatible chat-completions endpoint.
//!
//! The generator sends a per-kind system prompt plus the user's request (optionally
//! wrapping the previous markup for iterative refinement) and cleans the returned
//! text of code fences and a stray leading `mermaid` tag before handing it back.

mod prompt;

use std::fmt;

use serde_json::Value;

use crate::model::DiagramKind;

pub use prompt::{build_system_prompt, build_user_message};

/// Provider settings, read from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_owned(),
            model: "gpt-4o-mini".to_owned(),
            temperature: 0.2,
            max_tokens: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    MissingApiKey,
    Authentication { message: String },
    RateLimited,
    Api { status: u16, message: String },
    Network { message: String },
    InvalidResponse { message: String },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => f.write_str("OpenAI API key not configured"),
            Self::Authentication { message } => write!(f, "authentication failed: {message}"),
            Self::RateLimited => f.write_str("rate limit exceeded"),
            Self::Api { status, message } => write!(f, "provider error ({status}): {message}"),
            Self::Network { message } => write!(f, "network error: {message}"),
            Self::InvalidResponse { message } => {
                write!(f, "malformed provider response: {message}")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// Shared handle around a pooled HTTP client. Cheap to clone; created once in `main`
/// and injected into the web state rather than held in a process-wide singleton.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    client: reqwest::Client,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config, client: reqwest::Client::new() }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates Mermaid markup for `prompt`. When `previous_syntax` is given the
    /// provider is asked to modify that markup instead of starting fresh.
    pub async fn generate_diagram_syntax(
        &self,
        prompt: &str,
        kind: DiagramKind,
        previous_syntax: Option<&str>,
    ) -> Result<String, GenerateError> {
        let api_key = self.config.api_key.as_deref().ok_or(GenerateError::MissingApiKey)?;

        let payload = serde_json::json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": build_system_prompt(kind) },
                { "role": "user", "content": build_user_message(prompt, previous_syntax) },
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        });

        let url = format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'));
        tracing::debug!(kind = kind.as_str(), model = %self.config.model, "requesting completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|err| GenerateError::Network { message: err.to_string() })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| GenerateError::Network { message: err.to_string() })?;

        if !(200..300).contains(&status) {
            return Err(map_status_error(status, &body));
        }

        let value: Value = serde_json::from_str(&body)
            .map_err(|err| GenerateError::InvalidResponse { message: err.to_string() })?;
        let content = extract_content(&value);

        Ok(clean_syntax(content))
    }
}

fn map_status_error(status: u16, body: &str) -> GenerateError {
    match status {
        401 | 403 => GenerateError::Authentication { message: body.to_owned() },
        429 => GenerateError::RateLimited,
        _ => GenerateError::Api { status, message: body.to_owned() },
    }
}

fn extract_content(body: &Value) -> &str {
    body.get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .unwrap_or("")
}

/// Strips a surrounding ``` code fence and a stray leading `mermaid` language tag.
fn clean_syntax(raw: &str) -> String {
    let mut text = raw.trim().to_owned();

    if text.starts_with("```") {
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() > 2 {
            text = lines[1..lines.len() - 1].join("\n");
        }
    }

    let trimmed = text.trim();
    let mut lines = trimmed.lines();
    match lines.next() {
        Some(first) if first.trim().eq_ignore_ascii_case("mermaid") => {
            lines.collect::<Vec<&str>>().join("\n").trim().to_owned()
        }
        _ => trimmed.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{clean_syntax, extract_content, map_status_error, GenerateError, Generator, GeneratorConfig};
    use crate::model::DiagramKind;

    #[test]
    fn clean_syntax_strips_code_fences() {
        let raw = "```mermaid\nflowchart TD\n    A --> B\n```";
        assert_eq!(clean_syntax(raw), "flowchart TD\n    A --> B");
    }

    #[test]
    fn clean_syntax_drops_leading_mermaid_tag_line() {
        let raw = "mermaid\nflowchart TD\n    A --> B";
        assert_eq!(clean_syntax(raw), "flowchart TD\n    A --> B");
    }

    #[test]
    fn clean_syntax_leaves_plain_markup_alone() {
        let raw = "  pie title Pets\n    \"Dogs\" : 3  ";
        assert_eq!(clean_syntax(raw), "pie title Pets\n    \"Dogs\" : 3");
    }

    #[test]
    fn clean_syntax_keeps_a_bare_fence_pair_intact() {
        // Two lines only: nothing between the fences to extract.
        assert_eq!(clean_syntax("```\n```"), "```\n```");
    }

    #[test]
    fn extract_content_reads_the_first_choice() {
        let body = serde_json::json!({
            "choices": [ { "message": { "content": "flowchart TD" } } ],
        });
        assert_eq!(extract_content(&body), "flowchart TD");
    }

    #[test]
    fn extract_content_degrades_to_empty_on_missing_fields() {
        assert_eq!(extract_content(&serde_json::json!({})), "");
        assert_eq!(extract_content(&serde_json::json!({ "choices": [] })), "");
    }

    #[test]
    fn status_errors_map_by_code() {
        assert!(matches!(map_status_error(401, "no"), GenerateError::Authentication { .. }));
        assert!(matches!(map_status_error(403, "no"), GenerateError::Authentication { .. }));
        assert_eq!(map_status_error(429, ""), GenerateError::RateLimited);
        assert!(matches!(map_status_error(500, "boom"), GenerateError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_request() {
        let generator = Generator::new(GeneratorConfig::default());
        let err = generator
            .generate_diagram_syntax("a flow", DiagramKind::Flowchart, None)
            .await
            .expect_err("no api key");
        assert_eq!(err, GenerateError::MissingApiKey);
        assert_eq!(err.to_string(), "OpenAI API key not configured");
    }
}
