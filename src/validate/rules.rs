// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Kind-specific rule sets, each ending in the balance scan.
//!
//! Only flowchart (direction code) and pie (numeric values) can fail on their own.
//! The sequence and ER recognizers classify lines but deliberately never reject one:
//! generator output uses more of the Mermaid surface than these patterns cover, so an
//! unmatched line is logged at debug level and accepted.

use std::sync::OnceLock;

use regex::Regex;

use super::balance::scan_balance;
use crate::model::ValidationOutcome;

const FLOWCHART_DIRECTIONS: [&str; 5] = ["TD", "TB", "BT", "LR", "RL"];

/// Flowchart: an explicit direction token after the `flowchart` keyword must be one
/// of the five direction codes. `graph` headers are not direction-checked.
pub(super) fn check_flowchart(syntax: &str) -> ValidationOutcome {
    let first_line = syntax.trim().lines().next().map(str::trim).unwrap_or("");

    if first_line.starts_with("flowchart") {
        let mut tokens = first_line.split_whitespace();
        let _keyword = tokens.next();
        if let Some(direction) = tokens.next() {
            if !FLOWCHART_DIRECTIONS.contains(&direction) {
                return ValidationOutcome::invalid_at(
                    format!(
                        "Invalid flowchart direction. Must be one of: {}",
                        FLOWCHART_DIRECTIONS.join(", ")
                    ),
                    1,
                );
            }
        }
    }

    scan_balance(syntax)
}

fn sequence_line_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            r"^participant\s+\w+",
            r"^actor\s+\w+",
            r"^\w+\s*->>[-+]?\s*\w+\s*:",
            r"^\w+\s*-->>[-+]?\s*\w+\s*:",
            r"^Note\s+(right|left|over)\s+of\s+\w+",
            r"^loop\s+",
            r"^alt\s+",
            r"^else\s*",
            r"^end\s*",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid sequence pattern"))
        .collect()
    })
}

/// Sequence: recognizes participant/actor declarations, message arrows, notes and
/// loop/alt/else/end blocks. Pass-through: unrecognized lines are accepted.
pub(super) fn check_sequence(syntax: &str) -> ValidationOutcome {
    for (idx, raw) in syntax.trim().lines().enumerate().skip(1) {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let recognized = sequence_line_patterns().iter().any(|pattern| pattern.is_match(line));
        if !recognized {
            tracing::debug!(line_no = idx + 1, line, "unrecognized sequence diagram line");
        }
    }

    scan_balance(syntax)
}

fn er_relationship_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\w+\s+\|[\|o\{]--[\|o\}]\|\s+\w+\s*:").expect("valid ER pattern")
    })
}

fn er_attribute_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\w+\s+\w+").expect("valid ER attribute pattern"))
}

/// ER: recognizes relationship lines and attribute lines. Pass-through, like
/// [`check_sequence`].
pub(super) fn check_er(syntax: &str) -> ValidationOutcome {
    for (idx, raw) in syntax.trim().lines().enumerate().skip(1) {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let recognized =
            er_relationship_pattern().is_match(line) || er_attribute_pattern().is_match(line);
        if !recognized {
            tracing::debug!(line_no = idx + 1, line, "unrecognized ER diagram line");
        }
    }

    scan_balance(syntax)
}

/// Pie: every `label : value` entry after the header must have a numeric value.
/// The value side is taken from the first colon; surrounding quotes are stripped.
pub(super) fn check_pie(syntax: &str) -> ValidationOutcome {
    for (idx, raw) in syntax.trim().lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with("title") {
            continue;
        }
        let Some((_label, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim().trim_matches('"');
        if value.parse::<f64>().is_err() {
            return ValidationOutcome::invalid_at("Pie chart values must be numbers", line_no);
        }
    }

    scan_balance(syntax)
}
