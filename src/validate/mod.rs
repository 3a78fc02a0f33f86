// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Structural validation of Mermaid markup, per diagram kind.
//!
//! This is a shallow checker, not a parser: it verifies the declaration line, keeps
//! bracket/parenthesis balance, and enforces the few kind-specific rules that catch
//! the common malformed generator output. It never builds an AST and never rejects
//! input it cannot classify. Every check returns a [`ValidationOutcome`]; nothing in
//! this module panics on any input string.

mod balance;
mod declaration;
mod rules;

use crate::model::{DiagramKind, ValidationOutcome};

use balance::scan_balance;
use declaration::check_declaration;
use rules::{check_er, check_flowchart, check_pie, check_sequence};

/// Validates `syntax` against the structural rules for `kind`.
///
/// Checks run in a fixed order and the first failure wins: empty-input check, then
/// the declaration line, then the kind-specific rule set (which ends in the balance
/// scan). Pure and stateless; safe to call concurrently.
pub fn validate_syntax(syntax: &str, kind: DiagramKind) -> ValidationOutcome {
    if syntax.trim().is_empty() {
        return ValidationOutcome::invalid("Syntax cannot be empty");
    }

    if let Some(failure) = check_declaration(syntax, kind) {
        return failure;
    }

    match kind {
        DiagramKind::Flowchart => check_flowchart(syntax),
        DiagramKind::Sequence => check_sequence(syntax),
        DiagramKind::EntityRelationship => check_er(syntax),
        DiagramKind::Pie => check_pie(syntax),
        DiagramKind::Class
        | DiagramKind::State
        | DiagramKind::Journey
        | DiagramKind::Gantt
        | DiagramKind::Quadrant
        | DiagramKind::Mindmap => scan_balance(syntax),
    }
}
