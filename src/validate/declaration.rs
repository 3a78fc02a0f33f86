// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{DiagramKind, ValidationOutcome};

/// Checks that the first non-empty trimmed line starts with one of the declaration
/// keywords for `kind`. Returns `Some(failure)` on mismatch, `None` when accepted.
///
/// Deliberately a prefix test with no word-boundary check, so `flowchartX` passes for
/// flowchart. The per-kind rules behind this gate are shallow enough that tightening
/// it here would reject more real markup than it would catch.
pub(super) fn check_declaration(syntax: &str, kind: DiagramKind) -> Option<ValidationOutcome> {
    let first_line = syntax.trim().lines().next().map(str::trim).unwrap_or("");

    let prefixes = kind.declaration_prefixes();
    if prefixes.iter().any(|prefix| first_line.starts_with(prefix)) {
        return None;
    }

    Some(ValidationOutcome::invalid_at(
        format!("Diagram must start with one of: {}", prefixes.join(", ")),
        1,
    ))
}
