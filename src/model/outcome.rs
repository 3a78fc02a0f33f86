// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

/// Result of a syntax validation pass.
///
/// `error` is set iff `is_valid` is false; `line_number` (1-indexed) is set only when
/// the failing line is identifiable. The constructors below are the only way to build
/// one, which keeps those two invariants in one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub error: Option<String>,
    pub line_number: Option<usize>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self { is_valid: true, error: None, line_number: None }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self { is_valid: false, error: Some(error.into()), line_number: None }
    }

    pub fn invalid_at(error: impl Into<String>, line_number: usize) -> Self {
        Self { is_valid: false, error: Some(error.into()), line_number: Some(line_number) }
    }
}
