// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::ValidationOutcome;

/// Checks that `[`/`]` and `(`/`)` balance out across the whole markup.
///
/// Lines are 1-indexed over the trimmed input. A running count going negative fails
/// at that line (bracket checked before parenthesis); a positive residue after the
/// last line fails without a line number, since the unmatched opener is not tracked.
/// Purely textual: brackets inside quoted labels still count.
pub(super) fn scan_balance(syntax: &str) -> ValidationOutcome {
    let mut brackets = 0i64;
    let mut parens = 0i64;

    for (idx, line) in syntax.trim().lines().enumerate() {
        let line_no = idx + 1;
        brackets += signed_count(line, '[', ']');
        parens += signed_count(line, '(', ')');

        if brackets < 0 {
            return ValidationOutcome::invalid_at("Unmatched closing bracket ']'", line_no);
        }
        if parens < 0 {
            return ValidationOutcome::invalid_at("Unmatched closing parenthesis ')'", line_no);
        }
    }

    if brackets != 0 {
        return ValidationOutcome::invalid("Unmatched opening bracket '['");
    }
    if parens != 0 {
        return ValidationOutcome::invalid("Unmatched opening parenthesis '('");
    }

    ValidationOutcome::valid()
}

fn signed_count(line: &str, open: char, close: char) -> i64 {
    let mut count = 0i64;
    for ch in line.chars() {
        if ch == open {
            count += 1;
        } else if ch == close {
            count -= 1;
        }
    }
    count
}
