// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Diagram kinds and their declaration keywords, request/response models for the
//! generation endpoint, and the validation outcome returned by the syntax checker.

pub mod kind;
pub mod outcome;
pub mod request;

pub use kind::{DiagramKind, ParseDiagramKindError};
pub use outcome::ValidationOutcome;
pub use request::{DiagramRequest, DiagramRequestError, DiagramResponse, MAX_PROMPT_LEN};
