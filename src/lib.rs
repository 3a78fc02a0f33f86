// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Galatea — Mermaid diagram builder service (generation + validation).
//!
//! Natural-language prompts are sent to an OpenAI-compatible provider, the returned
//! Mermaid markup is checked against per-diagram-type structural rules, and sessions
//! keep the current markup plus its history so follow-up prompts can refine a diagram.

pub mod config;
pub mod generate;
pub mod model;
pub mod store;
pub mod validate;
pub mod web;
