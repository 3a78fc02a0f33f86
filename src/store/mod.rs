// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! In-memory session store for iterative refinement.
//!
//! A session maps an opaque client-supplied id to the current markup, its diagram
//! kind, and the ordered history of prior markup revisions. Sessions live for the
//! process lifetime only and are mutated exclusively by the web layer.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::model::DiagramKind;

/// Current markup plus history for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    current_syntax: String,
    kind: DiagramKind,
    history: Vec<String>,
}

impl SessionState {
    fn new(current_syntax: String, kind: DiagramKind) -> Self {
        Self { current_syntax, kind, history: Vec::new() }
    }

    pub fn current_syntax(&self) -> &str {
        &self.current_syntax
    }

    pub fn kind(&self) -> DiagramKind {
        self.kind
    }

    /// Prior revisions, oldest first. Does not include the current markup.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

/// Cloneable handle to the shared session map.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, SessionState>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, session_id: &str) -> Option<SessionState> {
        self.inner.read().await.get(session_id).cloned()
    }

    /// Records a new revision: the previous current markup (if any) moves into the
    /// history, and the kind follows the latest generation.
    pub async fn record(&self, session_id: &str, syntax: String, kind: DiagramKind) {
        let mut sessions = self.inner.write().await;
        match sessions.get_mut(session_id) {
            Some(state) => {
                let previous = std::mem::replace(&mut state.current_syntax, syntax);
                state.history.push(previous);
                state.kind = kind;
            }
            None => {
                sessions.insert(session_id.to_owned(), SessionState::new(syntax, kind));
            }
        }
    }

    /// Removes a session; returns whether it existed.
    pub async fn remove(&self, session_id: &str) -> bool {
        self.inner.write().await.remove(session_id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
