// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// The closed set of diagram kinds the service can generate and validate.
///
/// Each kind carries a wire tag (the value the web client sends, e.g. `classDiagram`)
/// and an ordered set of declaration keywords the first markup line must start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagramKind {
    Flowchart,
    Sequence,
    Class,
    State,
    EntityRelationship,
    Journey,
    Gantt,
    Pie,
    Quadrant,
    Mindmap,
}

impl DiagramKind {
    pub const ALL: [DiagramKind; 10] = [
        DiagramKind::Flowchart,
        DiagramKind::Sequence,
        DiagramKind::Class,
        DiagramKind::State,
        DiagramKind::EntityRelationship,
        DiagramKind::Journey,
        DiagramKind::Gantt,
        DiagramKind::Pie,
        DiagramKind::Quadrant,
        DiagramKind::Mindmap,
    ];

    /// Wire tag used in request/response payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::Sequence => "sequence",
            Self::Class => "classDiagram",
            Self::State => "stateDiagram",
            Self::EntityRelationship => "erDiagram",
            Self::Journey => "journey",
            Self::Gantt => "gantt",
            Self::Pie => "pie",
            Self::Quadrant => "quadrantChart",
            Self::Mindmap => "mindmap",
        }
    }

    /// Human-readable label for diagram-type pickers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Flowchart => "Flowchart",
            Self::Sequence => "Sequence Diagram",
            Self::Class => "Class Diagram",
            Self::State => "State Diagram",
            Self::EntityRelationship => "Entity Relationship",
            Self::Journey => "User Journey",
            Self::Gantt => "Gantt Chart",
            Self::Pie => "Pie Chart",
            Self::Quadrant => "Quadrant Chart",
            Self::Mindmap => "Mind Map",
        }
    }

    /// Acceptable first-line prefixes for this kind's markup.
    ///
    /// Matching is a plain case-sensitive prefix test against the first non-empty
    /// trimmed line, in the order listed here.
    pub fn declaration_prefixes(self) -> &'static [&'static str] {
        match self {
            Self::Flowchart => &["flowchart", "graph"],
            Self::Sequence => &["sequenceDiagram"],
            Self::Class => &["classDiagram"],
            Self::State => &["stateDiagram", "stateDiagram-v2"],
            Self::EntityRelationship => &["erDiagram"],
            Self::Journey => &["journey"],
            Self::Gantt => &["gantt"],
            Self::Pie => &["pie"],
            Self::Quadrant => &["quadrantChart"],
            Self::Mindmap => &["mindmap"],
        }
    }

    pub fn parse(tag: &str) -> Result<Self, ParseDiagramKindError> {
        for kind in Self::ALL {
            if kind.as_str() == tag {
                return Ok(kind);
            }
        }
        Err(ParseDiagramKindError { tag: tag.to_owned() })
    }

    /// The ten wire tags, comma-joined, for error messages.
    pub fn all_tags_joined() -> String {
        let tags: Vec<&str> = Self::ALL.iter().map(|kind| kind.as_str()).collect();
        tags.join(", ")
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagramKind {
    type Err = ParseDiagramKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DiagramKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagramKindError {
    tag: String,
}

impl ParseDiagramKindError {
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for ParseDiagramKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown diagram type: {}", self.tag)
    }
}

impl std::error::Error for ParseDiagramKindError {}
