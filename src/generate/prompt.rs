// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::DiagramKind;

const BASE_PROMPT: &str = "You are a Mermaid diagram syntax generator. \n\
You MUST respond with ONLY valid Mermaid syntax - no explanations, no markdown code blocks, no additional text.\n\
Generate clean, well-structured Mermaid syntax based EXACTLY on the user's description.\n\
IMPORTANT: Only include the steps, elements, or components that the user explicitly mentions. Do NOT add any additional steps, elements, or details that are not specifically requested by the user.";

fn kind_prompt(kind: DiagramKind) -> &'static str {
    match kind {
        DiagramKind::Flowchart => {
            "Generate a flowchart using Mermaid syntax.\n\
Use 'flowchart TD' or 'flowchart LR' for top-down or left-right layouts.\n\
Example format:\n\
flowchart TD\n    A[Start] --> B{Decision}\n    B -->|Yes| C[Action 1]\n    B -->|No| D[Action 2]"
        }
        DiagramKind::Sequence => {
            "Generate a sequence diagram using Mermaid syntax.\n\
Example format:\n\
sequenceDiagram\n    participant A as Alice\n    participant B as Bob\n    A->>B: Hello Bob\n    B->>A: Hi Alice"
        }
        DiagramKind::Class => {
            "Generate a class diagram using Mermaid syntax.\n\
Example format:\n\
classDiagram\n    class Animal {\n        +String name\n        +int age\n        +makeSound()\n    }"
        }
        DiagramKind::State => {
            "Generate a state diagram using Mermaid syntax.\n\
Example format:\n\
stateDiagram-v2\n    [*] --> State1\n    State1 --> State2\n    State2 --> [*]"
        }
        DiagramKind::EntityRelationship => {
            "Generate an entity relationship diagram using Mermaid syntax.\n\
Example format:\n\
erDiagram\n    CUSTOMER ||--o{ ORDER : places\n    ORDER ||--|{ LINE-ITEM : contains"
        }
        DiagramKind::Journey => {
            "Generate a user journey diagram using Mermaid syntax.\n\
Example format:\n\
journey\n    title My working day\n    section Go to work\n      Make tea: 5: Me\n      Go upstairs: 3: Me"
        }
        DiagramKind::Gantt => {
            "Generate a Gantt chart using Mermaid syntax.\n\
Example format:\n\
gantt\n    title A Gantt Diagram\n    dateFormat YYYY-MM-DD\n    section Section\n        A task :a1, 2024-01-01, 30d"
        }
        DiagramKind::Pie => {
            "Generate a pie chart using Mermaid syntax.\n\
Example format:\n\
pie title Pets adopted by volunteers\n    \"Dogs\" : 386\n    \"Cats\" : 85\n    \"Rats\" : 15"
        }
        DiagramKind::Quadrant => {
            "Generate a quadrant chart using Mermaid syntax.\n\
Example format:\n\
quadrantChart\n    title Reach and engagement\n    x-axis Low Reach --> High Reach\n    y-axis Low Engagement --> High Engagement\n    quadrant-1 We should expand\n    quadrant-2 Need to promote\n    quadrant-3 Re-evaluate\n    quadrant-4 May be improved"
        }
        DiagramKind::Mindmap => {
            "Generate a mindmap using Mermaid syntax.\n\
Example format:\n\
mindmap\n  root((mindmap))\n    Origins\n      Long history\n      Popularisation\n    Research\n      On effectiveness\n      On features"
        }
    }
}

/// System instruction for the provider: base rules plus a per-kind example block.
pub fn build_system_prompt(kind: DiagramKind) -> String {
    format!("{BASE_PROMPT}\n\n{}", kind_prompt(kind))
}

/// User message; wraps the previous markup when the prompt refines an existing diagram.
pub fn build_user_message(prompt: &str, previous_syntax: Option<&str>) -> String {
    match previous_syntax {
        Some(previous) => format!(
            "Here is the current diagram:\n\n{previous}\n\nNow modify it based on this request: {prompt}"
        ),
        None => prompt.to_owned(),
    }
}
