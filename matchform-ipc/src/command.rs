use serde::{Deserialize, Serialize};

use crate::MatcherNode;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    // Document operations
    Load { matchers: Vec<MatcherNode> },
    Extract,
    Save,

    // Editing
    Activate { node: u32 },
    Hover { node: u32, inside: bool },
    SetValue { node: u32, value: String },

    // Queries
    Outline,

    // Control
    Quit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Ok,
    Error {
        message: String,
    },
    Matchers {
        matchers: Vec<MatcherNode>,
    },
    Activated {
        #[serde(default)]
        inserted: Vec<u32>,
        #[serde(default)]
        removed: Vec<u32>,
    },
    Outline {
        lines: Vec<String>,
    },
}
