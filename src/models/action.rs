use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The user actions bound to the form's buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Update,
    Like,
    Unlike,
    Retrieve,
    Delete,
    Clear,
    Search,
}

impl Action {
    /// Every action, in button order
    pub const ALL: [Action; 8] = [
        Action::Create,
        Action::Update,
        Action::Like,
        Action::Unlike,
        Action::Retrieve,
        Action::Delete,
        Action::Clear,
        Action::Search,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Like => "like",
            Action::Unlike => "unlike",
            Action::Retrieve => "retrieve",
            Action::Delete => "delete",
            Action::Clear => "clear",
            Action::Search => "search",
        }
    }

    /// Index of this action's sequencing slot
    pub(crate) fn slot(&self) -> usize {
        *self as usize
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
