//! Actions the player can take

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inbound user actions, one per game operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Pick up an item, or put it back down if it is already selected
    SelectItem { item_id: String },
    /// Place the selected item into a category
    AssignCategory { category_id: String },
    /// Score every item; terminal until reset
    CheckAnswers,
    /// Reshuffle and start over
    Reset,
}

impl Action {
    pub fn select(item_id: impl Into<String>) -> Self {
        Action::SelectItem {
            item_id: item_id.into(),
        }
    }

    pub fn assign(category_id: impl Into<String>) -> Self {
        Action::AssignCategory {
            category_id: category_id.into(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SelectItem { item_id } => write!(f, "select {item_id}"),
            Action::AssignCategory { category_id } => write!(f, "assign to {category_id}"),
            Action::CheckAnswers => write!(f, "check answers"),
            Action::Reset => write!(f, "reset"),
        }
    }
}
