//! Game state types

use super::Action;
use crate::content::{Content, ItemDef};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

// ============================================================================
// Items
// ============================================================================

/// A sortable item together with the player's current placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    /// Display label
    pub content: String,
    /// Ground-truth category id
    pub category: String,
    /// Category the player placed the item in, `None` while unassigned
    pub user_category: Option<String>,
    /// Set for every item once the game is scored, `None` before
    pub is_correct: Option<bool>,
}

impl Item {
    fn from_def(def: &ItemDef) -> Self {
        Self {
            id: def.id.clone(),
            content: def.content.clone(),
            category: def.category.clone(),
            user_category: None,
            is_correct: None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.user_category.is_some()
    }

    /// Unassigned items never match
    pub fn matches_truth(&self) -> bool {
        self.user_category.as_deref() == Some(self.category.as_str())
    }
}

/// How an item should be drawn, derived fresh on every render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualState {
    Neutral,
    Selected,
    Correct,
    Incorrect,
}

/// Visual state from an item, the current selection and the ended flag
pub fn visual_state(item: &Item, selected_item_id: Option<&str>, ended: bool) -> VisualState {
    if ended {
        if item.is_correct == Some(true) {
            VisualState::Correct
        } else {
            VisualState::Incorrect
        }
    } else if selected_item_id == Some(item.id.as_str()) {
        VisualState::Selected
    } else {
        VisualState::Neutral
    }
}

// ============================================================================
// Game State
// ============================================================================

/// Behaviorally distinct phases, derived rather than stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Playing, nothing selected
    Idle,
    /// Playing, one item picked up
    Selecting,
    /// Answers checked; only reset is accepted
    Scored,
}

/// Complete mutable state of one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub items: Vec<Item>,
    pub selected_item_id: Option<String>,
    pub score: Option<usize>,
    pub ended: bool,
}

impl GameState {
    /// Fresh game with the content's items in a uniformly random order
    pub fn initialize<R: Rng + ?Sized>(content: &Content, rng: &mut R) -> Self {
        let mut items: Vec<Item> = content.items.iter().map(Item::from_def).collect();
        items.shuffle(rng);
        Self {
            items,
            selected_item_id: None,
            score: None,
            ended: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.ended {
            Phase::Scored
        } else if self.selected_item_id.is_some() {
            Phase::Selecting
        } else {
            Phase::Idle
        }
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(super) fn item_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Items placed in a category, in sequence order
    pub fn items_in_category<'a>(
        &'a self,
        category_id: &'a str,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        self.items
            .iter()
            .filter(move |item| item.user_category.as_deref() == Some(category_id))
    }

    pub fn unassigned_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().filter(|item| !item.is_assigned())
    }

    pub fn visual_state(&self, item: &Item) -> VisualState {
        visual_state(item, self.selected_item_id.as_deref(), self.ended)
    }

    /// Action behind the main button: check answers while playing, play again once scored
    pub fn primary_action(&self) -> Action {
        if self.ended {
            Action::Reset
        } else {
            Action::CheckAnswers
        }
    }

    /// Final score message, only once the game has been scored
    pub fn score_summary(&self) -> Option<String> {
        self.score
            .map(|score| format!("Your score: {score} out of {} correct", self.total()))
    }
}
