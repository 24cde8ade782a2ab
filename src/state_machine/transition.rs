//! Pure state transition function
//!
//! Every action either produces a new state plus the effects describing the
//! change, or is rejected and leaves the caller's state untouched. There is
//! no third outcome, so the machine is total over its action set.

use super::{Action, Effect, GameState};
use crate::content::Content;
use rand::Rng;
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: GameState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: GameState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Why an action was ignored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Game already scored, only reset is accepted")]
    GameEnded,
    #[error("No item selected")]
    NothingSelected,
    #[error("Unknown item: {0}")]
    UnknownItem(String),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Pure transition function
///
/// Given the same state, content, action and random source state, this
/// always produces the same output. Only `Reset` draws from `rng`.
pub fn transition<R: Rng + ?Sized>(
    state: &GameState,
    content: &Content,
    action: Action,
    rng: &mut R,
) -> Result<TransitionResult, Rejection> {
    match action {
        // Reset is legal from every phase
        Action::Reset => {
            let new_state = GameState::initialize(content, rng);
            let order = new_state.items.iter().map(|item| item.id.clone()).collect();
            Ok(TransitionResult::new(new_state).with_effect(Effect::GameReset { order }))
        }

        _ if state.ended => Err(Rejection::GameEnded),

        // Selecting the current selection again puts it back down
        Action::SelectItem { item_id } => {
            if state.item(&item_id).is_none() {
                return Err(Rejection::UnknownItem(item_id));
            }
            let selected = if state.selected_item_id.as_deref() == Some(item_id.as_str()) {
                None
            } else {
                Some(item_id)
            };
            let mut new_state = state.clone();
            new_state.selected_item_id.clone_from(&selected);
            Ok(TransitionResult::new(new_state).with_effect(Effect::SelectionChanged { selected }))
        }

        Action::AssignCategory { category_id } => {
            let Some(item_id) = state.selected_item_id.clone() else {
                return Err(Rejection::NothingSelected);
            };
            if !content.has_category(&category_id) {
                return Err(Rejection::UnknownCategory(category_id));
            }

            let mut new_state = state.clone();
            new_state.selected_item_id = None;
            let item = new_state
                .item_mut(&item_id)
                .ok_or_else(|| Rejection::UnknownItem(item_id.clone()))?;
            let previous = item.user_category.replace(category_id.clone());
            item.is_correct = None;

            Ok(TransitionResult::new(new_state).with_effect(Effect::Assigned {
                item_id,
                category_id,
                previous,
            }))
        }

        // Unassigned items simply score as incorrect
        Action::CheckAnswers => {
            let mut new_state = state.clone();
            for item in &mut new_state.items {
                item.is_correct = Some(item.matches_truth());
            }
            let score = new_state
                .items
                .iter()
                .filter(|item| item.is_correct == Some(true))
                .count();
            new_state.score = Some(score);
            new_state.ended = true;
            new_state.selected_item_id = None;

            let total = new_state.total();
            Ok(TransitionResult::new(new_state).with_effect(Effect::scored(score, total)))
        }
    }
}

/// Plain `(state, action) -> state` reducer; ignored actions return the state unchanged
#[allow(dead_code)] // Reducer form for callers that do not consume effects
pub fn reduce<R: Rng + ?Sized>(
    state: &GameState,
    content: &Content,
    action: Action,
    rng: &mut R,
) -> GameState {
    transition(state, content, action, rng)
        .map_or_else(|_| state.clone(), |result| result.new_state)
}
