//! Runtime for playing a game
//!
//! Owns the content, the current state and the random source, and feeds
//! user actions through the pure transition function one at a time.

use crate::content::Content;
use crate::state_machine::{transition, Action, Effect, GameState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A single game, driven by one presentation layer
pub struct GameSession<R: Rng = StdRng> {
    content: Content,
    state: GameState,
    rng: R,
}

impl GameSession<StdRng> {
    /// Seeded sessions shuffle reproducibly; unseeded ones draw from OS entropy
    pub fn with_seed(content: Content, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self::new(content, rng)
    }
}

impl<R: Rng> GameSession<R> {
    pub fn new(content: Content, mut rng: R) -> Self {
        let state = GameState::initialize(&content, &mut rng);
        tracing::info!(
            items = state.total(),
            categories = content.categories.len(),
            "Game initialized"
        );
        Self {
            content,
            state,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Apply one action to completion; ignored actions return no effects
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        match transition(&self.state, &self.content, action.clone(), &mut self.rng) {
            Ok(result) => {
                self.state = result.new_state;
                for effect in &result.effects {
                    log_effect(effect);
                }
                result.effects
            }
            Err(reason) => {
                tracing::debug!(action = %action, reason = %reason, "Action ignored");
                vec![]
            }
        }
    }
}

fn log_effect(effect: &Effect) {
    match effect {
        Effect::SelectionChanged { selected } => {
            tracing::debug!(selected = ?selected, "Selection changed");
        }
        Effect::Assigned {
            item_id,
            category_id,
            previous,
        } => {
            tracing::debug!(
                item_id = %item_id,
                category_id = %category_id,
                previous = ?previous,
                "Item assigned"
            );
        }
        Effect::Scored { score, total } => {
            tracing::info!(score, total, "Answers checked");
        }
        Effect::GameReset { order } => {
            tracing::info!(order = ?order, "Game reset");
        }
    }
}
