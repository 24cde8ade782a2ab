//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all reachable states.

use super::*;
use crate::content::{builtin, Content};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

// ============================================================================
// Test Helpers
// ============================================================================

fn content() -> Content {
    builtin()
}

fn item_ids() -> Vec<String> {
    content().items.into_iter().map(|item| item.id).collect()
}

fn category_ids() -> Vec<String> {
    content().categories.into_iter().map(|c| c.id).collect()
}

fn sorted_pairs(state: &GameState) -> Vec<(String, String)> {
    let mut pairs: Vec<_> = state
        .items
        .iter()
        .map(|item| (item.id.clone(), item.category.clone()))
        .collect();
    pairs.sort();
    pairs
}

/// Replay actions from a seeded initial game, ignoring rejected ones
fn play(seed: u64, actions: &[Action]) -> (GameState, StdRng) {
    let content = content();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::initialize(&content, &mut rng);
    for action in actions {
        state = reduce(&state, &content, action.clone(), &mut rng);
    }
    (state, rng)
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_item_id() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => proptest::sample::select(item_ids()),
        1 => "[a-z]{9,12}".prop_map(String::from),
    ]
}

fn arb_category_id() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => proptest::sample::select(category_ids()),
        1 => "[a-z]{11,14}".prop_map(String::from),
    ]
}

/// Moves that keep a game in play
fn arb_move_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        arb_item_id().prop_map(|item_id| Action::SelectItem { item_id }),
        arb_category_id().prop_map(|category_id| Action::AssignCategory { category_id }),
    ]
}

fn arb_play_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        8 => arb_move_action(),
        1 => Just(Action::CheckAnswers),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        9 => arb_play_action(),
        1 => Just(Action::Reset),
    ]
}

/// A seed plus a history of moves; the resulting game is never scored
fn arb_history() -> impl Strategy<Value = (u64, Vec<Action>)> {
    (any::<u64>(), proptest::collection::vec(arb_move_action(), 0..40))
}

// ============================================================================
// State Validity Checkers
// ============================================================================

fn is_valid_state(state: &GameState, content: &Content) -> bool {
    let categories_known = state.items.iter().all(|item| {
        content.has_category(&item.category)
            && item
                .user_category
                .as_deref()
                .map_or(true, |c| content.has_category(c))
    });

    let selection_known = state
        .selected_item_id
        .as_deref()
        .map_or(true, |id| state.item(id).is_some());

    let scoring_consistent = if state.ended {
        state.selected_item_id.is_none()
            && state
                .items
                .iter()
                .all(|item| item.is_correct == Some(item.matches_truth()))
            && state.score
                == Some(
                    state
                        .items
                        .iter()
                        .filter(|item| item.is_correct == Some(true))
                        .count(),
                )
    } else {
        state.score.is_none() && state.items.iter().all(|item| item.is_correct.is_none())
    };

    categories_known && selection_known && scoring_consistent
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every reachable state satisfies the data model invariants
    #[test]
    fn prop_transitions_preserve_validity(
        seed in any::<u64>(),
        actions in proptest::collection::vec(arb_action(), 0..40)
    ) {
        let content = content();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::initialize(&content, &mut rng);
        let baseline = sorted_pairs(&state);

        for action in actions {
            state = reduce(&state, &content, action, &mut rng);
            prop_assert!(is_valid_state(&state, &content), "invalid state: {:?}", state);
            prop_assert_eq!(sorted_pairs(&state), baseline.clone());
        }
    }

    /// Rejected actions leave the state deep-equal
    #[test]
    fn prop_rejected_actions_are_noops(
        (seed, actions) in arb_history(),
        action in arb_action()
    ) {
        let content = content();
        let (state, mut rng) = play(seed, &actions);
        let before = state.clone();

        match transition(&state, &content, action.clone(), &mut rng) {
            Err(_) => {
                prop_assert_eq!(&state, &before);
                prop_assert_eq!(reduce(&state, &content, action, &mut rng), before);
            }
            Ok(result) => {
                prop_assert!(!result.effects.is_empty());
            }
        }
    }

    /// Only reset is accepted after scoring
    #[test]
    fn prop_scored_game_accepts_only_reset(
        (seed, actions) in arb_history(),
        action in arb_play_action()
    ) {
        let content = content();
        let (state, mut rng) = play(seed, &actions);
        let scored = reduce(&state, &content, Action::CheckAnswers, &mut rng);
        prop_assert!(scored.ended);

        let result = transition(&scored, &content, action, &mut rng);
        prop_assert!(matches!(result, Err(Rejection::GameEnded)));
        prop_assert!(transition(&scored, &content, Action::Reset, &mut rng).is_ok());
    }

    /// Selecting the same item twice from a different selection deselects it
    #[test]
    fn prop_select_twice_deselects(
        (seed, actions) in arb_history(),
        index in 0usize..10
    ) {
        let content = content();
        let (state, mut rng) = play(seed, &actions);
        let id = state.items[index % state.total()].id.clone();
        prop_assume!(state.selected_item_id.as_deref() != Some(id.as_str()));

        let once = reduce(&state, &content, Action::select(id.clone()), &mut rng);
        prop_assert_eq!(once.selected_item_id.as_deref(), Some(id.as_str()));
        let twice = reduce(&once, &content, Action::select(id), &mut rng);
        prop_assert!(twice.selected_item_id.is_none());
        prop_assert_eq!(twice.items, state.items);
    }

    /// Assignment always clears the selection and mutates exactly one item
    #[test]
    fn prop_assign_clears_selection(
        (seed, actions) in arb_history(),
        index in 0usize..10,
        category in proptest::sample::select(category_ids())
    ) {
        let content = content();
        let (state, mut rng) = play(seed, &actions);
        let id = state.items[index % state.total()].id.clone();
        let selecting = reduce(&state, &content, Action::select(id.clone()), &mut rng);
        prop_assume!(selecting.selected_item_id.is_some());

        let assigned = reduce(&selecting, &content, Action::assign(category.clone()), &mut rng);
        prop_assert!(assigned.selected_item_id.is_none());

        let changed: Vec<_> = assigned
            .items
            .iter()
            .zip(&selecting.items)
            .filter(|(after, before)| after != before)
            .map(|(after, _)| after.id.clone())
            .collect();
        prop_assert!(changed.len() <= 1);
        prop_assert_eq!(
            assigned.item(&id).and_then(|item| item.user_category.clone()),
            Some(category)
        );
    }

    /// Score equals the exact-match count and never exceeds the item count
    #[test]
    fn prop_score_is_exact_match_count((seed, actions) in arb_history()) {
        let content = content();
        let (state, mut rng) = play(seed, &actions);
        let expected = state.items.iter().filter(|item| item.matches_truth()).count();

        let scored = reduce(&state, &content, Action::CheckAnswers, &mut rng);
        prop_assert_eq!(scored.score, Some(expected));
        prop_assert!(expected <= scored.total());
        prop_assert!(scored.ended);
    }

    /// Reset keeps the item multiset and clears every mutable field
    #[test]
    fn prop_reset_clears_everything((seed, actions) in arb_history()) {
        let content = content();
        let (state, mut rng) = play(seed, &actions);

        let fresh = reduce(&state, &content, Action::Reset, &mut rng);
        prop_assert_eq!(sorted_pairs(&fresh), sorted_pairs(&state));
        prop_assert!(fresh.selected_item_id.is_none());
        prop_assert!(fresh.score.is_none());
        prop_assert!(!fresh.ended);
        prop_assert!(fresh
            .items
            .iter()
            .all(|item| item.user_category.is_none() && item.is_correct.is_none()));
    }
}

// ============================================================================
// Shuffle Distribution
// ============================================================================

#[test]
fn test_shuffle_is_uniform() {
    let content = Content::from_json(
        r#"{
            "categories": [{"id": "x", "title": "X"}],
            "items": [
                {"id": "a", "content": "A", "category": "x"},
                {"id": "b", "content": "B", "category": "x"},
                {"id": "c", "content": "C", "category": "x"}
            ]
        }"#,
    )
    .unwrap();

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut counts: HashMap<String, usize> = HashMap::new();
    let draws = 6000;
    for _ in 0..draws {
        let state = GameState::initialize(&content, &mut rng);
        let order: String = state.items.iter().map(|item| item.id.as_str()).collect();
        *counts.entry(order).or_default() += 1;
    }

    // 3! permutations, each expected 1000 times; the bounds are roughly 7 sigma
    assert_eq!(counts.len(), 6);
    for (order, count) in counts {
        assert!((800..=1200).contains(&count), "{order} drawn {count} times");
    }
}

#[test]
fn test_initialize_preserves_content() {
    let content = content();
    let mut rng = StdRng::seed_from_u64(1);
    let state = GameState::initialize(&content, &mut rng);

    let mut expected: Vec<_> = content
        .items
        .iter()
        .map(|item| (item.id.clone(), item.category.clone()))
        .collect();
    expected.sort();
    assert_eq!(sorted_pairs(&state), expected);
}
