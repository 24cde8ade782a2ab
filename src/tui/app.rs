//! Presentation state and command handling

use super::input::Command;
use crate::content::Content;
use crate::runtime::GameSession;
use crate::state_machine::{Action, Effect, GameState, Item};

/// Everything the terminal front end tracks on top of the game itself
pub struct App {
    session: GameSession,
    /// Item under the cursor, tracked by id so it follows the item between columns
    cursor: Option<String>,
    info_open: bool,
    status: Option<String>,
    quit: bool,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        let cursor = display_order(session.state(), session.content())
            .first()
            .map(|item| item.id.clone());
        Self {
            session,
            cursor,
            info_open: false,
            status: None,
            quit: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn state(&self) -> &GameState {
        self.session.state()
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn info_open(&self) -> bool {
        self.info_open
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle(&mut self, command: Command) {
        match command {
            Command::CursorNext => self.move_cursor(true),
            Command::CursorPrev => self.move_cursor(false),
            Command::ToggleSelect => {
                if let Some(id) = self.cursor.clone() {
                    self.dispatch(Action::select(id));
                }
            }
            Command::AssignTo(column) => {
                let category_id = self
                    .session
                    .content()
                    .category_at(column)
                    .map(|c| c.id.clone());
                if let Some(category_id) = category_id {
                    self.dispatch(Action::assign(category_id));
                }
            }
            Command::CheckAnswers => self.dispatch(Action::CheckAnswers),
            Command::Reset => self.dispatch(Action::Reset),
            Command::Primary => {
                let action = self.state().primary_action();
                self.dispatch(action);
            }
            Command::ShowInfo => {
                // Learn More is offered only after scoring
                if self.state().ended && self.session.content().info.is_some() {
                    self.info_open = true;
                }
            }
            Command::CloseInfo => self.info_open = false,
            Command::Quit => self.quit = true,
        }
    }

    fn dispatch(&mut self, action: Action) {
        let effects = self.session.dispatch(action);
        for effect in &effects {
            if matches!(effect, Effect::GameReset { .. }) {
                self.info_open = false;
            }
            self.status = Some(self.describe(effect));
        }
    }

    fn describe(&self, effect: &Effect) -> String {
        let label = |id: &str| {
            self.state()
                .item(id)
                .map_or_else(|| id.to_string(), |item| item.content.clone())
        };
        match effect {
            Effect::SelectionChanged { selected: Some(id) } => {
                format!("Picked up {}, choose a category", label(id.as_str()))
            }
            Effect::SelectionChanged { selected: None } => "Put it back down".to_string(),
            Effect::Assigned {
                item_id,
                category_id,
                ..
            } => {
                let title = self
                    .session
                    .content()
                    .category(category_id)
                    .map_or(category_id.as_str(), |c| c.title.as_str());
                format!("Placed {} in {title}", label(item_id.as_str()))
            }
            Effect::Scored { .. } => self.state().score_summary().unwrap_or_default(),
            Effect::GameReset { .. } => "New game, items reshuffled".to_string(),
        }
    }

    fn move_cursor(&mut self, forward: bool) {
        let order: Vec<String> = display_order(self.state(), self.session.content())
            .iter()
            .map(|item| item.id.clone())
            .collect();
        if order.is_empty() {
            return;
        }

        let current = self
            .cursor
            .as_ref()
            .and_then(|id| order.iter().position(|other| other == id));
        let next = match current {
            None => 0,
            Some(i) if forward => (i + 1) % order.len(),
            Some(i) => (i + order.len() - 1) % order.len(),
        };
        self.cursor = Some(order[next].clone());
    }
}

/// Items in the order they are drawn: each category column, then the unassigned pool
pub fn display_order<'a>(state: &'a GameState, content: &Content) -> Vec<&'a Item> {
    content
        .categories
        .iter()
        .flat_map(|category| {
            state
                .items
                .iter()
                .filter(move |item| item.user_category.as_deref() == Some(category.id.as_str()))
        })
        .chain(state.unassigned_items())
        .collect()
}
