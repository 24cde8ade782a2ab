//! Terminal front end
//!
//! Renders the board and turns key presses into game actions. The loop is
//! strictly sequential: one key is handled to completion before the next
//! frame is drawn.

mod app;
mod input;
mod view;

pub use app::App;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::io;

/// Take over the terminal until the player quits, restoring it afterwards
pub fn run(app: &mut App) -> io::Result<()> {
    let mut terminal = ratatui::try_init()?;
    let result = event_loop(&mut terminal, app);
    ratatui::try_restore()?;
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| view::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            // Ignore release and repeat events some platforms report
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(command) = input::command_for_key(key, app.info_open()) {
                tracing::trace!(?command, "Key command");
                app.handle(command);
            }
        }
    }
    Ok(())
}
