use crossterm::event::KeyCode;
use ratatui::Frame;

use crate::{state::session::Session, ui::draw};

use super::Action;

/// Slider steps taken by a single PgUp/PgDn press.
const COARSE_STEPS: i32 = 10;

pub fn handle_key(session: &mut Session, key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Char('k') => session.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => session.select_next(),
        KeyCode::Left | KeyCode::Char('h') => session.nudge_selected(-1),
        KeyCode::Right | KeyCode::Char('l') => session.nudge_selected(1),
        KeyCode::PageDown => session.nudge_selected(-COARSE_STEPS),
        KeyCode::PageUp => session.nudge_selected(COARSE_STEPS),
        KeyCode::Char('r') => session.reset(),
        KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
        _ => {}
    }

    Action::None
}

pub fn draw(f: &mut Frame, session: &Session) {
    draw::draw(f, session);
}
