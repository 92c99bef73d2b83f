pub mod dashboard;
pub mod failed;

use crossterm::event::KeyCode;
use ratatui::Frame;

use crate::state::session::Session;

pub enum Action {
    None,
    Quit,
    Transition(Screen),
}

pub enum Screen {
    Dashboard(Box<Session>),
    LoadFailed(failed::FailedState),
}

impl Screen {
    pub fn draw(&self, f: &mut Frame) {
        match self {
            Screen::Dashboard(s) => dashboard::draw(f, s),
            Screen::LoadFailed(s) => failed::draw(f, s),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        match self {
            Screen::Dashboard(s) => dashboard::handle_key(s, key),
            Screen::LoadFailed(s) => failed::handle_key(s, key),
        }
    }
}
