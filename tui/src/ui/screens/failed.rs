use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{
    config::builder::Settings,
    state::session::Session,
    ui::{layout::centered_rect, theme::Theme},
};

use super::{Action, Screen};

/// Shown when the model or the historical data could not be loaded.
pub struct FailedState {
    settings: Settings,
    reason: String,
    attempts: usize,
}

impl FailedState {
    pub fn new(settings: Settings, reason: String) -> Self {
        Self {
            settings,
            reason,
            attempts: 1,
        }
    }
}

pub fn handle_key(state: &mut FailedState, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('r') => match Session::load(&state.settings) {
            Ok(session) => Action::Transition(Screen::Dashboard(Box::new(session))),
            Err(e) => {
                log::error!("retry {} failed: {e}", state.attempts);
                state.reason = e.to_string();
                state.attempts += 1;
                Action::None
            }
        },
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

pub fn draw(f: &mut Frame, state: &FailedState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = centered_rect(60, 60, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(1), // subtitle
            Constraint::Length(1), // spacer
            Constraint::Min(4),    // reason box
            Constraint::Length(1), // spacer
            Constraint::Length(1), // hints
        ])
        .split(outer);

    f.render_widget(
        Paragraph::new(Span::styled(
            "Cannot Load Model",
            Theme::error().add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    let subtitle = format!(
        "model: {}  |  data: {}  |  attempts: {}",
        state.settings.model_path.display(),
        state.settings.data_path.display(),
        state.attempts
    );
    f.render_widget(
        Paragraph::new(Span::styled(subtitle, Theme::muted())),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new(state.reason.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::error())
                    .title(" Reason ")
                    .title_style(Theme::error()),
            )
            .style(Theme::text())
            .wrap(Wrap { trim: true }),
        chunks[3],
    );

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("r", Theme::dim()),
        Span::styled("  retry    ", Theme::muted()),
        Span::styled("q", Theme::dim()),
        Span::styled("  quit", Theme::muted()),
    ]))
    .alignment(Alignment::Center);

    f.render_widget(hint, chunks[5]);
}
