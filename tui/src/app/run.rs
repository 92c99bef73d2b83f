use std::{io, path::Path, time::Duration};

use anyhow::{anyhow, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::{
    config::{builder, json},
    state::session::Session,
    ui::screens::{failed::FailedState, Action, Screen},
};

use super::logging;

/// Optional settings file, looked up in the working directory.
const CONFIG_PATH: &str = "rice-yield.json";

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the dashboard.
///
/// # Errors
/// Returns an error if the settings are invalid, or if terminal setup or
/// rendering fails. Model and data loading failures are shown on screen instead.
pub fn run() -> Result<()> {
    let draft = json::load_or_default(Path::new(CONFIG_PATH))
        .map_err(|e| anyhow!("{CONFIG_PATH}: {e}"))?;
    let settings = builder::build(&draft).map_err(|e| anyhow!("{CONFIG_PATH}: {e}"))?;

    logging::init(&settings.log_path)?;
    log::info!(
        "starting with model '{}' and data '{}'",
        settings.model_path.display(),
        settings.data_path.display()
    );

    let mut screen = match Session::load(&settings) {
        Ok(session) => Screen::Dashboard(Box::new(session)),
        Err(e) => {
            log::error!("initial load failed: {e}");
            Screen::LoadFailed(FailedState::new(settings, e.to_string()))
        }
    };

    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    loop {
        terminal.draw(|f| screen.draw(f))?;

        if event::poll(Duration::from_millis(120))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match screen.handle_key(k.code) {
                    Action::Quit => break,
                    Action::Transition(next) => screen = next,
                    Action::None => {}
                }
            }
        }
    }

    terminal.show_cursor()?;
    log::info!("bye");
    Ok(())
}
