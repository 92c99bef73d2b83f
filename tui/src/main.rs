use anyhow::Result;

mod app;
mod config;
mod state;
mod ui;

fn main() -> Result<()> {
    app::run::run()
}
