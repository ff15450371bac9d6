mod company;
mod landing;
mod talent;
mod widgets;

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::stdout;
use tracing::info;

use crate::config::Settings;
use crate::theme::Theme;

pub type Term = Terminal<CrosstermBackend<std::io::Stdout>>;

/// Where the user asked to go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Apply,
    Hire,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Go(Route),
    Quit,
}

pub fn run(settings: &Settings, start: Route) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = dispatch(&mut terminal, settings, start);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

/// Runs one screen at a time. Each screen owns its state, which is dropped
/// (pending timers included) as soon as it hands back an intent.
fn dispatch(terminal: &mut Term, settings: &Settings, start: Route) -> Result<()> {
    let mut theme: Theme = settings.theme;
    let mut route = start;
    loop {
        info!(?route, theme = theme.name(), "opening screen");
        let intent = match route {
            Route::Home => landing::run(terminal, &mut theme)?,
            Route::Apply => talent::run(terminal, &mut theme, settings)?,
            Route::Hire => company::run(terminal, &mut theme)?,
        };
        match intent {
            Intent::Go(next) => route = next,
            Intent::Quit => break,
        }
    }
    Ok(())
}
