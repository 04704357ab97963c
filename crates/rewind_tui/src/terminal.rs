//! Terminal lifecycle and the blocking event loop.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::panic;
use std::time::Duration;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use crate::{App, AppAction, TuiConfig, ui};

/// Installs the tracing subscriber, writing to the configured log file.
///
/// The terminal belongs to the UI, so nothing is logged to stdout or
/// stderr. `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(log_file = %config.log_file().display(), "Tracing initialized");
    Ok(())
}

/// Runs the interactive game until the player quits.
#[instrument(skip_all)]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting Rewind TUI");

    install_panic_hook(|| {
        let _ = restore_terminal();
    });

    enable_raw_mode()?;
    let res =
        enter_terminal().and_then(|mut terminal| run_app(&mut terminal, App::new(), config));
    restore_terminal()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    info!("Rewind TUI exited");
    res
}

/// Runs `restore` before the previously installed panic hook, so the panic
/// message lands on the normal screen.
fn install_panic_hook(restore: impl Fn() + Send + Sync + 'static) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    config: &TuiConfig,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app, config))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == AppAction::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_panic_hook_restores_before_unwinding() {
        let restored = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&restored);
        install_panic_hook(move || flag.store(true, Ordering::SeqCst));

        let result = panic::catch_unwind(|| panic!("board exploded"));
        drop(panic::take_hook());

        assert!(result.is_err());
        assert!(restored.load(Ordering::SeqCst));
    }
}
