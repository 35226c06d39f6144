//! Full-screen terminal runtime for the selector

use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::{debug, error, info, warn};

use super::{Control, SelectorState, input, view};
use crate::constants::selector::POLL_INTERVAL_MS;
use crate::profiles::ProfileTool;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Set when SIGINT/SIGTERM arrives; observed by the event loop
#[cfg(unix)]
fn register_shutdown_signals() -> Result<Arc<AtomicBool>> {
    use signal_hook::consts::{SIGINT, SIGTERM};

    let shutdown = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(&shutdown))
            .context(format!("Failed to register handler for signal {signal}"))?;
    }
    Ok(shutdown)
}

#[cfg(not(unix))]
fn register_shutdown_signals() -> Result<Arc<AtomicBool>> {
    Ok(Arc::new(AtomicBool::new(false)))
}

/// List profiles, take over the terminal and run until the user quits.
///
/// Profile apply failures are shown in the UI and do not make this fail.
pub fn run(tool: &ProfileTool<'_>) -> Result<()> {
    let shutdown = register_shutdown_signals()?;
    let mut state = SelectorState::launch(tool);

    let mut terminal = setup().context("Failed to initialize terminal")?;
    info!(profiles = state.profiles().len(), "Selector started");

    let result = event_loop(&mut terminal, &mut state, tool, &shutdown);

    let restored = restore(&mut terminal).inspect_err(|e| error!(error = ?e, "Failed to restore terminal"));
    result?;
    restored.context("Failed to restore terminal")
}

fn setup() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn event_loop(
    terminal: &mut Tui,
    state: &mut SelectorState,
    tool: &ProfileTool<'_>,
    shutdown: &AtomicBool,
) -> Result<()> {
    let poll_interval = Duration::from_millis(POLL_INTERVAL_MS);

    loop {
        terminal.draw(|frame| view::render(frame, state))?;

        // wait for input, checking for a termination signal between polls
        loop {
            if shutdown.load(Ordering::Relaxed) {
                warn!("Termination signal received, closing selector");
                return Ok(());
            }
            if event::poll(poll_interval)? {
                break;
            }
        }

        let event = event::read()?;
        let size = terminal.size()?;
        let layout = view::layout(Rect::new(0, 0, size.width, size.height), state);

        let Some(input) = input::translate(&event, &layout, state) else {
            continue;
        };
        debug!(?input, "Selector input");

        if state.handle(input, tool) == Control::Quit {
            info!("Selector quit");
            return Ok(());
        }
    }
}
