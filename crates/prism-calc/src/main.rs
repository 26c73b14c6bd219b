//! prism-calc: a decorative four-function calculator for the terminal.
//!
//! ## Usage
//!
//! ```bash
//! prism-calc                  # launch with the dark theme
//! prism-calc --theme ocean    # start on another palette
//! prism-calc --no-effects     # skip ripples and the particle backdrop
//! RUST_LOG=debug prism-calc   # log dispatched commands to stderr
//! ```

use std::io;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use prism_calc::error::{AppError, AppResult};
use prism_calc::tui::{self, App, InputHandler, Theme};

#[derive(Debug, Parser)]
#[command(
    name = "prism-calc",
    version,
    about = "A decorative four-function calculator for the terminal"
)]
struct Cli {
    /// Initial color theme
    #[arg(long, value_enum, default_value = "dark")]
    theme: Theme,

    /// Animation tick in milliseconds
    #[arg(long, default_value_t = 50)]
    tick_rate: u64,

    /// Disable ripples and the particle backdrop
    #[arg(long)]
    no_effects: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(cli.theme, !cli.no_effects);
    let result = run_app(&mut terminal, app, Duration::from_millis(cli.tick_rate));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn init_tracing() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> AppResult<()> {
    let handler = InputHandler::new();
    let mut last_tick = Instant::now();

    while !app.should_quit() {
        terminal.draw(|frame| tui::render(&app, frame))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    app.dispatch(handler.handle_key(key));
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let areas = tui::compute_layout(
                        Rect::new(0, 0, size.width, size.height),
                        app.show_history(),
                    );
                    app.dispatch(handler.handle_mouse(mouse, app.keypad(), areas.keypad));
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
