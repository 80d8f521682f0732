use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
};
use typer::{
    app::{App, AppOptions, Flow},
    config::{ConfigStore, FileConfigStore, MemoryConfigStore},
    language::{Difficulty, TimeLimit},
    logging,
    runtime::{
        AppEvent, Clock, CrosstermEventSource, EventSource, FixedTicker, Runner, SystemClock,
        Ticker,
    },
    ui,
};

/// typing speed test for the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type a generated passage against the clock and get words per minute, accuracy and a speed chart when time runs out or the passage is done."
)]
pub struct Cli {
    /// difficulty to preselect on the setup screen
    #[clap(short = 'd', long, value_enum)]
    difficulty: Option<Difficulty>,

    /// time limit in seconds to preselect on the setup screen
    #[clap(short = 't', long, value_enum)]
    time_limit: Option<TimeLimit>,

    /// custom passage to type instead of generated words
    #[clap(short = 'p', long)]
    prompt: Option<String>,

    /// skip the landing screen and open setup directly
    #[clap(long)]
    skip_intro: bool,
}

impl Cli {
    fn options(&self) -> AppOptions {
        AppOptions {
            difficulty: self.difficulty,
            time_limit: self.time_limit,
            prompt: self.prompt.clone(),
            skip_intro: self.skip_intro,
        }
    }
}

fn config_store() -> Box<dyn ConfigStore> {
    match FileConfigStore::new() {
        Ok(store) => {
            tracing::debug!(path = %store.path().display(), "using config file");
            Box::new(store)
        }
        Err(err) => {
            tracing::warn!(error = %err, "settings will not be remembered");
            Box::new(MemoryConfigStore::default())
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let _log_guard = logging::init_logging();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let mut app = App::new(cli.options(), config_store(), SystemClock)?;

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());
    let res = start_tui(&mut terminal, &mut app, runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "terminal loop failed");
    }
    res
}

fn start_tui<B, C, E, T>(
    terminal: &mut Terminal<B>,
    app: &mut App<C>,
    mut runner: Runner<E, T>,
) -> Result<(), Box<dyn Error>>
where
    B: Backend,
    C: Clock + Clone + 'static,
    E: EventSource,
    T: Ticker,
{
    loop {
        terminal.draw(|f| ui::draw(app, f))?;

        let was_ticking = app.wants_ticks();
        match runner.step() {
            AppEvent::Key(key) => {
                if app.handle_key(key) == Flow::Quit {
                    break;
                }
            }
            AppEvent::Resize => {}
            AppEvent::Tick => app.on_tick(),
        }

        // Align the one second cadence with the first keystroke
        if !was_ticking && app.wants_ticks() {
            runner.reset_ticks();
        }
    }

    tracing::info!("exiting");
    Ok(())
}
