use std::io::stdout;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

use cozyyu_search::app::App;
use cozyyu_search::config::{self, Config};
use cozyyu_search::logging;
use cozyyu_search::lookup::{HttpSuggestionSource, spawn_worker};
use cozyyu_search::navigation::category_url;

/// Search the Cozyyu catalog with live suggestions
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file (default: ~/.config/cozyyu/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site root, e.g. http://127.0.0.1:8000
    #[arg(long)]
    base_url: Option<String>,

    /// Quiet period before suggestions are fetched
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Category to open the results page with
    #[arg(long)]
    category: Option<String>,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.search.base_url = base_url.clone();
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.search.debounce_ms = debounce_ms;
        }
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    logging::init();

    let mut config = config::load_config(args.config.as_deref())?;
    args.apply(&mut config);

    let mut app = App::new(&config)?;
    if let Some(category) = &args.category {
        let url = category_url(&app.page_url, category);
        app.load_page(url);
    }

    let endpoints = config.search.endpoints()?;
    let source = HttpSuggestionSource::new(
        endpoints.autocomplete,
        Duration::from_millis(config.search.request_timeout_ms),
    )?;
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let worker = spawn_worker(source, request_rx, response_tx);
    app.connect(request_tx, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    let submitted = app.submitted_url().cloned();

    // Dropping the app closes the request channel and stops the worker
    drop(app);
    if worker.join().is_err() {
        log::warn!("Lookup worker panicked");
    }

    result?;

    if let Some(url) = submitted {
        println!("{}", url);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let timeout = app.poll_timeout(std::time::Instant::now());
        app.handle_events(timeout)?;
        app.tick(std::time::Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
