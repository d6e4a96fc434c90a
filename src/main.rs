//! spendtab - Expense Dashboard
//!
//! A tabbed TUI for recent expenses, receipts, and spending analytics.
//!
//! Features:
//! - Home: recent expenses and monthly spending chart
//! - Receipts: browse every stored receipt
//! - Analytics: spending per category as a donut chart
//! - Profile: switch themes, see where config and logs live
//!
//! Usage: spendtab [--tab ROUTE] [--theme NAME] [--debug]

mod app;
mod config;
mod error;
mod navigator;
mod sample;
mod screens;
mod types;
mod ui;

use anyhow::{bail, Context, Result};
use app::App;
use config::{Config, LogLevel, ThemeName};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::fs::{self, File};
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

/// Command line options
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    debug: bool,
    tab: Option<String>,
    theme: Option<ThemeName>,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("spendtab {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let result = parse_args(&args).and_then(run_app);

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"spendtab - Expense Dashboard

USAGE:
    spendtab [OPTIONS]

OPTIONS:
        --tab <ROUTE>    Start on the given tab (Home, Receipts, Analytics, Profile)
        --theme <NAME>   Use a theme for this session (light, dark, terminal)
    -d, --debug          Write debug output to the log file
    -h, --help           Print help information
    -v, --version        Print version information

KEYBINDINGS:
    1-4              Switch tabs
    Tab / ←→         Next/previous tab
    t                Toggle theme
    j/k              Navigate lists (Receipts tab)
    a                See all receipts (Home tab)
    Enter            Switch theme (Profile tab)
    q                Quit

CONFIG:
    ~/.config/spendtab/config.toml
"#
    );
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-d" | "--debug" => options.debug = true,
            "--tab" => {
                let value = iter.next().context("--tab needs a route name")?;
                options.tab = Some(value.clone());
            }
            "--theme" => {
                let value = iter.next().context("--theme needs a theme name")?;
                let name = ThemeName::parse(value)
                    .with_context(|| format!("Unknown theme '{}'", value))?;
                options.theme = Some(name);
            }
            other => bail!("Unknown argument '{}' (see --help)", other),
        }
    }

    Ok(options)
}

/// Route log output to a file; the terminal belongs to the UI
fn init_logging(level: LogLevel) -> Result<PathBuf> {
    let log_dir = dirs::cache_dir()
        .context("Could not determine cache directory")?
        .join("spendtab");
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", log_dir))?;

    let path = log_dir.join("spendtab.log");
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {:?}", path))?;

    simplelog::WriteLogger::init(level.to_filter(), simplelog::Config::default(), file)
        .context("Failed to initialize logger")?;

    Ok(path)
}

fn run_app(options: Options) -> Result<()> {
    let config_path = Config::path()?;
    let mut config = Config::load_from(&config_path)
        .context("Failed to load configuration")?;

    let level = if options.debug {
        LogLevel::Debug
    } else {
        config.log_level
    };
    let log_path = init_logging(level)?;
    log::info!("spendtab {} starting", env!("CARGO_PKG_VERSION"));

    // Command line overrides apply to this session only
    let persist = options.theme.is_none() && options.tab.is_none();
    if let Some(theme) = options.theme {
        config.theme = theme;
    }
    if let Some(tab) = options.tab {
        config.initial_route = tab;
    }

    let mut app = App::new(config, Some(config_path), Some(log_path))
        .context("Failed to initialize application")?;
    if !persist {
        app = app.session_only();
    }
    log::debug!("initial tab {}", app.navigator.active_route());

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run main loop
    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    if let Err(e) = &result {
        log::error!("main loop failed: {:#}", e);
    }
    log::info!("spendtab exiting");

    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Draw only after something changed
        app.draw(terminal)?;

        // Poll with a timeout so flash messages can expire
        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                // Only handle key press events (not release)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
                Event::Resize(_, _) => app.request_redraw(),
                _ => {}
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
