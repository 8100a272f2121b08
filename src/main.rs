//! exorcism-guide - Exorcism Complete Guide in the terminal
//!
//! A TUI for reading the "Guia Completo de Exorcismo".
//!
//! Features:
//! - Section navigation with feature cards and keyboard shortcuts
//! - Prayer filtering by category and copy to clipboard
//! - Expandable "read more" panels and a FAQ accordion
//! - Dark/light theme remembered across sessions
//!
//! Usage: exorcism-guide [--content FILE] [--section ID]

mod app;
mod clipboard;
mod config;
mod content;
mod controller;
mod error;
mod logging;
mod storage;
mod types;
mod ui;

use anyhow::{bail, Context, Result};
use app::App;
use clipboard::SystemClipboard;
use content::Guide;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;
use storage::{FileStorage, MemoryStorage, Storage};

/// Command line options
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    content: Option<PathBuf>,
    section: Option<String>,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("exorcism-guide {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            eprintln!("Try 'exorcism-guide --help' for more information.");
            std::process::exit(2);
        }
    };

    if let Err(e) = run_app(options) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-c" | "--content" => {
                let path = iter.next().context("--content requires a file path")?;
                options.content = Some(PathBuf::from(path));
            }
            "-s" | "--section" => {
                let id = iter.next().context("--section requires a section id")?;
                options.section = Some(id.clone());
            }
            other => bail!("unknown argument '{}'", other),
        }
    }

    Ok(options)
}

fn print_help() {
    println!(
        r#"exorcism-guide - Exorcism Complete Guide in the terminal

USAGE:
    exorcism-guide [OPTIONS]

OPTIONS:
    -c, --content <FILE>   Load guide content from a JSON file
    -s, --section <ID>     Start on this section instead of the default
    -h, --help             Print help information
    -v, --version          Print version information

KEYBINDINGS:
    ←/→  a/d         Previous/next section
    Home/End         First/last section
    1-9              Jump to section
    j/k  ↓/↑         Move focus between controls
    Enter/Space      Activate focused control
    c                Copy focused prayer
    PgUp/PgDn        Scroll
    g                Scroll to top
    t                Toggle dark/light theme
    q                Quit

FILES:
    ~/.config/exorcism-guide/config.toml
    ~/.local/share/exorcism-guide/storage.json
    ~/.cache/exorcism-guide/logs/guide.log
"#
    );
}

fn run_app(options: Options) -> Result<()> {
    let mut config = config::Config::load().context("Failed to load configuration")?;
    if let Some(section) = options.section {
        config.default_section = section;
    }

    let _log_guard = logging::init(&config.log.level).context("Failed to initialize logging")?;

    let guide = match &options.content {
        Some(path) => Guide::load(path)?,
        None => Guide::builtin(),
    };
    logging::log_startup(guide.sections.len(), guide.prayers.len());

    let storage: Box<dyn Storage> = match FileStorage::open_default() {
        Ok(storage) => {
            tracing::debug!(path = %storage.path().display(), "opened storage");
            Box::new(storage)
        }
        Err(e) => {
            tracing::warn!(error = %e, "durable storage unavailable, using memory");
            Box::new(MemoryStorage::new())
        }
    };

    let clipboard = SystemClipboard::new(
        config.clipboard.command.clone(),
        config.clipboard.osc52_fallback,
    );

    let mut app = App::new(guide, config, storage, Box::new(clipboard));

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    tracing::info!("session ended");
    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let (width, height) = crossterm::terminal::size().context("Failed to read terminal size")?;
    app.resize(width, height);

    loop {
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        // Expire copy acknowledgments
        app.tick();

        // Poll for events with timeout (for timer updates)
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Only handle key press events (not release)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
                Event::Resize(width, height) => app.resize(width, height),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_help_does_not_panic() {
        print_help();
    }

    #[test]
    fn test_parse_args() {
        let options = parse_args(&args(&["--content", "guide.json", "-s", "faq"])).unwrap();
        assert_eq!(options.content, Some(PathBuf::from("guide.json")));
        assert_eq!(options.section.as_deref(), Some("faq"));

        assert_eq!(parse_args(&[]).unwrap(), Options::default());
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&args(&["--content"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }
}
