//! Detective Quest
//!
//! Explore the mansion, collect the clues, accuse the culprit.

use anyhow::Context;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use detective_quest::tui::App;
use detective_quest::GameConfig;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fs::File;
use std::io::{self, stdout};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Send logs to the configured file. The terminal belongs to the UI, so
/// without a file nothing is logged.
fn init_logging(config: &GameConfig) -> anyhow::Result<()> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> anyhow::Result<()> {
    while app.running {
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        if !app.handle_input()? {
            break;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = GameConfig::from_env()?;
    init_logging(&config)?;
    tracing::info!(version = detective_quest::VERSION, ?config, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = run(&mut terminal, &mut app);
    app.quit();

    // Cleanup, even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "game loop failed");
    }
    result?;

    println!("\n╔════════════════════════════════════════════╗");
    println!("║  Thanks for playing Detective Quest!       ║");
    println!("║                                            ║");
    println!("║  The mansion keeps its secrets... for now. ║");
    println!("╚════════════════════════════════════════════╝\n");

    Ok(())
}
