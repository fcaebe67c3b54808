use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::str::FromStr;
use std::time::Duration;
use video_poker::tui::{app::AppState, controller};

const LOG_LEVEL_ENV: &str = "VIDEO_POKER_LOG";

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// File-only logger under `logs/`; the terminal belongs to the TUI.
fn init_logging() -> io::Result<()> {
    let level = std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|v| log::LevelFilter::from_str(&v).ok())
        .unwrap_or(log::LevelFilter::Debug);
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let file = std::fs::File::create(format!("logs/{}.log", time))?;
    simplelog::WriteLogger::init(level, config, file).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

fn main() -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "video-poker TUI requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            video_poker::VERSION
        );
        return Ok(());
    }
    if let Err(err) = init_logging() {
        eprintln!("logging disabled: {err}");
    }
    log::info!("video-poker v{} starting", video_poker::VERSION);
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(50);
    let mut app = AppState::default();

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    log::info!("video-poker exiting");
    res
}
