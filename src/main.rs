//! WELLFALL - a falling-block puzzle for the terminal

mod board;
mod game;
mod input;
mod piece;
mod score;
mod shape;
mod spawner;
mod ui;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use game::{Game, GameState, Intent};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self, stdout},
    time::{Duration, Instant},
};

/// Target frame rate
const TARGET_FPS: u64 = 60;
const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / TARGET_FPS);

/// How long the loss screen stays up before the game exits
const GAME_OVER_LINGER: Duration = Duration::from_secs(2);

/// Get the wellfall temp directory, creating it if needed
fn wellfall_temp_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("wellfall");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

fn main() -> io::Result<()> {
    // Generate session ID for this instance
    let session_id: u32 = rand::random();

    let log_dir = wellfall_temp_dir();
    let log_file = format!("{:08x}.log", session_id);

    // Setup tracing to log file
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wellfall=debug".parse().unwrap()),
        )
        .with_ansi(false)
        .init();

    tracing::info!(
        "wellfall starting up, session={:08x}, log={}",
        session_id,
        log_dir.join(&log_file).display()
    );

    // Setup terminal
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;

    if let Ok(game) = &result {
        println!("Final Score: {}", game.score.points);
        println!("Lines: {}", game.score.lines);
    }

    result.map(|_| ())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<Game> {
    let mut game = Game::new();
    let mut last_tick = Instant::now();
    let mut game_over_at: Option<Instant> = None;

    loop {
        terminal.draw(|frame| ui::render_game(frame, &game))?;

        // Poll for input within the frame budget
        if event::poll(FRAME_DURATION)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match input::map_key(key) {
                        Some(Intent::Quit) => return Ok(game),
                        Some(intent) => game.push_intent(intent),
                        None => {}
                    }
                }
            }
        }

        let now = Instant::now();
        game.tick(now - last_tick);
        last_tick = now;

        if game.state == GameState::GameOver {
            match game_over_at {
                None => game_over_at = Some(Instant::now()),
                Some(since) if since.elapsed() >= GAME_OVER_LINGER => return Ok(game),
                Some(_) => {}
            }
        }
    }
}
