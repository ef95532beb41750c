mod error;
mod icons;
mod math;
mod render;
mod sphere;
mod sprite;
mod state;
mod viewport;

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing_subscriber::EnvFilter;

use error::SphereError;
use state::AppState;
use viewport::{PX_PER_COL, PX_PER_ROW};

/// A console-based rotating icon sphere demo
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Frame rate cap
    #[arg(long, default_value_t = 30)]
    fps: u64,

    /// Start with the debug overlay enabled
    #[arg(long)]
    debug: bool,

    /// Write tracing output to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Fix the viewport width in pixels instead of deriving it from the
    /// terminal
    #[arg(long)]
    width: Option<f64>,
}

/// Restores the terminal on drop, on every exit path.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> Result<(), SphereError> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }

    let (mut cols, mut rows) = initial_size()?;
    let width = args.width.unwrap_or_else(|| viewport::width_px(cols));
    let mut state = AppState::new(viewport::preset_for_width(width));
    state.debug = args.debug;

    let mut positions = sphere::layout(icons::ICONS.len(), state.preset.radius);
    tracing::info!(cols, rows, radius = state.preset.radius, "starting");

    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();

    let frame_budget = Duration::from_millis(1000 / args.fps.max(1));
    let mut last_tick = Instant::now();
    let mut frames_since_last_update = 0usize;
    let mut last_fps_calculation = Instant::now();
    let mut fps = 0.0;

    'running: loop {
        // Drain input until the next frame is due.
        let deadline = last_tick + frame_budget;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break 'running,
                    KeyCode::Char(' ') => state.toggle_pause(),
                    KeyCode::Char('d') => state.debug = !state.debug,
                    KeyCode::Char('r') => state.reset(),
                    _ => {}
                },
                Event::Mouse(mouse) => handle_mouse(mouse, &mut state, cols, rows),
                Event::Resize(new_cols, new_rows) => {
                    cols = new_cols;
                    rows = new_rows;
                    let width = args.width.unwrap_or_else(|| viewport::width_px(cols));
                    if state.apply_width(width) {
                        positions = sphere::layout(icons::ICONS.len(), state.preset.radius);
                    }
                }
                Event::FocusLost => state.pointer_up(),
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = state::clamp_frame_dt(now.duration_since(last_tick).as_secs_f64());
        last_tick = now;
        state.advance(dt);

        render::draw_frame(&mut stdout, &state, &positions, cols, rows, fps)?;

        frames_since_last_update += 1;
        let window = last_fps_calculation.elapsed().as_secs_f64();
        if window >= 1.0 {
            fps = frames_since_last_update as f64 / window;
            frames_since_last_update = 0;
            last_fps_calculation = now;
        }
    }

    Ok(())
}

/// Map mouse events onto the drag state machine. A press only starts a
/// drag when it lands on the projected sphere disc.
fn handle_mouse(mouse: MouseEvent, state: &mut AppState, cols: u16, rows: u16) {
    let x = mouse.column as f64 * PX_PER_COL;
    let y = mouse.row as f64 * PX_PER_ROW;
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if render::hit_test(mouse.column, mouse.row, cols, rows, state.preset.radius) {
                state.pointer_down(x, y);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => state.pointer_move(x, y),
        MouseEventKind::Up(MouseButton::Left) => state.pointer_up(),
        _ => {}
    }
}

fn initial_size() -> Result<(u16, u16), SphereError> {
    if let Some(size) = termsize::get() {
        return Ok((size.cols, size.rows));
    }
    terminal::size().map_err(|_| SphereError::TerminalSize)
}
