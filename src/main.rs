use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
    ExecutableCommand,
};
use rand::thread_rng;

use fish_catch::config::GameConfig;
use fish_catch::display;
use fish_catch::entities::GamePhase;
use fish_catch::game::Game;
use fish_catch::input::Dir;
use fish_catch::score::HighScoreStore;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// Optional config override next to the working directory.
const CONFIG_FILE: &str = "fish_catch.toml";

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

/// Returns true if `dir` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<Dir, u64>, dir: Dir, frame: u64) -> bool {
    key_frame
        .get(&dir)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn dir_for(code: KeyCode) -> Option<Dir> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Dir::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Dir::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Dir::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Dir::Right),
        _ => None,
    }
}

/// Map a terminal cell back into field coordinates (inverse of the
/// display's viewport scaling).
fn cell_to_field(col: u16, row: u16, cols: u16, rows: u16, config: &GameConfig) -> (f32, f32) {
    let inner_w = cols.saturating_sub(2).max(1) as f32;
    let inner_h = rows.saturating_sub(4).max(1) as f32;
    let x = (col.saturating_sub(1) as f32) / inner_w * config.field_width;
    let y = (row.saturating_sub(2) as f32) / inner_h * config.field_height;
    (x, y)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every direction key.  Each frame we feed the
/// translator the set of keys still "fresh" (within `HOLD_WINDOW` frames),
/// so held arrows produce continuous motion on both enhancement-capable and
/// classic terminals.  Mouse events map straight onto the pointer interface.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = thread_rng();

    let mut key_frame: HashMap<Dir, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut second_acc = Duration::ZERO;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        let (cols, rows) = terminal::size()?;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                    KeyEventKind::Press => {
                        if let Some(dir) = dir_for(code) {
                            key_frame.insert(dir, frame);
                        }
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(());
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(());
                            }
                            KeyCode::Enter | KeyCode::Char(' ')
                                if game.phase() == GamePhase::Start =>
                            {
                                let _ = game.start(&mut rng);
                                second_acc = Duration::ZERO;
                            }
                            KeyCode::Char('r') | KeyCode::Char('R')
                                if game.phase() == GamePhase::GameOver =>
                            {
                                let _ = game.restart(&mut rng);
                                second_acc = Duration::ZERO;
                            }
                            _ => {}
                        }
                    }
                    KeyEventKind::Repeat => {
                        if let Some(dir) = dir_for(code) {
                            key_frame.insert(dir, frame);
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(dir) = dir_for(code) {
                            key_frame.remove(&dir);
                        }
                    }
                },
                Event::Mouse(MouseEvent { kind, column, row, .. }) => match kind {
                    MouseEventKind::Down(MouseButton::Left) => match game.phase() {
                        GamePhase::Start => {
                            let _ = game.start(&mut rng);
                            second_acc = Duration::ZERO;
                        }
                        GamePhase::GameOver => {
                            let _ = game.restart(&mut rng);
                            second_acc = Duration::ZERO;
                        }
                        GamePhase::Playing => {
                            let (x, y) = cell_to_field(column, row, cols, rows, game.config());
                            game.pointer_down(x, y);
                        }
                    },
                    MouseEventKind::Drag(MouseButton::Left) => {
                        let (x, y) = cell_to_field(column, row, cols, rows, game.config());
                        game.pointer_move(x, y);
                    }
                    MouseEventKind::Up(MouseButton::Left) => {
                        game.pointer_up();
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        // ── Feed held keys to the translator ──────────────────────────────────
        game.release_keys();
        for dir in [Dir::Up, Dir::Down, Dir::Left, Dir::Right] {
            if is_held(&key_frame, dir, frame) {
                game.key_down(dir);
            }
        }

        // ── The two cadences: per-frame update + once-per-second timer ────────
        if game.phase() == GamePhase::Playing {
            let _ = game.advance_frame(FRAME.as_secs_f32(), &mut rng);
            second_acc += FRAME;
            while second_acc >= Duration::from_secs(1) {
                second_acc -= Duration::from_secs(1);
                let _ = game.second_tick();
            }
        }

        display::render(out, game, cols, rows)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let config = match load_config() {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(1);
        }
    };

    let store = HighScoreStore::open_default();
    let mut game = Game::new(config, store);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let result = game_loop(&mut out, &mut game, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

/// Use `fish_catch.toml` if present; fall back to defaults when it is not.
/// A file that exists but fails to parse is a hard error.
fn load_config() -> Result<GameConfig, String> {
    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        return Ok(GameConfig::default());
    }
    GameConfig::load_from_path(path).map_err(|e| format!("{}: {}", CONFIG_FILE, e))
}
