/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game; no game logic is performed. Field coordinates (800×450 by
/// default) are scaled into the bordered playfield at draw time.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::entities::{Facing, Fish, GamePhase, Shark};
use crate::game::Game;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_TIME: Color = Color::White;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_BEST: Color = Color::Cyan;
const C_SHARK: Color = Color::Grey;
const C_FISH: Color = Color::Green;
const C_HINT: Color = Color::DarkGrey;

// ── Field → cell scaling ──────────────────────────────────────────────────────

/// Maps field coordinates into the playfield between the border rows.
struct Viewport {
    cols: u16,
    rows: u16,
    field_w: f32,
    field_h: f32,
}

impl Viewport {
    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        // Playfield: cols 1..cols-1, rows 2..rows-2
        let inner_w = self.cols.saturating_sub(2) as f32;
        let inner_h = self.rows.saturating_sub(4) as f32;
        if inner_w <= 0.0 || inner_h <= 0.0 {
            return None;
        }
        let cx = 1.0 + x / self.field_w * inner_w;
        let cy = 2.0 + y / self.field_h * inner_h;
        if cx < 1.0 || cx >= self.cols as f32 - 1.0 || cy < 2.0 || cy >= self.rows as f32 - 2.0 {
            return None; // off the visible playfield (fish entering/leaving)
        }
        Some((cx as u16, cy as u16))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, game: &Game, cols: u16, rows: u16) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let view = Viewport {
        cols,
        rows,
        field_w: game.config().field_width,
        field_h: game.config().field_height,
    };

    draw_border(out, cols, rows)?;
    draw_hud(out, game, cols)?;

    match game.phase() {
        GamePhase::Start => draw_start_screen(out, game, cols, rows)?,
        GamePhase::Playing => {
            for fish in game.fish() {
                draw_fish(out, fish, &view)?;
            }
            if let Some(shark) = game.shark() {
                draw_shark(out, shark, &view)?;
            }
        }
        GamePhase::GameOver => draw_game_over(out, game, cols, rows)?,
    }

    draw_controls_hint(out, rows)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let w = cols as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row rows-2 — bottom bar
    out.queue(cursor::MoveTo(0, rows.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..rows.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, game: &Game, cols: u16) -> std::io::Result<()> {
    // Time — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_TIME))?;
    out.queue(Print(format!("Time: {:>2}s", game.time_remaining())))?;

    // Score — centre
    let score_str = format!("Score: {}", game.score());
    let sx = (cols / 2).saturating_sub(score_str.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(sx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&score_str))?;

    // High score — right
    let best_str = format!("Best: {}", game.high_score());
    let rx = cols.saturating_sub(best_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_BEST))?;
    out.queue(Print(&best_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_shark<W: Write>(out: &mut W, shark: &Shark, view: &Viewport) -> std::io::Result<()> {
    let Some((cx, cy)) = view.cell(shark.x, shark.y) else {
        return Ok(());
    };
    let sprite = match shark.facing {
        Facing::Left => "◄Ξ≈",
        Facing::Right => "≈Ξ►",
    };
    out.queue(style::SetForegroundColor(C_SHARK))?;
    out.queue(cursor::MoveTo(cx.saturating_sub(1).max(1), cy))?;
    out.queue(Print(sprite))?;
    Ok(())
}

fn draw_fish<W: Write>(out: &mut W, fish: &Fish, view: &Viewport) -> std::io::Result<()> {
    let Some((cx, cy)) = view.cell(fish.x, fish.y) else {
        return Ok(());
    };
    let sprite = match fish.facing {
        Facing::Left => "<><",
        Facing::Right => "><>",
    };
    out.queue(style::SetForegroundColor(C_FISH))?;
    out.queue(cursor::MoveTo(cx.saturating_sub(1).max(1), cy))?;
    out.queue(Print(sprite))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("↑ ↓ ← → / WASD : Move   Mouse : Drag   Q : Quit"))?;
    Ok(())
}

// ── Start screen ──────────────────────────────────────────────────────────────

fn draw_start_screen<W: Write>(
    out: &mut W,
    game: &Game,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let best_line = format!("Best Score: {}", game.high_score());
    let lines: &[(&str, Color)] = &[
        ("～  FISH  CATCH  ～", Color::Cyan),
        ("", Color::White),
        ("Catch as many fish as you can in 30 seconds!", Color::White),
        (&best_line, Color::Yellow),
        ("", Color::White),
        ("ENTER or Click to start", Color::Green),
    ];
    draw_centered_lines(out, lines, cols, rows)
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    game: &Game,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", game.score());
    let best_line = format!("Best Score: {}", game.high_score());
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    TIME  UP !    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
        (&best_line, Color::Cyan),
        ("R - Play Again  Q - Quit", Color::White),
    ];
    draw_centered_lines(out, lines, cols, rows)
}

fn draw_centered_lines<W: Write>(
    out: &mut W,
    lines: &[(&str, Color)],
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
