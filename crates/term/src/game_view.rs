//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, centered in the viewport:
//!
//! ```text
//! ┌──── Game ────┐  ┌────── Score ──────┐
//! │              │  │        120        │
//! │              │  └───────────────────┘
//! │              │  ┌────── Next ───────┐
//! │              │  │       ████        │
//! │              │  │     ████          │
//! └──────────────┘  └───────────────────┘
//! ```

use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rect, Rgb};
use crate::types::COLOR_COUNT;

/// Side panel width in terminal columns
pub const SIDE_PANEL_W: u16 = 21;
/// Score panel height, border included
pub const SCORE_PANEL_H: u16 = 5;
/// Next-piece panel height, border included
pub const NEXT_PANEL_H: u16 = 9;
/// Horizontal gap between the well and the side panels
pub const PANEL_GAP: u16 = 2;

const BLOCK: char = '█';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Panel rectangles for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub game: Rect,
    pub score: Rect,
    pub next: Rect,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    pub fn layout(&self, board_w: usize, board_h: usize, viewport: Viewport) -> PanelLayout {
        let game_w = (board_w as u16).saturating_mul(self.cell_w).saturating_add(2);
        let game_h = (board_h as u16).saturating_add(2);
        let total_w = game_w + PANEL_GAP + SIDE_PANEL_W;
        let total_h = game_h.max(SCORE_PANEL_H + 1 + NEXT_PANEL_H);

        let x0 = viewport.width.saturating_sub(total_w) / 2;
        let y0 = viewport.height.saturating_sub(total_h) / 2;
        let side_x = x0 + game_w + PANEL_GAP;

        PanelLayout {
            game: Rect::new(x0, y0, game_w, game_h),
            score: Rect::new(side_x, y0, SIDE_PANEL_W, SCORE_PANEL_H),
            next: Rect::new(side_x, y0 + SCORE_PANEL_H + 1, SIDE_PANEL_W, NEXT_PANEL_H),
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when the
    /// viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let layout = self.layout(snap.width, snap.height, viewport);
        let border = CellStyle::fg(Rgb::new(200, 200, 200));
        let title = CellStyle::fg(Rgb::new(230, 230, 230)).bold();

        for (area, name) in [
            (layout.game, "Game"),
            (layout.score, "Score"),
            (layout.next, "Next"),
        ] {
            fb.draw_border(area, border);
            fb.draw_title(area, name, title);
        }

        // The active piece is already stamped into the board once it has moved.
        let well = layout.game.inner();
        for y in 0..snap.height {
            for x in 0..snap.width {
                let px = well.x + x as u16 * self.cell_w;
                self.draw_cell(fb, px, well.y + y as u16, snap.cell(x, y));
            }
        }

        let mut digits = [0u8; 10];
        fb.put_str_centered(layout.score.inner(), format_u32(snap.score, &mut digits), title);

        if let Some(next) = &snap.next {
            self.draw_piece_centered(fb, layout.next.inner(), next);
        }

        if !snap.running {
            let banner = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
            fb.put_str_centered(well, "Game Over", banner);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, px: u16, py: u16, color: u8) {
        let Some(style) = color_style(color) else {
            return;
        };
        for dx in 0..self.cell_w {
            fb.put_char(px + dx, py, BLOCK, style);
        }
    }

    fn draw_piece_centered(&self, fb: &mut FrameBuffer, area: Rect, piece: &Piece) {
        let piece_w = piece.width() as u16 * self.cell_w;
        let piece_h = piece.height() as u16;
        let x0 = area.x + area.w.saturating_sub(piece_w) / 2;
        let y0 = area.y + area.h.saturating_sub(piece_h) / 2;

        for (col, row) in piece.filled_cells() {
            let px = x0 + col as u16 * self.cell_w;
            self.draw_cell(fb, px, y0 + row as u16, piece.color());
        }
    }
}

/// Style for a board color index; `None` for an empty cell.
pub fn color_style(color: u8) -> Option<CellStyle> {
    let fg = match color {
        1 => Rgb::new(60, 120, 230),
        2 => Rgb::new(220, 60, 60),
        3 => Rgb::new(245, 150, 40),
        4 => Rgb::new(80, 200, 100),
        5 => Rgb::new(240, 220, 70),
        6 => Rgb::new(170, 90, 210),
        7 => Rgb::new(140, 95, 60),
        _ => return None,
    };
    debug_assert!(color <= COLOR_COUNT);
    Some(CellStyle::fg(fg))
}

/// Decimal digits of `v` without allocating
fn format_u32(mut v: u32, buf: &mut [u8; 10]) -> &str {
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = b'0' + (v % 10) as u8;
        v /= 10;
        if v == 0 {
            break;
        }
    }
    // Only ASCII digits were written.
    std::str::from_utf8(&buf[i..]).unwrap_or("0")
}
