//! Framebuffer and style types for terminal rendering.
//!
//! Drawing helpers clip silently: anything outside the buffer is dropped, so
//! layouts degrade gracefully on small terminals.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::fg(Rgb::new(220, 220, 220))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Rectangle in framebuffer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Area inside a one-cell border
    pub fn inner(&self) -> Rect {
        Rect::new(
            self.x.saturating_add(1),
            self.y.saturating_add(1),
            self.w.saturating_sub(2),
            self.h.saturating_sub(2),
        )
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible. Contents are unspecified afterwards.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell { ch, style };
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (i, ch) in s.chars().enumerate() {
            let Some(cx) = x.checked_add(i as u16) else {
                break;
            };
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
        }
    }

    /// Write `s` centered on the middle row of `area`, truncated to the area width.
    pub fn put_str_centered(&mut self, area: Rect, s: &str, style: CellStyle) {
        let len = (s.chars().count() as u16).min(area.w);
        let x = area.x + (area.w - len) / 2;
        let y = area.y + area.h / 2;
        for (i, ch) in s.chars().take(len as usize).enumerate() {
            self.put_char(x + i as u16, y, ch, style);
        }
    }

    /// Box-drawing border around `area`
    pub fn draw_border(&mut self, area: Rect, style: CellStyle) {
        if area.w < 2 || area.h < 2 {
            return;
        }
        let (x, y, r, b) = (area.x, area.y, area.x + area.w - 1, area.y + area.h - 1);

        self.put_char(x, y, '┌', style);
        self.put_char(r, y, '┐', style);
        self.put_char(x, b, '└', style);
        self.put_char(r, b, '┘', style);

        for cx in x + 1..r {
            self.put_char(cx, y, '─', style);
            self.put_char(cx, b, '─', style);
        }
        for cy in y + 1..b {
            self.put_char(x, cy, '│', style);
            self.put_char(r, cy, '│', style);
        }
    }

    /// Title centered in the top border as ` title `; skipped when it does not fit.
    pub fn draw_title(&mut self, area: Rect, title: &str, style: CellStyle) {
        let len = title.chars().count() as u16 + 2;
        let avail = area.w.saturating_sub(2);
        if title.is_empty() || len > avail {
            return;
        }
        let x = area.x + 1 + (avail - len) / 2;
        self.put_char(x, area.y, ' ', style);
        self.put_str(x + 1, area.y, title, style);
        self.put_char(x + len - 1, area.y, ' ', style);
    }

    /// Whole buffer as text, one line per row
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.cells.chunks(self.width.max(1) as usize) {
            out.extend(row.iter().map(|c| c.ch));
            out.push('\n');
        }
        out
    }
}
