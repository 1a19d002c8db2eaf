//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Position;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(20, 24, 30);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const ACCENT: Rgb = Rgb::new(97, 218, 251);

/// A lightweight terminal renderer for the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Board placement inside the viewport, in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `paused` comes from the scheduler; the engine has no notion of pausing.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        paused: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let n = snap.grid_size;
        let board_w = n.saturating_mul(self.cell_w);
        let board_h = n.saturating_mul(self.cell_h);
        let w = board_w.saturating_add(2);
        let h = board_h.saturating_add(2);
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        fb.fill_rect(
            frame.x.saturating_add(1),
            frame.y.saturating_add(1),
            board_w,
            board_h,
            ' ',
            CellStyle::new(ACCENT, BOARD_BG),
        );
        self.draw_border(fb, frame, border);

        let grid_dot = CellStyle::new(Rgb::new(70, 76, 86), BOARD_BG).dim();
        let (cols, rows) = self.visible_cells(fb, frame, n);
        for y in 0..rows {
            for x in 0..cols {
                self.fill_cell(fb, frame, x, y, '·', grid_dot);
            }
        }

        let food = CellStyle::new(Rgb::new(235, 70, 70), BOARD_BG).bold();
        self.draw_cell(fb, frame, n, snap.food, '●', food);

        let body = CellStyle::new(ACCENT, BOARD_BG);
        let head = CellStyle::new(Rgb::new(180, 240, 255), BOARD_BG).bold();
        for (i, &seg) in snap.snake.iter().enumerate().rev() {
            if i == 0 {
                self.draw_cell(fb, frame, n, seg, '█', head);
            } else {
                self.draw_cell(fb, frame, n, seg, '▓', body);
            }
        }

        self.draw_side_panel(fb, snap, paused, viewport, frame);

        if snap.game_over {
            self.draw_overlay(fb, frame, "GAME OVER", Some("r: restart"));
        } else if paused {
            self.draw_overlay(fb, frame, "PAUSED", None);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, paused: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, paused, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame, style: CellStyle) {
        if f.w < 2 || f.h < 2 {
            return;
        }
        let right = f.x.saturating_add(f.w - 1);
        let bottom = f.y.saturating_add(f.h - 1);

        for x in f.x + 1..right.min(fb.width()) {
            fb.put_char(x, f.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in f.y + 1..bottom.min(fb.height()) {
            fb.put_char(f.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
    }

    /// Draw a grid position, skipping anything off the board.
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        f: Frame,
        grid_size: u16,
        pos: Position,
        ch: char,
        style: CellStyle,
    ) {
        if pos.in_bounds(grid_size) {
            self.fill_cell(fb, f, pos.x as u16, pos.y as u16, ch, style);
        }
    }

    /// Grid columns and rows that start inside the framebuffer.
    fn visible_cells(&self, fb: &FrameBuffer, f: Frame, grid_size: u16) -> (u16, u16) {
        let cols = fb.width().saturating_sub(f.x.saturating_add(1)).div_ceil(self.cell_w);
        let rows = fb.height().saturating_sub(f.y.saturating_add(1)).div_ceil(self.cell_h);
        (cols.min(grid_size), rows.min(grid_size))
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, f: Frame, x: u16, y: u16, ch: char, style: CellStyle) {
        let (Some(dx), Some(dy)) = (x.checked_mul(self.cell_w), y.checked_mul(self.cell_h)) else {
            return;
        };
        let px = f.x.saturating_add(1).saturating_add(dx);
        let py = f.y.saturating_add(1).saturating_add(dy);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        paused: bool,
        viewport: Viewport,
        f: Frame,
    ) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let title = CellStyle::new(ACCENT, PANEL_BG).bold();
        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let help = value.dim();

        let mut y = f.y;
        fb.put_str(panel_x, y, "SNAKE", title);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.len() as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "ROUND", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.round.wrapping_add(1), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATE", label);
        y = y.saturating_add(1);
        let state = if snap.game_over {
            "OVER"
        } else if paused {
            "PAUSED"
        } else {
            "RUNNING"
        };
        fb.put_str(panel_x, y, state, value);
        y = y.saturating_add(2);

        for line in ["arrows/wasd", "p  pause", "r  restart", "q  quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, f: Frame, text: &str, hint: Option<&str>) {
        let mid_y = f.y.saturating_add(f.h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        self.put_centered(fb, f, mid_y, text, style);
        if let Some(hint) = hint {
            let hint_style = CellStyle::new(ACCENT, PANEL_BG);
            self.put_centered(fb, f, mid_y.saturating_add(1), hint, hint_style);
        }
    }

    fn put_centered(&self, fb: &mut FrameBuffer, f: Frame, y: u16, text: &str, style: CellStyle) {
        let text_w = text.chars().count() as u16;
        let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}
