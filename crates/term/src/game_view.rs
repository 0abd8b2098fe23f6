//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{digit_count, CellStyle, FrameBuffer, Rect, Rgb};
use crate::types::{GameStatus, BOARD_SIZE};

/// Columns between tiles (and between tiles and the border).
const GAP_X: u16 = 1;
/// Rows between tiles (and between tiles and the border).
const GAP_Y: u16 = 1;

/// Narrowest side panel worth drawing.
const PANEL_MIN_W: u16 = 14;

/// Fixed width so the clickable region does not move when the label changes.
const BUTTON_W: u16 = 11;

/// Panel row of the start/restart button, relative to the board top.
const BUTTON_ROW: u16 = 9;

const HELP_LINES: [&str; 5] = [
    "arrows move",
    "drag  swipe",
    "enter start",
    "r   restart",
    "q      quit",
];

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

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

/// Screen placement of everything the view draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    frame: Rect,
    panel: Option<Rect>,
    button: Rect,
    /// Score position under the board when there is no panel.
    score_below: Option<(u16, u16)>,
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 fits six-digit tiles and keeps tiles roughly square.
        Self {
            tile_w: 6,
            tile_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Bordered board rectangle for `viewport`.
    pub fn board_rect(&self, viewport: Viewport) -> Rect {
        self.layout(viewport).frame
    }

    /// Clickable start/restart button region for `viewport`.
    ///
    /// Empty when the viewport has no room for the button.
    pub fn button_rect(&self, viewport: Viewport) -> Rect {
        self.layout(viewport).button
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let n = BOARD_SIZE as u16;
        let frame_w = n * self.tile_w + (n + 1) * GAP_X + 2;
        let frame_h = n * self.tile_h + (n + 1) * GAP_Y + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let frame = Rect::new(start_x, start_y, frame_w, frame_h);

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        let panel = if panel_x < viewport.width && viewport.width - panel_x >= PANEL_MIN_W {
            Some(Rect::new(
                panel_x,
                start_y,
                viewport.width - panel_x,
                viewport.height.saturating_sub(start_y),
            ))
        } else {
            None
        };

        let button = match panel {
            Some(p) if start_y.saturating_add(BUTTON_ROW) < viewport.height => {
                Rect::new(p.x, start_y + BUTTON_ROW, BUTTON_W, 1)
            }
            Some(_) => Rect::default(),
            None => {
                // Below the board, right-aligned, when there is no panel.
                let y = start_y.saturating_add(frame_h);
                if y < viewport.height && frame_w >= BUTTON_W && viewport.width >= BUTTON_W {
                    Rect::new(start_x + frame_w - BUTTON_W, y, BUTTON_W, 1)
                } else {
                    Rect::default()
                }
            }
        };

        let below = start_y.saturating_add(frame_h);
        let score_below = (panel.is_none() && below < viewport.height).then_some((start_x, below));

        Layout {
            frame,
            panel,
            button,
            score_below,
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let frame = layout.frame;

        let bg = CellStyle::new(BOARD_BG, BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        // Background for play area.
        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', bg);

        // Border.
        self.draw_border(fb, frame, border);

        for (row, values) in snap.board.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                self.draw_tile(fb, frame, row as u16, col as u16, value);
            }
        }

        if let Some(panel) = layout.panel {
            self.draw_side_panel(fb, snap, panel, viewport);
        }
        if let Some((x, y)) = layout.score_below {
            let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
            let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
            fb.put_str(x, y, "SCORE", label);
            fb.put_u32(x.saturating_add(6), y, snap.score, value);
        }
        if !layout.button.is_empty() {
            self.draw_button(fb, layout.button, snap.status);
        }

        // Status messages over the board.
        match snap.status {
            GameStatus::Idle => self.draw_overlay_text(fb, frame, ["PRESS START", "Good luck!"]),
            GameStatus::Win => self.draw_overlay_text(fb, frame, ["YOU WIN!", "Congrats!"]),
            GameStatus::Lose => self.draw_overlay_text(fb, frame, ["GAME OVER", "Restart?"]),
            GameStatus::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, r: Rect, style: CellStyle) {
        if r.w < 2 || r.h < 2 {
            return;
        }

        fb.put_char(r.x, r.y, '┌', style);
        fb.put_char(r.x + r.w - 1, r.y, '┐', style);
        fb.put_char(r.x, r.y + r.h - 1, '└', style);
        fb.put_char(r.x + r.w - 1, r.y + r.h - 1, '┘', style);

        for dx in 1..r.w - 1 {
            fb.put_char(r.x + dx, r.y, '─', style);
            fb.put_char(r.x + dx, r.y + r.h - 1, '─', style);
        }
        for dy in 1..r.h - 1 {
            fb.put_char(r.x, r.y + dy, '│', style);
            fb.put_char(r.x + r.w - 1, r.y + dy, '│', style);
        }
    }

    /// Top-left corner of a tile in screen space.
    fn tile_origin(&self, frame: Rect, row: u16, col: u16) -> (u16, u16) {
        let px = frame.x + 1 + GAP_X + col * (self.tile_w + GAP_X);
        let py = frame.y + 1 + GAP_Y + row * (self.tile_h + GAP_Y);
        (px, py)
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, frame: Rect, row: u16, col: u16, value: u32) {
        let (px, py) = self.tile_origin(frame, row, col);
        let mid_y = py + self.tile_h / 2;

        if value == 0 {
            let style = CellStyle::new(BOARD_BG, EMPTY_BG).dim();
            fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', style);
            fb.put_char(px + self.tile_w / 2, mid_y, '·', style);
            return;
        }

        let (tile_bg, text) = tile_colors(value);
        let fill = CellStyle::new(text, tile_bg);
        fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', fill);

        let digits = digit_count(value);
        let x = px + self.tile_w.saturating_sub(digits) / 2;
        fb.put_u32(x, mid_y, value, fill.bold());
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        panel: Rect,
        viewport: Viewport,
    ) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let x = panel.x;
        let mut y = panel.y;
        fb.put_str(x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(x, y, snap.moves, value);
        y = y.saturating_add(2);

        fb.put_str(x, y, "BEST TILE", label);
        y = y.saturating_add(1);
        if snap.max_tile == 0 {
            fb.put_str(x, y, "-", value);
        } else {
            fb.put_u32(x, y, snap.max_tile, value);
        }

        // Button sits at BUTTON_ROW; help follows it.
        let dim = CellStyle { dim: true, ..value };
        let mut y = panel.y.saturating_add(BUTTON_ROW + 2);
        for line in HELP_LINES {
            if y >= viewport.height {
                break;
            }
            fb.put_str(x, y, line, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_button(&self, fb: &mut FrameBuffer, rect: Rect, status: GameStatus) {
        let text = button_label(status);
        let style = CellStyle::new(LIGHT_TEXT, Rgb::new(143, 122, 102)).bold();
        fb.fill_rect(rect.x, rect.y, rect.w, rect.h, ' ', style);
        fb.put_char(rect.x, rect.y, '[', style);
        fb.put_char(rect.x + rect.w - 1, rect.y, ']', style);

        let text_w = text.chars().count() as u16;
        let x = rect.x + rect.w.saturating_sub(text_w) / 2;
        fb.put_str(x, rect.y, text, style);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Rect, lines: [&str; 2]) {
        let mid_y = frame.y.saturating_add(frame.h / 2).saturating_sub(1);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
            fb.put_str(x, mid_y.saturating_add(i as u16), text, style);
        }
    }
}

/// Label of the start/restart button for a status.
pub fn button_label(status: GameStatus) -> &'static str {
    if status.is_playing() {
        "Restart"
    } else {
        "Start"
    }
}

/// Background and text colour for a tile value.
fn tile_colors(value: u32) -> (Rgb, Rgb) {
    match value {
        2 => (Rgb::new(238, 228, 218), DARK_TEXT),
        4 => (Rgb::new(237, 224, 200), DARK_TEXT),
        8 => (Rgb::new(242, 177, 121), LIGHT_TEXT),
        16 => (Rgb::new(245, 149, 99), LIGHT_TEXT),
        32 => (Rgb::new(246, 124, 95), LIGHT_TEXT),
        64 => (Rgb::new(246, 94, 59), LIGHT_TEXT),
        128 => (Rgb::new(237, 207, 114), LIGHT_TEXT),
        256 => (Rgb::new(237, 204, 97), LIGHT_TEXT),
        512 => (Rgb::new(237, 200, 80), LIGHT_TEXT),
        1024 => (Rgb::new(237, 197, 63), LIGHT_TEXT),
        2048 => (Rgb::new(237, 194, 46), LIGHT_TEXT),
        _ => (Rgb::new(60, 58, 50), LIGHT_TEXT),
    }
}
