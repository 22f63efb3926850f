//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout, top to bottom: two header rows (level, score, time,
//! pairs), a blank row, the bordered board, and the message line. Overlays
//! for the menu, countdown and banners are drawn centered over the board.

use std::f64::consts::PI;

use crate::core::messages;
use crate::core::{GameSnapshot, TileSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{BoardLayout, Coord, FaceId, Phase};

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

/// Rows above the board: two header rows, a blank and the top border.
const HEADER_ROWS: i32 = 4;
/// Rows below the last tile row: bottom border sits in the gutter, then a
/// blank and the message.
const FOOTER_ROWS: i32 = 2;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const TILE_BACK: Rgb = Rgb::new(50, 70, 140);
const TILE_BACK_FG: Rgb = Rgb::new(90, 110, 190);

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const TITLE: CellStyle = CellStyle::new(Rgb::new(255, 220, 90), Rgb::new(0, 0, 0)).bold();
const HINT: CellStyle = CellStyle::new(Rgb::new(160, 160, 170), Rgb::new(0, 0, 0)).dim();

/// A lightweight terminal renderer for the memory game.
pub struct GameView {
    /// Tile pitch in terminal columns, including a one column gutter.
    tile_w: u16,
    /// Tile pitch in terminal rows, including a one row gutter.
    tile_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 keeps tiles roughly square with typical glyph aspect ratios.
        Self {
            tile_w: 6,
            tile_h: 3,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(2),
            tile_h: tile_h.max(2),
        }
    }

    /// Where a `grid_size` board lands in `viewport`
    ///
    /// The frame loop passes the same layout to the input layer so clicks
    /// resolve against what is on screen.
    pub fn board_layout(&self, viewport: Viewport, grid_size: usize) -> BoardLayout {
        let tile_w = self.tile_w as i32;
        let tile_h = self.tile_h as i32;
        let g = grid_size as i32;

        // Border plus a one column pad on the left.
        let frame_w = tile_w * g + 3;
        let frame_h = HEADER_ROWS + tile_h * g + FOOTER_ROWS;

        BoardLayout {
            margin_x: (viewport.width as i32 - frame_w).max(0) / 2 + 2,
            margin_y: (viewport.height as i32 - frame_h).max(0) / 2 + HEADER_ROWS,
            tile_w,
            tile_h,
            grid_size,
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.board_layout(viewport, snap.grid_size);
        let frame = Frame::of(&layout);

        self.draw_header(fb, snap, &frame);

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w.saturating_sub(2),
            frame.h.saturating_sub(2),
            ' ',
            CellStyle::new(VALUE.fg, BOARD_BG),
        );
        fb.draw_border(frame.x, frame.y, frame.w, frame.h, BORDER);

        if !matches!(snap.phase, Phase::Menu | Phase::Countdown { .. }) {
            for row in 0..snap.grid_size {
                for col in 0..snap.grid_size {
                    let coord = Coord::new(row as i32, col as i32);
                    if let Some(tile) = snap.tile(coord) {
                        let selected = snap.selected == Some(coord);
                        self.draw_tile(fb, &layout, coord, tile, selected);
                    }
                }
            }
        }

        let msg_style = if snap.locked { HINT } else { VALUE };
        fb.put_str_centered(frame.x, frame.w, frame.y + frame.h + 1, &snap.message, msg_style);

        match snap.phase {
            Phase::Menu => self.draw_menu(fb, snap, &frame),
            Phase::Countdown { .. } => self.draw_countdown(fb, snap, &frame),
            Phase::Playing => {}
            Phase::LevelComplete { .. } => self.draw_level_banner(fb, snap, &frame),
            Phase::GameComplete => self.draw_final(fb, snap, &frame),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: &Frame) {
        let left = frame.x + 1;
        let right = frame.x + frame.w.saturating_sub(1);
        let top = frame.y.saturating_sub(3);

        let x = fb.put_str(left, top, "LEVEL ", LABEL);
        fb.put_u32(x, top, snap.level, VALUE);

        let score_w = 6 + digits(snap.score);
        let x = fb.put_str(right.saturating_sub(score_w), top, "SCORE ", LABEL);
        fb.put_u32(x, top, snap.score, VALUE);

        let y = top + 1;
        let x = fb.put_str(left, y, "TIME ", LABEL);
        fb.put_secs(x, y, snap.elapsed_secs, VALUE);

        let pairs_w = 6 + digits(snap.matches_found) + 1 + digits(snap.required_pairs);
        let x = fb.put_str(right.saturating_sub(pairs_w), y, "PAIRS ", LABEL);
        let x = fb.put_u32(x, y, snap.matches_found, VALUE);
        fb.put_char(x, y, '/', VALUE);
        fb.put_u32(x + 1, y, snap.required_pairs, VALUE);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        coord: Coord,
        tile: &TileSnapshot,
        selected: bool,
    ) {
        let (ox, oy) = layout.tile_origin(coord);
        let (ox, oy) = (ox.max(0) as u16, oy.max(0) as u16);
        let inner_w = self.tile_w - 1;
        let inner_h = self.tile_h - 1;

        // Flipping tiles narrow towards the midpoint and widen again.
        let vis_w = if tile.flipping {
            let scale = (PI * tile.progress).cos().abs();
            ((inner_w as f64 * scale).round() as u16).clamp(1, inner_w)
        } else {
            inner_w
        };
        let x = ox + (inner_w - vis_w) / 2;

        if tile.face_up {
            let mut style = CellStyle::new(Rgb::new(255, 255, 255), face_color(tile.face));
            if tile.matched && !tile.flipping {
                style = CellStyle::new(Rgb::new(170, 170, 170), face_color(tile.face).scaled(120));
            }
            if selected {
                style = style.bold();
            }
            fb.fill_rect(x, oy, vis_w, inner_h, ' ', style);
            if vis_w >= 3 {
                fb.put_char(ox + inner_w / 2, oy + (inner_h - 1) / 2, face_glyph(tile.face), style);
            }
        } else {
            let style = CellStyle::new(TILE_BACK_FG, TILE_BACK);
            fb.fill_rect(x, oy, vis_w, inner_h, '░', style);
        }
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: &Frame) {
        let lines = if snap.high_score > 0 { 7 } else { 5 };
        let area = self.draw_panel(fb, frame, lines);
        let mut y = area.y;
        fb.put_str_centered(area.x, area.w, y, &snap.message, TITLE);
        y += 2;
        fb.put_str_centered(area.x, area.w, y, "Enter or click to start", LABEL);
        y += 1;
        fb.put_str_centered(area.x, area.w, y, "click tiles to find pairs", HINT);
        y += 1;
        fb.put_str_centered(area.x, area.w, y, "q to quit", HINT);
        if snap.high_score > 0 {
            y += 2;
            put_label_u32_centered(fb, &area, y, "HIGH SCORE ", snap.high_score);
        }
    }

    fn draw_countdown(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: &Frame) {
        let area = self.draw_panel(fb, frame, 3);
        fb.put_str_centered(area.x, area.w, area.y, "Get ready", LABEL);
        let n = snap.countdown.unwrap_or(0);
        let x = area.x + area.w.saturating_sub(digits(n)) / 2;
        fb.put_u32(x, area.y + 2, n, TITLE);
    }

    fn draw_level_banner(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: &Frame) {
        let area = self.draw_panel(fb, frame, 5);
        fb.put_str_centered(area.x, area.w, area.y, messages::GAME_COMPLETE, TITLE);
        fb.put_str_centered(area.x, area.w, area.y + 1, &snap.message, LABEL);
        put_label_u32_centered(fb, &area, area.y + 3, "SCORE ", snap.score);
        put_label_secs_centered(fb, &area, area.y + 4, "TIME ", snap.elapsed_secs);
    }

    fn draw_final(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: &Frame) {
        let area = self.draw_panel(fb, frame, 8);
        fb.put_str_centered(area.x, area.w, area.y, messages::GAME_COMPLETE, TITLE);
        put_label_u32_centered(fb, &area, area.y + 2, "FINAL SCORE ", snap.score);
        put_label_secs_centered(fb, &area, area.y + 3, "TIME ", snap.elapsed_secs);
        put_label_u32_centered(fb, &area, area.y + 4, "HIGH SCORE ", snap.high_score);
        if let Some(best) = snap.best_time_secs {
            put_label_secs_centered(fb, &area, area.y + 5, "BEST TIME ", best);
        }
        fb.put_str_centered(area.x, area.w, area.y + 7, "Enter or click: play again", LABEL);
    }

    /// Boxed panel with `lines` text rows, centered on the board frame.
    /// Returns the text area.
    fn draw_panel(&self, fb: &mut FrameBuffer, frame: &Frame, lines: u16) -> Frame {
        let w = frame.w.saturating_sub(2).max(28);
        let h = lines + 4;
        let x = (frame.x + frame.w / 2).saturating_sub(w / 2);
        let y = (frame.y + frame.h / 2).saturating_sub(h / 2);

        fb.fill_rect(x, y, w, h, ' ', CellStyle::new(VALUE.fg, Rgb::new(0, 0, 0)));
        fb.draw_border(x, y, w, h, BORDER);
        Frame {
            x: x + 1,
            y: y + 2,
            w: w.saturating_sub(2),
            h: lines,
        }
    }
}

/// Screen rectangle in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl Frame {
    /// Bordered box around the board described by `layout`.
    fn of(layout: &BoardLayout) -> Self {
        Self {
            x: (layout.margin_x - 2).max(0) as u16,
            y: (layout.margin_y - 1).max(0) as u16,
            w: (layout.width() + 3).max(2) as u16,
            h: (layout.height() + 1).max(2) as u16,
        }
    }
}

fn put_label_u32_centered(fb: &mut FrameBuffer, area: &Frame, y: u16, label: &str, value: u32) {
    let w = label.chars().count() as u16 + digits(value);
    let x = fb.put_str(area.x + area.w.saturating_sub(w) / 2, y, label, LABEL);
    fb.put_u32(x, y, value, VALUE);
}

fn put_label_secs_centered(fb: &mut FrameBuffer, area: &Frame, y: u16, label: &str, secs: f64) {
    let w = label.chars().count() as u16 + digits(secs.max(0.0) as u32) + 3;
    let x = fb.put_str(area.x + area.w.saturating_sub(w) / 2, y, label, LABEL);
    fb.put_secs(x, y, secs, VALUE);
}

fn digits(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

const GLYPHS: [char; 16] = [
    '♠', '♥', '♦', '♣', '★', '♪', '✿', '●', '▲', '■', '◆', '☼', '♫', 'Ω', '∞', '§',
];

const COLORS: [Rgb; 16] = [
    Rgb::new(200, 60, 60),
    Rgb::new(220, 120, 40),
    Rgb::new(200, 170, 30),
    Rgb::new(110, 170, 50),
    Rgb::new(40, 150, 90),
    Rgb::new(30, 150, 150),
    Rgb::new(40, 120, 200),
    Rgb::new(90, 90, 210),
    Rgb::new(140, 70, 200),
    Rgb::new(190, 60, 160),
    Rgb::new(200, 80, 110),
    Rgb::new(120, 100, 60),
    Rgb::new(70, 130, 130),
    Rgb::new(150, 150, 60),
    Rgb::new(100, 100, 120),
    Rgb::new(160, 90, 70),
];

/// Glyph printed on a face; faces beyond the table wrap around.
pub fn face_glyph(face: FaceId) -> char {
    GLYPHS[face.index() % GLYPHS.len()]
}

pub fn face_color(face: FaceId) -> Rgb {
    COLORS[face.index() % COLORS.len()]
}
