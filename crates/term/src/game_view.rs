//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The 400x600 world is projected onto a block of cells that keeps the
//! world's aspect ratio, assuming terminal glyphs are about twice as tall
//! as they are wide.

use crate::core::{GameSnapshot, Rect};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::sprites::{Sprite, SpriteSheet};
use crate::types::{Screen, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Smallest world projection worth drawing.
pub const MIN_COLS: u16 = 20;
pub const MIN_ROWS: u16 = 15;

/// Opacity of the game-over overlay (0-255).
const OVERLAY_ALPHA: u8 = 128;

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

/// Placement of the world inside the viewport, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// Top-left cell of the world area (inside the border).
    pub x: u16,
    pub y: u16,
    pub cols: u16,
    pub rows: u16,
}

impl Projection {
    /// Largest aspect-correct projection that fits with a one-cell border,
    /// centred. `None` when the viewport is too small.
    pub fn fit(viewport: Viewport) -> Option<Self> {
        let avail_w = viewport.width.saturating_sub(2) as u32;
        let avail_h = viewport.height.saturating_sub(2) as u32;

        // 400:600 world with 1:2 cells gives 4:3 columns to rows.
        let cols = avail_w.min(avail_h * 4 / 3);
        let rows = cols * 3 / 4;
        if cols < MIN_COLS as u32 || rows < MIN_ROWS as u32 {
            return None;
        }

        let cols = cols as u16;
        let rows = rows as u16;
        Some(Self {
            x: (viewport.width - cols - 2) / 2 + 1,
            y: (viewport.height - rows - 2) / 2 + 1,
            cols,
            rows,
        })
    }

    fn unit_x(&self) -> f32 {
        SCREEN_WIDTH / self.cols as f32
    }

    fn unit_y(&self) -> f32 {
        SCREEN_HEIGHT / self.rows as f32
    }

    /// Column holding world x, clamped to the world area.
    pub fn col(&self, wx: f32) -> u16 {
        let c = (wx / self.unit_x()).floor().clamp(0.0, (self.cols - 1) as f32);
        self.x + c as u16
    }

    /// Row holding world y, clamped to the world area.
    pub fn row(&self, wy: f32) -> u16 {
        let r = (wy / self.unit_y()).floor().clamp(0.0, (self.rows - 1) as f32);
        self.y + r as u16
    }

    /// Cells touched by a world rectangle as `(col, row, w, h)` in absolute
    /// cell coordinates, clipped to the world area.
    pub fn cells_of(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        let (cx, cw) = span(rect.x, rect.right(), self.unit_x(), self.cols)?;
        let (cy, ch) = span(rect.y, rect.bottom(), self.unit_y(), self.rows)?;
        Some((self.x + cx, self.y + cy, cw, ch))
    }

    /// World coordinates of the centre of an absolute cell.
    fn center_of(&self, col: u16, row: u16) -> (f32, f32) {
        (
            ((col - self.x) as f32 + 0.5) * self.unit_x(),
            ((row - self.y) as f32 + 0.5) * self.unit_y(),
        )
    }
}

fn span(lo: f32, hi: f32, unit: f32, cells: u16) -> Option<(u16, u16)> {
    if hi <= lo {
        return None;
    }
    let a = (lo / unit).floor().max(0.0);
    let b = (hi / unit).ceil().min(cells as f32);
    if b <= a {
        return None;
    }
    Some((a as u16, (b - a) as u16))
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    sprites: SpriteSheet,
}

impl GameView {
    pub fn new(sprites: SpriteSheet) -> Self {
        Self { sprites }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let Some(p) = Projection::fit(viewport) else {
            self.draw_too_small(fb, viewport);
            return;
        };

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::BLACK,
            bold: false,
            dim: false,
        };
        draw_border(fb, p.x - 1, p.y - 1, p.cols + 2, p.rows + 2, border);
        self.draw_sky(fb, &p);

        match snap.screen {
            Screen::Home => self.draw_home(fb, &p),
            Screen::Playing => self.draw_playfield(fb, &p, snap),
            Screen::Over => {
                self.draw_playfield(fb, &p, snap);
                self.draw_game_over(fb, &p, snap);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_sky(&self, fb: &mut FrameBuffer, p: &Projection) {
        for r in 0..p.rows {
            let t = if p.rows > 1 {
                r as f32 / (p.rows - 1) as f32
            } else {
                0.0
            };
            let style = CellStyle::solid(self.sprites.sky(t));
            fb.fill_rect(p.x, p.y + r, p.cols, 1, ' ', style);
        }
    }

    fn draw_home(&self, fb: &mut FrameBuffer, p: &Projection) {
        let mid = p.x + p.cols / 2;
        fb.print_centered(mid, p.row(SCREEN_HEIGHT / 3.0), "FLAPPY BIRD", Rgb::BLACK, true);
        fb.print_centered(
            mid,
            p.row(SCREEN_HEIGHT / 2.0),
            "Press SPACE to Start",
            Rgb::BLACK,
            false,
        );

        // Double-size bird centred under the prompt.
        let size = 60.0;
        let cy = SCREEN_HEIGHT / 1.5;
        let bird = Rect::new(SCREEN_WIDTH / 2.0 - size / 2.0, cy - size / 2.0, size, size);
        blit(fb, p, &bird, &self.sprites.bird, false);

        fb.print_centered(
            mid,
            p.row(SCREEN_HEIGHT - 30.0),
            "Q / Esc to quit",
            Rgb::new(60, 60, 60),
            false,
        );
    }

    fn draw_playfield(&self, fb: &mut FrameBuffer, p: &Projection, snap: &GameSnapshot) {
        for o in &snap.obstacles {
            self.draw_pipe(fb, p, &o.top, true);
            self.draw_pipe(fb, p, &o.bottom, false);
        }

        blit(fb, p, &snap.bird, &self.sprites.bird, false);

        let x = p.col(10.0);
        let y = p.row(10.0);
        fb.print_over(x, y, "Score: ", Rgb::BLACK, true);
        fb.print_u32_over(x + 7, y, snap.score, Rgb::BLACK, true);
    }

    /// Pipe body scaled to the rectangle, with the lip on the end facing the
    /// gap (the top pipe is drawn flipped).
    fn draw_pipe(&self, fb: &mut FrameBuffer, p: &Projection, rect: &Rect, flipped: bool) {
        let Some((cx, cy, cw, ch)) = p.cells_of(rect) else {
            return;
        };
        blit(fb, p, rect, &self.sprites.pipe_body, flipped);

        if ch >= 2 {
            let lip_row = if flipped { cy + ch - 1 } else { cy };
            for col in cx..cx + cw {
                let (wx, _) = p.center_of(col, lip_row);
                let u = (wx - rect.x) / rect.w;
                if let Some(cell) = self.sprites.pipe_cap.sample(u, 0.5) {
                    fb.set(col, lip_row, cell);
                }
            }
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, p: &Projection, snap: &GameSnapshot) {
        fb.shade_rect(p.x, p.y, p.cols, p.rows, Rgb::BLACK, OVERLAY_ALPHA);

        let mid = p.x + p.cols / 2;
        fb.print_centered(mid, p.row(SCREEN_HEIGHT / 3.0), "GAME OVER", Rgb::WHITE, true);

        let label = "Final Score: ";
        let mut digits = [0u8; 10];
        let score = crate::fb::format_u32(snap.score, &mut digits);
        let w = (label.len() + score.len()) as u16;
        let x = mid.saturating_sub(w / 2);
        let y = p.row(SCREEN_HEIGHT / 2.0);
        fb.print_over(x, y, label, Rgb::WHITE, false);
        fb.print_over(x + label.len() as u16, y, score, Rgb::WHITE, false);

        fb.print_centered(
            mid,
            p.row(SCREEN_HEIGHT / 1.5),
            "Press R to Restart",
            Rgb::WHITE,
            false,
        );
        fb.print_centered(
            mid,
            p.row(SCREEN_HEIGHT / 1.3),
            "Press H for Home Screen",
            Rgb::WHITE,
            false,
        );
    }

    fn draw_too_small(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let style = CellStyle {
            fg: Rgb::new(255, 200, 80),
            bg: Rgb::BLACK,
            bold: true,
            dim: false,
        };
        let msg = "terminal too small";
        let w = msg.len() as u16;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height / 2;
        fb.put_str(x, y, msg, style);
    }
}

/// Scale `sprite` onto the cells covered by `rect`, skipping transparent
/// pixels. `flip_v` mirrors the sprite vertically.
fn blit(fb: &mut FrameBuffer, p: &Projection, rect: &Rect, sprite: &Sprite, flip_v: bool) {
    let Some((cx, cy, cw, ch)) = p.cells_of(rect) else {
        return;
    };
    for row in cy..cy + ch {
        for col in cx..cx + cw {
            let (wx, wy) = p.center_of(col, row);
            let u = (wx - rect.x) / rect.w;
            let mut v = (wy - rect.y) / rect.h;
            if flip_v {
                v = 1.0 - v;
            }
            if let Some(cell) = sprite.sample(u, v) {
                fb.set(col, row, cell);
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
