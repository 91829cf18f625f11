//! Built-in sprite sheet.
//!
//! Sprites are tiny palette-indexed character art. At draw time they are
//! scaled (nearest neighbour) onto whatever cell span an entity covers, so
//! the same art works at every terminal size.

use anyhow::{bail, Result};

use crate::fb::{Cell, CellStyle, Rgb};

/// Bird, facing right. `.` is transparent.
const BIRD_ART: &str = "\
..YYYW.
YYYYYkO
.wYYY..";

/// One row of pipe body, left to right: highlight, body, shadow.
const PIPE_BODY_ART: &str = "LGGGGD";

/// Pipe lip drawn at the end facing the gap.
const PIPE_CAP_ART: &str = "CCCCCC";

const PALETTE: &[(char, Rgb)] = &[
    ('Y', Rgb::new(250, 210, 40)),
    ('w', Rgb::new(230, 150, 30)),
    ('W', Rgb::new(255, 255, 255)),
    ('k', Rgb::new(20, 20, 20)),
    ('O', Rgb::new(240, 110, 30)),
    ('L', Rgb::new(110, 200, 90)),
    ('G', Rgb::new(0, 128, 0)),
    ('D', Rgb::new(0, 90, 0)),
    ('C', Rgb::new(30, 150, 30)),
];

/// Sky gradient, top to bottom.
pub const SKY_TOP: Rgb = Rgb::new(135, 206, 235);
pub const SKY_BOTTOM: Rgb = Rgb::new(205, 236, 248);

/// Palette-indexed character art with transparency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u16,
    height: u16,
    cells: Vec<Option<Cell>>,
}

impl Sprite {
    /// Parse art rows separated by newlines. Every row must have the same
    /// width and every non-`.` character must be in `palette`.
    pub fn parse(art: &str, palette: &[(char, Rgb)]) -> Result<Self> {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0u16;

        for (row, line) in art.lines().enumerate() {
            let len = line.chars().count();
            match width {
                None => width = Some(len),
                Some(w) if w != len => {
                    bail!("sprite row {row} is {len} wide, expected {w}");
                }
                Some(_) => {}
            }
            for ch in line.chars() {
                if ch == '.' {
                    cells.push(None);
                    continue;
                }
                let Some(&(_, rgb)) = palette.iter().find(|(k, _)| *k == ch) else {
                    bail!("sprite row {row} uses unknown palette key {ch:?}");
                };
                cells.push(Some(CellStyle::solid(rgb).into_cell(' ')));
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 || height == 0 {
            bail!("sprite art is empty");
        }

        Ok(Self {
            width: width as u16,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Nearest-neighbour lookup; `u` and `v` are normalized to `[0, 1)`.
    pub fn sample(&self, u: f32, v: f32) -> Option<Cell> {
        let x = ((u.clamp(0.0, 0.999) * self.width as f32) as usize).min(self.width as usize - 1);
        let y = ((v.clamp(0.0, 0.999) * self.height as f32) as usize).min(self.height as usize - 1);
        self.cells[y * self.width as usize + x]
    }
}

/// All game art, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSheet {
    pub bird: Sprite,
    pub pipe_body: Sprite,
    pub pipe_cap: Sprite,
    pub sky_top: Rgb,
    pub sky_bottom: Rgb,
}

impl SpriteSheet {
    pub fn load() -> Result<Self> {
        Ok(Self {
            bird: Sprite::parse(BIRD_ART, PALETTE)?,
            pipe_body: Sprite::parse(PIPE_BODY_ART, PALETTE)?,
            pipe_cap: Sprite::parse(PIPE_CAP_ART, PALETTE)?,
            sky_top: SKY_TOP,
            sky_bottom: SKY_BOTTOM,
        })
    }

    /// Background colour for a row, `t` = 0 at the top of the world and 1
    /// at the bottom.
    pub fn sky(&self, t: f32) -> Rgb {
        self.sky_top.lerp(self.sky_bottom, t)
    }
}
