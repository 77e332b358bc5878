//! GameView: maps a [`Driver`] session into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Piece, Shape};
use crate::host::{Driver, Palette, Rgb};
use crate::term::fb::{CellStyle, FrameBuffer};
use crate::types::EMPTY_CELL;

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

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_W: u16 = 28;
/// Prototype entries per row in the blocks panel
const PROTO_COLS: u16 = 3;

/// Board cell width in terminal columns; 2 compensates for glyph aspect ratio.
const CELL_W: u16 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn render(&self, driver: &Driver, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(driver, viewport, &mut fb);
        fb
    }

    pub fn render_into(&self, driver: &Driver, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let snap = driver.snapshot();
        let palette = driver.palette();
        let cols = u16::try_from(snap.board.cols()).unwrap_or(u16::MAX);
        let rows = u16::try_from(snap.board.rows()).unwrap_or(u16::MAX);
        let frame_w = cols.saturating_mul(CELL_W).saturating_add(2);
        let frame_h = rows.saturating_add(2);
        let blocks_w = prototype_item_width(&snap).saturating_mul(PROTO_COLS);
        let total_w = frame_w
            .saturating_add(2 + PANEL_W)
            .saturating_add(blocks_w);

        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);

        draw_border(fb, start_x, start_y, frame_w, frame_h);
        self.draw_board(fb, &snap, palette, start_x + 1, start_y + 1);
        self.draw_side_panel(fb, driver, &snap, panel_x, start_y);
        self.draw_prototype_panel(fb, &snap, palette, panel_x.saturating_add(PANEL_W), start_y);

        let mid_y = start_y.saturating_add(frame_h / 2);
        if snap.game_over {
            draw_centered(fb, start_x, frame_w, mid_y, "GAME OVER");
            draw_centered(fb, start_x, frame_w, mid_y.saturating_add(1), "R to restart");
        } else if driver.paused() {
            draw_centered(fb, start_x, frame_w, mid_y, "PAUSED");
        } else if let Some(level) = driver.notice_level() {
            draw_centered(fb, start_x, frame_w, start_y + 2, &format!("LEVEL {}", level));
        }
    }

    fn draw_board(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        palette: &Palette,
        origin_x: u16,
        origin_y: u16,
    ) {
        let empty = CellStyle::fg(Rgb::new(90, 90, 100)).on(BOARD_BG).dim();
        for (y, row) in snap.board.iter_rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                let (px, py) = cell_origin(origin_x, origin_y, x, y);
                if cell == EMPTY_CELL {
                    fb.put_str(px, py, " ·", empty);
                } else {
                    fb.put_str(px, py, "██", CellStyle::fg(palette.color(cell)).on(BOARD_BG));
                }
            }
        }

        let visible = |piece: &Piece| {
            piece
                .cells()
                .filter(|&(x, y)| x >= 0 && y >= 0 && (y as usize) < snap.board.rows())
                .map(|(x, y)| cell_origin(origin_x, origin_y, x as usize, y as usize))
                .collect::<Vec<_>>()
        };

        if let Some(ghost) = &snap.ghost {
            let style = CellStyle::fg(palette.color(ghost.kind)).on(BOARD_BG).dim();
            for (px, py) in visible(ghost) {
                fb.put_str(px, py, "░░", style);
            }
        }
        if let Some(active) = &snap.active {
            let style = CellStyle::fg(palette.color(active.kind)).on(BOARD_BG).bold();
            for (px, py) in visible(active) {
                fb.put_str(px, py, "██", style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        driver: &Driver,
        snap: &GameSnapshot,
        panel_x: u16,
        start_y: u16,
    ) {
        let label = CellStyle::default().bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));
        let palette = driver.palette();

        let mut y = start_y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, &n.to_string(), value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        if let Some(next) = &snap.next {
            draw_mini(fb, panel_x, y, &next.shape, palette.color(next.kind));
        }
        y += mini_height(snap) + 1;

        fb.put_str(panel_x, y, "HOLD", label);
        y += 1;
        match &snap.hold {
            Some(held) => draw_mini(fb, panel_x, y, &held.shape, palette.color(held.kind)),
            None => fb.put_str(panel_x, y, "-", value),
        }
        y += mini_height(snap) + 1;

        let help = CellStyle::fg(Rgb::new(140, 140, 150));
        let keys = &driver.game().config().keys;
        for line in [
            format!("{}/{} move", keys.left, keys.right),
            format!("{} rotate", keys.rotate),
            format!("{} soft drop", keys.soft_drop),
            format!("{} hard drop", keys.hard_drop),
            format!("{} hold", keys.hold),
            "Escape pause, q quit".to_string(),
        ] {
            fb.put_str(panel_x, y, &line, help);
            y += 1;
        }
    }

    /// Every prototype of this game, labeled `#id` in its own color.
    fn draw_prototype_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        palette: &Palette,
        x: u16,
        y: u16,
    ) {
        fb.put_str(x, y, "BLOCKS", CellStyle::default().bold());
        let item_w = prototype_item_width(snap);
        let item_h = mini_height(snap).saturating_add(2);
        for (i, proto) in snap.prototypes.iter().enumerate() {
            let i = u16::try_from(i).unwrap_or(u16::MAX);
            let ix = x.saturating_add((i % PROTO_COLS).saturating_mul(item_w));
            let iy = y
                .saturating_add(1)
                .saturating_add((i / PROTO_COLS).saturating_mul(item_h));
            let color = palette.color(proto.kind);
            fb.put_str(ix, iy, &format!("#{}", proto.kind), CellStyle::fg(color));
            draw_mini(fb, ix, iy.saturating_add(1), &proto.shape, color);
        }
    }
}

/// Terminal position of board cell `(x, y)`.
fn cell_origin(origin_x: u16, origin_y: u16, x: usize, y: usize) -> (u16, u16) {
    let x = u16::try_from(x).unwrap_or(u16::MAX);
    let y = u16::try_from(y).unwrap_or(u16::MAX);
    (
        origin_x.saturating_add(x.saturating_mul(CELL_W)),
        origin_y.saturating_add(y),
    )
}

/// Columns taken by one prototype entry, including its gap.
fn prototype_item_width(snap: &GameSnapshot) -> u16 {
    mini_height(snap).saturating_mul(CELL_W).max(3).saturating_add(2)
}

/// Rows reserved for a preview: the largest prototype box.
fn mini_height(snap: &GameSnapshot) -> u16 {
    snap.prototypes
        .iter()
        .map(|p| p.shape.size() as u16)
        .max()
        .unwrap_or(1)
}

fn draw_mini(fb: &mut FrameBuffer, x: u16, y: u16, shape: &Shape, color: Rgb) {
    for (r, c) in shape.filled() {
        let (px, py) = cell_origin(x, y, c, r);
        fb.put_str(px, py, "██", CellStyle::fg(color));
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    let style = CellStyle::fg(Rgb::new(200, 200, 200));
    let right = x.saturating_add(w).saturating_sub(1);
    let bottom = y.saturating_add(h).saturating_sub(1);
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for dx in x + 1..right {
        fb.put_char(dx, y, '─', style);
        fb.put_char(dx, bottom, '─', style);
    }
    for dy in y + 1..bottom {
        fb.put_char(x, dy, '│', style);
        fb.put_char(right, dy, '│', style);
    }
}

fn draw_centered(fb: &mut FrameBuffer, start_x: u16, frame_w: u16, y: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
    fb.put_str(x, y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::types::GameAction;

    fn screen(driver: &Driver) -> String {
        let fb = GameView.render(driver, Viewport::new(80, 30));
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_frame_and_panel() {
        let driver = Driver::new(GameConfig::default(), Some(1));
        let text = screen(&driver);
        assert!(text.contains('┌'));
        assert!(text.contains("SCORE"));
        assert!(text.contains("NEXT"));
        assert!(text.contains("HOLD"));
        assert!(text.contains("██"));
    }

    #[test]
    fn test_pause_banner() {
        let mut driver = Driver::new(GameConfig::default(), Some(1));
        driver.handle(GameAction::TogglePause);
        assert!(screen(&driver).contains("PAUSED"));
    }

    #[test]
    fn test_game_over_banner() {
        let mut driver = Driver::new(GameConfig::default(), Some(1));
        for _ in 0..200 {
            if driver.game().game_over() {
                break;
            }
            driver.handle(GameAction::HardDrop);
        }
        assert!(screen(&driver).contains("GAME OVER"));
    }

    #[test]
    fn test_blocks_panel_lists_every_prototype() {
        let driver = Driver::new(GameConfig::default(), Some(1));
        let fb = GameView.render(&driver, Viewport::new(120, 40));
        let text = (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("BLOCKS"));
        for proto in driver.game().prototypes() {
            let label = format!("#{}", proto.kind);
            assert!(
                text.lines()
                    .any(|line| line.split_whitespace().any(|word| word == label)),
                "missing {}",
                label
            );
        }
    }

    #[test]
    fn test_oversized_board_does_not_overflow() {
        let config = GameConfig {
            cols: 40_000,
            rows: 10,
            ..GameConfig::default()
        };
        let driver = Driver::new(config, Some(1));
        let fb = GameView.render(&driver, Viewport::new(80, 30));
        assert_eq!(fb.width(), 80);
        assert_eq!(fb.height(), 30);
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let driver = Driver::new(GameConfig::default(), Some(1));
        let fb = GameView.render(&driver, Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}
