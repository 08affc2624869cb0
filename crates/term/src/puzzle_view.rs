//! PuzzleView: paints a [`PuzzleSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::PuzzleSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
use crate::view::{
    draw_border, draw_overlay, draw_stat, AnchorY, FieldRect, Viewport, BORDER, FIELD_BG,
    GRID_FG, LABEL,
};

/// Preview box background
const PREVIEW_BG: Rgb = Rgb::new(0x0f, 0x14, 0x24);

/// A lightweight terminal renderer for the falling-block game.
pub struct PuzzleView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for PuzzleView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl PuzzleView {
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

    /// Screen rectangle the board occupies in `viewport`, border included.
    pub fn field_rect(&self, viewport: Viewport) -> FieldRect {
        FieldRect::centered(
            viewport,
            BOARD_WIDTH as u16 * self.cell_w,
            BOARD_HEIGHT as u16 * self.cell_h,
            self.anchor_y,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &PuzzleSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let field = self.field_rect(viewport);
        draw_border(fb, field, BORDER);

        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                match snap.board[y as usize][x as usize] {
                    Some(kind) => self.draw_block(fb, field, x as i8, y as i8, kind),
                    None => self.draw_empty(fb, field, x as i8, y as i8),
                }
            }
        }

        // The active piece is hidden before the first start.
        if snap.phase != Phase::Idle {
            for (x, y) in snap.active.positions() {
                self.draw_block(fb, field, x, y, snap.active.kind);
            }
        }

        self.draw_side_panel(fb, snap, viewport, field);

        match snap.phase {
            Phase::Idle => draw_overlay(fb, field, "PRESS ENTER", Some("to start")),
            Phase::Paused => draw_overlay(fb, field, "PAUSED", Some("P to resume")),
            Phase::GameOver => draw_overlay(fb, field, "GAME OVER", Some("ENTER or R")),
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &PuzzleSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Screen position of a board cell's top-left corner; `None` off the board.
    fn cell_origin(&self, field: FieldRect, x: i8, y: i8) -> Option<(u16, u16)> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((
            field.x + 1 + x as u16 * self.cell_w,
            field.y + 1 + y as u16 * self.cell_h,
        ))
    }

    fn draw_block(&self, fb: &mut FrameBuffer, field: FieldRect, x: i8, y: i8, kind: PieceKind) {
        if let Some((px, py)) = self.cell_origin(field, x, y) {
            let style = CellStyle::new(kind.rgb().into(), FIELD_BG).bold();
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, field: FieldRect, x: i8, y: i8) {
        if let Some((px, py)) = self.cell_origin(field, x, y) {
            let style = CellStyle::new(GRID_FG, FIELD_BG).dim();
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
            fb.put_char(px, py, '·', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &PuzzleSnapshot,
        viewport: Viewport,
        field: FieldRect,
    ) {
        let panel_x = field.panel_x();
        if panel_x >= viewport.width || viewport.width - panel_x < self.panel_width() {
            return;
        }

        let mut y = field.y;
        y = draw_stat(fb, panel_x, y, "SCORE", snap.score);
        y = draw_stat(fb, panel_x, y, "LEVEL", snap.level);
        y = draw_stat(fb, panel_x, y, "LINES", snap.lines);

        fb.put_str(panel_x, y, "NEXT", LABEL);
        self.draw_preview(fb, snap, panel_x, y.saturating_add(1));
    }

    /// Columns the side panel needs: the labels, or the 4-cell preview box.
    fn panel_width(&self) -> u16 {
        (4 * self.cell_w).max(10)
    }

    /// Next piece's base shape, trimmed to its bounding box.
    fn draw_preview(&self, fb: &mut FrameBuffer, snap: &PuzzleSnapshot, x: u16, y: u16) {
        let kind = snap.next;
        let shape = snap.next_shape();
        let min_x = shape.iter().map(|c| c.0).min().unwrap_or(0);
        let min_y = shape.iter().map(|c| c.1).min().unwrap_or(0);

        // 4x2 box fits every shape after trimming.
        let bg = CellStyle::new(PREVIEW_BG, PREVIEW_BG);
        fb.fill_rect(x, y, 4 * self.cell_w, 2 * self.cell_h, ' ', bg);

        let style = CellStyle::new(kind.rgb().into(), PREVIEW_BG).bold();
        for &(cx, cy) in shape.iter() {
            let px = x + (cx - min_x) as u16 * self.cell_w;
            let py = y + (cy - min_y) as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }
}
