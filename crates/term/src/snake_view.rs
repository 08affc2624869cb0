//! SnakeView: paints a [`SnakeSnapshot`] into a terminal framebuffer.

use crate::core::{SnakeOutcome, SnakeSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, Point, SNAKE_GRID};
use crate::view::{
    draw_border, draw_overlay, draw_stat, AnchorY, FieldRect, Viewport, BORDER, FIELD_BG,
    GRID_FG, LABEL, VALUE,
};

const HEAD: Rgb = Rgb::new(0x2e, 0xcc, 0x71);
const BODY: Rgb = Rgb::new(0x27, 0xae, 0x60);
const FOOD: Rgb = Rgb::new(0xe7, 0x4c, 0x3c);

pub struct SnakeView {
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for SnakeView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl SnakeView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn field_rect(&self, viewport: Viewport) -> FieldRect {
        let side = SNAKE_GRID as u16;
        FieldRect::centered(viewport, side * self.cell_w, side, self.anchor_y)
    }

    pub fn render_into(&self, snap: &SnakeSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let field = self.field_rect(viewport);
        draw_border(fb, field, BORDER);

        let grid = CellStyle::new(GRID_FG, FIELD_BG).dim();
        fb.fill_rect(field.x + 1, field.y + 1, field.w - 2, field.h - 2, ' ', grid);
        for y in 0..SNAKE_GRID {
            for x in 0..SNAKE_GRID {
                self.put_cell(fb, field, Point::new(x, y), '·', grid);
            }
        }

        if let Some(food) = snap.food {
            self.put_cell(fb, field, food, '●', CellStyle::new(FOOD, FIELD_BG).bold());
        }

        // Draw tail to head so the head wins on overlap.
        for (i, seg) in snap.segments.iter().enumerate().rev() {
            let color = if i == 0 { HEAD } else { BODY };
            self.put_cell(fb, field, *seg, '█', CellStyle::new(color, FIELD_BG));
        }

        self.draw_side_panel(fb, snap, viewport, field);

        match (snap.phase, snap.outcome) {
            (Phase::Idle, _) => draw_overlay(fb, field, "PRESS ENTER", Some("to start")),
            (Phase::Paused, _) => draw_overlay(fb, field, "PAUSED", Some("SPACE to resume")),
            (Phase::GameOver, Some(SnakeOutcome::BoardFilled)) => {
                draw_overlay(fb, field, "BOARD FILLED", Some("ENTER or R"))
            }
            (Phase::GameOver, _) => draw_overlay(fb, field, "GAME OVER", Some("ENTER or R")),
            (Phase::Running, _) => {}
        }
    }

    pub fn render(&self, snap: &SnakeSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn put_cell(&self, fb: &mut FrameBuffer, field: FieldRect, p: Point, ch: char, style: CellStyle) {
        if !p.in_square(SNAKE_GRID) {
            return;
        }
        let px = field.x + 1 + p.x as u16 * self.cell_w;
        let py = field.y + 1 + p.y as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SnakeSnapshot,
        viewport: Viewport,
        field: FieldRect,
    ) {
        let panel_x = field.panel_x();
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let mut y = field.y;
        y = draw_stat(fb, panel_x, y, "SCORE", snap.score);
        y = draw_stat(fb, panel_x, y, "HIGH", snap.high_score);

        fb.put_str(panel_x, y, "SPEED", LABEL);
        let digits = fb.put_u32(panel_x, y.saturating_add(1), snap.speed, VALUE);
        fb.put_char(panel_x + digits, y.saturating_add(1), 'x', VALUE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn snapshot(phase: Phase) -> SnakeSnapshot {
        SnakeSnapshot {
            segments: vec![Point::new(2, 0), Point::new(1, 0), Point::new(0, 0)],
            food: Some(Point::new(5, 0)),
            direction: Direction::Right,
            phase,
            outcome: None,
            score: 12,
            high_score: 30,
            speed: 5,
        }
    }

    #[test]
    fn draws_snake_food_and_hud() {
        let view = SnakeView::default().with_anchor_y(AnchorY::Top);
        let vp = Viewport::new(70, 24);
        let fb = view.render(&snapshot(Phase::Running), vp);
        let field = view.field_rect(vp);

        let row = fb.row_text(field.y + 1);
        assert!(row.contains("██████"));
        assert!(row.contains("●●"));
        assert_eq!(fb.get(field.x + 1 + 4, field.y + 1).map(|c| c.style.fg), Some(HEAD));
        assert_eq!(fb.get(field.x + 1, field.y + 1).map(|c| c.style.fg), Some(BODY));

        assert!(fb.contains_text("SCORE"));
        assert!(fb.contains_text("30"));
        assert!(fb.contains_text("5x"));
        assert!(!fb.contains_text("PAUSED"));
    }

    #[test]
    fn overlays_follow_phase() {
        let view = SnakeView::default();
        let vp = Viewport::new(60, 24);
        assert!(view.render(&snapshot(Phase::Paused), vp).contains_text("PAUSED"));
        assert!(view.render(&snapshot(Phase::Idle), vp).contains_text("PRESS ENTER"));

        let mut over = snapshot(Phase::GameOver);
        over.outcome = Some(SnakeOutcome::WallCollision);
        assert!(view.render(&over, vp).contains_text("GAME OVER"));
        over.outcome = Some(SnakeOutcome::BoardFilled);
        assert!(view.render(&over, vp).contains_text("BOARD FILLED"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = SnakeView::default();
        let fb = view.render(&snapshot(Phase::Running), Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}
