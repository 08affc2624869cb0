//! Layout and drawing helpers shared by both game views.
//!
//! Both views draw a bordered play field centred in the viewport, a side panel
//! to its right, and an optional overlay message over the field.

use crate::fb::{CellStyle, FrameBuffer, Rgb};

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

/// Play-field background
pub const FIELD_BG: Rgb = Rgb::new(0x12, 0x16, 0x24);
/// Grid dots on empty cells
pub const GRID_FG: Rgb = Rgb::new(0x1b, 0x22, 0x34);
/// Overlay text
pub const OVERLAY_FG: Rgb = Rgb::new(0xd9, 0xe3, 0xf0);

pub(crate) const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
pub(crate) const LABEL: CellStyle =
    CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
pub(crate) const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
pub(crate) const HINT: CellStyle =
    CellStyle::new(Rgb::new(150, 150, 160), Rgb::new(0, 0, 0)).dim();

/// Screen rectangle of a bordered field, border included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl FieldRect {
    /// Centre a field of `inner_w` x `inner_h` (plus border) in the viewport.
    pub fn centered(viewport: Viewport, inner_w: u16, inner_h: u16, anchor_y: AnchorY) -> Self {
        let w = inner_w + 2;
        let h = inner_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Self { x, y, w, h }
    }

    /// First column right of the field where a side panel may start.
    pub fn panel_x(&self) -> u16 {
        self.x.saturating_add(self.w).saturating_add(2)
    }
}

pub(crate) fn draw_border(fb: &mut FrameBuffer, r: FieldRect, style: CellStyle) {
    if r.w < 2 || r.h < 2 {
        return;
    }
    let (x, y, w, h) = (r.x, r.y, r.w, r.h);

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

/// Centre up to two lines of text over the field.
pub(crate) fn draw_overlay(fb: &mut FrameBuffer, r: FieldRect, title: &str, hint: Option<&str>) {
    let style = CellStyle::new(OVERLAY_FG, Rgb::new(0, 0, 0)).bold();
    let mid_y = r.y.saturating_add(r.h / 2);

    let put_centered = |fb: &mut FrameBuffer, y: u16, text: &str, style: CellStyle| {
        let text_w = text.chars().count() as u16;
        let x = r.x.saturating_add(r.w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    };

    put_centered(fb, mid_y, title, style);
    if let Some(hint) = hint {
        put_centered(fb, mid_y.saturating_add(1), hint, HINT);
    }
}

/// Label on one row, number on the next, blank row after. Returns the next free row.
pub(crate) fn draw_stat(fb: &mut FrameBuffer, x: u16, y: u16, label: &str, value: u32) -> u16 {
    fb.put_str(x, y, label, LABEL);
    fb.put_u32(x, y.saturating_add(1), value, VALUE);
    y.saturating_add(3)
}
