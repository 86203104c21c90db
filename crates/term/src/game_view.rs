//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-tested against framebuffer contents.

use crate::core::{base_shape, GameSnapshot};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::PieceKind;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const PANEL_MIN_W: u16 = 12;

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

/// Placement of the bordered board frame in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl FrameRect {
    /// Terminal position of the top-left character of board cell (cx, cy)
    fn cell_origin(&self, view: &GameView, cx: u16, cy: u16) -> (u16, u16) {
        (
            self.x + 1 + cx * view.cell_w,
            self.y + 1 + cy * view.cell_h,
        )
    }
}

/// Renders the board, a side panel and overlays.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    show_ghost: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up typical terminal glyphs.
        Self {
            cell_w: 2,
            cell_h: 1,
            show_ghost: true,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            show_ghost: true,
        }
    }

    pub fn with_ghost(mut self, show_ghost: bool) -> Self {
        self.show_ghost = show_ghost;
        self
    }

    /// Where the board frame lands for `snap` in `viewport`.
    ///
    /// The frame and panel are centred together horizontally when the panel
    /// fits, and the frame is centred vertically.
    pub fn frame_rect(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameRect {
        let w = (snap.width as u16) * self.cell_w + 2;
        let h = (snap.height as u16) * self.cell_h + 2;

        let with_panel = w + 2 + PANEL_MIN_W;
        let x = if viewport.width >= with_panel {
            (viewport.width - with_panel) / 2
        } else {
            viewport.width.saturating_sub(w) / 2
        };
        let y = viewport.height.saturating_sub(h) / 2;

        FrameRect { x, y, w, h }
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    ///
    /// Reuse one framebuffer across frames; this path does not allocate
    /// unless the viewport grew.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let frame = self.frame_rect(snap, viewport);
        let border = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);

        fb.fill(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            Style::new(BOARD_BG, BOARD_BG).glyph(' '),
        );
        fb.outline(frame.x, frame.y, frame.w, frame.h, border);

        for y in 0..snap.height {
            for x in 0..snap.width {
                match snap.cell(x as i8, y as i8) {
                    Some(kind) => self.draw_block(fb, frame, x as i8, y as i8, block_style(kind)),
                    None => self.draw_empty(fb, frame, x as u16, y as u16),
                }
            }
        }

        if self.show_ghost && !snap.game_over {
            if let Some(ghost) = snap.ghost {
                let style = Style::new(Rgb::new(140, 140, 140), BOARD_BG).dim();
                for (x, y) in ghost {
                    self.draw_cell_char(fb, frame, snap, x, y, '░', style);
                }
            }
        }

        if let Some(active) = snap.active {
            let style = block_style(active.kind);
            for (x, y) in active.cells {
                self.draw_cell_char(fb, frame, snap, x, y, '█', style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            draw_overlay(fb, frame, "GAME OVER", "r: restart");
        } else if snap.paused {
            draw_overlay(fb, frame, "PAUSED", "p: resume");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, frame: FrameRect, x: u16, y: u16) {
        let (px, py) = frame.cell_origin(self, x, y);
        let style = Style::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        fb.fill(px, py, self.cell_w, self.cell_h, style.glyph(' '));
        fb.set(px, py, style.glyph('·'));
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: FrameRect, x: i8, y: i8, style: Style) {
        let (px, py) = frame.cell_origin(self, x as u16, y as u16);
        fb.fill(px, py, self.cell_w, self.cell_h, style.glyph('█'));
    }

    /// Draw a piece cell, skipping anything above or outside the board.
    fn draw_cell_char(
        &self,
        fb: &mut FrameBuffer,
        frame: FrameRect,
        snap: &GameSnapshot,
        x: i8,
        y: i8,
        ch: char,
        style: Style,
    ) {
        if x < 0 || y < 0 || x >= snap.width as i8 || y >= snap.height as i8 {
            return;
        }
        let (px, py) = frame.cell_origin(self, x as u16, y as u16);
        fb.fill(px, py, self.cell_w, self.cell_h, style.glyph(ch));
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: FrameRect,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = frame.y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.text(panel_x, y, name, label);
            fb.number(panel_x, y + 1, n, value);
            y += 3;
        }

        fb.text(panel_x, y, "NEXT", label);
        self.draw_preview(fb, panel_x, y + 1, snap.next, false);
        y += 4;

        let hold_label = fb.text(panel_x, y, "HOLD", label);
        if snap.hold_used {
            fb.text(hold_label + 1, y, "(used)", value.dim());
        }
        match snap.hold {
            Some(kind) => self.draw_preview(fb, panel_x, y + 1, kind, snap.hold_used),
            None => {
                fb.text(panel_x, y + 1, "-", value);
            }
        }
        y += 4;

        let help = Style::new(Rgb::new(120, 120, 130), SCREEN_BG);
        for line in [
            "←→ move  ↑ rotate",
            "↓ soft  ␣ hard",
            "c hold  p pause",
            "r restart  q quit",
        ] {
            if y >= frame.y + frame.h {
                break;
            }
            fb.text(panel_x, y, line, help);
            y += 1;
        }
    }

    /// Spawn-orientation miniature of `kind`, two rows tall.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind, dim: bool) {
        let mut style = block_style(kind);
        style.bg = SCREEN_BG;
        if dim {
            style = style.dim();
        }
        for (dx, dy) in base_shape(kind) {
            let px = x + (dx as u16) * self.cell_w;
            fb.fill(px, y + dy as u16, self.cell_w, 1, style.glyph('█'));
        }
    }
}

/// Display color for a piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

fn block_style(kind: PieceKind) -> Style {
    Style::new(piece_color(kind), BOARD_BG).bold()
}

/// A two-line banner across the middle of the board frame.
fn draw_overlay(fb: &mut FrameBuffer, frame: FrameRect, title: &str, hint: &str) {
    let mid_y = frame.y.saturating_add(frame.h / 2).saturating_sub(1);
    let banner = Style::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    let sub = Style::new(Rgb::new(180, 180, 180), SCREEN_BG);

    fb.fill(frame.x + 1, mid_y, frame.w.saturating_sub(2), 2, sub.glyph(' '));
    fb.text_centered(frame.x, frame.w, mid_y, title, banner);
    fb.text_centered(frame.x, frame.w, mid_y + 1, hint, sub);
}
