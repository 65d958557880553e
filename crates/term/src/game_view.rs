//! GameView: maps a [`BoardSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Board row `H - 1` is drawn at the top of the frame and the floor at the
//! bottom. Each board cell is `cell_w` terminal columns wide.

use crate::core::{get_shape, BoardSnapshot};
use crate::engine::Phase;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

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

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
const EMPTY: CellStyle = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
const FILLED: CellStyle = CellStyle::new(Rgb::new(170, 200, 230), PLAY_BG).bold();
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
const HINT: CellStyle = CellStyle::new(Rgb::new(150, 150, 150), SCREEN_BG).dim();
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();

const KEY_HINTS: [&str; 5] = ["←/→ move", "↑/↓ rotate", "r soft drop", "space drop", "q quit"];

/// A lightweight terminal view of the board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w: cell_w.max(1) }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(
        &self,
        snap: &BoardSnapshot,
        phase: Phase,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let width = snap.width as u16;
        let height = snap.height as u16;
        let frame_w = width * self.cell_w + 2;
        let frame_h = height + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for row in 0..height {
            let bits = snap.rows.get(row as usize).copied().unwrap_or(0);
            let y = start_y + 1 + (height - 1 - row);
            for col in 0..width {
                let x = start_x + 1 + col * self.cell_w;
                if bits >> col & 1 == 1 {
                    fb.fill_rect(x, y, self.cell_w, 1, '█', FILLED);
                } else {
                    fb.fill_rect(x, y, self.cell_w, 1, ' ', EMPTY);
                    fb.put_char(x + self.cell_w / 2, y, '·', EMPTY);
                }
            }
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap.next, panel_x, start_y);

        match phase {
            Phase::WaitingForStart => {
                draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PRESS ANY KEY")
            }
            Phase::GameOver => {
                draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            Phase::Playing | Phase::Exited => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, phase: Phase, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, phase, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, next: Option<PieceKind>, x: u16, y: u16) {
        if x >= fb.width() {
            return;
        }

        let mut y = y;
        if let Some(kind) = next {
            fb.put_str(x, y, "NEXT", LABEL);
            y += 1;
            let shape = get_shape(kind);
            for &(row, col) in &shape.cells {
                fb.fill_rect(
                    x + col as u16 * self.cell_w,
                    y + row as u16,
                    self.cell_w,
                    1,
                    '█',
                    piece_style(kind),
                );
            }
            y += shape.box_size as u16 + 1;
        }

        for hint in KEY_HINTS {
            fb.put_str(x, y, hint, HINT);
            y += 1;
        }
    }
}

fn draw_overlay_text(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let mid_y = start_y.saturating_add(frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    fb.put_str(x, mid_y, text, OVERLAY);
}

fn piece_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    CellStyle::new(fg, SCREEN_BG).bold()
}
