// Window + software drawing utilities.
// What lives here:
// 1) A window that shows the board, collects clicks/keys and paces frames.
// 2) A rasterizer that paints the renderer's DrawCommands into a FrameBuffer:
//    thick lines, rings, filled rectangles and 5x7 bitmap text.

use crate::error::Error;
use crate::font::{glyph5x7, ADVANCE, GLYPH_W};
use crate::input::{InputEvent, Key as GameKey};
use crate::render::DrawCommand;
use crate::types::{FrameBuffer, Point, Rect};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use tracing::debug;

pub struct Drawer {
    window: Window,       // the on-screen window you see
    mouse_was_down: bool, // left button state last frame, for press edges
}

impl Drawer {
    /// Open a window of the given size, capped at `fps` updates per second.
    /// Visual: an empty window appears; nothing is drawn until the first present().
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit { reason: e.to_string() })?;
        // present() sleeps as needed to hold this rate.
        window.set_target_fps(fps);
        Ok(Self { window, mouse_was_down: false })
    }

    /// Push the pixels for this frame to the screen, then wait out the rest of the frame.
    /// Visual: the board you see changes only here.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate { reason: e.to_string() })?;
        Ok(())
    }

    /// Returns false when the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Everything that happened since the last frame, as game events.
    /// Always starts with a FrameTick; a closed window shows up as a Quit key.
    /// Visual: none; a held mouse button places at most one mark.
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = vec![InputEvent::FrameTick];

        if !self.is_open() {
            events.push(InputEvent::KeyPress(GameKey::Quit));
            return events;
        }

        // Only the press edge counts as a click; holding the button does nothing more.
        let down = self.window.get_mouse_down(MouseButton::Left);
        if down && !self.mouse_was_down {
            if let Some((x, y)) = self.window.get_mouse_pos(MouseMode::Discard) {
                events.push(InputEvent::PointerDown { x: x as i32, y: y as i32 });
            }
        }
        self.mouse_was_down = down;

        for key in self.window.get_keys_pressed(KeyRepeat::No) {
            events.push(InputEvent::KeyPress(map_key(key)));
        }

        if events.len() > 1 {
            debug!(?events, "input");
        }
        events
    }
}

/// R replays, Esc quits, the rest is ignored.
pub fn map_key(key: Key) -> GameKey {
    match key {
        Key::R => GameKey::Replay,
        Key::Escape => GameKey::Quit,
        _ => GameKey::Other,
    }
}

/* ---------- Software drawing: pixels, lines, rings, rects, tiny bitmap font ---------- */

/// Paint every command, in order, onto `fb`.
/// Visual: later commands cover earlier ones, so the result box sits on top of the marks.
pub fn rasterize(fb: &mut FrameBuffer, cmds: &[DrawCommand]) {
    for cmd in cmds {
        match cmd {
            DrawCommand::Line { from, to, color, thickness } => {
                draw_thick_line(fb, *from, *to, *thickness, color.to_u32());
            }
            DrawCommand::Circle { center, radius, color, thickness } => {
                draw_ring(fb, *center, *radius, *thickness, color.to_u32());
            }
            DrawCommand::FilledRect { rect, color } => fill_rect(fb, *rect, color.to_u32()),
            DrawCommand::Text { text, position, color, scale } => {
                draw_text_5x7(fb, position.x, position.y, text, color.to_u32(), *scale);
            }
        }
    }
}

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: shapes hanging off the edge are simply cut off.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Walk the pixels between (x0,y0) and (x1,y1) using Bresenham.
fn bresenham(from: Point, to: Point, mut plot: impl FnMut(i32, i32)) {
    let (mut x0, mut y0, x1, y1) = (from.x, from.y, to.x, to.y);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        plot(x0, y0);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Line `thickness` pixels wide: a disc stamped at every step (round caps).
/// Visual: grid bars and the two strokes of an X.
fn draw_thick_line(fb: &mut FrameBuffer, from: Point, to: Point, thickness: i32, color: u32) {
    if thickness <= 1 {
        bresenham(from, to, |x, y| put_pixel(fb, x, y, color));
        return;
    }
    let r = thickness / 2;
    bresenham(from, to, |x, y| fill_disc(fb, x, y, r, color));
}

fn fill_disc(fb: &mut FrameBuffer, cx: i32, cy: i32, r: i32, color: u32) {
    let r2 = r * r;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r2 {
                put_pixel(fb, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Ring with outer radius `radius`, growing `thickness` pixels inward.
/// A thickness of 0 (or at least the radius) fills the whole disc.
/// Visual: the O mark, a ring with the cell showing through the middle.
fn draw_ring(fb: &mut FrameBuffer, center: Point, radius: i32, thickness: i32, color: u32) {
    if radius <= 0 {
        return;
    }
    let outer2 = radius * radius;
    let inner = if thickness <= 0 { 0 } else { (radius - thickness).max(0) };
    let inner2 = inner * inner;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let d2 = dx * dx + dy * dy;
            if d2 <= outer2 && (inner == 0 || d2 > inner2) {
                put_pixel(fb, center.x + dx, center.y + dy, color);
            }
        }
    }
}

/// Solid box, clipped to the buffer.
/// Visual: the background and the purple boxes behind the result text.
fn fill_rect(fb: &mut FrameBuffer, rect: Rect, color: u32) {
    let x0 = rect.x.max(0);
    let y0 = rect.y.max(0);
    let x1 = (rect.x + rect.width).min(fb.width as i32);
    let y1 = (rect.y + rect.height).min(fb.height as i32);
    for y in y0..y1 {
        for x in x0..x1 {
            put_pixel(fb, x, y, color);
        }
    }
}

/// One font pixel drawn as a `scale`x`scale` block.
fn put_block(fb: &mut FrameBuffer, x: i32, y: i32, scale: i32, color: u32) {
    fill_rect(fb, Rect::new(x, y, scale, scale), color);
}

/// Draw a single 5x7 character at (x,y), each font pixel `scale` screen pixels wide.
/// A 1-font-pixel black shadow sits under the glyph for contrast.
/// Visual: chunky pixel letters with a dark drop shadow.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32, scale: i32) {
    if let Some(rows) = glyph5x7(ch) {
        // Shadow pass: offset by one font pixel in black
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..GLYPH_W {
                if (rowbits & (1 << (GLYPH_W - 1 - rx))) != 0 {
                    put_block(fb, x + (rx + 1) * scale, y + (ry as i32 + 1) * scale, scale, 0x00000000);
                }
            }
        }

        // Foreground pass: actual glyph in chosen color
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..GLYPH_W {
                if (rowbits & (1 << (GLYPH_W - 1 - rx))) != 0 {
                    put_block(fb, x + rx * scale, y + ry as i32 * scale, scale, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs.
/// Visual: "Player X wins!" and the replay prompt on the overlay.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32, scale: i32) {
    let scale = scale.max(1);
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color, scale);
        x += ADVANCE * scale;
    }
}
