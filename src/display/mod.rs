mod font;

use font::{glyph, text_width, GLYPH_ADVANCE, GLYPH_WIDTH};
use hex_color::HexColor;
use log::trace;

/// Width (in pixels) of the stopwatch display.
pub const DISPLAY_WIDTH: usize = 64;
/// Height (in pixels) of the stopwatch display.
pub const DISPLAY_HEIGHT: usize = 32;
/// Size (in pixels) of the entire stopwatch display.
pub const DISPLAY_SIZE: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;

/// Row of the top edge of the time readout.
const READOUT_ROW: usize = 8;
/// Row of the top edge of the control labels.
const CONTROLS_ROW: usize = 22;
/// Distance from the display edge to the control labels.
const CONTROLS_MARGIN: usize = 1;
/// Label of the reset control.
const RESET_LABEL: &str = "RESET";

/// Presentation sink for the stopwatch readout.
///
/// Receives the already formatted minutes, seconds and hundredths. A display
/// never feeds anything back to the watch.
pub trait Display {
    fn show(&mut self, minutes: &str, seconds: &str, hundredths: &str);
}

/// A monochrome framebuffer display.
///
/// Renders the readout centered on the screen and the control labels along
/// the bottom: the primary control on the left, the reset control on the
/// right while it is visible.
pub struct FrameBuffer {
    /// Display VRAM.
    ///
    /// One byte per pixel, `0xFF` is lit and `0x00` is dark.
    vram: [u8; DISPLAY_SIZE],
    /// Display draw flag.
    ///
    /// Set if the VRAM has been updated since the last draw call.
    should_draw: bool,
    /// The readout as last shown, `MM:SS:HH`.
    readout: String,
    /// Label of the primary control.
    primary_label: String,
    /// If the reset control is shown.
    reset_visible: bool,
}

impl FrameBuffer {
    /// Create a framebuffer showing a zeroed readout and a start control.
    pub fn new() -> Self {
        let mut fb = Self {
            vram: [0; DISPLAY_SIZE],
            should_draw: false,
            readout: String::from("00:00:00"),
            primary_label: String::from("START"),
            reset_visible: false,
        };
        fb.render();
        fb
    }

    /// The readout text as last shown.
    pub fn readout(&self) -> &str {
        &self.readout
    }

    /// If the display wants to redraw the framebuffer.
    ///
    /// This will be true if the VRAM has been updated since the last draw
    /// call.
    pub fn should_draw(&self) -> bool {
        self.should_draw
    }

    /// Update the control labels.
    ///
    /// # Arguments
    ///
    /// * `primary_label` - The label of the start/stop/resume control.
    /// * `reset_visible` - If the reset control is shown.
    pub fn set_controls(&mut self, primary_label: &str, reset_visible: bool) {
        if self.primary_label == primary_label && self.reset_visible == reset_visible {
            return;
        }

        self.primary_label.clear();
        self.primary_label.push_str(primary_label);
        self.reset_visible = reset_visible;
        self.render();
    }

    /// Draw the VRAM to a framebuffer.
    ///
    /// # Arguments
    ///
    /// * `target` - The RGBA frame of a valid [`pixels::Pixels`] struct.
    /// * `foreground_color` - The color to use for lit pixels.
    /// * `background_color` - The color to use for dark pixels.
    pub fn draw(
        &mut self,
        target: &mut [u8],
        foreground_color: HexColor,
        background_color: HexColor,
    ) {
        for (pixel, pix) in self.vram.iter().zip(target.chunks_exact_mut(4)) {
            let color = if *pixel != 0x00 {
                let f = foreground_color;
                [f.r, f.g, f.b, f.a]
            } else {
                let b = background_color;
                [b.r, b.g, b.b, b.a]
            };
            pix.copy_from_slice(&color);
        }
        self.should_draw = false;
    }

    /// If the pixel at the given coordinate is lit.
    #[cfg(test)]
    fn lit(&self, x: usize, y: usize) -> bool {
        x < DISPLAY_WIDTH && y < DISPLAY_HEIGHT && self.vram[x + y * DISPLAY_WIDTH] != 0
    }

    /// Rebuild the VRAM from the readout and the control labels.
    ///
    /// Sets the [`FrameBuffer::should_draw`] flag.
    fn render(&mut self) {
        self.vram = [0; DISPLAY_SIZE];

        let readout_x = DISPLAY_WIDTH.saturating_sub(text_width(&self.readout)) / 2;
        write_text(&mut self.vram, readout_x, READOUT_ROW, &self.readout);

        write_text(&mut self.vram, CONTROLS_MARGIN, CONTROLS_ROW, &self.primary_label);
        if self.reset_visible {
            let reset_x = DISPLAY_WIDTH - CONTROLS_MARGIN - text_width(RESET_LABEL);
            write_text(&mut self.vram, reset_x, CONTROLS_ROW, RESET_LABEL);
        }

        self.should_draw = true;
    }
}

/// Write a line of text into a VRAM buffer.
///
/// Pixels past the right or bottom edge are clipped.
///
/// # Arguments
///
/// * `vram` - The buffer to write to.
/// * `x` - The x coordinate of the left edge of the first glyph.
/// * `y` - The y coordinate of the top edge of the line.
/// * `text` - The text to write.
fn write_text(vram: &mut [u8; DISPLAY_SIZE], x: usize, y: usize, text: &str) {
    for (i, c) in text.chars().enumerate() {
        let left = x + i * GLYPH_ADVANCE;
        for (y_line, row) in glyph(c).iter().enumerate() {
            for x_line in 0..GLYPH_WIDTH {
                if (0b1000_0000 >> x_line) & row == 0 {
                    continue;
                }

                let (x_coord, y_coord) = (left + x_line, y + y_line);
                if x_coord < DISPLAY_WIDTH && y_coord < DISPLAY_HEIGHT {
                    vram[x_coord + y_coord * DISPLAY_WIDTH] = 0xFF;
                }
            }
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for FrameBuffer {
    fn show(&mut self, minutes: &str, seconds: &str, hundredths: &str) {
        self.readout = format!("{}:{}:{}", minutes, seconds, hundredths);
        trace!("readout {}", self.readout);
        self.render();
    }
}
