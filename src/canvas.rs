//! Software rasteriser over an RGBA8 frame buffer.

use crate::config::Color;
use rusttype::{point, Font, PositionedGlyph, Scale};

pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    /// Wraps `frame`, which must hold `width * height` RGBA pixels.
    ///
    /// # Panics
    ///
    /// Panics if `frame.len()` is not `width * height * 4`.
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        assert_eq!(
            frame.len(),
            width * height * 4,
            "frame does not hold {width}x{height} RGBA pixels"
        );
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        Some(Color::new(
            self.frame[idx],
            self.frame[idx + 1],
            self.frame[idx + 2],
        ))
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    /// Blends `color` over the existing pixel with coverage `alpha`.
    fn blend(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let a = alpha.clamp(0.0, 1.0);
        let idx = (y as usize * self.width + x as usize) * 4;
        let src = [color.r as f32, color.g as f32, color.b as f32];
        for (channel, s) in src.iter().enumerate() {
            let d = self.frame[idx + channel] as f32;
            self.frame[idx + channel] = (s * a + d * (1.0 - a)).round() as u8;
        }
        self.frame[idx + 3] = 0xff;
    }

    pub fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), thickness: f32, color: Color) {
        self.draw_line_with(from, to, color, |_| thickness);
    }

    /// Line whose width shrinks towards `to`.
    pub fn draw_line_tapered(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        thickness: f32,
        color: Color,
    ) {
        // keep a sliver at the tip
        self.draw_line_with(from, to, color, |t| thickness * (1.0 - t * 0.95));
    }

    fn draw_line_with(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        color: Color,
        thickness_at: impl Fn(f32) -> f32,
    ) {
        let (x0, y0) = (from.0 as f32, from.1 as f32);
        let (x1, y1) = (to.0 as f32, to.1 as f32);
        let pad = thickness_at(0.0).ceil() + 1.0;
        let min_x = (x0.min(x1) - pad).floor() as i32;
        let max_x = (x0.max(x1) + pad).ceil() as i32;
        let min_y = (y0.min(y1) - pad).floor() as i32;
        let max_y = (y0.max(y1) + pad).ceil() as i32;
        let dx = x1 - x0;
        let dy = y1 - y0;
        let len_sq = dx * dx + dy * dy;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 - x0;
                let py = y as f32 - y0;
                let t = if len_sq > 0.0 {
                    ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let lx = x0 + t * dx;
                let ly = y0 + t * dy;
                let dist = ((lx - x as f32).powi(2) + (ly - y as f32).powi(2)).sqrt();
                let aa = (1.0 - (dist - thickness_at(t) / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
                if aa > 0.01 {
                    self.blend(x, y, color, aa);
                }
            }
        }
    }

    /// Filled disc with a one pixel anti-aliased rim.
    pub fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Color) {
        let (cx, cy) = center;
        let reach = radius.ceil() as i32 + 1;
        let (ix, iy) = (cx.round() as i32, cy.round() as i32);
        for y in iy - reach..=iy + reach {
            for x in ix - reach..=ix + reach {
                let dist = ((x as f64 - cx).powi(2) + (y as f64 - cy).powi(2)).sqrt();
                let aa = if dist > radius {
                    1.0 - (dist - radius).min(1.0)
                } else {
                    1.0
                };
                if aa > 0.0 {
                    self.blend(x, y, color, aa as f32);
                }
            }
        }
    }

    pub fn fill_rect(&mut self, origin: (f64, f64), size: (f64, f64), color: Color) {
        let x0 = origin.0.round() as i32;
        let y0 = origin.1.round() as i32;
        let x1 = (origin.0 + size.0).round() as i32;
        let y1 = (origin.1 + size.1).round() as i32;
        for y in y0.max(0)..y1.min(self.height as i32) {
            for x in x0.max(0)..x1.min(self.width as i32) {
                self.blend(x, y, color, 1.0);
            }
        }
    }

    /// Draws `text` with its bounding box centred on `center`.
    pub fn draw_text(
        &mut self,
        center: (f64, f64),
        text: &str,
        font: &Font,
        size: f32,
        color: Color,
    ) {
        let scale = Scale::uniform(size);
        let ascent = font.v_metrics(scale).ascent;
        let glyphs: Vec<PositionedGlyph> = font.layout(text, scale, point(0.0, ascent)).collect();
        let Some((min_x, max_x, min_y, max_y)) = text_bounds(&glyphs) else {
            return;
        };
        let offset_x = center.0.round() as i32 - (max_x - min_x) / 2;
        let offset_y = center.1.round() as i32 - (max_y - min_y) / 2;
        for glyph in &glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    let px = offset_x + gx as i32 + bb.min.x - min_x;
                    let py = offset_y + gy as i32 + bb.min.y - min_y;
                    self.blend(px, py, color, v);
                });
            }
        }
    }
}

fn text_bounds(glyphs: &[PositionedGlyph]) -> Option<(i32, i32, i32, i32)> {
    glyphs
        .iter()
        .filter_map(|g| g.pixel_bounding_box())
        .fold(None, |acc, bb| {
            Some(match acc {
                None => (bb.min.x, bb.max.x, bb.min.y, bb.max.y),
                Some((min_x, max_x, min_y, max_y)) => (
                    min_x.min(bb.min.x),
                    max_x.max(bb.max.x),
                    min_y.min(bb.min.y),
                    max_y.max(bb.max.y),
                ),
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(0xff, 0x00, 0x00);
    const GREY: Color = Color::new(100, 100, 100);

    fn buffer(width: usize, height: usize) -> Vec<u8> {
        vec![0; width * height * 4]
    }

    #[test]
    #[should_panic(expected = "frame does not hold 4x3 RGBA pixels")]
    fn short_frame_is_rejected() {
        let mut frame = buffer(4, 2);
        Canvas::new(&mut frame, 4, 3);
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut frame = buffer(4, 3);
        let mut canvas = Canvas::new(&mut frame, 4, 3);
        canvas.clear(GREY);
        assert_eq!(canvas.pixel(0, 0), Some(GREY));
        assert_eq!(canvas.pixel(3, 2), Some(GREY));
        assert_eq!(canvas.pixel(4, 0), None);
        assert!(frame.chunks_exact(4).all(|px| px == [100, 100, 100, 0xff]));
    }

    #[test]
    fn circle_covers_center_not_corners() {
        let mut frame = buffer(21, 21);
        let mut canvas = Canvas::new(&mut frame, 21, 21);
        canvas.clear(GREY);
        canvas.fill_circle((10.0, 10.0), 5.0, RED);
        assert_eq!(canvas.pixel(10, 10), Some(RED));
        assert_eq!(canvas.pixel(14, 10), Some(RED));
        assert_eq!(canvas.pixel(0, 0), Some(GREY));
        assert_eq!(canvas.pixel(17, 10), Some(GREY));
    }

    #[test]
    fn circle_partially_offscreen_is_clipped() {
        let mut frame = buffer(8, 8);
        let mut canvas = Canvas::new(&mut frame, 8, 8);
        canvas.fill_circle((0.0, 0.0), 20.0, RED);
        assert_eq!(canvas.pixel(7, 7), Some(RED));
    }

    #[test]
    fn rect_is_half_open() {
        let mut frame = buffer(10, 10);
        let mut canvas = Canvas::new(&mut frame, 10, 10);
        canvas.clear(GREY);
        canvas.fill_rect((2.0, 3.0), (4.0, 2.0), RED);
        assert_eq!(canvas.pixel(2, 3), Some(RED));
        assert_eq!(canvas.pixel(5, 4), Some(RED));
        assert_eq!(canvas.pixel(6, 4), Some(GREY));
        assert_eq!(canvas.pixel(2, 5), Some(GREY));
    }

    #[test]
    fn horizontal_line_hits_its_row() {
        let mut frame = buffer(20, 10);
        let mut canvas = Canvas::new(&mut frame, 20, 10);
        canvas.clear(GREY);
        canvas.draw_line((2.0, 5.0), (17.0, 5.0), 2.0, RED);
        assert_eq!(canvas.pixel(10, 5), Some(RED));
        assert_eq!(canvas.pixel(10, 0), Some(GREY));
        assert_eq!(canvas.pixel(10, 9), Some(GREY));
    }

    #[test]
    fn degenerate_line_draws_a_dot() {
        let mut frame = buffer(10, 10);
        let mut canvas = Canvas::new(&mut frame, 10, 10);
        canvas.clear(GREY);
        canvas.draw_line((5.0, 5.0), (5.0, 5.0), 2.0, RED);
        assert_eq!(canvas.pixel(5, 5), Some(RED));
    }

    #[test]
    fn tapered_line_is_thinner_at_the_tip() {
        let mut frame = buffer(40, 20);
        let mut canvas = Canvas::new(&mut frame, 40, 20);
        canvas.clear(GREY);
        canvas.draw_line_tapered((2.0, 10.0), (37.0, 10.0), 8.0, RED);
        assert_eq!(canvas.pixel(3, 13), Some(RED));
        assert_eq!(canvas.pixel(36, 13), Some(GREY));
    }
}
