//! Icon rasterization: solid canvas plus a centered label

use crate::config::{font_size_for, IconConfig};
use crate::font::{resolve_font, LabelFont};
use ab_glyph::{point, Font, FontVec, GlyphId, OutlinedGlyph, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::pixelops::weighted_sum;

/// Ink bounding box of the label, relative to the draw origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBox {
    pub width: u32,
    pub height: u32,
    /// Offset of the box's left edge from the origin
    pub left: i32,
    /// Offset of the box's top edge from the origin
    pub top: i32,
}

impl TextBox {
    /// Box whose top-left corner sits on the origin
    pub fn at_origin(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            left: 0,
            top: 0,
        }
    }
}

/// Square canvas filled with `background`
pub fn new_canvas(size: u32, background: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(size, size, Rgb(background))
}

/// Place each glyph of `text` on a baseline one ascent below the origin.
/// Measuring and drawing both go through here so they agree on positions.
fn layout_outline(font: &FontVec, scale: PxScale, text: &str) -> Vec<OutlinedGlyph> {
    let scaled = font.as_scaled(scale);
    let mut caret = 0.0f32;
    let mut previous: Option<GlyphId> = None;
    let mut glyphs = Vec::new();

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(previous) = previous {
            caret += scaled.kern(previous, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);
        previous = Some(id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            glyphs.push(outlined);
        }
    }
    glyphs
}

pub fn measure(font: &LabelFont, label: &str) -> TextBox {
    match font {
        LabelFont::Outline { font, scale, .. } => {
            let glyphs = layout_outline(font, *scale, label);
            let Some(first) = glyphs.first() else {
                return TextBox::at_origin(0, 0);
            };
            let bounds = glyphs.iter().skip(1).fold(first.px_bounds(), |acc, g| {
                let b = g.px_bounds();
                ab_glyph::Rect {
                    min: point(acc.min.x.min(b.min.x), acc.min.y.min(b.min.y)),
                    max: point(acc.max.x.max(b.max.x), acc.max.y.max(b.max.y)),
                }
            });
            // px_bounds are whole pixels already
            TextBox {
                width: bounds.width() as u32,
                height: bounds.height() as u32,
                left: bounds.min.x as i32,
                top: bounds.min.y as i32,
            }
        }
        LabelFont::Builtin(bitmap) => {
            let (width, height) = bitmap.measure(label);
            TextBox::at_origin(width, height)
        }
    }
}

/// Origin that centers the ink box of `text` on a `size` canvas.
/// Negative when the label is larger than the canvas.
pub fn centered_origin(size: u32, text: TextBox) -> (i32, i32) {
    let x = (size as i64 - text.width as i64).div_euclid(2) - text.left as i64;
    let y = (size as i64 - text.height as i64).div_euclid(2) - text.top as i64;
    (x as i32, y as i32)
}

pub fn draw_label(
    canvas: &mut RgbImage,
    font: &LabelFont,
    label: &str,
    origin: (i32, i32),
    foreground: [u8; 3],
) {
    let color = Rgb(foreground);
    let (x, y) = origin;
    match font {
        LabelFont::Outline { font, scale, .. } => {
            let (width, height) = canvas.dimensions();
            for glyph in layout_outline(font, *scale, label) {
                let bounds = glyph.px_bounds();
                let left = x + bounds.min.x as i32;
                let top = y + bounds.min.y as i32;
                glyph.draw(|gx, gy, coverage| {
                    let (px, py) = (left + gx as i32, top + gy as i32);
                    if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                        return;
                    }
                    let coverage = coverage.clamp(0.0, 1.0);
                    let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                    *pixel = weighted_sum(*pixel, color, 1.0 - coverage, coverage);
                });
            }
        }
        LabelFont::Builtin(bitmap) => bitmap.draw(canvas, x, y, color, label),
    }
}

/// Render the icon for `size`, returning the canvas and a description of the font used
pub fn render_icon(config: &IconConfig, size: u32) -> (RgbImage, String) {
    let mut canvas = new_canvas(size, config.background);

    let font = resolve_font(&config.font_candidates, font_size_for(size));
    let text = measure(&font, &config.label);
    let origin = centered_origin(size, text);

    tracing::debug!(
        "Label {:?} measures {}x{}, drawing at ({}, {})",
        config.label,
        text.width,
        text.height,
        origin.0,
        origin.1
    );

    draw_label(&mut canvas, &font, &config.label, origin, config.foreground);
    (canvas, font.describe())
}
