use crate::canvas::Canvas;
use crate::color::{BRAND_BLUE, WHITE};
use crate::error::IconError;
use crate::png::Image;

/// Draws the launcher artwork at the requested side length: a white cross
/// inside a circular outline, centered on the brand blue background. All
/// geometry scales off `size` so the same glyph works from 20px up to the
/// 1024px marketing icon.
pub fn launcher_icon(size: u32) -> Result<Image, IconError> {
    let mut canvas = Canvas::new(size, BRAND_BLUE)?;
    let side = size as i32;
    let center = side / 2;
    let glyph = side * 3 / 5;

    // Cross: two centered bars, length 0.3 of the side.
    let bar = (side / 20).max(4);
    let arm = glyph / 2;
    canvas.fill_rect(
        center - bar / 2,
        center - arm / 2,
        center + bar / 2,
        center + arm / 2,
        WHITE,
    );
    canvas.fill_rect(
        center - arm / 2,
        center - bar / 2,
        center + arm / 2,
        center + bar / 2,
        WHITE,
    );

    // Outline ring around the cross.
    let radius = glyph * 2 / 5;
    let stroke = (side / 40).max(2);
    canvas.stroke_circle(center, center, radius, stroke, WHITE);

    Ok(canvas.into_image())
}
