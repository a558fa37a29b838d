use image::{Rgb as Pixel, RgbImage};

use crate::color::Rgb;
use crate::error::IconError;
use crate::png::Image;

/// Square drawing surface for launcher artwork, backed by the `image`
/// crate's pixel buffer. Coordinates are signed so callers can compute
/// geometry without worrying about clipping; everything outside the surface
/// is dropped.
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    pub fn new(size: u32, background: Rgb) -> Result<Self, IconError> {
        if size == 0 {
            return Err(IconError::InvalidSize(size));
        }
        Ok(Self {
            pixels: RgbImage::from_pixel(size, size, pixel(background)),
        })
    }

    pub fn size(&self) -> u32 {
        self.pixels.width()
    }

    /// Fills the rectangle with corners `(x0, y0)` and `(x1, y1)`, both
    /// inclusive.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        let fill = pixel(color);
        let side = self.pixels.width() as i32;
        for y in y0.max(0)..=y1.min(side - 1) {
            for x in x0.max(0)..=x1.min(side - 1) {
                self.pixels.put_pixel(x as u32, y as u32, fill);
            }
        }
    }

    /// Strokes a circle outline, `width` pixels drawn inward from `radius`.
    pub fn stroke_circle(&mut self, cx: i32, cy: i32, radius: i32, width: i32, color: Rgb) {
        let stroke = pixel(color);
        let side = self.pixels.width() as i32;
        let outer = radius * radius;
        let inner = (radius - width).max(0).pow(2);
        for y in (cy - radius).max(0)..=(cy + radius).min(side - 1) {
            for x in (cx - radius).max(0)..=(cx + radius).min(side - 1) {
                let d2 = (x - cx).pow(2) + (y - cy).pow(2);
                if d2 >= inner && d2 <= outer {
                    self.pixels.put_pixel(x as u32, y as u32, stroke);
                }
            }
        }
    }

    pub fn into_image(self) -> Image {
        let (width, height) = self.pixels.dimensions();
        Image::from_rgb(width, height, self.pixels.into_raw())
    }
}

fn pixel(color: Rgb) -> Pixel<u8> {
    Pixel([color.red, color.green, color.blue])
}
