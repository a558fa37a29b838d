#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

/// The app's background blue, `#3b82f6`.
pub const BRAND_BLUE: Rgb = Rgb::new(0x3b, 0x82, 0xf6);

pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
