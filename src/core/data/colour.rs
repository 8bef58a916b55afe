/// A colour packed as ABGR, so the byte order in memory on little-endian
/// targets is red, green, blue, alpha.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour(u32);

impl Colour {
    pub const BLACK: Colour = Colour::new(0, 0, 0);

    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self::with_alpha(red, green, blue, 0xFF)
    }

    #[must_use]
    pub const fn with_alpha(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self(((alpha as u32) << 24) | ((blue as u32) << 16) | ((green as u32) << 8) | red as u32)
    }

    #[must_use]
    pub const fn from_abgr(value: u32) -> Self {
        Self(value)
    }

    /// Componentwise linear interpolation between two colours.
    #[must_use]
    pub fn lerp(colour1: Colour, colour2: Colour, value: f64) -> Self {
        let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * value) as u8;

        Self::with_alpha(
            channel(colour1.red(), colour2.red()),
            channel(colour1.green(), colour2.green()),
            channel(colour1.blue(), colour2.blue()),
            channel(colour1.alpha(), colour2.alpha()),
        )
    }

    #[must_use]
    pub const fn red(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    #[must_use]
    pub const fn green(&self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[must_use]
    pub const fn blue(&self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[must_use]
    pub const fn alpha(&self) -> u8 {
        ((self.0 >> 24) & 0xFF) as u8
    }

    #[must_use]
    pub const fn abgr(&self) -> u32 {
        self.0
    }
}
