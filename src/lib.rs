//! Sky colors derived from a zip code and the hour of the day.
//!
//! - [`resolve`] and [`resolve_with`]
//! - [`daily_schedule`]
//!
//! The zip code selects one of the ten colors of the [`SkyPalette`]
//! (by its value modulo 10) but a [`Daypart`] override replaces that
//! color outside the midday band (10–16):
//!
//! | hours        | color     |
//! |--------------|-----------|
//! | 0–5, 21–23   | `#191970` |
//! | 6–9          | `#87CEEB` |
//! | 10–16        | palette   |
//! | 17–20        | `#4682B4` |
//!
//! ```
//! let c = sky_color::resolve("90213", 12)?;
//! assert_eq!(c.to_string(), "#00BFFF");
//! assert_eq!(sky_color::resolve("90213", 22)?.to_string(), "#191970");
//! # Ok::<(), sky_color::Error>(())
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use rgb::{RGBA, RGB8, RGB16, RGBA8, RGBA16};

mod error;
mod palettes;
mod zip;
use palettes::ty::PaletteData;
pub use palettes::ty::Daypart;
pub use error::{Error, Result};
pub use zip::{ZipCode, MAX_ZIP_LEN};

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// The palette of sky colors in this encoding.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use sky_color::RGBColor;
    /// let p = RGB8::sky();
    /// assert_eq!(p.get(3), RGB8::new(0x00, 0xBF, 0xFF));
    /// ```
    #[inline]
    fn sky() -> SkyPalette<Self> { SkyPalette::new(&palettes::SKY) }

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGBA{ r, g, b, a } = Self::to_rgba(self);
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgba(RGBA{ r: x, g: x, b: x, a })
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r as u8,  g: c.g as u8,  b: c.b as u8 }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: (self.r >> 8) as f64, g: (self.g >> 8) as f64,
              b: (self.b >> 8) as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB16 { r: c.r as u16 * 257,  g: c.g as u16 * 257,
                b: c.b as u16 * 257 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r as u8,  g: c.g as u8,  b: c.b as u8, a: c.a as u8 }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: (self.r >> 8) as f64, g: (self.g >> 8) as f64,
              b: (self.b >> 8) as f64, a: (self.a >> 8) as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA16 { r: c.r as u16 * 257,  g: c.g as u16 * 257,
                 b: c.b as u16 * 257, a: c.a as u16 * 257 }
    }
}


/// An hour of the local day, in 0 ..= 23.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hour(u8);

impl Hour {
    /// Return the hour `h` or [`Error::HourOutOfRange`] if `h > 23`.
    pub fn new(h: u8) -> Result<Self> {
        if h < 24 { Ok(Hour(h)) } else { Err(Error::HourOutOfRange(h)) }
    }

    #[inline]
    pub fn get(self) -> u8 { self.0 }

    /// All hours of the day, from 0 to 23.
    pub fn all() -> impl DoubleEndedIterator<Item = Hour> + ExactSizeIterator {
        (0 .. 24).map(Hour)
    }
}

impl TryFrom<u8> for Hour {
    type Error = Error;

    fn try_from(h: u8) -> Result<Self> { Hour::new(h) }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}


impl Daypart {
    /// The band containing `hour`.  First match wins: night, then
    /// morning, then evening.
    pub fn of(hour: Hour) -> Daypart {
        let h = hour.get();
        if h < 6 || h > 20 { Daypart::Night }
        else if h < 10 { Daypart::Morning }
        else if h > 16 { Daypart::Evening }
        else { Daypart::Midday }
    }

    /// The color replacing the palette color during this band, if any.
    pub fn override_color<Color: RGBColor>(self) -> Option<Color> {
        match self {
            Daypart::Night => Some(Color::from_rgba(palettes::NIGHT)),
            Daypart::Morning => Some(Color::from_rgba(palettes::MORNING)),
            Daypart::Evening => Some(Color::from_rgba(palettes::EVENING)),
            Daypart::Midday => None,
        }
    }
}


/// The fixed table of ten sky colors.
#[derive(Clone, Copy)]
pub struct SkyPalette<Color> {
    palette: &'static PaletteData,
    color: PhantomData<Color>,
}

impl<Color: RGBColor> SkyPalette<Color> {
    fn new(palette: &'static PaletteData) -> Self {
        Self { palette, color: PhantomData }
    }

    /// Returns the number of colors in the palette (always 10).
    pub fn len(&self) -> usize { self.palette.rgb.len() }

    /// Always `false`.
    pub fn is_empty(&self) -> bool { self.palette.rgb.is_empty() }

    /// Returns the color at position `i` modulo [`Self::len`].
    pub fn get(&self, i: usize) -> Color {
        Color::from_rgba(self.palette.rgb[i % self.len()])
    }

    /// Position of the color selected by `zip`.
    pub fn index_of(&self, zip: &ZipCode) -> usize { zip.rem(self.len()) }

    /// Returns the RGB colors of the palette.
    pub fn colors(&self) -> Vec<Color> {
        self.palette.rgb.iter().map(|&c| Color::from_rgba(c)).collect()
    }
}


/// A 24 bits RGB color, written `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorValue(RGB8);

/// Color shown before a zip code has been resolved.
pub const DEFAULT_SKY: ColorValue =
    ColorValue(RGB8 { r: 0x87, g: 0xCE, b: 0xEB });

impl ColorValue {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        ColorValue(RGB8 { r, g, b })
    }

    #[inline]
    pub fn rgb8(self) -> RGB8 { self.0 }

    /// Convert to another color encoding.
    pub fn to<Color: RGBColor>(self) -> Color {
        Color::from_rgba(self.0.to_rgba())
    }
}

impl RGBColor for ColorValue {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { self.0.to_rgba() }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { ColorValue(RGB8::from_rgba(c)) }
}

impl From<RGB8> for ColorValue {
    fn from(c: RGB8) -> Self { ColorValue(c) }
}

impl From<ColorValue> for RGB8 {
    fn from(c: ColorValue) -> Self { c.0 }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0.r, self.0.g, self.0.b)
    }
}

impl FromStr for ColorValue {
    type Err = Error;

    /// Accepts `#RRGGBB` or `RRGGBB`, in any case.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor { input: s.to_string() };
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid())
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i .. i + 2], 16)
            .map_err(|_| invalid());
        Ok(ColorValue::new(byte(0)?, byte(2)?, byte(4)?))
    }
}


/// Resolve the sky color of `zip` at `hour`, in any color encoding.
///
/// The palette color selected by the zip code only survives during
/// [`Daypart::Midday`]; the other bands return their fixed color.
pub fn resolve_with<Color: RGBColor>(zip: &ZipCode, hour: Hour) -> Color {
    let palette = Color::sky();
    let index = palette.index_of(zip);
    let daypart = Daypart::of(hour);
    let color = match daypart.override_color() {
        Some(c) => c,
        None => palette.get(index),
    };
    tracing::debug!(zip = %zip, hour = hour.get(), index, ?daypart,
                    color = %ColorValue::from_rgba(color.to_rgba()),
                    "resolved sky color");
    color
}

/// Resolve the sky color of the zip code `zip` at `hour` (in 0 ..= 23).
///
/// Fails with [`Error::InvalidInput`] if `zip` (once trimmed) is not a
/// non-empty string of decimal digits and with
/// [`Error::HourOutOfRange`] if `hour > 23`.
pub fn resolve(zip: &str, hour: u8) -> Result<ColorValue> {
    let zip = ZipCode::parse(zip)?;
    let hour = Hour::new(hour)?;
    Ok(resolve_with(&zip, hour))
}

/// The sky color of `zip` for each hour of the day, starting at 0.
pub fn daily_schedule(zip: &ZipCode) -> [ColorValue; 24] {
    let mut schedule = [DEFAULT_SKY; 24];
    for (c, h) in schedule.iter_mut().zip(Hour::all()) {
        *c = resolve_with(zip, h);
    }
    schedule
}
