use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

macro_rules! hex {
    ($r: literal, $g: literal, $b: literal) => {
        RGBA { r: $r as f64, g: $g as f64, b: $b as f64, a: 255. }
    };
}

lazy_static! {
    pub(crate) static ref SKY: PaletteData = {
        PaletteData {
            rgb: vec![
                hex!(0x87, 0xCE, 0xEB), // sky blue
                hex!(0x46, 0x82, 0xB4), // steel blue
                hex!(0x1E, 0x90, 0xFF), // dodger blue
                hex!(0x00, 0xBF, 0xFF), // deep sky blue
                hex!(0x87, 0xCE, 0xFA), // light sky blue
                hex!(0xB0, 0xE0, 0xE6), // powder blue
                hex!(0xAD, 0xD8, 0xE6), // light blue
                hex!(0xF0, 0xF8, 0xFF), // alice blue
                hex!(0xE0, 0xF6, 0xFF),
                hex!(0xB8, 0xE6, 0xB8), // light green-blue
            ]}
    };
}

/// Midnight blue.
pub(crate) const NIGHT: RGBA<f64> = hex!(0x19, 0x19, 0x70);
/// Sky blue, also the color shown before any zip code is known.
pub(crate) const MORNING: RGBA<f64> = hex!(0x87, 0xCE, 0xEB);
/// Steel blue.
pub(crate) const EVENING: RGBA<f64> = hex!(0x46, 0x82, 0xB4);
