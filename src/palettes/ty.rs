pub(crate) use rgb::RGBA;

/// A fixed table of colors indexed by a seed.
pub(crate) struct PaletteData {
    pub(crate) rgb: Vec<RGBA<f64>>, // Invariant: length = 10
}

/// Band of the local day.  The bands are tried in the order
/// `Night`, `Morning`, `Evening` and the first one matching the hour
/// wins; `Midday` is what remains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Daypart {
    /// Before 6 or after 20 (i.e. hours 0–5 and 21–23).
    Night,
    /// Hours 6–9.
    Morning,
    /// Hours 10–16.  The only band where the palette color is kept.
    Midday,
    /// Hours 17–20.
    Evening,
}
