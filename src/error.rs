use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("zip code must be a non-empty string of decimal digits")]
    InvalidInput,

    #[error("hour {0} is out of range 0..=23")]
    HourOutOfRange(u8),

    #[error("invalid color {input:?}: expected #RRGGBB")]
    InvalidColor { input: String },
}

pub type Result<T> = std::result::Result<T, Error>;
