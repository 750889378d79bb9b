use core::convert::Infallible;
use thiserror::Error;

pub type DisplayResult<T> = core::result::Result<T, DisplayError>;
pub type SensorResult<T> = core::result::Result<T, SensorError>;

/// Raised by the fallible startup routines, wrapping whichever peripheral failed.
/// A routine that only touches one peripheral leaves the other side `Infallible`
#[derive(Error, Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum SetupError<D, S = Infallible> {
    #[error("Display setup failed: {0}")]
    Display(D),
    #[error("Sensor setup failed: {0}")]
    Sensor(S),
}

/// Failures of the character OLED adapter
#[derive(Error, Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum DisplayError {
    #[error("Write I2C Error")]
    WriteI2CError,
    #[error("Geometry {columns}x{rows} is not supported")]
    InvalidGeometry { columns: u8, rows: u8 },
    #[error("Character {0:?} cannot be shown on the display")]
    UnsupportedCharacter(char),
    #[error("Display used before begin")]
    NotInitialized,
}

/// Failures of the DHT adapter
#[derive(Error, Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum SensorError {
    #[error("Data pin Error")]
    PinError,
}
