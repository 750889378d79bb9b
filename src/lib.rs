pub mod display;
pub mod error;
pub mod sensor;

use display::CharacterDisplay;
use error::SetupError;
use log::{debug, warn};
use sensor::HumiditySensor;
use std::fmt::Debug;

pub mod prelude {
    pub use super::{
        display::CharacterDisplay, display::CharacterOled, display::OledAddr, error::SetupError,
        sensor::Dht, sensor::DhtKind, sensor::HumiditySensor, setup_dht, setup_lcd,
        try_setup_dht, try_setup_lcd,
    };
}

/// First line shown once the display is up
pub const GREETING_TITLE: &str = "Cheese-O-Matic";
/// Second line shown once the display is up
pub const GREETING_SUBTITLE: &str = "8000";

pub const DISPLAY_COLUMNS: u8 = 16;
pub const DISPLAY_ROWS: u8 = 2;

fn greet<D: CharacterDisplay>(lcd: &mut D) -> Result<(), D::Error> {
    lcd.begin(DISPLAY_COLUMNS, DISPLAY_ROWS)?;
    lcd.print(GREETING_TITLE)?;
    lcd.set_cursor(0, 1)?;
    lcd.print(GREETING_SUBTITLE)
}

/// Configure the display as 16x2 and write the greeting, stopping at the first failure
pub fn try_setup_lcd<D>(lcd: &mut D) -> Result<(), SetupError<D::Error>>
where
    D: CharacterDisplay,
{
    greet(lcd).map_err(SetupError::Display)
}

/// Start the humidity sensor once
pub fn try_setup_dht<S>(
    dht: &mut S,
) -> Result<(), SetupError<core::convert::Infallible, S::Error>>
where
    S: HumiditySensor,
{
    dht.begin().map_err(SetupError::Sensor)
}

fn absorb<E: Debug>(step: &str, result: Result<(), E>) {
    if let Err(err) = result {
        warn!("Display {} failed: {:?}", step, err);
    }
}

/// Configure the display as 16x2 and write the greeting.
/// Every call is issued even if an earlier one failed, failures are only logged
pub fn setup_lcd<D>(lcd: &mut D)
where
    D: CharacterDisplay,
    D::Error: Debug,
{
    debug!("Initializing display");
    absorb("begin", lcd.begin(DISPLAY_COLUMNS, DISPLAY_ROWS));
    absorb("print", lcd.print(GREETING_TITLE));
    absorb("set_cursor", lcd.set_cursor(0, 1));
    absorb("print", lcd.print(GREETING_SUBTITLE));
}

/// Same as [`try_setup_dht`] but a failure is only logged, the caller always carries on
pub fn setup_dht<S>(dht: &mut S)
where
    S: HumiditySensor,
    S::Error: Debug,
{
    debug!("Initializing humidity sensor");
    if let Err(err) = try_setup_dht(dht) {
        warn!("{:?}", err);
    }
}
