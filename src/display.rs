use crate::error::{DisplayError, DisplayResult};
use embedded_hal::blocking::{delay::DelayMs, i2c};

const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

const CLEAR_DISPLAY: u8 = 0x01;
const RETURN_HOME: u8 = 0x02;
const ENTRY_MODE_INCREMENT: u8 = 0x06;
const DISPLAY_OFF: u8 = 0x08;
const DISPLAY_ON: u8 = 0x0C;
const FUNCTION_SET_ONE_LINE: u8 = 0x20;
const FUNCTION_SET_TWO_LINES: u8 = 0x28;
const SET_DDRAM_ADDRESS: u8 = 0x80;

// Clear and home need the controller to settle before the next instruction
const SETTLE_MS: u8 = 2;

const MAX_COLUMNS: u8 = 40;
const MAX_ROWS: u8 = 4;
const DDRAM_CELLS: u16 = 80;
const ROW_OFFSETS: [u8; MAX_ROWS as usize] = [0x00, 0x40, 0x14, 0x54];

/// Anything that can be configured with a grid size, positioned and written to
pub trait CharacterDisplay {
    type Error;

    /// Configure the display for the given grid and leave the cursor at the origin
    fn begin(&mut self, columns: u8, rows: u8) -> core::result::Result<(), Self::Error>;

    /// Write text starting at the current cursor position
    fn print(&mut self, text: &str) -> core::result::Result<(), Self::Error>;

    /// Move the cursor, both coordinates are zero based
    fn set_cursor(&mut self, column: u8, row: u8) -> core::result::Result<(), Self::Error>;
}

/// The two I2C addresses selectable on the OLED module
#[allow(dead_code)]
#[derive(Default, Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum OledAddr {
    #[default]
    Primary = 0x3C,
    Secondary = 0x3D,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Geometry {
    columns: u8,
    rows: u8,
}

/// Character OLED with an HD44780 compatible instruction set, I2C variant of the module.
/// Modules strapped for the parallel 4-bit bus need a different transport
#[derive(Copy, Clone, Debug)]
pub struct CharacterOled<I2C, DELAY> {
    i2c: I2C,
    delay: DELAY,
    address: u8,
    geometry: Option<Geometry>,
}

impl<I2C, DELAY> CharacterOled<I2C, DELAY>
where
    I2C: i2c::Write,
    DELAY: DelayMs<u8>,
{
    /// Create a new display, nothing is sent until `begin`
    pub fn new(i2c: I2C, delay: DELAY) -> Self {
        Self {
            i2c,
            delay,
            address: OledAddr::default() as u8,
            geometry: None,
        }
    }

    /// Change the display's I2C address
    pub fn with_address(mut self, address: OledAddr) -> Self {
        self.address = address as u8;
        self
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Columns and rows configured by the last successful `begin`
    pub fn geometry(&self) -> Option<(u8, u8)> {
        self.geometry.map(|g| (g.columns, g.rows))
    }

    /// Give back the bus and delay
    pub fn release(self) -> (I2C, DELAY) {
        (self.i2c, self.delay)
    }

    fn i2c_write(&mut self, bytes: &[u8]) -> DisplayResult<()> {
        match self.i2c.write(self.address, bytes) {
            Ok(res) => Ok(res),
            Err(_) => Err(DisplayError::WriteI2CError),
        }
    }

    fn command(&mut self, instruction: u8) -> DisplayResult<()> {
        self.i2c_write(&[CONTROL_COMMAND, instruction])
    }

    fn geometry_or_err(&self) -> DisplayResult<Geometry> {
        self.geometry.ok_or(DisplayError::NotInitialized)
    }
}

impl<I2C, DELAY> CharacterDisplay for CharacterOled<I2C, DELAY>
where
    I2C: i2c::Write,
    DELAY: DelayMs<u8>,
{
    type Error = DisplayError;

    fn begin(&mut self, columns: u8, rows: u8) -> DisplayResult<()> {
        if columns == 0
            || columns > MAX_COLUMNS
            || rows == 0
            || rows > MAX_ROWS
            || columns as u16 * rows as u16 > DDRAM_CELLS
        {
            return Err(DisplayError::InvalidGeometry { columns, rows });
        }

        let function_set = if rows > 1 {
            FUNCTION_SET_TWO_LINES
        } else {
            FUNCTION_SET_ONE_LINE
        };

        self.command(function_set)?;
        self.command(DISPLAY_OFF)?;
        self.command(CLEAR_DISPLAY)?;
        self.delay.delay_ms(SETTLE_MS);
        self.command(ENTRY_MODE_INCREMENT)?;
        self.command(RETURN_HOME)?;
        self.delay.delay_ms(SETTLE_MS);
        self.command(DISPLAY_ON)?;

        self.geometry = Some(Geometry { columns, rows });
        Ok(())
    }

    fn print(&mut self, text: &str) -> DisplayResult<()> {
        self.geometry_or_err()?;

        if let Some(c) = text.chars().find(|c| !c.is_ascii()) {
            return Err(DisplayError::UnsupportedCharacter(c));
        }
        if text.is_empty() {
            return Ok(());
        }

        let mut frame = Vec::with_capacity(text.len() + 1);
        frame.push(CONTROL_DATA);
        frame.extend_from_slice(text.as_bytes());
        self.i2c_write(&frame)
    }

    fn set_cursor(&mut self, column: u8, row: u8) -> DisplayResult<()> {
        let geometry = self.geometry_or_err()?;

        let row = row.min(geometry.rows - 1);
        let column = column.min(geometry.columns - 1);

        self.command(SET_DDRAM_ADDRESS | (column + ROW_OFFSETS[row as usize]))
    }
}
