use crate::error::{SensorError, SensorResult};
use embedded_hal::digital::v2::OutputPin;

/// Anything that needs a one time start before it can measure
pub trait HumiditySensor {
    type Error;

    /// Bring the sensor from power-on into its ready state
    fn begin(&mut self) -> core::result::Result<(), Self::Error>;
}

/// Members of the DHT family, they differ in how often they may be sampled
#[allow(dead_code)]
#[derive(Default, Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum DhtKind {
    Dht11,
    Dht12,
    Dht21,
    #[default]
    Dht22,
}

impl DhtKind {
    /// Minimum gap between two measurements in milliseconds
    pub fn min_interval_ms(&self) -> u32 {
        match self {
            DhtKind::Dht11 | DhtKind::Dht12 => 1000,
            DhtKind::Dht21 | DhtKind::Dht22 => 2000,
        }
    }
}

/// DHT humidity and temperature sensor on a single open drain data line
#[derive(Copy, Clone, Debug)]
pub struct Dht<PIN> {
    pin: PIN,
    kind: DhtKind,
    ready: bool,
}

impl<PIN> Dht<PIN>
where
    PIN: OutputPin,
{
    pub fn new(pin: PIN) -> Self {
        Self {
            pin,
            kind: DhtKind::default(),
            ready: false,
        }
    }

    /// Change the sensor model
    pub fn set_kind(&mut self, kind: DhtKind) {
        self.kind = kind;
    }

    /// Change the sensor model
    pub fn with_kind(mut self, kind: DhtKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn kind(&self) -> DhtKind {
        self.kind
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Give back the data pin
    pub fn release(self) -> PIN {
        self.pin
    }
}

impl<PIN> HumiditySensor for Dht<PIN>
where
    PIN: OutputPin,
{
    type Error = SensorError;

    /// Releases the data line so the sensor sees the bus idle, repeated calls release it again
    fn begin(&mut self) -> SensorResult<()> {
        self.ready = false;
        match self.pin.set_high() {
            Ok(_) => {
                self.ready = true;
                Ok(())
            }
            Err(_) => Err(SensorError::PinError),
        }
    }
}
