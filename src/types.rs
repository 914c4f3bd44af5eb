use crate::hw_def::*;

use core::fmt;

#[cfg(feature="defmt")]
use defmt::Format;

/// SHTC3 blocking device driver
#[cfg(feature = "blocking")]
#[derive(Debug)]
pub struct Shtc3<I2C, Delay> {
    pub(crate) i2c: I2C,
    pub(crate) delay: Delay,
    pub(crate) i2c_addr: I2cAddr,
}

/// SHTC3 async device driver
#[cfg(feature = "async")]
#[derive(Debug)]
pub struct Shtc3Async<I2C, Delay> {
    pub(crate) i2c: I2C,
    pub(crate) delay: Delay,
    pub(crate) i2c_addr: I2cAddr,
}

/// All possible errors in this crate
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Debug)]
pub enum Error<E> {
    /// I²C communication error
    I2c(E),
    /// Invalid input data provided
    InvalidInputData,
    /// Failure of a checksum from the device was detected
    CrcMismatch(CrcMismatch),
}
impl<E> From<CrcMismatch> for Error<E> {
    fn from(mismatch: CrcMismatch) -> Self {
        Error::CrcMismatch(mismatch)
    }
}

/// Details of a word whose checksum did not match
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CrcMismatch {
    /// data bytes as received, MSB first
    pub word: [u8; 2],
    /// checksum byte as received
    pub received: u8,
    /// checksum computed over `word`
    pub computed: u8,
}
impl fmt::Display for CrcMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "crc mismatch on {:02X}{:02X}: received 0x{:02X}, computed 0x{:02X}",
            self.word[0], self.word[1], self.received, self.computed)
    }
}

/// Raw (still in u16 format) temperature and relative humidity from the device
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RawMeasurement {
    /// unprocessed temperature
    pub temperature: u16,
    /// unprocessed relative humidity
    pub humidity: u16,
}
impl RawMeasurement {
    /// Get temperature in Fahrenheit
    pub fn fahrenheit(&self) -> f32 {
        raw_temp_to_fahrenheit(self.temperature)
    }
    /// Get temperature in Centigrade
    pub fn centigrade(&self) -> f32 {
        raw_temp_to_centigrade(self.temperature)
    }
    /// Get relative humidity in percent
    pub fn humidity_percent(&self) -> f32 {
        raw_rel_humid_to_percent(self.humidity)
    }
}

/// Temperature and relative humidity after conversion
///
/// A reply that failed its checksum is reported as [`Measurement::SENTINEL`]: both values zero and
/// `valid` cleared.  Check [`Measurement::is_valid`] before trusting a zero reading.
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    /// degrees centigrade
    pub temperature: f32,
    /// relative humidity in percent
    pub humidity: f32,
    /// both checksums of the reply matched
    pub valid: bool,
}
impl Measurement {
    /// Value reported for a reply with a bad checksum
    pub const SENTINEL: Self = Self {
        temperature: 0.0,
        humidity: 0.0,
        valid: false,
    };

    /// Whether the reading passed its checksums
    pub fn is_valid(&self) -> bool {
        self.valid
    }
    /// Get temperature in Centigrade
    pub fn centigrade(&self) -> f32 {
        self.temperature
    }
    /// Get temperature in Fahrenheit
    pub fn fahrenheit(&self) -> f32 {
        self.temperature * 9.0 / 5.0 + 32.0
    }
    /// Get relative humidity in percent
    pub fn humidity_percent(&self) -> f32 {
        self.humidity
    }
}
impl From<&RawMeasurement> for Measurement {
    fn from(raw: &RawMeasurement) -> Self {
        Self {
            temperature: raw.centigrade(),
            humidity: raw.humidity_percent(),
            valid: true,
        }
    }
}
impl From<RawMeasurement> for Measurement {
    fn from(raw: RawMeasurement) -> Self {
        (&raw).into()
    }
}

/// Content of the ID register
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeviceId(pub u16);
impl DeviceId {
    /// Get the raw register value
    pub fn raw(&self) -> u16 {
        self.0
    }
    /// The ID register carries the SHTC3 product pattern
    pub fn is_shtc3(&self) -> bool {
        self.0 & DEVICE_ID_MASK == DEVICE_ID_SHTC3
    }
}
impl From<u16> for DeviceId {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}
impl From<DeviceId> for u16 {
    fn from(id: DeviceId) -> Self {
        id.0
    }
}
impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn measurement_from_raw() {
        let m = Measurement::from(RawMeasurement { temperature: 0x6666, humidity: 0x8000 });
        assert!(m.is_valid());
        assert!(approx_eq!(f32, m.centigrade(), 25.0, epsilon = 0.01));
        assert!(approx_eq!(f32, m.fahrenheit(), 77.0, epsilon = 0.01));
        assert!(approx_eq!(f32, m.humidity_percent(), 50.0, epsilon = 0.01));
    }

    #[test]
    fn raw_fahrenheit_agrees_with_converted() {
        let raw = RawMeasurement { temperature: 0x5F5C, humidity: 0 };
        let m = Measurement::from(&raw);
        assert!(approx_eq!(f32, raw.fahrenheit(), m.fahrenheit(), epsilon = 0.01));
    }

    #[test]
    fn sentinel_is_zero_and_invalid() {
        assert_eq!(Measurement::SENTINEL.temperature, 0.0);
        assert_eq!(Measurement::SENTINEL.humidity, 0.0);
        assert!(!Measurement::SENTINEL.is_valid());
    }

    #[test]
    fn device_id_pattern() {
        assert!(DeviceId(0x0887).is_shtc3());
        assert!(DeviceId(0x0807).is_shtc3());
        assert!(!DeviceId(0x0000).is_shtc3());
        assert!(!DeviceId(0x0886).is_shtc3());
        assert_eq!(std::format!("{}", DeviceId(0x0887)), "0x0887");
    }

    #[test]
    fn crc_mismatch_display() {
        let mismatch = CrcMismatch { word: [0x80, 0x00], received: 0xA3, computed: 0xA2 };
        assert_eq!(
            std::format!("{mismatch}"),
            "crc mismatch on 8000: received 0xA3, computed 0xA2"
        );
    }
}
