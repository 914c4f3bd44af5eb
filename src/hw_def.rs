use crate::types::*;

use crc::{Crc, CRC_8_NRSC_5};

#[cfg(feature = "defmt")]
use defmt::Format;

/// The only I²C address the SHTC3 answers on
pub const DEFAULT_I2C_ADDR: u8 = 0x70;

/// 7-bit I²C address of the device
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct I2cAddr(u8);
impl I2cAddr {
    /// Build an address, rejecting anything wider than 7 bits
    pub const fn new(addr: u8) -> Option<Self> {
        if addr > 0x7F {
            None
        } else {
            Some(Self(addr))
        }
    }
    /// Get the address as a u8
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}
impl Default for I2cAddr {
    fn default() -> Self {
        Self(DEFAULT_I2C_ADDR)
    }
}
impl TryFrom<u8> for I2cAddr {
    type Error = Error<()>;
    fn try_from(addr: u8) -> Result<Self, Self::Error> {
        Self::new(addr).ok_or(Error::InvalidInputData)
    }
}

/// Written once at construction.  The sensor ignores it, and it flushes any half-finished
/// transaction left on the bus.
pub(crate) const CLEAR_SEQUENCE: [u8; 3] = [0x00; 3];

/// Settle time after sleep, wakeup and soft reset
pub(crate) const MODE_TRANSITION_SETTLE_US: u32 = 300;
/// Conversion time of a measurement in low power mode
pub(crate) const LOW_POWER_CONVERSION_MS: u32 = 2;
/// Conversion time of a measurement in normal mode
pub(crate) const NORMAL_CONVERSION_MS: u32 = 14;

/// Bits of the ID register that identify the part
pub const DEVICE_ID_MASK: u16 = 0x083F;
/// Expected value of the ID register under [`DEVICE_ID_MASK`]
pub const DEVICE_ID_SHTC3: u16 = 0x0807;

/// Length of one data word plus its checksum on the wire
pub(crate) const WORD_LEN: usize = 3;
/// Length of a measurement reply
pub(crate) const MEASUREMENT_LEN: usize = 2 * WORD_LEN;

/// Clock stretching during a measurement
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClockStretching {
    /// The sensor NACKs reads until the conversion is done
    Disabled,
    /// The sensor holds SCL low until the conversion is done
    Enabled,
}

/// Repeatability of a measurement
///
/// Low power mode converts faster at the cost of temperature repeatability.  The impact on relative
/// humidity is negligible.
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PowerMode {
    /// full repeatability
    Normal,
    /// reduced repeatability, shorter conversion
    LowPower,
}
impl PowerMode {
    /// Time the sensor needs before a measurement reply is available
    pub const fn conversion_time_ms(self) -> u32 {
        match self {
            PowerMode::Normal => NORMAL_CONVERSION_MS,
            PowerMode::LowPower => LOW_POWER_CONVERSION_MS,
        }
    }
}

/// Which quantity comes first in a measurement reply
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReadOrder {
    /// temperature word, then relative humidity word
    TemperatureFirst,
    /// relative humidity word, then temperature word
    HumidityFirst,
}

/// Command words of the SHTC3, sent MSB first
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u16)]
pub enum Command {
    /// enter sleep
    Sleep = 0xB098,
    /// leave sleep
    Wakeup = 0x3517,
    /// software reset
    SoftReset = 0x805D,
    /// read the ID register
    ReadId = 0xEFC8,

    /// normal mode, temperature first, no clock stretching
    MeasureNormalTempFirst = 0x7866,
    /// normal mode, humidity first, no clock stretching
    MeasureNormalHumidFirst = 0x58E0,
    /// normal mode, temperature first, clock stretching
    MeasureNormalTempFirstStretch = 0x7CA2,
    /// normal mode, humidity first, clock stretching
    MeasureNormalHumidFirstStretch = 0x5C24,
    /// low power mode, temperature first, no clock stretching
    MeasureLowPowerTempFirst = 0x609C,
    /// low power mode, humidity first, no clock stretching
    MeasureLowPowerHumidFirst = 0x401A,
    /// low power mode, temperature first, clock stretching
    MeasureLowPowerTempFirstStretch = 0x6458,
    /// low power mode, humidity first, clock stretching
    MeasureLowPowerHumidFirstStretch = 0x44DE,
}
impl Command {
    /// Measurement command for one combination of the three mode axes
    pub const fn measure(stretch: ClockStretching, power: PowerMode, order: ReadOrder) -> Self {
        use ClockStretching::*;
        use PowerMode::*;
        use ReadOrder::*;
        match (stretch, power, order) {
            (Disabled, Normal, TemperatureFirst) => Command::MeasureNormalTempFirst,
            (Disabled, Normal, HumidityFirst) => Command::MeasureNormalHumidFirst,
            (Disabled, LowPower, TemperatureFirst) => Command::MeasureLowPowerTempFirst,
            (Disabled, LowPower, HumidityFirst) => Command::MeasureLowPowerHumidFirst,
            (Enabled, Normal, TemperatureFirst) => Command::MeasureNormalTempFirstStretch,
            (Enabled, Normal, HumidityFirst) => Command::MeasureNormalHumidFirstStretch,
            (Enabled, LowPower, TemperatureFirst) => Command::MeasureLowPowerTempFirstStretch,
            (Enabled, LowPower, HumidityFirst) => Command::MeasureLowPowerHumidFirstStretch,
        }
    }
    /// Get the 16-bit command word
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
    /// Serialize the command word, high byte first
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.as_u16().to_be_bytes()
    }
}

/// Measurement command selected by plain flags
pub const fn command_word(stretch: bool, low_power: bool, humidity_first: bool) -> Command {
    Command::measure(
        if stretch { ClockStretching::Enabled } else { ClockStretching::Disabled },
        if low_power { PowerMode::LowPower } else { PowerMode::Normal },
        if humidity_first { ReadOrder::HumidityFirst } else { ReadOrder::TemperatureFirst },
    )
}

// poly 0x31, init 0xFF, no reflection, no final xor
const CRC: Crc<u8> = Crc::<u8>::new(&CRC_8_NRSC_5);

/// CRC-8 over the data bytes of one word, as computed by the sensor
pub fn crc8(bytes: &[u8]) -> u8 {
    CRC.checksum(bytes)
}

/// Check one `[msb, lsb, crc]` word and return its value
pub fn decode_word(word: &[u8; WORD_LEN]) -> Result<u16, CrcMismatch> {
    let computed = crc8(&word[..2]);
    if word[2] != computed {
        return Err(CrcMismatch {
            word: [word[0], word[1]],
            received: word[2],
            computed,
        });
    }
    Ok(u16::from_be_bytes([word[0], word[1]]))
}

/// Split a 6-byte measurement reply into temperature and humidity and check both checksums
pub fn decode_measurement(reply: &[u8; MEASUREMENT_LEN], order: ReadOrder) -> Result<RawMeasurement, CrcMismatch> {
    let first = [reply[0], reply[1], reply[2]];
    let second = [reply[3], reply[4], reply[5]];
    let (temp_word, humid_word) = match order {
        ReadOrder::TemperatureFirst => (first, second),
        ReadOrder::HumidityFirst => (second, first),
    };
    let temperature = decode_reply_word(reply, &temp_word, "temperature")?;
    let humidity = decode_reply_word(reply, &humid_word, "humidity")?;
    Ok(RawMeasurement { temperature, humidity })
}

fn decode_reply_word(reply: &[u8; MEASUREMENT_LEN], word: &[u8; WORD_LEN], field: &str) -> Result<u16, CrcMismatch> {
    match decode_word(word) {
        Ok(value) => Ok(value),
        Err(mismatch) => {
            warn!("shtc3::decode_measurement(): {} crc mismatch: reply={:?}, word={:?}, received={}, computed={}",
                field, reply, mismatch.word, mismatch.received, mismatch.computed);
            Err(mismatch)
        }
    }
}

pub(crate) fn raw_temp_to_centigrade(raw: u16) -> f32 {
    (raw as f32 * 175.0) / 65536.0 - 45.0
}

pub(crate) fn raw_temp_to_fahrenheit(raw: u16) -> f32 {
    (raw as f32 * 315.0) / 65536.0 - 49.0
}

pub(crate) fn raw_rel_humid_to_percent(raw: u16) -> f32 {
    (raw as f32 * 100.0) / 65536.0
}
