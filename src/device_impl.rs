use crate::hw_def::*;
use crate::types::*;

use embedded_hal::{delay::DelayNs, i2c::I2c};

// Command and reply buffers live on the stack of each call; nothing is kept between calls.
impl<I2C, Delay, E> Shtc3<I2C, Delay>
where
    I2C: I2c<Error = E>,
    Delay: DelayNs,
{
    /// Create a new SHTC3 driver instance
    ///
    /// Flushes the bus with a zero sequence the sensor ignores, then reads the ID register as a
    /// liveness probe.  The ID is reported, not validated.
    pub fn new(i2c: I2C, delay: Delay, i2c_addr: I2cAddr) -> Result<Self, Error<E>> {
        let mut shtc3 = Self { i2c, delay, i2c_addr };
        shtc3.i2c.write(shtc3.i2c_addr.as_u8(), &CLEAR_SEQUENCE).map_err(Error::I2c)?;
        let id = shtc3.read_id_unchecked()?;
        debug!("shtc3::new(): device id {}", id);
        if !id.is_shtc3() {
            warn!("shtc3::new(): unexpected device id {}", id);
        }
        Ok(shtc3)
    }

    /// Give back the bus and the delay
    pub fn release(self) -> (I2C, Delay) {
        (self.i2c, self.delay)
    }

    /// Send one command word, MSB first
    pub fn write_command(&mut self, command: Command) -> Result<(), Error<E>> {
        trace!("shtc3::write_command(): {:?}", command);
        if let Err(i2c_err) = self.i2c.write(self.i2c_addr.as_u8(), &command.to_be_bytes()) {
            return Err(Error::I2c(i2c_err));
        }
        Ok(())
    }

    fn command_and_settle(&mut self, command: Command) -> Result<(), Error<E>> {
        self.write_command(command)?;
        self.delay.delay_us(MODE_TRANSITION_SETTLE_US);
        Ok(())
    }

    /// Enter sleep
    pub fn sleep(&mut self) -> Result<(), Error<E>> {
        self.command_and_settle(Command::Sleep)
    }

    /// Leave sleep
    pub fn wakeup(&mut self) -> Result<(), Error<E>> {
        self.command_and_settle(Command::Wakeup)
    }

    /// software reset
    pub fn soft_reset(&mut self) -> Result<(), Error<E>> {
        self.command_and_settle(Command::SoftReset)
    }

    fn read_id_word(&mut self) -> Result<[u8; WORD_LEN], Error<E>> {
        self.write_command(Command::ReadId)?;
        let mut read_buf = [0u8; WORD_LEN];
        self.i2c.read(self.i2c_addr.as_u8(), &mut read_buf).map_err(Error::I2c)?;
        Ok(read_buf)
    }

    /// Read the ID register and check its checksum
    pub fn read_id(&mut self) -> Result<DeviceId, Error<E>> {
        let read_buf = self.read_id_word()?;
        match decode_word(&read_buf) {
            Ok(id) => Ok(DeviceId(id)),
            Err(mismatch) => {
                warn!("shtc3::read_id(): crc mismatch: read_buf={:?}, received={}, computed={}",
                    read_buf, mismatch.received, mismatch.computed);
                Err(Error::CrcMismatch(mismatch))
            }
        }
    }

    /// Read the ID register, ignoring its checksum byte
    pub fn read_id_unchecked(&mut self) -> Result<DeviceId, Error<E>> {
        let read_buf = self.read_id_word()?;
        Ok(DeviceId(u16::from_be_bytes([read_buf[0], read_buf[1]])))
    }

    /// Trigger a measurement and return the checked raw counts
    pub fn measure_raw(&mut self, order: ReadOrder, power: PowerMode, stretch: ClockStretching) -> Result<RawMeasurement, Error<E>> {
        self.write_command(Command::measure(stretch, power, order))?;
        self.delay.delay_ms(power.conversion_time_ms());

        let mut read_buf = [0u8; MEASUREMENT_LEN];
        self.i2c.read(self.i2c_addr.as_u8(), &mut read_buf).map_err(Error::I2c)?;
        trace!("shtc3::measure_raw(): read_buf={:?}", read_buf);
        Ok(decode_measurement(&read_buf, order)?)
    }

    /// Trigger a measurement and convert it
    ///
    /// A checksum failure is not an error here: it yields [`Measurement::SENTINEL`], whose
    /// `valid` flag is cleared.  Bus errors are still returned.
    pub fn measurement(&mut self, order: ReadOrder, power: PowerMode, stretch: ClockStretching) -> Result<Measurement, Error<E>> {
        match self.measure_raw(order, power, stretch) {
            Ok(raw) => Ok(raw.into()),
            Err(Error::CrcMismatch(_)) => Ok(Measurement::SENTINEL),
            Err(e) => Err(e),
        }
    }

    /// Trigger a measurement and convert it, failing on a checksum mismatch
    pub fn measure_checked(&mut self, order: ReadOrder, power: PowerMode, stretch: ClockStretching) -> Result<Measurement, Error<E>> {
        self.measure_raw(order, power, stretch).map(Measurement::from)
    }
}
