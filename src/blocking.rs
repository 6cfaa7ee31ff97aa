use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::common::{BLOCK_SIZE, words_from_blocks};
use crate::error::Error;
use crate::types::{
    Command, Config, DEFAULT_ADDRESS, Precision, RawMeasurement, Reading, SOFT_RESET_TIME_US,
    TemperatureUnit,
};

/// A single SHT3x sensor on an I2C bus.
///
/// The struct does not own the bus. Each method borrows the bus for the
/// duration of the call, so anything sharing the bus with other code must
/// make sure nothing else talks to this sensor's address between the
/// measurement command and the read.
pub struct Sht3x {
    pub address: SevenBitAddress,
    pub config: Config,
    last_command: Option<Command>,
    last_precision: Option<Precision>,
}

impl Sht3x {
    pub fn new(config: Config) -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            config,
            last_command: None,
            last_precision: None,
        }
    }

    /// The last command successfully written to the sensor.
    pub fn last_command(&self) -> Option<Command> {
        self.last_command
    }

    /// The precision of the last measurement successfully started.
    pub fn last_precision(&self) -> Option<Precision> {
        self.last_precision
    }

    /// Reboot the sensor and wait for it to power up again.
    pub fn soft_reset<I: I2c>(
        &mut self,
        i2c: &mut I,
        mut delay: impl DelayNs,
    ) -> Result<(), Error<I::Error>> {
        debug!("Reset sensor...");
        let command = Command::SoftReset;
        i2c.write(self.address, &command.bytes())?;
        self.last_command = Some(command);
        delay.delay_us(SOFT_RESET_TIME_US);
        Ok(())
    }

    /// Start a single-shot measurement and wait until it has completed.
    ///
    /// The wait is always the full measurement time for `precision`, even
    /// if the bus itself was slow. Nothing is waited for if the write fails.
    pub fn initiate_measurement<I: I2c>(
        &mut self,
        i2c: &mut I,
        mut delay: impl DelayNs,
        precision: Precision,
    ) -> Result<(), Error<I::Error>> {
        let command = Command::single_shot(precision);
        i2c.write(self.address, &command.bytes())?;
        self.last_command = Some(command);
        self.last_precision = Some(precision);
        delay.delay_us(precision.measurement_time_us());
        Ok(())
    }

    /// Read `N` data words from the sensor, verifying the CRC of each.
    ///
    /// All `N * 3` bytes are read in one transfer. If any word fails CRC
    /// verification the whole read is rejected.
    ///
    /// This must follow [`Sht3x::initiate_measurement`]. Reading at any
    /// other time leaves it to the sensor what (if anything) is returned.
    pub fn read_words<const N: usize, I: I2c>(
        &mut self,
        i2c: &mut I,
    ) -> Result<[u16; N], Error<I::Error>> {
        let mut blocks = [[0u8; BLOCK_SIZE]; N];
        i2c.read(self.address, blocks.as_flattened_mut())?;
        words_from_blocks(blocks)
    }

    /// Measure and return the raw temperature and humidity words.
    pub fn read_uncompensated<I: I2c>(
        &mut self,
        i2c: &mut I,
        delay: impl DelayNs,
        precision: Precision,
    ) -> Result<RawMeasurement, Error<I::Error>> {
        debug!("Measuring temperature and humidity ({:?})...", precision);
        self.initiate_measurement(i2c, delay, precision)?;
        let [temperature, humidity] = self.read_words::<2, _>(i2c)?;
        debug!(
            "Temperature and humidity uncompensated = {}, {}",
            temperature,
            humidity
        );
        Ok(RawMeasurement {
            temperature,
            humidity,
        })
    }

    /// Measure temperature and humidity with the settings provided upon
    /// construction of the sensor struct.
    pub fn measure<I: I2c>(
        &mut self,
        i2c: &mut I,
        delay: impl DelayNs,
    ) -> Result<Reading, Error<I::Error>> {
        self.measure_with_settings(
            i2c,
            delay,
            self.config.precision,
            self.config.temperature_unit,
        )
    }

    /// Measure temperature and humidity with the given settings.
    pub fn measure_with_settings<I: I2c>(
        &mut self,
        i2c: &mut I,
        delay: impl DelayNs,
        precision: Precision,
        temperature_unit: TemperatureUnit,
    ) -> Result<Reading, Error<I::Error>> {
        let raw = self.read_uncompensated(i2c, delay, precision)?;
        Ok(raw.to_reading(temperature_unit))
    }

    /// Measure and return the temperature in celsius and the relative
    /// humidity in percent.
    pub fn read_celsius_and_humidity<I: I2c>(
        &mut self,
        i2c: &mut I,
        delay: impl DelayNs,
        precision: Precision,
    ) -> Result<(f32, f32), Error<I::Error>> {
        let raw = self.read_uncompensated(i2c, delay, precision)?;
        Ok((raw.celsius(), raw.humidity()))
    }

    /// Measure and return the temperature in fahrenheit and the relative
    /// humidity in percent.
    pub fn read_fahrenheit_and_humidity<I: I2c>(
        &mut self,
        i2c: &mut I,
        delay: impl DelayNs,
        precision: Precision,
    ) -> Result<(f32, f32), Error<I::Error>> {
        let raw = self.read_uncompensated(i2c, delay, precision)?;
        Ok((raw.fahrenheit(), raw.humidity()))
    }
}

impl Default for Sht3x {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
