use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::common::{BLOCK_SIZE, words_from_blocks};
use crate::error::Error;
use crate::types::{
    Command, Config, DEFAULT_ADDRESS, Precision, RawMeasurement, Reading, SOFT_RESET_TIME_US,
    TemperatureUnit,
};

/// Async version of [`crate::blocking::Sht3x`].
///
/// Waits for the measurement and power-up times are suspension points
/// rather than blocking sleeps, but last at least as long.
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

    pub fn last_command(&self) -> Option<Command> {
        self.last_command
    }

    pub fn last_precision(&self) -> Option<Precision> {
        self.last_precision
    }

    pub async fn soft_reset<I: I2c>(
        &mut self,
        i2c: &mut I,
        mut delay: impl DelayNs,
    ) -> Result<(), Error<I::Error>> {
        debug!("Reset sensor...");
        let command = Command::SoftReset;
        i2c.write(self.address, &command.bytes()).await?;
        self.last_command = Some(command);
        delay.delay_us(SOFT_RESET_TIME_US).await;
        Ok(())
    }

    pub async fn initiate_measurement<I: I2c>(
        &mut self,
        i2c: &mut I,
        mut delay: impl DelayNs,
        precision: Precision,
    ) -> Result<(), Error<I::Error>> {
        let command = Command::single_shot(precision);
        i2c.write(self.address, &command.bytes()).await?;
        self.last_command = Some(command);
        self.last_precision = Some(precision);
        delay.delay_us(precision.measurement_time_us()).await;
        Ok(())
    }

    /// See [`crate::blocking::Sht3x::read_words`].
    pub async fn read_words<const N: usize, I: I2c>(
        &mut self,
        i2c: &mut I,
    ) -> Result<[u16; N], Error<I::Error>> {
        let mut blocks = [[0u8; BLOCK_SIZE]; N];
        i2c.read(self.address, blocks.as_flattened_mut()).await?;
        words_from_blocks(blocks)
    }

    pub async fn read_uncompensated<I: I2c>(
        &mut self,
        i2c: &mut I,
        delay: impl DelayNs,
        precision: Precision,
    ) -> Result<RawMeasurement, Error<I::Error>> {
        debug!("Measuring temperature and humidity ({:?})...", precision);
        self.initiate_measurement(i2c, delay, precision).await?;
        let [temperature, humidity] = self.read_words::<2, _>(i2c).await?;
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
    pub async fn measure<I: I2c>(
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
        .await
    }

    /// Measure temperature and humidity with the given settings.
    pub async fn measure_with_settings<I: I2c>(
        &mut self,
        i2c: &mut I,
        delay: impl DelayNs,
        precision: Precision,
        temperature_unit: TemperatureUnit,
    ) -> Result<Reading, Error<I::Error>> {
        let raw = self.read_uncompensated(i2c, delay, precision).await?;
        Ok(raw.to_reading(temperature_unit))
    }

    pub async fn read_celsius_and_humidity<I: I2c>(
        &mut self,
        i2c: &mut I,
        delay: impl DelayNs,
        precision: Precision,
    ) -> Result<(f32, f32), Error<I::Error>> {
        let raw = self.read_uncompensated(i2c, delay, precision).await?;
        Ok((raw.celsius(), raw.humidity()))
    }

    pub async fn read_fahrenheit_and_humidity<I: I2c>(
        &mut self,
        i2c: &mut I,
        delay: impl DelayNs,
        precision: Precision,
    ) -> Result<(f32, f32), Error<I::Error>> {
        let raw = self.read_uncompensated(i2c, delay, precision).await?;
        Ok((raw.fahrenheit(), raw.humidity()))
    }
}

impl Default for Sht3x {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
