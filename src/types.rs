use embedded_hal::i2c::SevenBitAddress;

/// I2C address of the sensor with its ADDR pin connected to ground.
///
/// Parts with ADDR pulled high respond on 0x45 instead; set the `address`
/// field on the sensor struct to use it.
pub const DEFAULT_ADDRESS: SevenBitAddress = 0x44;

/// Time for the sensor to come back up after a soft reset, in microseconds.
pub const SOFT_RESET_TIME_US: u32 = 1_500;

/// Level of repeatability with which to read the sensor.
///
/// Lower repeatability readings complete faster but consecutive readings
/// will have a wider distribution. See table 4 of the [datasheet] for the
/// repeatability figures and section 2.2 for timings.
///
/// [datasheet]: https://sensirion.com/media/documents/213E6A3B/63A5A569/Datasheet_SHT3x_DIS.pdf
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Precision {
    /// Low repeatability: 0.15°C and 0.21%RH.
    Low,
    /// Medium repeatability: 0.08°C and 0.15%RH.
    Medium,
    /// High repeatability: 0.04°C and 0.08%RH.
    High,
}

impl Precision {
    /// Minimum time in microseconds to wait after starting a measurement
    /// before the result can be read.
    ///
    /// These are the maximum measurement durations from the datasheet, so
    /// the data is always ready once the wait has elapsed.
    pub const fn measurement_time_us(self) -> u32 {
        match self {
            Precision::Low => 4_500,
            Precision::Medium => 6_500,
            Precision::High => 15_500,
        }
    }
}

impl core::fmt::Display for Precision {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Precision::Low => "low",
            Precision::Medium => "medium",
            Precision::High => "high",
        };
        write!(f, "{name} repeatability")
    }
}

/// Whether the sensor holds the clock line low until a measurement is ready.
///
/// The driver always uses [`ClockStretching::Disabled`] and waits for the
/// measurement time itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockStretching {
    Enabled,
    Disabled,
}

/// Commands understood by the sensor.
///
/// Only single-shot measurements without clock stretching and the soft
/// reset are issued by the driver. The rest are listed so that the command
/// table is complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Measure temperature and humidity once, then go idle.
    SingleShot(Precision, ClockStretching),
    /// Fetch the latest result in periodic acquisition mode.
    PeriodicFetch,
    /// Start periodic acquisition at 4Hz with faster response time.
    AcceleratedResponseTime,
    /// Stop periodic acquisition and return to single-shot mode.
    Break,
    /// Reboot the sensor without cycling its power.
    SoftReset,
}

impl Command {
    /// Command bytes in the order they are sent on the bus.
    pub const fn bytes(self) -> [u8; 2] {
        use ClockStretching::{Disabled, Enabled};
        use Precision::{High, Low, Medium};

        match self {
            Command::SingleShot(High, Enabled) => [0x2C, 0x06],
            Command::SingleShot(Medium, Enabled) => [0x2C, 0x0D],
            Command::SingleShot(Low, Enabled) => [0x2C, 0x10],
            Command::SingleShot(High, Disabled) => [0x24, 0x00],
            Command::SingleShot(Medium, Disabled) => [0x24, 0x0B],
            Command::SingleShot(Low, Disabled) => [0x24, 0x16],
            Command::PeriodicFetch => [0xE0, 0x00],
            Command::AcceleratedResponseTime => [0x2B, 0x32],
            Command::Break => [0x30, 0x93],
            Command::SoftReset => [0x30, 0xA2],
        }
    }

    /// Single-shot measurement command the driver issues for `precision`.
    pub const fn single_shot(precision: Precision) -> Self {
        Command::SingleShot(precision, ClockStretching::Disabled)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn convert_reading(&self, reading: u16) -> f32 {
        match self {
            TemperatureUnit::Celsius => crate::conversions::temperature_reading_to_celsius(reading),
            TemperatureUnit::Fahrenheit => {
                crate::conversions::temperature_reading_to_fahrenheit(reading)
            }
        }
    }
}

/// Settings used by `measure`.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub precision: Precision,
    pub temperature_unit: TemperatureUnit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: Precision::High,
            temperature_unit: TemperatureUnit::Celsius,
        }
    }
}

/// Raw temperature and humidity words from one single-shot measurement,
/// after CRC verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawMeasurement {
    pub temperature: u16,
    pub humidity: u16,
}

impl RawMeasurement {
    pub fn celsius(&self) -> f32 {
        crate::conversions::temperature_reading_to_celsius(self.temperature)
    }

    pub fn fahrenheit(&self) -> f32 {
        crate::conversions::temperature_reading_to_fahrenheit(self.temperature)
    }

    pub fn humidity(&self) -> f32 {
        crate::conversions::humidity_reading_to_percent_rh(self.humidity)
    }

    /// Convert both words, giving the temperature in `unit`.
    pub fn to_reading(&self, unit: TemperatureUnit) -> Reading {
        Reading {
            temperature: unit.convert_reading(self.temperature),
            temperature_unit: unit,
            humidity: self.humidity(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Temperature converted from the raw sensor reading using the formulas
    /// in section 4.13 of the SHT3x datasheet, rounded to two decimal places.
    pub temperature: f32,
    pub temperature_unit: TemperatureUnit,
    /// Percent relative humidity, rounded to two decimal places.
    pub humidity: f32,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_shot_commands() {
        use ClockStretching::{Disabled, Enabled};

        let table = [
            (Command::SingleShot(Precision::High, Enabled), [0x2C, 0x06]),
            (Command::SingleShot(Precision::Medium, Enabled), [0x2C, 0x0D]),
            (Command::SingleShot(Precision::Low, Enabled), [0x2C, 0x10]),
            (Command::SingleShot(Precision::High, Disabled), [0x24, 0x00]),
            (Command::SingleShot(Precision::Medium, Disabled), [0x24, 0x0B]),
            (Command::SingleShot(Precision::Low, Disabled), [0x24, 0x16]),
        ];
        for (command, bytes) in table {
            assert_eq!(command.bytes(), bytes);
        }
    }

    #[test]
    fn other_commands() {
        assert_eq!(Command::PeriodicFetch.bytes(), [0xE0, 0x00]);
        assert_eq!(Command::AcceleratedResponseTime.bytes(), [0x2B, 0x32]);
        assert_eq!(Command::Break.bytes(), [0x30, 0x93]);
        assert_eq!(Command::SoftReset.bytes(), [0x30, 0xA2]);
    }

    #[test]
    fn driver_measures_without_clock_stretching() {
        assert_eq!(Command::single_shot(Precision::Low).bytes(), [0x24, 0x16]);
        assert_eq!(Command::single_shot(Precision::Medium).bytes(), [0x24, 0x0B]);
        assert_eq!(Command::single_shot(Precision::High).bytes(), [0x24, 0x00]);
    }

    #[test]
    fn measurement_times() {
        assert_eq!(Precision::Low.measurement_time_us(), 4_500);
        assert_eq!(Precision::Medium.measurement_time_us(), 6_500);
        assert_eq!(Precision::High.measurement_time_us(), 15_500);
    }

    #[test]
    fn raw_measurement_to_reading() {
        let raw = RawMeasurement {
            temperature: 0x6666,
            humidity: 0x8000,
        };
        assert_eq!(
            raw.to_reading(TemperatureUnit::Celsius),
            Reading {
                temperature: 25.0,
                temperature_unit: TemperatureUnit::Celsius,
                humidity: 50.0,
            }
        );
        assert_eq!(raw.to_reading(TemperatureUnit::Fahrenheit).temperature, 77.0);
    }
}
