//! Sensor readings to celsius, fahrenheit and percent relative humidity.
//!
//! These functions are used by the methods on [`RawMeasurement`] but are
//! provided here should you need to use them on words from elsewhere.
//!
//! All conversion formulas can be found in section 4.13 of the [datasheet].
//! Every result is rounded to two decimal places, half away from zero.
//!
//! The conversions in the root of this module work with and return `f32`s.
//! If you prefer to work with fixed- rather than floating-point numbers,
//! use the `fixed` feature and the [`fixed_point`] submodule.
//!
//! [`RawMeasurement`]: crate::types::RawMeasurement
//! [datasheet]: https://sensirion.com/media/documents/213E6A3B/63A5A569/Datasheet_SHT3x_DIS.pdf

/// Full-scale raw reading, 2^16 - 1.
const FULL_SCALE: f32 = 65_535.0;

/// Round to two decimal places, with halves rounded away from zero.
///
/// `f32::round` is not available in `core`, so the rounding is done by
/// truncating towards zero after offsetting by a half.
fn round_to_hundredths(value: f32) -> f32 {
    let scaled = value * 100.0;
    let offset = if scaled < 0.0 { -0.5 } else { 0.5 };
    let rounded = (scaled + offset) as i32;
    rounded as f32 / 100.0
}

/// Convert the raw humidity reading to percent relative humidity.
pub fn humidity_reading_to_percent_rh(reading: u16) -> f32 {
    let s_rh: f32 = reading.into();
    round_to_hundredths(s_rh * 100.0 / FULL_SCALE)
}

/// Convert the raw temperature reading to celsius.
pub fn temperature_reading_to_celsius(reading: u16) -> f32 {
    let s_t: f32 = reading.into();
    round_to_hundredths(s_t * 175.0 / FULL_SCALE - 45.0)
}

/// Convert the raw temperature reading to fahrenheit.
///
/// This is the datasheet's own fahrenheit transfer function rather than a
/// conversion from the celsius value.
pub fn temperature_reading_to_fahrenheit(reading: u16) -> f32 {
    let s_t: f32 = reading.into();
    round_to_hundredths(s_t * 315.0 / FULL_SCALE - 49.0)
}

/// Fixed-point numeric conversions from sensor readings.
///
/// The functions in this module are the same as those in the parent
/// `conversions` module, except that they operate with fixed-point numbers
/// rather than floating-point numbers.
///
/// Part of the conversion formula involves converting the reading (a `u16`)
/// into a fraction of `u16::MAX` (between 0 and 1). By using a numeric
/// type with 16 bits for the fractional portion, we avoid the precision
/// loss of multiplying the reading up before dividing.
///
/// Results are rounded to the nearest hundredth, which is then held to the
/// nearest 1/65536 that `I16F16` can represent.
#[cfg(feature = "fixed")]
pub mod fixed_point {
    use fixed::types::{I16F16, U16F16};

    fn fraction_of_full_scale(reading: u16) -> I16F16 {
        let fraction: U16F16 = U16F16::from_num(reading) / U16F16::from_num(u16::MAX);
        I16F16::from_num(fraction)
    }

    fn round_to_hundredths(value: I16F16) -> I16F16 {
        let hundred = I16F16::from_num(100);
        (value * hundred).round() / hundred
    }

    /// Convert the raw humidity reading to percent relative humidity.
    pub fn humidity_reading_to_percent_rh(reading: u16) -> I16F16 {
        round_to_hundredths(I16F16::from_num(100) * fraction_of_full_scale(reading))
    }

    /// Convert the raw temperature reading to celsius.
    pub fn temperature_reading_to_celsius(reading: u16) -> I16F16 {
        round_to_hundredths(
            I16F16::from_num(175) * fraction_of_full_scale(reading) - I16F16::from_num(45),
        )
    }

    /// Convert the raw temperature reading to fahrenheit.
    pub fn temperature_reading_to_fahrenheit(reading: u16) -> I16F16 {
        round_to_hundredths(
            I16F16::from_num(315) * fraction_of_full_scale(reading) - I16F16::from_num(49),
        )
    }

}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn celsius_boundaries() {
        assert_eq!(temperature_reading_to_celsius(0x0000), -45.0);
        assert_eq!(temperature_reading_to_celsius(0xFFFF), 130.0);
    }

    #[test]
    fn fahrenheit_boundaries() {
        assert_eq!(temperature_reading_to_fahrenheit(0x0000), -49.0);
        assert_eq!(temperature_reading_to_fahrenheit(0xFFFF), 266.0);
    }

    #[test]
    fn humidity_boundaries() {
        assert_eq!(humidity_reading_to_percent_rh(0x0000), 0.0);
        assert_eq!(humidity_reading_to_percent_rh(0xFFFF), 100.0);
    }

    #[test]
    fn room_conditions() {
        // 26214 * 175 / 65535 - 45 is exactly 25.
        assert_eq!(temperature_reading_to_celsius(0x6666), 25.0);
        // 32768 * 100 / 65535 is 50.00076...
        assert_eq!(humidity_reading_to_percent_rh(0x8000), 50.0);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to_hundredths(1.004), 1.0);
        assert_eq!(round_to_hundredths(1.006), 1.01);
        assert_eq!(round_to_hundredths(-1.006), -1.01);
        assert_eq!(round_to_hundredths(-0.001), 0.0);
    }

    #[test]
    fn results_have_at_most_two_decimals() {
        for reading in (0..=u16::MAX).step_by(97) {
            for value in [
                temperature_reading_to_celsius(reading),
                temperature_reading_to_fahrenheit(reading),
                humidity_reading_to_percent_rh(reading),
            ] {
                let hundredths = value * 100.0;
                let nearest = (hundredths + if hundredths < 0.0 { -0.5 } else { 0.5 }) as i32;
                let error = hundredths - nearest as f32;
                assert!(error < 0.01 && error > -0.01);
            }
        }
    }
}
