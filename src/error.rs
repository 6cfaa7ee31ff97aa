#[derive(Debug, PartialEq)]
pub enum Error<I2cError>
where
    I2cError: embedded_hal::i2c::Error,
{
    /// The CRC byte sent with a data word did not match the CRC calculated
    /// over its two data bytes. The whole read is discarded.
    ChecksumMismatch {
        /// Position of the failing word in the read, starting at 0.
        word: usize,
        /// CRC byte as received from the sensor.
        received: u8,
        /// CRC calculated over the received data bytes.
        computed: u8,
    },
    /// Writing to or reading from the I2C bus failed.
    I2c(I2cError),
}

impl<I2cError> From<I2cError> for Error<I2cError>
where
    I2cError: embedded_hal::i2c::Error,
{
    fn from(value: I2cError) -> Self {
        Error::I2c(value)
    }
}

impl<I2cError> core::fmt::Display for Error<I2cError>
where
    I2cError: embedded_hal::i2c::Error,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::ChecksumMismatch {
                word,
                received,
                computed,
            } => write!(
                f,
                "CRC mismatch for word {word}: received {received:#04x}, calculated {computed:#04x}"
            ),
            Error::I2c(e) => write!(f, "Received I2C error: {:?}", e),
        }
    }
}

impl<I> core::error::Error for Error<I> where I: embedded_hal::i2c::Error {}
