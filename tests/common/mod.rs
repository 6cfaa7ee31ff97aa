#![allow(dead_code)]

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};

pub const ADDRESS: u8 = 0x44;

/// Reference implementation of the sensor's CRC, from the `crc` catalogue.
pub const CRC: crc::Crc<u8> = crc::Crc::<u8>::new(&crc::CRC_8_NRSC_5);

/// A data word as the sensor sends it: big-endian, followed by its CRC.
pub fn block(word: u16) -> [u8; 3] {
    let [d0, d1] = word.to_be_bytes();
    [d0, d1, CRC.checksum(&[d0, d1])]
}

/// The six bytes the sensor returns for a single-shot measurement.
pub fn measurement_bytes(temperature: u16, humidity: u16) -> Vec<u8> {
    [block(temperature), block(humidity)].concat()
}

/// Delay that records how long it was asked to wait instead of sleeping.
#[derive(Default)]
pub struct RecordingDelay {
    total_ns: u64,
    calls: usize,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_us(&self) -> u64 {
        self.total_ns / 1_000
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    fn record(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
        self.calls += 1;
    }
}

impl embedded_hal::delay::DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(ns);
    }
}

impl embedded_hal_async::delay::DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.record(ns);
    }
}

/// A bus whose reads deliver only the first `available` bytes of `data`
/// before the transfer fails, as happens when the sensor stops responding
/// part way through.
pub struct ShortReadBus {
    pub data: Vec<u8>,
    pub available: usize,
    pub writes: Vec<Vec<u8>>,
    pub reads: usize,
}

impl ShortReadBus {
    pub fn new(data: Vec<u8>, available: usize) -> Self {
        Self {
            data,
            available,
            writes: Vec::new(),
            reads: 0,
        }
    }
}

impl ErrorType for ShortReadBus {
    type Error = ErrorKind;
}

impl I2c for ShortReadBus {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        assert_eq!(address, ADDRESS);
        for operation in operations {
            match operation {
                Operation::Write(bytes) => self.writes.push(bytes.to_vec()),
                Operation::Read(buffer) => {
                    self.reads += 1;
                    let n = self.available.min(buffer.len());
                    buffer[..n].copy_from_slice(&self.data[..n]);
                    if n < buffer.len() {
                        return Err(ErrorKind::Other);
                    }
                }
            }
        }
        Ok(())
    }
}
