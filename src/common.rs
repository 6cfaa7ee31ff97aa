use crate::crc::{SEED, checksum};
use crate::error::Error;

/// Bytes on the wire for each data word: two data bytes, then their CRC.
pub(crate) const BLOCK_SIZE: usize = 3;

/// One data word as read from the sensor, so that the data bytes may only
/// be accessed after passing CRC verification.
#[derive(Clone, Copy)]
pub(crate) struct DataBlock([u8; BLOCK_SIZE]);

impl DataBlock {
    /// Return the big-endian data word if its CRC byte is valid, otherwise
    /// return the received and calculated CRC values.
    pub(crate) fn verified_word(self) -> Result<u16, (u8, u8)> {
        let [d0, d1, received] = self.0;
        let computed = checksum(SEED, [d0, d1]);
        if received == computed {
            trace!(
                "CRCs verified: received {:#x} = calculated {:#x}",
                received,
                computed
            );
            Ok(u16::from_be_bytes([d0, d1]))
        } else {
            Err((received, computed))
        }
    }
}

/// Verify each block read from the sensor and return the data words in the
/// order they were read.
///
/// Fails on the first block with a bad CRC; no words are returned at all in
/// that case.
pub(crate) fn words_from_blocks<const N: usize, I>(
    blocks: [[u8; BLOCK_SIZE]; N],
) -> Result<[u16; N], Error<I>>
where
    I: embedded_hal::i2c::Error,
{
    let mut words = [0u16; N];
    for (index, (word, block)) in words.iter_mut().zip(blocks).enumerate() {
        *word = DataBlock(block)
            .verified_word()
            .map_err(|(received, computed)| {
                debug!(
                    "CRC mismatch for word {}: received {:#x}, calculated {:#x}",
                    index,
                    received,
                    computed
                );
                Error::ChecksumMismatch {
                    word: index,
                    received,
                    computed,
                }
            })?;
    }
    Ok(words)
}
