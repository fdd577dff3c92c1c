/// Least-significant-bit embedding over 16-bit PCM samples
/// Only bit 0 of each sample is touched; all higher bits are preserved exactly

use crate::bitstream::Bitstream;
use crate::error::{Result, StegoError};
use crate::progress::{ProgressFn, ProgressReporter};

/// Number of bits a sample buffer can carry (one per sample)
pub fn capacity(samples: &[i16]) -> usize {
    samples.len()
}

/// Write `bits` into the LSBs of a copy of `samples`
///
/// Capacity is checked before anything is written, so on error no output exists.
/// Samples past the end of the bitstream are copied unchanged.
pub fn embed(samples: &[i16], bits: &[u8], progress: Option<ProgressFn<'_>>) -> Result<Vec<i16>> {
    let capacity = capacity(samples);
    if bits.len() > capacity {
        return Err(StegoError::MessageTooLong {
            capacity,
            required: bits.len(),
        });
    }

    let mut reporter = ProgressReporter::new(progress, bits.len());
    let mut stego = samples.to_vec();
    for (i, (sample, &bit)) in stego.iter_mut().zip(bits).enumerate() {
        *sample = (*sample & !1) | (bit != 0) as i16;
        reporter.update(i + 1);
    }
    reporter.finish();

    Ok(stego)
}

/// Read the LSB of every sample, in order
pub fn extract(samples: &[i16], progress: Option<ProgressFn<'_>>) -> Bitstream {
    let mut reporter = ProgressReporter::new(progress, samples.len());
    let mut bits = Bitstream::with_capacity(samples.len());
    for (i, &sample) in samples.iter().enumerate() {
        bits.push(sample & 1 == 1);
        reporter.update(i + 1);
    }
    reporter.finish();
    bits
}
