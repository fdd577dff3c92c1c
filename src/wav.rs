//! WAV container access through `hound`.
//!
//! Samples are handled as one flat, interleaved `i16` sequence; channel layout
//! is carried along in the [`WavSpec`] and written back untouched.

use crate::error::{Result, StegoError};
pub use hound::WavSpec;
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// Summary of a carrier file, used by the `info` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioInfo {
    pub channels: u16,
    pub sample_rate: u32,
    /// Total interleaved samples across all channels
    pub samples: usize,
}

impl AudioInfo {
    pub fn new(spec: &WavSpec, samples: usize) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            samples,
        }
    }

    pub fn duration_secs(&self) -> f64 {
        let frames = self.samples / self.channels.max(1) as usize;
        if self.sample_rate == 0 {
            return 0.0;
        }
        frames as f64 / self.sample_rate as f64
    }
}

fn invalid(path: &Path, reason: impl std::fmt::Display) -> StegoError {
    StegoError::InvalidAudioFile(format!("{}: {}", path.display(), reason))
}

fn check_format(spec: &WavSpec) -> std::result::Result<(), String> {
    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(format!(
            "unsupported sample format ({} bit {:?}), only 16-bit PCM is supported",
            spec.bits_per_sample, spec.sample_format
        ));
    }
    Ok(())
}

/// Read every sample of a 16-bit PCM WAV file
pub fn read_samples<P: AsRef<Path>>(path: P) -> Result<(Vec<i16>, WavSpec)> {
    let path = path.as_ref();
    let mut reader = WavReader::open(path).map_err(|e| invalid(path, e))?;
    let spec = reader.spec();
    check_format(&spec).map_err(|e| invalid(path, e))?;

    let samples = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| invalid(path, e))?;

    tracing::debug!(
        path = %path.display(),
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        samples = samples.len(),
        "read wav"
    );
    Ok((samples, spec))
}

/// Write samples with the given format
pub fn write_samples<P: AsRef<Path>>(path: P, spec: WavSpec, samples: &[i16]) -> Result<()> {
    let path = path.as_ref();
    check_format(&spec).map_err(|e| invalid(path, e))?;

    let mut writer = WavWriter::create(path, spec).map_err(|e| invalid(path, e))?;
    for &sample in samples {
        writer.write_sample(sample).map_err(|e| invalid(path, e))?;
    }
    writer.finalize().map_err(|e| invalid(path, e))?;

    tracing::debug!(path = %path.display(), samples = samples.len(), "wrote wav");
    Ok(())
}

/// Read only the header and sample count
pub fn probe<P: AsRef<Path>>(path: P) -> Result<AudioInfo> {
    let path = path.as_ref();
    let reader = WavReader::open(path).map_err(|e| invalid(path, e))?;
    let spec = reader.spec();
    check_format(&spec).map_err(|e| invalid(path, e))?;
    // `len` counts interleaved samples, not frames
    Ok(AudioInfo::new(&spec, reader.len() as usize))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::tempdir;

    pub(crate) fn mono_spec() -> WavSpec {
        WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        }
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let spec = WavSpec {
            channels: 2,
            ..mono_spec()
        };
        let samples: Vec<i16> = (0..200).map(|i| (i * 97 - 9000) as i16).collect();

        write_samples(&path, spec, &samples).unwrap();
        let (read, read_spec) = read_samples(&path).unwrap();

        assert_eq!(read, samples);
        assert_eq!(read_spec, spec);

        let info = probe(&path).unwrap();
        assert_eq!(info.samples, 200);
        assert_eq!(info.channels, 2);
        assert!((info.duration_secs() - 100.0 / 8000.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_wav() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("junk.wav");
        std::fs::write(&path, b"definitely not a riff file").unwrap();
        assert!(matches!(
            read_samples(&path),
            Err(StegoError::InvalidAudioFile(_))
        ));
    }

    #[test]
    fn test_rejects_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            read_samples(dir.path().join("missing.wav")),
            Err(StegoError::InvalidAudioFile(_))
        ));
    }

    #[test]
    fn test_rejects_float_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("float.wav");
        let spec = WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        writer.write_sample(0.5f32).unwrap();
        writer.finalize().unwrap();

        let err = read_samples(&path).unwrap_err();
        assert!(err.to_string().contains("16-bit"));
    }

    #[test]
    fn test_write_rejects_wrong_spec() {
        let dir = tempdir().unwrap();
        let spec = WavSpec {
            bits_per_sample: 8,
            ..mono_spec()
        };
        assert!(write_samples(dir.path().join("x.wav"), spec, &[0, 1]).is_err());
    }
}
