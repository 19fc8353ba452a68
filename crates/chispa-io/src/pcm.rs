//! Headerless 16-bit little-endian PCM.
//!
//! The simplest thing an engine or a tool like `aplay -f S16_LE` can load.
//! There is no header, so the consumer must know the rate (the render's
//! `samples_per_second`) and that the data is mono.

use crate::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Write samples as little-endian `i16` to `writer`.
pub fn write_pcm_i16<W: Write>(mut writer: W, samples: &[i16]) -> Result<()> {
    for sample in samples {
        writer.write_all(&sample.to_le_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write samples as raw PCM.
pub fn write_pcm_file<P: AsRef<Path>>(path: P, samples: &[i16]) -> Result<()> {
    let path = path.as_ref();
    write_pcm_i16(BufWriter::new(File::create(path)?), samples)?;
    tracing::debug!(path = %path.display(), samples = samples.len(), "wrote raw pcm");
    Ok(())
}

/// Read little-endian `i16` samples until end of input.
///
/// An odd number of bytes is reported as [`Error::TruncatedPcm`].
pub fn read_pcm_i16<R: Read>(mut reader: R) -> Result<Vec<i16>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let chunks = bytes.chunks_exact(2);
    let trailing = chunks.remainder().len();
    if trailing != 0 {
        return Err(Error::TruncatedPcm(trailing));
    }
    Ok(chunks
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}
