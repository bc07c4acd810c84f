//! mozLz4 container codec
//!
//! Firefox stores session and some JSON files as `mozLz40\0` followed by a
//! size-prefixed LZ4 block: a little-endian `u32` with the decompressed
//! length, then the raw block. Anything without the magic is plain content.

use crate::error::{Error, Result};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Magic bytes at the start of every container
pub const MAGIC: &[u8; 8] = b"mozLz40\0";

const SIZE_PREFIX_LEN: usize = 4;

/// Upper bound on how far an LZ4 block can expand per input byte
const MAX_EXPANSION: usize = 255;

/// Whether `bytes` starts with the container magic
pub fn is_container(bytes: &[u8]) -> bool {
    bytes.starts_with(MAGIC)
}

/// Decode a container, or hand back plain content untouched
///
/// # Example
///
/// ```rust
/// use ffprof::{decode, encode};
///
/// let packed = encode(br#"{"windows":[]}"#);
/// assert_eq!(decode(&packed)?.into_owned(), br#"{"windows":[]}"#);
/// assert_eq!(decode(b"plain")?.into_owned(), b"plain");
/// # Ok::<(), ffprof::Error>(())
/// ```
pub fn decode(bytes: &[u8]) -> Result<Cow<'_, [u8]>> {
    let Some(body) = bytes.strip_prefix(MAGIC.as_slice()) else {
        return Ok(Cow::Borrowed(bytes));
    };

    let Some((prefix, block)) = body.split_first_chunk::<SIZE_PREFIX_LEN>() else {
        return Err(Error::CorruptContainer(format!(
            "{} byte body is too short for the size prefix",
            body.len()
        )));
    };
    let size = u32::from_le_bytes(*prefix) as usize;

    let limit = block.len().saturating_mul(MAX_EXPANSION).saturating_add(16);
    if size > limit {
        return Err(Error::CorruptContainer(format!(
            "declared size {size} cannot come from a {} byte block",
            block.len()
        )));
    }

    let plain = lz4_flex::block::decompress(block, size)
        .map_err(|e| Error::CorruptContainer(e.to_string()))?;
    if plain.len() != size {
        return Err(Error::CorruptContainer(format!(
            "block decompressed to {} bytes, expected {size}",
            plain.len()
        )));
    }

    debug!(compressed = bytes.len(), decompressed = size, "decoded container");
    Ok(Cow::Owned(plain))
}

/// Compress `bytes` into a container; the output always carries the magic
pub fn encode(bytes: &[u8]) -> Vec<u8> {
    let block = lz4_flex::block::compress_prepend_size(bytes);
    let mut out = Vec::with_capacity(MAGIC.len() + block.len());
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&block);
    out
}

/// Read a profile file, decoding it if it is a container
pub fn read_decoded(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path)?;
    Ok(decode(&bytes)?.into_owned())
}

/// Write `bytes` to `path` in container form
pub fn write_encoded(path: &Path, bytes: &[u8]) -> Result<()> {
    let packed = encode(bytes);
    fs::write(path, &packed)?;
    debug!(path = %path.display(), plain = bytes.len(), packed = packed.len(), "wrote container");
    Ok(())
}
