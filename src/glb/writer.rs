//! GLB container writer.

use byteorder::{LittleEndian, WriteBytesExt};
use tracing::debug;

use super::format::*;
use crate::util::{Error, Result};

/// Pack a JSON payload and binary pool contents into one GLB container.
///
/// The JSON chunk always comes first in the output stream; binary chunks
/// follow in the order `bins` yields them (pool-ordinal order). Every chunk
/// is padded to a 4-byte boundary before its length is written, so the
/// declared chunk lengths are the padded lengths. Fails with
/// [`Error::PayloadTooLarge`] when a padded chunk length or the container
/// total would overflow a `u32`.
pub fn pack<'a>(json: &[u8], bins: impl IntoIterator<Item = &'a [u8]>) -> Result<Vec<u8>> {
    let json_chunk = make_chunk(CHUNK_JSON, json)?;

    let mut bin_chunks = Vec::new();
    for payload in bins {
        bin_chunks.push(make_chunk(CHUNK_BIN, payload)?);
    }

    let total = HEADER_SIZE
        + json_chunk.len()
        + bin_chunks.iter().map(Vec::len).sum::<usize>();
    if total > u32::MAX as usize {
        return Err(Error::PayloadTooLarge(total));
    }

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(GLB_MAGIC);
    out.write_u32::<LittleEndian>(GLB_VERSION)?;
    out.write_u32::<LittleEndian>(total as u32)?;
    out.extend_from_slice(&json_chunk);
    for chunk in &bin_chunks {
        out.extend_from_slice(chunk);
    }

    debug!(
        "packed GLB container: {} binary chunks, {} bytes total",
        bin_chunks.len(),
        total
    );
    Ok(out)
}

/// Frame one payload as a padded, length-prefixed chunk.
fn make_chunk(tag: u32, payload: &[u8]) -> Result<Vec<u8>> {
    let padded = padded_len(payload.len());
    if padded > u32::MAX as usize {
        return Err(Error::PayloadTooLarge(payload.len()));
    }

    let mut chunk = Vec::with_capacity(CHUNK_HEADER_SIZE + padded);
    chunk.write_u32::<LittleEndian>(padded as u32)?;
    chunk.write_u32::<LittleEndian>(tag)?;
    chunk.extend_from_slice(payload);
    // The 8-byte header keeps 4-byte alignment, so padding the whole chunk
    // pads the payload.
    pad_chunk(&mut chunk);
    Ok(chunk)
}
