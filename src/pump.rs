use std::io::{self, Read, Write};

use log::{debug, info};

use crate::error::{FilterError, Result};
use crate::filter::ExtendedColorFilter;

/// Matches the buffer size of `std::io::copy`.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// Feeds `reader` through `filter` one read at a time.
///
/// Every non-empty read becomes exactly one transform call, so `chunk_size`
/// decides where an escape sequence can be split. The sink is flushed once
/// the reader is exhausted. Returns the number of input bytes consumed.
///
/// # Errors
///
/// [`FilterError::InvalidChunkSize`] for a zero `chunk_size`,
/// [`FilterError::Read`] if the reader fails, and [`FilterError::Sink`] if
/// the sink rejects a write or the final flush.
pub fn pump<R, W>(reader: &mut R, filter: &mut ExtendedColorFilter<W>, chunk_size: usize) -> Result<u64>
where
    R: Read + ?Sized,
    W: Write,
{
    if chunk_size == 0 {
        return Err(FilterError::InvalidChunkSize);
    }

    let mut buffer = vec![0u8; chunk_size];
    let mut total: u64 = 0;
    let mut chunks: u64 = 0;

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(FilterError::Read(err)),
        };
        filter.transform(&buffer[..n])?;
        total += n as u64;
        chunks += 1;
    }

    filter.flush().map_err(FilterError::Sink)?;
    debug!("Pumped {} bytes in {} chunks", total, chunks);
    if chunks > 1 {
        info!("Input was split into {} chunks; sequences crossing a boundary are not flagged", chunks);
    }
    Ok(total)
}
