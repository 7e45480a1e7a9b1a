use std::ops::Range;

use memchr::memchr;

use crate::utils::constants::RECORD_TERMINATOR;

/// Split `[0, data.len())` into exactly `workers` contiguous, non-overlapping
/// ranges whose union covers the whole region.
///
/// Every boundary except the final one lands one byte past a record
/// terminator, so no line is ever split across two chunks. Boundaries start
/// from an approximate even split and scan forward to the next terminator.
/// When the region is smaller than the worker count (or a tail has no
/// terminator left) the surplus workers receive empty ranges; the final chunk
/// always absorbs the remainder up to end-of-file.
pub fn partition(data: &[u8], workers: usize) -> Vec<Range<usize>> {
    debug_assert!(workers > 0);

    let len = data.len();
    let target_size = len / workers;
    let mut chunks = Vec::with_capacity(workers);
    let mut cursor = 0;

    for _ in 0..workers - 1 {
        let probe = (cursor + target_size).min(len);
        let end = match memchr(RECORD_TERMINATOR, &data[probe..]) {
            Some(pos) => probe + pos + 1,
            // No terminator before end-of-file: leave the tail to the final chunk.
            None => len,
        };
        chunks.push(cursor..end);
        cursor = end;
    }
    chunks.push(cursor..len);

    chunks
}
