use crate::error::{ProcessingError, Result};

/// Decode a fixed-point temperature from the start of `bytes`.
///
/// The field grammar is `['-'] digit [digit] '.' digit` and the value is
/// returned as an integer number of tenths of a degree together with the
/// number of bytes consumed. Decoding folds digits in directly instead of
/// going through a string and a general-purpose float parser.
///
/// `base_offset` is the absolute position of `bytes[0]` in the mapped file
/// and is only used to report the offending offset on a grammar violation.
pub fn parse_temperature(bytes: &[u8], base_offset: usize) -> Result<(i32, usize)> {
    let mut idx = 0;

    let sign = if bytes.first() == Some(&b'-') {
        idx += 1;
        -1
    } else {
        1
    };

    let mut value = i32::from(expect_digit(bytes, idx, base_offset)?);
    idx += 1;

    match bytes.get(idx) {
        Some(&b'.') => {
            idx += 1;
        }
        Some(_) => {
            // Second integer digit; the byte after it must be the point.
            value = value * 10 + i32::from(expect_digit(bytes, idx, base_offset)?);
            idx += 1;
            match bytes.get(idx) {
                Some(&b'.') => idx += 1,
                Some(&found) => {
                    return Err(ProcessingError::TemperatureFormat {
                        offset: base_offset + idx,
                        found,
                    })
                }
                None => {
                    return Err(ProcessingError::UnexpectedEof {
                        offset: base_offset + idx,
                    })
                }
            }
        }
        None => {
            return Err(ProcessingError::UnexpectedEof {
                offset: base_offset + idx,
            })
        }
    }

    value = value * 10 + i32::from(expect_digit(bytes, idx, base_offset)?);
    idx += 1;

    Ok((sign * value, idx))
}

fn expect_digit(bytes: &[u8], idx: usize, base_offset: usize) -> Result<u8> {
    match bytes.get(idx) {
        Some(&b @ b'0'..=b'9') => Ok(b - b'0'),
        Some(&found) => Err(ProcessingError::TemperatureFormat {
            offset: base_offset + idx,
            found,
        }),
        None => Err(ProcessingError::UnexpectedEof {
            offset: base_offset + idx,
        }),
    }
}

/// Render an integer tenths value as a signed decimal with one fractional
/// digit, e.g. `-34` -> `"-3.4"` and `230` -> `"23.0"`.
pub fn format_tenths(tenths: i32) -> String {
    let sign = if tenths < 0 { "-" } else { "" };
    let magnitude = tenths.unsigned_abs();
    format!("{}{}.{}", sign, magnitude / 10, magnitude % 10)
}
