use std::collections::HashMap;
use std::ops::Range;

use memchr::memchr;

use crate::error::{ProcessingError, Result};
use crate::models::{parse_temperature, StationStats};
use crate::utils::constants::{FIELD_DELIMITER, RECORD_TERMINATOR};

/// Station name -> running statistics, private to one worker.
pub type PartialResults = HashMap<String, StationStats>;

/// Scan one record-aligned chunk of the mapped region and aggregate every
/// complete record it contains into a worker-private map.
///
/// `data` is the full byte region; `range` selects this worker's chunk.
/// Offsets in errors are absolute positions within `data` so a malformed
/// record can be located regardless of which worker hit it. The final record
/// of the region may legitimately lack its trailing newline; anything else
/// between the parsed temperature and the terminator is a format violation.
pub fn aggregate_chunk(data: &[u8], range: Range<usize>) -> Result<PartialResults> {
    let mut results = PartialResults::new();
    let mut cursor = range.start;

    while cursor < range.end {
        let record = &data[cursor..range.end];

        let delimiter = memchr(FIELD_DELIMITER, record)
            .ok_or(ProcessingError::MalformedRecord { offset: cursor })?;
        if delimiter == 0 {
            return Err(ProcessingError::EmptyStationName { offset: cursor });
        }

        let name = std::str::from_utf8(&record[..delimiter])
            .map_err(|e| ProcessingError::InvalidUtf8 {
                offset: cursor + e.valid_up_to(),
            })?;

        let value_start = delimiter + 1;
        let (tenths, consumed) =
            parse_temperature(&record[value_start..], cursor + value_start)?;

        let after_value = value_start + consumed;
        match record.get(after_value) {
            Some(&RECORD_TERMINATOR) => cursor += after_value + 1,
            // Last record of the region, no trailing newline.
            None => cursor = range.end,
            Some(&found) => {
                return Err(ProcessingError::TemperatureFormat {
                    offset: cursor + after_value,
                    found,
                })
            }
        }

        match results.get_mut(name) {
            Some(stats) => stats.record(tenths),
            None => {
                results.insert(name.to_owned(), StationStats::new(tenths));
            }
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_aggregates_repeated_station() {
        let data = b"Hamburg;12.0\nBerlin;-1.5\nHamburg;8.0\n";
        let results = aggregate_chunk(data, 0..data.len()).unwrap();

        assert_eq!(results.len(), 2);
        let hamburg = &results["Hamburg"];
        assert_eq!(hamburg.count, 2);
        assert_eq!(hamburg.min, 80);
        assert_eq!(hamburg.max, 120);
        assert_eq!(hamburg.sum, 200);
        assert_eq!(results["Berlin"].min, -15);
    }

    #[test]
    fn test_count_matches_line_count() {
        let data = b"A;1.0\nB;2.0\nA;3.0\nA;4.0\n";
        let results = aggregate_chunk(data, 0..data.len()).unwrap();
        assert_eq!(results["A"].count, 3);
        assert_eq!(results["B"].count, 1);
    }

    #[test]
    fn test_empty_chunk_contributes_nothing() {
        let data = b"Hamburg;12.0\n";
        let results = aggregate_chunk(data, 5..5).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_sub_range_sees_only_its_records() {
        let data = b"Hamburg;12.0\nBerlin;-1.5\n";
        let results = aggregate_chunk(data, 13..data.len()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results["Berlin"].count, 1);
    }

    #[test]
    fn test_missing_trailing_newline() {
        let data = b"Hamburg;12.0\nBerlin;-1.5";
        let results = aggregate_chunk(data, 0..data.len()).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results["Berlin"].min, -15);
    }

    #[test]
    fn test_utf8_station_names() {
        let data = "Zürich;3.2\nSan José;21.0\n".as_bytes();
        let results = aggregate_chunk(data, 0..data.len()).unwrap();
        assert_eq!(results["Zürich"].max, 32);
        assert_eq!(results["San José"].max, 210);
    }

    #[test]
    fn test_missing_delimiter_is_fatal() {
        let data = b"Hamburg;12.0\nBerlin-1.5\n";
        let err = aggregate_chunk(data, 0..data.len()).unwrap_err();
        assert!(matches!(err, ProcessingError::MalformedRecord { offset: 13 }));
    }

    #[test]
    fn test_empty_name_is_fatal() {
        let data = b";12.0\n";
        let err = aggregate_chunk(data, 0..data.len()).unwrap_err();
        assert!(matches!(err, ProcessingError::EmptyStationName { offset: 0 }));
    }

    #[test]
    fn test_garbage_after_temperature_is_fatal() {
        let data = b"Hamburg;12.05\n";
        let err = aggregate_chunk(data, 0..data.len()).unwrap_err();
        assert!(matches!(
            err,
            ProcessingError::TemperatureFormat { offset: 12, found: b'5' }
        ));
    }

    #[test]
    fn test_invalid_utf8_name_is_fatal() {
        let data = b"Ham\xffburg;12.0\n";
        let err = aggregate_chunk(data, 0..data.len()).unwrap_err();
        assert!(matches!(err, ProcessingError::InvalidUtf8 { offset: 3 }));
    }
}
