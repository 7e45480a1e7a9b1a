/// Record structure
pub const FIELD_DELIMITER: u8 = b';';
pub const RECORD_TERMINATOR: u8 = b'\n';
