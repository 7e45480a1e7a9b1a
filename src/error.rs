use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record at byte offset {offset}: no field delimiter ';' before end of input")]
    MalformedRecord { offset: usize },

    #[error("Malformed record at byte offset {offset}: empty station name")]
    EmptyStationName { offset: usize },

    #[error("Invalid UTF-8 in station name at byte offset {offset}")]
    InvalidUtf8 { offset: usize },

    #[error("Invalid temperature at byte offset {offset}: unexpected byte 0x{found:02x}")]
    TemperatureFormat { offset: usize, found: u8 },

    #[error("Truncated temperature field at byte offset {offset}")]
    UnexpectedEof { offset: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}
