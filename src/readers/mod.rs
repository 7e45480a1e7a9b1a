pub mod measurement_file;

pub use measurement_file::MeasurementFile;
