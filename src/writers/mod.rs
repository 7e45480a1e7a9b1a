pub mod report_writer;

pub use report_writer::render_report;
