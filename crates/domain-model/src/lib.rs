pub mod file_record;
pub mod scan_report;

pub use file_record::*;
pub use scan_report::*;
