pub mod config;
pub mod error;
pub mod ocr;
pub mod pipeline;
pub mod report;
pub mod words;

pub use error::{Result, ScanError};
pub use pipeline::{recognize, Recognition};
