mod error;

pub mod bounds;
pub mod files;
pub mod format;
pub mod source;

pub use bounds::{measure, scan, Bounds, ScanOptions};
pub use error::{Error, Result};
pub use files::{Input, Report};
pub use format::{Fields, Template};
pub use source::CharSource;
