//! Error handling for huffpack operations
//!
//! The error enum lives in `common` next to the format constants; it derives
//! through thiserror and has one variant per failure class the codec reports.

pub use crate::common::HuffError;
pub use crate::common::Result;
