/// Shared utilities - Common error and result types
///
/// This module contains the error taxonomy and the Result alias used
/// across all layers of the crate.
pub mod error;
pub mod result;

pub use error::{ExitCode, ScanWatchError};
pub use result::Result;
