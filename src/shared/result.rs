/// Crate-wide Result alias over anyhow::Error.
/// Component-specific failures are raised as `ScanWatchError` and travel
/// through this alias with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
