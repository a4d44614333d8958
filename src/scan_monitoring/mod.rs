/// Scan monitoring - Domain layer
///
/// Pure types and services for the scan-lifecycle monitor and the
/// issue-aggregation engine. Nothing in this module performs I/O.
pub mod domain;
pub mod services;
