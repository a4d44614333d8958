/// Ports module defining interfaces for hexagonal architecture
///
/// The application core talks to the backend, the console, and the file
/// system exclusively through these outbound (driven) interfaces.
pub mod outbound;
