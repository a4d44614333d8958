/// Application layer - Use cases over the outbound ports
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod use_cases;
