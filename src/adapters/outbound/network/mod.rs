/// Network adapters for the scan service API
mod http_backend;

pub use http_backend::HttpScanBackend;
