//! scanwatch - terminal client for a security scan service
//!
//! This library provides functionality to follow running security scans,
//! browse and triage their findings, and download reports, following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`scan_monitoring`): Pure domain models and aggregation services
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use scanwatch::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn watch() -> Result<()> {
//! // Create adapters
//! let backend = Arc::new(HttpScanBackend::new("http://localhost:8080/api")?);
//! let reporter = StderrProgressReporter::new();
//!
//! // Create use case and follow a scan to completion
//! let monitor = ScanMonitor::new(backend, 42);
//! monitor.attach().await?;
//! monitor.run(&reporter).await;
//!
//! if let Some(snapshot) = monitor.snapshot() {
//!     for bucket in IssueAggregator::bucket_by_severity(&snapshot.issues) {
//!         println!("{}: {} issues", bucket.severity, bucket.issues.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod scan_monitoring;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::network::HttpScanBackend;
    pub use crate::application::use_cases::{
        MonitorState, ScanMonitor, ScanSnapshot, TriageIssueUseCase,
    };
    pub use crate::ports::outbound::{
        CreateScanRequest, ImportRequest, OutputPresenter, ProgressReporter, ScanBackend,
    };
    pub use crate::scan_monitoring::domain::{
        DashboardMetrics, Issue, Repository, Scan, ScanProgress, ScanStatus, Severity,
    };
    pub use crate::scan_monitoring::services::{
        DashboardAggregator, IssueAggregator, ReportFormat, ReportLocator,
    };
    pub use crate::shared::Result;
}
