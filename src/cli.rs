use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::scan_monitoring::domain::Severity;
use crate::scan_monitoring::services::ReportFormat;

/// Watch security scans and browse their findings from the terminal
#[derive(Parser, Debug)]
#[command(name = "scanwatch")]
#[command(version = "0.1.0")]
#[command(about = "Watch security scans and browse their findings", long_about = None)]
pub struct Args {
    /// Base URL of the scan service API (overrides config and environment)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Path to a scanwatch.config.yml (defaults to auto-discovery in the
    /// current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage registered repositories
    #[command(subcommand)]
    Repos(ReposCommand),

    /// Start, list, and watch scans
    #[command(subcommand)]
    Scan(ScanCommand),

    /// Browse and triage scan findings
    #[command(subcommand)]
    Issues(IssuesCommand),

    /// Show aggregate counters across all repositories
    Dashboard,

    /// List and download scan reports
    #[command(subcommand)]
    Report(ReportCommand),
}

#[derive(Subcommand, Debug)]
pub enum ReposCommand {
    /// List all registered repositories
    List,

    /// Import repositories from a GitHub user or organization
    Import {
        /// GitHub username to import from
        #[arg(long, conflicts_with = "org")]
        user: Option<String>,

        /// GitHub organization to import from
        #[arg(long, conflicts_with = "user")]
        org: Option<String>,
    },

    /// Delete a repository and everything derived from it
    Delete {
        /// Repository id
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum ScanCommand {
    /// Start a new scan for a repository
    Start {
        /// Repository id to scan
        repository_id: i64,

        /// Branch to scan (defaults to the repository's default branch)
        #[arg(long)]
        branch: Option<String>,

        /// Follow the new scan until it finishes
        #[arg(long)]
        watch: bool,
    },

    /// List scans, optionally restricted to one repository
    List {
        /// Only show scans of this repository
        #[arg(long)]
        repository: Option<i64>,
    },

    /// Show one scan with its issues grouped by severity
    Show {
        /// Scan id
        id: i64,
    },

    /// Follow a running scan until it finishes (Ctrl-C to stop)
    Watch {
        /// Scan id
        id: i64,
    },

    /// Delete a scan and its issues
    Delete {
        /// Scan id
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum IssuesCommand {
    /// List a scan's issues grouped by severity
    List {
        /// Scan id
        scan_id: i64,

        /// Only show issues of this severity
        #[arg(long)]
        severity: Option<Severity>,
    },

    /// Show one issue in full
    Show {
        /// Issue id
        id: i64,
    },

    /// Mark an issue as a false positive
    MarkFp {
        /// Issue id
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReportCommand {
    /// List scans with downloadable reports (completed scans)
    List,

    /// Download a scan report
    Download {
        /// Scan id
        scan_id: i64,

        /// Report format: pdf, json, csv or text
        #[arg(short, long, default_value = "pdf")]
        format: ReportFormat,

        /// Output file path (defaults to scan-<id>-report.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the report to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
