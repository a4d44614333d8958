mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod scan_monitoring;
mod shared;

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use adapters::outbound::console::{render, StderrProgressReporter};
use adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use adapters::outbound::network::HttpScanBackend;
use application::use_cases::{ScanMonitor, TriageIssueUseCase};
use cli::{Args, Command, IssuesCommand, ReportCommand, ReposCommand, ScanCommand};
use ports::outbound::{
    CreateScanRequest, ImportRequest, OutputPresenter, ProgressReporter, ScanBackend,
};
use scan_monitoring::domain::ScanStatus;
use scan_monitoring::services::{IssueAggregator, ReportFormat, ReportLocator};
use shared::error::{ExitCode, ScanWatchError};
use shared::Result;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    // Load config: explicit path must exist, auto-discovery may come up empty
    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(std::path::Path::new("."))?,
    };

    let api_url = config::resolve_api_url(args.api_url.clone(), config.as_ref());
    let backend = Arc::new(HttpScanBackend::new(api_url)?);

    match args.command {
        Command::Repos(command) => run_repos(backend, command).await,
        Command::Scan(command) => run_scan(backend, command).await,
        Command::Issues(command) => run_issues(backend, command).await,
        Command::Dashboard => {
            let metrics = backend.dashboard_overview().await?;
            print!("{}", render::render_dashboard(&metrics));
            Ok(ExitCode::Success)
        }
        Command::Report(command) => run_report(backend, command, config.as_ref()).await,
    }
}

async fn run_repos(backend: Arc<HttpScanBackend>, command: ReposCommand) -> Result<ExitCode> {
    match command {
        ReposCommand::List => {
            let repositories = backend.repositories().await?;
            print!("{}", render::render_repositories(&repositories));
        }
        ReposCommand::Import { user, org } => {
            let request = match (user, org) {
                (Some(user), None) => ImportRequest::for_user(user),
                (None, Some(org)) => ImportRequest::for_org(org),
                _ => {
                    eprintln!(
                        "❌ Specify exactly one of --user or --org.\n\n\
                         💡 Hint: scanwatch repos import --user octocat"
                    );
                    return Ok(ExitCode::InvalidArguments);
                }
            };
            backend.import_repositories(&request).await?;
            eprintln!("✅ Import requested. Run 'scanwatch repos list' to see the result.");
        }
        ReposCommand::Delete { id } => {
            backend.delete_repository(id).await?;
            eprintln!("✅ Repository #{} deleted.", id);
        }
    }
    Ok(ExitCode::Success)
}

async fn run_scan(backend: Arc<HttpScanBackend>, command: ScanCommand) -> Result<ExitCode> {
    match command {
        ScanCommand::Start {
            repository_id,
            branch,
            watch,
        } => {
            let request = CreateScanRequest {
                repository_id,
                branch,
            };
            let scan = backend.create_scan(&request).await?;
            eprintln!("✅ Scan #{} started for {}.", scan.id, scan.repository_name);
            if watch {
                return watch_scan(backend, scan.id).await;
            }
            print!("{}", render::render_scan_detail(&scan));
            Ok(ExitCode::Success)
        }
        ScanCommand::List { repository } => {
            let scans = match repository {
                Some(repository_id) => backend.scans_for_repository(repository_id).await?,
                None => backend.scans().await?,
            };
            print!("{}", render::render_scans(&scans));
            Ok(ExitCode::Success)
        }
        ScanCommand::Show { id } => {
            let (scan, issues) =
                tokio::try_join!(backend.scan(id), backend.issues_for_scan(id))?;
            print!("{}", render::render_scan_detail(&scan));
            println!();
            print!(
                "{}",
                render::render_issue_buckets(&IssueAggregator::bucket_by_severity(&issues))
            );
            Ok(ExitCode::Success)
        }
        ScanCommand::Watch { id } => watch_scan(backend, id).await,
        ScanCommand::Delete { id } => {
            backend.delete_scan(id).await?;
            eprintln!("✅ Scan #{} deleted.", id);
            Ok(ExitCode::Success)
        }
    }
}

/// Follows a scan until it reaches a terminal status or the user hits
/// Ctrl-C, then prints the final snapshot.
async fn watch_scan(backend: Arc<HttpScanBackend>, scan_id: i64) -> Result<ExitCode> {
    let monitor = ScanMonitor::new(backend, scan_id);
    let reporter = StderrProgressReporter::new();

    monitor.attach().await?;

    if monitor.is_armed() {
        eprintln!("👀 Watching scan #{} (Ctrl-C to stop)...", scan_id);
        tokio::select! {
            _ = monitor.run(&reporter) => {}
            _ = tokio::signal::ctrl_c() => {
                monitor.detach();
                reporter.report_completion("🛑 Watch stopped.");
            }
        }
    }

    let snapshot = match monitor.snapshot() {
        Some(snapshot) => snapshot,
        None => {
            return Err(ScanWatchError::LoadFailed {
                scan_id,
                details: "watch ended without scan data".to_string(),
            }
            .into())
        }
    };

    print!("{}", render::render_scan_detail(&snapshot.scan));
    println!();
    print!(
        "{}",
        render::render_issue_buckets(&IssueAggregator::bucket_by_severity(&snapshot.issues))
    );

    if snapshot.scan.status == ScanStatus::Failed {
        Ok(ExitCode::ScanFailed)
    } else {
        Ok(ExitCode::Success)
    }
}

async fn run_issues(backend: Arc<HttpScanBackend>, command: IssuesCommand) -> Result<ExitCode> {
    match command {
        IssuesCommand::List { scan_id, severity } => {
            let issues = match severity {
                Some(severity) => backend.issues_by_severity(scan_id, severity).await?,
                None => backend.issues_for_scan(scan_id).await?,
            };
            print!(
                "{}",
                render::render_issue_buckets(&IssueAggregator::bucket_by_severity(&issues))
            );
        }
        IssuesCommand::Show { id } => {
            let issue = backend.issue(id).await?;
            print!("{}", render::render_issue_detail(&issue));
        }
        IssuesCommand::MarkFp { id } => {
            let use_case = TriageIssueUseCase::new(backend);
            let updated = use_case.mark_false_positive(&mut [], id).await?;
            eprintln!("✅ Issue #{} marked as false positive.", id);
            print!("{}", render::render_issue_detail(&updated));
        }
    }
    Ok(ExitCode::Success)
}

async fn run_report(
    backend: Arc<HttpScanBackend>,
    command: ReportCommand,
    config: Option<&config::ConfigFile>,
) -> Result<ExitCode> {
    match command {
        ReportCommand::List => {
            let scans = backend.scans().await?;
            let completed: Vec<_> = scans
                .into_iter()
                .filter(|scan| scan.status == ScanStatus::Completed)
                .collect();
            print!("{}", render::render_scans(&completed));
        }
        ReportCommand::Download {
            scan_id,
            format,
            output,
            stdout,
        } => {
            let bytes = backend.download_report(scan_id, format).await.map_err(|e| {
                ScanWatchError::ReportUnavailable {
                    scan_id,
                    format: format.to_string(),
                    details: e.to_string(),
                }
            })?;

            let presenter: Box<dyn OutputPresenter> = if stdout {
                Box::new(StdoutPresenter::new())
            } else {
                Box::new(FileSystemWriter::new(report_output_path(
                    scan_id, format, output, config,
                )))
            };
            presenter.present(&bytes)?;
        }
    }
    Ok(ExitCode::Success)
}

fn report_output_path(
    scan_id: i64,
    format: ReportFormat,
    output: Option<PathBuf>,
    config: Option<&config::ConfigFile>,
) -> PathBuf {
    if let Some(output) = output {
        return output;
    }
    let file_name = ReportLocator::default_file_name(scan_id, format);
    match config.and_then(|c| c.report_dir.as_deref()) {
        Some(dir) => PathBuf::from(dir).join(file_name),
        None => PathBuf::from(file_name),
    }
}
