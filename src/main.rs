//! freshcrawl - Find recently created or modified files in SharePoint.
//!
//! Usage:
//!   freshcrawl                       Choose site, window and folder from menus
//!   freshcrawl --path <LINK>         Search the folder behind a copied link
//!   freshcrawl --help                Show help

mod console;
mod credentials;
mod interactive;
mod run;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use freshcrawl_core::{CrawlError, MAX_DAYS, Prompt, SearchMode, Settings};
use freshcrawl_export::CsvExporter;
use freshcrawl_sharepoint::{FolderLink, SharePointStore};

use crate::console::Console;
use crate::run::{Job, run_cycle};

#[derive(Parser)]
#[command(
    name = "freshcrawl",
    version,
    about = "Find recently created or modified files in SharePoint",
    long_about = "freshcrawl walks a SharePoint document library and lists the files and \
                  folders that changed within the last few days.\n\n\
                  Run without arguments for the interactive menus, or pass --path with \
                  a folder link copied from the browser."
)]
struct Cli {
    /// Folder link copied from the browser (skips the menus)
    #[arg(long, value_name = "LINK")]
    path: Option<String>,

    /// Number of days prior to today to check for updates
    #[arg(long, default_value_t = 14, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DAYS)))]
    days: u32,

    /// Username
    #[arg(long, env = "SP_USER")]
    user: Option<String>,

    /// Password
    #[arg(long, env = "SP_PASS", hide_env_values = true)]
    pwd: Option<String>,

    /// Bearer token used instead of a username and password
    #[arg(long, env = "SP_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Search mode: new, new_folder, modified or both
    #[arg(long, default_value_t = SearchMode::Both)]
    mode: SearchMode,

    /// Directory for the result file (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Settings file (defaults to <config dir>/freshcrawl/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let env_file = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Some(problem) = env_file_problem(&env_file) {
        tracing::warn!(error = %problem, "ignoring unreadable .env file");
    }

    let mut settings =
        Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    let mut console = Console;

    let job = match &cli.path {
        Some(link) => match FolderLink::parse(link) {
            Ok(link) => {
                settings.web_origin = link.origin;
                Job {
                    site: link.site,
                    start: link.folder_path,
                    browse: false,
                    days: cli.days,
                    mode: cli.mode,
                    now: None,
                }
            }
            Err(err) => return Ok(report(&err, &mut console)),
        },
        None => match interactive::plan(&settings, &mut console) {
            Ok(job) => job,
            Err(err) => return Ok(report(&err, &mut console)),
        },
    };

    let credentials =
        match credentials::resolve(cli.user, cli.pwd, cli.token, &mut console) {
            Ok(credentials) => credentials,
            Err(err) => return Ok(report(&err, &mut console)),
        };

    let mut exporter = CsvExporter::new(settings.web_origin.clone());
    if let Some(dir) = cli.output_dir {
        exporter = exporter.with_output_dir(dir);
    }
    let store = SharePointStore::new(settings).context("Failed to set up HTTP client")?;

    match run_cycle(&store, &job, &credentials, &exporter, &mut console) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => Ok(report(&err, &mut console)),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load errors worth reporting. A missing `.env` file is normal.
fn env_file_problem<T>(result: &dotenvy::Result<T>) -> Option<&dotenvy::Error> {
    match result {
        Err(err) if !err.not_found() => Some(err),
        _ => None,
    }
}

/// Print a failure the way a user should read it.
fn report(err: &CrawlError, prompt: &mut dyn Prompt) -> ExitCode {
    tracing::debug!(error = ?err, "cycle failed");
    prompt.say(&user_message(err));
    ExitCode::FAILURE
}

fn user_message(err: &CrawlError) -> String {
    match err {
        CrawlError::Authentication { .. } => {
            "Unable to authenticate with credentials. Please try again.".to_string()
        }
        CrawlError::NotFound { path } => {
            format!("No SharePoint folder found at {path}. Please try again.")
        }
        CrawlError::InputFormat { expected, .. } => {
            format!("Please enter {expected} and try again.")
        }
        CrawlError::InputClosed => "Input closed, nothing was searched.".to_string(),
        other => other.to_string(),
    }
}
