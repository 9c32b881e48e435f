//! One authenticate, crawl and export cycle.

use chrono::{DateTime, Utc};
use humansize::{DECIMAL, format_size};
use tracing::info;

use freshcrawl_analyze::{RecencyClassifier, format_age};
use freshcrawl_core::{
    CrawlConfig, CrawlError, Credentials, Prompt, RemoteStore, RemoteTreeClient, SearchMode,
    Settings,
};
use freshcrawl_export::{CsvExporter, ExportedFile};
use freshcrawl_scan::{CrawlEvent, CrawlReport, FolderSelector, TreeCrawler};

/// What to crawl, as decided by the menus or the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Site name, e.g. `axion`.
    pub site: String,
    /// Folder to crawl, or to start browsing from.
    pub start: String,
    /// Let the user pick the folder interactively, starting at `start`.
    pub browse: bool,
    /// Size of the recency window in days.
    pub days: u32,
    /// What to look for.
    pub mode: SearchMode,
    /// Fixed reference instant (None = UTC midnight today).
    pub now: Option<DateTime<Utc>>,
}

impl Job {
    /// Crawl configuration for the folder finally chosen.
    fn crawl_config(&self, root: &str) -> Result<CrawlConfig, CrawlError> {
        let mut builder = CrawlConfig::builder();
        builder.root(root).days(self.days).mode(self.mode);
        if let Some(now) = self.now {
            builder.now(now);
        }
        builder
            .build()
            .map_err(|e| CrawlError::invalid_config(e.to_string()))
    }
}

/// Result of a completed cycle.
#[derive(Debug)]
pub struct Outcome {
    pub report: CrawlReport,
    pub exported: ExportedFile,
}

/// Authenticate, resolve the folder, crawl it and export the matches.
///
/// Nothing is written unless the crawl finishes.
pub fn run_cycle<S: RemoteStore>(
    store: &S,
    job: &Job,
    credentials: &Credentials,
    exporter: &CsvExporter,
    prompt: &mut dyn Prompt,
) -> Result<Outcome, CrawlError> {
    let session = store.authenticate(&job.site, credentials)?;
    let title = session.site_title()?;
    prompt.say(&format!("Authenticated into SharePoint site: {title}"));

    let root = if job.browse {
        let selected = FolderSelector::new(&session)
            .with_floor(Settings::site_root(&job.site))
            .select(&job.start, prompt)?;
        prompt.say(&format!("Selected root folder = {selected}"));
        selected
    } else {
        job.start.clone()
    };

    let config = job.crawl_config(&root)?;
    let window = config.window();
    let classifier = RecencyClassifier::new(window, config.mode);
    info!(root = config.root(), days = config.days, mode = %config.mode, "crawling");

    prompt.say("Crawling files and folders...");
    let report = TreeCrawler::new(&session).crawl_with_observer(
        config.root(),
        &classifier,
        |event| {
            if let CrawlEvent::Discovered(entry) = event {
                prompt.say(&format!(
                    "Found {}: {} {} ({})",
                    entry.describe(),
                    entry.path,
                    entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    format_age(window.age_of(entry.timestamp)),
                ));
            }
        },
    )?;

    prompt.say("~~~~~~~~~~~~~~~~~~~~~~~~~~~~~");
    prompt.say("Complete!");
    prompt.say(&summary(&report));

    prompt.say("Writing file to disk...");
    let exported = exporter.export(&report.entries, &job.site, &window)?;
    prompt.say(&format!("Results are located in {}", exported.path.display()));

    Ok(Outcome { report, exported })
}

fn summary(report: &CrawlReport) -> String {
    let stats = &report.stats;
    format!(
        "{} matches in {} folders, {} files ({}) checked in {:.2}s",
        report.entries.len(),
        stats.folders_listed,
        stats.files_seen,
        format_size(stats.bytes_seen, DECIMAL),
        stats.duration.as_secs_f64(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};
    use freshcrawl_core::{MemoryTree, ScriptedPrompt, Timestamps};
    use tempfile::TempDir;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap()
    }

    fn days_ago(days: i64) -> Timestamps {
        Timestamps::created_at(now() - TimeDelta::days(days))
    }

    fn site() -> MemoryTree {
        let mut tree = MemoryTree::new("/sites/axion")
            .with_title("Axion Team")
            .with_password("secret");
        let docs = tree.add_folder("/sites/axion", "Shared Documents", days_ago(400));
        let reports = tree.add_folder(&docs, "Reports", days_ago(2));
        tree.add_file(&docs, "old.txt", 10, days_ago(60));
        tree.add_file(&docs, "fresh.txt", 1500, days_ago(1));
        tree.add_file(&reports, "q1.xlsx", 2048, days_ago(3));
        tree
    }

    fn job(start: &str, browse: bool) -> Job {
        Job {
            site: "axion".to_string(),
            start: start.to_string(),
            browse,
            days: 14,
            mode: SearchMode::Both,
            now: Some(now()),
        }
    }

    fn credentials() -> Credentials {
        Credentials::password("jdoe", "secret")
    }

    #[test]
    fn test_cycle_exports_matches() {
        let out = TempDir::new().unwrap();
        let exporter = CsvExporter::new("https://contoso.sharepoint.com").with_output_dir(out.path());
        let mut prompt = ScriptedPrompt::new(Vec::<String>::new());

        let outcome = run_cycle(
            &site(),
            &job("/sites/axion/Shared Documents", false),
            &credentials(),
            &exporter,
            &mut prompt,
        )
        .unwrap();

        assert_eq!(outcome.exported.rows, 2);
        assert!(
            outcome
                .exported
                .path
                .ends_with("axion_modified_files_2024-02-25_to_2024-03-10.csv")
        );
        assert!(prompt.saw("Authenticated into SharePoint site: Axion Team"));
        assert!(prompt.saw("Found new file: /sites/axion/Shared Documents/fresh.txt 2024-03-09"));
        assert!(prompt.saw("Found new file: /sites/axion/Shared Documents/Reports/q1.xlsx"));
        assert!(prompt.saw("Results are located in"));
    }

    #[test]
    fn test_cycle_browses_before_crawling() {
        let out = TempDir::new().unwrap();
        let exporter = CsvExporter::new("https://contoso.sharepoint.com").with_output_dir(out.path());
        // Pick "Reports", then search it.
        let mut prompt = ScriptedPrompt::new(["0", ""]);

        let outcome = run_cycle(
            &site(),
            &job("/sites/axion/Shared Documents", true),
            &credentials(),
            &exporter,
            &mut prompt,
        )
        .unwrap();

        assert_eq!(outcome.report.root, "/sites/axion/Shared Documents/Reports");
        assert_eq!(outcome.exported.rows, 1);
        assert!(prompt.saw("Selected root folder = /sites/axion/Shared Documents/Reports"));
    }

    #[test]
    fn test_bad_password_stops_before_export() {
        let out = TempDir::new().unwrap();
        let exporter = CsvExporter::new("https://contoso.sharepoint.com").with_output_dir(out.path());
        let mut prompt = ScriptedPrompt::new(Vec::<String>::new());

        let result = run_cycle(
            &site(),
            &job("/sites/axion/Shared Documents", false),
            &Credentials::password("jdoe", "wrong"),
            &exporter,
            &mut prompt,
        );

        assert!(matches!(result, Err(CrawlError::Authentication { .. })));
        assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_failed_crawl_writes_nothing() {
        let out = TempDir::new().unwrap();
        let exporter = CsvExporter::new("https://contoso.sharepoint.com").with_output_dir(out.path());
        let mut tree = site();
        tree.fail_at("/sites/axion/Shared Documents/Reports");
        let mut prompt = ScriptedPrompt::new(Vec::<String>::new());

        let result = run_cycle(
            &tree,
            &job("/sites/axion/Shared Documents", false),
            &credentials(),
            &exporter,
            &mut prompt,
        );

        assert!(matches!(result, Err(CrawlError::Request { .. })));
        assert!(!prompt.saw("Writing file to disk..."));
        assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_folder_is_not_found() {
        let out = TempDir::new().unwrap();
        let exporter = CsvExporter::new("https://contoso.sharepoint.com").with_output_dir(out.path());
        let mut prompt = ScriptedPrompt::new(Vec::<String>::new());

        let result = run_cycle(
            &site(),
            &job("/sites/axion/Shared Documents/Nope", false),
            &credentials(),
            &exporter,
            &mut prompt,
        );
        assert!(matches!(result, Err(CrawlError::NotFound { .. })));
    }
}
