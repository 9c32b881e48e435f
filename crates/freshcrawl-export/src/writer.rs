//! CSV writer for discovered entries.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::{debug, info};

use freshcrawl_core::{CrawlError, DiscoveredEntry, RecencyWindow};

use crate::record::ExportRecord;

/// Column names, in column order.
pub const HEADER: [&str; 4] = ["url", "name", "entry_type", "timestamp"];

/// A result file written by [`CsvExporter::export`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    /// Location of the written file.
    pub path: PathBuf,
    /// Number of data rows, not counting the header.
    pub rows: usize,
}

/// Writes discovered entries to a CSV file named after the site and window.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    web_origin: String,
    output_dir: PathBuf,
}

impl CsvExporter {
    /// Create an exporter writing to the current directory.
    pub fn new(web_origin: impl Into<String>) -> Self {
        Self {
            web_origin: web_origin.into(),
            output_dir: PathBuf::from("."),
        }
    }

    /// Write result files into `dir` instead.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Directory result files are written into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// File name for a site and window, e.g.
    /// `axion_modified_files_2024-02-25_to_2024-03-10.csv`.
    pub fn file_name(site: &str, window: &RecencyWindow) -> String {
        format!(
            "{}_modified_files_{}_to_{}.csv",
            site.to_lowercase(),
            window.start_date().format("%Y-%m-%d"),
            window.end_date().format("%Y-%m-%d"),
        )
    }

    /// Write `entries` in order. A header row is always written, so an empty
    /// slice still produces a valid file.
    pub fn export(
        &self,
        entries: &[DiscoveredEntry],
        site: &str,
        window: &RecencyWindow,
    ) -> Result<ExportedFile, CrawlError> {
        if !self.output_dir.as_os_str().is_empty() && !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir)
                .map_err(|e| CrawlError::io(&self.output_dir, e))?;
        }

        let path = self.output_dir.join(Self::file_name(site, window));
        let file = File::create(&path).map_err(|e| CrawlError::io(&path, e))?;

        let rows = self
            .write_records(file, entries)
            .map_err(|e| CrawlError::export(&path, e))?;

        info!(path = %path.display(), rows, "exported results");
        Ok(ExportedFile { path, rows })
    }

    /// Serialize `entries` to any writer and return the row count.
    pub fn write_records<W: Write>(
        &self,
        sink: W,
        entries: &[DiscoveredEntry],
    ) -> Result<usize, csv::Error> {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);
        writer.write_record(HEADER)?;

        for entry in entries {
            let record = ExportRecord::from_entry(entry, &self.web_origin);
            debug!(url = %record.url, name = %record.name, "writing row");
            writer.serialize(&record)?;
        }

        writer.flush()?;
        Ok(entries.len())
    }
}
