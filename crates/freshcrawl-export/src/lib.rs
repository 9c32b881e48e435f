//! CSV export of discovered entries.
//!
//! Each entry becomes one row with a browsable URL of its parent folder, the
//! item's display name, the entry type and the matching timestamp. Rows keep
//! discovery order, and a header row is written even when nothing matched.

mod record;
mod writer;

pub use record::{ExportRecord, folder_url, split_path};
pub use writer::{CsvExporter, ExportedFile, HEADER};
