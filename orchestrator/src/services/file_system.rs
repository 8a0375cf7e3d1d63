//! Real file system service implementation
//!
//! Reads the roster CSV and writes per-round and summary CSV exports into
//! the output directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::core::{RosterEntry, Row};
use crate::error::{OrchestratorError, OrchestratorResult};
use crate::traits::{ResultSink, RosterSource};
use shared::{process_debug, ProcessId};

/// File name of the cross-round summary
pub const SUMMARY_FILE_NAME: &str = "resultMaster.csv";

/// Real file system implementation
#[derive(Debug, Clone)]
pub struct RealFileSystem {
    roster_path: PathBuf,
    /// Base directory for all exports
    output_dir: PathBuf,
}

impl RealFileSystem {
    pub fn new(roster_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            roster_path: roster_path.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn roster_path(&self) -> &Path {
        &self.roster_path
    }

    /// Path of the export for one round
    pub fn round_file_path(&self, round: u32) -> PathBuf {
        self.output_dir.join(format!("result{round}.csv"))
    }

    pub fn summary_file_path(&self) -> PathBuf {
        self.output_dir.join(SUMMARY_FILE_NAME)
    }

    /// Parse roster CSV: `last name, first name`, no header, extra columns ignored
    pub fn parse_roster(bytes: &[u8]) -> OrchestratorResult<Vec<RosterEntry>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let mut entries = Vec::new();
        for result in reader.records() {
            let record = result?;
            if record.iter().all(str::is_empty) {
                continue;
            }

            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            let field = |index: usize, what: &str| match record.get(index) {
                Some(value) if !value.is_empty() => Ok(value.to_string()),
                _ => Err(OrchestratorError::MalformedRoster {
                    line,
                    reason: format!("missing {what}"),
                }),
            };

            entries.push(RosterEntry::new(field(0, "last name")?, field(1, "first name")?));
        }

        Ok(entries)
    }

    /// Encode rows as CSV; rows may have different lengths
    ///
    /// An empty row becomes a blank line. The csv writer would quote it as
    /// `""`, so it is written to the buffer directly after a flush.
    pub fn encode_rows(rows: &[Row]) -> OrchestratorResult<Vec<u8>> {
        let mut builder = csv::WriterBuilder::new();
        builder.flexible(true);
        let mut writer = builder.from_writer(Vec::new());
        for row in rows {
            if row.is_empty() {
                // csv::Writer has no get_mut; take the buffer out (flushing) and rewrap it
                let mut buf = writer
                    .into_inner()
                    .map_err(|e| OrchestratorError::IoError(e.into_error()))?;
                buf.push(b'\n');
                writer = builder.from_writer(buf);
                continue;
            }
            writer.write_record(row)?;
        }
        writer
            .into_inner()
            .map_err(|e| OrchestratorError::IoError(e.into_error()))
    }

    async fn write_rows(&self, path: PathBuf, rows: &[Row]) -> OrchestratorResult<()> {
        let export_failed = |message: String| OrchestratorError::ExportFailed {
            path: path.clone(),
            message,
        };

        let bytes = Self::encode_rows(rows).map_err(|e| export_failed(e.to_string()))?;
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| export_failed(e.to_string()))?;
        fs::write(&path, bytes).await.map_err(|e| export_failed(e.to_string()))?;

        process_debug!(ProcessId::current(), "📁 Wrote {} rows to {}", rows.len(), path.display());
        Ok(())
    }
}

#[async_trait]
impl RosterSource for RealFileSystem {
    async fn load_roster(&self) -> OrchestratorResult<Vec<RosterEntry>> {
        let bytes = fs::read(&self.roster_path)
            .await
            .map_err(|source| OrchestratorError::RosterUnreadable {
                path: self.roster_path.clone(),
                source,
            })?;

        let entries = Self::parse_roster(&bytes)?;
        process_debug!(
            ProcessId::current(),
            "📋 Read {} roster entries from {}",
            entries.len(),
            self.roster_path.display()
        );
        Ok(entries)
    }
}

#[async_trait]
impl ResultSink for RealFileSystem {
    async fn write_round(&self, round: u32, rows: &[Row]) -> OrchestratorResult<()> {
        self.write_rows(self.round_file_path(round), rows).await
    }

    async fn write_summary(&self, rows: &[Row]) -> OrchestratorResult<()> {
        self.write_rows(self.summary_file_path(), rows).await
    }
}
