//! Directory truncator
//!
//! For every candidate in the configured directory, cut the file at the
//! first occurrence of the marker and write the prefix back in place.

use anyhow::{bail, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use crate::backends::scan::scan_candidates;
use crate::core::config::{ErrorPolicy, TruncateConfig};
use crate::core::error::TruncateError;
use crate::core::model::{ByteRange, Meta, ResultItem, ResultSet};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::util::{hash_bytes, split_at_marker};

/// What happened to one candidate
#[derive(Debug)]
pub enum Outcome {
    /// Content from `marker_offset` to `original_len` was removed
    Truncated {
        original_len: u64,
        marker_offset: u64,
        hash: String,
    },
    /// Marker absent, file left as is
    Unchanged { len: u64, hash: String },
    /// Read, decode or write failed
    Failed(TruncateError),
}

#[derive(Debug)]
pub struct FileReport {
    pub name: String,
    pub outcome: Outcome,
}

/// Per-file outcomes of one run, in processing order
#[derive(Debug, Default)]
pub struct Report {
    pub files: Vec<FileReport>,

    /// Number of candidates found by the scan
    pub total: usize,

    /// Set when `ErrorPolicy::Abort` stopped the run at a failing file;
    /// candidates after it were not touched
    pub aborted: bool,
}

impl Report {
    pub fn candidates(&self) -> usize {
        self.total
    }

    pub fn processed(&self) -> usize {
        self.files.len()
    }

    /// First recorded failure, if any
    pub fn first_failure(&self) -> Option<(&str, &TruncateError)> {
        self.files.iter().find_map(|f| match &f.outcome {
            Outcome::Failed(err) => Some((f.name.as_str(), err)),
            _ => None,
        })
    }

    pub fn truncated(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, Outcome::Truncated { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, Outcome::Failed(_)))
            .count()
    }

    /// Map outcomes into the report model
    pub fn to_result_set(&self) -> ResultSet {
        let mut result_set: ResultSet = self
            .files
            .iter()
            .map(|file| match &file.outcome {
                Outcome::Truncated {
                    original_len,
                    marker_offset,
                    hash,
                } => ResultItem::file(&file.name)
                    .with_range(ByteRange::new(*marker_offset, *original_len))
                    .with_meta(Meta {
                        size: Some(*marker_offset),
                        hash: Some(hash.clone()),
                        truncated: true,
                    }),
                Outcome::Unchanged { len, hash } => ResultItem::file(&file.name).with_meta(Meta {
                    size: Some(*len),
                    hash: Some(hash.clone()),
                    truncated: false,
                }),
                Outcome::Failed(err) => {
                    ResultItem::error(err.to_stubtrim_error()).with_path(&file.name)
                }
            })
            .collect();
        result_set.sort();
        result_set
    }
}

/// Truncate a single file at the first occurrence of `marker`.
///
/// The file is read once and, when the marker is present, overwritten once.
/// A file without the marker is not written.
pub fn truncate_file(path: &Path, marker: &str) -> Result<Outcome, TruncateError> {
    let bytes = fs::read(path).map_err(|e| TruncateError::io(path, e))?;
    let content = String::from_utf8(bytes).map_err(|source| TruncateError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;

    let (prefix, offset) = split_at_marker(&content, marker);

    match offset {
        Some(offset) => {
            write_prefix(path, prefix)?;
            Ok(Outcome::Truncated {
                original_len: content.len() as u64,
                marker_offset: offset as u64,
                hash: hash_bytes(prefix.as_bytes()),
            })
        }
        None => Ok(Outcome::Unchanged {
            len: content.len() as u64,
            hash: hash_bytes(content.as_bytes()),
        }),
    }
}

/// Overwrite `path` with the kept prefix
fn write_prefix(path: &Path, prefix: &str) -> Result<(), TruncateError> {
    fs::write(path, prefix).map_err(|e| TruncateError::io(path, e))
}

/// Truncate every candidate in `config.dir`.
///
/// Per-file failures are recorded in the report. Under `ErrorPolicy::Abort`
/// the first one stops the run and sets `Report::aborted`; files processed
/// before it stay truncated and remain in the report. Only invalid settings
/// and an unreadable directory return `Err`.
pub fn run(config: &TruncateConfig) -> Result<Report, TruncateError> {
    config.validate()?;

    let candidates = scan_candidates(&config.dir, &config.suffix)?;
    tracing::debug!(
        dir = %config.dir.display(),
        suffix = %config.suffix,
        count = candidates.len(),
        "scanned candidates"
    );

    let mut report = Report {
        total: candidates.len(),
        ..Report::default()
    };

    for candidate in candidates {
        tracing::debug!(file = %candidate.name, "processing");

        let outcome = match truncate_file(&candidate.path, &config.marker) {
            Ok(outcome) => outcome,
            Err(err) => match config.error_policy {
                ErrorPolicy::Abort => {
                    tracing::warn!(file = %candidate.name, error = %err, "failed, stopping");
                    report.aborted = true;
                    report.files.push(FileReport {
                        name: candidate.name,
                        outcome: Outcome::Failed(err),
                    });
                    break;
                }
                ErrorPolicy::KeepGoing => {
                    tracing::warn!(file = %candidate.name, error = %err, "failed, continuing");
                    Outcome::Failed(err)
                }
            },
        };

        match &outcome {
            Outcome::Truncated {
                original_len,
                marker_offset,
                ..
            } => tracing::info!(
                file = %candidate.name,
                offset = marker_offset,
                removed = original_len - marker_offset,
                "truncated"
            ),
            Outcome::Unchanged { .. } => {
                tracing::debug!(file = %candidate.name, "marker not found, unchanged")
            }
            Outcome::Failed(_) => {}
        }

        report.files.push(FileReport {
            name: candidate.name,
            outcome,
        });
    }

    Ok(report)
}

/// Run the truncator, print the report and the summary line
pub fn run_truncate(config: &TruncateConfig, render_config: RenderConfig, quiet: bool) -> Result<()> {
    let report = run(config)?;

    if !quiet {
        let renderer = Renderer::with_config(render_config);
        renderer.render_to(&report.to_result_set(), std::io::stdout().lock())?;

        let summary = format!(
            "truncated {} of {} files",
            report.truncated(),
            report.candidates()
        );
        if report.aborted {
            eprintln!(
                "{} ({})",
                summary.yellow(),
                format!(
                    "stopped after {} of {} files",
                    report.processed(),
                    report.candidates()
                )
                .red()
                .bold()
            );
        } else if report.failed() > 0 {
            eprintln!(
                "{} ({})",
                summary.yellow(),
                format!("{} failed", report.failed()).red().bold()
            );
        } else {
            eprintln!("{}", summary.green());
        }
    }

    if let Some((name, err)) = report.first_failure() {
        if report.aborted {
            bail!("{} (run stopped at {})", err, name);
        }
        bail!(
            "{} of {} files could not be processed, first: {}",
            report.failed(),
            report.candidates(),
            err
        );
    }

    Ok(())
}
