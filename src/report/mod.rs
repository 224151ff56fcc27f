//! Report files for a comparison run.
//!
//! Two artifacts per run: the per-query agent responses (one block per
//! model, appended in evaluation order) and the pipe-delimited model
//! comparison table.

#[cfg(test)]
mod tests;

use std::fmt::Write as _;
use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::eval::EvalReport;

/// File accumulating every model's per-query agent responses.
pub const RESPONSES_FILENAME: &str = "agent_responses.txt";

/// File holding the model comparison table.
pub const COMPARISON_FILENAME: &str = "logs.txt";

const COMPARISON_HEADER: &str = "--- Model Comparison ---\n\
     Model Name | Execution Time (ms) | Accuracy (%) | Misclassified Query No\n";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes the two report files, truncated at run start and appended to
/// once per evaluated model.
#[derive(Debug)]
pub struct ReportWriter {
    responses_path: PathBuf,
    comparison_path: PathBuf,
}

impl ReportWriter {
    /// Creates the output directory, truncates both files and writes the
    /// comparison header.
    pub fn create(out_dir: &Path) -> Result<Self, ReportError> {
        fs::create_dir_all(out_dir).map_err(|e| ReportError::CreateDir {
            path: out_dir.to_path_buf(),
            source: e,
        })?;

        let responses_path = out_dir.join(RESPONSES_FILENAME);
        let comparison_path = out_dir.join(COMPARISON_FILENAME);

        write_file(&responses_path, "")?;
        write_file(&comparison_path, COMPARISON_HEADER)?;

        debug!(
            responses = %responses_path.display(),
            comparison = %comparison_path.display(),
            "Report files initialized"
        );

        Ok(Self {
            responses_path,
            comparison_path,
        })
    }

    /// Appends one model's evaluation to both files.
    pub fn append_model(&self, alias: &str, report: &EvalReport) -> Result<(), ReportError> {
        self.append_responses(alias, report)?;
        self.append_comparison_row(alias, report)
    }

    fn append_responses(&self, alias: &str, report: &EvalReport) -> Result<(), ReportError> {
        let mut block = format!("--- Agent responses for model: {alias} ---\n");
        for (i, result) in report.results.iter().enumerate() {
            let _ = writeln!(block, "{}. {}", i + 1, result.agent_response);
        }

        append_file(&self.responses_path, &block)
    }

    fn append_comparison_row(&self, alias: &str, report: &EvalReport) -> Result<(), ReportError> {
        let row = format!(
            "{} | {:.2} | {:.2} | {:?}\n",
            alias, report.total_time_ms, report.accuracy, report.misclassified
        );

        append_file(&self.comparison_path, &row)
    }

    pub fn responses_path(&self) -> &Path {
        &self.responses_path
    }

    pub fn comparison_path(&self) -> &Path {
        &self.comparison_path
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), ReportError> {
    fs::write(path, content).map_err(|e| ReportError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

fn append_file(path: &Path, content: &str) -> Result<(), ReportError> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| ReportError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

    file.write_all(content.as_bytes())
        .map_err(|e| ReportError::Write {
            path: path.to_path_buf(),
            source: e,
        })
}
