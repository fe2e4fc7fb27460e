use std::fs;
use std::path::Path;

use degseq_core::{ErrorInfo, RealizeError};

use crate::report::RealizationReport;

/// Serialises a realization report into indented JSON.
pub fn report_to_json(report: &RealizationReport) -> Result<String, RealizeError> {
    serde_json::to_string_pretty(report)
        .map_err(|err| RealizeError::Serde(ErrorInfo::new("report-serialize", err.to_string())))
}

/// Deserialises a realization report from JSON text.
pub fn report_from_json(json: &str) -> Result<RealizationReport, RealizeError> {
    serde_json::from_str(json)
        .map_err(|err| RealizeError::Serde(ErrorInfo::new("report-deserialize", err.to_string())))
}

/// Writes a JSON payload to disk, creating parent directories.
pub fn write_json(path: &Path, json: &str) -> Result<(), RealizeError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| {
            RealizeError::Serde(
                ErrorInfo::new("json-write", err.to_string())
                    .with_context("path", parent.display().to_string()),
            )
        })?;
    }
    fs::write(path, json).map_err(|err| {
        RealizeError::Serde(
            ErrorInfo::new("json-write", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}

/// Reads a JSON payload from disk.
pub fn read_json(path: &Path) -> Result<String, RealizeError> {
    fs::read_to_string(path).map_err(|err| {
        RealizeError::Serde(
            ErrorInfo::new("json-read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}

/// Writes `report` to `path` as JSON.
pub fn save_report(path: &Path, report: &RealizationReport) -> Result<(), RealizeError> {
    write_json(path, &report_to_json(report)?)
}

/// Loads a report previously written by [`save_report`].
pub fn load_report(path: &Path) -> Result<RealizationReport, RealizeError> {
    report_from_json(&read_json(path)?)
}
