//! Run report (`--report report.json`)
//!
//! The JSON layout is versioned; fields are only ever added within a major
//! version.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::diagnostic::{Diagnostic, DiagnosticCode, Severity};

/// Layout version of the JSON report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportVersion {
    pub major: u32,
    pub minor: u32,
}

impl ReportVersion {
    pub const CURRENT: ReportVersion = ReportVersion { major: 1, minor: 0 };
}

impl std::fmt::Display for ReportVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Counts for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Diagnostics of any severity
    pub total: usize,
    pub warnings: usize,
    pub info: usize,

    /// Distinct courses in the input list
    pub courses_requested: usize,

    /// Courses that ended up with a record
    pub courses_resolved: usize,

    pub nodes_emitted: usize,
    pub edges_emitted: usize,
}

impl ReportSummary {
    fn tally(&mut self, severity: Severity) {
        self.total += 1;
        match severity {
            Severity::Warn => self.warnings += 1,
            Severity::Info => self.info += 1,
        }
    }

    /// Listed courses that were skipped
    pub fn courses_skipped(&self) -> usize {
        self.courses_requested.saturating_sub(self.courses_resolved)
    }
}

/// Everything a run dropped or noticed, plus its counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub version: ReportVersion,

    /// RFC 3339 creation time
    pub timestamp: String,

    pub summary: ReportSummary,

    /// In the order they were raised
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn new() -> Self {
        Self {
            version: ReportVersion::CURRENT,
            timestamp: chrono::Utc::now().to_rfc3339(),
            summary: ReportSummary::default(),
            diagnostics: Vec::new(),
        }
    }

    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        let mut report = Self::new();
        report.extend(diagnostics);
        report
    }

    /// Record a diagnostic and update the severity counts
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.summary.tally(diagnostic.severity);
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.add_diagnostic(diagnostic);
        }
    }

    /// Number of diagnostics with `code`
    pub fn count(&self, code: DiagnosticCode) -> usize {
        self.diagnostics.iter().filter(|d| d.code == code).count()
    }

    /// Diagnostic counts keyed by code string, for compact summaries
    pub fn counts_by_code(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for diagnostic in &self.diagnostics {
            *counts.entry(diagnostic.code.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// True if a listed course was lost or the graph is cyclic
    pub fn has_warnings(&self) -> bool {
        self.summary.warnings > 0
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the report as pretty JSON
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}
