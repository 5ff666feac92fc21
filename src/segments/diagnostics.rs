use crate::segments::{Glyphs, PushProvider, StatusPayload};
use crate::text::{Style, Text};
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckerState {
    Running,
    Finished,
    Errored,
    Interrupted,
    #[default]
    NoChecker,
}

/// Result of a linter / syntax-checker run, as reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    #[serde(default)]
    pub state: CheckerState,
    #[serde(default)]
    pub errors: usize,
    #[serde(default)]
    pub warnings: usize,
    #[serde(default)]
    pub notes: usize,
}

pub struct DiagnosticsSegment {
    glyphs: Glyphs,
}

impl DiagnosticsSegment {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    pub fn format(&self, report: &DiagnosticReport) -> Option<Text> {
        let (label, style) = match report.state {
            CheckerState::NoChecker => return None,
            CheckerState::Running => (
                format!("{} Checking", self.glyphs.checker_checking),
                Style::Info,
            ),
            CheckerState::Errored => (
                format!("{} Error", self.glyphs.checker_errored),
                Style::Error,
            ),
            CheckerState::Interrupted => (
                format!("{} Paused", self.glyphs.checker_interrupted),
                Style::Neutral,
            ),
            CheckerState::Finished => self.finished_label(report),
        };
        Some(Text::styled(label, style).with("  ", None))
    }

    fn finished_label(&self, report: &DiagnosticReport) -> (String, Style) {
        if report.errors > 0 {
            (
                format!("{} {}", self.glyphs.checker_issues, count(report.errors, "Error")),
                Style::Error,
            )
        } else if report.warnings > 0 {
            (
                format!("{} {}", self.glyphs.checker_issues, count(report.warnings, "Warning")),
                Style::Warning,
            )
        } else if report.notes > 0 {
            (
                format!("{} {}", self.glyphs.checker_info, count(report.notes, "Note")),
                Style::Info,
            )
        } else {
            (format!("{} Good", self.glyphs.checker_good), Style::Success)
        }
    }
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

impl PushProvider for DiagnosticsSegment {
    fn update(&self, payload: &StatusPayload) -> Result<Option<Text>> {
        match payload {
            StatusPayload::Diagnostics(report) => Ok(self.format(report)),
            _ => Ok(None),
        }
    }
}
