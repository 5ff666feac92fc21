use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Identifies a document view. Cache entries and focus are scoped to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(pub u64);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    #[default]
    Lf,
    Crlf,
    Cr,
}

impl EndOfLine {
    pub fn label(&self) -> &'static str {
        match self {
            EndOfLine::Lf => "LF",
            EndOfLine::Crlf => "CRLF",
            EndOfLine::Cr => "CR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCounter {
    pub current: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub lines: usize,
    pub chars: usize,
}

/// Snapshot of the live document state the host exposes for a view.
///
/// Pull segments read this on every redraw, so hosts should hand out a
/// borrowed view of state they already keep rather than rebuilding it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub modified: bool,
    #[serde(default, rename = "readOnly")]
    pub read_only: bool,
    #[serde(default = "default_line")]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
    #[serde(default, rename = "totalLines")]
    pub total_lines: usize,
    #[serde(default = "default_encoding")]
    pub encoding: String,
    #[serde(default)]
    pub eol: EndOfLine,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub workspace: Option<String>,
    #[serde(default, rename = "miscInfo")]
    pub misc_info: Option<String>,
    #[serde(default)]
    pub process: Option<String>,
    #[serde(default)]
    pub search: Option<SearchCounter>,
    #[serde(default)]
    pub cursors: Option<usize>,
    #[serde(default)]
    pub selection: Option<Selection>,
}

fn default_line() -> usize {
    1
}

fn default_encoding() -> String {
    "utf-8".to_string()
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            modified: false,
            read_only: false,
            line: default_line(),
            column: 0,
            total_lines: 0,
            encoding: default_encoding(),
            eol: EndOfLine::default(),
            mode: String::new(),
            workspace: None,
            misc_info: None,
            process: None,
            search: None,
            cursors: None,
            selection: None,
        }
    }
}
