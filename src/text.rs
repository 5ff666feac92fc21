use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Semantic category of a fragment. Themes decide the actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Neutral,
    Info,
    Success,
    Warning,
    Error,
    Unimportant,
    Emphasis,
    Modified,
}

/// One piece of a status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Styled {
        content: String,
        style: Option<Style>,
    },
    /// Column reservation. Hosts with proportional fonts map this onto their
    /// own alignment primitive instead of literal spaces.
    Space(usize),
}

impl Span {
    pub fn width(&self) -> usize {
        match self {
            Span::Styled { content, .. } => display_width(content),
            Span::Space(columns) => *columns,
        }
    }
}

/// Ordered list of spans produced by a segment or by the layout assembler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    spans: Vec<Span>,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(content: impl Into<String>) -> Self {
        let mut text = Self::new();
        text.push(content, None);
        text
    }

    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        let mut text = Self::new();
        text.push(content, Some(style));
        text
    }

    /// Append a fragment. Empty strings are dropped so they never leave
    /// artifacts in the assembled line.
    pub fn push(&mut self, content: impl Into<String>, style: Option<Style>) {
        let content = content.into();
        if content.is_empty() {
            return;
        }
        self.spans.push(Span::Styled { content, style });
    }

    pub fn push_space(&mut self, columns: usize) {
        if columns > 0 {
            self.spans.push(Span::Space(columns));
        }
    }

    pub fn append(&mut self, other: Text) {
        self.spans.extend(other.spans);
    }

    pub fn with(mut self, content: impl Into<String>, style: Option<Style>) -> Self {
        self.push(content, style);
        self
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0
    }

    pub fn to_plain_string(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            match span {
                Span::Styled { content, .. } => out.push_str(content),
                Span::Space(columns) => out.extend(std::iter::repeat(' ').take(*columns)),
            }
        }
        out
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_string())
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::plain(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text::plain(value)
    }
}

/// Visual columns occupied by `s`: wide CJK counts 2, combining marks 0.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}
