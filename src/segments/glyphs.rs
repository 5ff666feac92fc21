use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    Ascii,
    #[default]
    Unicode,
}

impl std::str::FromStr for GlyphStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascii" => Ok(GlyphStyle::Ascii),
            "unicode" => Ok(GlyphStyle::Unicode),
            other => anyhow::bail!("unknown glyph style: {other}"),
        }
    }
}

/// Symbols used by the built-in segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub checker_info: &'static str,
    pub checker_issues: &'static str,
    pub checker_good: &'static str,
    pub checker_checking: &'static str,
    pub checker_errored: &'static str,
    pub checker_interrupted: &'static str,
    pub vc_added: &'static str,
    pub vc_needs_merge: &'static str,
    pub vc_needs_update: &'static str,
    pub vc_conflict: &'static str,
    pub vc_good: &'static str,
    pub buffer_modified: &'static str,
    pub buffer_read_only: &'static str,
    pub count_separator: &'static str,
}

impl Glyphs {
    pub const ASCII: Glyphs = Glyphs {
        checker_info: "i",
        checker_issues: "!",
        checker_good: "+",
        checker_checking: "-",
        checker_errored: "x",
        checker_interrupted: "=",
        vc_added: "+",
        vc_needs_merge: ">",
        vc_needs_update: "v",
        vc_conflict: "x",
        vc_good: "-",
        buffer_modified: "*",
        buffer_read_only: "#",
        count_separator: "*",
    };

    pub const UNICODE: Glyphs = Glyphs {
        checker_info: "↳",
        checker_issues: "→",
        checker_good: "✔",
        checker_checking: "⟳",
        checker_errored: "x",
        checker_interrupted: "=",
        vc_added: "+",
        vc_needs_merge: "⟷",
        vc_needs_update: "↓",
        vc_conflict: "x",
        vc_good: "✔",
        buffer_modified: "●",
        buffer_read_only: "■",
        count_separator: "×",
    };

    pub fn for_style(style: GlyphStyle) -> Self {
        match style {
            GlyphStyle::Ascii => Self::ASCII,
            GlyphStyle::Unicode => Self::UNICODE,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::UNICODE
    }
}
