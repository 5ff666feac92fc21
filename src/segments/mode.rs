use crate::segments::{PullProvider, SegmentContext};
use crate::text::{Style, Text};
use anyhow::Result;

/// Major mode / language name.
pub struct ModeSegment;

impl PullProvider for ModeSegment {
    fn render(&self, ctx: &SegmentContext<'_>) -> Result<Option<Text>> {
        Ok(ctx
            .document
            .filter(|document| !document.mode.is_empty())
            .map(|document| Text::styled(document.mode.clone(), Style::Emphasis).with("  ", None)))
    }
}

pub struct MiscInfoSegment;

impl PullProvider for MiscInfoSegment {
    fn render(&self, ctx: &SegmentContext<'_>) -> Result<Option<Text>> {
        Ok(ctx
            .document
            .and_then(|document| document.misc_info.as_deref())
            .map(str::trim)
            .filter(|info| !info.is_empty())
            .map(|info| Text::styled(info, Style::Unimportant).with("  ", None)))
    }
}

/// Status of the process attached to the document (REPL, compilation, ...).
pub struct ProcessSegment;

impl PullProvider for ProcessSegment {
    fn render(&self, ctx: &SegmentContext<'_>) -> Result<Option<Text>> {
        Ok(ctx
            .document
            .and_then(|document| document.process.as_deref())
            .map(str::trim)
            .filter(|process| !process.is_empty())
            .map(|process| Text::plain(format!("{process}  "))))
    }
}
