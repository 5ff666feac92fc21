use crate::document::Document;
use crate::segments::{Glyphs, PullProvider, SegmentContext};
use crate::text::{Style, Text};
use anyhow::Result;

/// Cursor position as `line:column`, optionally followed by how far
/// through the document the cursor is.
pub struct PositionSegment {
    show_percentage: bool,
}

impl PositionSegment {
    pub fn new(show_percentage: bool) -> Self {
        Self { show_percentage }
    }
}

impl PullProvider for PositionSegment {
    fn render(&self, ctx: &SegmentContext<'_>) -> Result<Option<Text>> {
        let Some(document) = ctx.document else {
            return Ok(None);
        };

        let mut text = Text::plain(format!("{}:{}", document.line, document.column));
        if self.show_percentage {
            text.push(" ", None);
            text.push(scroll_label(document), Some(Style::Unimportant));
        }
        text.push("  ", None);
        Ok(Some(text))
    }
}

/// `All`, `Top`, `Bot` or a percentage, the way editors label scroll position.
pub fn scroll_label(document: &Document) -> String {
    let total = document.total_lines;
    if total <= 1 {
        "All".to_string()
    } else if document.line <= 1 {
        "Top".to_string()
    } else if document.line >= total {
        "Bot".to_string()
    } else {
        let percent = document.line as u128 * 100 / total as u128;
        format!("{percent}%")
    }
}

/// Incremental search match counter. Only shown on the active view.
pub struct SearchSegment;

impl PullProvider for SearchSegment {
    fn render(&self, ctx: &SegmentContext<'_>) -> Result<Option<Text>> {
        if !ctx.active {
            return Ok(None);
        }
        Ok(ctx
            .document
            .and_then(|document| document.search)
            .filter(|search| search.total > 0)
            .map(|search| {
                Text::styled(format!("{}/{}", search.current, search.total), Style::Info)
                    .with("  ", None)
            }))
    }
}

/// Number of simultaneous cursors, when there is more than one.
pub struct CursorsSegment {
    glyphs: Glyphs,
}

impl CursorsSegment {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }
}

impl PullProvider for CursorsSegment {
    fn render(&self, ctx: &SegmentContext<'_>) -> Result<Option<Text>> {
        if !ctx.active {
            return Ok(None);
        }
        Ok(ctx
            .document
            .and_then(|document| document.cursors)
            .filter(|count| *count > 1)
            .map(|count| {
                Text::styled(
                    format!("{}{}", self.glyphs.count_separator, count),
                    Style::Info,
                )
                .with("  ", None)
            }))
    }
}

/// Size of the active selection.
pub struct SelectionSegment;

impl PullProvider for SelectionSegment {
    fn render(&self, ctx: &SegmentContext<'_>) -> Result<Option<Text>> {
        if !ctx.active {
            return Ok(None);
        }
        Ok(ctx
            .document
            .and_then(|document| document.selection)
            .filter(|selection| selection.chars > 0)
            .map(|selection| {
                let label = if selection.lines > 1 {
                    format!("{} lines", selection.lines)
                } else {
                    format!("{} chars", selection.chars)
                };
                Text::styled(label, Style::Neutral).with("  ", None)
            }))
    }
}
