use crate::segments::{Glyphs, PullProvider, SegmentContext};
use crate::text::{Style, Text};
use anyhow::Result;

/// Modification state: `● ` when dirty, `■ ` when read-only, blank otherwise.
///
/// Always two columns wide so the buffer name never shifts.
pub struct ModifiedSegment {
    glyphs: Glyphs,
}

impl ModifiedSegment {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }
}

impl PullProvider for ModifiedSegment {
    fn render(&self, ctx: &SegmentContext<'_>) -> Result<Option<Text>> {
        let Some(document) = ctx.document else {
            return Ok(None);
        };

        let text = if document.modified {
            Text::styled(self.glyphs.buffer_modified, Style::Modified).with(" ", None)
        } else if document.read_only {
            Text::styled(self.glyphs.buffer_read_only, Style::Error).with(" ", None)
        } else {
            Text::plain("  ")
        };
        Ok(Some(text))
    }
}

pub struct BufferNameSegment;

impl PullProvider for BufferNameSegment {
    fn render(&self, ctx: &SegmentContext<'_>) -> Result<Option<Text>> {
        Ok(ctx
            .document
            .filter(|document| !document.name.is_empty())
            .map(|document| Text::styled(document.name.clone(), Style::Emphasis).with("  ", None)))
    }
}

/// Project or workspace label the document belongs to.
pub struct WorkspaceSegment;

impl PullProvider for WorkspaceSegment {
    fn render(&self, ctx: &SegmentContext<'_>) -> Result<Option<Text>> {
        Ok(ctx
            .document
            .and_then(|document| document.workspace.as_deref())
            .filter(|label| !label.is_empty())
            .map(|label| Text::styled(label, Style::Info).with("  ", None)))
    }
}
