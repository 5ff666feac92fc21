use crate::segments::{PullProvider, SegmentContext};
use crate::text::Text;
use anyhow::Result;

pub struct EolSegment;

impl PullProvider for EolSegment {
    fn render(&self, ctx: &SegmentContext<'_>) -> Result<Option<Text>> {
        Ok(ctx
            .document
            .map(|document| Text::plain(format!("{}  ", document.eol.label()))))
    }
}

/// Coding system in upper case (`UTF-8`).
pub struct EncodingSegment {
    hide_utf8: bool,
}

impl EncodingSegment {
    pub fn new(hide_utf8: bool) -> Self {
        Self { hide_utf8 }
    }
}

impl PullProvider for EncodingSegment {
    fn render(&self, ctx: &SegmentContext<'_>) -> Result<Option<Text>> {
        let Some(document) = ctx.document else {
            return Ok(None);
        };
        let encoding = document.encoding.trim();
        if encoding.is_empty() {
            return Ok(None);
        }
        if self.hide_utf8 && is_utf8(encoding) {
            return Ok(None);
        }
        Ok(Some(Text::plain(format!("{}  ", encoding.to_uppercase()))))
    }
}

fn is_utf8(encoding: &str) -> bool {
    let normalized = encoding.to_ascii_lowercase().replace(['-', '_'], "");
    normalized == "utf8" || normalized.starts_with("utf8unix")
}
