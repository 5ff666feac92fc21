use crate::config::*;
use crate::engine::LayoutConfig;
use crate::segments::{GlyphStyle, SegmentId};

pub(crate) fn default_theme() -> String {
    "dark".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            glyphs: GlyphStyle::default(),
            layout: LayoutConfig::default(),
            width: None,
            segments: SegmentOptions::default(),
            capabilities: Capabilities::default(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            left: vec![
                SegmentId::MODIFIED,
                SegmentId::BUFFER_NAME,
                SegmentId::SEARCH,
                SegmentId::CURSORS,
                SegmentId::SELECTION,
                SegmentId::POSITION,
            ],
            right: vec![
                SegmentId::EOL,
                SegmentId::ENCODING,
                SegmentId::VC,
                SegmentId::MODE,
                SegmentId::MISC_INFO,
                SegmentId::DIAGNOSTICS,
                SegmentId::PROCESS,
            ],
        }
    }
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            show_percentage: true,
        }
    }
}

impl Default for EncodingOptions {
    fn default() -> Self {
        Self {
            hide_utf8: false,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            search_counter: true,
            multiple_cursors: true,
        }
    }
}
