pub mod loader;
pub mod defaults;

pub use loader::*;

use defaults::default_theme;

use crate::engine::LayoutConfig;
use crate::segments::GlyphStyle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub glyphs: GlyphStyle,
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Fixed line width. When absent the binary falls back to `COLUMNS`.
    #[serde(default)]
    pub width: Option<usize>,
    #[serde(default)]
    pub segments: SegmentOptions,
    #[serde(default)]
    pub capabilities: Capabilities,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentOptions {
    #[serde(default)]
    pub position: PositionOptions,
    #[serde(default)]
    pub encoding: EncodingOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionOptions {
    #[serde(rename = "showPercentage")]
    pub show_percentage: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodingOptions {
    #[serde(rename = "hideUtf8")]
    pub hide_utf8: bool,
}

/// Optional host collaborators. Checked once when the registry is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(rename = "searchCounter")]
    pub search_counter: bool,
    #[serde(rename = "multipleCursors")]
    pub multiple_cursors: bool,
}
