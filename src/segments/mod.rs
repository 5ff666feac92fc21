pub mod buffer;
pub mod diagnostics;
pub mod encoding;
pub mod glyphs;
pub mod mode;
pub mod position;
pub mod registry;
pub mod vc;

pub use buffer::*;
pub use diagnostics::*;
pub use encoding::*;
pub use glyphs::*;
pub use mode::*;
pub use position::*;
pub use registry::*;
pub use vc::*;

use crate::config::Config;
use crate::document::{Document, ViewId};
use crate::text::Text;
use anyhow::Result;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Name of a segment kind, as used in layout configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(Cow<'static, str>);

impl SegmentId {
    pub const MODIFIED: SegmentId = SegmentId::from_static("modified");
    pub const BUFFER_NAME: SegmentId = SegmentId::from_static("buffer-name");
    pub const WORKSPACE: SegmentId = SegmentId::from_static("workspace");
    pub const SEARCH: SegmentId = SegmentId::from_static("search");
    pub const CURSORS: SegmentId = SegmentId::from_static("cursors");
    pub const SELECTION: SegmentId = SegmentId::from_static("selection");
    pub const POSITION: SegmentId = SegmentId::from_static("position");
    pub const EOL: SegmentId = SegmentId::from_static("eol");
    pub const ENCODING: SegmentId = SegmentId::from_static("encoding");
    pub const VC: SegmentId = SegmentId::from_static("vc");
    pub const MODE: SegmentId = SegmentId::from_static("mode");
    pub const MISC_INFO: SegmentId = SegmentId::from_static("misc-info");
    pub const DIAGNOSTICS: SegmentId = SegmentId::from_static("diagnostics");
    pub const PROCESS: SegmentId = SegmentId::from_static("process");

    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for SegmentId {
    fn from(id: &'static str) -> Self {
        Self::from_static(id)
    }
}

/// What a pull segment sees when it is rendered.
#[derive(Debug, Clone, Copy)]
pub struct SegmentContext<'a> {
    pub view: ViewId,
    /// Whether `view` is the tracked active view.
    pub active: bool,
    pub document: Option<&'a Document>,
}

/// Event payload delivered to a push segment.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusPayload {
    VersionControl(VcStatus),
    Diagnostics(DiagnosticReport),
    /// Pre-formatted text for a segment registered with [`Provider::cached`].
    Custom { segment: SegmentId, text: Text },
}

impl StatusPayload {
    /// The segment whose cache entry this payload updates.
    pub fn segment(&self) -> SegmentId {
        match self {
            StatusPayload::VersionControl(_) => SegmentId::VC,
            StatusPayload::Diagnostics(_) => SegmentId::DIAGNOSTICS,
            StatusPayload::Custom { segment, .. } => segment.clone(),
        }
    }
}

pub type RefreshFuture = BoxFuture<'static, Result<StatusPayload>>;

/// Segment recomputed on every redraw. Must be cheap.
pub trait PullProvider: Send + Sync {
    fn render(&self, ctx: &SegmentContext<'_>) -> Result<Option<Text>>;
}

/// Segment whose text is computed only when an event arrives.
pub trait PushProvider: Send + Sync {
    /// Turn an event payload into the text cached for the view.
    fn update(&self, payload: &StatusPayload) -> Result<Option<Text>>;

    /// Work to run off the render path after the document was saved.
    fn refresh(&self, _view: ViewId, _document: &Document) -> Option<RefreshFuture> {
        None
    }
}

impl<F> PullProvider for F
where
    F: Fn(&SegmentContext<'_>) -> Result<Option<Text>> + Send + Sync,
{
    fn render(&self, ctx: &SegmentContext<'_>) -> Result<Option<Text>> {
        self(ctx)
    }
}

impl<F> PushProvider for F
where
    F: Fn(&StatusPayload) -> Result<Option<Text>> + Send + Sync,
{
    fn update(&self, payload: &StatusPayload) -> Result<Option<Text>> {
        self(payload)
    }
}

#[derive(Clone)]
pub enum Provider {
    Pull(Arc<dyn PullProvider>),
    Push(Arc<dyn PushProvider>),
}

impl Provider {
    pub fn pull<F>(f: F) -> Self
    where
        F: Fn(&SegmentContext<'_>) -> Result<Option<Text>> + Send + Sync + 'static,
    {
        Provider::Pull(Arc::new(f))
    }

    pub fn push<F>(f: F) -> Self
    where
        F: Fn(&StatusPayload) -> Result<Option<Text>> + Send + Sync + 'static,
    {
        Provider::Push(Arc::new(f))
    }

    /// Push segment that caches whatever `Custom` payload it is sent.
    pub fn cached() -> Self {
        Provider::push(|payload: &StatusPayload| match payload {
            StatusPayload::Custom { text, .. } => Ok(Some(text.clone())),
            _ => Ok(None),
        })
    }

    /// Stand-in for an optional segment whose collaborator is absent.
    pub fn noop() -> Self {
        Provider::pull(|_: &SegmentContext<'_>| Ok(None))
    }

    pub fn kind(&self) -> SegmentKind {
        match self {
            Provider::Pull(_) => SegmentKind::Pull,
            Provider::Push(_) => SegmentKind::Push,
        }
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Pull(_) => f.write_str("Provider::Pull"),
            Provider::Push(_) => f.write_str("Provider::Push"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Pull,
    Push,
}

/// Registry with every built-in segment, configured from `config`.
pub fn builtin_registry(config: &Config) -> SegmentRegistry {
    let glyphs = Glyphs::for_style(config.glyphs);
    let options = &config.segments;

    SegmentRegistry::builder()
        .register(SegmentId::MODIFIED, Provider::Pull(Arc::new(ModifiedSegment::new(glyphs))))
        .register(SegmentId::BUFFER_NAME, Provider::Pull(Arc::new(BufferNameSegment)))
        .register(SegmentId::WORKSPACE, Provider::Pull(Arc::new(WorkspaceSegment)))
        .register_optional(
            SegmentId::SEARCH,
            config
                .capabilities
                .search_counter
                .then(|| Provider::Pull(Arc::new(SearchSegment))),
        )
        .register_optional(
            SegmentId::CURSORS,
            config
                .capabilities
                .multiple_cursors
                .then(|| Provider::Pull(Arc::new(CursorsSegment::new(glyphs)))),
        )
        .register(SegmentId::SELECTION, Provider::Pull(Arc::new(SelectionSegment)))
        .register(
            SegmentId::POSITION,
            Provider::Pull(Arc::new(PositionSegment::new(
                options.position.show_percentage,
            ))),
        )
        .register(SegmentId::EOL, Provider::Pull(Arc::new(EolSegment)))
        .register(
            SegmentId::ENCODING,
            Provider::Pull(Arc::new(EncodingSegment::new(options.encoding.hide_utf8))),
        )
        .register(SegmentId::VC, Provider::Push(Arc::new(VcSegment::new(glyphs))))
        .register(SegmentId::MODE, Provider::Pull(Arc::new(ModeSegment)))
        .register(SegmentId::MISC_INFO, Provider::Pull(Arc::new(MiscInfoSegment)))
        .register(
            SegmentId::DIAGNOSTICS,
            Provider::Push(Arc::new(DiagnosticsSegment::new(glyphs))),
        )
        .register(SegmentId::PROCESS, Provider::Pull(Arc::new(ProcessSegment)))
        .build()
}
