pub mod focus;
pub mod layout;
pub mod trigger;

pub use focus::*;
pub use layout::*;
pub use trigger::*;

use crate::document::{Document, ViewId};
use crate::segments::{SegmentContext, SegmentId, SegmentRegistry};
use crate::text::Text;
use crate::utils::CacheStore;
use std::collections::HashSet;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// What the engine needs from the application that displays the line.
pub trait Host {
    /// Whatever display configuration was in place before the engine took over.
    type SavedFormat;

    fn document(&self, view: ViewId) -> Option<&Document>;

    fn selected_surface(&self) -> Option<Surface>;

    /// Point the host's status display at the engine, returning the old setup.
    fn install_status_line(&mut self) -> Self::SavedFormat;

    fn restore_status_line(&mut self, saved: Self::SavedFormat);
}

/// One rendered status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub view: ViewId,
    pub active: bool,
    pub text: Text,
}

/// Status line engine bound to a host.
///
/// Installing swaps the host's status display over to the engine; dropping
/// the engine (or calling [`Engine::uninstall`]) puts the previous one back.
/// Everything here runs on the host's render thread. Background refreshes
/// send their results back over a channel that is drained at redraw time.
pub struct Engine<H: Host> {
    host: H,
    registry: SegmentRegistry,
    cache: CacheStore,
    focus: FocusTracker,
    open_views: HashSet<ViewId>,
    runtime: Option<Handle>,
    updates_tx: UnboundedSender<PendingUpdate>,
    updates_rx: UnboundedReceiver<PendingUpdate>,
    in_flight: usize,
    saved: Option<H::SavedFormat>,
}

impl<H: Host> Engine<H> {
    pub fn install(mut host: H, registry: SegmentRegistry) -> Self {
        let saved = host.install_status_line();
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();

        let mut engine = Self {
            host,
            registry,
            cache: CacheStore::new(),
            focus: FocusTracker::new(),
            open_views: HashSet::new(),
            runtime: Handle::try_current().ok(),
            updates_tx,
            updates_rx,
            in_flight: 0,
            saved: Some(saved),
        };
        engine.on_focus_changed();
        debug!(segments = engine.registry.len(), "status line installed");
        engine
    }

    /// Run background refreshes on `handle` instead of the ambient runtime.
    pub fn with_runtime(mut self, handle: Handle) -> Self {
        self.runtime = Some(handle);
        self
    }

    /// Restore the host's previous status display. Safe to call twice.
    pub fn uninstall(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.host.restore_status_line(saved);
            self.cache.clear();
            self.open_views.clear();
            debug!("status line uninstalled");
        }
    }

    pub fn is_installed(&self) -> bool {
        self.saved.is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn registry(&self) -> &SegmentRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    pub fn current_active_view(&self) -> Option<ViewId> {
        self.focus.current_active_view()
    }

    pub fn is_active(&self, view: ViewId) -> bool {
        self.focus.is_active(view)
    }

    pub fn open_view(&mut self, view: ViewId) {
        if self.open_views.insert(view) {
            debug!(%view, "view opened");
        }
    }

    /// Drop everything cached for `view`.
    pub fn close_view(&mut self, view: ViewId) -> usize {
        self.open_views.remove(&view);
        self.focus.forget(view);
        self.cache.drop_view(view)
    }

    pub fn is_open(&self, view: ViewId) -> bool {
        self.open_views.contains(&view)
    }

    /// Overwrite the cached text of a push segment.
    pub fn put(&mut self, segment: SegmentId, view: ViewId, text: Text) -> u64 {
        self.open_view(view);
        self.cache.put(segment, view, text)
    }

    /// Assemble the line for `view`. Pull segments run now, push segments
    /// come from the cache.
    pub fn render(&self, config: &LayoutConfig, view: ViewId, target_width: usize) -> Text {
        let ctx = SegmentContext {
            view,
            active: self.focus.is_active(view),
            document: self.host.document(view),
        };
        LayoutAssembler::new(&self.registry, &self.cache).render(config, &ctx, target_width)
    }

    /// Per-refresh entry point: apply finished background work, re-read
    /// focus, then render.
    pub fn redraw(&mut self, config: &LayoutConfig, view: ViewId, target_width: usize) -> Frame {
        self.pump_updates();
        self.on_focus_changed();
        Frame {
            view,
            active: self.focus.is_active(view),
            text: self.render(config, view, target_width),
        }
    }
}

impl<H: Host> Drop for Engine<H> {
    fn drop(&mut self) {
        self.uninstall();
    }
}
