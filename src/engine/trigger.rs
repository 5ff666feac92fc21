use crate::document::ViewId;
use crate::engine::layout::panic_message;
use crate::engine::{Engine, Host};
use crate::error::SegmentError;
use crate::segments::{Provider, PushProvider, SegmentId, StatusPayload};
use crate::text::Text;
use anyhow::Result;
use futures::FutureExt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

/// External events the engine reacts to. Each one maps to a single cache
/// update (or focus update); none of them renders.
#[derive(Debug, Clone)]
pub enum HostEvent {
    ViewOpened(ViewId),
    ViewClosed(ViewId),
    DocumentSaved(ViewId),
    FocusChanged,
    ExternalStatus { view: ViewId, payload: StatusPayload },
    JobFinished { view: ViewId, segment: SegmentId, text: Text },
}

/// Result of a background refresh, on its way back to the render thread.
pub(crate) struct PendingUpdate {
    view: ViewId,
    segment: SegmentId,
    result: Result<StatusPayload>,
}

/// Delivers exactly one [`PendingUpdate`]. If the refresh task is dropped
/// before it finishes (runtime shutdown), a cancellation error is sent
/// instead so `settle` never waits on a result that cannot arrive.
struct UpdateSender {
    view: ViewId,
    segment: SegmentId,
    tx: Option<UnboundedSender<PendingUpdate>>,
}

impl UpdateSender {
    fn new(view: ViewId, segment: SegmentId, tx: UnboundedSender<PendingUpdate>) -> Self {
        Self {
            view,
            segment,
            tx: Some(tx),
        }
    }

    fn send(mut self, result: Result<StatusPayload>) {
        self.deliver(result);
    }

    fn deliver(&mut self, result: Result<StatusPayload>) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(PendingUpdate {
                view: self.view,
                segment: self.segment.clone(),
                result,
            });
        }
    }
}

impl Drop for UpdateSender {
    fn drop(&mut self) {
        self.deliver(Err(anyhow::anyhow!("refresh cancelled before completion")));
    }
}

impl<H: Host> Engine<H> {
    pub fn dispatch(&mut self, event: HostEvent) {
        match event {
            HostEvent::ViewOpened(view) => self.open_view(view),
            HostEvent::ViewClosed(view) => {
                self.close_view(view);
            }
            HostEvent::DocumentSaved(view) => {
                self.on_document_saved(view);
            }
            HostEvent::FocusChanged => {
                self.on_focus_changed();
            }
            HostEvent::ExternalStatus { view, payload } => self.on_external_status(view, payload),
            HostEvent::JobFinished {
                view,
                segment,
                text,
            } => {
                self.put(segment, view, text);
            }
        }
    }

    /// Re-read the host's selected surface. Returns whether the active view changed.
    pub fn on_focus_changed(&mut self) -> bool {
        let selected = self.host.selected_surface();
        self.focus.update(selected)
    }

    /// Feed an event payload to the push segment it targets and cache the result.
    pub fn on_external_status(&mut self, view: ViewId, payload: StatusPayload) {
        let segment = payload.segment();
        let Some(provider) = self.push_provider(&segment) else {
            return;
        };

        let text = match panic::catch_unwind(AssertUnwindSafe(|| provider.update(&payload))) {
            Ok(Ok(text)) => text.unwrap_or_default(),
            Ok(Err(source)) => {
                let error = SegmentError::Failed {
                    segment: segment.clone(),
                    source,
                };
                warn!(%view, "{error}");
                Text::new()
            }
            Err(payload) => {
                let error = SegmentError::Panicked {
                    segment: segment.clone(),
                    message: panic_message(payload.as_ref()),
                };
                warn!(%view, "{error}");
                Text::new()
            }
        };

        let generation = self.put(segment.clone(), view, text);
        debug!(%view, %segment, generation, "push segment updated");
    }

    /// Start the save-triggered refresh of every push segment that has one.
    /// The work runs on the async runtime; results are applied by the next
    /// [`Engine::pump_updates`]. Returns how many refreshes were started.
    pub fn on_document_saved(&mut self, view: ViewId) -> usize {
        self.open_view(view);

        let Some(runtime) = self.runtime.clone() else {
            warn!(%view, "no async runtime available, skipping background refresh");
            return 0;
        };
        let Some(document) = self.host.document(view) else {
            debug!(%view, "saved view has no document");
            return 0;
        };

        let mut scheduled = 0;
        let mut panicked = Vec::new();
        for descriptor in self.registry.push_segments() {
            let Provider::Push(provider) = descriptor.provider() else {
                continue;
            };
            let segment = descriptor.id().clone();
            let refresh = match panic::catch_unwind(AssertUnwindSafe(|| {
                provider.refresh(view, document)
            })) {
                Ok(Some(refresh)) => refresh,
                Ok(None) => continue,
                Err(payload) => {
                    let error = SegmentError::Panicked {
                        segment: segment.clone(),
                        message: panic_message(payload.as_ref()),
                    };
                    warn!(%view, "{error}");
                    panicked.push(segment);
                    continue;
                }
            };

            let reply = UpdateSender::new(view, segment, self.updates_tx.clone());
            runtime.spawn(async move {
                let result = match AssertUnwindSafe(refresh).catch_unwind().await {
                    Ok(result) => result,
                    Err(payload) => Err(anyhow::anyhow!(
                        "refresh panicked: {}",
                        panic_message(payload.as_ref())
                    )),
                };
                reply.send(result);
            });
            scheduled += 1;
        }

        for segment in panicked {
            self.put(segment, view, Text::new());
        }
        self.in_flight += scheduled;
        debug!(%view, scheduled, "background refreshes started");
        scheduled
    }

    /// Apply every background result that has arrived, without waiting.
    pub fn pump_updates(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(update) = self.updates_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            if self.apply_update(update) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for every started background refresh and apply the results.
    /// For one-shot callers; a live host uses [`Engine::pump_updates`].
    pub async fn settle(&mut self) -> usize {
        let mut applied = self.pump_updates();
        while self.in_flight > 0 {
            let Some(update) = self.updates_rx.recv().await else {
                break;
            };
            self.in_flight -= 1;
            if self.apply_update(update) {
                applied += 1;
            }
        }
        applied
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    fn apply_update(&mut self, update: PendingUpdate) -> bool {
        let PendingUpdate {
            view,
            segment,
            result,
        } = update;

        if !self.is_open(view) {
            debug!(%view, %segment, "discarding refresh for closed view");
            return false;
        }

        match result {
            Ok(payload) => self.on_external_status(view, payload),
            Err(source) => {
                let error = SegmentError::Failed {
                    segment: segment.clone(),
                    source,
                };
                warn!(%view, "{error}");
                self.put(segment, view, Text::new());
            }
        }
        true
    }

    fn push_provider(&self, segment: &SegmentId) -> Option<Arc<dyn PushProvider>> {
        let Some(descriptor) = self.registry.resolve(segment) else {
            debug!(%segment, "status for unregistered segment ignored");
            return None;
        };
        match descriptor.provider() {
            Provider::Push(provider) => Some(Arc::clone(provider)),
            Provider::Pull(_) => {
                let error = SegmentError::NotPush {
                    segment: segment.clone(),
                };
                warn!("{error}");
                None
            }
        }
    }
}
