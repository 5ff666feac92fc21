use crate::error::SegmentError;
use crate::segments::{Provider, PullProvider, SegmentContext, SegmentId, SegmentRegistry};
use crate::text::Text;
use crate::utils::CacheStore;
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};
use tracing::{trace, warn};

/// Which segments go where. Order is rendering order; the right side is
/// anchored to the trailing edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    pub left: Vec<SegmentId>,
    #[serde(default)]
    pub right: Vec<SegmentId>,
}

/// Builds one status line from the registry and the cache.
pub struct LayoutAssembler<'a> {
    registry: &'a SegmentRegistry,
    cache: &'a CacheStore,
}

impl<'a> LayoutAssembler<'a> {
    pub fn new(registry: &'a SegmentRegistry, cache: &'a CacheStore) -> Self {
        Self { registry, cache }
    }

    /// Left side, padding, right side. Padding is a single space reservation
    /// sized so the right side ends exactly at `target_width`. When both
    /// sides together are wider than `target_width` the line overflows
    /// untruncated.
    pub fn render(&self, config: &LayoutConfig, ctx: &SegmentContext<'_>, target_width: usize) -> Text {
        let left = self.render_side(&config.left, ctx);
        let right = self.render_side(&config.right, ctx);

        let reserve = right.width();
        let used = left.width() + reserve;
        if used > target_width {
            trace!(view = %ctx.view, used, target_width, "status line overflows");
        }

        let mut line = left;
        line.push_space(target_width.saturating_sub(used));
        line.append(right);
        line
    }

    fn render_side(&self, ids: &[SegmentId], ctx: &SegmentContext<'_>) -> Text {
        let mut side = Text::new();
        for id in ids {
            side.append(self.render_segment(id, ctx));
        }
        side
    }

    fn render_segment(&self, id: &SegmentId, ctx: &SegmentContext<'_>) -> Text {
        let Some(descriptor) = self.registry.resolve(id) else {
            trace!(segment = %id, "unknown segment renders empty");
            return Text::new();
        };

        match descriptor.provider() {
            Provider::Pull(provider) => call_pull(id, provider.as_ref(), ctx),
            // Push segments are never computed here; before their first
            // event there is simply nothing cached.
            Provider::Push(_) => self.cache.get(id, ctx.view).unwrap_or_default(),
        }
    }
}

/// Run a pull provider, turning errors and panics into empty output.
pub(crate) fn call_pull(id: &SegmentId, provider: &dyn PullProvider, ctx: &SegmentContext<'_>) -> Text {
    match panic::catch_unwind(AssertUnwindSafe(|| provider.render(ctx))) {
        Ok(Ok(text)) => text.unwrap_or_default(),
        Ok(Err(source)) => {
            let error = SegmentError::Failed {
                segment: id.clone(),
                source,
            };
            warn!(view = %ctx.view, "{error}");
            Text::new()
        }
        Err(payload) => {
            let error = SegmentError::Panicked {
                segment: id.clone(),
                message: panic_message(payload.as_ref()),
            };
            warn!(view = %ctx.view, "{error}");
            Text::new()
        }
    }
}

pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
