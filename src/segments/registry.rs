use crate::segments::{Provider, SegmentId, SegmentKind};
use std::collections::HashMap;
use tracing::debug;

/// Registered segment: an id and the provider behind it.
#[derive(Debug, Clone)]
pub struct SegmentDescriptor {
    id: SegmentId,
    provider: Provider,
}

impl SegmentDescriptor {
    pub fn id(&self) -> &SegmentId {
        &self.id
    }

    pub fn kind(&self) -> SegmentKind {
        self.provider.kind()
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }
}

/// Collects descriptors during initialization.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    descriptors: HashMap<SegmentId, SegmentDescriptor>,
}

impl RegistryBuilder {
    /// Insert a descriptor, replacing any previous one under the same id.
    pub fn register(mut self, id: SegmentId, provider: Provider) -> Self {
        let descriptor = SegmentDescriptor {
            id: id.clone(),
            provider,
        };
        if self.descriptors.insert(id.clone(), descriptor).is_some() {
            debug!(segment = %id, "replaced segment registration");
        }
        self
    }

    /// Register a segment backed by an optional collaborator. When the
    /// collaborator is absent the id still resolves, to a provider that
    /// renders nothing.
    pub fn register_optional(self, id: SegmentId, provider: Option<Provider>) -> Self {
        match provider {
            Some(provider) => self.register(id, provider),
            None => {
                debug!(segment = %id, "optional segment unavailable, registering no-op");
                self.register(id, Provider::noop())
            }
        }
    }

    pub fn build(self) -> SegmentRegistry {
        SegmentRegistry {
            descriptors: self.descriptors,
        }
    }
}

/// Read-only mapping from segment id to descriptor, fixed after `build`.
#[derive(Debug, Default)]
pub struct SegmentRegistry {
    descriptors: HashMap<SegmentId, SegmentDescriptor>,
}

impl SegmentRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn resolve(&self, id: &SegmentId) -> Option<&SegmentDescriptor> {
        self.descriptors.get(id)
    }

    pub fn contains(&self, id: &SegmentId) -> bool {
        self.descriptors.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &SegmentDescriptor> {
        self.descriptors.values()
    }

    pub fn push_segments(&self) -> impl Iterator<Item = &SegmentDescriptor> {
        self.descriptors
            .values()
            .filter(|descriptor| descriptor.kind() == SegmentKind::Push)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::SegmentContext;
    use crate::text::Text;

    #[test]
    fn test_reregistration_replaces_descriptor() {
        let registry = SegmentRegistry::builder()
            .register(SegmentId::VC, Provider::cached())
            .register(SegmentId::VC, Provider::pull(|_: &SegmentContext<'_>| Ok(Some(Text::plain("x")))))
            .build();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve(&SegmentId::VC).unwrap().kind(), SegmentKind::Pull);
    }

    #[test]
    fn test_unknown_id_resolves_to_none() {
        let registry = SegmentRegistry::builder().build();
        assert!(registry.resolve(&SegmentId::new("bogus")).is_none());
    }

    #[test]
    fn test_missing_optional_collaborator_registers_noop() {
        let registry = SegmentRegistry::builder()
            .register_optional(SegmentId::CURSORS, None)
            .build();

        let descriptor = registry.resolve(&SegmentId::CURSORS).unwrap();
        assert_eq!(descriptor.kind(), SegmentKind::Pull);
        assert_eq!(registry.push_segments().count(), 0);
    }
}
