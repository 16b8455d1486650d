use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info};

use strata_core::Registrant;

/// Stable index of a registrant's slot, assigned at registration.
///
/// Equal to the registry length at insertion time and never reused:
/// tombstoning a registrant leaves every other id untouched. A
/// [`SectionRegistry::reset`] invalidates all outstanding ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrantId(pub(crate) usize);

impl RegistrantId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone)]
pub(crate) struct Slot {
    pub(crate) registrant: Weak<Mutex<dyn Registrant>>,
    /// Concrete type name of the registrant, captured at registration;
    /// used as the section name when the declared path is empty.
    pub(crate) type_label: &'static str,
}

/// Append-only ordered list of registrant slots, each live or tombstoned.
///
/// The registry holds only weak references; application code owns its
/// registrants. A slot reads as tombstoned either after an explicit
/// [`unregister`](Self::unregister) or once the registrant's `Arc` has
/// been dropped — both paths are equivalent for resolution and traversal.
///
/// Registration and deregistration must not happen while a declare or
/// parse pass is running; the passes iterate slots by index and give no
/// guarantees under interleaved mutation.
#[derive(Default)]
pub struct SectionRegistry {
    slots: RwLock<Vec<Option<Slot>>>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a live slot for `registrant` and return its id.
    ///
    /// Call exactly once per registrant, at construction. Prefer
    /// [`Registration::attach`], which pairs the call with guaranteed
    /// deregistration.
    pub fn register<R: Registrant + 'static>(&self, registrant: &Arc<Mutex<R>>) -> RegistrantId {
        let weak = Arc::downgrade(registrant);
        let weak: Weak<Mutex<dyn Registrant>> = weak;
        let mut slots = self.slots.write();
        let id = RegistrantId(slots.len());
        slots.push(Some(Slot {
            registrant: weak,
            type_label: std::any::type_name::<R>(),
        }));
        debug!(id = id.0, registrant = std::any::type_name::<R>(), "registered section");
        id
    }

    /// Tombstone slot `id`. Idempotent; ids past the end (stale after a
    /// [`reset`](Self::reset)) are ignored so late guard drops are harmless.
    pub fn unregister(&self, id: RegistrantId) {
        let mut slots = self.slots.write();
        if let Some(slot) = slots.get_mut(id.0) {
            if slot.take().is_some() {
                debug!(id = id.0, "unregistered section");
            }
        }
    }

    /// Clear every slot, returning the registry to empty.
    ///
    /// All previously issued ids become stale; resolving a path against a
    /// stale id afterwards panics.
    pub fn reset(&self) {
        let mut slots = self.slots.write();
        if !slots.is_empty() {
            debug!(slots = slots.len(), "registry reset");
        }
        slots.clear();
    }

    /// Total number of slots, live and tombstoned.
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }

    /// Number of slots whose registrant is still alive.
    pub fn live_count(&self) -> usize {
        self.slots
            .read()
            .iter()
            .filter(|slot| matches!(slot, Some(s) if s.registrant.strong_count() > 0))
            .count()
    }

    /// Log one line per slot, live or tombstoned.
    pub fn log_entries(&self) {
        for (index, slot) in self.slots.read().iter().enumerate() {
            let live = slot
                .as_ref()
                .and_then(|s| s.registrant.upgrade().map(|r| (r, s.type_label)));
            match live {
                Some((registrant, type_label)) => {
                    let name = registrant.lock().section_name();
                    let name = if name.is_empty() {
                        type_label.to_string()
                    } else {
                        name
                    };
                    info!(id = index, section = %name, "registry slot");
                }
                None => info!(id = index, "registry slot: tombstoned"),
            }
        }
    }

    pub(crate) fn snapshot(&self) -> Vec<Option<Slot>> {
        self.slots.read().clone()
    }

    pub(crate) fn live(&self, id: RegistrantId) -> Option<Arc<Mutex<dyn Registrant>>> {
        let slots = self.slots.read();
        slots.get(id.0)?.as_ref()?.registrant.upgrade()
    }
}

/// Scoped registration: registers on construction, tombstones its slot on
/// drop, so deregistration happens on every exit path.
pub struct Registration {
    registry: Arc<SectionRegistry>,
    id: RegistrantId,
}

impl Registration {
    pub fn new<R: Registrant + 'static>(
        registry: Arc<SectionRegistry>,
        registrant: &Arc<Mutex<R>>,
    ) -> Self {
        let id = registry.register(registrant);
        Self { registry, id }
    }

    /// Wrap a registrant value and register it in one step.
    pub fn attach<R: Registrant + 'static>(
        registry: &Arc<SectionRegistry>,
        registrant: R,
    ) -> (Arc<Mutex<R>>, Registration) {
        let registrant = Arc::new(Mutex::new(registrant));
        let registration = Registration::new(Arc::clone(registry), &registrant);
        (registrant, registration)
    }

    pub fn id(&self) -> RegistrantId {
        self.id
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.registry.unregister(self.id);
    }
}
