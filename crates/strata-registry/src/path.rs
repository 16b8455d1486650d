use crate::registry::{RegistrantId, SectionRegistry, Slot};

/// Separator between section path segments.
///
/// A declared path beginning with the separator is absolute. There is no
/// escape syntax: a literal `/` inside a segment name is unsupported.
pub const SEPARATOR: char = '/';

impl SectionRegistry {
    /// Resolve the full ordered section path for `id`.
    ///
    /// The path is recomputed on every call from the current tombstone
    /// state, never cached:
    ///
    /// - An empty declared path resolves to a single section named after
    ///   the registrant's concrete type.
    /// - A path with a leading separator is absolute and is returned as
    ///   its own segments.
    /// - Anything else is relative: the nearest earlier-registered live
    ///   slot with an absolute declared path contributes a prefix. When
    ///   that ancestor's path has no trailing separator, its final segment
    ///   is a leaf name and is dropped from the prefix. With no absolute
    ///   ancestor at all, the path is rooted at the top level as-is.
    ///
    /// # Panics
    ///
    /// Panics when `id` is stale (issued before a
    /// [`reset`](SectionRegistry::reset)) or its slot is tombstoned.
    /// Neither can happen through normal use of [`Registration`] guards.
    ///
    /// [`Registration`]: crate::registry::Registration
    pub fn section_path(&self, id: RegistrantId) -> Vec<String> {
        let slots = self.snapshot();
        let Some(slot) = slots.get(id.index()) else {
            panic!(
                "registrant id {} is stale: registry holds {} slots (reset since registration?)",
                id.index(),
                slots.len()
            );
        };
        let Some((name, type_label)) = slot
            .as_ref()
            .and_then(|s| declared_name(s).map(|n| (n, s.type_label)))
        else {
            panic!("registrant id {} is tombstoned", id.index());
        };

        if name.is_empty() {
            return vec![type_label.to_string()];
        }
        let own = segments(&name);
        if name.starts_with(SEPARATOR) {
            return own;
        }

        // Relative path: the nearest preceding absolute declaration wins.
        // Relative ancestors are never chained through.
        for slot in slots[..id.index()].iter().rev() {
            let Some(slot) = slot else { continue };
            let Some(ancestor) = declared_name(slot) else { continue };
            if !ancestor.starts_with(SEPARATOR) {
                continue;
            }
            let mut path = segments(&ancestor);
            if !ancestor.ends_with(SEPARATOR) {
                // The ancestor's final segment is its own leaf name, not a
                // directory to descend into.
                path.pop();
            }
            path.extend(own);
            return path;
        }
        own
    }
}

fn declared_name(slot: &Slot) -> Option<String> {
    slot.registrant.upgrade().map(|r| r.lock().section_name())
}

/// Non-empty segments of a declared path. Leading and trailing separators
/// (and doubled separators) produce empty segments, which are dropped.
fn segments(name: &str) -> Vec<String> {
    name.split(SEPARATOR)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
