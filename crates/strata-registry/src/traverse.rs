use tracing::debug;

use strata_core::{ParameterStore, Registrant, Result};

use crate::registry::{RegistrantId, SectionRegistry};

impl SectionRegistry {
    /// Declare pass: visit every live slot in ascending id order and let
    /// each registrant declare its parameter schema inside its resolved
    /// subsection.
    ///
    /// Run this before any raw input is loaded into the store: the full
    /// hierarchy's schema must exist before the input is parsed against
    /// it. The driver loads input strictly between this pass and
    /// [`parse_all`](Self::parse_all).
    pub fn declare_all(&self, store: &mut dyn ParameterStore) -> Result<()> {
        debug!(slots = self.len(), "starting declare pass");
        self.traverse(store, |registrant, store| {
            registrant.declare_parameters(store)?;
            registrant.after_declare();
            Ok(())
        })
    }

    /// Parse pass: same traversal and subsection bracketing as the declare
    /// pass, invoking each registrant's value-reading callback.
    pub fn parse_all(&self, store: &mut dyn ParameterStore) -> Result<()> {
        debug!(slots = self.len(), "starting parse pass");
        self.traverse(store, |registrant, store| {
            registrant.parse_parameters(store)?;
            registrant.after_parse();
            Ok(())
        })
    }

    fn traverse(
        &self,
        store: &mut dyn ParameterStore,
        visit: impl Fn(&mut dyn Registrant, &mut dyn ParameterStore) -> Result<()>,
    ) -> Result<()> {
        // Slots are iterated by index; the registry must not be mutated
        // while a pass is running.
        for index in 0..self.len() {
            let id = RegistrantId(index);
            let Some(registrant) = self.live(id) else {
                continue;
            };
            let path = self.section_path(id);
            debug!(id = index, path = %path.join("/"), "visiting registrant");
            for segment in &path {
                store.enter_subsection(segment);
            }
            let visited = visit(&mut *registrant.lock(), store);
            // Unwind the entered subsections even when the callback
            // failed, so the store's nesting stays balanced.
            for _ in &path {
                store.leave_subsection()?;
            }
            visited?;
        }
        Ok(())
    }
}
