use crate::store::ParameterStore;

/// Trait implemented by every object that contributes a configuration
/// section to the registry.
///
/// All methods default to no-ops, so implementors override only the phases
/// they take part in: a registrant that only reads values implements
/// `parse_parameters`, one that only publishes a schema implements
/// `declare_parameters`, and so on.
pub trait Registrant: Send {
    /// The declared section path for this registrant.
    ///
    /// A leading `/` makes the path absolute; otherwise it is spliced
    /// under the nearest earlier-registered absolute path (see
    /// `strata-registry`). An empty name resolves to a single section
    /// named after the registrant's concrete type.
    fn section_name(&self) -> String {
        String::new()
    }

    /// Declare parameter names, defaults, and descriptions at the current
    /// subsection scope. Runs during the declare pass, before any input
    /// has been loaded.
    fn declare_parameters(&mut self, _store: &mut dyn ParameterStore) -> crate::Result<()> {
        Ok(())
    }

    /// Hook invoked right after `declare_parameters`, still inside the
    /// entered subsection.
    fn after_declare(&mut self) {}

    /// Read values at the current subsection scope. Runs during the parse
    /// pass, after the driver has loaded raw input into the store.
    fn parse_parameters(&mut self, _store: &mut dyn ParameterStore) -> crate::Result<()> {
        Ok(())
    }

    /// Hook invoked right after `parse_parameters`, still inside the
    /// entered subsection.
    fn after_parse(&mut self) {}
}
