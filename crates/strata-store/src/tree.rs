use std::collections::BTreeMap;

use strata_core::{ParameterStore, Result, StrataError};

/// One declared parameter: current value, default, description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterEntry {
    pub value: String,
    pub default: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Section {
    pub(crate) parameters: BTreeMap<String, ParameterEntry>,
    pub(crate) subsections: BTreeMap<String, Section>,
}

/// Concrete hierarchical parameter store.
///
/// Sections nest arbitrarily deep; a cursor stack tracks the current
/// scope. `enter_subsection` creates missing sections (the declare pass
/// builds the tree this way), `leave_subsection` errors at the root.
#[derive(Debug, Default)]
pub struct ParamTree {
    pub(crate) root: Section,
    cursor: Vec<String>,
}

impl ParamTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.cursor.len()
    }

    /// Drop every section and parameter and return to the root scope.
    pub fn clear(&mut self) {
        self.root = Section::default();
        self.cursor.clear();
    }

    /// Look up an entry (value, default, description) in the current
    /// scope.
    pub fn entry(&self, name: &str) -> Option<&ParameterEntry> {
        self.current().parameters.get(name)
    }

    pub(crate) fn scope(&self) -> String {
        self.cursor.join("/")
    }

    fn current(&self) -> &Section {
        let mut section = &self.root;
        for name in &self.cursor {
            section = section
                .subsections
                .get(name)
                .expect("cursor points at an existing section");
        }
        section
    }

    fn current_mut(&mut self) -> &mut Section {
        let mut section = &mut self.root;
        for name in &self.cursor {
            section = section
                .subsections
                .get_mut(name)
                .expect("cursor points at an existing section");
        }
        section
    }
}

impl ParameterStore for ParamTree {
    fn enter_subsection(&mut self, name: &str) {
        self.current_mut()
            .subsections
            .entry(name.to_string())
            .or_default();
        self.cursor.push(name.to_string());
    }

    fn leave_subsection(&mut self) -> Result<()> {
        if self.cursor.pop().is_none() {
            return Err(StrataError::UnbalancedSection);
        }
        Ok(())
    }

    fn declare(&mut self, name: &str, default: &str, description: &str) -> Result<()> {
        self.current_mut().parameters.insert(
            name.to_string(),
            ParameterEntry {
                value: default.to_string(),
                default: default.to_string(),
                description: description.to_string(),
            },
        );
        Ok(())
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        let section = self.scope();
        match self.current_mut().parameters.get_mut(name) {
            Some(entry) => {
                entry.value = value.to_string();
                Ok(())
            }
            None => Err(StrataError::UnknownParameter {
                section,
                name: name.to_string(),
            }),
        }
    }

    fn get(&self, name: &str) -> Result<String> {
        self.current()
            .parameters
            .get(name)
            .map(|entry| entry.value.clone())
            .ok_or_else(|| StrataError::UnknownParameter {
                section: self.scope(),
                name: name.to_string(),
            })
    }
}
