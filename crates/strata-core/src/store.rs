use std::fmt::Display;
use std::str::FromStr;

use crate::{Result, StrataError};

/// A hierarchical key/value parameter backend.
///
/// The store keeps its own subsection nesting stack. `enter_subsection`
/// and `leave_subsection` must balance per traversal of one registrant;
/// `declare`, `set`, and `get` operate on the current nesting level only.
///
/// The store checks structure (declared-before-use, balanced nesting), not
/// values: type and range validation of parameter values is the concern of
/// whoever reads them.
pub trait ParameterStore {
    /// Push one nesting level, creating the subsection if it does not
    /// exist yet.
    fn enter_subsection(&mut self, name: &str);

    /// Pop one nesting level. Errors with
    /// [`StrataError::UnbalancedSection`] when called at the root.
    fn leave_subsection(&mut self) -> Result<()>;

    /// Declare a parameter in the current subsection, with its default
    /// value and a human-readable description.
    fn declare(&mut self, name: &str, default: &str, description: &str) -> Result<()>;

    /// Overwrite the value of an already-declared parameter in the
    /// current subsection.
    fn set(&mut self, name: &str, value: &str) -> Result<()>;

    /// Read the current value of a declared parameter in the current
    /// subsection.
    fn get(&self, name: &str) -> Result<String>;
}

/// Typed reads on top of any [`ParameterStore`].
pub trait ParameterStoreExt: ParameterStore {
    /// Read a parameter and parse it via [`FromStr`].
    fn get_parsed<T>(&self, name: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.get(name)?;
        match raw.trim().parse::<T>() {
            Ok(value) => Ok(value),
            Err(e) => Err(StrataError::ParameterParse {
                name: name.to_string(),
                value: raw,
                reason: e.to_string(),
            }),
        }
    }
}

impl<S: ParameterStore + ?Sized> ParameterStoreExt for S {}
