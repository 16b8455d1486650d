//! # strata-store
//!
//! `ParamTree`, a concrete [`ParameterStore`](strata_core::ParameterStore):
//! nested sections of declared parameters, each carrying a current value,
//! a default, and a description. Input can be loaded from TOML or JSON
//! against the declared schema; current values and commented default files
//! can be written back out.
//!
//! The tree checks structure only — balanced nesting and
//! declared-before-use. Interpreting the string values is up to whoever
//! reads them.

pub mod format;
pub mod tree;

pub use tree::{ParamTree, ParameterEntry};
