//! # strata-runtime
//!
//! The driver that ties a [`SectionRegistry`](strata_registry::SectionRegistry)
//! to a [`ParamTree`](strata_store::ParamTree): run the declare pass, load
//! a parameter file (TOML or JSON by extension), run the parse pass. When
//! the input file is missing, a commented default file is generated in its
//! place so the user has something to edit.

pub mod bootstrap;

pub use bootstrap::{initialize, write_parameters};
