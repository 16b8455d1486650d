//! # strata-core
//!
//! Core traits and error types for the Strata configuration system.
//! This crate defines the vocabulary shared by the registry, the parameter
//! store, and the bootstrap driver: the [`Registrant`] trait implemented by
//! every object that contributes a configuration section, and the
//! [`ParameterStore`] trait implemented by hierarchical parameter backends.

pub mod error;
pub mod registrant;
pub mod store;

pub use error::{Result, StrataError};
pub use registrant::Registrant;
pub use store::{ParameterStore, ParameterStoreExt};
