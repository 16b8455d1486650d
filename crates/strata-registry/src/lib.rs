//! # strata-registry
//!
//! The process-visible half of Strata: an append-only registry of
//! configuration sections, the path-inheritance resolver, and the two
//! whole-registry traversal passes (declare, parse).
//!
//! Registrants register at construction and tombstone their slot at
//! destruction (via the [`Registration`] guard or a dropped `Arc`); slot
//! indices are never reused, so a [`RegistrantId`] stays a valid index for
//! the registry's whole lifetime, until an explicit [`SectionRegistry::reset`].
//!
//! There is no global registry. Construct a [`SectionRegistry`] per
//! application (or per test) and share it as `Arc<SectionRegistry>`.

pub mod path;
pub mod registry;
pub mod traverse;

pub use path::SEPARATOR;
pub use registry::{Registration, RegistrantId, SectionRegistry};
