//! Edilens Domain Layer
//!
//! This crate contains the core vocabulary and value objects for Edilens.
//! It carries a single primitive dependency (uuid) and defines the
//! fundamental concepts and trait interfaces that all other layers depend
//! upon.
//!
//! ## Key Concepts
//!
//! - **SegmentTag**: one of the 13 known X12 850/855 segment tags, in a
//!   fixed vocabulary order that doubles as the tie-break order for
//!   heuristic matching
//! - **RequirementRecord**: the per-segment requirement/usage snapshot
//!   built up from specification evidence
//! - **DataType**: the X12 element data-type codes with tiered resolution
//! - **ArtifactId**: opaque UUIDv7 handle for stored transaction payloads
//!
//! ## Architecture
//!
//! Pure vocabulary and business rules only. Network and I/O
//! implementations live in other crates behind the traits defined here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod artifact;
pub mod datatype;
pub mod requirement;
pub mod segment;
pub mod traits;
pub mod vocabulary;

// Re-exports for convenience
pub use artifact::ArtifactId;
pub use datatype::DataType;
pub use requirement::{CompanyUsage, RequirementRecord, X12Requirement};
pub use segment::SegmentTag;
