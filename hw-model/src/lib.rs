//! Typed model of the host's hardware attributes.
//!
//! [`AttributeFetcher`] turns raw named-attribute queries into
//! [`AttributeResult`]s, [`Topology::discover`] walks the per-performance-level
//! key namespace, and [`NameResolver`] maps hardware codes to labels.

pub mod attribute;
pub mod fetcher;
pub mod keys;
pub mod names;
pub mod profile;
pub mod topology;

pub use attribute::AttributeResult;
pub use fetcher::{AttributeFetcher, AttributeRequest, AttributeValue, Shape};
pub use names::NameResolver;
pub use profile::{MemoryProfile, OsProfile};
pub use topology::{CoreCounts, FrequencyRange, PerformanceLevel, Topology};
