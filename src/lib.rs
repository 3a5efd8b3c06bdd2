// Vehicle Patterns: creational patterns and a deferred query
// Library side of the four demonstration binaries in src/bin.

//! # Vehicle Patterns
//!
//! ## Pattern 1: Simple Factory
//! - String tag parsed into a closed `VehicleKind`, built as `Box<dyn Vehicle>`
//!
//! ## Pattern 2: Abstract Factory
//! - Brand factories (Honda, Toyota) producing a matching car + bike bundle
//!
//! ## Pattern 3: Singleton
//! - Process-wide `Messenger` behind `OnceLock`
//!
//! ## Pattern 4: Query
//! - Filter above a threshold, then sort ascending, re-evaluated per iteration
//!
//! Run individual examples with:
//! ```bash
//! cargo run --bin p1_factory
//! cargo run --bin p2_abstract_factory
//! cargo run --bin p3_singleton
//! cargo run --bin p4_query
//! ```

pub mod error;
pub mod logging;
pub mod p1_factory;
pub mod p2_abstract_factory;
pub mod p3_singleton;
pub mod p4_query;

pub use error::{PatternError, Result};
