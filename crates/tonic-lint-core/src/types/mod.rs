//! Collection aliases shared across tonic-lint crates.

pub mod collections;

pub use collections::{FxHashMap, FxHashSet};
