//! Generic structural value engine.
//!
//! This crate provides:
//! - Untyped runtime values (`Value`, `Heap`, `Map`, atomic payload types)
//! - Type classification into a closed `Category` set
//! - Deep clone and in-place deep merge (`deep_extend`)
//! - A JSON bridge following the host's stringify rules
//! - `Engine` / `EngineConfig` for reproducing legacy-host classification
//!
//! # Composites and Atomics
//!
//! Objects and arrays are composites: clone rebuilds them and merge recurses
//! into matching objects. Everything else is atomic and is copied as a
//! handle. Composite containers are owned, so a value can never contain
//! itself and traversal always terminates.
//!
//! Clone, merge, equality, `Display` and JSON encoding grow the stack on
//! demand. Dropping a value still recurses once per nesting level, so
//! extremely deep trees are bounded by the thread stack when dropped.

mod classify;
mod clone;
mod config;
mod json;
mod merge;
mod value;

#[cfg(test)]
mod testing;

pub use classify::{classify, classify_with, Category, HostProfile};
pub use clone::{deep_clone, deep_clone_with};
pub use config::{Engine, EngineConfig, HOST_PROFILE_ENV};
pub use json::to_json;
pub use merge::{deep_extend, deep_extend_with};
pub use value::{
    DateValue, ErrorValue, FunctionValue, Heap, Map, NativeFn, RegExpValue, Value,
};
