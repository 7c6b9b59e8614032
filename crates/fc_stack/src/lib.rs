//! Stack growth for structural recursion.
//!
//! Cloning and merging walk a value tree one call frame per nesting level.
//! Deeply nested documents (a few hundred thousand levels of `[[[...]]]`)
//! would otherwise exhaust the thread stack, so every recursive step in the
//! value engine goes through [`ensure_sufficient_stack`].
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` allocates a fresh stack segment on demand.
//! - **WASM targets**: passthrough; the runtime owns the stack.
//!
//! # Sizing
//!
//! - **Red zone**: 64KB. A clone or merge frame is small, so this leaves
//!   room for several hundred levels before the next check.
//! - **Segment size**: 1MB per growth.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// ```text
/// fn depth(value: &Value) -> usize {
///     ensure_sufficient_stack(|| match value {
///         Value::Array(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
///         _ => 0,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
