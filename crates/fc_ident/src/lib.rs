//! Pseudo-unique identifiers.
//!
//! Two shapes:
//!
//! - `guid()`: `4b534c46-XXXX-4XXX-XXXX-DDDDDDDDDDDD`. GUID-shaped, with a
//!   fixed namespace tag, a `4` version nibble, and the first 12 digits of
//!   the millisecond clock. Not an RFC 4122 UUID.
//! - `uid()`: the full millisecond timestamp followed by 4 hex digits.
//!
//! Neither is cryptographically random. Uniqueness holds per millisecond
//! within a 65,536-wide random space for `uid()`.
//!
//! Randomness and time are injected through [`HexSource`] and [`Clock`], so a
//! seeded generator plus a fixed clock yields reproducible identifiers.

mod clock;
mod generator;
mod source;

pub use clock::{Clock, FixedClock, SystemClock};
pub use generator::{guid, is_guid, uid, IdGenerator, GUID_NAMESPACE};
pub use source::{HexSource, RandomHex};
