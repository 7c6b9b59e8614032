//! `guid` / `uid` generation.

use rand::rngs::ThreadRng;
use tracing::trace;

use crate::clock::{Clock, SystemClock};
use crate::source::{HexSource, RandomHex};

/// Fixed first group of every guid. A namespace tag, not random.
pub const GUID_NAMESPACE: &str = "4b534c46";

/// Number of timestamp digits in a guid's last group.
const STAMP_DIGITS: usize = 12;

/// Identifier generator over an injected hex source and clock.
#[derive(Debug, Clone)]
pub struct IdGenerator<R = RandomHex<ThreadRng>, C = SystemClock> {
    hex: R,
    clock: C,
}

impl IdGenerator {
    /// Thread RNG and wall clock.
    pub fn system() -> Self {
        IdGenerator::new(RandomHex::thread(), SystemClock)
    }
}

impl<R: HexSource, C: Clock> IdGenerator<R, C> {
    pub fn new(hex: R, clock: C) -> Self {
        IdGenerator { hex, clock }
    }

    /// GUID-shaped identifier: `4b534c46-XXXX-4XXX-XXXX-DDDDDDDDDDDD`.
    ///
    /// The last group holds the first 12 digits of the millisecond
    /// timestamp, zero-padded on the left for clocks under 12 digits.
    pub fn guid(&mut self) -> String {
        let stamp = format!("{:0>width$}", self.clock.now_millis(), width = STAMP_DIGITS);
        let id = format!(
            "{GUID_NAMESPACE}-{}-4{}-{}-{}",
            self.hex.hex_digits(4),
            self.hex.hex_digits(3),
            self.hex.hex_digits(4),
            &stamp[..STAMP_DIGITS],
        );
        trace!(%id, "generated guid");
        id
    }

    /// Millisecond timestamp followed by 4 hex digits, no separators.
    pub fn uid(&mut self) -> String {
        let id = format!("{}{}", self.clock.now_millis(), self.hex.hex_digits(4));
        trace!(%id, "generated uid");
        id
    }

    pub fn into_parts(self) -> (R, C) {
        (self.hex, self.clock)
    }
}

/// Generate a guid from the thread RNG and the wall clock.
pub fn guid() -> String {
    IdGenerator::system().guid()
}

/// Generate a uid from the thread RNG and the wall clock.
pub fn uid() -> String {
    IdGenerator::system().uid()
}

/// Check the guid shape produced by [`IdGenerator::guid`].
pub fn is_guid(candidate: &str) -> bool {
    let groups: Vec<&str> = candidate.split('-').collect();
    let [namespace, second, third, fourth, stamp] = groups.as_slice() else {
        return false;
    };
    let hex = |group: &str, len: usize| {
        group.len() == len
            && group
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    };
    *namespace == GUID_NAMESPACE
        && hex(*second, 4)
        && third.starts_with('4')
        && hex(*third, 4)
        && hex(*fourth, 4)
        && stamp.len() == STAMP_DIGITS
        && stamp.bytes().all(|b| b.is_ascii_digit())
}
