use std::fmt;

use rand::Rng;

pub const ORDER_CODE_PREFIX: &str = "TP";
const ORDER_CODE_DIGITS: usize = 8;

/// Human-readable handle used for guest tracking, e.g. `TP04718263`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderCode(String);

impl OrderCode {
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let digits: String = (0..ORDER_CODE_DIGITS)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        Self(format!("{ORDER_CODE_PREFIX}{digits}"))
    }

    /// Wraps a code read back from storage.
    pub fn from_stored(code: String) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for OrderCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
