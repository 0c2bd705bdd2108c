use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static BD_MOBILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\+?88)?(01[3-9]\d{8})$").expect("contact number pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid contact number, expected a Bangladeshi mobile number like 01712345678")]
pub struct InvalidContactNumber;

/// Bangladeshi mobile number in local 11-digit form (`01XXXXXXXXX`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactNumber(String);

impl ContactNumber {
    /// Accepts `01…`, `8801…` and `+8801…`, ignoring spaces and dashes.
    pub fn parse(raw: &str) -> Result<Self, InvalidContactNumber> {
        let compact: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();

        BD_MOBILE
            .captures(&compact)
            .and_then(|caps| caps.get(1))
            .map(|local| Self(local.as_str().to_string()))
            .ok_or(InvalidContactNumber)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContactNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
