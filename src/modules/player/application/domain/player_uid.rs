use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub const MIN_UID_LEN: usize = 5;
pub const MAX_UID_LEN: usize = 20;

/// Shown to Bangla-speaking customers as-is.
pub const INVALID_UID_MESSAGE: &str = "ভুল আইডি! দয়া করে সঠিক প্লেয়ার আইডি কোড দিন।";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", INVALID_UID_MESSAGE)]
pub struct InvalidPlayerUid;

/// In-game account id the purchase is delivered to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlayerUid(String);

impl PlayerUid {
    pub fn parse(raw: &str) -> Result<Self, InvalidPlayerUid> {
        let uid = raw.trim();

        if !(MIN_UID_LEN..=MAX_UID_LEN).contains(&uid.len()) {
            return Err(InvalidPlayerUid);
        }
        if !uid.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(InvalidPlayerUid);
        }

        Ok(Self(uid.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last four characters, used by the synthetic directory.
    pub fn suffix(&self) -> &str {
        // ASCII only, so byte slicing is safe
        &self.0[self.0.len() - 4..]
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PlayerUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PlayerUid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        PlayerUid::parse(&raw).map_err(serde::de::Error::custom)
    }
}
