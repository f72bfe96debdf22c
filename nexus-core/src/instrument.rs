use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::NexusError;

/// Ticker-like identifier of a tradable instrument.
///
/// Construction trims surrounding whitespace and rejects empty input, so every
/// provider call receives a non-empty id. Whether the id names an instrument
/// the backend knows about is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InstrumentId(String);

impl InstrumentId {
    /// Validate and wrap an identifier.
    ///
    /// # Errors
    /// Returns `NexusError::InvalidArg` when the trimmed input is empty.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, NexusError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(NexusError::InvalidArg(
                "instrument id must not be empty".into(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The identifier as sent to backends.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for InstrumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for InstrumentId {
    type Err = NexusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for InstrumentId {
    type Error = NexusError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for InstrumentId {
    type Error = NexusError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<InstrumentId> for String {
    fn from(id: InstrumentId) -> Self {
        id.0
    }
}
