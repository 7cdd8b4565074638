use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Episode number as providers report it
///
/// Usually a whole number, but recaps and specials are numbered in between
/// (`12.5`). Whole numbers serialize as JSON integers, everything else as a float.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct EpisodeNumber(f64);

impl EpisodeNumber {
    /// `None` for NaN and infinities, which cannot act as a key
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// The number as an integer, when it has no fractional part
    pub fn as_whole(&self) -> Option<i64> {
        (self.0.fract() == 0.0 && self.0.abs() < i64::MAX as f64).then_some(self.0 as i64)
    }
}

impl From<u32> for EpisodeNumber {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl From<i32> for EpisodeNumber {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl PartialEq<i32> for EpisodeNumber {
    fn eq(&self, other: &i32) -> bool {
        self.0 == f64::from(*other)
    }
}

impl fmt::Display for EpisodeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_whole() {
            Some(whole) => write!(f, "{}", whole),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for EpisodeNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_whole() {
            Some(whole) => serializer.serialize_i64(whole),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for EpisodeNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).ok_or_else(|| de::Error::custom("episode number must be finite"))
    }
}
