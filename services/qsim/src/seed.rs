use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SeedParseError {
    #[error("Seed is not coercible to an integer: {0:?}")]
    NotAnInteger(String),
}

/// Client-supplied RNG seed.
///
/// The wire contract is tolerant: JSON integers, floats (truncated toward
/// zero) and numeric strings all coerce; anything else is a
/// deserialization error surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Seed(i64);

impl Seed {
    pub const DEFAULT: Seed = Seed(42);

    pub fn new(value: i64) -> Self {
        Seed(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// The word fed to the simulator RNG. Negative seeds reinterpret as
    /// unsigned rather than failing.
    pub fn rng_word(&self) -> u64 {
        self.0 as u64
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Seed(value)
    }
}

impl TryFrom<&str> for Seed {
    type Error = SeedParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value
            .trim()
            .parse::<i64>()
            .map(Seed)
            .map_err(|_| SeedParseError::NotAnInteger(value.to_string()))
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SeedVisitor;

        impl<'de> serde::de::Visitor<'de> for SeedVisitor {
            type Value = Seed;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer seed or a value coercible to one")
            }

            fn visit_i64<E>(self, v: i64) -> Result<Seed, E>
            where
                E: serde::de::Error,
            {
                Ok(Seed(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Seed, E>
            where
                E: serde::de::Error,
            {
                i64::try_from(v)
                    .map(Seed)
                    .map_err(|_| E::custom(format!("seed {} out of range", v)))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Seed, E>
            where
                E: serde::de::Error,
            {
                if v.is_finite() {
                    Ok(Seed(v.trunc() as i64))
                } else {
                    Err(E::custom("seed must be a finite number"))
                }
            }

            fn visit_str<E>(self, v: &str) -> Result<Seed, E>
            where
                E: serde::de::Error,
            {
                Seed::try_from(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(SeedVisitor)
    }
}
