//! Internal implementation of prefixed identifiers.

use crate::{IdError, IdResult};
use std::marker::PhantomData;
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Describes one family of prefixed identifiers.
pub trait IdKind {
    /// Literal prefix, including the trailing underscore.
    const PREFIX: &'static str;
    /// Number of lowercase hex characters after the prefix.
    const HEX_LEN: usize;
}

/// Marker for calculation identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Calculation;

impl IdKind for Calculation {
    const PREFIX: &'static str = "calc_";
    const HEX_LEN: usize = 12;
}

/// Marker for anonymous session identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Session;

impl IdKind for Session {
    const PREFIX: &'static str = "anon_";
    const HEX_LEN: usize = 16;
}

/// A canonical `<prefix><hex>` identifier.
///
/// Once constructed the contained string is guaranteed to be canonical for `K`.
///
/// # Construction
/// - [`PrefixedId::new`] generates a fresh identifier from a v4 UUID.
/// - [`PrefixedId::parse`] validates an externally supplied identifier.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PrefixedId<K> {
    value: String,
    kind: PhantomData<K>,
}

/// Identifier attached to each risk calculation.
pub type CalculationId = PrefixedId<Calculation>;

/// Identifier handed out for an anonymous session.
pub type SessionId = PrefixedId<Session>;

impl<K: IdKind> Default for PrefixedId<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: IdKind> PrefixedId<K> {
    /// Generates a new identifier from a fresh v4 UUID.
    pub fn new() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self {
            value: format!("{}{}", K::PREFIX, &hex[..K::HEX_LEN]),
            kind: PhantomData,
        }
    }

    /// Validates and wraps an identifier string that must already be canonical.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidInput`] if `input` is not `K::PREFIX` followed by exactly
    /// `K::HEX_LEN` lowercase hex characters.
    pub fn parse(input: &str) -> IdResult<Self> {
        if Self::is_canonical(input) {
            return Ok(Self {
                value: input.to_owned(),
                kind: PhantomData,
            });
        }
        Err(IdError::InvalidInput(format!(
            "identifier must be '{}' followed by {} lowercase hex characters, got: '{}'",
            K::PREFIX,
            K::HEX_LEN,
            input
        )))
    }

    /// Returns true if `input` is in canonical form for `K`.
    pub fn is_canonical(input: &str) -> bool {
        input.strip_prefix(K::PREFIX).is_some_and(|hex| {
            hex.len() == K::HEX_LEN && hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<K> fmt::Display for PrefixedId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<K> fmt::Debug for PrefixedId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrefixedId").field(&self.value).finish()
    }
}

impl<K: IdKind> FromStr for PrefixedId<K> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<K> AsRef<str> for PrefixedId<K> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[cfg(feature = "serde")]
impl<K> serde::Serialize for PrefixedId<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

#[cfg(feature = "serde")]
impl<'de, K: IdKind> serde::Deserialize<'de> for PrefixedId<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
