//! Address: the canonical textual identifier derived from a public key.
//!
//! An address is `"0x"` followed by the lowercase hex of the 32-byte
//! Ed25519 public key: 66 characters total. It is the primary key under
//! which published records are stored and looked up.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::crypto::PublicKey;
use crate::error::CoreError;

/// The `0x` marker address and signature text start with.
pub const ADDRESS_PREFIX: &str = "0x";

/// Total address length: 2-char prefix + 64 hex digits.
pub const ADDRESS_LEN: usize = 66;

/// A canonical, validated address string.
///
/// Construction goes through [`Address::from_public_key`] or
/// [`Address::parse`]; an `Address` value always holds the canonical
/// lowercase form.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Address(String);

impl Address {
    /// Derive the address for a public key.
    pub fn from_public_key(key: &PublicKey) -> Self {
        Self(format!("{}{}", ADDRESS_PREFIX, key.to_hex()))
    }

    /// Parse address text, normalizing hex digits to lowercase.
    ///
    /// Rejects anything that is not exactly `0x` + 64 hex digits.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        if s.len() != ADDRESS_LEN || !s.starts_with(ADDRESS_PREFIX) {
            return Err(CoreError::InvalidAddress);
        }
        let digits = &s[ADDRESS_PREFIX.len()..];
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidAddress);
        }
        Ok(Self(format!(
            "{}{}",
            ADDRESS_PREFIX,
            digits.to_ascii_lowercase()
        )))
    }

    /// The canonical address text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode back to the public key the address was derived from.
    pub fn to_public_key(&self) -> Result<PublicKey, CoreError> {
        PublicKey::from_hex(&self.0[ADDRESS_PREFIX.len()..]).map_err(|_| CoreError::InvalidAddress)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", &self.0[..18])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::parse(&s).map_err(serde::de::Error::custom)
    }
}
