//! # Derivation Paths
//!
//! `m/0'/1'` style paths for SLIP-0010 over curve25519.
//!
//! ```text
//! m / 44' / 0' / 0'
//! │    │     │    └── hardened child 0
//! │    │     └─────── hardened child 0
//! │    └───────────── hardened child 44
//! └────────────────── master key
//! ```
//!
//! Curve25519 has no public (non-hardened) derivation, so every segment must
//! carry a `'` or `h` suffix. `m` alone is the master key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::crypto::HARDENED_OFFSET;
use crate::error::{Error, Result};

/// Path used when the caller does not pick one
pub const DEFAULT_DERIVATION_PATH: &str = "m/0'";

/// A sequence of hardened child indices, stored without the hardened offset
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivationPath(Vec<u32>);

impl DerivationPath {
    /// The master key itself
    pub fn master() -> Self {
        Self(Vec::new())
    }

    /// Build from raw child indices
    pub fn from_indices(indices: &[u32]) -> Result<Self> {
        if let Some(index) = indices.iter().find(|&&i| i >= HARDENED_OFFSET) {
            return Err(Error::InvalidDerivationPath(format!(
                "child index {} is out of range",
                index
            )));
        }
        Ok(Self(indices.to_vec()))
    }

    /// Append a hardened child
    pub fn child(&self, index: u32) -> Result<Self> {
        let mut indices = self.0.clone();
        indices.push(index);
        Self::from_indices(&indices)
    }

    /// Child indices, without the hardened offset
    pub fn indices(&self) -> &[u32] {
        &self.0
    }

    /// Number of derivation steps
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl Default for DerivationPath {
    fn default() -> Self {
        Self(vec![0])
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidDerivationPath(format!("{:?}: {}", s, reason));

        let mut segments = s.trim().split('/');
        if segments.next() != Some("m") {
            return Err(invalid("must start with \"m\""));
        }

        let mut indices = Vec::new();
        for segment in segments {
            let number = segment
                .strip_suffix('\'')
                .or_else(|| segment.strip_suffix('h'))
                .ok_or_else(|| invalid("only hardened segments are supported"))?;
            if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid("segment is not a number"));
            }
            let index: u32 = number
                .parse()
                .map_err(|_| invalid("segment is out of range"))?;
            if index >= HARDENED_OFFSET {
                return Err(invalid("segment is out of range"));
            }
            indices.push(index);
        }

        Ok(Self(indices))
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for index in &self.0 {
            write!(f, "/{}'", index)?;
        }
        Ok(())
    }
}

impl Serialize for DerivationPath {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DerivationPath {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths() {
        assert_eq!("m".parse::<DerivationPath>().unwrap().indices(), &[] as &[u32]);
        assert_eq!("m/0'".parse::<DerivationPath>().unwrap().indices(), &[0]);
        assert_eq!(
            "m/44'/0h/7'".parse::<DerivationPath>().unwrap().indices(),
            &[44, 0, 7]
        );
    }

    #[test]
    fn test_default_is_m_0h() {
        let parsed: DerivationPath = DEFAULT_DERIVATION_PATH.parse().unwrap();
        assert_eq!(parsed, DerivationPath::default());
        assert_eq!(DerivationPath::default().to_string(), "m/0'");
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["m", "m/0'", "m/44'/501'/0'/0'", "m/2147483647'"] {
            let path: DerivationPath = s.parse().unwrap();
            assert_eq!(path.to_string(), s);
        }
        let h: DerivationPath = "m/1h/2h".parse().unwrap();
        assert_eq!(h.to_string(), "m/1'/2'");
    }

    #[test]
    fn test_rejects_invalid_paths() {
        for bad in [
            "", "0'", "M/0'", "m/", "m/0", "m/0'/1", "m/a'", "m/'", "m/-1'", "m/+1'",
            "m/2147483648'", "m/99999999999'", "m//0'", "m/0''",
        ] {
            assert!(
                matches!(
                    bad.parse::<DerivationPath>(),
                    Err(Error::InvalidDerivationPath(_))
                ),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_child_and_depth() {
        let path = DerivationPath::master().child(44).unwrap().child(0).unwrap();
        assert_eq!(path.to_string(), "m/44'/0'");
        assert_eq!(path.depth(), 2);
        assert!(path.child(HARDENED_OFFSET).is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let path: DerivationPath = "m/1'/2'".parse().unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"m/1'/2'\"");
        assert_eq!(serde_json::from_str::<DerivationPath>(&json).unwrap(), path);
        assert!(serde_json::from_str::<DerivationPath>("\"m/1\"").is_err());
    }
}
