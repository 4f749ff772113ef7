//! Object Identifier: the dotted-decimal name SNMP uses to address MIB
//! nodes, e.g. `1.3.6.1.2.1.1.5.0` (sysName.0).

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An ordered sequence of non-negative subidentifiers.
///
/// Invariant: a valid OID has at least two subidentifiers, and when the
/// first subidentifier is 0 or 1 the second is < 40 (the BER packing rule
/// folds both into a single octet; see `encode`/`parse` in `crate::ber`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectIdentifier(Vec<u32>);

impl ObjectIdentifier {
    /// Builds an OID from subidentifiers, without validating BER packing
    /// constraints (those are enforced at encode time).
    pub fn new(components: Vec<u32>) -> Self {
        ObjectIdentifier(components)
    }

    pub fn components(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when `self` is `other` or a descendant of `other` in the MIB
    /// tree, i.e. `other`'s components are a prefix of `self`'s.
    pub fn starts_with(&self, other: &ObjectIdentifier) -> bool {
        self.0.len() >= other.0.len() && self.0[..other.0.len()] == other.0[..]
    }

    /// Appends one subidentifier, returning a new OID (used when building
    /// table instance OIDs, e.g. `ifDescr` + ifIndex).
    pub fn child(&self, component: u32) -> Self {
        let mut v = self.0.clone();
        v.push(component);
        ObjectIdentifier(v)
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

impl FromStr for ObjectIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::malformed("empty OID string"));
        }
        let mut components = Vec::new();
        for part in s.split('.') {
            let n: u32 = part
                .parse()
                .map_err(|_| Error::malformed(format!("invalid OID component {part:?}")))?;
            components.push(n);
        }
        if components.len() < 2 {
            return Err(Error::malformed("OID must have at least two components"));
        }
        Ok(ObjectIdentifier(components))
    }
}

impl From<Vec<u32>> for ObjectIdentifier {
    fn from(v: Vec<u32>) -> Self {
        ObjectIdentifier(v)
    }
}

impl<const N: usize> From<[u32; N]> for ObjectIdentifier {
    fn from(v: [u32; N]) -> Self {
        ObjectIdentifier(v.to_vec())
    }
}
