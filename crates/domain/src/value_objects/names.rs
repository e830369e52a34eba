//! Name newtypes for entity owners and brands
//!
//! Unlike most value objects these carry no content rules: any string is a
//! valid owner or brand, including the empty one. The newtypes exist so a
//! brand cannot be passed where an owner is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Owner
// ============================================================================

/// Full name of whoever owns a piece of property
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Owner(String);

impl Owner {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Owner {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Owner {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<Owner> for String {
    fn from(owner: Owner) -> String {
        owner.0
    }
}

// ============================================================================
// Brand
// ============================================================================

/// Manufacturer name of a vehicle
///
/// Comparisons are exact and case-sensitive: `"Audi"` and `"audi"` are
/// different brands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Brand(String);

impl Brand {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the brand as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive comparison against a brand name.
    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Brand {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Brand {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<Brand> for String {
    fn from(brand: Brand) -> String {
        brand.0
    }
}
