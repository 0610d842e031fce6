//! Resource Data Model
//!
//! The four resource shapes served by the backend store. All of them are
//! externally sourced, immutable once received, and never persisted on the
//! client side: each record is fetched for one render and discarded.
//!
//! None of the entities carries a stable identifier, which is why rendering
//! is always a full section replace and never an incremental patch.

use serde::{Deserialize, Serialize};

/// A lodging category shown in the categories strip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Display name; also the key into the icon lookup table
    pub name: String,
}

impl Category {
    /// Create a category by name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A destination or recommended-place card.
///
/// Popular destinations and recommended places are structurally identical
/// and interchangeable for search purposes; search always concatenates
/// destinations first, recommended places second.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Display name; the field search matches against
    pub name: String,
    /// Card image URL or path
    pub image: String,
    /// Numeric rating shown on the card
    pub rating: f64,
}

impl Place {
    /// Create a place card.
    pub fn new(name: impl Into<String>, image: impl Into<String>, rating: f64) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            rating,
        }
    }
}

/// The signed-in user's profile record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name, rendered verbatim
    pub name: String,
    /// Avatar filename. Absent, empty, or equal to the sentinel default
    /// filename all mean "use a generated placeholder avatar".
    #[serde(default)]
    pub avatar: Option<String>,
}
