//! Type-safe identifier wrappers.
//!
//! Players are identified by a UUID v7 so a save file can be matched to
//! its leaderboard row. Elements are identified by their stable catalog
//! key (`"fire"`, `"philosopher_stone"`), wrapped in [`ElementId`] so an
//! element key can never be confused with a display name or a request
//! reward tag.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

define_id! {
    /// Unique identifier for a player profile.
    PlayerId
}

/// Stable catalog key of an element (e.g. `"fire"`, `"steam"`).
///
/// Serialized as a bare string so inventory maps keep the familiar
/// `{"fire": {...}}` shape in save files.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export, export_to = "bindings/")]
pub struct ElementId(String);

impl ElementId {
    /// Create an element id from its catalog key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the catalog key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ElementId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for ElementId {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl core::borrow::Borrow<str> for ElementId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn player_ids_are_unique() {
        let a = PlayerId::new();
        let b = PlayerId::new();
        assert_ne!(a, b);
        assert_ne!(a.into_inner(), Uuid::nil());
    }

    #[test]
    fn element_id_serializes_as_plain_string() {
        let id = ElementId::from("steam");
        let json = serde_json::to_string(&id).unwrap_or_default();
        assert_eq!(json, "\"steam\"");
    }

    #[test]
    fn element_id_works_as_map_key_lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(ElementId::from("fire"), 2_u32);
        assert_eq!(map.get("fire").copied(), Some(2));
        assert_eq!(map.get("water"), None);
    }

    #[test]
    fn element_id_display_is_key() {
        assert_eq!(ElementId::new("philosopher_stone").to_string(), "philosopher_stone");
    }
}
