//! The ordered list of zones a user tracks, and its persisted JSON layout.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::offset::device_zone;

/// Ordered, duplicate-free list of saved zone identifiers.
///
/// Order is insertion order, first add to last. The list serializes
/// transparently, so the persisted layout is exactly a JSON array of
/// identifier strings. Identifiers are not validated on load; a stale
/// identifier surfaces later as a per-entry [`Error::UnknownZone`].
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedZoneList {
    ids: Vec<String>,
}

impl SavedZoneList {
    /// Returns an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first-launch list, holding only the device's own zone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceZone`] if the environment exposes no resolvable time zone.
    pub fn seeded() -> Result<Self, Error> {
        Ok(Self { ids: vec![device_zone()?] })
    }

    /// Appends an identifier, unless it is already present.
    ///
    /// Returns `false` and leaves the list unchanged on a duplicate.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Removes an identifier. Returns `false` if it was not present.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.ids.iter().position(|existing| existing == id) {
            Some(index) => {
                self.ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns whether an identifier is present.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Iterates the identifiers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Returns the number of saved zones.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Serializes the list to its persisted layout, a JSON array of identifier strings.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserializes a list from its persisted layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the input is not a JSON array of strings.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::SavedZoneList;
    use crate::error::Error;

    #[test]
    fn test_insert_preserves_order_and_uniqueness() {
        let mut saved = SavedZoneList::new();
        assert!(saved.insert("America/New_York"));
        assert!(saved.insert("Asia/Tokyo"));
        assert!(saved.insert("Europe/London"));
        assert!(!saved.insert("Asia/Tokyo"));
        assert_eq!(
            saved.iter().collect::<Vec<_>>(),
            ["America/New_York", "Asia/Tokyo", "Europe/London"]
        );
        assert_eq!(saved.len(), 3);
    }

    #[test]
    fn test_remove() {
        let mut saved = SavedZoneList::new();
        saved.insert("America/New_York");
        saved.insert("Asia/Tokyo");
        assert!(saved.remove("America/New_York"));
        assert!(!saved.remove("America/New_York"));
        assert_eq!(saved.iter().collect::<Vec<_>>(), ["Asia/Tokyo"]);
    }

    #[test]
    fn test_json_round_trip() -> Result<(), Error> {
        let mut saved = SavedZoneList::new();
        saved.insert("America/New_York");
        saved.insert("Asia/Kolkata");
        let json = saved.to_json()?;
        assert_eq!(json, r#"["America/New_York","Asia/Kolkata"]"#);
        assert_eq!(SavedZoneList::from_json(&json)?, saved);
        Ok(())
    }

    #[test]
    fn test_from_json_empty_and_invalid() {
        assert!(SavedZoneList::from_json("[]").unwrap().is_empty());
        assert!(matches!(SavedZoneList::from_json("{}"), Err(Error::Json(_))));
    }

    #[test]
    fn test_seeded_contains_device_zone() -> Result<(), Error> {
        match SavedZoneList::seeded() {
            Ok(saved) => {
                assert_eq!(saved.len(), 1);
                assert!(saved.contains(&crate::offset::device_zone()?));
            }
            // Headless environments may expose no zone at all
            Err(Error::DeviceZone(_)) => {}
            Err(error) => return Err(error),
        }
        Ok(())
    }
}
