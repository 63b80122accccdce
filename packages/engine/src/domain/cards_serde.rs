//! Serialization and deserialization for card types.
//!
//! Cards travel as their short codes ("3C", "10H", "Joker"), the same format
//! the presentation layer displays.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::Card;

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Card>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
