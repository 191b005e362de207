//! Lookup tables from `(discriminator, direction)` to payload decoders.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

use super::error::{MapError, PayloadError};
use crate::models::Direction;

/// Decodes a payload sub-object into one variant.
pub type DecodeFn<V> = fn(Value) -> Result<V, PayloadError>;

/// One registered variant.
pub struct VariantEntry<V> {
    /// Value of the discriminator field (`deviceHwType`, `channelType`).
    pub discriminator: &'static str,
    pub direction: Direction,
    /// Key of the payload sub-object (`rtlSdrSettings`, `NFMDemodSettings`).
    pub key: &'static str,
    pub decode: DecodeFn<V>,
}

impl<V> Clone for VariantEntry<V> {
    fn clone(&self) -> Self {
        Self {
            discriminator: self.discriminator,
            direction: self.direction,
            key: self.key,
            decode: self.decode,
        }
    }
}

impl<V> std::fmt::Debug for VariantEntry<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariantEntry")
            .field("discriminator", &self.discriminator)
            .field("direction", &self.direction)
            .field("key", &self.key)
            .finish()
    }
}

/// Closed set of variants, built once and read concurrently afterwards.
#[derive(Debug, Clone)]
pub struct VariantTable<V> {
    entries: Vec<VariantEntry<V>>,
    by_discriminator: HashMap<&'static str, [Option<usize>; 3]>,
    by_key: HashMap<&'static str, usize>,
}

fn slot(direction: Direction) -> usize {
    match direction {
        Direction::Rx => 0,
        Direction::Tx => 1,
        Direction::Mimo => 2,
    }
}

impl<V> VariantTable<V> {
    /// Builds the table, rejecting duplicate `(discriminator, direction)`
    /// pairs and duplicate payload keys.
    pub fn build(entries: Vec<VariantEntry<V>>) -> Result<Self, MapError> {
        let mut by_discriminator: HashMap<&'static str, [Option<usize>; 3]> = HashMap::new();
        let mut by_key = HashMap::new();

        for (index, entry) in entries.iter().enumerate() {
            let slots = by_discriminator.entry(entry.discriminator).or_default();
            let slot = &mut slots[slot(entry.direction)];
            if slot.is_some() {
                return Err(MapError::DuplicateVariant {
                    discriminator: entry.discriminator.to_string(),
                    direction: entry.direction.code(),
                });
            }
            *slot = Some(index);

            if by_key.insert(entry.key, index).is_some() {
                return Err(MapError::DuplicateKey(entry.key.to_string()));
            }
        }

        Ok(Self {
            entries,
            by_discriminator,
            by_key,
        })
    }

    pub fn lookup(&self, discriminator: &str, direction: Direction) -> Option<&VariantEntry<V>> {
        let index = self.by_discriminator.get(discriminator)?[slot(direction)]?;
        self.entries.get(index)
    }

    pub fn by_key(&self, key: &str) -> Option<&VariantEntry<V>> {
        self.by_key.get(key).and_then(|&index| self.entries.get(index))
    }

    pub fn entries(&self) -> &[VariantEntry<V>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Deserializes a payload, reporting the path of the first offending field.
pub fn decode_payload<T: DeserializeOwned>(value: Value) -> Result<T, PayloadError> {
    serde_path_to_error::deserialize(value).map_err(|err| PayloadError {
        path: err.path().to_string(),
        message: err.inner().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Probe {
        #[serde(default)]
        center_frequency: Option<i64>,
    }

    fn probe_entry(discriminator: &'static str, direction: Direction, key: &'static str) -> VariantEntry<i64> {
        VariantEntry {
            discriminator,
            direction,
            key,
            decode: |value| decode_payload::<Probe>(value).map(|p| p.center_frequency.unwrap_or(0)),
        }
    }

    #[test]
    fn test_lookup_by_pair_and_key() {
        let table = VariantTable::build(vec![
            probe_entry("HackRF", Direction::Rx, "hackRFInputSettings"),
            probe_entry("HackRF", Direction::Tx, "hackRFOutputSettings"),
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("HackRF", Direction::Tx).unwrap().key, "hackRFOutputSettings");
        assert!(table.lookup("HackRF", Direction::Mimo).is_none());
        assert!(table.lookup("Nope", Direction::Rx).is_none());
        assert_eq!(table.by_key("hackRFInputSettings").unwrap().direction, Direction::Rx);
    }

    #[test]
    fn test_duplicates_are_rejected() {
        let result = VariantTable::build(vec![
            probe_entry("RTLSDR", Direction::Rx, "a"),
            probe_entry("RTLSDR", Direction::Rx, "b"),
        ]);
        assert!(matches!(result, Err(MapError::DuplicateVariant { .. })));

        let result = VariantTable::build(vec![
            probe_entry("A", Direction::Rx, "same"),
            probe_entry("B", Direction::Rx, "same"),
        ]);
        assert!(matches!(result, Err(MapError::DuplicateKey(_))));
    }

    #[test]
    fn test_decode_payload_reports_path() {
        let err = decode_payload::<Probe>(json!({ "centerFrequency": "fast" })).unwrap_err();
        assert_eq!(err.path, "centerFrequency");
    }
}
