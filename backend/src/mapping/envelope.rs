//! Tagged settings/report containers.
//!
//! A container holds at most one variant. The discriminator and direction are
//! read from the variant itself, so a container can never carry a
//! discriminator that disagrees with its payload. The reset state has no
//! variant and serializes to `{}`.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::fmt::Debug;

use super::error::{MapError, PayloadError};
use super::keys::{apply_touched, TouchedKeys};
use super::table::VariantEntry;
use crate::models::Direction;

/// A closed union of payload shapes. Implemented by
/// [`variant_union!`](crate::variant_union).
pub trait Variant: Sized + Clone + Debug + PartialEq + Serialize {
    /// Name of the discriminator field on the wire.
    const DISCRIMINATOR_FIELD: &'static str;

    /// Every registered variant.
    fn entries() -> Vec<VariantEntry<Self>>;

    fn discriminator(&self) -> &'static str;

    fn direction(&self) -> Direction;

    /// Key of the payload sub-object.
    fn key(&self) -> &'static str;

    /// Decodes the payload registered under `key`, if any.
    fn decode_key(key: &str, value: Value) -> Option<Result<Self, PayloadError>>;

    fn payload_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Container for one variant of `V`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagged<V> {
    variant: Option<V>,
}

impl<V> Default for Tagged<V> {
    fn default() -> Self {
        Self { variant: None }
    }
}

impl<V: Variant> Tagged<V> {
    pub fn from_variant(variant: impl Into<V>) -> Self {
        Self {
            variant: Some(variant.into()),
        }
    }

    /// Clears the variant. Idempotent.
    pub fn reset(&mut self) {
        self.variant = None;
    }

    pub fn is_reset(&self) -> bool {
        self.variant.is_none()
    }

    pub fn variant(&self) -> Option<&V> {
        self.variant.as_ref()
    }

    pub fn variant_mut(&mut self) -> Option<&mut V> {
        self.variant.as_mut()
    }

    pub fn set_variant(&mut self, variant: impl Into<V>) {
        self.variant = Some(variant.into());
    }

    pub fn take(&mut self) -> Option<V> {
        self.variant.take()
    }

    pub fn discriminator(&self) -> Option<&'static str> {
        self.variant.as_ref().map(Variant::discriminator)
    }

    pub fn direction(&self) -> Option<Direction> {
        self.variant.as_ref().map(Variant::direction)
    }

    /// Merges the touched leaves of `update` into this container.
    ///
    /// When the containers hold different variants (or this one is empty)
    /// the update replaces the current content.
    pub fn merge(&mut self, update: &Self, keys: &TouchedKeys) -> Result<(), MapError> {
        let Some(incoming) = update.variant.as_ref() else {
            return Ok(());
        };
        let current = match self.variant.as_ref() {
            Some(current) if current.key() == incoming.key() => current,
            _ => {
                self.variant = Some(incoming.clone());
                return Ok(());
            }
        };

        let key = current.key();
        let mut merged = current.payload_value().map_err(to_payload_error)?;
        let source = incoming.payload_value().map_err(to_payload_error)?;
        apply_touched(&mut merged, &source, keys)?;

        let decoded = V::decode_key(key, merged).ok_or_else(|| MapError::MissingPayload {
            key: key.to_string(),
        })??;
        self.variant = Some(decoded);
        Ok(())
    }
}

fn to_payload_error(err: serde_json::Error) -> MapError {
    MapError::Payload(PayloadError {
        path: ".".to_string(),
        message: err.to_string(),
    })
}

impl<V: Variant> Serialize for Tagged<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.variant {
            None => serializer.serialize_map(Some(0))?.end(),
            Some(variant) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry(V::DISCRIMINATOR_FIELD, variant.discriminator())?;
                map.serialize_entry("direction", &variant.direction())?;
                map.serialize_entry(variant.key(), variant)?;
                map.end()
            }
        }
    }
}
