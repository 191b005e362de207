//! Discriminated settings mapper.
//!
//! Selects the concrete settings shape named by a discriminator and a
//! direction, decodes the matching sub-object and records which leaves the
//! caller supplied.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

use super::envelope::{Tagged, Variant};
use super::error::MapError;
use super::keys::TouchedKeys;
use super::requests::{optional_i32, optional_i64, optional_object, optional_str};
use super::table::{decode_payload, VariantTable};
use super::variants::{ChannelSettings, ChannelSettingsVariant, DeviceSettings, DeviceSettingsVariant};
use crate::models::config::{
    ChannelConfig, ChannelKeys, Command, ConfigKeys, DeviceConfig, DeviceKeys, GlSpectrum,
    InstanceConfig, Preferences, Preset, PresetKeys,
};
use crate::models::Direction;

/// Working preset scalar fields tracked as touched keys.
const PRESET_SCALAR_KEYS: [&str; 5] = [
    "centerFrequency",
    "dcOffsetCorrection",
    "iqImbalanceCorrection",
    "description",
    "group",
];

/// Read-only mapping state shared by all requests.
#[derive(Debug, Clone)]
pub struct SettingsMapper {
    devices: VariantTable<DeviceSettingsVariant>,
    channels: VariantTable<ChannelSettingsVariant>,
    /// Preset channel URI to channel settings key.
    preset_channels: BTreeMap<String, &'static str>,
}

impl SettingsMapper {
    /// Builds the variant tables and checks every preset channel mapping
    /// against the channel table.
    pub fn new(preset_channels: &BTreeMap<String, String>) -> Result<Self, MapError> {
        let devices = VariantTable::build(DeviceSettingsVariant::entries())?;
        let channels = VariantTable::build(ChannelSettingsVariant::entries())?;

        let mut resolved = BTreeMap::new();
        for (uri, key) in preset_channels {
            let entry = channels.by_key(key).ok_or_else(|| MapError::UnknownSettingsKey {
                uri: uri.clone(),
                key: key.clone(),
            })?;
            resolved.insert(uri.clone(), entry.key);
        }

        debug!(
            "settings mapper ready: {} device variants, {} channel variants, {} preset channel URIs",
            devices.len(),
            channels.len(),
            resolved.len()
        );

        Ok(Self {
            devices,
            channels,
            preset_channels: resolved,
        })
    }

    /// Mapper with the built-in preset channel table.
    pub fn with_defaults() -> Result<Self, MapError> {
        Self::new(&crate::config::default_preset_channels())
    }

    pub fn device_table(&self) -> &VariantTable<DeviceSettingsVariant> {
        &self.devices
    }

    pub fn channel_table(&self) -> &VariantTable<ChannelSettingsVariant> {
        &self.channels
    }

    pub fn preset_channel_key(&self, uri: &str) -> Option<&'static str> {
        self.preset_channels.get(uri).copied()
    }

    pub fn validate_device_settings(
        &self,
        raw: &Map<String, Value>,
        out: &mut DeviceSettings,
    ) -> Result<TouchedKeys, MapError> {
        validate_tagged(&self.devices, raw, out)
    }

    pub fn validate_channel_settings(
        &self,
        raw: &Map<String, Value>,
        out: &mut ChannelSettings,
    ) -> Result<TouchedKeys, MapError> {
        validate_tagged(&self.channels, raw, out)
    }

    /// Validates an instance configuration body.
    ///
    /// `preferences`, `commands` and `workingPreset` are all optional.
    pub fn validate_config(&self, raw: &Map<String, Value>) -> Result<(InstanceConfig, ConfigKeys), MapError> {
        let mut config = InstanceConfig::default();
        let mut keys = ConfigKeys::default();

        if let Some(preferences) = optional_object(raw, "preferences")? {
            keys.preferences_keys = TouchedKeys::from_object(preferences);
            config.preferences =
                Some(decode_payload::<Preferences>(Value::Object(preferences.clone()))?);
        }

        if let Some(commands) = raw.get("commands") {
            let items = commands
                .as_array()
                .ok_or_else(|| MapError::wrong_type("commands", "an array"))?;
            for (index, item) in items.iter().enumerate() {
                let command = item
                    .as_object()
                    .ok_or_else(|| MapError::wrong_type(format!("commands[{}]", index), "an object"))?;
                keys.command_keys.push(TouchedKeys::from_object(command));
                config
                    .commands
                    .push(decode_payload::<Command>(Value::Object(command.clone()))?);
            }
        }

        if let Some(preset) = optional_object(raw, "workingPreset")? {
            let (working_preset, preset_keys) = self.validate_preset(preset)?;
            config.working_preset = Some(working_preset);
            keys.working_preset_keys = preset_keys;
        }

        Ok((config, keys))
    }

    fn validate_preset(&self, raw: &Map<String, Value>) -> Result<(Preset, PresetKeys), MapError> {
        let mut preset = Preset {
            center_frequency: optional_i64(raw, "centerFrequency")?,
            dc_offset_correction: optional_i32(raw, "dcOffsetCorrection")?,
            iq_imbalance_correction: optional_i32(raw, "iqImbalanceCorrection")?,
            description: optional_str(raw, "description")?.map(str::to_string),
            group: optional_str(raw, "group")?.map(str::to_string),
            ..Default::default()
        };
        let mut keys = PresetKeys {
            keys: PRESET_SCALAR_KEYS
                .iter()
                .filter(|key| raw.contains_key(**key))
                .map(|key| key.to_string())
                .collect(),
            ..Default::default()
        };

        if let Some(spectrum) = optional_object(raw, "spectrumConfig")? {
            keys.spectrum_keys = TouchedKeys::from_object(spectrum);
            preset.spectrum_config =
                Some(decode_payload::<GlSpectrum>(Value::Object(spectrum.clone()))?);
        }

        if let Some(channels) = raw.get("channelConfigs") {
            let items = channels
                .as_array()
                .ok_or_else(|| MapError::wrong_type("channelConfigs", "an array"))?;
            for item in items {
                let channel = item
                    .as_object()
                    .ok_or_else(|| MapError::wrong_type("channelConfigs[]", "an object"))?;
                let (config, channel_keys) = self.validate_preset_channel(channel)?;
                preset.channel_configs.push(config);
                keys.channel_keys.push(channel_keys);
            }
        }

        if let Some(devices) = raw.get("deviceConfigs") {
            let items = devices
                .as_array()
                .ok_or_else(|| MapError::wrong_type("deviceConfigs", "an array"))?;
            for item in items {
                let device = item
                    .as_object()
                    .ok_or_else(|| MapError::wrong_type("deviceConfigs[]", "an object"))?;
                let (config, device_keys) = self.validate_preset_device(device)?;
                preset.device_configs.push(config);
                keys.device_keys.push(device_keys);
            }
        }

        Ok((preset, keys))
    }

    fn validate_preset_channel(
        &self,
        raw: &Map<String, Value>,
    ) -> Result<(ChannelConfig, ChannelKeys), MapError> {
        let uri = optional_str(raw, "channelIdURI")?.ok_or_else(|| MapError::missing("channelIdURI"))?;
        let settings_key = self
            .preset_channel_key(uri)
            .ok_or_else(|| MapError::UnknownChannelUri(uri.to_string()))?;
        let config = optional_object(raw, "config")?.ok_or_else(|| MapError::missing("config"))?;
        let payload = config
            .get(settings_key)
            .and_then(Value::as_object)
            .ok_or_else(|| MapError::MissingPayload {
                key: settings_key.to_string(),
            })?;
        let entry = self
            .channels
            .by_key(settings_key)
            .ok_or_else(|| MapError::MissingPayload {
                key: settings_key.to_string(),
            })?;

        let mut keys = ChannelKeys::default();
        keys.keys.push("channelIdURI");
        keys.channel_keys = TouchedKeys::from_object(payload);
        let variant = (entry.decode)(Value::Object(payload.clone()))?;

        Ok((
            ChannelConfig {
                channel_id_uri: uri.to_string(),
                config: Tagged::from_variant(variant),
            },
            keys,
        ))
    }

    fn validate_preset_device(
        &self,
        raw: &Map<String, Value>,
    ) -> Result<(DeviceConfig, DeviceKeys), MapError> {
        let mut keys = DeviceKeys::default();
        let mut device = DeviceConfig {
            device_id: optional_str(raw, "deviceId")?.map(str::to_string),
            device_serial: optional_str(raw, "deviceSerial")?.map(str::to_string),
            device_sequence: optional_i32(raw, "deviceSequence")?,
            config: None,
        };
        for key in ["deviceId", "deviceSerial", "deviceSequence"] {
            if raw.contains_key(key) {
                keys.keys.push(key);
            }
        }

        if let Some(config) = optional_object(raw, "config")? {
            let mut settings = DeviceSettings::default();
            keys.device_keys = self.validate_device_settings(config, &mut settings)?;
            device.config = Some(settings);
        }

        Ok((device, keys))
    }
}

/// Shared body of the device and channel validators.
fn validate_tagged<V: Variant>(
    table: &VariantTable<V>,
    raw: &Map<String, Value>,
    out: &mut Tagged<V>,
) -> Result<TouchedKeys, MapError> {
    out.reset();

    let discriminator = optional_str(raw, V::DISCRIMINATOR_FIELD)?
        .ok_or_else(|| MapError::missing(V::DISCRIMINATOR_FIELD))?;
    let code = optional_i64(raw, "direction")?.unwrap_or(0);
    let unknown = || MapError::UnknownVariant {
        discriminator: discriminator.to_string(),
        direction: code,
    };
    let direction = Direction::from_code(code).ok_or_else(unknown)?;
    let entry = table.lookup(discriminator, direction).ok_or_else(unknown)?;

    let payload = raw
        .get(entry.key)
        .and_then(Value::as_object)
        .ok_or_else(|| MapError::MissingPayload {
            key: entry.key.to_string(),
        })?;

    let keys = TouchedKeys::from_object(payload);
    let variant = (entry.decode)(Value::Object(payload.clone()))?;
    out.set_variant(variant);

    Ok(keys)
}
