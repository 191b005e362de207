//! Instance configuration: preferences, commands and the working preset.

use serde::Serialize;

use crate::mapping::{ChannelSettings, DeviceSettings, TouchedKeys};

crate::payload_struct! {
    pub struct Preferences {
        source_device: String,
        source_index: i32,
        audio_type: String,
        audio_device: String,
        latitude: f32,
        longitude: f32,
        console_min_log_level: i32,
        use_log_file: i32,
        log_file_name: String,
        file_min_log_level: i32,
        multiple_audio_choice: i32,
    }
}

crate::payload_struct! {
    /// User command bound to an optional key.
    pub struct Command {
        group: String,
        description: String,
        command: String,
        arg_string: String,
        associate_key: i32,
        key: i32,
        key_modifiers: i32,
        release: i32,
    }
}

crate::payload_struct! {
    pub struct GlSpectrum {
        fft_size: i32,
        fft_overlap: i32,
        fft_window: i32,
        ref_level: f32,
        power_range: f32,
        decay: i32,
        decay_divisor: i32,
        histogram_stroke: i32,
        display_grid_intensity: i32,
        display_trace_intensity: i32,
        averaging_mode: i32,
        averaging_value: i32,
        linear: i32,
        ssb: i32,
        usb: i32,
        waterfall_share: i32,
        display_waterfall: i32,
        inverted_waterfall: i32,
        display_max_hold: i32,
        display_histogram: i32,
        display_grid: i32,
    }
}

/// Channel entry of a preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChannelConfig {
    #[serde(rename = "channelIdURI")]
    pub channel_id_uri: String,
    pub config: ChannelSettings,
}

/// Device entry of a preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_serial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_sequence: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<DeviceSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_frequency: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dc_offset_correction: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iq_imbalance_correction: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spectrum_config: Option<GlSpectrum>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub channel_configs: Vec<ChannelConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub device_configs: Vec<DeviceConfig>,
}

/// Whole instance configuration as exchanged on `/instance/config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<Command>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_preset: Option<Preset>,
}

// =============================================================================
// Touched keys of a configuration request
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelKeys {
    /// Keys of the channel entry itself (`channelIdURI`).
    pub keys: TouchedKeys,
    /// Keys of the channel settings payload.
    pub channel_keys: TouchedKeys,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceKeys {
    /// Keys of the device entry itself (`deviceId`, `deviceSerial`, ...).
    pub keys: TouchedKeys,
    /// Keys of the device settings payload, when one was supplied.
    pub device_keys: TouchedKeys,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetKeys {
    pub keys: TouchedKeys,
    pub spectrum_keys: TouchedKeys,
    pub channel_keys: Vec<ChannelKeys>,
    pub device_keys: Vec<DeviceKeys>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigKeys {
    pub preferences_keys: TouchedKeys,
    pub command_keys: Vec<TouchedKeys>,
    pub working_preset_keys: PresetKeys,
}
