//! Instance-level request and response bodies.
//!
//! These shapes are shared by the HTTP layer and the adapter contract. The
//! listing shapes keep the lower-case count field names used on the wire
//! (`devicecount`, `devicesetfocus`, ...).

use serde::{Deserialize, Serialize};

use super::direction::Direction;

// =============================================================================
// Envelopes
// =============================================================================

/// Body of every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of operations that only acknowledge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub message: String,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// =============================================================================
// Summary, logging, location
// =============================================================================

crate::payload_struct! {
    /// Console and file logging levels.
    pub struct LoggingInfo {
        console_level: String,
        file_level: String,
        dump_to_file: i32,
        file_name: String,
    }
}

crate::payload_struct! {
    /// Station coordinates in decimal degrees.
    pub struct LocationInformation {
        latitude: f32,
        longitude: f32,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceSummaryResponse {
    pub version: String,
    pub appname: String,
    pub architecture: String,
    pub os: String,
    pub pid: i64,
    pub dsp_rx_bits: i32,
    pub dsp_tx_bits: i32,
    pub logging: LoggingInfo,
    pub devicesetlist: DeviceSetList,
}

// =============================================================================
// Device sets
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSetList {
    pub devicesetcount: i32,
    pub devicesetfocus: i32,
    pub device_sets: Vec<DeviceSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSet {
    pub sampling_device: SamplingDevice,
    pub channelcount: i32,
    pub channels: Vec<Channel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingDevice {
    pub index: i32,
    pub hw_type: String,
    pub direction: Direction,
    pub device_nb_streams: i32,
    pub device_stream_index: i32,
    pub sequence: i32,
    pub serial: String,
    pub center_frequency: i64,
    pub bandwidth: i32,
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub index: i32,
    pub id: String,
    pub uid: i64,
    pub title: String,
    pub delta_frequency: i64,
    pub direction: Direction,
}

/// Channels of a device set, as returned by the channels report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelsDetail {
    pub channelcount: i32,
    pub channels: Vec<Channel>,
}

/// Streaming state of a device (`idle`, `running`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceState {
    pub state: String,
}

impl DeviceState {
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
        }
    }
}

// =============================================================================
// Catalogs
// =============================================================================

/// Device selection item.
///
/// Used both for the device catalog and as the body of the device selection
/// request. Integer fields that were not supplied are -1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceListItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displayed_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hw_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_nb_streams: Option<i32>,
    pub index: i32,
    pub sequence: i32,
    pub device_stream_index: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimed: Option<i32>,
}

impl Default for DeviceListItem {
    fn default() -> Self {
        Self {
            displayed_name: None,
            hw_type: None,
            serial: None,
            direction: Direction::Rx,
            device_nb_streams: None,
            index: -1,
            sequence: -1,
            device_stream_index: -1,
            claimed: None,
        }
    }
}

impl DeviceListItem {
    /// True when at least one of name, hardware type or serial is set.
    pub fn is_identified(&self) -> bool {
        self.displayed_name.is_some() || self.hw_type.is_some() || self.serial.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceDevicesResponse {
    pub devicecount: i32,
    pub devices: Vec<DeviceListItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableChannel {
    pub name: String,
    #[serde(rename = "idURI")]
    pub id_uri: String,
    pub id: String,
    pub direction: Direction,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceChannelsResponse {
    pub channelcount: i32,
    pub channels: Vec<AvailableChannel>,
}

/// Body of the channel creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelCreation {
    pub channel_type: String,
    pub direction: Direction,
}

// =============================================================================
// Audio
// =============================================================================

/// Audio input device parameters. `index` -1 selects the system default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioInputDevice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub index: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_system_default: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_unregistered: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,
}

impl Default for AudioInputDevice {
    fn default() -> Self {
        Self {
            name: None,
            index: -1,
            sample_rate: None,
            is_system_default: None,
            default_unregistered: None,
            volume: None,
        }
    }
}

/// Audio output device parameters, including the UDP copy options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioOutputDevice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub index: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_system_default: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_unregistered: Option<i32>,
    #[serde(rename = "copyToUDP", default, skip_serializing_if = "Option::is_none")]
    pub copy_to_udp: Option<i32>,
    #[serde(rename = "udpUsesRTP", default, skip_serializing_if = "Option::is_none")]
    pub udp_uses_rtp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_channel_mode: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_channel_codec: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_decimation_factor: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_port: Option<i32>,
}

impl Default for AudioOutputDevice {
    fn default() -> Self {
        Self {
            name: None,
            index: -1,
            sample_rate: None,
            is_system_default: None,
            default_unregistered: None,
            copy_to_udp: None,
            udp_uses_rtp: None,
            udp_channel_mode: None,
            udp_channel_codec: None,
            udp_decimation_factor: None,
            udp_address: None,
            udp_port: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioDevices {
    pub nb_input_devices: i32,
    pub input_devices: Vec<AudioInputDevice>,
    pub nb_output_devices: i32,
    pub output_devices: Vec<AudioOutputDevice>,
}

// =============================================================================
// AMBE codec devices
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DvSerialDevices {
    pub nb_devices: i32,
    pub dv_serial_devices: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbeDevice {
    pub device_ref: String,
    pub delete: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbeDevices {
    pub nb_devices: i32,
    pub ambe_devices: Vec<AmbeDevice>,
}

// =============================================================================
// Presets
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetItem {
    pub center_frequency: i64,
    #[serde(rename = "type")]
    pub preset_type: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetGroup {
    pub group_name: String,
    pub nb_presets: i32,
    pub presets: Vec<PresetItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presets {
    pub nb_groups: i32,
    pub groups: Vec<PresetGroup>,
}

crate::payload_struct! {
    /// Identifies a preset by group, name and type.
    pub struct PresetIdentifier {
        group_name: String,
        center_frequency: i64,
        #[serde(rename = "type")]
        preset_type: String,
        name: String,
    }
}

impl PresetIdentifier {
    pub fn new(
        group_name: impl Into<String>,
        name: impl Into<String>,
        preset_type: impl Into<String>,
    ) -> Self {
        Self {
            group_name: Some(group_name.into()),
            center_frequency: None,
            preset_type: Some(preset_type.into()),
            name: Some(name.into()),
        }
    }

    /// A preset is identified only when group, name and type are all present.
    pub fn is_valid(&self) -> bool {
        self.group_name.is_some() && self.name.is_some() && self.preset_type.is_some()
    }
}

crate::payload_struct! {
    /// Copy a preset to or from a device set.
    pub struct PresetTransfer {
        device_set_index: i32,
        preset: PresetIdentifier,
    }
}

crate::payload_struct! {
    pub struct PresetImport {
        file_path: String,
    }
}

crate::payload_struct! {
    pub struct PresetExport {
        file_path: String,
        preset: PresetIdentifier,
    }
}
