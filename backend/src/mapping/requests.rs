//! Shape validators for the non-settings request bodies.

use serde_json::{Map, Value};

use super::error::MapError;
use super::keys::TouchedKeys;
use super::table::decode_payload;
use crate::models::{
    AmbeDevice, AmbeDevices, AudioInputDevice, AudioOutputDevice, ChannelCreation, DeviceListItem,
    Direction, LocationInformation, LoggingInfo, PresetExport, PresetIdentifier, PresetImport,
    PresetTransfer,
};

// =============================================================================
// Field readers
// =============================================================================

pub(crate) fn optional_str<'a>(raw: &'a Map<String, Value>, field: &str) -> Result<Option<&'a str>, MapError> {
    match raw.get(field) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| MapError::wrong_type(field, "a string")),
    }
}

pub(crate) fn optional_i64(raw: &Map<String, Value>, field: &str) -> Result<Option<i64>, MapError> {
    match raw.get(field) {
        None => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| MapError::wrong_type(field, "an integer")),
    }
}

pub(crate) fn optional_i32(raw: &Map<String, Value>, field: &str) -> Result<Option<i32>, MapError> {
    match optional_i64(raw, field)? {
        None => Ok(None),
        Some(value) => i32::try_from(value)
            .map(Some)
            .map_err(|_| MapError::wrong_type(field, "a 32-bit integer")),
    }
}

pub(crate) fn optional_f32(raw: &Map<String, Value>, field: &str) -> Result<Option<f32>, MapError> {
    match raw.get(field) {
        None => Ok(None),
        Some(value) => value
            .as_f64()
            .map(|v| Some(v as f32))
            .ok_or_else(|| MapError::wrong_type(field, "a number")),
    }
}

pub(crate) fn optional_object<'a>(
    raw: &'a Map<String, Value>,
    field: &str,
) -> Result<Option<&'a Map<String, Value>>, MapError> {
    match raw.get(field) {
        None => Ok(None),
        Some(value) => value
            .as_object()
            .map(Some)
            .ok_or_else(|| MapError::wrong_type(field, "an object")),
    }
}

/// String field that only counts when it actually holds a string.
fn lenient_str(raw: &Map<String, Value>, field: &str) -> Option<String> {
    raw.get(field).and_then(Value::as_str).map(str::to_string)
}

/// Integer field defaulting to -1 when absent or not an integer.
fn index_or_default(raw: &Map<String, Value>, field: &str) -> i32 {
    raw.get(field)
        .and_then(Value::as_i64)
        .and_then(|v| i32::try_from(v).ok())
        .unwrap_or(-1)
}

fn direction_field(raw: &Map<String, Value>) -> Result<Direction, MapError> {
    let code = optional_i64(raw, "direction")?.unwrap_or(0);
    Direction::from_code(code).ok_or_else(|| MapError::wrong_type("direction", "0, 1 or 2"))
}

fn shape_from<T: serde::de::DeserializeOwned>(raw: &Map<String, Value>) -> Result<T, MapError> {
    Ok(decode_payload(Value::Object(raw.clone()))?)
}

// =============================================================================
// Validators
// =============================================================================

/// Body of `PUT /instance/devices/{ds}/device`.
pub fn validate_device_list_item(raw: &Map<String, Value>) -> Result<DeviceListItem, MapError> {
    let item = DeviceListItem {
        displayed_name: lenient_str(raw, "displayedName"),
        hw_type: lenient_str(raw, "hwType"),
        serial: lenient_str(raw, "serial"),
        direction: direction_field(raw)?,
        index: index_or_default(raw, "index"),
        sequence: index_or_default(raw, "sequence"),
        device_stream_index: index_or_default(raw, "deviceStreamIndex"),
        ..Default::default()
    };

    if item.is_identified() {
        Ok(item)
    } else {
        Err(MapError::MissingDeviceIdentification)
    }
}

/// Body of `POST /instance/devices/{ds}/channel`.
pub fn validate_channel_creation(raw: &Map<String, Value>) -> Result<ChannelCreation, MapError> {
    let channel_type = optional_str(raw, "channelType")?.ok_or_else(|| MapError::missing("channelType"))?;
    Ok(ChannelCreation {
        channel_type: channel_type.to_string(),
        direction: direction_field(raw)?,
    })
}

pub fn validate_preset_identifier(raw: &Map<String, Value>) -> Result<PresetIdentifier, MapError> {
    let identifier: PresetIdentifier = shape_from(raw)?;
    if identifier.is_valid() {
        Ok(identifier)
    } else {
        Err(MapError::missing("groupName, name and type"))
    }
}

pub fn validate_preset_transfer(raw: &Map<String, Value>) -> Result<PresetTransfer, MapError> {
    let transfer: PresetTransfer = shape_from(raw)?;
    match &transfer.preset {
        Some(preset) if preset.is_valid() => Ok(transfer),
        _ => Err(MapError::missing("preset")),
    }
}

pub fn validate_preset_import(raw: &Map<String, Value>) -> Result<PresetImport, MapError> {
    let import: PresetImport = shape_from(raw)?;
    if import.file_path.is_some() {
        Ok(import)
    } else {
        Err(MapError::missing("filePath"))
    }
}

pub fn validate_preset_export(raw: &Map<String, Value>) -> Result<PresetExport, MapError> {
    let export: PresetExport = shape_from(raw)?;
    if export.file_path.is_none() {
        return Err(MapError::missing("filePath"));
    }
    match &export.preset {
        Some(preset) if preset.is_valid() => Ok(export),
        _ => Err(MapError::missing("preset")),
    }
}

/// Audio input parameters. Only `sampleRate` and `volume` are tracked.
pub fn validate_audio_input_device(
    raw: &Map<String, Value>,
) -> Result<(AudioInputDevice, TouchedKeys), MapError> {
    let mut keys = TouchedKeys::new();
    let device = AudioInputDevice {
        index: optional_i32(raw, "index")?.unwrap_or(-1),
        sample_rate: optional_i32(raw, "sampleRate")?,
        volume: optional_f32(raw, "volume")?,
        ..Default::default()
    };

    for key in ["sampleRate", "volume"] {
        if raw.contains_key(key) {
            keys.push(key);
        }
    }

    Ok((device, keys))
}

/// Audio output parameters. The two UDP flags are normalised to 0/1.
pub fn validate_audio_output_device(
    raw: &Map<String, Value>,
) -> Result<(AudioOutputDevice, TouchedKeys), MapError> {
    let flag = |field: &str| -> Result<Option<i32>, MapError> {
        Ok(optional_i64(raw, field)?.map(|v| i32::from(v != 0)))
    };

    let mut keys = TouchedKeys::new();
    let device = AudioOutputDevice {
        index: optional_i32(raw, "index")?.unwrap_or(-1),
        sample_rate: optional_i32(raw, "sampleRate")?,
        copy_to_udp: flag("copyToUDP")?,
        udp_uses_rtp: flag("udpUsesRTP")?,
        udp_channel_mode: optional_i32(raw, "udpChannelMode")?,
        udp_channel_codec: optional_i32(raw, "udpChannelCodec")?,
        udp_decimation_factor: optional_i32(raw, "udpDecimationFactor")?,
        udp_address: optional_str(raw, "udpAddress")?.map(str::to_string),
        udp_port: optional_i32(raw, "udpPort")?,
        ..Default::default()
    };

    for key in [
        "sampleRate",
        "copyToUDP",
        "udpUsesRTP",
        "udpChannelMode",
        "udpChannelCodec",
        "udpDecimationFactor",
        "udpAddress",
        "udpPort",
    ] {
        if raw.contains_key(key) {
            keys.push(key);
        }
    }

    Ok((device, keys))
}

/// AMBE codec device list. The declared count must match the list length and
/// every entry needs `deviceRef` and `delete`.
pub fn validate_ambe_devices(raw: &Map<String, Value>) -> Result<AmbeDevices, MapError> {
    let declared = optional_i64(raw, "nbDevices")?.ok_or_else(|| MapError::missing("nbDevices"))?;
    let items = raw
        .get("ambeDevices")
        .ok_or_else(|| MapError::missing("ambeDevices"))?
        .as_array()
        .ok_or_else(|| MapError::wrong_type("ambeDevices", "an array"))?;

    if usize::try_from(declared).ok() != Some(items.len()) {
        return Err(MapError::CountMismatch {
            declared,
            actual: items.len(),
        });
    }

    let mut devices = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let entry = item
            .as_object()
            .ok_or_else(|| MapError::wrong_type(format!("ambeDevices[{}]", index), "an object"))?;
        let device_ref = optional_str(entry, "deviceRef")?.ok_or_else(|| MapError::missing("deviceRef"))?;
        let delete = optional_i32(entry, "delete")?.ok_or_else(|| MapError::missing("delete"))?;
        devices.push(AmbeDevice {
            device_ref: device_ref.to_string(),
            delete,
        });
    }

    Ok(AmbeDevices {
        nb_devices: devices.len() as i32,
        ambe_devices: devices,
    })
}

pub fn decode_logging(raw: &Map<String, Value>) -> Result<LoggingInfo, MapError> {
    shape_from(raw)
}

pub fn decode_location(raw: &Map<String, Value>) -> Result<LocationInformation, MapError> {
    shape_from(raw)
}
