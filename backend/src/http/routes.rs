//! Path matching.
//!
//! Literal paths are compared first; only when none matches are the
//! parameterized device-set and channel patterns tried, longest first.
//! Captured parameters stay strings: integer conversion happens in the
//! handler so that a bad index can be reported as a client error.

/// Every path the API answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    InstanceSummary,
    InstanceConfig,
    InstanceDevices,
    InstanceChannels,
    InstanceLogging,
    InstanceAudio,
    AudioInputParameters,
    AudioOutputParameters,
    AudioInputCleanup,
    AudioOutputCleanup,
    InstanceLocation,
    AmbeSerial,
    AmbeDevices,
    InstancePresets,
    InstancePreset,
    InstancePresetFile,
    InstanceDeviceSets,
    InstanceDeviceSet,
    /// `/instance/devices/{ds}`
    DeviceSet(String),
    /// `/instance/devices/{ds}/device`
    DeviceSetDevice(String),
    DeviceSetFocus(String),
    DeviceSettings(String),
    DeviceRun(String),
    DeviceReport(String),
    ChannelsReport(String),
    /// `/instance/devices/{ds}/channel`
    ChannelCreate(String),
    /// `/instance/devices/{ds}/channel/{ch}`
    Channel(String, String),
    ChannelSettings(String, String),
    ChannelReport(String, String),
}

const LITERALS: [(&str, Endpoint); 18] = [
    ("/instance/summary", Endpoint::InstanceSummary),
    ("/instance/config", Endpoint::InstanceConfig),
    ("/instance/devices", Endpoint::InstanceDevices),
    ("/instance/channels", Endpoint::InstanceChannels),
    ("/instance/logging", Endpoint::InstanceLogging),
    ("/instance/audio", Endpoint::InstanceAudio),
    ("/instance/audio/input/parameters", Endpoint::AudioInputParameters),
    ("/instance/audio/output/parameters", Endpoint::AudioOutputParameters),
    ("/instance/audio/input/cleanup", Endpoint::AudioInputCleanup),
    ("/instance/audio/output/cleanup", Endpoint::AudioOutputCleanup),
    ("/instance/location", Endpoint::InstanceLocation),
    ("/instance/ambe/serial", Endpoint::AmbeSerial),
    ("/instance/ambe/devices", Endpoint::AmbeDevices),
    ("/instance/presets", Endpoint::InstancePresets),
    ("/instance/preset", Endpoint::InstancePreset),
    ("/instance/preset/file", Endpoint::InstancePresetFile),
    ("/instance/devicesets", Endpoint::InstanceDeviceSets),
    ("/instance/deviceset", Endpoint::InstanceDeviceSet),
];

/// Resolves a request path to its endpoint.
pub fn route(path: &str) -> Option<Endpoint> {
    if let Some((_, endpoint)) = LITERALS.iter().find(|(literal, _)| *literal == path) {
        return Some(endpoint.clone());
    }

    let rest = path.strip_prefix("/instance/devices/")?;
    let segments: Vec<&str> = rest.split('/').collect();
    let owned = |s: &str| s.to_string();

    let endpoint = match segments.as_slice() {
        [ds, "channel", ch, "settings"] => Endpoint::ChannelSettings(owned(ds), owned(ch)),
        [ds, "channel", ch, "report"] => Endpoint::ChannelReport(owned(ds), owned(ch)),
        [ds, "channels", "report"] => Endpoint::ChannelsReport(owned(ds)),
        [ds, "channel", ch] => Endpoint::Channel(owned(ds), owned(ch)),
        [ds, "device"] => Endpoint::DeviceSetDevice(owned(ds)),
        [ds, "focus"] => Endpoint::DeviceSetFocus(owned(ds)),
        [ds, "settings"] => Endpoint::DeviceSettings(owned(ds)),
        [ds, "run"] => Endpoint::DeviceRun(owned(ds)),
        [ds, "report"] => Endpoint::DeviceReport(owned(ds)),
        [ds, "channel"] => Endpoint::ChannelCreate(owned(ds)),
        [ds] => Endpoint::DeviceSet(owned(ds)),
        _ => return None,
    };
    Some(endpoint)
}
