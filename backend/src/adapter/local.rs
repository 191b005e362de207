//! In-memory instrument adapter.
//!
//! Models a small instrument with a fixed device catalog, any number of
//! device sets, channels, presets, audio devices and instance settings. All
//! data lives in memory behind a single lock, which makes it suitable for
//! local development and for exercising the HTTP layer in tests. Nothing is
//! streamed: "running" is only a flag.
//!
//! Device and channel reports, preset files and instance shutdown are not
//! modelled and keep the 501 default.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::{AdapterError, AdapterReply, AdapterResult, WebApiAdapter};
use crate::config::default_preset_channels;
use crate::mapping::{
    apply_touched, ChannelSettings, ChannelSettingsVariant, DeviceSettings, DeviceSettingsVariant,
    Tagged, TouchedKeys, Variant,
};
use crate::models::config::{ConfigKeys, InstanceConfig, Preset, PresetKeys};
use crate::models::{
    AmbeDevices, AudioDevices, AudioInputDevice, AudioOutputDevice, AvailableChannel, Channel,
    ChannelCreation, ChannelIndex, ChannelsDetail, DeviceListItem, DeviceSet, DeviceSetIndex,
    DeviceSetList, DeviceState, Direction, DvSerialDevices, InstanceChannelsResponse,
    InstanceDevicesResponse, InstanceSummaryResponse, LocationInformation, LoggingInfo,
    PresetGroup, PresetIdentifier, PresetItem, PresetTransfer, Presets, SamplingDevice,
    SuccessResponse,
};

/// In-memory instrument.
///
/// # Example
/// ```
/// use sdr_webapi::adapter::{LocalAdapter, WebApiAdapter};
///
/// # tokio_test_block(async {
/// let adapter = LocalAdapter::new();
/// let sets = adapter.instance_device_sets_get().await.unwrap();
/// assert_eq!(sets.body.devicesetcount, 1);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[derive(Clone)]
pub struct LocalAdapter {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    device_sets: Vec<LocalDeviceSet>,
    focus: usize,
    logging: LoggingInfo,
    location: LocationInformation,
    audio_inputs: Vec<AudioInputDevice>,
    audio_outputs: Vec<AudioOutputDevice>,
    dv_serial_devices: Vec<String>,
    ambe_devices: Vec<String>,
    presets: Vec<StoredPreset>,
    config: InstanceConfig,
    next_channel_uid: i64,
}

struct LocalDeviceSet {
    device: DeviceListItem,
    settings: DeviceSettings,
    running: bool,
    channels: Vec<LocalChannel>,
}

#[derive(Clone)]
struct LocalChannel {
    uid: i64,
    channel_type: String,
    direction: Direction,
    settings: ChannelSettings,
}

struct StoredPreset {
    group: String,
    name: String,
    preset_type: String,
    center_frequency: i64,
    device: DeviceListItem,
    settings: DeviceSettings,
    channels: Vec<LocalChannel>,
}

impl StoredPreset {
    fn matches(&self, id: &PresetIdentifier) -> bool {
        id.group_name.as_deref() == Some(self.group.as_str())
            && id.name.as_deref() == Some(self.name.as_str())
            && id.preset_type.as_deref() == Some(self.preset_type.as_str())
            && id.center_frequency.map_or(true, |f| f == self.center_frequency)
    }

    fn identifier(&self) -> PresetIdentifier {
        PresetIdentifier {
            center_frequency: Some(self.center_frequency),
            ..PresetIdentifier::new(&self.group, &self.name, &self.preset_type)
        }
    }
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            device_sets: Vec::new(),
            focus: 0,
            logging: LoggingInfo {
                console_level: Some("info".to_string()),
                file_level: Some("debug".to_string()),
                dump_to_file: Some(0),
                file_name: None,
            },
            location: LocationInformation {
                latitude: Some(0.0),
                longitude: Some(0.0),
            },
            audio_inputs: default_audio_inputs(),
            audio_outputs: default_audio_outputs(),
            dv_serial_devices: Vec::new(),
            ambe_devices: Vec::new(),
            presets: Vec::new(),
            config: InstanceConfig::default(),
            next_channel_uid: 1,
        }
    }
}

impl LocalAdapter {
    /// Instrument with one receive device set using the test source.
    pub fn new() -> Self {
        let mut data = LocalData::default();
        if let Some(device) = first_catalog_device(Direction::Rx) {
            data.device_sets.push(LocalDeviceSet::with_device(device));
        }
        Self {
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// Instrument with no device set at all.
    pub fn empty() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Serial devices reported as available for AMBE codecs.
    pub fn with_dv_serial_devices(self, devices: Vec<String>) -> Self {
        self.data.write().dv_serial_devices = devices;
        self
    }

    pub fn device_set_count(&self) -> usize {
        self.data.read().device_sets.len()
    }

    pub fn channel_count(&self, ds: DeviceSetIndex) -> Option<usize> {
        self.data
            .read()
            .device_sets
            .get(ds.value())
            .map(|set| set.channels.len())
    }
}

impl Default for LocalAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalDeviceSet {
    fn with_device(device: DeviceListItem) -> Self {
        let settings = default_container::<DeviceSettingsVariant>(
            device.hw_type.as_deref().unwrap_or_default(),
            device.direction,
        );
        Self {
            device,
            settings,
            running: false,
            channels: Vec::new(),
        }
    }

    fn direction(&self) -> Direction {
        self.device.direction
    }

    fn hw_type(&self) -> &str {
        self.device.hw_type.as_deref().unwrap_or_default()
    }

    fn state(&self) -> DeviceState {
        DeviceState::new(if self.running { "running" } else { "idle" })
    }

    fn view(&self, index: usize) -> DeviceSet {
        let channels = channel_views(&self.channels);
        DeviceSet {
            sampling_device: SamplingDevice {
                index: index as i32,
                hw_type: self.hw_type().to_string(),
                direction: self.direction(),
                device_nb_streams: self.device.device_nb_streams.unwrap_or(1),
                device_stream_index: self.device.device_stream_index.max(0),
                sequence: self.device.sequence.max(0),
                serial: self.device.serial.clone().unwrap_or_default(),
                center_frequency: payload_i64(&self.settings, "centerFrequency"),
                bandwidth: payload_i64(&self.settings, "bandwidth") as i32,
                state: self.state().state,
            },
            channelcount: channels.len() as i32,
            channels,
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Devices the local instrument can open.
fn device_catalog() -> Vec<DeviceListItem> {
    let item = |name: &str, hw_type: &str, serial: Option<&str>, direction: Direction, streams: i32| {
        DeviceListItem {
            displayed_name: Some(name.to_string()),
            hw_type: Some(hw_type.to_string()),
            serial: serial.map(str::to_string),
            direction,
            device_nb_streams: Some(streams),
            index: 0,
            sequence: 0,
            device_stream_index: 0,
            claimed: Some(-1),
        }
    };

    let mut catalog = vec![
        item("TestSource[0:0] 0", "TestSource", Some("0"), Direction::Rx, 1),
        item("FileInput[0]", "FileInput", None, Direction::Rx, 1),
        item("RTL-SDR[0] 00000001", "RTLSDR", Some("00000001"), Direction::Rx, 1),
        item("LocalOutput[0]", "LocalOutput", None, Direction::Tx, 1),
        item("RemoteOutput[0]", "RemoteOutput", None, Direction::Tx, 1),
        item("TestMI[0]", "TestMI", Some("0"), Direction::Mimo, 2),
    ];

    for direction in Direction::ALL {
        for (index, device) in catalog
            .iter_mut()
            .filter(|d| d.direction == direction)
            .enumerate()
        {
            device.index = index as i32;
        }
    }

    catalog
}

fn first_catalog_device(direction: Direction) -> Option<DeviceListItem> {
    device_catalog().into_iter().find(|d| d.direction == direction)
}

fn default_audio_inputs() -> Vec<AudioInputDevice> {
    vec![AudioInputDevice {
        name: Some("System default device".to_string()),
        index: -1,
        sample_rate: Some(48000),
        is_system_default: Some(1),
        default_unregistered: Some(1),
        volume: Some(1.0),
    }]
}

fn default_audio_outputs() -> Vec<AudioOutputDevice> {
    vec![AudioOutputDevice {
        name: Some("System default device".to_string()),
        index: -1,
        sample_rate: Some(48000),
        is_system_default: Some(1),
        default_unregistered: Some(1),
        copy_to_udp: Some(0),
        udp_uses_rtp: Some(0),
        udp_channel_mode: Some(0),
        udp_channel_codec: Some(0),
        udp_decimation_factor: Some(1),
        udp_address: Some("127.0.0.1".to_string()),
        udp_port: Some(9998),
    }]
}

/// Container holding the all-unset payload registered for the pair, or a
/// reset container when the pair is unknown.
fn default_container<V: Variant>(discriminator: &str, direction: Direction) -> Tagged<V> {
    V::entries()
        .into_iter()
        .find(|e| e.discriminator == discriminator && e.direction == direction)
        .and_then(|e| (e.decode)(Value::Object(Map::new())).ok())
        .map(Tagged::from_variant)
        .unwrap_or_default()
}

fn payload_i64<V: Variant>(container: &Tagged<V>, field: &str) -> i64 {
    container
        .variant()
        .and_then(|v| v.payload_value().ok())
        .and_then(|payload| payload.get(field).and_then(Value::as_i64))
        .unwrap_or(0)
}

fn channel_views(channels: &[LocalChannel]) -> Vec<Channel> {
    channels
        .iter()
        .enumerate()
        .map(|(index, channel)| Channel {
            index: index as i32,
            id: channel.channel_type.clone(),
            uid: channel.uid,
            title: channel.channel_type.clone(),
            delta_frequency: payload_i64(&channel.settings, "inputFrequencyOffset"),
            direction: channel.direction,
        })
        .collect()
}

fn preset_type(direction: Direction) -> &'static str {
    match direction {
        Direction::Rx => "R",
        Direction::Tx => "T",
        Direction::Mimo => "M",
    }
}

/// Copies the touched leaves of `update` over `current`.
fn merge_touched<T>(current: &T, update: &T, keys: &TouchedKeys) -> Result<T, AdapterError>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = serde_json::to_value(current).map_err(|e| AdapterError::internal(e.to_string()))?;
    let source = serde_json::to_value(update).map_err(|e| AdapterError::internal(e.to_string()))?;
    apply_touched(&mut merged, &source, keys).map_err(|e| AdapterError::internal(e.to_string()))?;
    serde_json::from_value(merged).map_err(|e| AdapterError::internal(e.to_string()))
}

fn device_set_not_found(ds: usize) -> AdapterError {
    AdapterError::not_found(format!("There is no device set with index {}", ds))
}

fn channel_not_found(ds: usize, ch: usize) -> AdapterError {
    AdapterError::not_found(format!("There is no channel with index {} in device set {}", ch, ds))
}

impl LocalData {
    fn device_set(&self, ds: DeviceSetIndex) -> Result<&LocalDeviceSet, AdapterError> {
        self.device_sets
            .get(ds.value())
            .ok_or_else(|| device_set_not_found(ds.value()))
    }

    fn device_set_mut(&mut self, ds: DeviceSetIndex) -> Result<&mut LocalDeviceSet, AdapterError> {
        self.device_sets
            .get_mut(ds.value())
            .ok_or_else(|| device_set_not_found(ds.value()))
    }

    fn channel(&self, ds: DeviceSetIndex, ch: ChannelIndex) -> Result<&LocalChannel, AdapterError> {
        self.device_set(ds)?
            .channels
            .get(ch.value())
            .ok_or_else(|| channel_not_found(ds.value(), ch.value()))
    }

    fn channel_mut(&mut self, ds: DeviceSetIndex, ch: ChannelIndex) -> Result<&mut LocalChannel, AdapterError> {
        self.device_set_mut(ds)?
            .channels
            .get_mut(ch.value())
            .ok_or_else(|| channel_not_found(ds.value(), ch.value()))
    }

    fn device_set_list(&self) -> DeviceSetList {
        DeviceSetList {
            devicesetcount: self.device_sets.len() as i32,
            devicesetfocus: self.focus as i32,
            device_sets: self
                .device_sets
                .iter()
                .enumerate()
                .map(|(index, set)| set.view(index))
                .collect(),
        }
    }

    fn find_preset(&self, id: &PresetIdentifier) -> Option<usize> {
        self.presets.iter().position(|p| p.matches(id))
    }

    fn apply_config_patch(&mut self, config: &InstanceConfig, keys: &ConfigKeys) -> Result<(), AdapterError> {
        if let Some(update) = &config.preferences {
            let current = self.config.preferences.clone().unwrap_or_default();
            self.config.preferences = Some(merge_touched(&current, update, &keys.preferences_keys)?);
        }

        for (index, command) in config.commands.iter().enumerate() {
            let command_keys = keys.command_keys.get(index).cloned().unwrap_or_default();
            match self.config.commands.get_mut(index) {
                Some(current) => *current = merge_touched(&*current, command, &command_keys)?,
                None => self.config.commands.push(command.clone()),
            }
        }

        if let Some(update) = &config.working_preset {
            let current = self.config.working_preset.get_or_insert_with(Preset::default);
            merge_preset(current, update, &keys.working_preset_keys)?;
        }

        Ok(())
    }
}

fn merge_preset(current: &mut Preset, update: &Preset, keys: &PresetKeys) -> Result<(), AdapterError> {
    if keys.keys.contains("centerFrequency") {
        current.center_frequency = update.center_frequency;
    }
    if keys.keys.contains("dcOffsetCorrection") {
        current.dc_offset_correction = update.dc_offset_correction;
    }
    if keys.keys.contains("iqImbalanceCorrection") {
        current.iq_imbalance_correction = update.iq_imbalance_correction;
    }
    if keys.keys.contains("description") {
        current.description = update.description.clone();
    }
    if keys.keys.contains("group") {
        current.group = update.group.clone();
    }
    if let Some(spectrum) = &update.spectrum_config {
        let base = current.spectrum_config.clone().unwrap_or_default();
        current.spectrum_config = Some(merge_touched(&base, spectrum, &keys.spectrum_keys)?);
    }
    if !update.channel_configs.is_empty() {
        current.channel_configs = update.channel_configs.clone();
    }
    if !update.device_configs.is_empty() {
        current.device_configs = update.device_configs.clone();
    }
    Ok(())
}

// =============================================================================
// Adapter
// =============================================================================

#[async_trait]
impl WebApiAdapter for LocalAdapter {
    async fn instance_summary(&self) -> AdapterResult<InstanceSummaryResponse> {
        let data = self.data.read();
        Ok(AdapterReply::ok(InstanceSummaryResponse {
            version: env!("CARGO_PKG_VERSION").to_string(),
            appname: env!("CARGO_PKG_NAME").to_string(),
            architecture: std::env::consts::ARCH.to_string(),
            os: std::env::consts::OS.to_string(),
            pid: i64::from(std::process::id()),
            dsp_rx_bits: 16,
            dsp_tx_bits: 16,
            logging: data.logging.clone(),
            devicesetlist: data.device_set_list(),
        }))
    }

    async fn instance_config_get(&self) -> AdapterResult<InstanceConfig> {
        Ok(AdapterReply::ok(self.data.read().config.clone()))
    }

    async fn instance_config_put_patch(
        &self,
        force: bool,
        config: &InstanceConfig,
        keys: &ConfigKeys,
    ) -> AdapterResult<SuccessResponse> {
        let mut data = self.data.write();
        if force {
            data.config = config.clone();
        } else {
            data.apply_config_patch(config, keys)?;
        }
        Ok(AdapterReply::ok(SuccessResponse::new("Configuration updated")))
    }

    async fn instance_devices(&self, direction: i32) -> AdapterResult<InstanceDevicesResponse> {
        let devices: Vec<DeviceListItem> = device_catalog()
            .into_iter()
            .filter(|d| i64::from(direction) == d.direction.code())
            .collect();
        Ok(AdapterReply::ok(InstanceDevicesResponse {
            devicecount: devices.len() as i32,
            devices,
        }))
    }

    async fn instance_channels(&self, direction: i32) -> AdapterResult<InstanceChannelsResponse> {
        let uris: BTreeMap<String, String> = default_preset_channels()
            .into_iter()
            .map(|(uri, key)| (key, uri))
            .collect();

        let channels: Vec<AvailableChannel> = ChannelSettingsVariant::entries()
            .into_iter()
            .filter(|e| i64::from(direction) == e.direction.code())
            .map(|e| AvailableChannel {
                name: e.discriminator.to_string(),
                id_uri: uris.get(e.key).cloned().unwrap_or_default(),
                id: e.discriminator.to_string(),
                direction: e.direction,
                version: env!("CARGO_PKG_VERSION").to_string(),
            })
            .collect();

        Ok(AdapterReply::ok(InstanceChannelsResponse {
            channelcount: channels.len() as i32,
            channels,
        }))
    }

    async fn instance_logging_get(&self) -> AdapterResult<LoggingInfo> {
        Ok(AdapterReply::ok(self.data.read().logging.clone()))
    }

    async fn instance_logging_put(&self, logging: &mut LoggingInfo) -> AdapterResult<()> {
        self.data.write().logging = logging.clone();
        Ok(AdapterReply::done(200))
    }

    async fn instance_audio_get(&self) -> AdapterResult<AudioDevices> {
        let data = self.data.read();
        Ok(AdapterReply::ok(AudioDevices {
            nb_input_devices: data.audio_inputs.len() as i32,
            input_devices: data.audio_inputs.clone(),
            nb_output_devices: data.audio_outputs.len() as i32,
            output_devices: data.audio_outputs.clone(),
        }))
    }

    async fn instance_audio_input_patch(
        &self,
        device: &mut AudioInputDevice,
        keys: &TouchedKeys,
    ) -> AdapterResult<()> {
        let mut data = self.data.write();
        let stored = data
            .audio_inputs
            .iter_mut()
            .find(|d| d.index == device.index)
            .ok_or_else(|| AdapterError::not_found(format!("No audio input device at index {}", device.index)))?;
        *stored = merge_touched(&*stored, &*device, keys)?;
        *device = stored.clone();
        Ok(AdapterReply::done(200))
    }

    async fn instance_audio_output_patch(
        &self,
        device: &mut AudioOutputDevice,
        keys: &TouchedKeys,
    ) -> AdapterResult<()> {
        let mut data = self.data.write();
        let stored = data
            .audio_outputs
            .iter_mut()
            .find(|d| d.index == device.index)
            .ok_or_else(|| AdapterError::not_found(format!("No audio output device at index {}", device.index)))?;
        *stored = merge_touched(&*stored, &*device, keys)?;
        *device = stored.clone();
        Ok(AdapterReply::done(200))
    }

    async fn instance_audio_input_delete(&self, device: &mut AudioInputDevice) -> AdapterResult<()> {
        let defaults = default_audio_inputs()
            .into_iter()
            .find(|d| d.index == device.index)
            .ok_or_else(|| AdapterError::not_found(format!("No audio input device at index {}", device.index)))?;
        let mut data = self.data.write();
        if let Some(stored) = data.audio_inputs.iter_mut().find(|d| d.index == device.index) {
            *stored = defaults.clone();
        }
        *device = defaults;
        Ok(AdapterReply::done(200))
    }

    async fn instance_audio_output_delete(&self, device: &mut AudioOutputDevice) -> AdapterResult<()> {
        let defaults = default_audio_outputs()
            .into_iter()
            .find(|d| d.index == device.index)
            .ok_or_else(|| AdapterError::not_found(format!("No audio output device at index {}", device.index)))?;
        let mut data = self.data.write();
        if let Some(stored) = data.audio_outputs.iter_mut().find(|d| d.index == device.index) {
            *stored = defaults.clone();
        }
        *device = defaults;
        Ok(AdapterReply::done(200))
    }

    async fn instance_audio_input_cleanup(&self) -> AdapterResult<SuccessResponse> {
        Ok(AdapterReply::ok(SuccessResponse::new(
            "Unregistered parameters for devices not in list of available input devices",
        )))
    }

    async fn instance_audio_output_cleanup(&self) -> AdapterResult<SuccessResponse> {
        Ok(AdapterReply::ok(SuccessResponse::new(
            "Unregistered parameters for devices not in list of available output devices",
        )))
    }

    async fn instance_location_get(&self) -> AdapterResult<LocationInformation> {
        Ok(AdapterReply::ok(self.data.read().location.clone()))
    }

    async fn instance_location_put(&self, location: &mut LocationInformation) -> AdapterResult<()> {
        self.data.write().location = location.clone();
        Ok(AdapterReply::done(200))
    }

    async fn instance_ambe_serial_get(&self) -> AdapterResult<DvSerialDevices> {
        let data = self.data.read();
        Ok(AdapterReply::ok(DvSerialDevices {
            nb_devices: data.dv_serial_devices.len() as i32,
            dv_serial_devices: data.dv_serial_devices.clone(),
        }))
    }

    async fn instance_ambe_devices_get(&self) -> AdapterResult<AmbeDevices> {
        Ok(AdapterReply::ok(ambe_list(&self.data.read().ambe_devices)))
    }

    async fn instance_ambe_devices_put(&self, devices: &AmbeDevices) -> AdapterResult<AmbeDevices> {
        let mut data = self.data.write();
        data.ambe_devices = devices
            .ambe_devices
            .iter()
            .filter(|d| d.delete == 0)
            .map(|d| d.device_ref.clone())
            .collect();
        Ok(AdapterReply::ok(ambe_list(&data.ambe_devices)))
    }

    async fn instance_ambe_devices_patch(&self, devices: &AmbeDevices) -> AdapterResult<AmbeDevices> {
        let mut data = self.data.write();
        for device in &devices.ambe_devices {
            let present = data.ambe_devices.iter().position(|r| *r == device.device_ref);
            match (device.delete != 0, present) {
                (true, Some(index)) => {
                    data.ambe_devices.remove(index);
                }
                (false, None) => data.ambe_devices.push(device.device_ref.clone()),
                _ => {}
            }
        }
        Ok(AdapterReply::ok(ambe_list(&data.ambe_devices)))
    }

    async fn instance_ambe_devices_delete(&self) -> AdapterResult<SuccessResponse> {
        self.data.write().ambe_devices.clear();
        Ok(AdapterReply::ok(SuccessResponse::new("All AMBE devices released")))
    }

    async fn instance_presets_get(&self) -> AdapterResult<Presets> {
        let data = self.data.read();
        let mut groups: BTreeMap<&str, Vec<PresetItem>> = BTreeMap::new();
        for preset in &data.presets {
            groups.entry(preset.group.as_str()).or_default().push(PresetItem {
                center_frequency: preset.center_frequency,
                preset_type: preset.preset_type.clone(),
                name: preset.name.clone(),
            });
        }

        let groups: Vec<PresetGroup> = groups
            .into_iter()
            .map(|(name, presets)| PresetGroup {
                group_name: name.to_string(),
                nb_presets: presets.len() as i32,
                presets,
            })
            .collect();

        Ok(AdapterReply::ok(Presets {
            nb_groups: groups.len() as i32,
            groups,
        }))
    }

    async fn instance_preset_patch(&self, transfer: &PresetTransfer) -> AdapterResult<PresetIdentifier> {
        let (ds, id) = transfer_parts(transfer)?;
        let mut data = self.data.write();
        let index = data
            .find_preset(id)
            .ok_or_else(|| AdapterError::not_found("There is no preset with this identifier"))?;
        let preset = &data.presets[index];
        let (device, settings, channels, identifier) = (
            preset.device.clone(),
            preset.settings.clone(),
            preset.channels.clone(),
            preset.identifier(),
        );

        let set = data.device_set_mut(ds)?;
        if preset_type(set.direction()) != identifier.preset_type.as_deref().unwrap_or_default() {
            return Err(AdapterError::bad_request("Preset type and device set type mismatch"));
        }
        set.device = device;
        set.settings = settings;
        set.channels = channels;
        info!("Loaded preset into device set {}", ds);
        Ok(AdapterReply::accepted(identifier))
    }

    async fn instance_preset_put(&self, transfer: &PresetTransfer) -> AdapterResult<PresetIdentifier> {
        let (ds, id) = transfer_parts(transfer)?;
        let mut data = self.data.write();
        let index = data
            .find_preset(id)
            .ok_or_else(|| AdapterError::not_found("There is no preset with this identifier"))?;
        let set = data.device_set(ds)?;
        if preset_type(set.direction()) != data.presets[index].preset_type {
            return Err(AdapterError::bad_request("Preset type and device set type mismatch"));
        }
        let (device, settings, channels, center_frequency) = (
            set.device.clone(),
            set.settings.clone(),
            set.channels.clone(),
            payload_i64(&set.settings, "centerFrequency"),
        );

        let preset = &mut data.presets[index];
        preset.device = device;
        preset.settings = settings;
        preset.channels = channels;
        preset.center_frequency = center_frequency;
        Ok(AdapterReply::accepted(preset.identifier()))
    }

    async fn instance_preset_post(&self, transfer: &PresetTransfer) -> AdapterResult<PresetIdentifier> {
        let (ds, id) = transfer_parts(transfer)?;
        let mut data = self.data.write();
        if data.find_preset(id).is_some() {
            return Err(AdapterError::conflict("Preset already exists"));
        }
        let set = data.device_set(ds)?;
        let preset = StoredPreset {
            group: id.group_name.clone().unwrap_or_default(),
            name: id.name.clone().unwrap_or_default(),
            preset_type: preset_type(set.direction()).to_string(),
            center_frequency: id
                .center_frequency
                .unwrap_or_else(|| payload_i64(&set.settings, "centerFrequency")),
            device: set.device.clone(),
            settings: set.settings.clone(),
            channels: set.channels.clone(),
        };
        let identifier = preset.identifier();
        data.presets.push(preset);
        debug!("Stored preset {:?}", identifier);
        Ok(AdapterReply::accepted(identifier))
    }

    async fn instance_preset_delete(&self, preset: &PresetIdentifier) -> AdapterResult<PresetIdentifier> {
        let mut data = self.data.write();
        let index = data
            .find_preset(preset)
            .ok_or_else(|| AdapterError::not_found("There is no preset with this identifier"))?;
        let removed = data.presets.remove(index);
        Ok(AdapterReply::accepted(removed.identifier()))
    }

    async fn instance_device_sets_get(&self) -> AdapterResult<DeviceSetList> {
        Ok(AdapterReply::ok(self.data.read().device_set_list()))
    }

    async fn instance_device_set_post(&self, direction: i32) -> AdapterResult<SuccessResponse> {
        let direction = Direction::from_code(i64::from(direction))
            .ok_or_else(|| AdapterError::bad_request(format!("Invalid direction {}", direction)))?;
        let device = first_catalog_device(direction)
            .ok_or_else(|| AdapterError::not_found(format!("No {} device available", direction)))?;

        let mut data = self.data.write();
        data.device_sets.push(LocalDeviceSet::with_device(device));
        info!("Added {} device set {}", direction, data.device_sets.len() - 1);
        Ok(AdapterReply::accepted(SuccessResponse::new(format!(
            "Device set of type {} added",
            direction
        ))))
    }

    async fn instance_device_set_delete(&self) -> AdapterResult<SuccessResponse> {
        let mut data = self.data.write();
        if data.device_sets.pop().is_none() {
            return Err(AdapterError::not_found("No more device sets to be removed"));
        }
        if data.focus >= data.device_sets.len() {
            data.focus = data.device_sets.len().saturating_sub(1);
        }
        Ok(AdapterReply::accepted(SuccessResponse::new("Last device set removed")))
    }

    async fn device_set_get(&self, ds: DeviceSetIndex) -> AdapterResult<DeviceSet> {
        let data = self.data.read();
        Ok(AdapterReply::ok(data.device_set(ds)?.view(ds.value())))
    }

    async fn device_set_focus_patch(&self, ds: DeviceSetIndex) -> AdapterResult<SuccessResponse> {
        let mut data = self.data.write();
        data.device_set(ds)?;
        data.focus = ds.value();
        Ok(AdapterReply::accepted(SuccessResponse::new(format!(
            "Focus set on device set {}",
            ds
        ))))
    }

    async fn device_set_device_put(&self, ds: DeviceSetIndex, device: &mut DeviceListItem) -> AdapterResult<()> {
        let requested = device.clone();
        let selected = device_catalog()
            .into_iter()
            .find(|d| {
                d.direction == requested.direction
                    && requested.hw_type.as_ref().map_or(true, |h| d.hw_type.as_ref() == Some(h))
                    && requested.serial.as_ref().map_or(true, |s| d.serial.as_ref() == Some(s))
                    && requested
                        .displayed_name
                        .as_ref()
                        .map_or(true, |n| d.displayed_name.as_ref() == Some(n))
            })
            .ok_or_else(|| AdapterError::not_found("Device not found"))?;

        let mut data = self.data.write();
        let set = data.device_set_mut(ds)?;
        if set.direction() != selected.direction {
            return Err(AdapterError::bad_request("Device and device set directions differ"));
        }

        let mut claimed = selected;
        claimed.claimed = Some(ds.value() as i32);
        let channels = std::mem::take(&mut set.channels);
        *set = LocalDeviceSet::with_device(claimed.clone());
        set.channels = channels;
        *device = claimed;
        Ok(AdapterReply::done(202))
    }

    async fn device_set_device_settings_get(
        &self,
        ds: DeviceSetIndex,
        settings: &mut DeviceSettings,
    ) -> AdapterResult<()> {
        let data = self.data.read();
        *settings = data.device_set(ds)?.settings.clone();
        Ok(AdapterReply::done(200))
    }

    async fn device_set_device_settings_put_patch(
        &self,
        ds: DeviceSetIndex,
        force: bool,
        keys: &TouchedKeys,
        settings: &mut DeviceSettings,
    ) -> AdapterResult<()> {
        let mut data = self.data.write();
        let set = data.device_set_mut(ds)?;
        if settings.discriminator() != Some(set.hw_type()) || settings.direction() != Some(set.direction()) {
            return Err(AdapterError::bad_request(format!(
                "Device set {} holds a {} {} device",
                ds,
                set.hw_type(),
                set.direction()
            )));
        }

        if force {
            set.settings = settings.clone();
        } else {
            set.settings
                .merge(settings, keys)
                .map_err(|e| AdapterError::internal(e.to_string()))?;
        }
        *settings = set.settings.clone();
        Ok(AdapterReply::done(200))
    }

    async fn device_set_device_run_get(&self, ds: DeviceSetIndex) -> AdapterResult<DeviceState> {
        Ok(AdapterReply::ok(self.data.read().device_set(ds)?.state()))
    }

    async fn device_set_device_run_post(&self, ds: DeviceSetIndex) -> AdapterResult<DeviceState> {
        let mut data = self.data.write();
        let set = data.device_set_mut(ds)?;
        set.running = true;
        Ok(AdapterReply::ok(set.state()))
    }

    async fn device_set_device_run_delete(&self, ds: DeviceSetIndex) -> AdapterResult<DeviceState> {
        let mut data = self.data.write();
        let set = data.device_set_mut(ds)?;
        set.running = false;
        Ok(AdapterReply::ok(set.state()))
    }

    async fn device_set_channels_report_get(&self, ds: DeviceSetIndex) -> AdapterResult<ChannelsDetail> {
        let data = self.data.read();
        let channels = channel_views(&data.device_set(ds)?.channels);
        Ok(AdapterReply::ok(ChannelsDetail {
            channelcount: channels.len() as i32,
            channels,
        }))
    }

    async fn device_set_channel_post(
        &self,
        ds: DeviceSetIndex,
        creation: &ChannelCreation,
    ) -> AdapterResult<SuccessResponse> {
        let settings = default_container::<ChannelSettingsVariant>(&creation.channel_type, creation.direction);
        if settings.is_reset() {
            return Err(AdapterError::not_found(format!(
                "Unknown channel type {} for direction {}",
                creation.channel_type, creation.direction
            )));
        }

        let mut data = self.data.write();
        let uid = data.next_channel_uid;
        let set = data.device_set_mut(ds)?;
        if set.direction() != Direction::Mimo && set.direction() != creation.direction {
            return Err(AdapterError::bad_request(format!(
                "Device set {} does not accept {} channels",
                ds, creation.direction
            )));
        }
        set.channels.push(LocalChannel {
            uid,
            channel_type: creation.channel_type.clone(),
            direction: creation.direction,
            settings,
        });
        data.next_channel_uid += 1;

        Ok(AdapterReply::accepted(SuccessResponse::new(format!(
            "Channel {} added to device set {}",
            creation.channel_type, ds
        ))))
    }

    async fn device_set_channel_delete(&self, ds: DeviceSetIndex, ch: ChannelIndex) -> AdapterResult<SuccessResponse> {
        let mut data = self.data.write();
        let set = data.device_set_mut(ds)?;
        if ch.value() >= set.channels.len() {
            return Err(channel_not_found(ds.value(), ch.value()));
        }
        set.channels.remove(ch.value());
        Ok(AdapterReply::accepted(SuccessResponse::new(format!(
            "Channel {} removed from device set {}",
            ch, ds
        ))))
    }

    async fn device_set_channel_settings_get(
        &self,
        ds: DeviceSetIndex,
        ch: ChannelIndex,
        settings: &mut ChannelSettings,
    ) -> AdapterResult<()> {
        let data = self.data.read();
        *settings = data.channel(ds, ch)?.settings.clone();
        Ok(AdapterReply::done(200))
    }

    async fn device_set_channel_settings_put_patch(
        &self,
        ds: DeviceSetIndex,
        ch: ChannelIndex,
        force: bool,
        keys: &TouchedKeys,
        settings: &mut ChannelSettings,
    ) -> AdapterResult<()> {
        let mut data = self.data.write();
        let channel = data.channel_mut(ds, ch)?;
        if settings.discriminator() != Some(channel.channel_type.as_str()) {
            return Err(AdapterError::bad_request(format!(
                "Channel {} of device set {} is a {} channel",
                ch, ds, channel.channel_type
            )));
        }

        if force {
            channel.settings = settings.clone();
        } else {
            channel
                .settings
                .merge(settings, keys)
                .map_err(|e| AdapterError::internal(e.to_string()))?;
        }
        *settings = channel.settings.clone();
        Ok(AdapterReply::done(200))
    }
}

fn ambe_list(refs: &[String]) -> AmbeDevices {
    AmbeDevices {
        nb_devices: refs.len() as i32,
        ambe_devices: refs
            .iter()
            .map(|r| crate::models::AmbeDevice {
                device_ref: r.clone(),
                delete: 0,
            })
            .collect(),
    }
}

fn transfer_parts(transfer: &PresetTransfer) -> Result<(DeviceSetIndex, &PresetIdentifier), AdapterError> {
    let ds = transfer
        .device_set_index
        .and_then(|i| usize::try_from(i).ok())
        .map(DeviceSetIndex::new)
        .ok_or_else(|| AdapterError::bad_request("Missing or invalid device set index"))?;
    let id = transfer
        .preset
        .as_ref()
        .filter(|p| p.is_valid())
        .ok_or_else(|| AdapterError::bad_request("Missing preset identification"))?;
    Ok((ds, id))
}
