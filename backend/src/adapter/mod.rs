//! Instrument control adapter contract.
//!
//! The HTTP layer never touches instrument state directly. Every endpoint is
//! mapped onto one method of [`WebApiAdapter`], which receives typed,
//! already validated arguments and answers with an [`AdapterReply`] (2xx
//! status plus body) or an [`AdapterError`] (status plus error body).
//!
//! Operations that read or write a settings/report container take it by
//! `&mut`: the handler hands over a validated (or reset) container and sends
//! back whatever the adapter left in it. Those methods return a status-only
//! reply.
//!
//! Every method has a default answering 501 "Function not implemented", so
//! an adapter only implements what its instrument supports.
//!
//! # Thread Safety
//! Implementations must be `Send + Sync`; one instance is shared by all
//! request tasks.

#[cfg(feature = "local-adapter")]
pub mod local;

#[cfg(feature = "local-adapter")]
pub use local::LocalAdapter;

use async_trait::async_trait;
use thiserror::Error;

use crate::mapping::{ChannelReport, ChannelSettings, DeviceReport, DeviceSettings, TouchedKeys};
use crate::models::config::{ConfigKeys, InstanceConfig};
use crate::models::{
    AmbeDevices, AudioDevices, AudioInputDevice, AudioOutputDevice, ChannelCreation, ChannelIndex,
    ChannelsDetail, DeviceListItem, DeviceSet, DeviceSetIndex, DeviceSetList, DeviceState,
    DvSerialDevices, ErrorResponse, InstanceChannelsResponse, InstanceDevicesResponse,
    InstanceSummaryResponse, LocationInformation, LoggingInfo, PresetExport, PresetIdentifier,
    PresetImport, PresetTransfer, Presets, SuccessResponse,
};

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<AdapterReply<T>, AdapterError>;

/// Successful adapter answer.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterReply<T> {
    /// HTTP status, expected in the 2xx range.
    pub status: u16,
    pub body: T,
}

impl<T> AdapterReply<T> {
    /// 200 reply.
    pub fn ok(body: T) -> Self {
        Self { status: 200, body }
    }

    /// 202 reply, used for operations the instrument completes asynchronously.
    pub fn accepted(body: T) -> Self {
        Self { status: 202, body }
    }

    pub fn with_status(status: u16, body: T) -> Self {
        Self { status, body }
    }
}

impl AdapterReply<()> {
    /// Status-only reply for in-out operations.
    pub fn done(status: u16) -> Self {
        Self { status, body: () }
    }
}

/// Failed adapter answer; status and body are sent to the client verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("adapter error {status}: {}", body.message)]
pub struct AdapterError {
    pub status: u16,
    pub body: ErrorResponse,
}

impl AdapterError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse::new(message),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(409, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(500, message)
    }

    pub fn not_implemented() -> Self {
        Self::new(501, "Function not implemented")
    }
}

/// Backend contract consumed by the HTTP handlers.
///
/// `direction` arguments are the raw integer query parameter (0 = rx,
/// 1 = tx, 2 = mimo); the adapter decides what an unknown value means.
/// `force` on the settings operations is `true` for PUT (replace) and
/// `false` for PATCH (merge the touched keys).
#[async_trait]
pub trait WebApiAdapter: Send + Sync {
    // ==================== Instance ====================

    async fn instance_summary(&self) -> AdapterResult<InstanceSummaryResponse> {
        Err(AdapterError::not_implemented())
    }

    /// Shuts the instance down.
    async fn instance_delete(&self) -> AdapterResult<SuccessResponse> {
        Err(AdapterError::not_implemented())
    }

    async fn instance_config_get(&self) -> AdapterResult<InstanceConfig> {
        Err(AdapterError::not_implemented())
    }

    async fn instance_config_put_patch(
        &self,
        _force: bool,
        _config: &InstanceConfig,
        _keys: &ConfigKeys,
    ) -> AdapterResult<SuccessResponse> {
        Err(AdapterError::not_implemented())
    }

    /// Device catalog for one direction.
    async fn instance_devices(&self, _direction: i32) -> AdapterResult<InstanceDevicesResponse> {
        Err(AdapterError::not_implemented())
    }

    /// Channel plugin catalog for one direction.
    async fn instance_channels(&self, _direction: i32) -> AdapterResult<InstanceChannelsResponse> {
        Err(AdapterError::not_implemented())
    }

    async fn instance_logging_get(&self) -> AdapterResult<LoggingInfo> {
        Err(AdapterError::not_implemented())
    }

    async fn instance_logging_put(&self, _logging: &mut LoggingInfo) -> AdapterResult<()> {
        Err(AdapterError::not_implemented())
    }

    // ==================== Audio ====================

    async fn instance_audio_get(&self) -> AdapterResult<AudioDevices> {
        Err(AdapterError::not_implemented())
    }

    async fn instance_audio_input_patch(
        &self,
        _device: &mut AudioInputDevice,
        _keys: &TouchedKeys,
    ) -> AdapterResult<()> {
        Err(AdapterError::not_implemented())
    }

    async fn instance_audio_output_patch(
        &self,
        _device: &mut AudioOutputDevice,
        _keys: &TouchedKeys,
    ) -> AdapterResult<()> {
        Err(AdapterError::not_implemented())
    }

    /// Restores the defaults of one input device.
    async fn instance_audio_input_delete(&self, _device: &mut AudioInputDevice) -> AdapterResult<()> {
        Err(AdapterError::not_implemented())
    }

    async fn instance_audio_output_delete(&self, _device: &mut AudioOutputDevice) -> AdapterResult<()> {
        Err(AdapterError::not_implemented())
    }

    /// Drops stored parameters of input devices that are no longer present.
    async fn instance_audio_input_cleanup(&self) -> AdapterResult<SuccessResponse> {
        Err(AdapterError::not_implemented())
    }

    async fn instance_audio_output_cleanup(&self) -> AdapterResult<SuccessResponse> {
        Err(AdapterError::not_implemented())
    }

    // ==================== Location ====================

    async fn instance_location_get(&self) -> AdapterResult<LocationInformation> {
        Err(AdapterError::not_implemented())
    }

    async fn instance_location_put(&self, _location: &mut LocationInformation) -> AdapterResult<()> {
        Err(AdapterError::not_implemented())
    }

    // ==================== AMBE codec devices ====================

    async fn instance_ambe_serial_get(&self) -> AdapterResult<DvSerialDevices> {
        Err(AdapterError::not_implemented())
    }

    async fn instance_ambe_devices_get(&self) -> AdapterResult<AmbeDevices> {
        Err(AdapterError::not_implemented())
    }

    /// Replaces the codec device list.
    async fn instance_ambe_devices_put(&self, _devices: &AmbeDevices) -> AdapterResult<AmbeDevices> {
        Err(AdapterError::not_implemented())
    }

    /// Adds or removes (`delete` = 1) individual codec devices.
    async fn instance_ambe_devices_patch(&self, _devices: &AmbeDevices) -> AdapterResult<AmbeDevices> {
        Err(AdapterError::not_implemented())
    }

    async fn instance_ambe_devices_delete(&self) -> AdapterResult<SuccessResponse> {
        Err(AdapterError::not_implemented())
    }

    // ==================== Presets ====================

    async fn instance_presets_get(&self) -> AdapterResult<Presets> {
        Err(AdapterError::not_implemented())
    }

    /// Loads a preset into a device set.
    async fn instance_preset_patch(&self, _transfer: &PresetTransfer) -> AdapterResult<PresetIdentifier> {
        Err(AdapterError::not_implemented())
    }

    /// Updates an existing preset from a device set.
    async fn instance_preset_put(&self, _transfer: &PresetTransfer) -> AdapterResult<PresetIdentifier> {
        Err(AdapterError::not_implemented())
    }

    /// Creates a new preset from a device set.
    async fn instance_preset_post(&self, _transfer: &PresetTransfer) -> AdapterResult<PresetIdentifier> {
        Err(AdapterError::not_implemented())
    }

    async fn instance_preset_delete(&self, _preset: &PresetIdentifier) -> AdapterResult<PresetIdentifier> {
        Err(AdapterError::not_implemented())
    }

    /// Imports a preset from a file.
    async fn instance_preset_file_put(&self, _import: &PresetImport) -> AdapterResult<PresetIdentifier> {
        Err(AdapterError::not_implemented())
    }

    /// Exports a preset to a file.
    async fn instance_preset_file_post(&self, _export: &PresetExport) -> AdapterResult<PresetIdentifier> {
        Err(AdapterError::not_implemented())
    }

    // ==================== Device sets ====================

    async fn instance_device_sets_get(&self) -> AdapterResult<DeviceSetList> {
        Err(AdapterError::not_implemented())
    }

    /// Appends a device set of the given direction.
    async fn instance_device_set_post(&self, _direction: i32) -> AdapterResult<SuccessResponse> {
        Err(AdapterError::not_implemented())
    }

    /// Removes the last device set.
    async fn instance_device_set_delete(&self) -> AdapterResult<SuccessResponse> {
        Err(AdapterError::not_implemented())
    }

    async fn device_set_get(&self, _ds: DeviceSetIndex) -> AdapterResult<DeviceSet> {
        Err(AdapterError::not_implemented())
    }

    async fn device_set_focus_patch(&self, _ds: DeviceSetIndex) -> AdapterResult<SuccessResponse> {
        Err(AdapterError::not_implemented())
    }

    /// Selects the sampling device of a device set.
    async fn device_set_device_put(
        &self,
        _ds: DeviceSetIndex,
        _device: &mut DeviceListItem,
    ) -> AdapterResult<()> {
        Err(AdapterError::not_implemented())
    }

    async fn device_set_device_settings_get(
        &self,
        _ds: DeviceSetIndex,
        _settings: &mut DeviceSettings,
    ) -> AdapterResult<()> {
        Err(AdapterError::not_implemented())
    }

    async fn device_set_device_settings_put_patch(
        &self,
        _ds: DeviceSetIndex,
        _force: bool,
        _keys: &TouchedKeys,
        _settings: &mut DeviceSettings,
    ) -> AdapterResult<()> {
        Err(AdapterError::not_implemented())
    }

    async fn device_set_device_run_get(&self, _ds: DeviceSetIndex) -> AdapterResult<DeviceState> {
        Err(AdapterError::not_implemented())
    }

    async fn device_set_device_run_post(&self, _ds: DeviceSetIndex) -> AdapterResult<DeviceState> {
        Err(AdapterError::not_implemented())
    }

    async fn device_set_device_run_delete(&self, _ds: DeviceSetIndex) -> AdapterResult<DeviceState> {
        Err(AdapterError::not_implemented())
    }

    async fn device_set_device_report_get(
        &self,
        _ds: DeviceSetIndex,
        _report: &mut DeviceReport,
    ) -> AdapterResult<()> {
        Err(AdapterError::not_implemented())
    }

    async fn device_set_channels_report_get(&self, _ds: DeviceSetIndex) -> AdapterResult<ChannelsDetail> {
        Err(AdapterError::not_implemented())
    }

    // ==================== Channels ====================

    async fn device_set_channel_post(
        &self,
        _ds: DeviceSetIndex,
        _creation: &ChannelCreation,
    ) -> AdapterResult<SuccessResponse> {
        Err(AdapterError::not_implemented())
    }

    async fn device_set_channel_delete(
        &self,
        _ds: DeviceSetIndex,
        _ch: ChannelIndex,
    ) -> AdapterResult<SuccessResponse> {
        Err(AdapterError::not_implemented())
    }

    async fn device_set_channel_settings_get(
        &self,
        _ds: DeviceSetIndex,
        _ch: ChannelIndex,
        _settings: &mut ChannelSettings,
    ) -> AdapterResult<()> {
        Err(AdapterError::not_implemented())
    }

    async fn device_set_channel_settings_put_patch(
        &self,
        _ds: DeviceSetIndex,
        _ch: ChannelIndex,
        _force: bool,
        _keys: &TouchedKeys,
        _settings: &mut ChannelSettings,
    ) -> AdapterResult<()> {
        Err(AdapterError::not_implemented())
    }

    async fn device_set_channel_report_get(
        &self,
        _ds: DeviceSetIndex,
        _ch: ChannelIndex,
        _report: &mut ChannelReport,
    ) -> AdapterResult<()> {
        Err(AdapterError::not_implemented())
    }
}
