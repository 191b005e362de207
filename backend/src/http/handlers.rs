//! HTTP handlers for the REST API.
//!
//! All requests enter through [`dispatch`]: adapter check, pre-flight,
//! routing, then one handler per resource. Each handler matches the method,
//! decodes and validates the body when the method carries one, calls the
//! adapter and maps its reply.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, CONTENT_TYPE},
        Method, StatusCode, Uri,
    },
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

use super::decode::decode_object;
use super::error::AppError;
use super::routes::{route, Endpoint};
use super::state::AppState;
use crate::adapter::{AdapterError, AdapterResult, WebApiAdapter};
use crate::mapping::requests::{
    decode_location, decode_logging, validate_ambe_devices, validate_audio_input_device,
    validate_audio_output_device, validate_channel_creation, validate_device_list_item,
    validate_preset_export, validate_preset_identifier, validate_preset_import,
    validate_preset_transfer,
};
use crate::mapping::{ChannelReport, ChannelSettings, DeviceReport, DeviceSettings, SettingsMapper};
use crate::models::{ChannelIndex, DeviceSetIndex};

/// Result type for handlers.
pub type HandlerResult = Result<Response, AppError>;

#[derive(Debug, Deserialize)]
struct DirectionQuery {
    direction: Option<i32>,
}

/// One routed request.
struct ApiRequest {
    adapter: Arc<dyn WebApiAdapter>,
    mapper: Arc<SettingsMapper>,
    method: Method,
    uri: Uri,
    body: Bytes,
}

impl ApiRequest {
    fn json(&self) -> Result<Map<String, Value>, AppError> {
        Ok(decode_object(&self.body)?)
    }

    /// `direction` query parameter; absent or non-numeric means 0.
    fn direction(&self) -> i32 {
        Query::<DirectionQuery>::try_from_uri(&self.uri)
            .ok()
            .and_then(|Query(q)| q.direction)
            .unwrap_or(0)
    }

    fn is_put(&self) -> bool {
        self.method == Method::PUT
    }
}

// =============================================================================
// Entry point
// =============================================================================

/// Fallback handler serving every path of the API.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let Some(adapter) = state.adapter.clone() else {
        return AppError::ServiceUnavailable.into_response();
    };

    if method == Method::OPTIONS {
        return preflight();
    }

    let Some(endpoint) = route(uri.path()) else {
        debug!("no route for {} {}", method, uri.path());
        return AppError::NotFound.into_response();
    };
    debug!("{} {} -> {:?}", method, uri.path(), endpoint);

    let request = ApiRequest {
        adapter,
        mapper: state.mapper.clone(),
        method,
        uri,
        body,
    };

    match handle(&request, endpoint).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Uniform answer to CORS pre-flight requests.
fn preflight() -> Response {
    (
        StatusCode::OK,
        [
            (ACCESS_CONTROL_ALLOW_HEADERS, "*"),
            (ACCESS_CONTROL_ALLOW_METHODS, "*"),
            (CONTENT_TYPE, "application/json"),
        ],
    )
        .into_response()
}

fn device_set_index(raw: &str) -> Result<DeviceSetIndex, AppError> {
    raw.parse().map_err(|_| AppError::DeviceSetIndex)
}

fn channel_index(raw: &str) -> Result<ChannelIndex, AppError> {
    raw.parse().map_err(|_| AppError::ChannelIndex)
}

async fn handle(req: &ApiRequest, endpoint: Endpoint) -> HandlerResult {
    match endpoint {
        Endpoint::InstanceSummary => instance_summary(req).await,
        Endpoint::InstanceConfig => instance_config(req).await,
        Endpoint::InstanceDevices => instance_devices(req).await,
        Endpoint::InstanceChannels => instance_channels(req).await,
        Endpoint::InstanceLogging => instance_logging(req).await,
        Endpoint::InstanceAudio => instance_audio(req).await,
        Endpoint::AudioInputParameters => audio_input_parameters(req).await,
        Endpoint::AudioOutputParameters => audio_output_parameters(req).await,
        Endpoint::AudioInputCleanup => audio_input_cleanup(req).await,
        Endpoint::AudioOutputCleanup => audio_output_cleanup(req).await,
        Endpoint::InstanceLocation => instance_location(req).await,
        Endpoint::AmbeSerial => ambe_serial(req).await,
        Endpoint::AmbeDevices => ambe_devices(req).await,
        Endpoint::InstancePresets => instance_presets(req).await,
        Endpoint::InstancePreset => instance_preset(req).await,
        Endpoint::InstancePresetFile => instance_preset_file(req).await,
        Endpoint::InstanceDeviceSets => instance_device_sets(req).await,
        Endpoint::InstanceDeviceSet => instance_device_set(req).await,
        Endpoint::DeviceSet(ds) => device_set(req, device_set_index(&ds)?).await,
        Endpoint::DeviceSetDevice(ds) => device_set_device(req, device_set_index(&ds)?).await,
        Endpoint::DeviceSetFocus(ds) => device_set_focus(req, device_set_index(&ds)?).await,
        Endpoint::DeviceSettings(ds) => device_settings(req, device_set_index(&ds)?).await,
        Endpoint::DeviceRun(ds) => device_run(req, device_set_index(&ds)?).await,
        Endpoint::DeviceReport(ds) => device_report(req, device_set_index(&ds)?).await,
        Endpoint::ChannelsReport(ds) => channels_report(req, device_set_index(&ds)?).await,
        Endpoint::ChannelCreate(ds) => channel_create(req, device_set_index(&ds)?).await,
        Endpoint::Channel(ds, ch) => {
            let ds = device_set_index(&ds)?;
            channel(req, ds, channel_index(&ch)?).await
        }
        Endpoint::ChannelSettings(ds, ch) => {
            let ds = device_set_index(&ds)?;
            channel_settings(req, ds, channel_index(&ch)?).await
        }
        Endpoint::ChannelReport(ds, ch) => {
            let ds = device_set_index(&ds)?;
            channel_report(req, ds, channel_index(&ch)?).await
        }
    }
}

// =============================================================================
// Reply mapping
// =============================================================================

/// JSON response for a 2xx adapter status. Any other status without an
/// error body is reported as an internal error.
fn respond<T: Serialize>(status: u16, body: &T) -> HandlerResult {
    match StatusCode::from_u16(status) {
        Ok(code) if code.is_success() => Ok((code, Json(body)).into_response()),
        _ => Err(AdapterError::internal(format!(
            "Adapter replied with status {} and no error body",
            status
        ))
        .into()),
    }
}

fn reply<T: Serialize>(result: AdapterResult<T>) -> HandlerResult {
    let reply = result?;
    respond(reply.status, &reply.body)
}

/// Maps a status-only reply of an in-out operation, answering with the
/// container the adapter filled.
fn reply_with<T: Serialize>(result: AdapterResult<()>, body: &T) -> HandlerResult {
    let reply = result?;
    respond(reply.status, body)
}

// =============================================================================
// Instance
// =============================================================================

/// GET, DELETE /instance/summary
async fn instance_summary(req: &ApiRequest) -> HandlerResult {
    match req.method {
        Method::GET => reply(req.adapter.instance_summary().await),
        Method::DELETE => reply(req.adapter.instance_delete().await),
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// GET, PUT, PATCH /instance/config
async fn instance_config(req: &ApiRequest) -> HandlerResult {
    match req.method {
        Method::GET => reply(req.adapter.instance_config_get().await),
        Method::PUT | Method::PATCH => {
            let raw = req.json()?;
            let (config, keys) = req.mapper.validate_config(&raw)?;
            reply(req.adapter.instance_config_put_patch(req.is_put(), &config, &keys).await)
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// GET /instance/devices?direction=
async fn instance_devices(req: &ApiRequest) -> HandlerResult {
    match req.method {
        Method::GET => reply(req.adapter.instance_devices(req.direction()).await),
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// GET /instance/channels?direction=
async fn instance_channels(req: &ApiRequest) -> HandlerResult {
    match req.method {
        Method::GET => reply(req.adapter.instance_channels(req.direction()).await),
        _ => Err(AppError::MethodNotAllowed),
    }
}

async fn instance_logging(req: &ApiRequest) -> HandlerResult {
    match req.method {
        Method::GET => reply(req.adapter.instance_logging_get().await),
        Method::PUT => {
            let mut logging = decode_logging(&req.json()?)?;
            let result = req.adapter.instance_logging_put(&mut logging).await;
            reply_with(result, &logging)
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

// =============================================================================
// Audio
// =============================================================================

async fn instance_audio(req: &ApiRequest) -> HandlerResult {
    match req.method {
        Method::GET => reply(req.adapter.instance_audio_get().await),
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// PATCH, DELETE /instance/audio/input/parameters
async fn audio_input_parameters(req: &ApiRequest) -> HandlerResult {
    match req.method {
        Method::PATCH => {
            let (mut device, keys) = validate_audio_input_device(&req.json()?)?;
            let result = req.adapter.instance_audio_input_patch(&mut device, &keys).await;
            reply_with(result, &device)
        }
        Method::DELETE => {
            let (mut device, _) = validate_audio_input_device(&req.json()?)?;
            let result = req.adapter.instance_audio_input_delete(&mut device).await;
            reply_with(result, &device)
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// PATCH, DELETE /instance/audio/output/parameters
async fn audio_output_parameters(req: &ApiRequest) -> HandlerResult {
    match req.method {
        Method::PATCH => {
            let (mut device, keys) = validate_audio_output_device(&req.json()?)?;
            let result = req.adapter.instance_audio_output_patch(&mut device, &keys).await;
            reply_with(result, &device)
        }
        Method::DELETE => {
            let (mut device, _) = validate_audio_output_device(&req.json()?)?;
            let result = req.adapter.instance_audio_output_delete(&mut device).await;
            reply_with(result, &device)
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

async fn audio_input_cleanup(req: &ApiRequest) -> HandlerResult {
    match req.method {
        Method::PATCH => reply(req.adapter.instance_audio_input_cleanup().await),
        _ => Err(AppError::MethodNotAllowed),
    }
}

async fn audio_output_cleanup(req: &ApiRequest) -> HandlerResult {
    match req.method {
        Method::PATCH => reply(req.adapter.instance_audio_output_cleanup().await),
        _ => Err(AppError::MethodNotAllowed),
    }
}

async fn instance_location(req: &ApiRequest) -> HandlerResult {
    match req.method {
        Method::GET => reply(req.adapter.instance_location_get().await),
        Method::PUT => {
            let mut location = decode_location(&req.json()?)?;
            let result = req.adapter.instance_location_put(&mut location).await;
            reply_with(result, &location)
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

// =============================================================================
// AMBE codec devices
// =============================================================================

async fn ambe_serial(req: &ApiRequest) -> HandlerResult {
    match req.method {
        Method::GET => reply(req.adapter.instance_ambe_serial_get().await),
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// GET, PUT, PATCH, DELETE /instance/ambe/devices
async fn ambe_devices(req: &ApiRequest) -> HandlerResult {
    match req.method {
        Method::GET => reply(req.adapter.instance_ambe_devices_get().await),
        Method::PUT => {
            let devices = validate_ambe_devices(&req.json()?)?;
            reply(req.adapter.instance_ambe_devices_put(&devices).await)
        }
        Method::PATCH => {
            let devices = validate_ambe_devices(&req.json()?)?;
            reply(req.adapter.instance_ambe_devices_patch(&devices).await)
        }
        Method::DELETE => reply(req.adapter.instance_ambe_devices_delete().await),
        _ => Err(AppError::MethodNotAllowed),
    }
}

// =============================================================================
// Presets
// =============================================================================

async fn instance_presets(req: &ApiRequest) -> HandlerResult {
    match req.method {
        Method::GET => reply(req.adapter.instance_presets_get().await),
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// PATCH (load), PUT (update), POST (create), DELETE /instance/preset
async fn instance_preset(req: &ApiRequest) -> HandlerResult {
    match req.method {
        Method::PATCH => {
            let transfer = validate_preset_transfer(&req.json()?)?;
            reply(req.adapter.instance_preset_patch(&transfer).await)
        }
        Method::PUT => {
            let transfer = validate_preset_transfer(&req.json()?)?;
            reply(req.adapter.instance_preset_put(&transfer).await)
        }
        Method::POST => {
            let transfer = validate_preset_transfer(&req.json()?)?;
            reply(req.adapter.instance_preset_post(&transfer).await)
        }
        Method::DELETE => {
            let preset = validate_preset_identifier(&req.json()?)?;
            reply(req.adapter.instance_preset_delete(&preset).await)
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// PUT (import), POST (export) /instance/preset/file
async fn instance_preset_file(req: &ApiRequest) -> HandlerResult {
    match req.method {
        Method::PUT => {
            let import = validate_preset_import(&req.json()?)?;
            reply(req.adapter.instance_preset_file_put(&import).await)
        }
        Method::POST => {
            let export = validate_preset_export(&req.json()?)?;
            reply(req.adapter.instance_preset_file_post(&export).await)
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

// =============================================================================
// Device sets
// =============================================================================

async fn instance_device_sets(req: &ApiRequest) -> HandlerResult {
    match req.method {
        Method::GET => reply(req.adapter.instance_device_sets_get().await),
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// POST /instance/deviceset?direction=, DELETE /instance/deviceset
async fn instance_device_set(req: &ApiRequest) -> HandlerResult {
    match req.method {
        Method::POST => reply(req.adapter.instance_device_set_post(req.direction()).await),
        Method::DELETE => reply(req.adapter.instance_device_set_delete().await),
        _ => Err(AppError::MethodNotAllowed),
    }
}

async fn device_set(req: &ApiRequest, ds: DeviceSetIndex) -> HandlerResult {
    match req.method {
        Method::GET => reply(req.adapter.device_set_get(ds).await),
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// PUT /instance/devices/{ds}/device
async fn device_set_device(req: &ApiRequest, ds: DeviceSetIndex) -> HandlerResult {
    match req.method {
        Method::PUT => {
            let mut device = validate_device_list_item(&req.json()?)?;
            let result = req.adapter.device_set_device_put(ds, &mut device).await;
            reply_with(result, &device)
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

async fn device_set_focus(req: &ApiRequest, ds: DeviceSetIndex) -> HandlerResult {
    match req.method {
        Method::PATCH => reply(req.adapter.device_set_focus_patch(ds).await),
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// GET, PUT, PATCH /instance/devices/{ds}/settings
async fn device_settings(req: &ApiRequest, ds: DeviceSetIndex) -> HandlerResult {
    match req.method {
        Method::GET => {
            // starts reset; the adapter fills the variant of its device
            let mut settings = DeviceSettings::default();
            let result = req.adapter.device_set_device_settings_get(ds, &mut settings).await;
            reply_with(result, &settings)
        }
        Method::PUT | Method::PATCH => {
            let raw = req.json()?;
            let mut settings = DeviceSettings::default();
            let keys = req.mapper.validate_device_settings(&raw, &mut settings)?;
            let result = req
                .adapter
                .device_set_device_settings_put_patch(ds, req.is_put(), &keys, &mut settings)
                .await;
            reply_with(result, &settings)
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// GET, POST (start), DELETE (stop) /instance/devices/{ds}/run
async fn device_run(req: &ApiRequest, ds: DeviceSetIndex) -> HandlerResult {
    match req.method {
        Method::GET => reply(req.adapter.device_set_device_run_get(ds).await),
        Method::POST => reply(req.adapter.device_set_device_run_post(ds).await),
        Method::DELETE => reply(req.adapter.device_set_device_run_delete(ds).await),
        _ => Err(AppError::MethodNotAllowed),
    }
}

async fn device_report(req: &ApiRequest, ds: DeviceSetIndex) -> HandlerResult {
    match req.method {
        Method::GET => {
            let mut report = DeviceReport::default();
            let result = req.adapter.device_set_device_report_get(ds, &mut report).await;
            reply_with(result, &report)
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

async fn channels_report(req: &ApiRequest, ds: DeviceSetIndex) -> HandlerResult {
    match req.method {
        Method::GET => reply(req.adapter.device_set_channels_report_get(ds).await),
        _ => Err(AppError::MethodNotAllowed),
    }
}

// =============================================================================
// Channels
// =============================================================================

/// POST /instance/devices/{ds}/channel
async fn channel_create(req: &ApiRequest, ds: DeviceSetIndex) -> HandlerResult {
    match req.method {
        Method::POST => {
            let creation = validate_channel_creation(&req.json()?)?;
            reply(req.adapter.device_set_channel_post(ds, &creation).await)
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// DELETE /instance/devices/{ds}/channel/{ch}
async fn channel(req: &ApiRequest, ds: DeviceSetIndex, ch: ChannelIndex) -> HandlerResult {
    match req.method {
        Method::DELETE => reply(req.adapter.device_set_channel_delete(ds, ch).await),
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// GET, PUT, PATCH /instance/devices/{ds}/channel/{ch}/settings
async fn channel_settings(req: &ApiRequest, ds: DeviceSetIndex, ch: ChannelIndex) -> HandlerResult {
    match req.method {
        Method::GET => {
            let mut settings = ChannelSettings::default();
            let result = req
                .adapter
                .device_set_channel_settings_get(ds, ch, &mut settings)
                .await;
            reply_with(result, &settings)
        }
        Method::PUT | Method::PATCH => {
            let raw = req.json()?;
            let mut settings = ChannelSettings::default();
            let keys = req.mapper.validate_channel_settings(&raw, &mut settings)?;
            let result = req
                .adapter
                .device_set_channel_settings_put_patch(ds, ch, req.is_put(), &keys, &mut settings)
                .await;
            reply_with(result, &settings)
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

async fn channel_report(req: &ApiRequest, ds: DeviceSetIndex, ch: ChannelIndex) -> HandlerResult {
    match req.method {
        Method::GET => {
            let mut report = ChannelReport::default();
            let result = req.adapter.device_set_channel_report_get(ds, ch, &mut report).await;
            reply_with(result, &report)
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}
