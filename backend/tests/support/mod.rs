#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use sdr_webapi::adapter::{AdapterError, AdapterReply, AdapterResult, WebApiAdapter};
use sdr_webapi::http::{create_router, AppState};
use sdr_webapi::mapping::{DeviceReport, DeviceSettings, SettingsMapper, Tagged, TouchedKeys, ChannelSettings};
use sdr_webapi::models::config::{ConfigKeys, InstanceConfig};
use sdr_webapi::models::device::RtlSdrSettings;
use sdr_webapi::models::report::FileInputReport;
use sdr_webapi::models::{
    AudioOutputDevice, ChannelCreation, ChannelIndex, DeviceListItem, DeviceSetIndex,
    InstanceDevicesResponse, InstanceSummaryResponse, SuccessResponse,
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the variables on unwind and serializes access to the process
/// environment across parallel tests.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

// =============================================================================
// Recording adapter
// =============================================================================

/// One adapter invocation, with its arguments in wire form.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Summary,
    Devices(i32),
    Channels(i32),
    DeviceSetPost(i32),
    ConfigPutPatch { force: bool, keys: ConfigKeys },
    DevicePut { ds: usize, device: Value },
    DeviceSettingsGet { ds: usize, was_reset: bool },
    DeviceSettingsPutPatch { ds: usize, force: bool, keys: Vec<String>, settings: Value },
    DeviceReport { ds: usize, was_reset: bool },
    ChannelPost { ds: usize, channel_type: String, direction: i64 },
    ChannelSettingsPutPatch { ds: usize, ch: usize, force: bool, keys: Vec<String>, settings: Value },
    AudioOutputPatch { keys: Vec<String>, device: Value },
}

/// Adapter that records every call and answers with a fixed status, or
/// with a fixed error.
pub struct RecordingAdapter {
    calls: Mutex<Vec<Call>>,
    status: u16,
    failure: Option<AdapterError>,
}

impl RecordingAdapter {
    pub fn new() -> Self {
        Self::with_status(200)
    }

    /// Replies with `status` (which may be outside the 2xx range).
    pub fn with_status(status: u16) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            status,
            failure: None,
        }
    }

    pub fn failing(error: AdapterError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            status: 200,
            failure: Some(error),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record<T>(&self, call: Call, body: T) -> AdapterResult<T> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(AdapterReply::with_status(self.status, body)),
        }
    }
}

fn keys_of(keys: &TouchedKeys) -> Vec<String> {
    keys.iter().cloned().collect()
}

#[async_trait]
impl WebApiAdapter for RecordingAdapter {
    async fn instance_summary(&self) -> AdapterResult<InstanceSummaryResponse> {
        let summary = InstanceSummaryResponse {
            appname: "recorder".to_string(),
            version: "1.0".to_string(),
            ..Default::default()
        };
        self.record(Call::Summary, summary)
    }

    async fn instance_config_put_patch(
        &self,
        force: bool,
        _config: &InstanceConfig,
        keys: &ConfigKeys,
    ) -> AdapterResult<SuccessResponse> {
        self.record(
            Call::ConfigPutPatch {
                force,
                keys: keys.clone(),
            },
            SuccessResponse::new("ok"),
        )
    }

    async fn instance_devices(&self, direction: i32) -> AdapterResult<InstanceDevicesResponse> {
        self.record(Call::Devices(direction), InstanceDevicesResponse::default())
    }

    async fn instance_channels(
        &self,
        direction: i32,
    ) -> AdapterResult<sdr_webapi::models::InstanceChannelsResponse> {
        self.record(Call::Channels(direction), Default::default())
    }

    async fn instance_device_set_post(&self, direction: i32) -> AdapterResult<SuccessResponse> {
        self.record(Call::DeviceSetPost(direction), SuccessResponse::new("added"))
    }

    async fn instance_audio_output_patch(
        &self,
        device: &mut AudioOutputDevice,
        keys: &TouchedKeys,
    ) -> AdapterResult<()> {
        let call = Call::AudioOutputPatch {
            keys: keys_of(keys),
            device: serde_json::to_value(&*device).unwrap(),
        };
        self.record(call, ())
    }

    async fn device_set_device_put(&self, ds: DeviceSetIndex, device: &mut DeviceListItem) -> AdapterResult<()> {
        let call = Call::DevicePut {
            ds: ds.value(),
            device: serde_json::to_value(&*device).unwrap(),
        };
        self.record(call, ())
    }

    async fn device_set_device_settings_get(
        &self,
        ds: DeviceSetIndex,
        settings: &mut DeviceSettings,
    ) -> AdapterResult<()> {
        let call = Call::DeviceSettingsGet {
            ds: ds.value(),
            was_reset: settings.is_reset(),
        };
        settings.set_variant(RtlSdrSettings {
            center_frequency: Some(435_000_000),
            gain: Some(290),
            ..Default::default()
        });
        self.record(call, ())
    }

    async fn device_set_device_settings_put_patch(
        &self,
        ds: DeviceSetIndex,
        force: bool,
        keys: &TouchedKeys,
        settings: &mut DeviceSettings,
    ) -> AdapterResult<()> {
        let call = Call::DeviceSettingsPutPatch {
            ds: ds.value(),
            force,
            keys: keys_of(keys),
            settings: serde_json::to_value(&*settings).unwrap(),
        };
        self.record(call, ())
    }

    async fn device_set_device_report_get(&self, ds: DeviceSetIndex, report: &mut DeviceReport) -> AdapterResult<()> {
        let call = Call::DeviceReport {
            ds: ds.value(),
            was_reset: report.is_reset(),
        };
        *report = Tagged::from_variant(FileInputReport {
            file_name: Some("capture.sdriq".to_string()),
            sample_rate: Some(48000),
            ..Default::default()
        });
        self.record(call, ())
    }

    async fn device_set_channel_post(
        &self,
        ds: DeviceSetIndex,
        creation: &ChannelCreation,
    ) -> AdapterResult<SuccessResponse> {
        let call = Call::ChannelPost {
            ds: ds.value(),
            channel_type: creation.channel_type.clone(),
            direction: creation.direction.code(),
        };
        self.record(call, SuccessResponse::new("created"))
    }

    async fn device_set_channel_settings_put_patch(
        &self,
        ds: DeviceSetIndex,
        ch: ChannelIndex,
        force: bool,
        keys: &TouchedKeys,
        settings: &mut ChannelSettings,
    ) -> AdapterResult<()> {
        let call = Call::ChannelSettingsPutPatch {
            ds: ds.value(),
            ch: ch.value(),
            force,
            keys: keys_of(keys),
            settings: serde_json::to_value(&*settings).unwrap(),
        };
        self.record(call, ())
    }
}

// =============================================================================
// Router helpers
// =============================================================================

pub fn router_with(adapter: Arc<dyn WebApiAdapter>) -> Router {
    let mapper = SettingsMapper::with_defaults().unwrap();
    create_router(AppState::new(adapter, mapper))
}

pub fn router_without_adapter() -> Router {
    let mapper = SettingsMapper::with_defaults().unwrap();
    create_router(AppState::unavailable(mapper))
}

/// Response of [`send`].
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub bytes: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).unwrap()
    }

    pub fn message(&self) -> String {
        self.json()["message"].as_str().unwrap_or_default().to_string()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Sends one request through the router.
pub async fn send(app: Router, method: &str, uri: &str, body: Option<&str>) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse { status, headers, bytes }
}

pub async fn send_json(app: Router, method: &str, uri: &str, body: Value) -> TestResponse {
    send(app, method, uri, Some(&body.to_string())).await
}
