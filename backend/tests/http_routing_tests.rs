//! Request dispatch tests: routing, pre-flight, index conversion, body
//! decoding and adapter reply mapping, driven through the axum router with a
//! recording adapter.

mod support;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use sdr_webapi::adapter::{AdapterError, WebApiAdapter};
use support::{router_with, router_without_adapter, send, send_json, Call, RecordingAdapter};

fn recording() -> (Arc<RecordingAdapter>, axum::Router) {
    let adapter = Arc::new(RecordingAdapter::new());
    let router = router_with(adapter.clone() as Arc<dyn WebApiAdapter>);
    (adapter, router)
}

// =============================================================================
// Routing
// =============================================================================

#[tokio::test]
async fn test_summary_routes_to_adapter() {
    let (adapter, app) = recording();

    let response = send(app, "GET", "/instance/summary", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["appname"], "recorder");
    assert_eq!(adapter.calls(), vec![Call::Summary]);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (adapter, app) = recording();

    let response = send(app, "GET", "/instance/nothing", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Not found");
    assert!(adapter.calls().is_empty());
}

#[tokio::test]
async fn test_unsupported_method_is_rejected() {
    let (adapter, app) = recording();

    let response = send(app, "POST", "/instance/summary", None).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.message(), "Invalid HTTP method");
    assert!(adapter.calls().is_empty());
}

#[tokio::test]
async fn test_bad_device_set_index() {
    let (_, app) = recording();
    let response = send(app, "GET", "/instance/devices/abc/settings", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Wrong integer conversion on device set index");

    // index conversion happens before the method check
    let (_, app) = recording();
    let response = send(app, "POST", "/instance/devices/abc/settings", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Wrong integer conversion on device set index");
}

#[tokio::test]
async fn test_bad_channel_index() {
    let (_, app) = recording();
    let response = send(app, "GET", "/instance/devices/0/channel/x1/settings", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Wrong integer conversion on channel index");
}

#[tokio::test]
async fn test_negative_index_is_rejected() {
    let (_, app) = recording();
    let response = send(app, "GET", "/instance/devices/-1/settings", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Pre-flight and adapter availability
// =============================================================================

#[tokio::test]
async fn test_options_preflight() {
    let (adapter, app) = recording();

    let response = send(app, "OPTIONS", "/instance/devices/0/settings", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.bytes.is_empty());
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    assert_eq!(response.header("access-control-allow-headers"), Some("*"));
    assert_eq!(response.header("access-control-allow-methods"), Some("*"));
    assert_eq!(response.header("content-type"), Some("application/json"));
    assert!(adapter.calls().is_empty());
}

#[tokio::test]
async fn test_options_on_unknown_path_is_ok() {
    let (_, app) = recording();
    let response = send(app, "OPTIONS", "/no/such/path", None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_adapter() {
    let response = send(router_without_adapter(), "GET", "/instance/summary", None).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.message(), "Service not available");

    let response = send(router_without_adapter(), "OPTIONS", "/instance/summary", None).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.message(), "Service not available");
}

// =============================================================================
// Body decoding
// =============================================================================

#[tokio::test]
async fn test_syntax_error_reports_offset() {
    let (adapter, app) = recording();

    let response = send(app, "PATCH", "/instance/devices/0/settings", Some("{\"deviceHwType\":}")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.message();
    assert!(message.starts_with("Input JSON error: "), "{}", message);
    assert!(message.ends_with("at offset 16"), "{}", message);
    assert!(adapter.calls().is_empty());
}

#[tokio::test]
async fn test_non_object_body_is_decode_error() {
    let (_, app) = recording();

    let response = send(app, "PUT", "/instance/devices/0/settings", Some("[1, 2]")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.message().starts_with("Input JSON error: "));
}

#[tokio::test]
async fn test_invalid_shape_is_invalid_request() {
    let (adapter, app) = recording();

    let body = json!({ "deviceHwType": "RTLSDR", "direction": 1, "rtlSdrSettings": {} });
    let response = send_json(app, "PUT", "/instance/devices/0/settings", body).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Invalid JSON request");
    assert!(adapter.calls().is_empty());
}

#[tokio::test]
async fn test_missing_device_identification() {
    let (adapter, app) = recording();

    let response = send_json(app, "PUT", "/instance/devices/0/device", json!({ "sequence": 1 })).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Missing device identification");
    assert!(adapter.calls().is_empty());
}

#[tokio::test]
async fn test_device_put_forwards_identification() {
    let (adapter, app) = recording();

    let response = send_json(app, "PUT", "/instance/devices/2/device", json!({ "hwType": "RTLSDR" })).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["hwType"], "RTLSDR");
    match &adapter.calls()[0] {
        Call::DevicePut { ds, device } => {
            assert_eq!(*ds, 2);
            assert_eq!(device["hwType"], "RTLSDR");
        }
        other => panic!("unexpected call {:?}", other),
    }
}

// =============================================================================
// Settings forwarding
// =============================================================================

#[tokio::test]
async fn test_settings_put_is_forced_and_echoes_envelope() {
    let (adapter, app) = recording();

    let body = json!({
        "deviceHwType": "RTLSDR",
        "rtlSdrSettings": { "gain": 30, "centerFrequency": 100000000 }
    });
    let response = send_json(app, "PUT", "/instance/devices/1/settings", body).await;

    assert_eq!(response.status, StatusCode::OK);
    let echoed = response.json();
    assert_eq!(echoed["deviceHwType"], "RTLSDR");
    assert_eq!(echoed["direction"], 0);
    assert_eq!(echoed["rtlSdrSettings"]["gain"], 30);
    assert_eq!(echoed["rtlSdrSettings"]["centerFrequency"], 100000000);

    match &adapter.calls()[0] {
        Call::DeviceSettingsPutPatch { ds, force, keys, settings } => {
            assert_eq!(*ds, 1);
            assert!(*force);
            assert_eq!(keys, &vec!["centerFrequency".to_string(), "gain".to_string()]);
            assert_eq!(settings["rtlSdrSettings"]["gain"], 30);
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[tokio::test]
async fn test_settings_patch_is_not_forced() {
    let (adapter, app) = recording();

    let body = json!({ "deviceHwType": "RTLSDR", "rtlSdrSettings": { "agc": 1 } });
    let response = send_json(app, "PATCH", "/instance/devices/0/settings", body).await;

    assert_eq!(response.status, StatusCode::OK);
    match &adapter.calls()[0] {
        Call::DeviceSettingsPutPatch { force, keys, .. } => {
            assert!(!*force);
            assert_eq!(keys, &vec!["agc".to_string()]);
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[tokio::test]
async fn test_channel_settings_nested_keys() {
    let (adapter, app) = recording();

    let body = json!({
        "channelType": "SSBMod",
        "direction": 1,
        "SSBModSettings": { "cwKeyer": { "wpm": 12 }, "volumeFactor": 0.5 }
    });
    let response = send_json(app, "PATCH", "/instance/devices/0/channel/3/settings", body).await;

    assert_eq!(response.status, StatusCode::OK);
    match &adapter.calls()[0] {
        Call::ChannelSettingsPutPatch { ds, ch, force, keys, .. } => {
            assert_eq!((*ds, *ch, *force), (0, 3, false));
            assert_eq!(keys, &vec!["cwKeyer.wpm".to_string(), "volumeFactor".to_string()]);
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[tokio::test]
async fn test_settings_get_starts_reset() {
    let (adapter, app) = recording();

    let response = send(app, "GET", "/instance/devices/0/settings", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["deviceHwType"], "RTLSDR");
    assert_eq!(response.json()["rtlSdrSettings"]["gain"], 290);
    assert_eq!(adapter.calls(), vec![Call::DeviceSettingsGet { ds: 0, was_reset: true }]);
}

#[tokio::test]
async fn test_report_container_reset_before_adapter() {
    let (adapter, app) = recording();

    let response = send(app, "GET", "/instance/devices/4/report", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["deviceHwType"], "FileInput");
    assert_eq!(body["fileInputReport"]["fileName"], "capture.sdriq");
    assert_eq!(adapter.calls(), vec![Call::DeviceReport { ds: 4, was_reset: true }]);
}

// =============================================================================
// Direction query
// =============================================================================

#[tokio::test]
async fn test_direction_query() {
    let (adapter, app) = recording();
    send(app, "GET", "/instance/devices?direction=1", None).await;
    assert_eq!(adapter.calls(), vec![Call::Devices(1)]);

    let (adapter, app) = recording();
    send(app, "GET", "/instance/channels?direction=abc", None).await;
    assert_eq!(adapter.calls(), vec![Call::Channels(0)]);

    let (adapter, app) = recording();
    send(app, "GET", "/instance/channels", None).await;
    assert_eq!(adapter.calls(), vec![Call::Channels(0)]);

    let (adapter, app) = recording();
    send(app, "POST", "/instance/deviceset?direction=2", None).await;
    assert_eq!(adapter.calls(), vec![Call::DeviceSetPost(2)]);
}

// =============================================================================
// Other bodies
// =============================================================================

#[tokio::test]
async fn test_audio_output_flags_normalised() {
    let (adapter, app) = recording();

    let body = json!({ "index": 2, "copyToUDP": 5, "udpUsesRTP": 0, "udpPort": 9000 });
    let response = send_json(app, "PATCH", "/instance/audio/output/parameters", body).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["copyToUDP"], 1);
    match &adapter.calls()[0] {
        Call::AudioOutputPatch { keys, device } => {
            assert_eq!(
                keys,
                &vec!["copyToUDP".to_string(), "udpUsesRTP".to_string(), "udpPort".to_string()]
            );
            assert_eq!(device["index"], 2);
            assert_eq!(device["udpUsesRTP"], 0);
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[tokio::test]
async fn test_audio_method_checked_before_body() {
    let (_, app) = recording();
    let response = send(app, "GET", "/instance/audio/output/parameters", Some("not json")).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_channel_creation_forwarded() {
    let (adapter, app) = recording();

    let body = json!({ "channelType": "NFMMod", "direction": 1 });
    let response = send_json(app, "POST", "/instance/devices/1/channel", body).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        adapter.calls(),
        vec![Call::ChannelPost {
            ds: 1,
            channel_type: "NFMMod".to_string(),
            direction: 1
        }]
    );
}

#[tokio::test]
async fn test_config_patch_keys() {
    let (adapter, app) = recording();

    let body = json!({ "preferences": { "useLogFile": 0 } });
    let response = send_json(app, "PATCH", "/instance/config", body).await;

    assert_eq!(response.status, StatusCode::OK);
    match &adapter.calls()[0] {
        Call::ConfigPutPatch { force, keys } => {
            assert!(!*force);
            assert_eq!(keys.preferences_keys.as_slice(), &["useLogFile"]);
        }
        other => panic!("unexpected call {:?}", other),
    }
}

// =============================================================================
// Adapter replies
// =============================================================================

#[tokio::test]
async fn test_adapter_error_passed_through() {
    let adapter = Arc::new(RecordingAdapter::failing(AdapterError::not_found("No device set at index 7")));
    let app = router_with(adapter.clone() as Arc<dyn WebApiAdapter>);

    let response = send(app, "GET", "/instance/devices/7/settings", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "No device set at index 7");
}

#[tokio::test]
async fn test_non_success_status_without_error_body() {
    let adapter = Arc::new(RecordingAdapter::with_status(404));
    let app = router_with(adapter as Arc<dyn WebApiAdapter>);

    let response = send(app, "GET", "/instance/summary", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.message().contains("404"));
}

#[tokio::test]
async fn test_accepted_status_preserved() {
    let adapter = Arc::new(RecordingAdapter::with_status(202));
    let app = router_with(adapter as Arc<dyn WebApiAdapter>);

    let response = send(app, "POST", "/instance/deviceset", None).await;

    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert_eq!(response.message(), "added");
}

#[tokio::test]
async fn test_unimplemented_operation() {
    let (_, app) = recording();

    let response = send(app, "GET", "/instance/ambe/serial", None).await;

    assert_eq!(response.status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(response.message(), "Function not implemented");
}

#[tokio::test]
async fn test_every_response_is_cross_origin_json() {
    for (method, uri) in [
        ("GET", "/instance/summary"),
        ("GET", "/instance/unknown"),
        ("PUT", "/instance/summary"),
        ("GET", "/instance/devices/z/run"),
    ] {
        let (_, app) = recording();
        let response = send(app, method, uri, None).await;
        assert_eq!(response.header("access-control-allow-origin"), Some("*"), "{} {}", method, uri);
        assert_eq!(response.header("content-type"), Some("application/json"), "{} {}", method, uri);
    }
}
