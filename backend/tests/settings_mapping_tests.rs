//! Discriminated settings mapping across the full variant tables.

use serde_json::{json, Map, Value};

use sdr_webapi::mapping::{
    ChannelSettings, DeviceReport, DeviceSettings, DeviceSettingsVariant, MapError, SettingsMapper,
    Tagged, TouchedKeys, Variant,
};
use sdr_webapi::models::device::{RtlSdrSettings, TestMiSettings};
use sdr_webapi::models::Direction;

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

fn mapper() -> SettingsMapper {
    SettingsMapper::with_defaults().unwrap()
}

#[test]
fn test_every_device_variant_validates() {
    let mapper = mapper();

    for entry in mapper.device_table().entries() {
        let raw = object(json!({
            "deviceHwType": entry.discriminator,
            "direction": entry.direction.code(),
            entry.key: {}
        }));
        let mut out = DeviceSettings::default();
        let keys = mapper
            .validate_device_settings(&raw, &mut out)
            .unwrap_or_else(|e| panic!("{} / {}: {}", entry.discriminator, entry.direction, e));

        assert!(keys.is_empty(), "{}", entry.key);
        assert_eq!(out.discriminator(), Some(entry.discriminator));
        assert_eq!(out.direction(), Some(entry.direction));

        // only the selected payload is populated
        let wire = serde_json::to_value(&out).unwrap();
        let fields = wire.as_object().unwrap();
        assert_eq!(fields.len(), 3);
        assert!(fields.contains_key(entry.key));
    }
}

#[test]
fn test_every_channel_variant_validates() {
    let mapper = mapper();

    for entry in mapper.channel_table().entries() {
        let raw = object(json!({
            "channelType": entry.discriminator,
            "direction": entry.direction.code(),
            entry.key: { "title": "probe" }
        }));
        let mut out = ChannelSettings::default();
        let keys = mapper
            .validate_channel_settings(&raw, &mut out)
            .unwrap_or_else(|e| panic!("{} / {}: {}", entry.discriminator, entry.direction, e));

        assert_eq!(keys.as_slice(), &["title"], "{}", entry.key);
        assert_eq!(out.variant().map(Variant::key), Some(entry.key));
    }
}

#[test]
fn test_unregistered_pairs_fail_and_reset() {
    let mapper = mapper();

    for entry in mapper.device_table().entries() {
        for direction in Direction::ALL {
            if mapper.device_table().lookup(entry.discriminator, direction).is_some() {
                continue;
            }
            let raw = object(json!({
                "deviceHwType": entry.discriminator,
                "direction": direction.code(),
                entry.key: {}
            }));
            let mut out = DeviceSettings::from_variant(RtlSdrSettings {
                gain: Some(1),
                ..Default::default()
            });

            let result = mapper.validate_device_settings(&raw, &mut out);

            assert!(
                matches!(result, Err(MapError::UnknownVariant { .. })),
                "{} / {} should not resolve",
                entry.discriminator,
                direction
            );
            assert!(out.is_reset());
        }
    }
}

#[test]
fn test_unknown_discriminator_and_out_of_range_direction() {
    let mapper = mapper();
    let mut out = ChannelSettings::default();

    let raw = object(json!({ "channelType": "Bogus", "BogusSettings": {} }));
    assert!(matches!(
        mapper.validate_channel_settings(&raw, &mut out),
        Err(MapError::UnknownVariant { .. })
    ));

    let raw = object(json!({ "channelType": "NFMDemod", "direction": 7, "NFMDemodSettings": {} }));
    assert!(matches!(
        mapper.validate_channel_settings(&raw, &mut out),
        Err(MapError::UnknownVariant { direction: 7, .. })
    ));
}

#[test]
fn test_missing_discriminator_or_payload() {
    let mapper = mapper();
    let mut out = DeviceSettings::default();

    let raw = object(json!({ "rtlSdrSettings": {} }));
    assert!(matches!(
        mapper.validate_device_settings(&raw, &mut out),
        Err(MapError::MissingField(_))
    ));

    let raw = object(json!({ "deviceHwType": "RTLSDR" }));
    assert!(matches!(
        mapper.validate_device_settings(&raw, &mut out),
        Err(MapError::MissingPayload { .. })
    ));

    let raw = object(json!({ "deviceHwType": "RTLSDR", "rtlSdrSettings": [1, 2] }));
    assert!(matches!(
        mapper.validate_device_settings(&raw, &mut out),
        Err(MapError::MissingPayload { .. })
    ));
}

#[test]
fn test_non_integer_direction_fails() {
    let mapper = mapper();
    let mut out = DeviceSettings::default();

    for direction in [json!("1"), json!(1.5), json!(null)] {
        let raw = object(json!({
            "deviceHwType": "HackRF",
            "direction": direction,
            "hackRFOutputSettings": {}
        }));
        assert!(mapper.validate_device_settings(&raw, &mut out).is_err(), "{}", direction);
        assert!(out.is_reset());
    }
}

#[test]
fn test_wrong_field_type_fails() {
    let mapper = mapper();
    let mut out = DeviceSettings::default();

    let raw = object(json!({ "deviceHwType": "RTLSDR", "rtlSdrSettings": { "gain": "loud" } }));

    match mapper.validate_device_settings(&raw, &mut out) {
        Err(MapError::Payload(err)) => assert_eq!(err.path, "gain"),
        other => panic!("unexpected {:?}", other),
    }
    assert!(out.is_reset());
}

#[test]
fn test_mimo_streams_are_indexed() {
    let mapper = mapper();
    let raw = object(json!({
        "deviceHwType": "TestMI",
        "direction": 2,
        "TestMISettings": {
            "streams": [{ "sampleRate": 48000 }, { "sampleRate": 96000, "fcPos": 1 }]
        }
    }));
    let mut out = DeviceSettings::default();

    let keys = mapper.validate_device_settings(&raw, &mut out).unwrap();

    assert_eq!(
        keys.as_slice(),
        &["streams[0].sampleRate", "streams[1].fcPos", "streams[1].sampleRate"]
    );
    match out.variant() {
        Some(DeviceSettingsVariant::TestMi(TestMiSettings { streams: Some(streams), .. })) => {
            assert_eq!(streams[1].sample_rate, Some(96000));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_reset_serializes_to_empty_object() {
    let mut settings = DeviceSettings::from_variant(RtlSdrSettings::default());
    settings.reset();
    settings.reset();

    assert_eq!(serde_json::to_value(&settings).unwrap(), json!({}));
    assert_eq!(serde_json::to_value(DeviceReport::default()).unwrap(), json!({}));
}

#[test]
fn test_patch_merge_keeps_untouched_fields() {
    let mapper = mapper();
    let mut current = DeviceSettings::from_variant(RtlSdrSettings {
        center_frequency: Some(100_000_000),
        gain: Some(20),
        log2_decim: Some(2),
        ..Default::default()
    });

    let raw = object(json!({
        "deviceHwType": "RTLSDR",
        "rtlSdrSettings": { "gain": 40, "agc": 1 }
    }));
    let mut update = DeviceSettings::default();
    let keys = mapper.validate_device_settings(&raw, &mut update).unwrap();
    current.merge(&update, &keys).unwrap();

    match current.variant() {
        Some(DeviceSettingsVariant::RtlSdr(settings)) => {
            assert_eq!(settings.center_frequency, Some(100_000_000));
            assert_eq!(settings.gain, Some(40));
            assert_eq!(settings.agc, Some(1));
            assert_eq!(settings.log2_decim, Some(2));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_patch_with_empty_stream_keeps_that_stream() {
    let mapper = mapper();
    let put = object(json!({
        "deviceHwType": "TestMI",
        "direction": 2,
        "TestMISettings": { "streams": [{ "sampleRate": 48000 }, { "sampleRate": 96000 }] }
    }));
    let mut current = DeviceSettings::default();
    mapper.validate_device_settings(&put, &mut current).unwrap();

    let patch = object(json!({
        "deviceHwType": "TestMI",
        "direction": 2,
        "TestMISettings": { "streams": [{}, { "sampleRate": 12000 }] }
    }));
    let mut update = DeviceSettings::default();
    let keys = mapper.validate_device_settings(&patch, &mut update).unwrap();
    assert_eq!(keys.as_slice(), &["streams[1].sampleRate"]);

    current.merge(&update, &keys).unwrap();

    match current.variant() {
        Some(DeviceSettingsVariant::TestMi(TestMiSettings { streams: Some(streams), .. })) => {
            assert_eq!(streams[0].sample_rate, Some(48000));
            assert_eq!(streams[1].sample_rate, Some(12000));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_empty_nested_object_touches_nothing() {
    let mapper = mapper();
    let raw = object(json!({
        "channelType": "SSBMod",
        "direction": 1,
        "SSBModSettings": { "cwKeyer": {}, "volumeFactor": 1.5 }
    }));
    let mut out = ChannelSettings::default();

    let keys = mapper.validate_channel_settings(&raw, &mut out).unwrap();

    assert_eq!(keys.as_slice(), &["volumeFactor"]);
}

#[test]
fn test_merge_with_other_variant_replaces() {
    let mut current = DeviceSettings::from_variant(RtlSdrSettings {
        gain: Some(20),
        ..Default::default()
    });
    let update: DeviceSettings = Tagged::from_variant(TestMiSettings::default());

    current.merge(&update, &TouchedKeys::new()).unwrap();

    assert_eq!(current.discriminator(), Some("TestMI"));
}

#[test]
fn test_envelope_round_trips_through_wire() {
    let mapper = mapper();
    let raw = object(json!({
        "channelType": "NFMDemod",
        "direction": 0,
        "NFMDemodSettings": { "volume": 2.0, "inputFrequencyOffset": -5000 }
    }));
    let mut first = ChannelSettings::default();
    mapper.validate_channel_settings(&raw, &mut first).unwrap();

    let wire = object(serde_json::to_value(&first).unwrap());
    let mut second = ChannelSettings::default();
    let keys = mapper.validate_channel_settings(&wire, &mut second).unwrap();

    assert_eq!(first, second);
    assert_eq!(keys.as_slice(), &["inputFrequencyOffset", "volume"]);
}
