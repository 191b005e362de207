//! The closed variant sets for device and channel settings and reports.
//!
//! Direction-agnostic input devices are registered for receive only.

use crate::models::channel::*;
use crate::models::device::*;
use crate::models::report::*;

use super::envelope::Tagged;

crate::variant_union! {
    /// Device settings payload, selected by `deviceHwType` and `direction`.
    pub enum DeviceSettingsVariant: "deviceHwType" {
        Airspy(AirspySettings) = ("Airspy", Rx, "airspySettings"),
        AirspyHf(AirspyHfSettings) = ("AirspyHF", Rx, "airspyHFSettings"),
        BladeRf1Input(BladeRf1InputSettings) = ("BladeRF1", Rx, "bladeRF1InputSettings"),
        BladeRf1Output(BladeRf1OutputSettings) = ("BladeRF1", Tx, "bladeRF1OutputSettings"),
        BladeRf2Input(BladeRf2InputSettings) = ("BladeRF2", Rx, "bladeRF2InputSettings"),
        BladeRf2Output(BladeRf2OutputSettings) = ("BladeRF2", Tx, "bladeRF2OutputSettings"),
        FcdPro(FcdProSettings) = ("FCDPro", Rx, "fcdProSettings"),
        FcdProPlus(FcdProPlusSettings) = ("FCDPro+", Rx, "fcdProPlusSettings"),
        FileInput(FileInputSettings) = ("FileInput", Rx, "fileInputSettings"),
        HackRfInput(HackRfInputSettings) = ("HackRF", Rx, "hackRFInputSettings"),
        HackRfOutput(HackRfOutputSettings) = ("HackRF", Tx, "hackRFOutputSettings"),
        KiwiSdr(KiwiSdrSettings) = ("KiwiSDR", Rx, "kiwiSDRSettings"),
        LimeSdrInput(LimeSdrInputSettings) = ("LimeSDR", Rx, "limeSdrInputSettings"),
        LimeSdrOutput(LimeSdrOutputSettings) = ("LimeSDR", Tx, "limeSdrOutputSettings"),
        Perseus(PerseusSettings) = ("Perseus", Rx, "perseusSettings"),
        PlutoSdrInput(PlutoSdrInputSettings) = ("PlutoSDR", Rx, "plutoSdrInputSettings"),
        PlutoSdrOutput(PlutoSdrOutputSettings) = ("PlutoSDR", Tx, "plutoSdrOutputSettings"),
        RtlSdr(RtlSdrSettings) = ("RTLSDR", Rx, "rtlSdrSettings"),
        SdrPlay(SdrPlaySettings) = ("SDRplay1", Rx, "sdrPlaySettings"),
        SoapySdrInput(SoapySdrInputSettings) = ("SoapySDR", Rx, "soapySDRInputSettings"),
        SoapySdrOutput(SoapySdrOutputSettings) = ("SoapySDR", Tx, "soapySDROutputSettings"),
        TestSource(TestSourceSettings) = ("TestSource", Rx, "testSourceSettings"),
        TestMi(TestMiSettings) = ("TestMI", Mimo, "TestMISettings"),
        XtrxInput(XtrxInputSettings) = ("XTRX", Rx, "xtrxInputSettings"),
        XtrxOutput(XtrxOutputSettings) = ("XTRX", Tx, "xtrxOutputSettings"),
        RemoteInput(RemoteInputSettings) = ("RemoteInput", Rx, "remoteInputSettings"),
        LocalInput(LocalInputSettings) = ("LocalInput", Rx, "localInputSettings"),
        RemoteOutput(RemoteOutputSettings) = ("RemoteOutput", Tx, "remoteOutputSettings"),
        LocalOutput(LocalOutputSettings) = ("LocalOutput", Tx, "localOutputSettings"),
    }
}

crate::variant_union! {
    /// Channel settings payload, selected by `channelType` and `direction`.
    pub enum ChannelSettingsVariant: "channelType" {
        AmDemod(AmDemodSettings) = ("AMDemod", Rx, "AMDemodSettings"),
        AmMod(AmModSettings) = ("AMMod", Tx, "AMModSettings"),
        AtvMod(AtvModSettings) = ("ATVMod", Tx, "ATVModSettings"),
        BfmDemod(BfmDemodSettings) = ("BFMDemod", Rx, "BFMDemodSettings"),
        DsdDemod(DsdDemodSettings) = ("DSDDemod", Rx, "DSDDemodSettings"),
        FreeDvDemod(FreeDvDemodSettings) = ("FreeDVDemod", Rx, "FreeDVDemodSettings"),
        FreeDvMod(FreeDvModSettings) = ("FreeDVMod", Tx, "FreeDVModSettings"),
        FreqTracker(FreqTrackerSettings) = ("FreqTracker", Rx, "FreqTrackerSettings"),
        NfmDemod(NfmDemodSettings) = ("NFMDemod", Rx, "NFMDemodSettings"),
        NfmMod(NfmModSettings) = ("NFMMod", Tx, "NFMModSettings"),
        LocalSink(LocalSinkSettings) = ("LocalSink", Rx, "LocalSinkSettings"),
        LocalSource(LocalSourceSettings) = ("LocalSource", Tx, "LocalSourceSettings"),
        RemoteSink(RemoteSinkSettings) = ("RemoteSink", Rx, "RemoteSinkSettings"),
        RemoteSource(RemoteSourceSettings) = ("RemoteSource", Tx, "RemoteSourceSettings"),
        SsbDemod(SsbDemodSettings) = ("SSBDemod", Rx, "SSBDemodSettings"),
        SsbMod(SsbModSettings) = ("SSBMod", Tx, "SSBModSettings"),
        UdpSource(UdpSourceSettings) = ("UDPSource", Tx, "UDPSourceSettings"),
        UdpSink(UdpSinkSettings) = ("UDPSink", Rx, "UDPSinkSettings"),
        WfmDemod(WfmDemodSettings) = ("WFMDemod", Rx, "WFMDemodSettings"),
        WfmMod(WfmModSettings) = ("WFMMod", Tx, "WFMModSettings"),
    }
}

crate::variant_union! {
    /// Device runtime report.
    pub enum DeviceReportVariant: "deviceHwType" {
        Airspy(AirspyReport) = ("Airspy", Rx, "airspyReport"),
        AirspyHf(AirspyHfReport) = ("AirspyHF", Rx, "airspyHFReport"),
        FileInput(FileInputReport) = ("FileInput", Rx, "fileInputReport"),
        LimeSdrInput(LimeSdrInputReport) = ("LimeSDR", Rx, "limeSdrInputReport"),
        LimeSdrOutput(LimeSdrOutputReport) = ("LimeSDR", Tx, "limeSdrOutputReport"),
        Perseus(PerseusReport) = ("Perseus", Rx, "perseusReport"),
        PlutoSdrInput(PlutoSdrInputReport) = ("PlutoSDR", Rx, "plutoSdrInputReport"),
        PlutoSdrOutput(PlutoSdrOutputReport) = ("PlutoSDR", Tx, "plutoSdrOutputReport"),
        RtlSdr(RtlSdrReport) = ("RTLSDR", Rx, "rtlSdrReport"),
        RemoteOutput(RemoteOutputReport) = ("RemoteOutput", Tx, "remoteOutputReport"),
        RemoteInput(RemoteInputReport) = ("RemoteInput", Rx, "remoteInputReport"),
        SdrPlay(SdrPlayReport) = ("SDRplay1", Rx, "sdrPlayReport"),
    }
}

crate::variant_union! {
    /// Channel runtime report.
    pub enum ChannelReportVariant: "channelType" {
        AmDemod(AmDemodReport) = ("AMDemod", Rx, "AMDemodReport"),
        AmMod(AmModReport) = ("AMMod", Tx, "AMModReport"),
        AtvMod(AtvModReport) = ("ATVMod", Tx, "ATVModReport"),
        BfmDemod(BfmDemodReport) = ("BFMDemod", Rx, "BFMDemodReport"),
        DsdDemod(DsdDemodReport) = ("DSDDemod", Rx, "DSDDemodReport"),
        NfmDemod(NfmDemodReport) = ("NFMDemod", Rx, "NFMDemodReport"),
        NfmMod(NfmModReport) = ("NFMMod", Tx, "NFMModReport"),
        RemoteSource(RemoteSourceReport) = ("RemoteSource", Tx, "RemoteSourceReport"),
        SsbDemod(SsbDemodReport) = ("SSBDemod", Rx, "SSBDemodReport"),
        SsbMod(SsbModReport) = ("SSBMod", Tx, "SSBModReport"),
        UdpSource(UdpSourceReport) = ("UDPSource", Tx, "UDPSourceReport"),
        UdpSink(UdpSinkReport) = ("UDPSink", Rx, "UDPSinkReport"),
        WfmDemod(WfmDemodReport) = ("WFMDemod", Rx, "WFMDemodReport"),
        WfmMod(WfmModReport) = ("WFMMod", Tx, "WFMModReport"),
    }
}

pub type DeviceSettings = Tagged<DeviceSettingsVariant>;
pub type ChannelSettings = Tagged<ChannelSettingsVariant>;
pub type DeviceReport = Tagged<DeviceReportVariant>;
pub type ChannelReport = Tagged<ChannelReportVariant>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{Variant, VariantTable};
    use serde_json::json;

    #[test]
    fn test_tables_build_without_duplicates() {
        assert_eq!(VariantTable::build(DeviceSettingsVariant::entries()).unwrap().len(), 29);
        assert_eq!(VariantTable::build(ChannelSettingsVariant::entries()).unwrap().len(), 20);
        assert_eq!(VariantTable::build(DeviceReportVariant::entries()).unwrap().len(), 12);
        assert_eq!(VariantTable::build(ChannelReportVariant::entries()).unwrap().len(), 14);
    }

    #[test]
    fn test_envelope_serialization() {
        let settings = DeviceSettings::from_variant(RtlSdrSettings {
            center_frequency: Some(435_000_000),
            ..Default::default()
        });
        assert_eq!(settings.discriminator(), Some("RTLSDR"));
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            json!({
                "deviceHwType": "RTLSDR",
                "direction": 0,
                "rtlSdrSettings": { "centerFrequency": 435_000_000 }
            })
        );
    }

    #[test]
    fn test_reset_serializes_empty() {
        let mut report = ChannelReport::from_variant(NfmDemodReport {
            squelch: Some(1),
            ..Default::default()
        });
        report.reset();
        report.reset();
        assert!(report.is_reset());
        assert_eq!(serde_json::to_value(&report).unwrap(), json!({}));
    }

    #[test]
    fn test_merge_same_variant_updates_touched_leaves() {
        let mut current = ChannelSettings::from_variant(NfmModSettings {
            input_frequency_offset: Some(1000),
            volume_factor: Some(0.5),
            cw_keyer: Some(CwKeyerSettings {
                wpm: Some(12),
                text: Some("CQ".into()),
                ..Default::default()
            }),
            ..Default::default()
        });
        let update = ChannelSettings::from_variant(NfmModSettings {
            input_frequency_offset: Some(2000),
            cw_keyer: Some(CwKeyerSettings {
                wpm: Some(20),
                ..Default::default()
            }),
            ..Default::default()
        });
        let keys = ["inputFrequencyOffset", "cwKeyer.wpm"]
            .iter()
            .map(|k| k.to_string())
            .collect();

        current.merge(&update, &keys).unwrap();

        let Some(ChannelSettingsVariant::NfmMod(merged)) = current.variant() else {
            panic!("variant changed");
        };
        assert_eq!(merged.input_frequency_offset, Some(2000));
        assert_eq!(merged.volume_factor, Some(0.5));
        let keyer = merged.cw_keyer.as_ref().unwrap();
        assert_eq!(keyer.wpm, Some(20));
        assert_eq!(keyer.text.as_deref(), Some("CQ"));
    }

    #[test]
    fn test_merge_other_variant_replaces() {
        let mut current = DeviceSettings::from_variant(RtlSdrSettings::default());
        let update = DeviceSettings::from_variant(AirspySettings {
            lna_gain: Some(7),
            ..Default::default()
        });
        current.merge(&update, &Default::default()).unwrap();
        assert_eq!(current.discriminator(), Some("Airspy"));
    }
}
