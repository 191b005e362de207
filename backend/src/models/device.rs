//! Device settings shapes, one per hardware variant and direction.

use serde_json::Value;

crate::payload_struct! {
    pub struct AirspySettings {
        center_frequency: i64,
        lo_ppm_correction: i32,
        dev_sample_rate_index: i32,
        lna_gain: i32,
        mixer_gain: i32,
        vga_gain: i32,
        lna_agc: i32,
        mixer_agc: i32,
        log2_decim: i32,
        fc_pos: i32,
        bias_t: i32,
        dc_block: i32,
        iq_correction: i32,
        transverter_mode: i32,
        transverter_delta_frequency: i64,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct AirspyHfSettings {
        center_frequency: i64,
        lo_ppm_correction: i32,
        dev_sample_rate_index: i32,
        log2_decim: i32,
        band_index: i32,
        use_agc: i32,
        agc_high: i32,
        use_dsp: i32,
        use_lna: i32,
        attenuator_steps: i32,
        transverter_mode: i32,
        transverter_delta_frequency: i64,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct BladeRf1InputSettings {
        center_frequency: i64,
        dev_sample_rate: i32,
        lna_gain: i32,
        vga1: i32,
        vga2: i32,
        bandwidth: i32,
        log2_decim: i32,
        fc_pos: i32,
        xb200: i32,
        xb200_path: i32,
        xb200_filter: i32,
        dc_block: i32,
        iq_correction: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct BladeRf1OutputSettings {
        center_frequency: i64,
        dev_sample_rate: i32,
        vga1: i32,
        vga2: i32,
        bandwidth: i32,
        log2_interp: i32,
        xb200: i32,
        xb200_path: i32,
        xb200_filter: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct BladeRf2InputSettings {
        center_frequency: i64,
        lo_ppm_correction: i32,
        dev_sample_rate: i32,
        bandwidth: i32,
        gain_mode: i32,
        global_gain: i32,
        bias_tee: i32,
        log2_decim: i32,
        fc_pos: i32,
        dc_block: i32,
        iq_correction: i32,
        transverter_mode: i32,
        transverter_delta_frequency: i64,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct BladeRf2OutputSettings {
        center_frequency: i64,
        lo_ppm_correction: i32,
        dev_sample_rate: i32,
        bandwidth: i32,
        global_gain: i32,
        bias_tee: i32,
        log2_interp: i32,
        transverter_mode: i32,
        transverter_delta_frequency: i64,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct FcdProSettings {
        center_frequency: i64,
        lo_ppm_correction: i32,
        lna_gain_index: i32,
        rf_filter_index: i32,
        lna_enhance_index: i32,
        band_index: i32,
        mixer_gain_index: i32,
        mixer_filter_index: i32,
        bias_current_index: i32,
        mode_index: i32,
        gain1_index: i32,
        rc_filter_index: i32,
        gain2_index: i32,
        gain3_index: i32,
        gain4_index: i32,
        if_filter_index: i32,
        gain5_index: i32,
        gain6_index: i32,
        log2_decim: i32,
        fc_pos: i32,
        dc_block: i32,
        iq_correction: i32,
        transverter_mode: i32,
        transverter_delta_frequency: i64,
    }
}

crate::payload_struct! {
    pub struct FcdProPlusSettings {
        center_frequency: i64,
        log2_decim: i32,
        fc_pos: i32,
        range_low: i32,
        lna_gain: i32,
        mix_gain: i32,
        bias_t: i32,
        if_gain: i32,
        if_filter_index: i32,
        rf_filter_index: i32,
        lo_ppm_correction: i32,
        dc_block: i32,
        iq_imbalance: i32,
        transverter_mode: i32,
        transverter_delta_frequency: i64,
    }
}

crate::payload_struct! {
    pub struct FileInputSettings {
        file_name: String,
        acceleration_factor: i32,
        #[serde(rename = "loop")]
        looping: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct HackRfInputSettings {
        center_frequency: i64,
        lo_ppm_tenths: i32,
        bandwidth: i32,
        lna_gain: i32,
        vga_gain: i32,
        log2_decim: i32,
        fc_pos: i32,
        dev_sample_rate: i32,
        bias_t: i32,
        lna_ext: i32,
        dc_block: i32,
        iq_correction: i32,
        link_tx_frequency: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct HackRfOutputSettings {
        center_frequency: i64,
        lo_ppm_tenths: i32,
        bandwidth: i32,
        vga_gain: i32,
        log2_interp: i32,
        dev_sample_rate: i32,
        bias_t: i32,
        lna_ext: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct KiwiSdrSettings {
        gain: i32,
        use_agc: i32,
        dc_block: i32,
        center_frequency: i64,
        server_address: String,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct LimeSdrInputSettings {
        center_frequency: i64,
        dev_sample_rate: i32,
        log2_hard_decim: i32,
        dc_block: i32,
        iq_correction: i32,
        log2_soft_decim: i32,
        lpf_bw: i32,
        lpf_fir_enable: i32,
        lpf_fir_bw: i32,
        gain: i32,
        ncx_enable: i32,
        nco_frequency: i32,
        antenna_path: i32,
        gain_mode: i32,
        lna_gain: i32,
        tia_gain: i32,
        pga_gain: i32,
        ext_clock: i32,
        ext_clock_freq: i32,
        transverter_mode: i32,
        transverter_delta_frequency: i64,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct LimeSdrOutputSettings {
        center_frequency: i64,
        dev_sample_rate: i32,
        log2_hard_interp: i32,
        log2_soft_interp: i32,
        lpf_bw: i32,
        lpf_fir_enable: i32,
        lpf_fir_bw: i32,
        gain: i32,
        ncx_enable: i32,
        nco_frequency: i32,
        antenna_path: i32,
        ext_clock: i32,
        ext_clock_freq: i32,
        transverter_mode: i32,
        transverter_delta_frequency: i64,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct PerseusSettings {
        center_frequency: i64,
        lo_ppm_correction: i32,
        dev_sample_rate_index: i32,
        log2_decim: i32,
        adc_dither: i32,
        adc_preamp: i32,
        wide_band: i32,
        attenuator: i32,
        transverter_mode: i32,
        transverter_delta_frequency: i64,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct PlutoSdrInputSettings {
        center_frequency: i64,
        dev_sample_rate: i32,
        lo_ppm_correction: i32,
        dc_block: i32,
        iq_correction: i32,
        log2_decim: i32,
        fc_pos: i32,
        lpf_bw: i32,
        lpf_fir_enable: i32,
        lpf_fir_bw: i32,
        lpf_fir_log2_decim: i32,
        lpf_fir_gain: i32,
        antenna_path: i32,
        gain_mode: i32,
        gain: i32,
        transverter_mode: i32,
        transverter_delta_frequency: i64,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct PlutoSdrOutputSettings {
        center_frequency: i64,
        dev_sample_rate: i32,
        lo_ppm_correction: i32,
        log2_interp: i32,
        lpf_bw: i32,
        lpf_fir_enable: i32,
        lpf_fir_bw: i32,
        lpf_fir_log2_interp: i32,
        lpf_fir_gain: i32,
        antenna_path: i32,
        att: i32,
        transverter_mode: i32,
        transverter_delta_frequency: i64,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct RtlSdrSettings {
        dev_sample_rate: i32,
        low_sample_rate: i32,
        center_frequency: i64,
        gain: i32,
        lo_ppm_correction: i32,
        log2_decim: i32,
        fc_pos: i32,
        dc_block: i32,
        iq_imbalance: i32,
        agc: i32,
        no_mod_mode: i32,
        offset_tuning: i32,
        transverter_mode: i32,
        transverter_delta_frequency: i64,
        rf_bandwidth: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct SdrPlaySettings {
        center_frequency: i64,
        tuner_gain: i32,
        lo_ppm_correction: i32,
        frequency_band_index: i32,
        if_frequency_index: i32,
        bandwidth_index: i32,
        dev_sample_rate_index: i32,
        log2_decim: i32,
        fc_pos: i32,
        dc_block: i32,
        iq_correction: i32,
        tuner_gain_mode: i32,
        lna_on: i32,
        mixer_amp_on: i32,
        baseband_gain: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    /// Named value used by the SoapySDR argument and gain lists.
    pub struct ArgValue {
        key: String,
        value: Value,
    }
}

crate::payload_struct! {
    pub struct SoapySdrInputSettings {
        center_frequency: i64,
        lo_ppm_correction: i32,
        dev_sample_rate: i32,
        log2_decim: i32,
        fc_pos: i32,
        soft_dc_correction: i32,
        soft_iq_correction: i32,
        transverter_mode: i32,
        transverter_delta_frequency: i64,
        antenna: String,
        bandwidth: i32,
        global_gain: i32,
        auto_gain: i32,
        auto_dc_correction: i32,
        auto_iq_correction: i32,
        tunable_elements: Vec<ArgValue>,
        individual_gains: Vec<ArgValue>,
        stream_arg_settings: Vec<ArgValue>,
        device_arg_settings: Vec<ArgValue>,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct SoapySdrOutputSettings {
        center_frequency: i64,
        lo_ppm_correction: i32,
        dev_sample_rate: i32,
        log2_interp: i32,
        transverter_mode: i32,
        transverter_delta_frequency: i64,
        antenna: String,
        bandwidth: i32,
        global_gain: i32,
        auto_gain: i32,
        auto_dc_correction: i32,
        auto_iq_correction: i32,
        tunable_elements: Vec<ArgValue>,
        individual_gains: Vec<ArgValue>,
        stream_arg_settings: Vec<ArgValue>,
        device_arg_settings: Vec<ArgValue>,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct TestSourceSettings {
        center_frequency: i64,
        frequency_shift: i32,
        sample_rate: i32,
        log2_decim: i32,
        fc_pos: i32,
        sample_size_index: i32,
        amplitude_bits: i32,
        auto_corr_options: i32,
        modulation: i32,
        modulation_tone: i32,
        am_modulation: i32,
        fm_deviation: i32,
        dc_factor: f32,
        i_factor: f32,
        q_factor: f32,
        phase_imbalance: f32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    /// Per-stream part of the multi-stream test source.
    pub struct TestMiStreamSettings {
        center_frequency: i64,
        frequency_shift: i32,
        sample_rate: i32,
        log2_decim: i32,
        fc_pos: i32,
        sample_size_index: i32,
        amplitude_bits: i32,
        auto_corr_options: i32,
        modulation: i32,
        modulation_tone: i32,
        am_modulation: i32,
        fm_deviation: i32,
        dc_factor: f32,
        i_factor: f32,
        q_factor: f32,
        phase_imbalance: f32,
    }
}

crate::payload_struct! {
    pub struct TestMiSettings {
        streams: Vec<TestMiStreamSettings>,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct XtrxInputSettings {
        center_frequency: i64,
        dev_sample_rate: f64,
        log2_hard_decim: i32,
        dc_block: i32,
        iq_correction: i32,
        log2_soft_decim: i32,
        lpf_bw: f32,
        gain: i32,
        ncx_enable: i32,
        nco_frequency: i32,
        antenna_path: i32,
        gain_mode: i32,
        lna_gain: i32,
        tia_gain: i32,
        pga_gain: i32,
        ext_clock: i32,
        ext_clock_freq: i32,
        pwrmode: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct XtrxOutputSettings {
        center_frequency: i64,
        dev_sample_rate: f64,
        log2_hard_interp: i32,
        log2_soft_interp: i32,
        lpf_bw: f32,
        gain: i32,
        ncx_enable: i32,
        nco_frequency: i32,
        antenna_path: i32,
        ext_clock: i32,
        ext_clock_freq: i32,
        pwrmode: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct RemoteInputSettings {
        api_address: String,
        api_port: i32,
        data_address: String,
        data_port: i32,
        multicast_address: String,
        multicast_join: i32,
        dc_block: i32,
        iq_correction: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct LocalInputSettings {
        dc_block: i32,
        iq_correction: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct RemoteOutputSettings {
        center_frequency: i64,
        nb_fec_blocks: i32,
        api_address: String,
        api_port: i32,
        data_address: String,
        data_port: i32,
        device_index: i32,
        channel_index: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}

crate::payload_struct! {
    pub struct LocalOutputSettings {
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
    }
}
