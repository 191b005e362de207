//! Channel settings shapes, one per channel plugin.

crate::payload_struct! {
    /// Morse keyer block embedded in the modulator settings.
    pub struct CwKeyerSettings {
        sample_rate: i32,
        wpm: i32,
        mode: i32,
        text: String,
        #[serde(rename = "loop")]
        looping: i32,
    }
}

crate::payload_struct! {
    pub struct AmDemodSettings {
        input_frequency_offset: i64,
        rf_bandwidth: f32,
        squelch: f32,
        volume: f32,
        audio_mute: i32,
        bandpass_enable: i32,
        rgb_color: i32,
        title: String,
        audio_device_name: String,
        pll: i32,
        sync_am_operation: i32,
        stream_index: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}

crate::payload_struct! {
    pub struct AmModSettings {
        input_frequency_offset: i64,
        rf_bandwidth: f32,
        modulation_factor: f32,
        volume_factor: f32,
        channel_mute: i32,
        play_loop: i32,
        rgb_color: i32,
        title: String,
        audio_device_name: String,
        mod_af_input: i32,
        stream_index: i32,
        cw_keyer: CwKeyerSettings,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}

crate::payload_struct! {
    pub struct AtvModSettings {
        input_frequency_offset: i64,
        rf_bandwidth: f32,
        rf_opp_bandwidth: f32,
        atv_std: i32,
        nb_lines: i32,
        fps: i32,
        atv_mod_input: i32,
        uniform_level: f32,
        atv_modulation: i32,
        video_play_loop: i32,
        video_play: i32,
        camera_play: i32,
        channel_mute: i32,
        invert_video: i32,
        rf_scaling_factor: f32,
        fm_excursion: f32,
        force_decimator: i32,
        show_overlay_text: i32,
        overlay_text: String,
        rgb_color: i32,
        title: String,
        video_file_name: String,
        stream_index: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}

crate::payload_struct! {
    pub struct BfmDemodSettings {
        input_frequency_offset: i64,
        rf_bandwidth: f32,
        af_bandwidth: f32,
        volume: f32,
        squelch: f32,
        audio_stereo: i32,
        lsb_stereo: i32,
        show_pilot: i32,
        rds_active: i32,
        rgb_color: i32,
        title: String,
        audio_device_name: String,
        stream_index: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}

crate::payload_struct! {
    pub struct DsdDemodSettings {
        input_frequency_offset: i64,
        rf_bandwidth: f32,
        fm_deviation: f32,
        demod_gain: f32,
        volume: f32,
        baud_rate: i32,
        squelch_gate: i32,
        squelch: f32,
        audio_mute: i32,
        enable_cosine_filtering: i32,
        sync_or_constellation: i32,
        slot1_on: i32,
        slot2_on: i32,
        tdma_stereo: i32,
        pll_lock: i32,
        rgb_color: i32,
        title: String,
        audio_device_name: String,
        high_pass_filter: i32,
        trace_length_mutliplier: i32,
        trace_stroke: i32,
        trace_decay: i32,
        stream_index: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}

crate::payload_struct! {
    pub struct FreeDvDemodSettings {
        input_frequency_offset: i64,
        free_dv_mode: i32,
        volume: f32,
        volume_in: f32,
        span_log2: i32,
        audio_mute: i32,
        agc: i32,
        rgb_color: i32,
        title: String,
        audio_device_name: String,
        stream_index: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}

crate::payload_struct! {
    pub struct FreeDvModSettings {
        input_frequency_offset: i64,
        free_dv_mode: i32,
        tone_frequency: f32,
        volume_factor: f32,
        span_log2: i32,
        audio_mute: i32,
        play_loop: i32,
        gauss_noise: i32,
        rgb_color: i32,
        title: String,
        audio_device_name: String,
        mod_af_input: i32,
        stream_index: i32,
        cw_keyer: CwKeyerSettings,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}

crate::payload_struct! {
    pub struct FreqTrackerSettings {
        input_frequency_offset: i64,
        rf_bandwidth: f32,
        log2_decim: i32,
        squelch: f32,
        rgb_color: i32,
        title: String,
        span_log2: i32,
        alpha_ema: f32,
        tracking: i32,
        tracker_type: i32,
        pll_psk_order: i32,
        rrc: i32,
        rrc_rolloff: i32,
        squelch_gate: i32,
        stream_index: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}

crate::payload_struct! {
    pub struct NfmDemodSettings {
        input_frequency_offset: i64,
        rf_bandwidth: f32,
        af_bandwidth: f32,
        fm_deviation: f32,
        squelch_gate: i32,
        delta_squelch: i32,
        squelch: f32,
        volume: f32,
        ctcss_on: i32,
        audio_mute: i32,
        ctcss_index: i32,
        rgb_color: i32,
        title: String,
        audio_device_name: String,
        stream_index: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}

crate::payload_struct! {
    pub struct NfmModSettings {
        input_frequency_offset: i64,
        rf_bandwidth: f32,
        af_bandwidth: f32,
        fm_deviation: f32,
        tone_frequency: f32,
        volume_factor: f32,
        channel_mute: i32,
        play_loop: i32,
        ctcss_on: i32,
        ctcss_index: i32,
        rgb_color: i32,
        title: String,
        audio_device_name: String,
        mod_af_input: i32,
        stream_index: i32,
        cw_keyer: CwKeyerSettings,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}

crate::payload_struct! {
    pub struct LocalSinkSettings {
        local_device_index: i32,
        rgb_color: i32,
        title: String,
        log2_decim: i32,
        filter_chain_hash: i32,
        stream_index: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}

crate::payload_struct! {
    pub struct LocalSourceSettings {
        local_device_index: i32,
        rgb_color: i32,
        title: String,
        log2_interp: i32,
        filter_chain_hash: i32,
        stream_index: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}

crate::payload_struct! {
    pub struct RemoteSinkSettings {
        nb_fec_blocks: i32,
        tx_delay: i32,
        data_address: String,
        data_port: i32,
        rgb_color: i32,
        title: String,
        log2_decim: i32,
        filter_chain_hash: i32,
        stream_index: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}

crate::payload_struct! {
    pub struct RemoteSourceSettings {
        data_address: String,
        data_port: i32,
        rgb_color: i32,
        title: String,
        log2_interp: i32,
        filter_chain_hash: i32,
        stream_index: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}

crate::payload_struct! {
    pub struct SsbDemodSettings {
        input_frequency_offset: i64,
        rf_bandwidth: f32,
        low_cutoff: f32,
        volume: f32,
        span_log2: i32,
        audio_binaural: i32,
        audio_flip_channels: i32,
        dsb: i32,
        audio_mute: i32,
        agc: i32,
        agc_clamping: i32,
        agc_time_log2: i32,
        agc_power_threshold: i32,
        agc_threshold_gate: i32,
        rgb_color: i32,
        title: String,
        audio_device_name: String,
        stream_index: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}

crate::payload_struct! {
    pub struct SsbModSettings {
        input_frequency_offset: i64,
        bandwidth: f32,
        low_cutoff: f32,
        use_pp: i32,
        tone_frequency: f32,
        volume_factor: f32,
        span_log2: i32,
        audio_binaural: i32,
        audio_flip_channels: i32,
        dsb: i32,
        audio_mute: i32,
        play_loop: i32,
        agc: i32,
        rgb_color: i32,
        title: String,
        audio_device_name: String,
        mod_af_input: i32,
        stream_index: i32,
        cw_keyer: CwKeyerSettings,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}

crate::payload_struct! {
    pub struct UdpSourceSettings {
        input_frequency_offset: i64,
        sample_format: i32,
        input_sample_rate: f32,
        rf_bandwidth: f32,
        low_cutoff: f32,
        fm_deviation: i32,
        am_mod_factor: f32,
        channel_mute: i32,
        gain_in: f32,
        gain_out: f32,
        squelch: f32,
        squelch_gate: f32,
        squelch_enabled: i32,
        auto_rw_balance: i32,
        stereo_input: i32,
        rgb_color: i32,
        udp_address: String,
        udp_port: i32,
        title: String,
        stream_index: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}

crate::payload_struct! {
    pub struct UdpSinkSettings {
        output_sample_rate: f32,
        sample_format: i32,
        input_frequency_offset: i64,
        rf_bandwidth: f32,
        fm_deviation: i32,
        channel_mute: i32,
        gain: f32,
        squelch_db: i32,
        squelch_gate: i32,
        squelch_enabled: i32,
        agc: i32,
        audio_active: i32,
        audio_stereo: i32,
        volume: i32,
        udp_address: String,
        udp_port: i32,
        audio_port: i32,
        rgb_color: i32,
        title: String,
        stream_index: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}

crate::payload_struct! {
    pub struct WfmDemodSettings {
        input_frequency_offset: i64,
        rf_bandwidth: f32,
        af_bandwidth: f32,
        volume: f32,
        squelch: f32,
        audio_mute: i32,
        rgb_color: i32,
        title: String,
        audio_device_name: String,
        stream_index: i32,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}

crate::payload_struct! {
    pub struct WfmModSettings {
        input_frequency_offset: i64,
        rf_bandwidth: f32,
        af_bandwidth: f32,
        fm_deviation: f32,
        tone_frequency: f32,
        volume_factor: f32,
        channel_mute: i32,
        play_loop: i32,
        rgb_color: i32,
        title: String,
        audio_device_name: String,
        mod_af_input: i32,
        stream_index: i32,
        cw_keyer: CwKeyerSettings,
        #[serde(rename = "useReverseAPI")]
        use_reverse_api: i32,
        #[serde(rename = "reverseAPIAddress")]
        reverse_api_address: String,
        #[serde(rename = "reverseAPIPort")]
        reverse_api_port: i32,
        #[serde(rename = "reverseAPIDeviceIndex")]
        reverse_api_device_index: i32,
        #[serde(rename = "reverseAPIChannelIndex")]
        reverse_api_channel_index: i32,
    }
}
