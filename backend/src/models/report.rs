//! Runtime report shapes for devices and channels.

crate::payload_struct! {
    pub struct SampleRateItem {
        rate: i32,
    }
}

crate::payload_struct! {
    pub struct BandwidthItem {
        bandwidth: i32,
    }
}

crate::payload_struct! {
    pub struct FrequencyItem {
        frequency: i64,
    }
}

crate::payload_struct! {
    pub struct FrequencyBandItem {
        name: String,
        lower_bound: i64,
        higher_bound: i64,
    }
}

crate::payload_struct! {
    pub struct GainItem {
        #[serde(rename = "gainCB")]
        gain_cb: i32,
    }
}

// =============================================================================
// Device reports
// =============================================================================

crate::payload_struct! {
    pub struct AirspyReport {
        sample_rates: Vec<SampleRateItem>,
    }
}

crate::payload_struct! {
    pub struct AirspyHfReport {
        sample_rates: Vec<SampleRateItem>,
    }
}

crate::payload_struct! {
    pub struct FileInputReport {
        file_name: String,
        sample_rate: i32,
        sample_size: i32,
        absolute_time: String,
        elapsed_time: String,
        duration_time: String,
    }
}

crate::payload_struct! {
    pub struct LimeSdrInputReport {
        success: i32,
        stream_active: i32,
        fifo_size: i32,
        fifo_fill: i32,
        underrun_count: i32,
        overrun_count: i32,
        dropped_packets_count: i32,
        link_rate: f32,
        hw_timestamp: i64,
        temperature: f32,
        gpio_dir: i32,
        gpio_pins: i32,
    }
}

crate::payload_struct! {
    pub struct LimeSdrOutputReport {
        success: i32,
        stream_active: i32,
        fifo_size: i32,
        fifo_fill: i32,
        underrun_count: i32,
        overrun_count: i32,
        dropped_packets_count: i32,
        link_rate: f32,
        hw_timestamp: i64,
        temperature: f32,
        gpio_dir: i32,
        gpio_pins: i32,
    }
}

crate::payload_struct! {
    pub struct PerseusReport {
        sample_rates: Vec<SampleRateItem>,
    }
}

crate::payload_struct! {
    pub struct PlutoSdrInputReport {
        adc_rate: i32,
        rssi: String,
    }
}

crate::payload_struct! {
    pub struct PlutoSdrOutputReport {
        dac_rate: i32,
        rssi: String,
    }
}

crate::payload_struct! {
    pub struct RtlSdrReport {
        gains: Vec<GainItem>,
    }
}

crate::payload_struct! {
    pub struct RemoteOutputReport {
        center_frequency: i64,
        sample_rate: i32,
        #[serde(rename = "bufferRWBalance")]
        buffer_rw_balance: i32,
        sample_count: i32,
        nb_blocks_fec: i32,
        remote_sample_rate: i32,
        server_timestamp: i64,
    }
}

crate::payload_struct! {
    pub struct RemoteInputReport {
        center_frequency: i64,
        sample_rate: i32,
        #[serde(rename = "bufferRWBalance")]
        buffer_rw_balance: i32,
        remote_timestamp: String,
        min_nb_blocks: i32,
        max_nb_recovery: i32,
        average_nb_blocks: f32,
        average_nb_original_blocks: f32,
        nb_original_blocks: i32,
        nb_fec_blocks: i32,
        uncorrectable_errors_count: i32,
        correctable_errors_count: i32,
    }
}

crate::payload_struct! {
    pub struct SdrPlayReport {
        sample_rates: Vec<SampleRateItem>,
        intermediate_frequencies: Vec<FrequencyItem>,
        bandwidths: Vec<BandwidthItem>,
        frequency_bands: Vec<FrequencyBandItem>,
    }
}

// =============================================================================
// Channel reports
// =============================================================================

crate::payload_struct! {
    pub struct AmDemodReport {
        #[serde(rename = "channelPowerDB")]
        channel_power_db: f32,
        squelch: i32,
        audio_sample_rate: i32,
        channel_sample_rate: i32,
    }
}

crate::payload_struct! {
    pub struct AmModReport {
        #[serde(rename = "channelPowerDB")]
        channel_power_db: f32,
        audio_sample_rate: i32,
        channel_sample_rate: i32,
    }
}

crate::payload_struct! {
    pub struct AtvModReport {
        channel_sample_rate: i32,
    }
}

crate::payload_struct! {
    pub struct BfmDemodReport {
        #[serde(rename = "channelPowerDB")]
        channel_power_db: f32,
        squelch: i32,
        audio_sample_rate: i32,
        channel_sample_rate: i32,
        pilot_locked: i32,
        #[serde(rename = "pilotPowerDB")]
        pilot_power_db: f32,
        rds_demod_accum_db: f32,
        rds_demod_frequency: f32,
        rds_pi: i32,
        rds_program_service: String,
        rds_radio_text: String,
    }
}

crate::payload_struct! {
    pub struct DsdDemodReport {
        #[serde(rename = "channelPowerDB")]
        channel_power_db: f32,
        audio_sample_rate: i32,
        channel_sample_rate: i32,
        squelch: i32,
        pll_locked: i32,
        slot1_on: i32,
        slot2_on: i32,
        sync_type: String,
        in_level: i32,
        car_pos: i32,
        zero_crossing_pos: i32,
        sync_rate: i32,
        status_text: String,
    }
}

crate::payload_struct! {
    pub struct NfmDemodReport {
        #[serde(rename = "channelPowerDB")]
        channel_power_db: f32,
        ctcss_tone: f32,
        squelch: i32,
        audio_sample_rate: i32,
        channel_sample_rate: i32,
    }
}

crate::payload_struct! {
    pub struct NfmModReport {
        #[serde(rename = "channelPowerDB")]
        channel_power_db: f32,
        audio_sample_rate: i32,
        channel_sample_rate: i32,
    }
}

crate::payload_struct! {
    pub struct RemoteSourceReport {
        queue_length: i32,
        queue_size: i32,
        samples_count: i32,
        correctable_errors_count: i32,
        uncorrectable_errors_count: i32,
        tv_sec: i32,
        tv_u_sec: i32,
        nb_original_blocks: i32,
        nb_fec_blocks: i32,
        center_freq: i32,
        sample_rate: i32,
    }
}

crate::payload_struct! {
    pub struct SsbDemodReport {
        #[serde(rename = "channelPowerDB")]
        channel_power_db: f32,
        squelch: i32,
        audio_sample_rate: i32,
        channel_sample_rate: i32,
    }
}

crate::payload_struct! {
    pub struct SsbModReport {
        #[serde(rename = "channelPowerDB")]
        channel_power_db: f32,
        audio_sample_rate: i32,
        channel_sample_rate: i32,
    }
}

crate::payload_struct! {
    pub struct UdpSourceReport {
        #[serde(rename = "channelPowerDB")]
        channel_power_db: f32,
        channel_sample_rate: i32,
    }
}

crate::payload_struct! {
    pub struct UdpSinkReport {
        #[serde(rename = "channelPowerDB")]
        channel_power_db: f32,
        output_power_db: f32,
        squelch: i32,
        input_sample_rate: i32,
        channel_sample_rate: i32,
    }
}

crate::payload_struct! {
    pub struct WfmDemodReport {
        #[serde(rename = "channelPowerDB")]
        channel_power_db: f32,
        squelch: i32,
        audio_sample_rate: i32,
        channel_sample_rate: i32,
    }
}

crate::payload_struct! {
    pub struct WfmModReport {
        #[serde(rename = "channelPowerDB")]
        channel_power_db: f32,
        audio_sample_rate: i32,
        channel_sample_rate: i32,
    }
}
