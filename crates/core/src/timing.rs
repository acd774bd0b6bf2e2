//! LoRa time-on-air and Doppler models

use std::time::Duration;

use crate::config::RadioLinkConfig;

pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Symbol duration above which low data rate optimization is switched on.
const LDRO_SYMBOL_THRESHOLD_MS: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirTime {
    pub symbol_ms: f64,
    pub preamble_ms: f64,
    pub payload_symbols: u32,
    pub payload_ms: f64,
    /// Whether the low data rate optimization flag took part in the computation.
    pub low_data_rate_optimize: bool,
}

impl AirTime {
    pub fn total_ms(&self) -> f64 {
        self.preamble_ms + self.payload_ms
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs_f64(self.total_ms().max(0.0) / 1000.0)
    }
}

/// Time a frame of `payload_len` bytes occupies the channel with `config`.
pub fn time_on_air(config: &RadioLinkConfig, payload_len: usize) -> AirTime {
    let sf = config.spreading_factor as i64;
    let symbol_ms = 2f64.powi(config.spreading_factor as i32) / config.bandwidth.khz();
    let preamble_ms = (config.preamble_length as f64 + 4.25) * symbol_ms;
    let ldro = config.low_data_rate_optimize || symbol_ms > LDRO_SYMBOL_THRESHOLD_MS;

    let payload_size = if config.header_mode.is_explicit() {
        payload_len as i64
    } else {
        config.payload_length as i64
    };

    let n = (8 * payload_size - 4 * sf + 28 + 16 * config.crc_enabled as i64
        - 20 * config.header_mode.is_explicit() as i64)
        .max(0);
    let divisor = (4 * (sf - 2 * ldro as i64)).max(1);
    let blocks = (n + divisor - 1) / divisor;
    let payload_symbols = 8 + blocks * (config.coding_rate.index() as i64 + 4);

    AirTime {
        symbol_ms,
        preamble_ms,
        payload_symbols: payload_symbols as u32,
        payload_ms: payload_symbols as f64 * symbol_ms,
        low_data_rate_optimize: ldro,
    }
}

/// Apparent frequency error in Hz for a carrier at `frequency` Hz seen with
/// the given range rate (km/s, positive when receding).
pub fn doppler_shift_hz(frequency: u32, range_rate_km_s: f64) -> i64 {
    let f = frequency as f64;
    let observed = ((1.0 + range_rate_km_s * 1000.0 / SPEED_OF_LIGHT_M_S) * f).round();
    frequency as i64 - observed as i64
}
