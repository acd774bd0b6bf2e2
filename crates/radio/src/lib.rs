//! simulated UHF link between a ground transceiver and an emulated spacecraft

use std::ops::RangeInclusive;
use std::time::Duration;

use cubesat_link_core::FrameError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod driver;
pub mod emulator;
pub mod events;
pub mod identity;
pub mod mailbox;
pub mod telemetry;
pub mod trajectory;

pub use driver::{GroundRadioDriver, RxRecord, RxTimeout, TxRecord};
pub use emulator::{EmulatorStats, SatelliteEmulator, SatelliteState};
pub use events::EventChannel;
pub use identity::SatelliteId;
pub use mailbox::{AirFrame, Mailbox};
pub use trajectory::{SampledTrajectory, TrajectoryProvider};

#[derive(Debug, Error)]
pub enum RadioError {
    #[error("malformed frame: {0}")]
    MalformedFrame(#[from] FrameError),

    #[error("unknown command (msg id {0})")]
    UnknownCommand(u16),

    #[error("frame addressed to {0}, not bound here")]
    AddressMismatch(String),

    #[error("link parameters differ: {}", .fields.join(", "))]
    ConfigMismatch { fields: Vec<&'static str> },

    #[error("channel busy, frame dropped")]
    ChannelBusy,

    #[error("frame lost on the air")]
    Lost,

    #[error("no response before timeout")]
    LinkTimeout,

    #[error("radio is not connected")]
    NotConnected,

    #[error("rx timeout must be 1 to 9 s, got {0}")]
    InvalidRxTimeout(u64),
}

/// Timing and impairment knobs of the emulated spacecraft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmulatorSettings {
    pub tick: Duration,
    pub poll_timeout: Duration,
    pub put_timeout: Duration,
    pub beacon_period: Duration,
    /// Seconds until the first beacon after power on.
    pub first_beacon_secs: RangeInclusive<u64>,
    pub transmit_delay: Duration,
    pub join_timeout: Duration,
    pub transaction_id_range: RangeInclusive<u16>,
    pub frame_counter_range: RangeInclusive<u64>,
    /// Percentage of outbound frames lost, 0 to 100.
    pub tx_loss_level: u8,
    /// Percentage of inbound frames lost, 0 to 100.
    pub rx_loss_level: u8,
    pub seed: Option<u64>,
}

impl Default for EmulatorSettings {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(200),
            poll_timeout: Duration::from_millis(500),
            put_timeout: Duration::from_millis(500),
            beacon_period: Duration::from_secs(60),
            first_beacon_secs: 10..=60,
            transmit_delay: Duration::from_millis(500),
            join_timeout: Duration::from_millis(500),
            transaction_id_range: 0..=0xFFFF,
            frame_counter_range: 28853..=38543,
            tx_loss_level: 0,
            rx_loss_level: 0,
            seed: None,
        }
    }
}

/// Timing and RF model knobs of the ground transceiver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverSettings {
    /// Percentage chance a received frame is flagged with a CRC error.
    pub interference_level: u8,
    pub rx_timeout: Duration,
    pub poll_timeout: Duration,
    pub poll_interval: Duration,
    pub processing_delay: Duration,
    pub put_timeout: Duration,
    pub init_delay: Duration,
    pub join_timeout: Duration,
    pub fragment_size: usize,
    pub fragment_gap: Duration,
    pub snr_range: RangeInclusive<i32>,
    pub rssi_range: RangeInclusive<i32>,
    pub seed: Option<u64>,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            interference_level: 0,
            rx_timeout: Duration::from_secs(3),
            poll_timeout: Duration::from_millis(500),
            poll_interval: Duration::from_millis(500),
            processing_delay: Duration::from_millis(300),
            put_timeout: Duration::from_millis(500),
            init_delay: Duration::from_secs(1),
            join_timeout: Duration::from_millis(800),
            fragment_size: 255,
            fragment_gap: Duration::from_millis(10),
            snr_range: 42..=52,
            rssi_range: -115..=-112,
            seed: None,
        }
    }
}

pub(crate) fn make_rng(seed: Option<u64>) -> rand::rngs::StdRng {
    use rand::SeedableRng;
    match seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => rand::rngs::StdRng::from_os_rng(),
    }
}
