//! Spacecraft identities the emulator can impersonate

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use cubesat_link_core::{
    Address, Bandwidth, CodingRate, HeaderMode, Modulation, SatelliteLinkConfig,
};
use serde::{Deserialize, Serialize};

/// 2000-01-01T00:00:00Z as seconds since the Unix epoch.
const ONBOARD_EPOCH_UNIX_S: u64 = 946_684_800;

// Opaque calibration offsets of the onboard clocks, kept verbatim.
const NORBI_CLOCK_BIAS_S: u64 = 702_915_236;
const NORBI2_CLOCK_BIAS_S: u64 = 740_307_308;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SatelliteId {
    Norbi,
    Norbi2,
    Stratosat,
    Unknown,
}

impl SatelliteId {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_uppercase().as_str() {
            "NORBI" => SatelliteId::Norbi,
            "NORBI2" | "NORBI-2" | "NORBY2" | "NORBY-2" => SatelliteId::Norbi2,
            "STRATOSAT-TK 1 (RS52S)" => SatelliteId::Stratosat,
            _ => SatelliteId::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SatelliteId::Norbi => "NORBI",
            SatelliteId::Norbi2 => "NORBI-2",
            SatelliteId::Stratosat => "STRATOSAT-TK 1 (RS52S)",
            SatelliteId::Unknown => "UNKNOWN",
        }
    }

    pub fn link_config(&self) -> SatelliteLinkConfig {
        let norbi = SatelliteLinkConfig {
            modulation: Modulation::Lora,
            bandwidth: Bandwidth::Bw250,
            coding_rate: CodingRate::Cr5,
            header_mode: HeaderMode::Explicit,
            frequency: 436_700_000,
            low_data_rate_optimize: true,
            crc_enabled: true,
            spreading_factor: 10,
            sync_word: 0x12,
        };
        match self {
            SatelliteId::Norbi => norbi,
            SatelliteId::Norbi2 => SatelliteLinkConfig {
                frequency: 436_500_000,
                ..norbi
            },
            SatelliteId::Stratosat => SatelliteLinkConfig {
                header_mode: HeaderMode::Implicit,
                frequency: 436_260_000,
                low_data_rate_optimize: false,
                crc_enabled: false,
                ..norbi
            },
            SatelliteId::Unknown => SatelliteLinkConfig {
                modulation: Modulation::Fsk,
                frequency: 0,
                low_data_rate_optimize: false,
                crc_enabled: false,
                spreading_factor: 0,
                ..norbi
            },
        }
    }

    pub fn addresses(&self) -> &'static [Address] {
        const NORBI: [Address; 2] = [Address::new(10, 6, 1, 201), Address::new(10, 6, 1, 202)];
        const NORBI2: [Address; 2] = [Address::new(10, 6, 1, 203), Address::new(10, 6, 1, 204)];
        match self {
            SatelliteId::Norbi => &NORBI,
            SatelliteId::Norbi2 => &NORBI2,
            SatelliteId::Stratosat | SatelliteId::Unknown => &[],
        }
    }

    fn clock_bias(&self) -> Option<u64> {
        match self {
            SatelliteId::Norbi => Some(NORBI_CLOCK_BIAS_S),
            SatelliteId::Norbi2 => Some(NORBI2_CLOCK_BIAS_S),
            SatelliteId::Stratosat | SatelliteId::Unknown => None,
        }
    }

    /// Synthetic onboard clock: whole seconds since 2000-01-01 UTC, minus the
    /// identity's bias. `None` for spacecraft without a modelled clock.
    pub fn onboard_clock(&self, now: SystemTime) -> Option<u32> {
        let bias = self.clock_bias()?;
        let unix = now.duration_since(UNIX_EPOCH).unwrap_or(Duration::ZERO).as_secs();
        let seconds = unix.saturating_sub(ONBOARD_EPOCH_UNIX_S).saturating_sub(bias);
        Some(seconds as u32)
    }
}

impl fmt::Display for SatelliteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
