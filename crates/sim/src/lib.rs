//! simulation tools for the cubesat radio link

pub mod literal;
pub mod scenarios;

use cubesat_link_core::{HeaderMode, RadioLinkConfig};
use cubesat_link_radio::{DriverSettings, EmulatorSettings, SatelliteId};

pub struct SimulationPresets;

impl SimulationPresets {
    pub fn norbi() -> RadioLinkConfig {
        RadioLinkConfig::default()
    }

    pub fn norbi2() -> RadioLinkConfig {
        RadioLinkConfig {
            frequency: 436_500_000,
            ..Self::norbi()
        }
    }

    pub fn stratosat() -> RadioLinkConfig {
        RadioLinkConfig {
            frequency: 436_260_000,
            header_mode: HeaderMode::Implicit,
            low_data_rate_optimize: false,
            crc_enabled: false,
            payload_length: 102, // beacon size
            ..Self::norbi()
        }
    }

    /// Ground config tuned for `identity`, `None` when nothing is known about it.
    pub fn for_identity(identity: SatelliteId) -> Option<RadioLinkConfig> {
        match identity {
            SatelliteId::Norbi => Some(Self::norbi()),
            SatelliteId::Norbi2 => Some(Self::norbi2()),
            SatelliteId::Stratosat => Some(Self::stratosat()),
            SatelliteId::Unknown => None,
        }
    }

    pub fn clean_link() -> (DriverSettings, EmulatorSettings) {
        (DriverSettings::default(), EmulatorSettings::default())
    }

    /// Low elevation pass: a noisy receiver and lossy air in both directions.
    pub fn marginal_link() -> (DriverSettings, EmulatorSettings) {
        (
            DriverSettings {
                interference_level: 20,
                ..Default::default()
            },
            EmulatorSettings {
                tx_loss_level: 15,
                rx_loss_level: 15,
                ..Default::default()
            },
        )
    }
}
