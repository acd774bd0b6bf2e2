//! Radio link configuration shared by the ground transceiver and the satellite
//!
//! Both sides expose their settings as a [`LinkSnapshot`], a name → symbolic
//! value map. Two snapshots agree when every parameter present in both has
//! the same symbolic value; parameters known to only one side are ignored.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::FrameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modulation {
    Lora,
    Fsk,
}

impl Modulation {
    pub fn name(&self) -> &'static str {
        match self {
            Modulation::Lora => "LORA",
            Modulation::Fsk => "FSK",
        }
    }

    pub fn register_value(&self) -> u8 {
        match self {
            Modulation::Lora => 0x80,
            Modulation::Fsk => 0x00,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Modulation::Lora => Modulation::Fsk,
            Modulation::Fsk => Modulation::Lora,
        }
    }
}

impl TryFrom<u8> for Modulation {
    type Error = FrameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x80 => Ok(Modulation::Lora),
            0x00 => Ok(Modulation::Fsk),
            _ => Err(FrameError::InvalidRegister { field: "mode", value }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bandwidth {
    Bw7_8,
    Bw10_4,
    Bw15_6,
    Bw20_8,
    Bw31_25,
    Bw41_7,
    Bw62_5,
    Bw125,
    Bw250,
    Bw500,
}

impl Bandwidth {
    const ALL: [Bandwidth; 10] = [
        Bandwidth::Bw7_8,
        Bandwidth::Bw10_4,
        Bandwidth::Bw15_6,
        Bandwidth::Bw20_8,
        Bandwidth::Bw31_25,
        Bandwidth::Bw41_7,
        Bandwidth::Bw62_5,
        Bandwidth::Bw125,
        Bandwidth::Bw250,
        Bandwidth::Bw500,
    ];

    pub fn khz(&self) -> f64 {
        match self {
            Bandwidth::Bw7_8 => 7.8,
            Bandwidth::Bw10_4 => 10.4,
            Bandwidth::Bw15_6 => 15.6,
            Bandwidth::Bw20_8 => 20.8,
            Bandwidth::Bw31_25 => 31.25,
            Bandwidth::Bw41_7 => 41.7,
            Bandwidth::Bw62_5 => 62.5,
            Bandwidth::Bw125 => 125.0,
            Bandwidth::Bw250 => 250.0,
            Bandwidth::Bw500 => 500.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Bandwidth::Bw7_8 => "BW7_8",
            Bandwidth::Bw10_4 => "BW10_4",
            Bandwidth::Bw15_6 => "BW15_6",
            Bandwidth::Bw20_8 => "BW20_8",
            Bandwidth::Bw31_25 => "BW31_25",
            Bandwidth::Bw41_7 => "BW41_7",
            Bandwidth::Bw62_5 => "BW62_5",
            Bandwidth::Bw125 => "BW125",
            Bandwidth::Bw250 => "BW250",
            Bandwidth::Bw500 => "BW500",
        }
    }

    /// Upper nibble of the modem config register.
    pub fn register_value(&self) -> u8 {
        (*self as u8) << 4
    }
}

impl TryFrom<u8> for Bandwidth {
    type Error = FrameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let index = (value >> 4) as usize;
        if value & 0x0F != 0 || index >= Bandwidth::ALL.len() {
            return Err(FrameError::InvalidRegister { field: "bandwidth", value });
        }
        Ok(Bandwidth::ALL[index])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodingRate {
    /// 4/5
    Cr5,
    /// 4/6
    Cr6,
    /// 4/7
    Cr7,
    /// 4/8
    Cr8,
}

impl CodingRate {
    /// 1 for 4/5 up to 4 for 4/8, as used by the time-on-air formula.
    pub fn index(&self) -> u8 {
        match self {
            CodingRate::Cr5 => 1,
            CodingRate::Cr6 => 2,
            CodingRate::Cr7 => 3,
            CodingRate::Cr8 => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CodingRate::Cr5 => "CR5",
            CodingRate::Cr6 => "CR6",
            CodingRate::Cr7 => "CR7",
            CodingRate::Cr8 => "CR8",
        }
    }

    pub fn register_value(&self) -> u8 {
        self.index() << 1
    }
}

impl TryFrom<u8> for CodingRate {
    type Error = FrameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x02 => Ok(CodingRate::Cr5),
            0x04 => Ok(CodingRate::Cr6),
            0x06 => Ok(CodingRate::Cr7),
            0x08 => Ok(CodingRate::Cr8),
            _ => Err(FrameError::InvalidRegister { field: "coding_rate", value }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderMode {
    Explicit,
    Implicit,
}

impl HeaderMode {
    pub fn name(&self) -> &'static str {
        match self {
            HeaderMode::Explicit => "EXPLICIT",
            HeaderMode::Implicit => "IMPLICIT",
        }
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, HeaderMode::Explicit)
    }
}

/// Symbolic value of a single link parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    Symbol(&'static str),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Symbol(s) => write!(f, "{}", s),
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// Anything that can describe itself as a set of named link parameters.
pub trait LinkParameters {
    fn parameters(&self) -> Vec<(&'static str, ParamValue)>;

    fn snapshot(&self) -> LinkSnapshot {
        LinkSnapshot(self.parameters().into_iter().collect())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkSnapshot(BTreeMap<&'static str, ParamValue>);

impl LinkSnapshot {
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    /// Names of parameters present on both sides whose values differ.
    pub fn mismatches(&self, other: &LinkSnapshot) -> Vec<&'static str> {
        self.0
            .iter()
            .filter_map(|(name, value)| match other.0.get(name) {
                Some(theirs) if theirs != value => Some(*name),
                _ => None,
            })
            .collect()
    }

    pub fn matches(&self, other: &LinkSnapshot) -> bool {
        self.mismatches(other).is_empty()
    }
}

impl fmt::Display for LinkSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Ground transceiver settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioLinkConfig {
    pub modulation: Modulation,
    pub frequency: u32,
    pub spreading_factor: u8,
    pub bandwidth: Bandwidth,
    pub coding_rate: CodingRate,
    pub header_mode: HeaderMode,
    pub sync_word: u8,
    pub crc_enabled: bool,
    pub low_data_rate_optimize: bool,
    pub preamble_length: u16,
    /// Fixed payload length used in implicit header mode.
    pub payload_length: u8,
    /// dBm
    pub tx_power: i8,
    pub auto_gain_control: bool,
    /// 1 (min) to 6 (max)
    pub lna_gain: u8,
    pub lna_boost: bool,
}

impl Default for RadioLinkConfig {
    fn default() -> Self {
        Self {
            modulation: Modulation::Lora,
            frequency: 436_700_000,
            spreading_factor: 10,
            bandwidth: Bandwidth::Bw250,
            coding_rate: CodingRate::Cr5,
            header_mode: HeaderMode::Explicit,
            sync_word: 0x12,
            crc_enabled: true,
            low_data_rate_optimize: true,
            preamble_length: 8,
            payload_length: 10,
            tx_power: 12,
            auto_gain_control: true,
            lna_gain: 5,
            lna_boost: false,
        }
    }
}

impl LinkParameters for RadioLinkConfig {
    fn parameters(&self) -> Vec<(&'static str, ParamValue)> {
        vec![
            ("mode", ParamValue::Symbol(self.modulation.name())),
            ("frequency", ParamValue::Int(self.frequency as i64)),
            ("spreading_factor", ParamValue::Int(self.spreading_factor as i64)),
            ("bandwidth", ParamValue::Symbol(self.bandwidth.name())),
            ("coding_rate", ParamValue::Symbol(self.coding_rate.name())),
            ("header_mode", ParamValue::Symbol(self.header_mode.name())),
            ("sync_word", ParamValue::Int(self.sync_word as i64)),
            ("check_crc", ParamValue::Bool(self.crc_enabled)),
            ("ldro", ParamValue::Bool(self.low_data_rate_optimize)),
            ("preamble_length", ParamValue::Int(self.preamble_length as i64)),
            ("tx_power", ParamValue::Int(self.tx_power as i64)),
            ("autogain_control", ParamValue::Bool(self.auto_gain_control)),
            ("lna_gain", ParamValue::Int(self.lna_gain as i64)),
            ("lna_boost", ParamValue::Bool(self.lna_boost)),
        ]
    }
}

/// Satellite radio settings. Carries only what the spacecraft is known to use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteLinkConfig {
    pub modulation: Modulation,
    pub bandwidth: Bandwidth,
    pub coding_rate: CodingRate,
    pub header_mode: HeaderMode,
    pub frequency: u32,
    pub low_data_rate_optimize: bool,
    pub crc_enabled: bool,
    pub spreading_factor: u8,
    pub sync_word: u8,
}

impl LinkParameters for SatelliteLinkConfig {
    fn parameters(&self) -> Vec<(&'static str, ParamValue)> {
        vec![
            ("mode", ParamValue::Symbol(self.modulation.name())),
            ("bandwidth", ParamValue::Symbol(self.bandwidth.name())),
            ("coding_rate", ParamValue::Symbol(self.coding_rate.name())),
            ("header_mode", ParamValue::Symbol(self.header_mode.name())),
            ("frequency", ParamValue::Int(self.frequency as i64)),
            ("ldro", ParamValue::Bool(self.low_data_rate_optimize)),
            ("check_crc", ParamValue::Bool(self.crc_enabled)),
            ("spreading_factor", ParamValue::Int(self.spreading_factor as i64)),
            ("sync_word", ParamValue::Int(self.sync_word as i64)),
        ]
    }
}
