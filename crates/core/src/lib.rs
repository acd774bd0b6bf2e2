//! frame codec, link configuration and physical-layer timing for the simulated UHF link

use thiserror::Error;

pub mod commands;
pub mod config;
pub mod frame;
pub mod timing;
pub mod types;

pub use commands::{build_command_frame, read_register, write_register, RegisterValue, VarId};
pub use config::{
    Bandwidth, CodingRate, HeaderMode, LinkParameters, LinkSnapshot, Modulation, ParamValue,
    RadioLinkConfig, SatelliteLinkConfig,
};
pub use frame::RadioFrame;
pub use timing::{doppler_shift_hz, time_on_air, AirTime};
pub use types::Address;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("frame too short: {0} bytes, header needs {h}", h = types::HEADER_LEN)]
    TooShort(usize),

    #[error("frame of {0} bytes has no room for the CRC trailer")]
    MissingCrc(usize),

    #[error("packet length field is {declared}, expected {expected}")]
    LengthMismatch { declared: u8, expected: usize },

    #[error("payload of {0} bytes exceeds {max}", max = types::MAX_PAYLOAD_LEN)]
    PayloadTooLarge(usize),

    #[error("invalid {field} register value {value:#04x}")]
    InvalidRegister { field: &'static str, value: u8 },
}
