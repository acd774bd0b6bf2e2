use std::fmt;

use serde::{Deserialize, Serialize};

pub const HEADER_LEN: usize = 15;
pub const CRC_LEN: usize = 2;
pub const MIN_FRAME_LEN: usize = HEADER_LEN + CRC_LEN;
pub const MAX_PAYLOAD_LEN: usize = 240;

/// Bytes of a frame not counted by its `packet_length` field.
pub const LENGTH_FIELD_OFFSET: usize = 3;

/// Raw 4-byte link address, compared byte for byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(pub [u8; 4]);

impl Address {
    pub const BROADCAST: Address = Address([0xFF; 4]);

    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Address([a, b, c, d])
    }

    pub fn octets(&self) -> [u8; 4] {
        self.0
    }
}

impl From<[u8; 4]> for Address {
    fn from(raw: [u8; 4]) -> Self {
        Address(raw)
    }
}

impl From<u32> for Address {
    fn from(raw: u32) -> Self {
        Address(raw.to_be_bytes())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_quad() {
        assert_eq!(Address::new(10, 6, 1, 201).to_string(), "10.6.1.201");
        assert_eq!(Address::BROADCAST.to_string(), "255.255.255.255");
    }

    #[test]
    fn test_u32_is_big_endian() {
        assert_eq!(Address::from(0x0A0601C9), Address::new(10, 6, 1, 201));
    }
}
