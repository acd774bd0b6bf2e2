//! Transport frame shared by both ends of the link
//!
//! | len | rx addr | tx addr | transaction | res | msg id | payload    | crc16 |
//! |-----|---------|---------|-------------|-----|--------|------------|-------|
//! | 1   | 4       | 4       | 2           | 2   | 2      | <= 240     | 2     |
//!
//! Multi-byte header fields are big-endian. The CRC is carried as-is and
//! never recomputed here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Address, CRC_LEN, HEADER_LEN, LENGTH_FIELD_OFFSET, MAX_PAYLOAD_LEN};
use crate::FrameError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioFrame {
    packet_length: u8,
    rx_addr: Address,
    tx_addr: Address,
    transaction_id: u16,
    reserved: u16,
    msg_id: u16,
    payload: Vec<u8>,
    crc16: u16,
}

impl RadioFrame {
    pub fn new(
        rx_addr: Address,
        tx_addr: Address,
        transaction_id: u16,
        msg_id: u16,
        payload: Vec<u8>,
        crc16: u16,
    ) -> Result<Self, FrameError> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(FrameError::PayloadTooLarge(payload.len()));
        }
        let total = HEADER_LEN + payload.len() + CRC_LEN;

        Ok(Self {
            packet_length: (total - LENGTH_FIELD_OFFSET) as u8,
            rx_addr,
            tx_addr,
            transaction_id,
            reserved: 0,
            msg_id,
            payload,
            crc16,
        })
    }

    pub fn decode(raw: &[u8]) -> Result<Self, FrameError> {
        if raw.len() < HEADER_LEN {
            return Err(FrameError::TooShort(raw.len()));
        }
        let expected = raw.len() - LENGTH_FIELD_OFFSET;
        if raw[0] as usize != expected {
            return Err(FrameError::LengthMismatch {
                declared: raw[0],
                expected,
            });
        }
        if raw.len() < HEADER_LEN + CRC_LEN {
            return Err(FrameError::MissingCrc(raw.len()));
        }
        if raw.len() > HEADER_LEN + MAX_PAYLOAD_LEN + CRC_LEN {
            return Err(FrameError::PayloadTooLarge(raw.len() - HEADER_LEN - CRC_LEN));
        }

        let crc_start = raw.len() - CRC_LEN;
        Ok(Self {
            packet_length: raw[0],
            rx_addr: Address([raw[1], raw[2], raw[3], raw[4]]),
            tx_addr: Address([raw[5], raw[6], raw[7], raw[8]]),
            transaction_id: u16::from_be_bytes([raw[9], raw[10]]),
            reserved: u16::from_be_bytes([raw[11], raw[12]]),
            msg_id: u16::from_be_bytes([raw[13], raw[14]]),
            payload: raw[HEADER_LEN..crc_start].to_vec(),
            crc16: u16::from_be_bytes([raw[crc_start], raw[crc_start + 1]]),
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.push(self.packet_length);
        out.extend_from_slice(&self.rx_addr.0);
        out.extend_from_slice(&self.tx_addr.0);
        out.extend_from_slice(&self.transaction_id.to_be_bytes());
        out.extend_from_slice(&self.reserved.to_be_bytes());
        out.extend_from_slice(&self.msg_id.to_be_bytes());
        out.extend_from_slice(&self.payload);
        out.extend_from_slice(&self.crc16.to_be_bytes());
        out
    }

    /// Total encoded length in bytes.
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.payload.len() + CRC_LEN
    }

    pub fn packet_length(&self) -> u8 {
        self.packet_length
    }

    pub fn rx_addr(&self) -> Address {
        self.rx_addr
    }

    pub fn tx_addr(&self) -> Address {
        self.tx_addr
    }

    pub fn transaction_id(&self) -> u16 {
        self.transaction_id
    }

    pub fn reserved(&self) -> u16 {
        self.reserved
    }

    pub fn msg_id(&self) -> u16 {
        self.msg_id
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn crc16(&self) -> u16 {
        self.crc16
    }
}

impl fmt::Display for RadioFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frame length: {}", self.packet_length)?;
        writeln!(f, "TX Address: {}", self.tx_addr)?;
        writeln!(f, "RX Address: {}", self.rx_addr)?;
        writeln!(f, "Transaction number: {}", self.transaction_id)?;
        writeln!(f, "Msg ID: {}", self.msg_id)?;
        let payload: Vec<String> = self.payload.iter().map(|b| format!("{:02X}", b)).collect();
        writeln!(f, "Msg: {}", payload.join(" "))?;
        write!(f, "CRC16: 0x{:04X}", self.crc16)
    }
}
