//! Builders for uplink command frames and the onboard register protocol

use crate::types::{Address, HEADER_LEN, LENGTH_FIELD_OFFSET, MAX_PAYLOAD_LEN};
use crate::FrameError;

pub const MSG_READ_REGISTERS: u16 = 13;
pub const MSG_WRITE_REGISTERS: u16 = 15;

const CRC_SEED: u32 = 0x0104_1964;

const CRC_TABLE: [u32; 16] = [
    0x00000000, 0x04C11DB7, 0x09823B6E, 0x0D4326D9, 0x130476DC, 0x17C56B6B, 0x1A864DB2, 0x1E475005,
    0x2608EDB8, 0x22C9F00F, 0x2F8AD6D6, 0x2B4BCB61, 0x350C9B64, 0x31CD86D3, 0x3C8EA00A, 0x384FBDBD,
];

/// Header and payload of a command frame as ground software hands it to the
/// transceiver. The CRC trailer is appended on air, so `packet_length`
/// already accounts for it.
pub fn build_command_frame(
    tx_addr: Address,
    rx_addr: Address,
    transaction_id: u16,
    msg_id: u16,
    data: &[u8],
) -> Result<Vec<u8>, FrameError> {
    if data.len() > MAX_PAYLOAD_LEN {
        return Err(FrameError::PayloadTooLarge(data.len()));
    }
    let packet_length = HEADER_LEN + data.len() + 2 - LENGTH_FIELD_OFFSET;

    let mut frame = Vec::with_capacity(HEADER_LEN + data.len());
    frame.push(packet_length as u8);
    frame.extend_from_slice(&rx_addr.0);
    frame.extend_from_slice(&tx_addr.0);
    frame.extend_from_slice(&transaction_id.to_be_bytes());
    frame.extend_from_slice(&[0, 0]);
    frame.extend_from_slice(&msg_id.to_be_bytes());
    frame.extend_from_slice(data);
    Ok(frame)
}

/// Onboard variable identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarId {
    pub dev_id: u8,
    pub var_id: u8,
    pub offset: u32,
}

impl VarId {
    pub fn new(dev_id: u8, var_id: u8, offset: u32) -> Self {
        Self { dev_id, var_id, offset }
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        let packed = ((self.dev_id as u32) << 28)
            .wrapping_add((self.var_id as u32) << 24)
            .wrapping_add(self.offset << 3);
        packed.to_le_bytes()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterValue {
    /// Written as its minimal little-endian representation.
    Int(u64),
    Bytes(Vec<u8>),
}

impl RegisterValue {
    fn encoded(&self) -> Vec<u8> {
        match self {
            RegisterValue::Int(v) => {
                let len = ((64 - v.leading_zeros()) as usize + 7) / 8;
                v.to_le_bytes()[..len].to_vec()
            }
            RegisterValue::Bytes(b) => b.clone(),
        }
    }
}

fn crc_step(mut crc: u32) -> u32 {
    for _ in 0..8 {
        crc = (crc << 4) ^ CRC_TABLE[(crc >> 28) as usize];
    }
    crc
}

fn register_crc(board_time: u32, words: impl Iterator<Item = u32>) -> u32 {
    let mut crc = crc_step(!(board_time ^ CRC_SEED));
    for word in words {
        crc = crc_step(crc ^ word);
    }
    crc
}

pub fn read_registers_message(vars: &[(VarId, u8)]) -> Vec<u8> {
    let mut msg = Vec::with_capacity(vars.len() * 5 + 4);
    for (id, len) in vars {
        msg.extend_from_slice(&id.to_bytes());
        msg.push(*len);
    }
    msg.extend_from_slice(&[0; 4]);
    msg
}

/// `board_time` is the onboard clock as last reported in a beacon.
pub fn write_registers_message(vars: &[(VarId, RegisterValue)], board_time: u32) -> Vec<u8> {
    let mut msg = Vec::new();
    for (id, value) in vars {
        let bytes = value.encoded();
        msg.extend_from_slice(&id.to_bytes());
        msg.push(bytes.len() as u8);
        msg.extend_from_slice(&bytes);
    }
    msg.extend_from_slice(&[0; 4]);
    let pad = msg.len() % 4;
    if pad > 0 {
        msg.resize(msg.len() + 4 - pad, 0);
    }

    let words = msg
        .chunks_exact(4)
        .map(|w| u32::from_le_bytes([w[0], w[1], w[2], w[3]]));
    let crc = register_crc(board_time, words);
    msg.extend_from_slice(&crc.to_le_bytes());
    msg
}

pub fn read_register(
    tx_addr: Address,
    rx_addr: Address,
    transaction_id: u16,
    vars: &[(VarId, u8)],
) -> Result<Vec<u8>, FrameError> {
    let msg = read_registers_message(vars);
    build_command_frame(tx_addr, rx_addr, transaction_id, MSG_READ_REGISTERS, &msg)
}

pub fn write_register(
    tx_addr: Address,
    rx_addr: Address,
    transaction_id: u16,
    vars: &[(VarId, RegisterValue)],
    board_time: u32,
) -> Result<Vec<u8>, FrameError> {
    let msg = write_registers_message(vars, board_time);
    build_command_frame(tx_addr, rx_addr, transaction_id, MSG_WRITE_REGISTERS, &msg)
}
