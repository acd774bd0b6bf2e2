//! Canned telemetry frames replayed by the emulated spacecraft

/// Length of every Norbi-family canned frame.
pub const CANNED_FRAME_LEN: usize = 143;

pub const STRATOSAT_BEACON_LEN: usize = 102;

pub const TMI_FRAMES: [[u8; CANNED_FRAME_LEN]; 9] = [
    [
        0x8E, 0x05, 0x00, 0x00, 0x0F, 0x0A, 0x06, 0x01, 0xC9, 0x00, 0x05, 0x00, 0x01, 0x00, 0x02, 0xF1,
        0x0F, 0x00, 0x00, 0x6B, 0xEA, 0xBE, 0x21, 0x7F, 0x02, 0x42, 0x52, 0x4B, 0x20, 0x4D, 0x57, 0x20,
        0x56, 0x45, 0x52, 0x3A, 0x30, 0x35, 0x61, 0x5F, 0x30, 0x31, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0E,
        0x01, 0x00, 0xFD, 0x07, 0x00, 0x00, 0x00, 0x02, 0x12, 0x00, 0x08, 0xDD, 0x0A, 0x82, 0xF1, 0xE5,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x2D, 0x00, 0xB6, 0x00, 0x07, 0x00, 0xF9, 0xFC,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0B, 0x04, 0x04, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x00,
        0x0A, 0x0C, 0xA7, 0x6C, 0x92, 0x60, 0x0A, 0xB3, 0x38, 0x0E, 0x0C, 0x00, 0x0C, 0x00, 0x00, 0x1B,
        0x09, 0xE6, 0x13, 0x4B, 0x05, 0x0A, 0x0D, 0x08, 0x00, 0x60, 0x10, 0x8A, 0x20, 0xA8, 0xA1,
    ],
    [
        0x8E, 0x05, 0x00, 0x00, 0x0F, 0x0A, 0x06, 0x01, 0xC9, 0x09, 0x1A, 0x00, 0x00, 0x00, 0x04, 0xF1,
        0x0F, 0x01, 0x00, 0xB4, 0x13, 0xD0, 0xF7, 0x1C, 0x28, 0x00, 0x00, 0x00, 0x00, 0xEC, 0x07, 0x00,
        0x00, 0x00, 0x02, 0x14, 0x0F, 0x00, 0x00, 0xDB, 0x0A, 0x89, 0x00, 0x00, 0x00, 0x00, 0x00, 0xED,
        0x16, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xD7, 0x9B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0xED, 0x07, 0x00, 0x00, 0x15, 0x15, 0x00, 0x00, 0x87, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x82, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x0E, 0x07, 0x35, 0x01, 0x02, 0x00, 0x02, 0x00, 0x07, 0x00, 0x01, 0x00, 0x84, 0x00, 0x84, 0x02,
        0x04, 0xFF, 0x00, 0xFF, 0x01, 0x60, 0x60, 0x63, 0xBA, 0x00, 0x00, 0x00, 0xB1, 0x15, 0x36, 0x14,
        0xD9, 0x2F, 0x4C, 0x06, 0x4B, 0x06, 0xF3, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0xAC, 0x81,
    ],
    [
        0x8E, 0x05, 0x00, 0x00, 0x0F, 0x0A, 0x06, 0x01, 0xC9, 0x09, 0x1B, 0x00, 0x00, 0x00, 0x06, 0xF1,
        0x0F, 0x02, 0x00, 0x8A, 0x10, 0xD3, 0xF7, 0x1C, 0x28, 0x91, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x14, 0x00, 0x00, 0x00, 0xD3, 0x01, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xE0,
        0xDB, 0xE8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0xEC, 0xDA, 0xE1, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x04, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F,
        0x0F, 0x7A, 0xA6, 0xFE, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x13, 0x3B, 0x34,
    ],
    [
        0x8E, 0x05, 0x00, 0x00, 0x0F, 0x0A, 0x06, 0x01, 0xC9, 0x09, 0x1C, 0x00, 0x00, 0x00, 0x08, 0xF1,
        0x0F, 0x03, 0x00, 0x67, 0x10, 0xD6, 0xF7, 0x1C, 0x28, 0x00, 0x00, 0x6F, 0x00, 0x6F, 0x00, 0xBB,
        0x00, 0xB6, 0x00, 0x22, 0x01, 0x25, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x31, 0xB2, 0xFE, 0x01, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x13, 0x9A, 0x19,
    ],
    [
        0x8E, 0x05, 0x00, 0x00, 0x0F, 0x0A, 0x06, 0x01, 0xC9, 0x09, 0x1D, 0x00, 0x00, 0x00, 0x0A, 0xF1,
        0x0F, 0x04, 0x00, 0x9B, 0x16, 0xD9, 0xF7, 0x1C, 0x28, 0x39, 0x00, 0x2D, 0x00, 0x2D, 0x00, 0x4F,
        0x00, 0x20, 0x03, 0xEC, 0x00, 0x9B, 0x20, 0x9A, 0x20, 0x97, 0x20, 0x9A, 0x20, 0x9C, 0x20, 0x9B,
        0x20, 0x09, 0x0A, 0x09, 0x7F, 0x7F, 0x12, 0xB7, 0x6C, 0x92, 0x60, 0x0A, 0x52, 0xCE, 0x0A, 0x00,
        0x00, 0xD3, 0x0A, 0xD2, 0x0A, 0xCF, 0x0A, 0xE8, 0x0A, 0x2A, 0x36, 0x43, 0x07, 0x07, 0x06, 0x05,
        0x06, 0x04, 0x05, 0x04, 0x0E, 0x0C, 0x00, 0x0C, 0x00, 0x6A, 0x00, 0x00, 0x00, 0x2C, 0x00, 0x2C,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x7D, 0x20, 0x7D, 0x20, 0x61, 0x00, 0x63, 0x00, 0x00, 0x37, 0x00,
        0xE4, 0x0C, 0xBE, 0x21, 0x3C, 0x29, 0xC4, 0x0C, 0x09, 0x0D, 0x07, 0x00, 0x60, 0x10, 0x7D, 0x20,
        0xF0, 0x21, 0x00, 0x00, 0xF1, 0x21, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00, 0x00, 0xB1, 0x07,
    ],
    [
        0x8E, 0x05, 0x00, 0x00, 0x0F, 0x0A, 0x06, 0x01, 0xC9, 0x09, 0x1E, 0x00, 0x00, 0x00, 0x18, 0xF1,
        0x0F, 0x05, 0x00, 0x01, 0x04, 0xDD, 0xF7, 0x1C, 0x28, 0x00, 0x00, 0x00, 0x80, 0x11, 0xFD, 0x55,
        0x41, 0x00, 0x00, 0x00, 0x60, 0x59, 0x9B, 0x7E, 0x41, 0x00, 0x00, 0x00, 0x80, 0x0B, 0xA1, 0x90,
        0x41, 0x00, 0x00, 0x00, 0xA0, 0x7D, 0x54, 0x27, 0x41, 0x00, 0x00, 0x00, 0x00, 0x00, 0xD6, 0xE0,
        0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x15, 0x04, 0x1D, 0x04, 0x33, 0x35, 0x00,
        0x9F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x75, 0xFF, 0x9B, 0x01, 0x1A, 0x00, 0x0F, 0x0C, 0x0C, 0x10, 0x06,
        0xCA, 0xFE, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x13, 0x0B, 0x86,
    ],
    [
        0x8E, 0x05, 0x00, 0x00, 0x0F, 0x0A, 0x06, 0x01, 0xC9, 0x09, 0x1F, 0x00, 0x00, 0x00, 0x1A, 0xF1,
        0x0F, 0x06, 0x00, 0x22, 0x15, 0xE0, 0xF7, 0x1C, 0x28, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFE, 0xFF, 0xF3,
        0xFF, 0xF9, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3E, 0xFB, 0x89, 0xF9, 0xB3, 0xFC, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xBF, 0xD5, 0xFE, 0x01, 0x00, 0x00, 0x00, 0x13, 0xA4, 0x84,
    ],
    [
        0x8E, 0x05, 0x00, 0x00, 0x0F, 0x0A, 0x06, 0x01, 0xC9, 0x09, 0x20, 0x00, 0x00, 0x00, 0x1C, 0xF1,
        0x0F, 0x07, 0x00, 0xC1, 0x06, 0xE3, 0xF7, 0x1C, 0x28, 0xF3, 0x00, 0x00, 0x00, 0xD1, 0x00, 0xC8,
        0x00, 0xCF, 0x00, 0xCB, 0x00, 0x3B, 0x10, 0x3B, 0x10, 0x00, 0x00, 0x00, 0x00, 0x31, 0x10, 0x3B,
        0x10, 0x3B, 0x10, 0x36, 0x10, 0x31, 0x10, 0x36, 0x10, 0x31, 0x10, 0x3B, 0x10, 0x64, 0x00, 0x64,
        0x64, 0x64, 0x64, 0x7B, 0x20, 0x00, 0x00, 0x7E, 0x20, 0x7D, 0x20, 0x00, 0x00, 0x00, 0x00, 0xFF,
        0x93, 0x7F, 0x00, 0x00, 0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x03, 0x03,
        0x00, 0x00, 0x00, 0x00, 0x8F, 0x61, 0x30, 0x00, 0x00, 0x00, 0xBF, 0x82, 0x15, 0x8F, 0x62, 0x00,
        0x8F, 0x62, 0x2B, 0xFF, 0x80, 0x01, 0x8F, 0x62, 0x2D, 0x8F, 0x62, 0x27, 0xFF, 0x00, 0x00, 0x02,
        0x00, 0x55, 0x05, 0x48, 0x12, 0x00, 0x00, 0x00, 0x00, 0x37, 0x00, 0x00, 0x00, 0x80, 0xFA,
    ],
    [
        0x8E, 0x05, 0x00, 0x00, 0x0F, 0x0A, 0x06, 0x01, 0xC9, 0x09, 0x22, 0x00, 0x00, 0x00, 0x1E, 0xF1,
        0x0F, 0x82, 0x60, 0x00, 0x00, 0xE8, 0xF7, 0x1C, 0x28, 0x00, 0x82, 0x00, 0x00, 0x00, 0xBA, 0x60,
        0x03, 0x11, 0x00, 0xC0, 0x04, 0x36, 0x14, 0x4B, 0x06, 0xFE, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x24, 0x00, 0x00, 0x00, 0xA0, 0xFF, 0x0F, 0x0F, 0xFE, 0xFE, 0xFE, 0xFE, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x24, 0x00, 0x00, 0x00, 0xF0, 0x00, 0x0F, 0x0F, 0xFE, 0xFE, 0xFE, 0xFE, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x7A, 0x00, 0x00, 0x00, 0x20, 0xFF, 0x03, 0x0F, 0xFE, 0xFE, 0xFE,
        0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x17, 0x00, 0x00, 0x00, 0x80, 0x01, 0x00, 0x0F, 0xFE,
        0xFE, 0xFE, 0xFE, 0x0E, 0x07, 0x44, 0x02, 0x03, 0x77, 0x4C, 0x08, 0x02, 0x00, 0x49, 0x08, 0x28,
        0x00, 0xEE, 0x6B, 0xFE, 0xFE, 0xB1, 0x15, 0xD9, 0x2F, 0x4C, 0x06, 0xF3, 0x0F, 0x46, 0xA4,
    ],
];

pub const PSS_FRAMES: [[u8; CANNED_FRAME_LEN]; 4] = [
    [
        0x8E, 0x01, 0x01, 0x01, 0x01, 0x0A, 0x06, 0x01, 0xCB, 0x0B, 0xA8, 0x00, 0x00, 0x00, 0x0E, 0xF1,
        0x0F, 0x02, 0x00, 0x00, 0x30, 0x00, 0x00, 0x6B, 0x68, 0x0E, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x02, 0x43, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3D, 0x00, 0x00, 0x00, 0x48, 0x00,
        0x00, 0x00, 0x76, 0x20, 0x74, 0x20, 0x74, 0x20, 0x72, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x36, 0x00, 0xE4, 0x0C, 0x76, 0x20, 0xE8, 0x0A, 0xFD, 0x01, 0xFE, 0x93, 0x05, 0x01,
        0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00,
        0x00, 0x73, 0x20, 0x77, 0x20, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x71, 0x20, 0x75,
        0x20, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x1E, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x2E, 0x00, 0x1D, 0x00, 0x00, 0x00, 0x00, 0x00, 0x89, 0xA4,
    ],
    [
        0x8E, 0x01, 0x01, 0x01, 0x01, 0x0A, 0x06, 0x01, 0xCB, 0x0B, 0xAD, 0x00, 0x00, 0x00, 0x0E, 0xF1,
        0x0F, 0x02, 0x00, 0x01, 0x30, 0x00, 0x00, 0x72, 0x68, 0x0E, 0x00, 0x02, 0x00, 0x63, 0x21, 0xFD,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x06, 0x0D, 0x07, 0x07, 0x35, 0x00, 0x91, 0x20,
        0x9B, 0x00, 0x8A, 0x20, 0xA3, 0x00, 0x72, 0x20, 0x8F, 0x20, 0x09, 0x00, 0x00, 0x00, 0x05, 0x00,
        0x00, 0x00, 0x1A, 0x00, 0xD8, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x00,
        0x0C, 0x00, 0xE2, 0xDC, 0xDE, 0xE4, 0xF1, 0xF3, 0xF7, 0xF3, 0x0A, 0x10, 0x0F, 0x08, 0xF9, 0xFA,
        0xFC, 0xFD, 0xF2, 0xF2, 0x00, 0x00, 0xFD, 0xFD, 0x00, 0x00, 0xE0, 0xF3, 0x0C, 0xFB, 0xF2, 0xFD,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xB8, 0x9B,
    ],
    [
        0x8E, 0x01, 0x01, 0x01, 0x01, 0x0A, 0x06, 0x01, 0xCB, 0x00, 0x8C, 0x00, 0x00, 0x00, 0x0E, 0xF1,
        0x0F, 0x02, 0x00, 0x02, 0x30, 0x00, 0x00, 0xB7, 0x5D, 0x03, 0x00, 0x02, 0x00, 0xEF, 0x0E, 0x00,
        0x00, 0x30, 0x5E, 0x61, 0xFF, 0xFF, 0xFF, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C,
        0x00, 0x0C, 0x64, 0x64, 0x64, 0x63, 0x63, 0x63, 0x64, 0x63, 0xC4, 0x0B, 0xC3, 0x0B, 0xB5, 0x0B,
        0xE8, 0x0B, 0xC2, 0x0B, 0xC0, 0x0B, 0xBD, 0x0B, 0xCD, 0x0B, 0x33, 0x00, 0x33, 0x00, 0x33, 0x00,
        0x56, 0x00, 0x38, 0x00, 0x38, 0x00, 0x34, 0x00, 0x37, 0x00, 0x03, 0x03, 0x02, 0x03, 0x03, 0x02,
        0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x07, 0x08, 0x06, 0x08, 0x08, 0x06, 0x07, 0x08, 0x06, 0x08,
        0x08, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x4C, 0x81,
    ],
    [
        0x8E, 0x01, 0x01, 0x01, 0x01, 0x0A, 0x06, 0x01, 0xCB, 0x00, 0x08, 0x00, 0x00, 0x00, 0x0E, 0xF1,
        0x0F, 0x02, 0x00, 0x03, 0x30, 0x00, 0x00, 0x2E, 0x46, 0x03, 0x00, 0x02, 0x00, 0xE0, 0x0F, 0xF5,
        0x0F, 0xE7, 0x0F, 0xEE, 0x0F, 0xE8, 0x0F, 0xEA, 0x0F, 0xE7, 0x0F, 0xEC, 0x0F, 0xE6, 0x0F, 0xE8,
        0x0F, 0xE7, 0x0F, 0xE7, 0x0F, 0xE1, 0x0F, 0xEB, 0x0F, 0xEB, 0x0F, 0xE9, 0x0F, 0xE0, 0x01, 0x98,
        0xFE, 0x18, 0x01, 0xD0, 0xFD, 0x18, 0x01, 0x98, 0xFE, 0xE0, 0x01, 0xA8, 0xFD, 0xF0, 0x00, 0xA8,
        0xFD, 0xF0, 0x00, 0xC0, 0xFE, 0xF0, 0x00, 0xC0, 0xFE, 0x18, 0x01, 0x98, 0xFE, 0x64, 0x0F, 0x64,
        0x0F, 0x64, 0x0F, 0x60, 0x09, 0x64, 0x0F, 0x64, 0x0F, 0x64, 0x0F, 0x64, 0x0F, 0x0F, 0x01, 0x0E,
        0x01, 0x0F, 0x01, 0x0E, 0x01, 0x0F, 0x01, 0x0E, 0x01, 0x0F, 0x01, 0x0E, 0x01, 0x73, 0x73, 0x73,
        0x74, 0x73, 0x73, 0x73, 0x73, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0xEF, 0x46,
    ],
];

pub const NORBI_BEACON: [u8; CANNED_FRAME_LEN] = [
    0x8E, 0xFF, 0xFF, 0xFF, 0xFF, 0x0A, 0x06, 0x01, 0xCB, 0x4C, 0xB5, 0x00, 0x00, 0x00, 0x00, 0xF1,
    0x0F, 0x00, 0x00, 0x66, 0x6E, 0x22, 0x87, 0x12, 0x00, 0x42, 0x52, 0x4B, 0x20, 0x4D, 0x57, 0x20,
    0x56, 0x45, 0x52, 0x3A, 0x30, 0x37, 0x5F, 0x30, 0x31, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0E,
    0x00, 0x00, 0xAE, 0x00, 0x00, 0x00, 0x00, 0x06, 0x0A, 0x00, 0x02, 0x25, 0x0B, 0x84, 0xF8, 0x2C,
    0x02, 0x00, 0x12, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x8E, 0xCA,
];

pub const STRATOSAT_BEACON: [u8; STRATOSAT_BEACON_LEN] = [
    0x99, 0xFC, 0x2E, 0x22, 0x6A, 0x4D, 0xFE, 0xBF, 0xD2, 0x4F, 0x56, 0xAD, 0x40, 0xCE, 0x2C, 0x10,
    0xC1, 0xBE, 0xB6, 0x34, 0x3C, 0xBA, 0x2E, 0x49, 0x8D, 0x07, 0xC8, 0x15, 0xD8, 0xF2, 0xA5, 0x51,
    0x8F, 0x02, 0xD4, 0x13, 0x83, 0x71, 0xAF, 0x5C, 0x99, 0x6F, 0xCF, 0x9C, 0x08, 0x55, 0xEC, 0x96,
    0xC8, 0x8E, 0x0D, 0x1A, 0x24, 0x1D, 0xB8, 0x45, 0xCF, 0x95, 0x02, 0x98, 0xD8, 0xF0, 0xA1, 0x0F,
    0xE7, 0x46, 0x37, 0xC3, 0xBD, 0x7D, 0xED, 0xD7, 0x8E, 0xA1, 0x84, 0x17, 0x0E, 0xA1, 0x84, 0x06,
    0x3C, 0xD5, 0x6C, 0xD7, 0x9F, 0x82, 0xC2, 0x8B, 0x37, 0xD3, 0x70, 0xFF, 0xEE, 0x89, 0x42, 0xC9,
    0x5B, 0x67, 0xC4, 0x9C, 0x59, 0x67,
];

/// Payload selectors (without their trailing 2 bytes) for the PSS blocks.
pub const PSS_SELECTORS: [[u8; 9]; 4] = [
    [0x90, 0x04, 0x00, 0x35, 0x80, 0x00, 0x00, 0x00, 0x00],
    [0x30, 0x0A, 0x00, 0x35, 0x80, 0x00, 0x00, 0x00, 0x00],
    [0xD0, 0x0F, 0x00, 0x35, 0x80, 0x00, 0x00, 0x00, 0x00],
    [0x70, 0x15, 0x00, 0x35, 0x80, 0x00, 0x00, 0x00, 0x00],
];

/// Message ids that request a TMI block; block index is `(msg_id - 1) / 2`.
pub const TMI_REQUEST_IDS: [u16; 5] = [1, 3, 5, 7, 9];

pub const TRAILER_MIN: u16 = 0x2334;
pub const TRAILER_MAX: u16 = 0xFEDA;

pub const TMI_COUNTER_OFFSET: usize = 19;
pub const TMI_CLOCK_OFFSET: usize = 21;
pub const PSS_CLOCK_OFFSET: usize = 23;
pub const BEACON_CLOCK_OFFSET: usize = 21;

pub fn tmi_index(msg_id: u16) -> Option<usize> {
    TMI_REQUEST_IDS
        .contains(&msg_id)
        .then(|| (msg_id as usize - 1) / 2)
}

pub fn pss_index(payload: &[u8]) -> Option<usize> {
    if payload.len() < 2 {
        return None;
    }
    let selector = &payload[..payload.len() - 2];
    PSS_SELECTORS.iter().position(|s| s.as_slice() == selector)
}

pub fn patch_trailer(frame: &mut [u8], value: u16) {
    let len = frame.len();
    frame[len - 2..].copy_from_slice(&value.to_le_bytes());
}

pub fn patch_counter(frame: &mut [u8], counter: u16) {
    frame[TMI_COUNTER_OFFSET..TMI_COUNTER_OFFSET + 2].copy_from_slice(&counter.to_le_bytes());
}

pub fn patch_clock(frame: &mut [u8], offset: usize, seconds: u32) {
    frame[offset..offset + 4].copy_from_slice(&seconds.to_le_bytes());
}
