//! CRC-16/Modbus checksum
//!
//! x^16 + x^15 + x^2 + 1 (0x8005), processed reflected (0xA001),
//! initial value 0xFFFF, no final xor. Every robot-link frame carries this
//! checksum over its payload.

const CRC_MASK: u16 = 0xA001;
const CRC_INIT: u16 = 0xFFFF;

const CRC_TABLE: [u16; 256] = build_table();

const fn build_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u16;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x0001 != 0 {
                (crc >> 1) ^ CRC_MASK
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Calculate the CRC-16/Modbus checksum of `data`
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc = CRC_INIT;
    for &byte in data {
        let table_index = ((crc ^ u16::from(byte)) & 0xFF) as usize;
        crc = (crc >> 8) ^ CRC_TABLE[table_index];
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crc16_bitwise(data: &[u8]) -> u16 {
        let mut crc = CRC_INIT;
        for &byte in data {
            crc ^= u16::from(byte);
            for _ in 0..8 {
                if crc & 0x0001 != 0 {
                    crc = (crc >> 1) ^ CRC_MASK;
                } else {
                    crc >>= 1;
                }
            }
        }
        crc
    }

    #[test]
    fn test_check_value() {
        assert_eq!(crc16(b"123456789"), 0x4B37);
    }

    #[test]
    fn test_empty_is_init() {
        assert_eq!(crc16(&[]), 0xFFFF);
    }

    #[test]
    fn test_twist_payload() {
        // vx=-1000, vy=2000, w=-300 as little-endian i16
        assert_eq!(crc16(&[0x18, 0xfc, 0xd0, 0x07, 0xd4, 0xfe]), 0x5604);
    }

    #[test]
    fn test_table_matches_bitwise() {
        let data: Vec<u8> = (0..=255u8).chain((0..=255u8).rev()).collect();
        for len in [0, 1, 2, 7, 64, 255, data.len()] {
            assert_eq!(crc16(&data[..len]), crc16_bitwise(&data[..len]), "len {}", len);
        }
    }

    #[test]
    fn test_table_entries() {
        assert_eq!(CRC_TABLE[0], 0x0000);
        assert_eq!(CRC_TABLE[1], 0xC0C1);
        assert_eq!(CRC_TABLE[255], 0x4040);
    }
}
