use flate2::Crc;

pub mod bb_crypt;
mod bb_tables;
pub mod connection;
pub mod crypt;

pub use connection::{Connection, ConnectionError, FrameReader, FrameWriter};
pub use crypt::{round_to_block_size, Cipher};

/// CRC-32 as the client computes it over the guild card file.
pub fn crc32(data: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(data);
    crc.sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc32_known_values() {
        assert_eq!(crc32(&[]), 0);
        assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn test_crc32_guild_card_sized_buffer() {
        let zeros = vec![0u8; 54672];
        let first = crc32(&zeros);
        assert_eq!(first, crc32(&zeros));
        assert_ne!(first, 0);
        assert_ne!(first, crc32(&zeros[1..]));
    }
}
