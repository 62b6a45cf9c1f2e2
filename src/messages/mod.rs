//! Wire messages of the two supported game versions.
//!
//! A frame is a fixed-size header followed by a body. The header's size field
//! counts the whole message including the header, but not the zero padding
//! added to reach the cipher block size.

pub mod bb;
pub mod pc;

use crate::network::crypt::Cipher;
use std::net::{Ipv4Addr, SocketAddrV4};

pub use bb::BbMessage;
pub use pc::PcMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub code: u16,
    /// Full message length including the header.
    pub size: usize,
    pub flags: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("truncated {message}: need {needed} bytes, got {actual}")]
    Truncated {
        message: &'static str,
        needed: usize,
        actual: usize,
    },

    #[error("bad size field {size} (header is {header} bytes, frame is {actual} bytes)")]
    BadSize {
        size: usize,
        header: usize,
        actual: usize,
    },

    #[error("expected InitEncryption, got {0}")]
    NotInitEncryption(&'static str),
}

/// Keys and banner carried by an `InitEncryption` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitKeys<'a> {
    pub banner: &'a str,
    pub server_key: &'a [u8],
    pub client_key: &'a [u8],
}

/// A version-specific message set.
pub trait Message: Sized + Clone + PartialEq + Send + Sync + std::fmt::Debug + 'static {
    type Cipher: Cipher;

    const HEADER_SIZE: usize;

    /// Banner the server puts in its `InitEncryption`.
    const BANNER: &'static str;

    /// Parses the header at the start of `buf`.
    fn read_header(buf: &[u8]) -> Result<Header, CodecError>;

    /// Decodes one full frame. Trailing padding after `size` is ignored.
    fn decode(buf: &[u8]) -> Result<Self, CodecError>;

    /// Encodes the message without block padding.
    fn encode(&self) -> Vec<u8>;

    fn init_encryption(banner: &str, server_key: &[u8], client_key: &[u8]) -> Self;

    fn as_init_encryption(&self) -> Option<InitKeys<'_>>;

    fn redirect(target: SocketAddrV4) -> Self;

    fn as_redirect(&self) -> Option<SocketAddrV4>;

    /// Variant name, for logs and errors.
    fn name(&self) -> &'static str;
}

/// Validates the size field of a frame and returns `(header, body)`.
pub fn split_frame<M: Message>(buf: &[u8]) -> Result<(Header, &[u8]), CodecError> {
    let header = M::read_header(buf)?;
    if header.size < M::HEADER_SIZE || header.size > buf.len() {
        return Err(CodecError::BadSize {
            size: header.size,
            header: M::HEADER_SIZE,
            actual: buf.len(),
        });
    }
    Ok((header, &buf[M::HEADER_SIZE..header.size]))
}

// ============================================
// Field helpers
// ============================================

pub(crate) fn require(message: &'static str, body: &[u8], needed: usize) -> Result<(), CodecError> {
    if body.len() < needed {
        return Err(CodecError::Truncated {
            message,
            needed,
            actual: body.len(),
        });
    }
    Ok(())
}

pub(crate) fn put_fixed_bytes(out: &mut Vec<u8>, data: &[u8], width: usize) {
    let n = data.len().min(width);
    out.extend_from_slice(&data[..n]);
    out.resize(out.len() + (width - n), 0);
}

pub(crate) fn put_ascii(out: &mut Vec<u8>, s: &str, width: usize) {
    put_fixed_bytes(out, s.as_bytes(), width);
}

pub(crate) fn put_utf16(out: &mut Vec<u8>, s: &str, width: usize) {
    let encoded: Vec<u8> = s.encode_utf16().flat_map(u16::to_le_bytes).collect();
    put_fixed_bytes(out, &encoded, width);
}

/// Reads a null-terminated ASCII string.
pub(crate) fn get_ascii(data: &[u8]) -> String {
    let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    String::from_utf8_lossy(&data[..end]).into_owned()
}

/// Reads a null-terminated UTF-16LE string.
pub(crate) fn get_utf16(data: &[u8]) -> String {
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .take_while(|&u| u != 0)
        .collect();
    String::from_utf16_lossy(&units)
}

pub(crate) fn ip_octets(data: &[u8]) -> Ipv4Addr {
    Ipv4Addr::new(data[0], data[1], data[2], data[3])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_strings_pad_and_truncate() {
        let mut out = Vec::new();
        put_ascii(&mut out, "abc", 6);
        assert_eq!(out, b"abc\0\0\0");

        out.clear();
        put_ascii(&mut out, "abcdefgh", 4);
        assert_eq!(out, b"abcd");

        out.clear();
        put_utf16(&mut out, "Hi", 8);
        assert_eq!(out, [b'H', 0, b'i', 0, 0, 0, 0, 0]);
        assert_eq!(get_utf16(&out), "Hi");
    }

    #[test]
    fn test_get_ascii_stops_at_nul() {
        assert_eq!(get_ascii(b"user\0junk"), "user");
        assert_eq!(get_ascii(b"full"), "full");
    }

    #[test]
    fn test_split_frame_rejects_bad_size() {
        // Size smaller than the header.
        let buf = [2u8, 0, 0x04, 0];
        assert!(matches!(
            split_frame::<PcMessage>(&buf),
            Err(CodecError::BadSize { size: 2, .. })
        ));

        // Size larger than the frame.
        let buf = [12u8, 0, 0x04, 0, 0, 0, 0, 0];
        assert!(matches!(
            split_frame::<PcMessage>(&buf),
            Err(CodecError::BadSize { size: 12, .. })
        ));
    }

    #[test]
    fn test_split_frame_ignores_padding() {
        let buf = [6u8, 0, 0x13, 0, b'A', 0, 0, 0];
        let (header, body) = split_frame::<PcMessage>(&buf).unwrap();
        assert_eq!(header.size, 6);
        assert_eq!(body, &[b'A', 0]);
    }
}
