//! PC patch-server messages. 4-byte header: size u16, code u8, flags u8.

use super::{
    get_ascii, get_utf16, ip_octets, put_ascii, put_fixed_bytes, put_utf16, require, split_frame,
    CodecError, Header, InitKeys, Message,
};
use crate::network::crypt::{round_to_block_size, PcCipher};
use bytes::Bytes;
use std::net::SocketAddrV4;

pub const PC_HEADER_SIZE: usize = 4;

const BANNER_SIZE: usize = 64;
const KEY_SIZE: usize = 4;
/// Longest welcome text body that still fits the u16 size field.
const WELCOME_MESSAGE_MAX_BYTES: usize = (u16::MAX as usize - PC_HEADER_SIZE) & !3;

pub const CODE_INIT_ENCRYPTION: u8 = 0x02;
pub const CODE_LOGIN: u8 = 0x04;
pub const CODE_PATCH_LIST_START: u8 = 0x0B;
pub const CODE_PATCH_LIST_END: u8 = 0x0D;
pub const CODE_PATCH_LIST_OK: u8 = 0x10;
pub const CODE_PATCH_DONE: u8 = 0x12;
pub const CODE_WELCOME_MESSAGE: u8 = 0x13;
pub const CODE_REDIRECT: u8 = 0x14;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitEncryption {
    pub banner: String,
    pub server_key: Vec<u8>,
    pub client_key: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PcMessage {
    /// `None` is the client's bodiless acknowledgement of the handshake.
    InitEncryption(Option<InitEncryption>),
    Login,
    PatchListStart,
    PatchListEnd,
    PatchListOk,
    PatchDone,
    WelcomeMessage(String),
    Redirect(SocketAddrV4),
    Unknown { code: u8, flags: u8, body: Bytes },
}

impl PcMessage {
    fn code(&self) -> u8 {
        match self {
            Self::InitEncryption(_) => CODE_INIT_ENCRYPTION,
            Self::Login => CODE_LOGIN,
            Self::PatchListStart => CODE_PATCH_LIST_START,
            Self::PatchListEnd => CODE_PATCH_LIST_END,
            Self::PatchListOk => CODE_PATCH_LIST_OK,
            Self::PatchDone => CODE_PATCH_DONE,
            Self::WelcomeMessage(_) => CODE_WELCOME_MESSAGE,
            Self::Redirect(_) => CODE_REDIRECT,
            Self::Unknown { code, .. } => *code,
        }
    }

    fn encode_body(&self, out: &mut Vec<u8>) {
        match self {
            Self::InitEncryption(Some(init)) => {
                put_ascii(out, &init.banner, BANNER_SIZE);
                put_fixed_bytes(out, &init.server_key, KEY_SIZE);
                put_fixed_bytes(out, &init.client_key, KEY_SIZE);
            }
            Self::WelcomeMessage(text) => {
                let width = round_to_block_size(2 * text.encode_utf16().count(), 4)
                    .min(WELCOME_MESSAGE_MAX_BYTES);
                put_utf16(out, text, width);
            }
            Self::Redirect(addr) => {
                out.extend_from_slice(&addr.ip().octets());
                out.extend_from_slice(&addr.port().to_be_bytes());
                out.extend_from_slice(&[0, 0]);
            }
            Self::Unknown { body, .. } => out.extend_from_slice(body),
            _ => {}
        }
    }
}

impl Message for PcMessage {
    type Cipher = PcCipher;

    const HEADER_SIZE: usize = PC_HEADER_SIZE;
    const BANNER: &'static str = "Patch Server. Copyright SonicTeam, LTD. 2001";

    fn read_header(buf: &[u8]) -> Result<Header, CodecError> {
        require("header", buf, PC_HEADER_SIZE)?;
        Ok(Header {
            size: u16::from_le_bytes([buf[0], buf[1]]) as usize,
            code: buf[2] as u16,
            flags: buf[3] as u32,
        })
    }

    fn decode(buf: &[u8]) -> Result<Self, CodecError> {
        let (header, body) = split_frame::<Self>(buf)?;
        let msg = match header.code as u8 {
            CODE_INIT_ENCRYPTION if body.is_empty() => Self::InitEncryption(None),
            CODE_INIT_ENCRYPTION => {
                require("InitEncryption", body, BANNER_SIZE + 2 * KEY_SIZE)?;
                let keys = &body[BANNER_SIZE..];
                Self::InitEncryption(Some(InitEncryption {
                    banner: get_ascii(&body[..BANNER_SIZE]),
                    server_key: keys[..KEY_SIZE].to_vec(),
                    client_key: keys[KEY_SIZE..2 * KEY_SIZE].to_vec(),
                }))
            }
            CODE_LOGIN => Self::Login,
            CODE_PATCH_LIST_START => Self::PatchListStart,
            CODE_PATCH_LIST_END => Self::PatchListEnd,
            CODE_PATCH_LIST_OK => Self::PatchListOk,
            CODE_PATCH_DONE => Self::PatchDone,
            CODE_WELCOME_MESSAGE => Self::WelcomeMessage(get_utf16(body)),
            CODE_REDIRECT => {
                require("Redirect", body, 6)?;
                let port = u16::from_be_bytes([body[4], body[5]]);
                Self::Redirect(SocketAddrV4::new(ip_octets(body), port))
            }
            code => Self::Unknown {
                code,
                flags: header.flags as u8,
                body: Bytes::copy_from_slice(body),
            },
        };
        Ok(msg)
    }

    fn encode(&self) -> Vec<u8> {
        let mut out = vec![0u8; PC_HEADER_SIZE];
        self.encode_body(&mut out);
        let size = out.len() as u16;
        out[..2].copy_from_slice(&size.to_le_bytes());
        out[2] = self.code();
        out[3] = match self {
            Self::Unknown { flags, .. } => *flags,
            _ => 0,
        };
        out
    }

    fn init_encryption(banner: &str, server_key: &[u8], client_key: &[u8]) -> Self {
        Self::InitEncryption(Some(InitEncryption {
            banner: banner.to_string(),
            server_key: server_key.to_vec(),
            client_key: client_key.to_vec(),
        }))
    }

    fn as_init_encryption(&self) -> Option<InitKeys<'_>> {
        match self {
            Self::InitEncryption(Some(init)) => Some(InitKeys {
                banner: &init.banner,
                server_key: &init.server_key,
                client_key: &init.client_key,
            }),
            _ => None,
        }
    }

    fn redirect(target: SocketAddrV4) -> Self {
        Self::Redirect(target)
    }

    fn as_redirect(&self) -> Option<SocketAddrV4> {
        match self {
            Self::Redirect(addr) => Some(*addr),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::InitEncryption(_) => "InitEncryption",
            Self::Login => "Login",
            Self::PatchListStart => "PatchListStart",
            Self::PatchListEnd => "PatchListEnd",
            Self::PatchListOk => "PatchListOk",
            Self::PatchDone => "PatchDone",
            Self::WelcomeMessage(_) => "WelcomeMessage",
            Self::Redirect(_) => "Redirect",
            Self::Unknown { .. } => "Unknown",
        }
    }
}
