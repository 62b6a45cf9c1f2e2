//! Blue Burst messages. 8-byte header: size u16, code u16, flags u32.

use super::{
    get_ascii, get_utf16, ip_octets, put_ascii, put_fixed_bytes, put_utf16, require, split_frame,
    CodecError, Header, InitKeys, Message,
};
use crate::network::bb_crypt::{BbCipher, BB_KEY_SIZE};
use bytes::{Buf, BufMut, Bytes};
use std::net::SocketAddrV4;

pub const BB_HEADER_SIZE: usize = 8;

const BANNER_SIZE: usize = 96;

pub const CODE_INIT_ENCRYPTION: u16 = 0x0003;
pub const CODE_DISCONNECT: u16 = 0x0005;
pub const CODE_REDIRECT: u16 = 0x0019;
pub const CODE_AUTHENTICATE: u16 = 0x0093;
pub const CODE_GUILD_CARD_HEADER: u16 = 0x01DC;
pub const CODE_GUILD_CARD_CHUNK: u16 = 0x02DC;
pub const CODE_GET_GUILD_CARD_CHUNK: u16 = 0x03DC;
pub const CODE_GET_ACCOUNT: u16 = 0x00E0;
pub const CODE_ACCOUNT: u16 = 0x00E2;
pub const CODE_CHARACTER_SELECT: u16 = 0x00E3;
pub const CODE_CHARACTER_SELECT_RESPONSE: u16 = 0x00E5;
pub const CODE_AUTHENTICATION_RESPONSE: u16 = 0x00E6;
pub const CODE_CHECKSUM: u16 = 0x01E8;
pub const CODE_CHECKSUM_RESPONSE: u16 = 0x02E8;
pub const CODE_GET_GUILD_CARD_HEADER: u16 = 0x03E8;
pub const CODE_FILE_LIST: u16 = 0x01EB;
pub const CODE_FILE_CHUNK: u16 = 0x02EB;
pub const CODE_GET_FILE_CHUNK: u16 = 0x03EB;
pub const CODE_GET_FILE_LIST: u16 = 0x04EB;

const AUTHENTICATE_SIZE: usize = 84;
const ACCOUNT_GUILD_CARD_POS: usize = 276 + KEY_CONFIG_SIZE;
const KEY_CONFIG_SIZE: usize = 420;
const CHARACTER_SIZE: usize = 128;
const FILE_ENTRY_SIZE: usize = 76;
/// Most entries a single FileList frame can carry.
pub const MAX_FILE_LIST_ENTRIES: usize = (u16::MAX as usize - BB_HEADER_SIZE) / FILE_ENTRY_SIZE;
const FILENAME_SIZE: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticationStatus {
    Success,
    Error,
    UnknownUser,
}

impl AuthenticationStatus {
    fn to_wire(self) -> u32 {
        match self {
            Self::Success => 0,
            Self::Error => 1,
            Self::UnknownUser => 8,
        }
    }

    fn from_wire(v: u32) -> Self {
        match v {
            0 => Self::Success,
            8 => Self::UnknownUser,
            _ => Self::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticate {
    pub guild_card: i32,
    pub version: i16,
    pub team_id: i32,
    pub username: String,
    pub password: String,
}

/// Character summary shown on the character select screen.
#[derive(Debug, Clone, PartialEq)]
pub struct PsoCharacter {
    pub slot: u32,
    pub exp: u32,
    pub level: u32,
    pub guild_card_string: String,
    pub name_color: u32,
    pub model: u32,
    pub name_color_checksum: u32,
    pub section_id: u8,
    pub class: u8,
    pub costume: u16,
    pub skin: u16,
    pub face: u16,
    pub head: u16,
    pub hair: u16,
    pub hair_red: u16,
    pub hair_green: u16,
    pub hair_blue: u16,
    pub prop_x: f32,
    pub prop_y: f32,
    pub name: String,
    pub play_time: u32,
}

impl PsoCharacter {
    /// Placeholder character for an empty slot.
    pub fn placeholder(slot: u8) -> Self {
        Self {
            slot: slot as u32,
            exp: 0,
            level: 1,
            guild_card_string: String::new(),
            name_color: 0,
            model: 0,
            name_color_checksum: 0,
            section_id: 0,
            class: 0,
            costume: 0,
            skin: 0,
            face: 0,
            head: 0,
            hair: 0,
            hair_red: 0,
            hair_green: 0,
            hair_blue: 0,
            prop_x: 1.0,
            prop_y: 1.0,
            name: format!("Phantasmal {}", slot),
            play_time: 0,
        }
    }

    fn encode(&self, out: &mut Vec<u8>) {
        out.put_u32_le(self.slot);
        out.put_u32_le(self.exp);
        out.put_u32_le(self.level);
        put_ascii(out, &self.guild_card_string, 16);
        out.put_bytes(0, 8);
        out.put_u32_le(self.name_color);
        out.put_u32_le(self.model);
        out.put_bytes(0, 12);
        out.put_u32_le(self.name_color_checksum);
        out.put_u8(self.section_id);
        out.put_u8(self.class);
        out.put_u8(0); // v2 flags
        out.put_u8(0); // version
        out.put_u32_le(0); // v1 flags
        for v in [
            self.costume,
            self.skin,
            self.face,
            self.head,
            self.hair,
            self.hair_red,
            self.hair_green,
            self.hair_blue,
        ] {
            out.put_u16_le(v);
        }
        out.put_f32_le(self.prop_x);
        out.put_f32_le(self.prop_y);
        put_utf16(out, &self.name, 32);
        out.put_u32_le(self.play_time);
    }

    fn decode(body: &[u8]) -> Result<Self, CodecError> {
        require("CharacterSelectResponse", body, CHARACTER_SIZE)?;
        let mut b = body;
        let slot = b.get_u32_le();
        let exp = b.get_u32_le();
        let level = b.get_u32_le();
        let guild_card_string = get_ascii(&b[..16]);
        b.advance(16 + 8);
        let name_color = b.get_u32_le();
        let model = b.get_u32_le();
        b.advance(12);
        let name_color_checksum = b.get_u32_le();
        let section_id = b.get_u8();
        let class = b.get_u8();
        b.advance(2 + 4);
        let mut look = [0u16; 8];
        for v in look.iter_mut() {
            *v = b.get_u16_le();
        }
        let prop_x = b.get_f32_le();
        let prop_y = b.get_f32_le();
        let name = get_utf16(&b[..32]);
        b.advance(32);
        let play_time = b.get_u32_le();
        let [costume, skin, face, head, hair, hair_red, hair_green, hair_blue] = look;
        Ok(Self {
            slot,
            exp,
            level,
            guild_card_string,
            name_color,
            model,
            name_color_checksum,
            section_id,
            class,
            costume,
            skin,
            face,
            head,
            hair,
            hair_red,
            hair_green,
            hair_blue,
            prop_x,
            prop_y,
            name,
            play_time,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileListEntry {
    pub size: u32,
    pub checksum: u32,
    pub offset: u32,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BbMessage {
    InitEncryption {
        banner: String,
        server_key: Vec<u8>,
        client_key: Vec<u8>,
    },
    Disconnect,
    Redirect(SocketAddrV4),
    Authenticate(Authenticate),
    AuthenticationResponse {
        status: AuthenticationStatus,
        guild_card: i32,
        team_id: i32,
    },
    GetAccount,
    Account {
        guild_card: i32,
        team_id: i32,
    },
    CharacterSelect {
        slot: u8,
        select: bool,
    },
    CharacterSelectResponse(PsoCharacter),
    Checksum(u32),
    ChecksumResponse(bool),
    GetGuildCardHeader,
    GuildCardHeader {
        size: u32,
        checksum: u32,
    },
    GetGuildCardChunk {
        chunk_no: u32,
        cont: bool,
    },
    GuildCardChunk {
        chunk_no: u32,
        data: Bytes,
    },
    GetFileList,
    FileList(Vec<FileListEntry>),
    GetFileChunk,
    FileChunk {
        chunk_no: u32,
        data: Bytes,
    },
    Unknown {
        code: u16,
        flags: u32,
        body: Bytes,
    },
}

impl BbMessage {
    fn code(&self) -> u16 {
        match self {
            Self::InitEncryption { .. } => CODE_INIT_ENCRYPTION,
            Self::Disconnect => CODE_DISCONNECT,
            Self::Redirect(_) => CODE_REDIRECT,
            Self::Authenticate(_) => CODE_AUTHENTICATE,
            Self::AuthenticationResponse { .. } => CODE_AUTHENTICATION_RESPONSE,
            Self::GetAccount => CODE_GET_ACCOUNT,
            Self::Account { .. } => CODE_ACCOUNT,
            Self::CharacterSelect { .. } => CODE_CHARACTER_SELECT,
            Self::CharacterSelectResponse(_) => CODE_CHARACTER_SELECT_RESPONSE,
            Self::Checksum(_) => CODE_CHECKSUM,
            Self::ChecksumResponse(_) => CODE_CHECKSUM_RESPONSE,
            Self::GetGuildCardHeader => CODE_GET_GUILD_CARD_HEADER,
            Self::GuildCardHeader { .. } => CODE_GUILD_CARD_HEADER,
            Self::GetGuildCardChunk { .. } => CODE_GET_GUILD_CARD_CHUNK,
            Self::GuildCardChunk { .. } => CODE_GUILD_CARD_CHUNK,
            Self::GetFileList => CODE_GET_FILE_LIST,
            Self::FileList(_) => CODE_FILE_LIST,
            Self::GetFileChunk => CODE_GET_FILE_CHUNK,
            Self::FileChunk { .. } => CODE_FILE_CHUNK,
            Self::Unknown { code, .. } => *code,
        }
    }

    fn flags(&self) -> u32 {
        match self {
            Self::FileList(entries) => entries.len() as u32,
            Self::Unknown { flags, .. } => *flags,
            _ => 0,
        }
    }

    fn encode_body(&self, out: &mut Vec<u8>) {
        match self {
            Self::InitEncryption {
                banner,
                server_key,
                client_key,
            } => {
                put_ascii(out, banner, BANNER_SIZE);
                put_fixed_bytes(out, server_key, BB_KEY_SIZE);
                put_fixed_bytes(out, client_key, BB_KEY_SIZE);
            }
            Self::Redirect(addr) => {
                out.put_slice(&addr.ip().octets());
                out.put_u16_le(addr.port());
                out.put_u16_le(0);
            }
            Self::Authenticate(auth) => {
                out.put_u32_le(0);
                out.put_i32_le(auth.guild_card);
                out.put_i16_le(auth.version);
                out.put_bytes(0, 6);
                out.put_i32_le(auth.team_id);
                put_ascii(out, &auth.username, 16);
                out.put_bytes(0, 32);
                put_ascii(out, &auth.password, 16);
            }
            Self::AuthenticationResponse {
                status,
                guild_card,
                team_id,
            } => {
                out.put_u32_le(status.to_wire());
                out.put_u32_le(0x10000);
                out.put_i32_le(*guild_card);
                out.put_i32_le(*team_id);
                out.put_u32_le(if *status == AuthenticationStatus::Success {
                    0xDEADBEEF
                } else {
                    0
                });
                out.put_bytes(0, 36);
                out.put_u32_le(0x102);
            }
            Self::Account {
                guild_card,
                team_id,
            } => {
                out.put_bytes(0, 276);
                // Key and gamepad configuration, left at client defaults.
                out.put_bytes(0, KEY_CONFIG_SIZE);
                out.put_i32_le(*guild_card);
                out.put_i32_le(*team_id);
                // Team data.
                out.put_bytes(0, 2092);
                // All team rewards enabled.
                out.put_u32_le(0xFFFF_FFFF);
                out.put_u32_le(0xFFFF_FFFF);
            }
            Self::CharacterSelect { slot, select } => {
                out.put_u8(*slot);
                out.put_bytes(0, 3);
                out.put_u8(*select as u8);
                out.put_bytes(0, 3);
            }
            Self::CharacterSelectResponse(character) => character.encode(out),
            Self::Checksum(checksum) => {
                out.put_u32_le(*checksum);
                out.put_u32_le(0);
            }
            Self::ChecksumResponse(ok) => out.put_u32_le(*ok as u32),
            Self::GuildCardHeader { size, checksum } => {
                out.put_u32_le(1);
                out.put_u32_le(*size);
                out.put_u32_le(*checksum);
            }
            Self::GetGuildCardChunk { chunk_no, cont } => {
                out.put_u32_le(0);
                out.put_u32_le(*chunk_no);
                out.put_u32_le(*cont as u32);
            }
            Self::GuildCardChunk { chunk_no, data } => {
                out.put_u32_le(0);
                out.put_u32_le(*chunk_no);
                out.put_slice(data);
            }
            Self::FileList(entries) => {
                for entry in entries {
                    out.put_u32_le(entry.size);
                    out.put_u32_le(entry.checksum);
                    out.put_u32_le(entry.offset);
                    put_ascii(out, &entry.filename, FILENAME_SIZE);
                }
            }
            Self::FileChunk { chunk_no, data } => {
                out.put_u32_le(*chunk_no);
                out.put_slice(data);
            }
            Self::Unknown { body, .. } => out.put_slice(body),
            Self::Disconnect
            | Self::GetAccount
            | Self::GetGuildCardHeader
            | Self::GetFileList
            | Self::GetFileChunk => {}
        }
    }
}

impl Message for BbMessage {
    type Cipher = BbCipher;

    const HEADER_SIZE: usize = BB_HEADER_SIZE;
    const BANNER: &'static str =
        "Phantasy Star Online Blue Burst Game Server. Copyright 1999-2004 SONICTEAM.";

    fn read_header(buf: &[u8]) -> Result<Header, CodecError> {
        require("header", buf, BB_HEADER_SIZE)?;
        let mut b = buf;
        Ok(Header {
            size: b.get_u16_le() as usize,
            code: b.get_u16_le(),
            flags: b.get_u32_le(),
        })
    }

    fn decode(buf: &[u8]) -> Result<Self, CodecError> {
        let (header, body) = split_frame::<Self>(buf)?;
        let mut b = body;
        let msg = match header.code {
            CODE_INIT_ENCRYPTION => {
                require("InitEncryption", body, BANNER_SIZE + 2 * BB_KEY_SIZE)?;
                let keys = &body[BANNER_SIZE..];
                Self::InitEncryption {
                    banner: get_ascii(&body[..BANNER_SIZE]),
                    server_key: keys[..BB_KEY_SIZE].to_vec(),
                    client_key: keys[BB_KEY_SIZE..2 * BB_KEY_SIZE].to_vec(),
                }
            }
            CODE_DISCONNECT => Self::Disconnect,
            CODE_REDIRECT => {
                require("Redirect", body, 6)?;
                let port = u16::from_le_bytes([body[4], body[5]]);
                Self::Redirect(SocketAddrV4::new(ip_octets(body), port))
            }
            CODE_AUTHENTICATE => {
                require("Authenticate", body, AUTHENTICATE_SIZE)?;
                Self::Authenticate(Authenticate {
                    guild_card: i32::from_le_bytes([body[4], body[5], body[6], body[7]]),
                    version: i16::from_le_bytes([body[8], body[9]]),
                    team_id: i32::from_le_bytes([body[16], body[17], body[18], body[19]]),
                    username: get_ascii(&body[20..36]),
                    password: get_ascii(&body[68..84]),
                })
            }
            CODE_AUTHENTICATION_RESPONSE => {
                require("AuthenticationResponse", body, 16)?;
                let status = AuthenticationStatus::from_wire(b.get_u32_le());
                b.advance(4);
                Self::AuthenticationResponse {
                    status,
                    guild_card: b.get_i32_le(),
                    team_id: b.get_i32_le(),
                }
            }
            CODE_GET_ACCOUNT => Self::GetAccount,
            CODE_ACCOUNT => {
                require("Account", body, ACCOUNT_GUILD_CARD_POS + 8)?;
                b.advance(ACCOUNT_GUILD_CARD_POS);
                Self::Account {
                    guild_card: b.get_i32_le(),
                    team_id: b.get_i32_le(),
                }
            }
            CODE_CHARACTER_SELECT => {
                require("CharacterSelect", body, 5)?;
                Self::CharacterSelect {
                    slot: body[0],
                    select: body[4] != 0,
                }
            }
            CODE_CHARACTER_SELECT_RESPONSE => {
                Self::CharacterSelectResponse(PsoCharacter::decode(body)?)
            }
            CODE_CHECKSUM => {
                require("Checksum", body, 4)?;
                Self::Checksum(b.get_u32_le())
            }
            CODE_CHECKSUM_RESPONSE => {
                require("ChecksumResponse", body, 4)?;
                Self::ChecksumResponse(b.get_u32_le() != 0)
            }
            CODE_GET_GUILD_CARD_HEADER => Self::GetGuildCardHeader,
            CODE_GUILD_CARD_HEADER => {
                require("GuildCardHeader", body, 12)?;
                b.advance(4);
                Self::GuildCardHeader {
                    size: b.get_u32_le(),
                    checksum: b.get_u32_le(),
                }
            }
            CODE_GET_GUILD_CARD_CHUNK => {
                require("GetGuildCardChunk", body, 12)?;
                b.advance(4);
                Self::GetGuildCardChunk {
                    chunk_no: b.get_u32_le(),
                    cont: b.get_u32_le() != 0,
                }
            }
            CODE_GUILD_CARD_CHUNK => {
                require("GuildCardChunk", body, 8)?;
                b.advance(4);
                let chunk_no = b.get_u32_le();
                Self::GuildCardChunk {
                    chunk_no,
                    data: Bytes::copy_from_slice(b),
                }
            }
            CODE_GET_FILE_LIST => Self::GetFileList,
            CODE_FILE_LIST => {
                let count = header.flags as usize;
                require("FileList", body, count.saturating_mul(FILE_ENTRY_SIZE))?;
                let entries = body
                    .chunks_exact(FILE_ENTRY_SIZE)
                    .take(count)
                    .map(|mut e| FileListEntry {
                        size: e.get_u32_le(),
                        checksum: e.get_u32_le(),
                        offset: e.get_u32_le(),
                        filename: get_ascii(e),
                    })
                    .collect();
                Self::FileList(entries)
            }
            CODE_GET_FILE_CHUNK => Self::GetFileChunk,
            CODE_FILE_CHUNK => {
                require("FileChunk", body, 4)?;
                let chunk_no = b.get_u32_le();
                Self::FileChunk {
                    chunk_no,
                    data: Bytes::copy_from_slice(b),
                }
            }
            code => Self::Unknown {
                code,
                flags: header.flags,
                body: Bytes::copy_from_slice(body),
            },
        };
        Ok(msg)
    }

    fn encode(&self) -> Vec<u8> {
        let mut out = vec![0u8; BB_HEADER_SIZE];
        self.encode_body(&mut out);
        let size = out.len() as u16;
        out[..2].copy_from_slice(&size.to_le_bytes());
        out[2..4].copy_from_slice(&self.code().to_le_bytes());
        out[4..8].copy_from_slice(&self.flags().to_le_bytes());
        out
    }

    fn init_encryption(banner: &str, server_key: &[u8], client_key: &[u8]) -> Self {
        Self::InitEncryption {
            banner: banner.to_string(),
            server_key: server_key.to_vec(),
            client_key: client_key.to_vec(),
        }
    }

    fn as_init_encryption(&self) -> Option<InitKeys<'_>> {
        match self {
            Self::InitEncryption {
                banner,
                server_key,
                client_key,
            } => Some(InitKeys {
                banner,
                server_key,
                client_key,
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
            Self::InitEncryption { .. } => "InitEncryption",
            Self::Disconnect => "Disconnect",
            Self::Redirect(_) => "Redirect",
            Self::Authenticate(_) => "Authenticate",
            Self::AuthenticationResponse { .. } => "AuthenticationResponse",
            Self::GetAccount => "GetAccount",
            Self::Account { .. } => "Account",
            Self::CharacterSelect { .. } => "CharacterSelect",
            Self::CharacterSelectResponse(_) => "CharacterSelectResponse",
            Self::Checksum(_) => "Checksum",
            Self::ChecksumResponse(_) => "ChecksumResponse",
            Self::GetGuildCardHeader => "GetGuildCardHeader",
            Self::GuildCardHeader { .. } => "GuildCardHeader",
            Self::GetGuildCardChunk { .. } => "GetGuildCardChunk",
            Self::GuildCardChunk { .. } => "GuildCardChunk",
            Self::GetFileList => "GetFileList",
            Self::FileList(_) => "FileList",
            Self::GetFileChunk => "GetFileChunk",
            Self::FileChunk { .. } => "FileChunk",
            Self::Unknown { .. } => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    const AUTHENTICATION_RESPONSE_SIZE: usize = 60;
    const ACCOUNT_SIZE: usize = 2804;

    fn size_of(buf: &[u8]) -> usize {
        u16::from_le_bytes([buf[0], buf[1]]) as usize
    }

    #[test]
    fn test_read_header() {
        let buf = [0x0C, 0x00, 0x19, 0x00, 0x02, 0x00, 0x00, 0x00];
        let header = BbMessage::read_header(&buf).unwrap();
        assert_eq!(header.size, 12);
        assert_eq!(header.code, CODE_REDIRECT);
        assert_eq!(header.flags, 2);
    }

    #[test]
    fn test_init_encryption_layout() {
        let server = [1u8; BB_KEY_SIZE];
        let client = [2u8; BB_KEY_SIZE];
        let buf = BbMessage::init_encryption(BbMessage::BANNER, &server, &client).encode();
        assert_eq!(buf.len(), 8 + 96 + 96);
        assert_eq!(&buf[2..4], &[0x03, 0x00]);
        assert_eq!(&buf[104..152], &server);
        assert_eq!(&buf[152..], &client);

        let msg = BbMessage::decode(&buf).unwrap();
        let keys = msg.as_init_encryption().unwrap();
        assert_eq!(keys.banner, BbMessage::BANNER);
        assert_eq!(keys.server_key, &server);
    }

    #[test]
    fn test_redirect_port_is_little_endian() {
        let addr = SocketAddrV4::new(Ipv4Addr::new(192, 168, 1, 2), 0x1234);
        let buf = BbMessage::redirect(addr).encode();
        assert_eq!(&buf[8..], &[192, 168, 1, 2, 0x34, 0x12, 0, 0]);
        assert_eq!(BbMessage::decode(&buf).unwrap(), BbMessage::Redirect(addr));
    }

    #[test]
    fn test_authenticate_offsets() {
        let msg = BbMessage::Authenticate(Authenticate {
            guild_card: 42,
            version: 0x41,
            team_id: 7,
            username: "alice".into(),
            password: "secret".into(),
        });
        let buf = msg.encode();
        assert_eq!(buf.len(), 8 + AUTHENTICATE_SIZE);
        let body = &buf[8..];
        assert_eq!(&body[4..8], &42i32.to_le_bytes());
        assert_eq!(&body[16..20], &7i32.to_le_bytes());
        assert_eq!(&body[20..25], b"alice");
        assert_eq!(&body[68..74], b"secret");
        assert_eq!(BbMessage::decode(&buf).unwrap(), msg);
    }

    #[test]
    fn test_short_authenticate_is_truncated() {
        let mut buf = vec![0u8; 8 + 40];
        buf[0] = 48;
        buf[2] = 0x93;
        assert!(matches!(
            BbMessage::decode(&buf),
            Err(CodecError::Truncated {
                message: "Authenticate",
                ..
            })
        ));
    }

    #[test]
    fn test_authentication_response_layout() {
        let buf = BbMessage::AuthenticationResponse {
            status: AuthenticationStatus::Success,
            guild_card: 5,
            team_id: 6,
        }
        .encode();
        assert_eq!(size_of(&buf), 8 + AUTHENTICATION_RESPONSE_SIZE);
        let body = &buf[8..];
        assert_eq!(&body[0..4], &0u32.to_le_bytes());
        assert_eq!(&body[4..8], &0x10000u32.to_le_bytes());
        assert_eq!(&body[16..20], &0xDEADBEEFu32.to_le_bytes());
        assert_eq!(&body[56..60], &0x102u32.to_le_bytes());

        let buf = BbMessage::AuthenticationResponse {
            status: AuthenticationStatus::UnknownUser,
            guild_card: 5,
            team_id: 6,
        }
        .encode();
        assert_eq!(&buf[8..12], &8u32.to_le_bytes());
        assert_eq!(&buf[24..28], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_account_layout() {
        let buf = BbMessage::Account {
            guild_card: 100,
            team_id: 200,
        }
        .encode();
        assert_eq!(buf.len(), 8 + ACCOUNT_SIZE);
        assert_eq!(&buf[buf.len() - 8..], &[0xFF; 8]);
        assert_eq!(
            BbMessage::decode(&buf).unwrap(),
            BbMessage::Account {
                guild_card: 100,
                team_id: 200
            }
        );
    }

    #[test]
    fn test_character_select_response_layout() {
        let msg = BbMessage::CharacterSelectResponse(PsoCharacter::placeholder(2));
        let buf = msg.encode();
        assert_eq!(buf.len(), 8 + CHARACTER_SIZE);
        assert_eq!(BbMessage::decode(&buf).unwrap(), msg);
    }

    #[test]
    fn test_file_list_count_in_flags() {
        let entries = vec![
            FileListEntry {
                size: 10,
                checksum: 0xAB,
                offset: 0,
                filename: "a.bin".into(),
            },
            FileListEntry {
                size: 20,
                checksum: 0xCD,
                offset: 10,
                filename: "b.bin".into(),
            },
        ];
        let buf = BbMessage::FileList(entries.clone()).encode();
        assert_eq!(buf.len(), 8 + 2 * FILE_ENTRY_SIZE);
        assert_eq!(&buf[4..8], &2u32.to_le_bytes());
        assert_eq!(BbMessage::decode(&buf).unwrap(), BbMessage::FileList(entries));
    }

    #[test]
    fn test_guild_card_chunk_data_excludes_padding() {
        let msg = BbMessage::GuildCardChunk {
            chunk_no: 3,
            data: Bytes::from_static(&[1, 2, 3]),
        };
        let mut buf = msg.encode();
        assert_eq!(size_of(&buf), 19);
        buf.resize(24, 0);
        assert_eq!(BbMessage::decode(&buf).unwrap(), msg);
    }

    #[test]
    fn test_unknown_roundtrips_raw() {
        let buf = [12u8, 0, 0x34, 0x12, 9, 0, 0, 0, 1, 2, 3, 4];
        let msg = BbMessage::decode(&buf).unwrap();
        assert!(matches!(msg, BbMessage::Unknown { code: 0x1234, flags: 9, .. }));
        assert_eq!(msg.encode(), buf);
    }
}
