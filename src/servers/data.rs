//! BB character data server: account, character select and the guild card
//! and file downloads that follow.

use super::{AuthPolicy, FileStore, ProtocolError, ServerState, Transition};
use crate::messages::bb::{AuthenticationStatus, BbMessage, PsoCharacter};
use crate::network::crc32;
use bytes::Bytes;
use std::sync::Arc;

pub const MAX_CHUNK_SIZE: usize = 0x6800;
pub const GUILD_CARD_SIZE: usize = 54672;

pub struct DataContext {
    guild_card: Bytes,
    guild_card_checksum: u32,
    files: Arc<FileStore>,
    policy: AuthPolicy,
}

impl DataContext {
    /// Context with an empty guild card.
    pub fn new(files: Arc<FileStore>, policy: AuthPolicy) -> Self {
        Self::with_guild_card(Bytes::from(vec![0u8; GUILD_CARD_SIZE]), files, policy)
    }

    pub fn with_guild_card(guild_card: Bytes, files: Arc<FileStore>, policy: AuthPolicy) -> Self {
        Self {
            guild_card_checksum: crc32(&guild_card),
            guild_card,
            files,
            policy,
        }
    }
}

/// Slice `chunk_no` of `buf`. Out of range chunks are empty.
fn chunk(buf: &Bytes, chunk_no: u32) -> Bytes {
    let offset = (chunk_no as usize)
        .saturating_mul(MAX_CHUNK_SIZE)
        .min(buf.len());
    let size = (buf.len() - offset).min(MAX_CHUNK_SIZE);
    buf.slice(offset..offset + size)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataState {
    Authentication,
    Account { guild_card: i32, team_id: i32 },
    CharacterSelect,
    DataDownload { file_chunk_no: u32 },
    Final,
}

impl DataState {
    fn download(
        file_chunk_no: u32,
        ctx: &DataContext,
        message: &BbMessage,
    ) -> Option<Transition<Self>> {
        let stay = Transition::to(Self::DataDownload { file_chunk_no });
        let t = match message {
            BbMessage::GetGuildCardHeader => stay.send(BbMessage::GuildCardHeader {
                size: ctx.guild_card.len() as u32,
                checksum: ctx.guild_card_checksum,
            }),
            BbMessage::GetGuildCardChunk { chunk_no, cont } => {
                if *cont {
                    stay.send(BbMessage::GuildCardChunk {
                        chunk_no: *chunk_no,
                        data: chunk(&ctx.guild_card, *chunk_no),
                    })
                } else {
                    stay
                }
            }
            BbMessage::GetFileList => Transition::to(Self::DataDownload { file_chunk_no: 0 })
                .send(BbMessage::FileList(ctx.files.entries().to_vec())),
            BbMessage::GetFileChunk => {
                let data = ctx.files.data();
                let slice = chunk(data, file_chunk_no);
                let offset = (file_chunk_no as usize)
                    .saturating_mul(MAX_CHUNK_SIZE)
                    .min(data.len());
                let next = if offset + slice.len() < data.len() {
                    file_chunk_no + 1
                } else {
                    file_chunk_no
                };
                Transition::to(Self::DataDownload {
                    file_chunk_no: next,
                })
                .send(BbMessage::FileChunk {
                    chunk_no: file_chunk_no,
                    data: slice,
                })
            }
            _ => return None,
        };
        Some(t)
    }
}

impl ServerState for DataState {
    type Message = BbMessage;
    type Context = DataContext;

    fn initial(_ctx: &DataContext) -> Self {
        Self::Authentication
    }

    fn process(
        &self,
        ctx: &DataContext,
        message: &BbMessage,
    ) -> Result<Transition<Self>, ProtocolError> {
        if !self.is_final() && matches!(message, BbMessage::Disconnect) {
            return Ok(Transition::to(Self::Final));
        }

        match (*self, message) {
            (Self::Authentication, BbMessage::Authenticate(auth)) => {
                let status = ctx.policy.check(&auth.username, &auth.password);
                let next = if status == AuthenticationStatus::Success {
                    Self::Account {
                        guild_card: auth.guild_card,
                        team_id: auth.team_id,
                    }
                } else {
                    tracing::info!(
                        "[data] [rejected] user={} status={:?}",
                        auth.username,
                        status
                    );
                    Self::Final
                };
                Ok(Transition::to(next).send(BbMessage::AuthenticationResponse {
                    status,
                    guild_card: auth.guild_card,
                    team_id: auth.team_id,
                }))
            }
            (
                Self::Account {
                    guild_card,
                    team_id,
                },
                BbMessage::GetAccount,
            ) => Ok(Transition::to(Self::CharacterSelect).send(BbMessage::Account {
                guild_card,
                team_id,
            })),
            (Self::CharacterSelect, BbMessage::CharacterSelect { slot, .. }) => {
                Ok(Transition::to(Self::CharacterSelect).send(
                    BbMessage::CharacterSelectResponse(PsoCharacter::placeholder(*slot)),
                ))
            }
            (Self::CharacterSelect, BbMessage::Checksum(_)) => {
                Ok(Transition::to(Self::DataDownload { file_chunk_no: 0 })
                    .send(BbMessage::ChecksumResponse(true)))
            }
            (Self::DataDownload { file_chunk_no }, _) => {
                Self::download(file_chunk_no, ctx, message).ok_or_else(|| self.unexpected(message))
            }
            _ => Err(self.unexpected(message)),
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Final)
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Authentication => "Authentication",
            Self::Account { .. } => "Account",
            Self::CharacterSelect => "CharacterSelect",
            Self::DataDownload { .. } => "DataDownload",
            Self::Final => "Final",
        }
    }
}
