//! Encrypted framing over a byte stream.
//!
//! Frames are read in two steps: the header is decrypted on its own to learn
//! the message size, then the remainder up to the next block boundary.

use crate::messages::{CodecError, Message};
use crate::network::crypt::{round_to_block_size, Cipher, KeyLengthError};
use crate::servers::ProtocolError;
use std::io::ErrorKind;
use std::marker::PhantomData;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, ReadHalf, WriteHalf};

#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("codec: {0}")]
    Codec(#[from] CodecError),

    #[error("protocol: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("handshake: {0}")]
    Key(#[from] KeyLengthError),
}

impl ConnectionError {
    /// True for resets and aborts, which are routine when clients hop servers.
    pub fn is_disconnect(&self) -> bool {
        matches!(
            self,
            Self::Io(e) if matches!(
                e.kind(),
                ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted | ErrorKind::BrokenPipe
            )
        )
    }
}

fn block_size<M: Message>() -> usize {
    <M::Cipher as Cipher>::BLOCK_SIZE
}

/// Fills `buf` with one header. Returns `Ok(false)` if the stream ended
/// before the first header byte; a header cut short is `UnexpectedEof`.
async fn read_header<M: Message, R: AsyncRead + Unpin>(
    inner: &mut R,
    buf: &mut Vec<u8>,
) -> Result<bool, ConnectionError> {
    buf.clear();
    buf.resize(M::HEADER_SIZE, 0);
    let mut filled = 0;
    while filled == 0 {
        filled = match inner.read(buf).await {
            Ok(0) => return Ok(false),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => 0,
            Err(e) => return Err(e.into()),
        };
    }
    inner.read_exact(&mut buf[filled..]).await?;
    Ok(true)
}

/// Reads an unencrypted frame, as used for the handshake.
async fn read_plain_frame<M: Message, R: AsyncRead + Unpin>(
    inner: &mut R,
) -> Result<Vec<u8>, ConnectionError> {
    let mut buf = Vec::new();
    if !read_header::<M, _>(inner, &mut buf).await? {
        return Err(std::io::Error::from(ErrorKind::UnexpectedEof).into());
    }
    let header = M::read_header(&buf)?;
    check_size::<M>(header.size)?;
    buf.resize(round_to_block_size(header.size, block_size::<M>()), 0);
    inner.read_exact(&mut buf[M::HEADER_SIZE..]).await?;
    Ok(buf)
}

fn check_size<M: Message>(size: usize) -> Result<(), CodecError> {
    if size < M::HEADER_SIZE {
        return Err(CodecError::BadSize {
            size,
            header: M::HEADER_SIZE,
            actual: M::HEADER_SIZE,
        });
    }
    Ok(())
}

/// Receiving half: owns the inbound cipher.
pub struct FrameReader<M: Message, R> {
    inner: R,
    cipher: M::Cipher,
    _message: PhantomData<fn() -> M>,
}

impl<M: Message, R: AsyncRead + Unpin> FrameReader<M, R> {
    pub fn new(inner: R, cipher: M::Cipher) -> Self {
        Self {
            inner,
            cipher,
            _message: PhantomData,
        }
    }

    /// Reads and decrypts one frame, padding included. `Ok(None)` means the
    /// peer closed the stream between frames.
    pub async fn read_frame(&mut self) -> Result<Option<Vec<u8>>, ConnectionError> {
        let mut buf = Vec::new();
        if !read_header::<M, _>(&mut self.inner, &mut buf).await? {
            return Ok(None);
        }
        self.cipher.decrypt(&mut buf);
        let header = M::read_header(&buf)?;
        check_size::<M>(header.size)?;

        buf.resize(round_to_block_size(header.size, block_size::<M>()), 0);
        let body = &mut buf[M::HEADER_SIZE..];
        self.inner.read_exact(body).await?;
        self.cipher.decrypt(body);
        Ok(Some(buf))
    }

    pub async fn read_message(&mut self) -> Result<Option<M>, ConnectionError> {
        match self.read_frame().await? {
            Some(frame) => Ok(Some(M::decode(&frame)?)),
            None => Ok(None),
        }
    }
}

/// Sending half: owns the outbound cipher.
pub struct FrameWriter<M: Message, W> {
    inner: W,
    cipher: M::Cipher,
    _message: PhantomData<fn() -> M>,
}

impl<M: Message, W: AsyncWrite + Unpin> FrameWriter<M, W> {
    pub fn new(inner: W, cipher: M::Cipher) -> Self {
        Self {
            inner,
            cipher,
            _message: PhantomData,
        }
    }

    /// Pads `frame` with zeros to the block size, encrypts and writes it.
    pub async fn write_frame(&mut self, mut frame: Vec<u8>) -> Result<(), ConnectionError> {
        frame.resize(round_to_block_size(frame.len(), block_size::<M>()), 0);
        self.cipher.encrypt(&mut frame);
        self.inner.write_all(&frame).await?;
        Ok(())
    }

    pub async fn send(&mut self, message: &M) -> Result<(), ConnectionError> {
        self.write_frame(message.encode()).await
    }
}

/// An established, encrypted connection.
pub struct Connection<M: Message, T> {
    reader: FrameReader<M, ReadHalf<T>>,
    writer: FrameWriter<M, WriteHalf<T>>,
}

impl<M, T> Connection<M, T>
where
    M: Message,
    T: AsyncRead + AsyncWrite + Send + 'static,
{
    /// Server side of the handshake: picks fresh keys and announces them in
    /// an unencrypted `InitEncryption`.
    pub async fn accept(stream: T, banner: &str) -> Result<Self, ConnectionError> {
        let server = M::Cipher::random();
        let client = M::Cipher::random();

        let (read, mut write) = tokio::io::split(stream);
        let init = M::init_encryption(banner, server.key(), client.key());
        write.write_all(&init.encode()).await?;

        Ok(Self {
            reader: FrameReader::new(read, client),
            writer: FrameWriter::new(write, server),
        })
    }

    /// Client side of the handshake. Returns the connection and the banner
    /// the server announced.
    pub async fn connect(stream: T) -> Result<(Self, String), ConnectionError> {
        let (mut read, write) = tokio::io::split(stream);
        let frame = read_plain_frame::<M, _>(&mut read).await?;
        let init = M::decode(&frame)?;
        let keys = init
            .as_init_encryption()
            .ok_or(CodecError::NotInitEncryption(init.name()))?;

        let conn = Self {
            reader: FrameReader::new(read, M::Cipher::new(keys.server_key)?),
            writer: FrameWriter::new(write, M::Cipher::new(keys.client_key)?),
        };
        Ok((conn, keys.banner.to_string()))
    }

    pub async fn read_frame(&mut self) -> Result<Option<Vec<u8>>, ConnectionError> {
        self.reader.read_frame().await
    }

    pub async fn read_message(&mut self) -> Result<Option<M>, ConnectionError> {
        self.reader.read_message().await
    }

    pub async fn send(&mut self, message: &M) -> Result<(), ConnectionError> {
        self.writer.send(message).await
    }

    pub fn into_split(self) -> (FrameReader<M, ReadHalf<T>>, FrameWriter<M, WriteHalf<T>>) {
        (self.reader, self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{BbMessage, PcMessage};
    use crate::network::crypt::PcCipher;

    #[tokio::test]
    async fn test_handshake_pairs_ciphers_pc() {
        let (server_io, client_io) = tokio::io::duplex(4096);
        let accept = tokio::spawn(async move {
            let mut conn = Connection::<PcMessage, _>::accept(server_io, "banner")
                .await
                .unwrap();
            let msg = conn.read_message().await.unwrap();
            conn.send(&PcMessage::PatchDone).await.unwrap();
            msg
        });

        let (mut client, banner) = Connection::<PcMessage, _>::connect(client_io).await.unwrap();
        assert_eq!(banner, "banner");
        client.send(&PcMessage::Login).await.unwrap();
        assert_eq!(client.read_message().await.unwrap(), Some(PcMessage::PatchDone));
        assert_eq!(accept.await.unwrap(), Some(PcMessage::Login));
    }

    #[tokio::test]
    async fn test_bb_frames_are_padded() {
        let (server_io, client_io) = tokio::io::duplex(1 << 16);
        let accept = tokio::spawn(async move {
            let mut conn = Connection::<BbMessage, _>::accept(server_io, BbMessage::BANNER)
                .await
                .unwrap();
            // 8 + 4 bytes, padded to 16 on the wire.
            conn.send(&BbMessage::ChecksumResponse(true)).await.unwrap();
            conn.send(&BbMessage::Disconnect).await.unwrap();
        });

        let (mut client, _) = Connection::<BbMessage, _>::connect(client_io).await.unwrap();
        let frame = client.read_frame().await.unwrap().unwrap();
        assert_eq!(frame.len(), 16);
        assert_eq!(
            BbMessage::decode(&frame).unwrap(),
            BbMessage::ChecksumResponse(true)
        );
        assert_eq!(client.read_message().await.unwrap(), Some(BbMessage::Disconnect));
        accept.await.unwrap();
        assert_eq!(client.read_message().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_eof_between_frames_is_clean() {
        let mut reader = FrameReader::<PcMessage, _>::new(&[0u8; 0][..], PcCipher::random());
        assert!(reader.read_frame().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_eof_inside_header_is_an_error() {
        let mut reader = FrameReader::<PcMessage, _>::new(&[0x10u8, 0x00][..], PcCipher::random());
        let err = reader.read_frame().await.err().unwrap();
        assert!(matches!(
            err,
            ConnectionError::Io(ref e) if e.kind() == ErrorKind::UnexpectedEof
        ));
        assert!(!err.is_disconnect());
    }

    #[tokio::test]
    async fn test_connect_rejects_non_init() {
        let (mut server_io, client_io) = tokio::io::duplex(64);
        server_io
            .write_all(&PcMessage::PatchDone.encode())
            .await
            .unwrap();
        let err = Connection::<PcMessage, _>::connect(client_io)
            .await
            .err()
            .unwrap();
        assert!(matches!(
            err,
            ConnectionError::Codec(CodecError::NotInitEncryption("PatchDone"))
        ));
    }
}
