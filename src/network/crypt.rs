//! Keyed stream ciphers used on the wire.
//!
//! Every connection owns two instances: one decrypts what the peer sends, the
//! other encrypts what we send. Both are stateful, so bytes must go through them
//! in exactly the order they appear on the socket.

/// A key of the wrong length was handed to a cipher.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected a {expected}-byte cipher key, got {actual} bytes")]
pub struct KeyLengthError {
    pub expected: usize,
    pub actual: usize,
}

pub trait Cipher: Send + Sized + 'static {
    /// Length of the key announced in the `InitEncryption` handshake.
    const KEY_SIZE: usize;

    /// Transforms operate on whole blocks of this many bytes.
    const BLOCK_SIZE: usize;

    fn new(key: &[u8]) -> Result<Self, KeyLengthError>;

    /// Creates a cipher with a freshly generated key.
    fn random() -> Self;

    fn key(&self) -> &[u8];

    /// Encrypts `data` in place. A trailing partial block is left untouched.
    fn encrypt(&mut self, data: &mut [u8]);

    /// Decrypts `data` in place. A trailing partial block is left untouched.
    fn decrypt(&mut self, data: &mut [u8]);
}

/// Rounds `n` up to the next multiple of `block_size`.
pub fn round_to_block_size(n: usize, block_size: usize) -> usize {
    n + (block_size - n % block_size) % block_size
}

fn check_key_len(key: &[u8], expected: usize) -> Result<(), KeyLengthError> {
    if key.len() != expected {
        return Err(KeyLengthError {
            expected,
            actual: key.len(),
        });
    }
    Ok(())
}

pub(super) fn random_key<const N: usize>() -> [u8; N] {
    std::array::from_fn(|_| rand::random::<u8>())
}

// ============================================
// PC
// ============================================

const PC_STREAM_LEN: usize = 57;

/// Cipher of the PC client: a lagged subtractive generator seeded from a
/// 4-byte key, XORed over each little-endian word.
#[derive(Clone)]
pub struct PcCipher {
    key: [u8; 4],
    stream: [u32; PC_STREAM_LEN],
    position: usize,
}

impl PcCipher {
    pub fn with_key(key: [u8; 4]) -> Self {
        let mut stream = [0u32; PC_STREAM_LEN];
        let mut a: u32 = 1;
        let mut b = u32::from_le_bytes(key);
        stream[56] = b;
        stream[55] = b;

        let mut i = 0x15usize;
        while i <= 0x46E {
            let idx = i % 55;
            b = b.wrapping_sub(a);
            stream[idx] = a;
            a = b;
            b = stream[idx];
            i += 0x15;
        }

        let mut cipher = Self {
            key,
            stream,
            position: 56,
        };
        for _ in 0..4 {
            cipher.mix();
        }
        cipher
    }

    fn mix(&mut self) {
        for i in 1..=0x18 {
            self.stream[i] = self.stream[i].wrapping_sub(self.stream[i + 0x1F]);
        }
        for i in 0x19..0x19 + 0x1F {
            self.stream[i] = self.stream[i].wrapping_sub(self.stream[i - 0x18]);
        }
    }

    fn next_key(&mut self) -> u32 {
        if self.position == 56 {
            self.mix();
            self.position = 1;
        }
        let k = self.stream[self.position];
        self.position += 1;
        k
    }

    fn apply(&mut self, data: &mut [u8]) {
        for word in data.chunks_exact_mut(4) {
            let v = u32::from_le_bytes([word[0], word[1], word[2], word[3]]) ^ self.next_key();
            word.copy_from_slice(&v.to_le_bytes());
        }
    }
}

impl Cipher for PcCipher {
    const KEY_SIZE: usize = 4;
    const BLOCK_SIZE: usize = 4;

    fn new(key: &[u8]) -> Result<Self, KeyLengthError> {
        check_key_len(key, Self::KEY_SIZE)?;
        Ok(Self::with_key([key[0], key[1], key[2], key[3]]))
    }

    fn random() -> Self {
        Self::with_key(random_key())
    }

    fn key(&self) -> &[u8] {
        &self.key
    }

    fn encrypt(&mut self, data: &mut [u8]) {
        self.apply(data);
    }

    fn decrypt(&mut self, data: &mut [u8]) {
        self.apply(data);
    }
}

impl std::fmt::Debug for PcCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PcCipher")
            .field("key", &hex::encode(self.key))
            .field("position", &self.position)
            .finish()
    }
}
