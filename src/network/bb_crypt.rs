//! Blue Burst cipher: Blowfish with a scrambled key, byte-swapped P-array
//! and a 4-round block transform.

use super::bb_tables::{P_ARRAY, S_BOXES};
use super::crypt::{random_key, Cipher, KeyLengthError};

pub const BB_KEY_SIZE: usize = 48;

const KEY_SCRAMBLE: [u8; 3] = [0x19, 0x16, 0x18];
const ROUNDS: usize = 4;

#[derive(Clone)]
pub struct BbCipher {
    key: [u8; BB_KEY_SIZE],
    p: [u32; 18],
    s: Box<[[u32; 256]; 4]>,
}

impl BbCipher {
    pub fn with_key(key: [u8; BB_KEY_SIZE]) -> Self {
        let mut scrambled = key;
        for (i, b) in scrambled.iter_mut().enumerate() {
            *b ^= KEY_SCRAMBLE[i % 3];
        }

        let mut p = P_ARRAY;
        for (i, entry) in p.iter_mut().enumerate() {
            let v = *entry;
            let swapped = ((v & 0xFF00) >> 8) | ((v & 0xFF) << 8);
            let v = (((v >> 16) ^ swapped) << 16) | swapped;
            let at = 4 * (i % 12);
            *entry = v ^ u32::from_be_bytes([
                scrambled[at],
                scrambled[at + 1],
                scrambled[at + 2],
                scrambled[at + 3],
            ]);
        }

        let mut cipher = Self {
            key,
            p,
            s: Box::new(S_BOXES),
        };

        let (mut l, mut r) = (0u32, 0u32);
        for i in (0..18).step_by(2) {
            (l, r) = cipher.encrypt_block(l, r, 16);
            cipher.p[i] = l;
            cipher.p[i + 1] = r;
        }
        for b in 0..4 {
            for i in (0..256).step_by(2) {
                (l, r) = cipher.encrypt_block(l, r, 16);
                cipher.s[b][i] = l;
                cipher.s[b][i + 1] = r;
            }
        }
        cipher
    }

    fn f(&self, x: u32) -> u32 {
        let a = self.s[0][(x >> 24) as usize];
        let b = self.s[1][((x >> 16) & 0xFF) as usize];
        let c = self.s[2][((x >> 8) & 0xFF) as usize];
        let d = self.s[3][(x & 0xFF) as usize];
        (a.wrapping_add(b) ^ c).wrapping_add(d)
    }

    fn encrypt_block(&self, mut l: u32, mut r: u32, rounds: usize) -> (u32, u32) {
        for i in 0..rounds {
            l ^= self.p[i];
            r ^= self.f(l);
            std::mem::swap(&mut l, &mut r);
        }
        l ^= self.p[rounds];
        r ^= self.p[rounds + 1];
        (r, l)
    }

    fn decrypt_block(&self, mut l: u32, mut r: u32) -> (u32, u32) {
        for i in (2..ROUNDS + 2).rev() {
            l ^= self.p[i];
            r ^= self.f(l);
            std::mem::swap(&mut l, &mut r);
        }
        l ^= self.p[1];
        r ^= self.p[0];
        (r, l)
    }

    fn for_each_block(data: &mut [u8], mut op: impl FnMut(u32, u32) -> (u32, u32)) {
        for block in data.chunks_exact_mut(8) {
            let l = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
            let r = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);
            let (l, r) = op(l, r);
            block[..4].copy_from_slice(&l.to_le_bytes());
            block[4..].copy_from_slice(&r.to_le_bytes());
        }
    }
}

impl Cipher for BbCipher {
    const KEY_SIZE: usize = BB_KEY_SIZE;
    const BLOCK_SIZE: usize = 8;

    fn new(key: &[u8]) -> Result<Self, KeyLengthError> {
        let key: [u8; BB_KEY_SIZE] = key.try_into().map_err(|_| KeyLengthError {
            expected: BB_KEY_SIZE,
            actual: key.len(),
        })?;
        Ok(Self::with_key(key))
    }

    fn random() -> Self {
        Self::with_key(random_key())
    }

    fn key(&self) -> &[u8] {
        &self.key
    }

    fn encrypt(&mut self, data: &mut [u8]) {
        Self::for_each_block(data, |l, r| self.encrypt_block(l, r, ROUNDS));
    }

    fn decrypt(&mut self, data: &mut [u8]) {
        Self::for_each_block(data, |l, r| self.decrypt_block(l, r));
    }
}

impl std::fmt::Debug for BbCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BbCipher")
            .field("key", &hex::encode(self.key))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> [u8; BB_KEY_SIZE] {
        std::array::from_fn(|i| (i as u8).wrapping_mul(31).wrapping_add(7))
    }

    #[test]
    fn test_bb_roundtrip() {
        let mut enc = BbCipher::with_key(test_key());
        let mut dec = BbCipher::with_key(test_key());

        let original: Vec<u8> = (0..256u32).map(|i| (i ^ 0x5A) as u8).collect();
        let mut first = original[..64].to_vec();
        let mut second = original[64..].to_vec();
        enc.encrypt(&mut first);
        enc.encrypt(&mut second);
        assert_ne!(&first[..], &original[..64]);

        dec.decrypt(&mut first);
        dec.decrypt(&mut second);
        assert_eq!(first, &original[..64]);
        assert_eq!(second, &original[64..]);
    }

    #[test]
    fn test_bb_partial_block_untouched() {
        let mut c = BbCipher::with_key(test_key());
        let mut data = [0xABu8; 11];
        c.encrypt(&mut data);
        assert_eq!(&data[8..], &[0xAB; 3]);
    }

    #[test]
    fn test_bb_keys_produce_different_output() {
        let mut a = BbCipher::with_key(test_key());
        let mut b = BbCipher::with_key([0u8; BB_KEY_SIZE]);
        let mut x = [0u8; 16];
        let mut y = [0u8; 16];
        a.encrypt(&mut x);
        b.encrypt(&mut y);
        assert_ne!(x, y);
    }

    #[test]
    fn test_bb_new_checks_key_length() {
        assert!(BbCipher::new(&[0u8; 47]).is_err());
        let c = BbCipher::new(&test_key()).unwrap();
        assert_eq!(c.key(), &test_key());
    }
}
