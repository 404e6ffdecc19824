use std::fmt;
use std::hash::{Hash, Hasher};

/// A station name borrowed straight out of the input buffer.
///
/// Equality and ordering compare the full byte sequence. Hashing only looks
/// at the length and the first eight bytes, which is enough to spread real
/// station names while keeping the hot path to a single word write.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ByteKey<'a>(&'a [u8]);

impl<'a> ByteKey<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        ByteKey(bytes)
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    fn fingerprint(&self) -> u64 {
        let mut prefix = [0u8; 8];
        let n = self.0.len().min(8);
        prefix[..n].copy_from_slice(&self.0[..n]);
        (self.0.len() as u64).rotate_left(56) ^ u64::from_le_bytes(prefix)
    }

    /// Owned copy of the name, decoded lossily. Only used when rendering.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.0).into_owned()
    }
}

impl Hash for ByteKey<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.fingerprint());
    }
}

impl fmt::Display for ByteKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.0))
    }
}

impl fmt::Debug for ByteKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteKey({:?})", String::from_utf8_lossy(self.0))
    }
}
