//! Stable FNV-1a fingerprints for shape cache keys.
//!
//! Values are fed as explicit little-endian bytes, so a fingerprint is the
//! same on every platform and toolchain.

const FNV1A_OFFSET: u64 = 0xcbf29ce484222325;
const FNV1A_PRIME: u64 = 0x100000001b3;

/// Incremental FNV-1a accumulator.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fingerprint {
    hash: u64,
}

impl Fingerprint {
    pub(crate) fn new() -> Self {
        Self { hash: FNV1A_OFFSET }
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.hash ^= u64::from(*byte);
            self.hash = self.hash.wrapping_mul(FNV1A_PRIME);
        }
    }

    pub(crate) fn write_u32(&mut self, value: u32) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub(crate) fn write_u64(&mut self, value: u64) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub(crate) fn write_i64(&mut self, value: i64) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub(crate) fn finish(self) -> u64 {
        self.hash
    }
}
