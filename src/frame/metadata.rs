//! Inline metadata attachment
//!
//! Storage fixed-capacity di dalam frame, jadi frame tetap `Copy` dan bisa
//! dikirim antar thread tanpa alokasi per frame.

use crate::error::{CodecError, Result};
use crate::protocol::{self, NumericElement};

/// Kapasitas inline metadata per frame (bytes)
pub const METADATA_CAPACITY: usize = 32;

/// Satu metadata attachment
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FrameMetadata {
    bytes: [u8; METADATA_CAPACITY],
    len: u8,
}

impl FrameMetadata {
    /// Copy payload ke storage inline.
    ///
    /// Gagal dengan `MetadataTooLarge` kalau payload lebih dari `max`
    /// bytes (`max` di-clamp ke `METADATA_CAPACITY`).
    pub fn from_slice(payload: &[u8], max: usize) -> Result<Self> {
        let max = max.min(METADATA_CAPACITY);
        if payload.len() > max {
            return Err(CodecError::MetadataTooLarge {
                size: payload.len(),
                max,
            });
        }

        let mut bytes = [0u8; METADATA_CAPACITY];
        bytes[..payload.len()].copy_from_slice(payload);
        Ok(Self {
            bytes,
            len: payload.len() as u8,
        })
    }

    /// Encode values langsung ke storage inline
    pub fn encode<T: NumericElement>(values: &[T], max: usize) -> Result<Self> {
        let max = max.min(METADATA_CAPACITY);
        let size = protocol::encoded_len::<T>(values.len());
        if size > max {
            return Err(CodecError::MetadataTooLarge { size, max });
        }

        let mut bytes = [0u8; METADATA_CAPACITY];
        let written = protocol::encode_into(values, &mut bytes[..max])?;
        Ok(Self {
            bytes,
            len: written as u8,
        })
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl std::fmt::Debug for FrameMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameMetadata")
            .field("len", &self.len)
            .field("bytes", &self.as_bytes())
            .finish()
    }
}
