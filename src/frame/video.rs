//! Video frame container dengan metadata attachment
//!
//! Pixel data tidak dimodelkan di sini; frame hanya membawa dimensi,
//! timestamp, orientasi, dan metadata. Metadata dibawa opaque dan tidak
//! diubah oleh transport.

use log::warn;

use super::metadata::{FrameMetadata, METADATA_CAPACITY};
use crate::error::Result;
use crate::protocol::{self, NumericElement};

/// Konfigurasi frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    /// Ukuran maksimum metadata per frame (bytes).
    /// Di-clamp ke `METADATA_CAPACITY`.
    pub max_metadata_size: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_metadata_size: METADATA_CAPACITY,
        }
    }
}

/// Orientasi frame relatif terhadap sensor kamera
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

/// Frame video keluar/masuk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoFrame {
    pub width: u32,
    pub height: u32,
    /// Capture timestamp dalam nanoseconds
    pub timestamp_ns: u64,
    pub orientation: Orientation,
    max_metadata_size: usize,
    metadata: Option<FrameMetadata>,
}

impl VideoFrame {
    /// Membuat frame dengan konfigurasi default
    pub fn new(width: u32, height: u32, timestamp_ns: u64) -> Self {
        Self::with_config(width, height, timestamp_ns, FrameConfig::default())
    }

    pub fn with_config(width: u32, height: u32, timestamp_ns: u64, config: FrameConfig) -> Self {
        Self {
            width,
            height,
            timestamp_ns,
            orientation: Orientation::default(),
            max_metadata_size: config.max_metadata_size.min(METADATA_CAPACITY),
            metadata: None,
        }
    }

    /// Ukuran maksimum metadata untuk frame ini
    #[inline(always)]
    pub fn max_metadata_size(&self) -> usize {
        self.max_metadata_size
    }

    /// Pasang metadata opaque.
    ///
    /// Gagal dengan `MetadataTooLarge`; metadata sebelumnya tetap utuh.
    pub fn set_metadata(&mut self, payload: &[u8]) -> Result<()> {
        let metadata = FrameMetadata::from_slice(payload, self.max_metadata_size)
            .map_err(|e| {
                warn!("rejecting frame metadata: {}", e);
                e
            })?;
        self.metadata = Some(metadata);
        Ok(())
    }

    /// Encode values langsung sebagai metadata frame
    pub fn attach<T: NumericElement>(&mut self, values: &[T]) -> Result<()> {
        let metadata = FrameMetadata::encode(values, self.max_metadata_size)
            .map_err(|e| {
                warn!("rejecting frame metadata: {}", e);
                e
            })?;
        self.metadata = Some(metadata);
        Ok(())
    }

    #[inline(always)]
    pub fn metadata(&self) -> Option<&[u8]> {
        self.metadata.as_ref().map(FrameMetadata::as_bytes)
    }

    pub fn clear_metadata(&mut self) {
        self.metadata = None;
    }

    /// Decode metadata sebagai `T`. `None` kalau frame tidak membawa metadata.
    pub fn decode_metadata<T: NumericElement>(&self) -> Option<Vec<T>> {
        self.metadata().map(protocol::decode::<T>)
    }
}
