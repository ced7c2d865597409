//! framemeta - Per-frame pose metadata codec
//!
//! Arsitektur:
//! - Fixed-Layout: element numeric di-copy dengan native memory layout
//! - Zero-Metadata: tidak ada header, jumlah element = `len / width`
//! - No-Allocation: encode langsung ke buffer frame yang sudah ada
//! - Copy Frames: `VideoFrame` menyimpan metadata inline, bisa dikirim
//!   antar thread tanpa alokasi per frame
//!
//! ```rust
//! use framemeta::protocol;
//!
//! let bytes = protocol::encode(&[1.2f32, 2.3]);
//! assert_eq!(bytes.len(), 8);
//! assert_eq!(protocol::decode::<f32>(&bytes), vec![1.2, 2.3]);
//! ```
//!
//! Byte order selalu native. Producer dan consumer harus berjalan di
//! platform dengan byte order yang sama.

pub mod error;
pub mod frame;
pub mod pose;
pub mod protocol;

pub use error::{CodecError, Result};
