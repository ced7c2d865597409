//! Error types untuk codec metadata.
//!
//! Semua operasi yang bisa gagal mengembalikan `Result<T, CodecError>`.
//! Tidak ada kind `CorruptData`: buffer tidak membawa header, checksum,
//! atau type tag, jadi setiap buffer dengan panjang berapapun bisa di-decode.

use crate::protocol::ElementType;

/// Error dari codec, pose record, dan frame metadata.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Element type tidak didukung, atau sequence diminta sebagai type lain
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Type yang diminta caller
        expected: String,
        /// Type yang sebenarnya ditemukan
        found: String,
    },

    /// Element width nol (tidak ada element yang bisa dibaca)
    #[error("invalid element width: {width}")]
    InvalidWidth {
        /// Width yang diminta, dalam bytes
        width: usize,
    },

    /// Destination buffer lebih kecil dari `count * width`
    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall {
        /// Bytes yang dibutuhkan
        needed: usize,
        /// Bytes yang tersedia
        available: usize,
    },

    /// Byte span tidak aligned untuk zero-copy view
    #[error("buffer not aligned for {element}")]
    Misaligned {
        /// Element type yang diminta
        element: ElementType,
    },

    /// Pose record kurang dari jumlah element minimum
    #[error("incomplete pose record: need {expected} elements, got {actual}")]
    IncompleteRecord {
        /// Jumlah element minimum
        expected: usize,
        /// Jumlah element yang di-decode
        actual: usize,
    },

    /// Metadata melebihi batas per-frame
    #[error("metadata too large: {size} bytes (max: {max})")]
    MetadataTooLarge {
        /// Ukuran payload
        size: usize,
        /// Batas maksimum
        max: usize,
    },
}

impl CodecError {
    pub(crate) fn type_mismatch(expected: impl ToString, found: impl ToString) -> Self {
        Self::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

/// Result alias untuk operasi codec
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CodecError::BufferTooSmall {
            needed: 32,
            available: 16,
        };
        assert_eq!(err.to_string(), "buffer too small: need 32 bytes, have 16");

        let err = CodecError::type_mismatch(ElementType::F32, "complex64");
        assert_eq!(err.to_string(), "type mismatch: expected f32, found complex64");
    }
}
