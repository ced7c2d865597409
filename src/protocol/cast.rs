//! Reinterpretasi bytes <-> typed values
//!
//! Semua cast di crate ini lewat modul ini. Cast dilakukan oleh `bytemuck`
//! (checked, `Pod`-only), jadi tidak ada raw pointer cast di tempat lain.
//! Byte order selalu native.

use super::element::NumericElement;
use crate::error::{CodecError, Result};

/// Panjang prefix yang berisi element utuh
#[inline(always)]
pub(crate) fn whole_len<T: NumericElement>(len: usize) -> usize {
    len - len % T::WIDTH
}

/// Lihat values sebagai bytes (zero-copy)
#[inline(always)]
pub(crate) fn as_bytes<T: NumericElement>(values: &[T]) -> &[u8] {
    bytemuck::cast_slice(values)
}

/// Typed view atas element utuh di `bytes` (zero-copy).
///
/// Trailing bytes diabaikan. Gagal dengan `Misaligned` jika alamat
/// `bytes` tidak aligned untuk `T`.
#[inline]
pub(crate) fn try_view<T: NumericElement>(bytes: &[u8]) -> Result<&[T]> {
    let whole = &bytes[..whole_len::<T>(bytes.len())];
    if whole.is_empty() {
        return Ok(&[]);
    }

    // Sudah dipotong ke kelipatan width, jadi hanya alignment yang bisa gagal
    bytemuck::try_cast_slice(whole).map_err(|_| CodecError::Misaligned { element: T::TYPE })
}

/// Baca element ke-`index` tanpa syarat alignment
#[inline(always)]
pub(crate) fn read_at<T: NumericElement>(bytes: &[u8], index: usize) -> T {
    let start = index * T::WIDTH;
    bytemuck::pod_read_unaligned(&bytes[start..start + T::WIDTH])
}

/// Copy semua element utuh ke `Vec<T>`.
///
/// Fast path: satu memcpy kalau buffer aligned, selain itu baca per element.
pub(crate) fn to_vec<T: NumericElement>(bytes: &[u8]) -> Vec<T> {
    match try_view::<T>(bytes) {
        Ok(values) => values.to_vec(),
        Err(_) => bytes
            .chunks_exact(T::WIDTH)
            .map(bytemuck::pod_read_unaligned)
            .collect(),
    }
}
