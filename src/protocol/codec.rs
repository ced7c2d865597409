//! Fixed-Layout Encoder/Decoder
//!
//! Layout buffer:
//! ┌──────────┬──────────┬─────┬──────────────┐
//! │ elem[0]  │ elem[1]  │ ... │ elem[n-1]    │  n * width bytes
//! └──────────┴──────────┴─────┴──────────────┘
//!
//! Tidak ada header, length prefix, checksum, atau type tag. Consumer
//! harus tahu element type; jumlah element = `len / width`.
//!
//! Byte order native. Encoder dan decoder harus berjalan di platform dengan
//! byte order yang sama.

use log::debug;

use super::cast;
use super::element::NumericElement;
use crate::error::{CodecError, Result};

/// Panjang buffer untuk `count` element
#[inline(always)]
pub const fn encoded_len<T: NumericElement>(count: usize) -> usize {
    count * T::WIDTH
}

/// Jumlah element utuh di buffer sepanjang `len` bytes
#[inline(always)]
pub const fn element_count<T: NumericElement>(len: usize) -> usize {
    len / T::WIDTH
}

/// Encode values ke buffer baru.
///
/// Buffer yang dihasilkan tepat `values.len() * T::WIDTH` bytes.
#[inline]
pub fn encode<T: NumericElement>(values: &[T]) -> Vec<u8> {
    cast::as_bytes(values).to_vec()
}

/// Encode values langsung ke `dst` (zero-allocation).
///
/// Returns jumlah bytes yang ditulis. Bytes di `dst` setelah itu tidak
/// disentuh.
#[inline]
pub fn encode_into<T: NumericElement>(values: &[T], dst: &mut [u8]) -> Result<usize> {
    let needed = encoded_len::<T>(values.len());
    if needed > dst.len() {
        return Err(CodecError::BufferTooSmall {
            needed,
            available: dst.len(),
        });
    }

    dst[..needed].copy_from_slice(cast::as_bytes(values));
    Ok(needed)
}

/// Decode buffer menjadi values.
///
/// Trailing bytes yang tidak membentuk element utuh (`len % width`)
/// diabaikan, bukan error.
pub fn decode<T: NumericElement>(bytes: &[u8]) -> Vec<T> {
    log_trailing::<T>(bytes.len());
    cast::to_vec(bytes)
}

/// Zero-copy typed view atas buffer.
///
/// Sama seperti `decode`, trailing bytes diabaikan. Gagal dengan
/// `Misaligned` kalau alamat buffer tidak aligned untuk `T`.
pub fn view<T: NumericElement>(bytes: &[u8]) -> Result<&[T]> {
    log_trailing::<T>(bytes.len());
    cast::try_view(bytes)
}

/// Potong buffer menjadi chunk `width` bytes.
///
/// Untuk caller yang hanya tahu width di runtime. Width nol menghasilkan
/// `InvalidWidth`.
pub fn split_elements(bytes: &[u8], width: usize) -> Result<std::slice::ChunksExact<'_, u8>> {
    if width == 0 {
        return Err(CodecError::InvalidWidth { width });
    }
    Ok(bytes.chunks_exact(width))
}

#[inline(always)]
fn log_trailing<T: NumericElement>(len: usize) {
    let trailing = len % T::WIDTH;
    if trailing != 0 {
        debug!(
            "ignoring {} trailing bytes after {} {} elements",
            trailing,
            element_count::<T>(len),
            T::TYPE
        );
    }
}

/// Pre-allocated encoder buffer
///
/// Dipakai ulang antar frame: setiap `encode` menimpa isi sebelumnya,
/// tidak ada alokasi setelah inisialisasi.
pub struct Encoder {
    buffer: Box<[u8]>,
    len: usize,
}

impl Encoder {
    /// Membuat encoder dengan kapasitas tertentu (bytes)
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![0u8; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Encode values, menggantikan isi sebelumnya.
    ///
    /// Jika kapasitas tidak cukup, isi sebelumnya tetap utuh.
    #[inline]
    pub fn encode<T: NumericElement>(&mut self, values: &[T]) -> Result<&[u8]> {
        self.len = encode_into(values, &mut self.buffer)?;
        Ok(&self.buffer[..self.len])
    }

    /// Hasil encode terakhir
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }
}

/// Zero-copy decoder
///
/// Membaca element satu per satu dari buffer pinjaman, tanpa alokasi dan
/// tanpa syarat alignment.
pub struct Decoder<'a, T> {
    buffer: &'a [u8],
    read_pos: usize,
    count: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<'a, T: NumericElement> Decoder<'a, T> {
    /// Membuat decoder dari buffer
    #[inline(always)]
    pub fn new(buffer: &'a [u8]) -> Self {
        log_trailing::<T>(buffer.len());
        Self {
            buffer,
            read_pos: 0,
            count: element_count::<T>(buffer.len()),
            _marker: std::marker::PhantomData,
        }
    }

    /// Element yang belum dibaca
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.count - self.read_pos
    }

    /// Bytes setelah element utuh terakhir (selalu kurang dari width)
    #[inline(always)]
    pub fn trailing(&self) -> &'a [u8] {
        &self.buffer[encoded_len::<T>(self.count)..]
    }
}

impl<'a, T: NumericElement> Iterator for Decoder<'a, T> {
    type Item = T;

    #[inline(always)]
    fn next(&mut self) -> Option<T> {
        if self.read_pos >= self.count {
            return None;
        }
        let value = cast::read_at(self.buffer, self.read_pos);
        self.read_pos += 1;
        Some(value)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a, T: NumericElement> ExactSizeIterator for Decoder<'a, T> {}
