//! Protocol Layer: Fixed-Layout Binary Encoding
//!
//! Prinsip desain:
//! - Flat Binary: element di-copy dengan native memory layout
//! - No metadata: tidak ada header, panjang = `len / width`
//! - No allocation: `encode_into`, `Encoder`, dan `Decoder` bekerja di
//!   buffer yang sudah ada

mod cast;
mod codec;
mod dynamic;
mod element;

pub use codec::{
    decode, element_count, encode, encode_into, encoded_len, split_elements, view, Decoder,
    Encoder,
};
pub use dynamic::ElementSequence;
pub use element::{ElementKind, ElementType, NumericElement};
