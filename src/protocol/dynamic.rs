//! Tagged-variant wrapper untuk caller yang memilih element type di runtime.
//!
//! Hot path tetap monomorphic (`codec::encode::<T>` / `codec::decode::<T>`);
//! dispatch hanya terjadi di boundary ini.

use super::codec;
use super::element::{ElementType, NumericElement};
use crate::error::{CodecError, Result};

/// Sequence homogen dengan element type yang dibawa sebagai tag
#[derive(Debug, Clone, PartialEq)]
pub enum ElementSequence {
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    U64(Vec<u64>),
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

macro_rules! dispatch {
    ($seq:expr, $values:ident => $body:expr) => {
        match $seq {
            ElementSequence::U8($values) => $body,
            ElementSequence::U16($values) => $body,
            ElementSequence::U32($values) => $body,
            ElementSequence::U64($values) => $body,
            ElementSequence::I8($values) => $body,
            ElementSequence::I16($values) => $body,
            ElementSequence::I32($values) => $body,
            ElementSequence::I64($values) => $body,
            ElementSequence::F32($values) => $body,
            ElementSequence::F64($values) => $body,
        }
    };
}

impl ElementSequence {
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::U8(_) => ElementType::U8,
            Self::U16(_) => ElementType::U16,
            Self::U32(_) => ElementType::U32,
            Self::U64(_) => ElementType::U64,
            Self::I8(_) => ElementType::I8,
            Self::I16(_) => ElementType::I16,
            Self::I32(_) => ElementType::I32,
            Self::I64(_) => ElementType::I64,
            Self::F32(_) => ElementType::F32,
            Self::F64(_) => ElementType::F64,
        }
    }

    pub fn len(&self) -> usize {
        dispatch!(self, values => values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Panjang hasil encode dalam bytes
    pub fn encoded_len(&self) -> usize {
        self.len() * self.element_type().width()
    }

    pub fn encode(&self) -> Vec<u8> {
        dispatch!(self, values => codec::encode(values.as_slice()))
    }

    pub fn encode_into(&self, dst: &mut [u8]) -> Result<usize> {
        dispatch!(self, values => codec::encode_into(values.as_slice(), dst))
    }

    /// Decode buffer sebagai `element_type`
    pub fn decode(bytes: &[u8], element_type: ElementType) -> Self {
        match element_type {
            ElementType::U8 => Self::U8(codec::decode(bytes)),
            ElementType::U16 => Self::U16(codec::decode(bytes)),
            ElementType::U32 => Self::U32(codec::decode(bytes)),
            ElementType::U64 => Self::U64(codec::decode(bytes)),
            ElementType::I8 => Self::I8(codec::decode(bytes)),
            ElementType::I16 => Self::I16(codec::decode(bytes)),
            ElementType::I32 => Self::I32(codec::decode(bytes)),
            ElementType::I64 => Self::I64(codec::decode(bytes)),
            ElementType::F32 => Self::F32(codec::decode(bytes)),
            ElementType::F64 => Self::F64(codec::decode(bytes)),
        }
    }

    /// Decode dengan type tag byte (lihat `ElementType::tag`)
    pub fn decode_tagged(bytes: &[u8], tag: u8) -> Result<Self> {
        Ok(Self::decode(bytes, ElementType::from_tag(tag)?))
    }

    /// Pinjam values sebagai `&[T]`.
    ///
    /// Gagal dengan `TypeMismatch` kalau `T` bukan type sequence ini.
    pub fn as_slice<T: NumericElement>(&self) -> Result<&[T]> {
        let found = self.element_type();
        if found != T::TYPE {
            return Err(CodecError::type_mismatch(T::TYPE, found));
        }

        let bytes: &[u8] = dispatch!(self, values => bytemuck::cast_slice(values.as_slice()));
        // Backing Vec bertipe T, jadi alignment dan panjang selalu cocok
        bytemuck::try_cast_slice(bytes).map_err(|_| CodecError::Misaligned { element: found })
    }
}

macro_rules! impl_from_vec {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$ty>> for ElementSequence {
                fn from(values: Vec<$ty>) -> Self {
                    Self::$variant(values)
                }
            }
        )*
    };
}

impl_from_vec! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(element_type: ElementType) -> ElementSequence {
        match element_type {
            ElementType::U8 => vec![0u8, 1, 255].into(),
            ElementType::U16 => vec![0u16, 513, u16::MAX].into(),
            ElementType::U32 => vec![7u32, u32::MAX].into(),
            ElementType::U64 => vec![u64::MAX, 0, 42].into(),
            ElementType::I8 => vec![-128i8, 0, 127].into(),
            ElementType::I16 => vec![i16::MIN, -1, 300].into(),
            ElementType::I32 => vec![-5i32, 6, i32::MAX].into(),
            ElementType::I64 => vec![i64::MIN, 1].into(),
            ElementType::F32 => vec![1.2f32, 2.3, -0.0, f32::MAX].into(),
            ElementType::F64 => vec![std::f64::consts::PI, -1e300].into(),
        }
    }

    #[test]
    fn test_roundtrip_every_type() {
        for element_type in ElementType::ALL {
            let seq = sample(element_type);
            let bytes = seq.encode();

            assert_eq!(bytes.len(), seq.encoded_len());
            assert_eq!(ElementSequence::decode(&bytes, element_type), seq);
        }
    }

    #[test]
    fn test_float_bits_preserved() {
        let f32_values = vec![
            -0.0f32,
            f32::from_bits(0x0000_0001),
            f32::from_bits(0x7fc0_1234),
            f32::from_bits(0xffa0_0001),
            f32::INFINITY,
        ];
        let seq = ElementSequence::from(f32_values.clone());
        let decoded = ElementSequence::decode(&seq.encode(), ElementType::F32);
        let bits: Vec<u32> = decoded
            .as_slice::<f32>()
            .unwrap()
            .iter()
            .map(|v| v.to_bits())
            .collect();
        assert_eq!(bits, f32_values.iter().map(|v| v.to_bits()).collect::<Vec<_>>());

        let f64_values = vec![
            -0.0f64,
            f64::from_bits(0x0000_0000_0000_0001),
            f64::from_bits(0x7ff8_0000_dead_beef),
            f64::NEG_INFINITY,
        ];
        let seq = ElementSequence::from(f64_values.clone());
        let decoded = ElementSequence::decode(&seq.encode(), ElementType::F64);
        let bits: Vec<u64> = decoded
            .as_slice::<f64>()
            .unwrap()
            .iter()
            .map(|v| v.to_bits())
            .collect();
        assert_eq!(bits, f64_values.iter().map(|v| v.to_bits()).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_buffer_every_type() {
        for element_type in ElementType::ALL {
            let seq = ElementSequence::decode(&[], element_type);
            assert!(seq.is_empty());
            assert_eq!(seq.element_type(), element_type);
        }
    }

    #[test]
    fn test_decode_tagged() {
        let bytes = ElementSequence::from(vec![1.5f64]).encode();
        let seq = ElementSequence::decode_tagged(&bytes, ElementType::F64.tag()).unwrap();
        assert_eq!(seq, ElementSequence::F64(vec![1.5]));

        assert!(matches!(
            ElementSequence::decode_tagged(&bytes, 200),
            Err(CodecError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_as_slice_type_mismatch() {
        let seq = ElementSequence::from(vec![1.0f32, 2.0]);
        assert_eq!(seq.as_slice::<f32>().unwrap(), &[1.0f32, 2.0]);

        let err = seq.as_slice::<f64>().unwrap_err();
        assert_eq!(err, CodecError::type_mismatch("f64", "f32"));
    }

    #[test]
    fn test_encode_into() {
        let seq = ElementSequence::from(vec![1i16, 2, 3]);
        let mut dst = [0u8; 4];
        assert_eq!(
            seq.encode_into(&mut dst),
            Err(CodecError::BufferTooSmall {
                needed: 6,
                available: 4
            })
        );
    }
}
