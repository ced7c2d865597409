//! Fixed-width numeric element types
//!
//! Setiap element punya width tetap (compile-time) dan di-encode dengan
//! native byte order. `ElementType` adalah tag runtime untuk caller yang
//! tidak tahu type di compile-time.

use std::fmt;
use std::str::FromStr;

use bytemuck::Pod;

use crate::error::{CodecError, Result};

/// Kategori numeric untuk element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Unsigned,
    Signed,
    Float,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unsigned => "unsigned",
            Self::Signed => "signed",
            Self::Float => "float",
        };
        f.write_str(name)
    }
}

/// Runtime tag untuk element type yang didukung
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    U8 = 1,
    U16 = 2,
    U32 = 3,
    U64 = 4,
    I8 = 5,
    I16 = 6,
    I32 = 7,
    I64 = 8,
    F32 = 9,
    F64 = 10,
}

impl ElementType {
    /// Semua element type, urut berdasarkan tag
    pub const ALL: [ElementType; 10] = [
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::F32,
        Self::F64,
    ];

    /// Width dalam bytes
    #[inline(always)]
    pub const fn width(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::U64 | Self::I64 | Self::F64 => 8,
        }
    }

    #[inline(always)]
    pub const fn kind(self) -> ElementKind {
        match self {
            Self::U8 | Self::U16 | Self::U32 | Self::U64 => ElementKind::Unsigned,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 => ElementKind::Signed,
            Self::F32 | Self::F64 => ElementKind::Float,
        }
    }

    #[inline(always)]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Parse dari tag byte
    pub fn from_tag(tag: u8) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.tag() == tag)
            .ok_or_else(|| CodecError::type_mismatch("element type tag", format!("tag {tag}")))
    }

    /// Cari element type dari kategori dan width.
    ///
    /// Width nol menghasilkan `InvalidWidth`; kombinasi yang tidak
    /// didukung (misalnya float 3-byte) menghasilkan `TypeMismatch`.
    pub fn from_parts(kind: ElementKind, width: usize) -> Result<Self> {
        if width == 0 {
            return Err(CodecError::InvalidWidth { width });
        }

        Self::ALL
            .iter()
            .copied()
            .find(|t| t.kind() == kind && t.width() == width)
            .ok_or_else(|| {
                CodecError::type_mismatch("supported element type", format!("{kind} width {width}"))
            })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementType {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        let t = match s.trim().to_ascii_lowercase().as_str() {
            "u8" | "uint8" => Self::U8,
            "u16" | "uint16" => Self::U16,
            "u32" | "uint32" => Self::U32,
            "u64" | "uint64" => Self::U64,
            "i8" | "int8" => Self::I8,
            "i16" | "int16" => Self::I16,
            "i32" | "int32" => Self::I32,
            "i64" | "int64" => Self::I64,
            "f32" | "float32" | "float" => Self::F32,
            "f64" | "float64" | "double" => Self::F64,
            _ => return Err(CodecError::type_mismatch("element type name", s)),
        };
        Ok(t)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Numeric type yang bisa di-encode oleh codec.
///
/// Sealed: hanya primitive integer dan float bawaan. `Pod` menjamin
/// setiap bit pattern valid, jadi decode dari bytes arbitrary selalu aman.
pub trait NumericElement: Pod + PartialEq + fmt::Debug + sealed::Sealed {
    /// Tag runtime untuk type ini
    const TYPE: ElementType;

    /// Width dalam bytes
    const WIDTH: usize = std::mem::size_of::<Self>();
}

macro_rules! impl_numeric_element {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl NumericElement for $ty {
                const TYPE: ElementType = ElementType::$variant;
            }
        )*
    };
}

impl_numeric_element! {
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

    fn assert_width<T: NumericElement>() {
        assert_eq!(T::WIDTH, T::TYPE.width(), "{}", T::TYPE);
    }

    #[test]
    fn test_width_matches_type() {
        assert_width::<u8>();
        assert_width::<u16>();
        assert_width::<u32>();
        assert_width::<u64>();
        assert_width::<i8>();
        assert_width::<i16>();
        assert_width::<i32>();
        assert_width::<i64>();
        assert_width::<f32>();
        assert_width::<f64>();
    }

    #[test]
    fn test_tag_roundtrip() {
        for t in ElementType::ALL {
            assert_eq!(ElementType::from_tag(t.tag()).unwrap(), t);
        }
        assert!(matches!(
            ElementType::from_tag(0),
            Err(CodecError::TypeMismatch { .. })
        ));
        assert!(ElementType::from_tag(11).is_err());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("float".parse::<ElementType>().unwrap(), ElementType::F32);
        assert_eq!("Float32".parse::<ElementType>().unwrap(), ElementType::F32);
        assert_eq!("double".parse::<ElementType>().unwrap(), ElementType::F64);
        assert_eq!(" i16 ".parse::<ElementType>().unwrap(), ElementType::I16);

        let err = "complex64".parse::<ElementType>().unwrap_err();
        assert!(matches!(err, CodecError::TypeMismatch { .. }));
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(
            ElementType::from_parts(ElementKind::Float, 4).unwrap(),
            ElementType::F32
        );
        assert_eq!(
            ElementType::from_parts(ElementKind::Signed, 8).unwrap(),
            ElementType::I64
        );
        assert_eq!(
            ElementType::from_parts(ElementKind::Float, 0),
            Err(CodecError::InvalidWidth { width: 0 })
        );
        assert!(matches!(
            ElementType::from_parts(ElementKind::Float, 2),
            Err(CodecError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_from_parts_huge_width() {
        // Width dari caller bisa berapa saja, tidak boleh overflow
        assert_eq!(
            ElementType::from_parts(ElementKind::Float, usize::MAX),
            Err(CodecError::TypeMismatch {
                expected: "supported element type".to_string(),
                found: format!("float width {}", usize::MAX),
            })
        );
        assert!(matches!(
            ElementType::from_parts(ElementKind::Unsigned, usize::MAX / 4),
            Err(CodecError::TypeMismatch { .. })
        ));
    }
}
