//! Camera pose record
//!
//! Layout (f32, native byte order):
//! ┌───┬───┬───┬────┬────┬────┬───────┬─────┐
//! │ x │ y │ z │ rx │ ry │ rz │ zNear │ fov │
//! └───┴───┴───┴────┴────┴────┴───────┴─────┘
//!   0   1   2   3    4    5     6       7
//!
//! Index 6-7 opsional: `PoseLayout::Basic` = 24 bytes,
//! `PoseLayout::WithProjection` = 32 bytes.

use std::fmt;

use log::debug;

use crate::error::{CodecError, Result};
use crate::protocol;

/// Jumlah element untuk pose tanpa projection
pub const BASIC_ELEMENTS: usize = 6;
/// Jumlah element untuk pose dengan projection
pub const FULL_ELEMENTS: usize = 8;

/// Layout pose record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseLayout {
    /// Position + Euler angles
    Basic,
    /// Position + Euler angles + near plane + field of view
    WithProjection,
}

impl PoseLayout {
    #[inline(always)]
    pub const fn element_count(self) -> usize {
        match self {
            Self::Basic => BASIC_ELEMENTS,
            Self::WithProjection => FULL_ELEMENTS,
        }
    }

    /// Ukuran hasil encode dalam bytes
    #[inline(always)]
    pub const fn encoded_len(self) -> usize {
        protocol::encoded_len::<f32>(self.element_count())
    }
}

/// Parameter projection kamera
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Projection {
    pub z_near: f32,
    /// Field of view dalam radian
    pub fov: f32,
}

/// Pose kamera pengirim
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraPose {
    pub position: [f32; 3],
    /// Euler angles (pitch, yaw, roll) dalam radian
    pub euler: [f32; 3],
    pub projection: Option<Projection>,
}

impl CameraPose {
    pub fn new(position: [f32; 3], euler: [f32; 3]) -> Self {
        Self {
            position,
            euler,
            projection: None,
        }
    }

    pub fn with_projection(mut self, z_near: f32, fov: f32) -> Self {
        self.projection = Some(Projection { z_near, fov });
        self
    }

    /// Ambil translation dari kolom ke-3 transform 4x4 (column-major)
    pub fn from_transform(transform: &[[f32; 4]; 4], euler: [f32; 3]) -> Self {
        let column = transform[3];
        Self::new([column[0], column[1], column[2]], euler)
    }

    pub fn layout(&self) -> PoseLayout {
        match self.projection {
            Some(_) => PoseLayout::WithProjection,
            None => PoseLayout::Basic,
        }
    }

    /// Values dalam urutan wire, tanpa alokasi
    fn packed(&self) -> ([f32; FULL_ELEMENTS], usize) {
        let [x, y, z] = self.position;
        let [rx, ry, rz] = self.euler;
        let Projection { z_near, fov } = self.projection.unwrap_or_default();

        (
            [x, y, z, rx, ry, rz, z_near, fov],
            self.layout().element_count(),
        )
    }

    /// Values dalam urutan wire: `x y z rx ry rz [zNear fov]`
    pub fn to_elements(&self) -> Vec<f32> {
        let (values, count) = self.packed();
        values[..count].to_vec()
    }

    /// Bangun pose dari values.
    ///
    /// 8 atau lebih element: dengan projection. 6 atau 7: basic, element
    /// ekstra diabaikan. Kurang dari 6: `IncompleteRecord`.
    pub fn from_elements(values: &[f32]) -> Result<Self> {
        if values.len() < BASIC_ELEMENTS {
            return Err(CodecError::IncompleteRecord {
                expected: BASIC_ELEMENTS,
                actual: values.len(),
            });
        }

        let pose = Self::new(
            [values[0], values[1], values[2]],
            [values[3], values[4], values[5]],
        );

        let layout = if values.len() >= FULL_ELEMENTS {
            PoseLayout::WithProjection
        } else {
            PoseLayout::Basic
        };
        if values.len() != layout.element_count() {
            debug!(
                "pose record has {} elements, using first {}",
                values.len(),
                layout.element_count()
            );
        }

        Ok(match layout {
            PoseLayout::WithProjection => pose.with_projection(values[6], values[7]),
            PoseLayout::Basic => pose,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let (values, count) = self.packed();
        protocol::encode(&values[..count])
    }

    /// Encode langsung ke `dst`, returns jumlah bytes yang ditulis
    pub fn encode_into(&self, dst: &mut [u8]) -> Result<usize> {
        let (values, count) = self.packed();
        protocol::encode_into(&values[..count], dst)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let mut values = [0f32; FULL_ELEMENTS];
        let mut count = 0;
        for (slot, value) in values.iter_mut().zip(protocol::Decoder::<f32>::new(bytes)) {
            *slot = value;
            count += 1;
        }

        if count < protocol::element_count::<f32>(bytes.len()) {
            debug!(
                "pose record has {} elements, using first {}",
                protocol::element_count::<f32>(bytes.len()),
                count
            );
        }
        Self::from_elements(&values[..count])
    }
}

impl fmt::Display for CameraPose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.position;
        let [rx, ry, rz] = self.euler;
        write!(
            f,
            "[x: {x:.2}, y: {y:.2}, z: {z:.2}]\n[rx: {rx:.2}, ry: {ry:.2}, rz: {rz:.2}]"
        )?;
        if let Some(Projection { z_near, fov }) = self.projection {
            write!(f, "\n[zNear: {z_near:.2}, fov: {fov:.2}]")?;
        }
        Ok(())
    }
}
