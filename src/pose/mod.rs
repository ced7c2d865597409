//! Pose Layer: camera pose record di atas codec
//!
//! Producer meng-encode pose sebagai 6 atau 8 f32 sebelum frame dikirim;
//! consumer men-decode dengan konvensi index yang sama.

mod camera;

pub use camera::{CameraPose, PoseLayout, Projection, BASIC_ELEMENTS, FULL_ELEMENTS};
