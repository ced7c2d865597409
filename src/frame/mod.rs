//! Frame Layer: video frame yang membawa metadata
//!
//! - `FrameMetadata`: storage inline fixed-capacity, `Copy`
//! - `VideoFrame`: header frame + satu metadata attachment

mod metadata;
mod video;

pub use metadata::{FrameMetadata, METADATA_CAPACITY};
pub use video::{FrameConfig, Orientation, VideoFrame};
