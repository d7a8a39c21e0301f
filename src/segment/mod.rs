//! Summary segmentation: raw text to the block document model.

mod options;
mod segmenter;

pub use options::SegmentOptions;
pub use segmenter::{segment, Segmenter};
