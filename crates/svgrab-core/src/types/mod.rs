//! Core data types.

mod image_record;

pub use image_record::DATA_IMAGE_PREFIX;
pub use image_record::ImageRecord;
