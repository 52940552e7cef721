pub mod error;
pub mod operations;

pub use error::ImageError;
pub use operations::{
    image_file_type, parse_data_url, read_file_as_data_url, upload_image, DataUrl, ImageFile,
    DEFAULT_IMAGE_TYPE,
};
