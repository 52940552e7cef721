use super::error::ImageError;
use crate::domain::request::{endpoints, MultipartFile, Payload, RequestDispatcher};
use crate::domain::session::avatar::to_data_url;
use crate::errors::PortalError;
use base64::{engine::general_purpose::STANDARD, Engine as _};

pub const DEFAULT_IMAGE_TYPE: &str = "jpeg";

const UPLOAD_FIELD: &str = "file";

/// A file picked by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Decoded `data:<mime>;base64,<payload>` URL.
#[derive(Debug, Clone, PartialEq)]
pub struct DataUrl {
    pub mime: String,
    pub bytes: Vec<u8>,
}

pub fn read_file_as_data_url(file: &ImageFile) -> String {
    to_data_url(&file.mime_type, &file.bytes)
}

pub fn parse_data_url(data_url: &str) -> Result<DataUrl, ImageError> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| ImageError::invalid_data_url("missing data: prefix"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| ImageError::invalid_data_url("missing payload separator"))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| ImageError::invalid_data_url("payload is not base64"))?;

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| ImageError::decode(e.to_string()))?;
    if bytes.is_empty() {
        return Err(ImageError::EmptyImage);
    }

    Ok(DataUrl {
        mime: mime.to_string(),
        bytes,
    })
}

/// The `<letters>` of the first `image/<letters>` in the header (the part
/// before the first comma), `jpeg` otherwise.
pub fn image_file_type(data_url: &str) -> String {
    let header = data_url.split(',').next().unwrap_or_default();
    header
        .find("image/")
        .map(|start| &header[start + "image/".len()..])
        .map(|tail| {
            tail.chars()
                .take_while(|c| c.is_ascii_alphabetic())
                .collect::<String>()
        })
        .filter(|kind| !kind.is_empty())
        .unwrap_or_else(|| DEFAULT_IMAGE_TYPE.to_string())
}

/// Sends the decoded image as multipart field `file`.
pub async fn upload_image(
    dispatcher: &RequestDispatcher,
    request_url: &str,
    data_url: &str,
) -> Result<Payload, PortalError> {
    let decoded = parse_data_url(data_url)?;
    let kind = image_file_type(data_url);

    let part = MultipartFile {
        field: UPLOAD_FIELD.to_string(),
        file_name: format!("image.{kind}"),
        mime_type: format!("image/{kind}"),
        bytes: decoded.bytes,
    };

    Ok(dispatcher
        .post_multipart(&format!("{request_url}{}", endpoints::IMAGE), vec![part])
        .await?)
}
