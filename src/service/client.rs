use url::Url;

use crate::error::BinderError;

/// Header the image service sets when it generated random overlay text.
pub const RANDOM_TEXT_HEADER: &str = "X-Random-Text";

/// A preview image downloaded from the image service.
#[derive(Debug, Clone)]
pub struct PreviewImage {
    pub content_type: Option<String>,
    pub random_text: Option<String>,
    pub bytes: Vec<u8>,
}

/// Blocking HTTP client for the external image-generation service.
pub struct ImageServiceClient {
    client: reqwest::blocking::Client,
}

impl Default for ImageServiceClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageServiceClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn fetch(&self, url: &Url) -> Result<PreviewImage, BinderError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|e| BinderError::Http {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BinderError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let header = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let content_type = header("content-type");
        let random_text = header(RANDOM_TEXT_HEADER);

        let bytes = response.bytes().map_err(|e| BinderError::Http {
            url: url.to_string(),
            source: e,
        })?;

        Ok(PreviewImage {
            content_type,
            random_text,
            bytes: bytes.to_vec(),
        })
    }
}

/// File name for a downloaded preview: a short SHA-1 of the URL plus the
/// format segment of the endpoint path as extension.
pub fn preview_file_name(url: &Url) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(url.as_str().as_bytes());
    let digest = format!("{:x}", hasher.finalize());

    let extension = url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .unwrap_or("img");

    format!("preview-{}.{}", &digest[..12], extension)
}
