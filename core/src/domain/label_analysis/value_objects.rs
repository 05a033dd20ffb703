use std::sync::LazyLock;

use base64::{Engine as _, engine::general_purpose};
use regex::Regex;

use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_IMAGE_MEDIA_TYPE: &str = "image/jpeg";

static DATA_URI_PREFIX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^data:(image/[\w.+-]+);base64,"));

/// A label photo ready to be sent to a vision model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelImage {
    pub media_type: String,
    pub data: Vec<u8>,
}

impl LabelImage {
    pub fn new(media_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            data,
        }
    }

    /// Decode a `data:image/<type>;base64,<payload>` URI.
    ///
    /// A bare base64 payload without the prefix is accepted and treated as JPEG.
    pub fn from_data_uri(value: &str) -> Result<Self, CoreError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(CoreError::MissingInput("No image provided".to_string()));
        }

        let prefix = DATA_URI_PREFIX.as_ref().map_err(|e| {
            tracing::error!("Invalid data URI pattern: {}", e);
            CoreError::InternalServerError
        })?;

        let (media_type, payload) = match prefix.captures(value) {
            Some(captures) => {
                let media_type = captures
                    .get(1)
                    .map(|m| m.as_str().to_ascii_lowercase())
                    .unwrap_or_else(|| DEFAULT_IMAGE_MEDIA_TYPE.to_string());
                let payload_start = captures.get(0).map(|m| m.end()).unwrap_or(0);
                (media_type, &value[payload_start..])
            }
            None if value.starts_with("data:") => {
                return Err(CoreError::InvalidImage(
                    "expected a data:image/<type>;base64 URI".to_string(),
                ));
            }
            None => (DEFAULT_IMAGE_MEDIA_TYPE.to_string(), value),
        };

        let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        let data = general_purpose::STANDARD
            .decode(cleaned.as_bytes())
            .map_err(|e| CoreError::InvalidImage(format!("payload is not valid base64: {}", e)))?;

        if data.is_empty() {
            return Err(CoreError::MissingInput("No image provided".to_string()));
        }

        Ok(Self::new(media_type, data))
    }

    /// Wrap raw upload bytes, keeping the declared content type when it is an image type.
    pub fn from_upload(data: Vec<u8>, content_type: Option<&str>) -> Self {
        let media_type = content_type
            .map(|ct| ct.trim().to_ascii_lowercase())
            .filter(|ct| ct.starts_with("image/"))
            .unwrap_or_else(|| DEFAULT_IMAGE_MEDIA_TYPE.to_string());

        Self::new(media_type, data)
    }

    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.data)
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.to_base64())
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeImageInput {
    pub image: LabelImage,
}

#[derive(Debug, Clone)]
pub struct AnalyzeTextInput {
    pub text: String,
}

/// Sampling parameters for one model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub max_tokens: u32,
}
