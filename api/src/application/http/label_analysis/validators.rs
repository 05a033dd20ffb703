use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

pub const MAX_TEXT_LENGTH: u64 = 20_000;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnalyzeImageRequest {
    /// `data:image/<type>;base64,...` or a bare base64 string.
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "No image provided"))]
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnalyzeTextRequest {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "No text provided"),
        length(max = MAX_TEXT_LENGTH, message = "Text must be at most 20000 characters")
    )]
    pub text: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_fails_validation() {
        let request = AnalyzeTextRequest {
            text: "  \n ".to_string(),
        };
        assert!(request.validate().is_err());

        let request = AnalyzeTextRequest {
            text: "Sugar, Water".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_text_length_limit() {
        let request = AnalyzeTextRequest {
            text: "a".repeat(MAX_TEXT_LENGTH as usize + 1),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_missing_image_field_defaults_to_blank() {
        let request: AnalyzeImageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.image, "");
        assert!(request.validate().is_err());
    }
}
