//! Error types for document loading

use thiserror::Error;

/// Document loading and rendering errors
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Malformed front matter: {reason}")]
    MalformedMetadata { reason: String },

    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Markup render error: {reason}")]
    MarkupRenderError { reason: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LoadError::MalformedMetadata {
            reason: "unterminated front-matter block".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed front matter: unterminated front-matter block"
        );

        let err = LoadError::MissingRequiredField("title");
        assert_eq!(err.to_string(), "Missing required field: title");

        let err = LoadError::MarkupRenderError {
            reason: "unterminated code fence".to_string(),
        };
        assert_eq!(err.to_string(), "Markup render error: unterminated code fence");

        let err = LoadError::InvalidConfig {
            reason: "unexpected end of stream".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: unexpected end of stream"
        );
    }
}
