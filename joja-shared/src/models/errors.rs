use serde::{Deserialize, Serialize};

/// Error body the backend attaches to non-2xx responses.
///
/// The backend reports every failure as `{"detail": "..."}`, with the message
/// already phrased for end users ("CPF já cadastrado", "Jardim não
/// encontrado", ...), so pages surface it verbatim.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The user-facing error message.
    pub detail: String,
}

impl ErrorResponse {
    /// Creates an error payload with the provided message.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.detail)
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_detail() {
        let json = r#"{"detail":"CPF ou senha incorretos"}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.detail, "CPF ou senha incorretos");
        assert_eq!(error.to_string(), "CPF ou senha incorretos");
    }

    #[test]
    fn construction_and_equality() {
        let a = ErrorResponse::new("Jardim não encontrado");
        let b = ErrorResponse::new("Jardim não encontrado");
        assert_eq!(a, b);
        assert_ne!(a, ErrorResponse::new("outro"));
    }

    #[test]
    fn is_an_error() {
        let error = ErrorResponse::new("Email já cadastrado");
        let as_error: &dyn std::error::Error = &error;
        assert!(as_error.to_string().contains("Email"));
    }
}
