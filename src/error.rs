/// Error types shared by the REST adapter, the SOAP adapter and the view-model
use thiserror::Error;

/// Errors that can occur while talking to the catalog backend
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never completed (DNS failure, refused connection, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("HTTP error! status: {status}")]
    Http {
        /// Numeric HTTP status code
        status: u16,
    },

    /// The SOAP endpoint answered 2xx but the envelope carries a fault
    #[error("SOAP Fault: {message}")]
    SoapFault {
        /// Text of the fault's `faultstring` element
        message: String,
    },

    /// A required field was missing before submitting a form
    #[error("Validation error: {0}")]
    Validation(String),

    /// A successful response whose body could not be decoded (JSON or XML)
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl CatalogError {
    /// Short user-facing notification text, one per error kind.
    pub fn notice(&self) -> String {
        match self {
            CatalogError::Network(_) => "Could not reach the catalog service".to_string(),
            CatalogError::Http { status } => format!("The catalog service answered with status {}", status),
            CatalogError::SoapFault { message } => format!("The SOAP service reported a fault: {}", message),
            CatalogError::Validation(msg) => msg.clone(),
            CatalogError::Decode(_) => "The catalog service sent an unreadable response".to_string(),
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            CatalogError::Http { status: status.as_u16() }
        } else if e.is_decode() {
            CatalogError::Decode(e.to_string())
        } else {
            CatalogError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_contains_status() {
        let e = CatalogError::Http { status: 503 };
        assert_eq!(e.to_string(), "HTTP error! status: 503");
    }

    #[test]
    fn test_soap_fault_message() {
        let e = CatalogError::SoapFault { message: "Invalid category".into() };
        assert_eq!(e.to_string(), "SOAP Fault: Invalid category");
        assert!(e.notice().contains("Invalid category"));
    }

    #[test]
    fn test_validation_notice_is_the_message() {
        let e = CatalogError::Validation("Name is required".into());
        assert_eq!(e.notice(), "Name is required");
    }
}
