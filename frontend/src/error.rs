use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    /// The auth service answered with anything other than 200.
    #[error("login rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("request failed: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("request cancelled")]
    Cancelled,
    #[error("could not access local storage: {0}")]
    Storage(String),
}

impl AuthError {
    /// Text for the error toast. Rejections show the server payload verbatim.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Rejected { message, .. } => message.clone(),
            AuthError::Network(_) => "Could not reach the server. Please try again.".to_string(),
            AuthError::Timeout => "The server took too long to respond. Please try again.".to_string(),
            AuthError::Cancelled => "Sign in was cancelled.".to_string(),
            AuthError::Storage(_) => "Could not save your session in this browser.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_shows_server_payload_verbatim() {
        let err = AuthError::Rejected {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.user_message(), "Invalid credentials");
        assert_eq!(err.to_string(), "login rejected with status 401: Invalid credentials");
    }

    #[test]
    fn transport_failures_hide_internal_details() {
        let err = AuthError::Network("TypeError: Failed to fetch".to_string());
        assert!(!err.user_message().contains("TypeError"));
        assert!(AuthError::Timeout.user_message().contains("too long"));
    }
}
