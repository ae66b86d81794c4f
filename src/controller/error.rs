//! Action Error Types
//!
//! A create or delete is followed by a full refresh, so a user action can
//! fail at two different points: the mutation request itself, or the
//! refresh after the server already applied the change.

use thiserror::Error;

use crate::api::ClientError;

/// Result alias for user actions
pub type ActionResult<T> = Result<T, ActionError>;

/// Failure of a create or delete action
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    /// The create or delete request failed
    #[error(transparent)]
    Request(#[from] ClientError),

    /// The change went through, but re-fetching the list or summary failed
    #[error("Change saved, but refreshing failed: {0}")]
    Refresh(ClientError),
}

impl ActionError {
    /// The underlying request error
    pub fn client_error(&self) -> &ClientError {
        match self {
            ActionError::Request(e) | ActionError::Refresh(e) => e,
        }
    }

    /// Short text suitable for an inline banner or toast
    pub fn user_message(&self) -> String {
        match self {
            ActionError::Request(e) => e.user_message(),
            ActionError::Refresh(e) => {
                format!("Change saved, but the page could not be refreshed: {}", e.user_message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_reads_like_client_error() {
        let error = ActionError::from(ClientError::Transport("refused".to_string()));

        assert_eq!(error.to_string(), "Network error: refused");
        assert_eq!(error.user_message(), "Could not reach the expense server");
    }

    #[test]
    fn test_refresh_error_says_change_was_saved() {
        let error = ActionError::Refresh(ClientError::Transport("refused".to_string()));

        assert_eq!(
            error.user_message(),
            "Change saved, but the page could not be refreshed: Could not reach the expense server"
        );
        assert_eq!(error.client_error(), &ClientError::Transport("refused".to_string()));
    }
}
