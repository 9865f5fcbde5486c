use thiserror::Error;

/// Errors that can occur when validating tutorial input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TutorialError {
    #[error("Tutorial title is required")]
    MissingTitle,
    #[error("Tutorial title cannot be empty")]
    EmptyTitle,
    #[error("Invalid tutorial id: {0}")]
    InvalidId(String),
    #[error("No tutorial ids left after {0}")]
    IdsExhausted(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tutorial_error_display() {
        assert_eq!(
            TutorialError::MissingTitle.to_string(),
            "Tutorial title is required"
        );
        assert_eq!(
            TutorialError::EmptyTitle.to_string(),
            "Tutorial title cannot be empty"
        );
        assert_eq!(
            TutorialError::InvalidId("abc".to_string()).to_string(),
            "Invalid tutorial id: abc"
        );
        assert_eq!(
            TutorialError::IdsExhausted(i64::MAX).to_string(),
            "No tutorial ids left after 9223372036854775807"
        );
    }
}
