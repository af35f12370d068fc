use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    MissingInput(String),

    #[error("{0}")]
    MissingCredential(String),

    #[error("{0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn missing_input(msg: impl Into<String>) -> Self {
        Self::MissingInput(msg.into())
    }

    pub fn missing_credential(msg: impl Into<String>) -> Self {
        Self::MissingCredential(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput(_))
    }

    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential(_))
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_displays_bare_message() {
        let err = DomainError::upstream("connection refused");
        assert_eq!(err.to_string(), "connection refused");
        assert!(err.is_upstream());
        assert!(!err.is_missing_input());
    }

    #[test]
    fn variants_are_classified() {
        assert!(DomainError::missing_input("No message provided").is_missing_input());
        assert!(DomainError::missing_credential("no key").is_missing_credential());
        assert!(!DomainError::internal("boom").is_upstream());
    }
}
