//! Registry error taxonomy.

use thiserror::Error;

/// Caller-facing error codes (stable API).
///
/// The numeric values follow HTTP-like conventions, which is how ledger
/// receipts report failures on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Caller is not the current admin.
    Unauthorized,
    /// Creation arguments out of range.
    InvalidRange,
    /// Referenced policy does not exist.
    NotFound,
}

impl ErrorCode {
    /// Numeric code used in receipts.
    pub fn as_u16(self) -> u16 {
        match self {
            ErrorCode::Unauthorized => 403,
            ErrorCode::InvalidRange => 400,
            ErrorCode::NotFound => 404,
        }
    }

    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::InvalidRange => "INVALID_RANGE",
            ErrorCode::NotFound => "NOT_FOUND",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Every way a registry call can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unauthorized: caller is not the registry admin")]
    Unauthorized,
    #[error("invalid range: coverage must be positive and end height after start height")]
    InvalidRange,
    #[error("policy not found")]
    NotFound,
}

impl RegistryError {
    /// Map to the stable caller-facing code.
    pub fn code(&self) -> ErrorCode {
        match self {
            RegistryError::Unauthorized => ErrorCode::Unauthorized,
            RegistryError::InvalidRange => ErrorCode::InvalidRange,
            RegistryError::NotFound => ErrorCode::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(RegistryError::Unauthorized.code().as_u16(), 403);
        assert_eq!(RegistryError::InvalidRange.code().as_u16(), 400);
        assert_eq!(RegistryError::NotFound.code().as_u16(), 404);
        assert_eq!(RegistryError::NotFound.code().as_str(), "NOT_FOUND");
    }
}
