//! Errors for malformed coordinates and piece records.

use thiserror::Error;

/// Errors produced while parsing core types from external input.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid square: '{0}'")]
    InvalidSquare(String),

    #[error("invalid move: '{0}'")]
    InvalidMove(String),

    #[error("invalid piece record: {0}")]
    InvalidPieceRecord(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CoreError::InvalidSquare("z9".to_string());
        assert_eq!(format!("{}", err), "invalid square: 'z9'");

        let err = CoreError::InvalidMove("e2".to_string());
        assert!(format!("{}", err).contains("e2"));
    }

    #[test]
    fn from_json_error() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::InvalidPieceRecord(_)));
    }
}
