//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use std::fmt;
use roombook::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// A booking rejection (room missing, full, conflicting window, or
    /// unknown reservation id).
    Rejected(LibError),

    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Data directory not found.
    NoDataDirectory,

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Booking rejection
    /// - 3: No data directory found
    /// - 4: Invalid arguments or malformed input
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Rejected(_) => 1,
            CliError::NoDataDirectory => 3,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Library(_) => 6,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Rejections show the collapsed user-facing line
            CliError::Rejected(e) => write!(f, "{}", e.user_message()),
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::NoDataDirectory => {
                write!(f, "Data directory not found (use --data-dir or run init)")
            }
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Rejected(e) | CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        if e.is_rejection() {
            return CliError::Rejected(e);
        }
        match e {
            LibError::MalformedInput { .. } | LibError::Validation { .. } => {
                CliError::InvalidArguments(e.to_string())
            }
            LibError::DataDirectoryNotFound { .. } => CliError::NoDataDirectory,
            LibError::Configuration(inner) => CliError::Config(inner.to_string()),
            LibError::Io(inner) => CliError::Io(inner),
            other => CliError::Library(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roombook::RoomNumber;

    #[test]
    fn test_rejection_exit_code_and_message() {
        let err: CliError = LibError::RoomFull {
            number: RoomNumber::try_from(103).unwrap(),
        }
        .into();

        assert_eq!(err.exit_code(), 1);
        assert_eq!(format!("{err}"), "Room is already booked or at capacity.");
    }

    #[test]
    fn test_malformed_input_maps_to_invalid_arguments() {
        let err: CliError = LibError::MalformedInput {
            field: "date".into(),
            value: "tomorrow".into(),
            reason: "bad".into(),
        }
        .into();

        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_io_exit_code() {
        let err: CliError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_data_dir_exit_code() {
        assert_eq!(CliError::NoDataDirectory.exit_code(), 3);
        assert_eq!(CliError::Config("bad".into()).exit_code(), 7);
    }
}
