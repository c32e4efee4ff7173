use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdaterError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error opening file: {path}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading file: {path}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing to file: {path}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8: {path}")]
    Encoding { path: String },

    #[error("Invalid copyright pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid year: {year}")]
    InvalidYear { year: i32 },
}

impl UpdaterError {
    pub fn file_open(path: &Path, source: std::io::Error) -> Self {
        UpdaterError::FileOpen {
            path: path.display().to_string(),
            source,
        }
    }

    /// Classifies a failed read. `InvalidData` from `read_to_string` means the
    /// bytes were not UTF-8, which is an encoding problem rather than IO.
    pub fn file_read(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::InvalidData {
            UpdaterError::Encoding {
                path: path.display().to_string(),
            }
        } else {
            UpdaterError::FileRead {
                path: path.display().to_string(),
                source,
            }
        }
    }

    pub fn file_write(path: &Path, source: std::io::Error) -> Self {
        UpdaterError::FileWrite {
            path: path.display().to_string(),
            source,
        }
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for UpdaterError {
    fn user_message(&self) -> String {
        match self {
            UpdaterError::FileOpen { path, source } => {
                format!("Error opening file: {}. {}", path, source)
            }
            UpdaterError::FileRead { path, source } => {
                format!("Error reading file: {}. {}", path, source)
            }
            UpdaterError::FileWrite { path, source } => {
                format!("Error writing to file: {}. {}", path, source)
            }
            UpdaterError::Encoding { path } => {
                format!("File is not valid UTF-8 text: {}", path)
            }
            UpdaterError::InvalidPattern(e) => {
                format!("Could not build copyright pattern: {}", e)
            }
            UpdaterError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            UpdaterError::InvalidYear { year } => {
                format!("Year {} is outside the supported range (1000-9999)", year)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            UpdaterError::FileOpen { .. } => Some(
                "Check that the path exists relative to the working directory and is readable.".to_string()
            ),
            UpdaterError::FileWrite { .. } => Some(
                "Ensure you have write permission for the file and its directory.".to_string()
            ),
            UpdaterError::Encoding { .. } => Some(
                "Only UTF-8 text files can be updated. Convert the file or leave it out of the list.".to_string()
            ),
            UpdaterError::Config { .. } => Some(
                "Check your configuration file syntax, or regenerate one with --generate-config.".to_string()
            ),
            UpdaterError::InvalidYear { .. } => Some(
                "Pass a four-digit year with --year, or omit it to use the current year.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for UpdaterError {
    fn from(error: toml::de::Error) -> Self {
        UpdaterError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, UpdaterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_user_friendly_messages() {
        let error = UpdaterError::file_open(
            Path::new("missing.cs"),
            Error::new(ErrorKind::NotFound, "not found"),
        );
        assert!(error.user_message().contains("Error opening file: missing.cs"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_invalid_data_becomes_encoding_error() {
        let error = UpdaterError::file_read(
            Path::new("latin1.txt"),
            Error::new(ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        );
        assert!(matches!(error, UpdaterError::Encoding { .. }));

        let error = UpdaterError::file_read(
            Path::new("locked.txt"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(error, UpdaterError::FileRead { .. }));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let error = UpdaterError::from(toml_error);
        assert!(matches!(error, UpdaterError::Config { .. }));
    }
}
