//! Error types for vaultex

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the vaultex application
#[derive(Debug, Error)]
pub enum VaultexError {
    #[error("Vault root not found: {0}")]
    VaultNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to walk vault directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl VaultexError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            VaultexError::VaultNotFound(_) => 2,
            VaultexError::Config(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            VaultexError::VaultNotFound(path) => {
                format!(
                    "Vault root not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path for typos\n\
                    • The root must be an existing directory\n\
                    • Use '.' to export from the current directory",
                    path.display()
                )
            }
            VaultexError::Config(msg) => {
                if msg.contains(".vaultex.toml") {
                    format!(
                        "{}\n\n\
                        Valid keys: output (path), recursive (bool)\n\
                        Example:\n\
                        output = \"exports\"\n\
                        recursive = true",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using VaultexError
pub type Result<T> = std::result::Result<T, VaultexError>;
